//! Session-identifier extraction from a query string.

/// Extracts the session identifier from a query string.
///
/// Accepts the string with or without its leading `?`. The `id` parameter
/// wins; `guid` is accepted as a fallback spelling. Returns `None` when
/// neither key is present or the value is empty, in which case the caller
/// should route to the landing state without touching any store.
pub fn session_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut guid = None;
    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some(kv) => kv,
            None => continue,
        };
        if value.is_empty() {
            continue;
        }
        match key {
            "id" => return Some(value.to_string()),
            "guid" if guid.is_none() => guid = Some(value.to_string()),
            _ => {}
        }
    }
    guid
}
