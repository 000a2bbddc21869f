//! Top-level application state machine.
//!
//! The viewer is session-scoped: on startup the query string either names a
//! session, which is resolved through a [`SessionStore`], or it does not, in
//! which case the app lands on the home state without touching any store.

use crate::error::SessionError;
use crate::query::session_id_from_query;
use crate::record::SessionImageSet;
use crate::store::SessionStore;

/// The routes the viewer can be in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Resolution is in flight.
    Loading,
    /// No session identifier, or the identifier resolved to nothing.
    Home,
    /// A resolved session being displayed.
    Session(SessionImageSet),
    /// Resolution failed with a backend error.
    Error(String),
}

/// The application shell: current route plus the identifier it was
/// resolved under.
#[derive(Debug, Clone)]
pub struct App {
    state: AppState,
    session_id: Option<String>,
}

impl App {
    /// Routes from a raw query string, resolving through `store` only when
    /// the query names a session.
    pub fn from_query<S: SessionStore>(query: &str, store: &S) -> App {
        match session_id_from_query(query) {
            None => App {
                state: AppState::Home,
                session_id: None,
            },
            Some(id) => {
                let mut app = App {
                    state: AppState::Loading,
                    session_id: Some(id.clone()),
                };
                app.load_session(&id, store);
                app
            }
        }
    }

    /// Resolves `id` through `store` and transitions accordingly: a found
    /// session displays, an unknown one routes home, a backend failure
    /// routes to the error state.
    pub fn load_session<S: SessionStore>(&mut self, id: &str, store: &S) {
        self.session_id = Some(id.to_string());
        self.state = AppState::Loading;
        self.state = match store.resolve(id) {
            Ok(Some(set)) => AppState::Session(set),
            Ok(None) => AppState::Home,
            Err(err) => AppState::Error(describe(&err)),
        };
    }

    /// Drops the current session, returning to the landing state.
    pub fn back_to_home(&mut self) {
        self.state = AppState::Home;
        self.session_id = None;
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn session(&self) -> Option<&SessionImageSet> {
        match &self.state {
            AppState::Session(set) => Some(set),
            _ => None,
        }
    }
}

fn describe(err: &SessionError) -> String {
    format!("failed to load session: {err}")
}
