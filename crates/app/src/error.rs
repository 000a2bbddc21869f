//! Error types for session resolution.

use thiserror::Error;

/// Errors produced while resolving a session to its image set.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store could not be read.
    #[error("session store i/o error: {0}")]
    Io(String),

    /// Stored session data could not be interpreted.
    #[error("invalid session data: {0}")]
    Parse(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_with_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err = SessionError::from(io);
        let msg = format!("{err}");
        assert!(msg.contains("locked"), "missing source message in: {msg}");
    }

    #[test]
    fn session_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SessionError>();
    }
}
