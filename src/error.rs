// Errors reported by the container-runtime collaborator

use thiserror::Error;

/// Failure of a single runtime round trip (list, stats, logs or a lifecycle command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Runtime unreachable or the request failed in transport.
    #[error("connection error: {0}")]
    Connection(String),
    /// Container vanished between the poll and the request.
    #[error("container not found: {0}")]
    NotFound(String),
    /// Command not valid for the container's current lifecycle state.
    #[error("state conflict: {0}")]
    StateConflict(String),
    /// Malformed stats or log payload.
    #[error("decode error: {0}")]
    Decode(String),
}

impl RuntimeError {
    /// Classify a bollard error into the dashboard taxonomy.
    pub fn from_bollard(err: bollard::errors::Error) -> Self {
        use bollard::errors::Error as E;
        match err {
            E::DockerResponseServerError {
                status_code,
                message,
            } => match status_code {
                404 => RuntimeError::NotFound(message),
                304 | 409 => RuntimeError::StateConflict(message),
                _ => RuntimeError::Connection(format!("HTTP {}: {}", status_code, message)),
            },
            e @ E::JsonSerdeError { .. } => RuntimeError::Decode(e.to_string()),
            other => RuntimeError::Connection(other.to_string()),
        }
    }
}

impl From<bollard::errors::Error> for RuntimeError {
    fn from(err: bollard::errors::Error) -> Self {
        Self::from_bollard(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error(status_code: u16) -> bollard::errors::Error {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn not_found_maps_from_404() {
        assert_eq!(
            RuntimeError::from(server_error(404)),
            RuntimeError::NotFound("boom".into())
        );
    }

    #[test]
    fn conflicts_map_from_304_and_409() {
        assert!(matches!(
            RuntimeError::from(server_error(304)),
            RuntimeError::StateConflict(_)
        ));
        assert!(matches!(
            RuntimeError::from(server_error(409)),
            RuntimeError::StateConflict(_)
        ));
    }

    #[test]
    fn other_statuses_are_connection_errors() {
        let err = RuntimeError::from(server_error(500));
        assert_eq!(err, RuntimeError::Connection("HTTP 500: boom".into()));
    }

    #[test]
    fn display_includes_kind() {
        let err = RuntimeError::NotFound("no such container: abc".into());
        assert_eq!(err.to_string(), "container not found: no such container: abc");
    }
}
