use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Remote error: {message}")]
    Remote { message: String },

    #[error("Empty response: {message}")]
    EmptyResponse { message: String },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn empty_response(message: impl Into<String>) -> Self {
        Self::EmptyResponse {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Whether the error means the requested resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Space 'DEV' not found");
        assert_eq!(error.to_string(), "Not found: Space 'DEV' not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_remote_error() {
        let error = DomainError::remote("connection refused");
        assert_eq!(error.to_string(), "Remote error: connection refused");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_malformed_response_error() {
        let error = DomainError::malformed_response("missing field `key`");
        assert_eq!(
            error.to_string(),
            "Malformed response: missing field `key`"
        );
    }

    #[test]
    fn test_empty_response_is_not_not_found() {
        let error = DomainError::empty_response("space listing");
        assert!(!error.is_not_found());
    }
}
