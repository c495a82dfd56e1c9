// Error types shared across the upload workflow

/// Message shown when the upload request never got a response.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to connect to server";

/// Message shown when the service failed without a usable `detail`.
pub const GENERIC_UPLOAD_FAILURE: &str = "Upload failed";

/// Message shown when a 2xx body is not a profiling report.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Unexpected response from server";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Declared media type outside the accepted set. No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-success status.
    #[error("{0}")]
    Service(String),

    /// No response was received (connection refused, DNS, reset, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Success status but the body did not match the report shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// The single inline message surfaced to the user for this failure.
    ///
    /// Transport and malformed-response causes are kept out of the UI and only
    /// logged; validation and service messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(reason) => reason.clone(),
            AppError::Service(detail) => detail.clone(),
            AppError::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
            AppError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
            AppError::Io(e) => e.to_string(),
            AppError::Config(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_transport_cause() {
        let err = AppError::Transport("tcp connect error: Connection refused".to_string());
        assert_eq!(err.user_message(), "Failed to connect to server");
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_user_message_passes_service_detail_through() {
        let err = AppError::Service("disk full".to_string());
        assert_eq!(err.user_message(), "disk full");
    }

    #[test]
    fn test_malformed_response_is_reported_generically() {
        let err = AppError::MalformedResponse("missing field `analysis`".to_string());
        assert_eq!(err.user_message(), "Unexpected response from server");
    }
}
