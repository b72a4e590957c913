//! FDC client errors
//!
//! Every failure mode of a single upstream call. All variants are terminal
//! for that invocation: handlers render them as text and continue.

use thiserror::Error;

/// Errors from the FoodData Central client
#[derive(Debug, Error)]
pub enum FdcError {
    /// No credential configured; the request was never issued
    #[error("API key not set. Provide FDC_API_KEY in the environment.")]
    MissingApiKey,

    /// Upstream responded with a non-success status code
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// DNS, connection, or timeout failure before a response arrived
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response arrived but the body was not the expected JSON shape
    #[error("Unexpected response format: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        let msg = FdcError::MissingApiKey.to_string();
        assert!(msg.contains("API key not set"));
    }

    #[test]
    fn test_status_message_embeds_code_and_body() {
        let err = FdcError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }
}
