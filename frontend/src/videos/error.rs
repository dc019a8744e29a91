use thiserror::Error;

pub const FETCH_FAILED: &str = "Failed to fetch videos";
pub const GENERIC_ERROR: &str = "An error occurred";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{}", FETCH_FAILED)]
    Status(u16),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Text shown in place of the grid.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            // The JS error name ("TypeError") is noise for the user.
            gloo_net::Error::JsError(js) => Self::Network(js.message),
            gloo_net::Error::SerdeError(e) => Self::Parse(e),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_failures_use_generic_message() {
        assert_eq!(FetchError::Status(500).user_message(), FETCH_FAILED);
        assert_eq!(FetchError::Status(404).user_message(), FETCH_FAILED);
    }

    #[test]
    fn network_failures_keep_their_message() {
        let error = FetchError::Network("network down".to_string());
        assert_eq!(error.user_message(), "network down");
    }

    #[test]
    fn empty_messages_fall_back() {
        assert_eq!(FetchError::Network(String::new()).user_message(), GENERIC_ERROR);
        assert_eq!(FetchError::Network("  ".to_string()).user_message(), GENERIC_ERROR);
    }

    #[test]
    fn parse_failures_report_serde_message() {
        let error: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(error, FetchError::Parse(_)));
        assert!(!error.user_message().is_empty());
    }
}
