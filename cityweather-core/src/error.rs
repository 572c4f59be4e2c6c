use thiserror::Error;

/// Everything that can go wrong between asking for a forecast and rendering it.
///
/// Failures are always local to one card; none of them is fatal to the process.
#[derive(Debug, Error)]
pub enum Failure {
    /// Transport error. The request URL is stripped since it carries the API key.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Visual Crossing request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode forecast payload: {0}")]
    Decode(String),

    #[error("No icon mapped for condition '{0}'")]
    UnmappedCondition(String),

    #[error("Invalid forecast date '{0}'")]
    InvalidDate(String),

    #[error("Forecast task was interrupted: {0}")]
    Interrupted(String),
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        Failure::Network(err.without_url())
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        Failure::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Failure {
    fn from(err: tokio::task::JoinError) -> Self {
        Failure::Interrupted(err.to_string())
    }
}

impl Failure {
    /// Short, non-technical text for the stale-card banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Failure::Network(_) => "Unable to reach the weather service.",
            Failure::Status { status, .. } if *status == 401 => "The API key was rejected.",
            Failure::Status { .. } => "The weather service returned an error.",
            Failure::Decode(_) => "Received an unexpected forecast format.",
            Failure::UnmappedCondition(_) => "Unknown weather condition.",
            Failure::InvalidDate(_) => "Forecast contained an invalid date.",
            Failure::Interrupted(_) => "The forecast request was interrupted.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_decode_failures() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let failure = Failure::from(err);
        assert!(matches!(failure, Failure::Decode(_)));
    }

    #[test]
    fn unauthorized_status_has_key_hint() {
        let failure = Failure::Status {
            status: 401,
            body: String::new(),
        };
        assert_eq!(failure.user_message(), "The API key was rejected.");

        let failure = Failure::Status {
            status: 500,
            body: String::new(),
        };
        let message = failure.user_message();
        assert_eq!(message, "The weather service returned an error.");
    }
}
