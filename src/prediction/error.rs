use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "SMILES string cannot be empty.";
pub const EXTRACTION_MESSAGE: &str =
    "AI response was not a valid JSON object. Please check the SMILES string or try again.";
pub const CREDENTIAL_MESSAGE: &str =
    "Invalid or missing API Key. Please ensure it is correctly configured in the environment.";
pub const SAFETY_MESSAGE: &str = "The request was blocked due to safety settings. Please modify your input or try a different SMILES string.";
pub const QUOTA_MESSAGE: &str = "API quota exceeded. Please check your Gemini project quotas.";
pub const BUSY_MESSAGE: &str = "A prediction is already in progress.";
pub const GENERIC_MESSAGE: &str =
    "Failed to predict properties. Please check the SMILES string and try again.";

/// Failures of a single prediction, each carrying one user-facing message.
///
/// Technical detail stays in the logs; `Display` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
    #[error("{}", EXTRACTION_MESSAGE)]
    Extraction,
    #[error("Details: {0}")]
    Parse(String),
    #[error("{}", CREDENTIAL_MESSAGE)]
    Credential,
    #[error("{}", SAFETY_MESSAGE)]
    SafetyBlocked,
    #[error("{}", QUOTA_MESSAGE)]
    QuotaExceeded,
    #[error("{}", GENERIC_MESSAGE)]
    Transport,
    #[error("{}", BUSY_MESSAGE)]
    Busy,
}

impl PredictionError {
    /// Maps a failure of the external call onto the taxonomy by inspecting the
    /// whole error chain for the markers the API puts in its messages.
    pub fn from_transport(err: &anyhow::Error) -> Self {
        classify_message(&format!("{:#}", err))
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub fn classify_message(message: &str) -> PredictionError {
    if message.to_lowercase().contains("api key") {
        PredictionError::Credential
    } else if message.contains("Candidate") && message.contains("SAFETY") {
        PredictionError::SafetyBlocked
    } else if message.contains("Quota") {
        PredictionError::QuotaExceeded
    } else {
        PredictionError::Transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn api_key_marker_is_case_insensitive() {
        assert_eq!(
            classify_message("API key not valid. Please pass a valid API key."),
            PredictionError::Credential
        );
        assert_eq!(
            classify_message("missing api KEY"),
            PredictionError::Credential
        );
    }

    #[test]
    fn safety_needs_both_markers() {
        assert_eq!(
            classify_message("Candidate was blocked due to SAFETY"),
            PredictionError::SafetyBlocked
        );
        assert_eq!(classify_message("SAFETY"), PredictionError::Transport);
    }

    #[test]
    fn quota_and_fallback() {
        assert_eq!(
            classify_message("Quota exceeded for quota metric"),
            PredictionError::QuotaExceeded
        );
        assert_eq!(
            classify_message("connection reset by peer"),
            PredictionError::Transport
        );
    }

    #[test]
    fn inspects_the_whole_context_chain() {
        let err = Err::<(), _>(anyhow!("400 Bad Request: API key not valid"))
            .context("Gemini call failed")
            .unwrap_err();
        assert_eq!(
            PredictionError::from_transport(&err),
            PredictionError::Credential
        );
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            PredictionError::EmptyInput.user_message(),
            "SMILES string cannot be empty."
        );
        assert_eq!(
            PredictionError::Parse("expected value at line 1 column 1".into()).user_message(),
            "Details: expected value at line 1 column 1"
        );
        assert_eq!(PredictionError::Credential.user_message(), CREDENTIAL_MESSAGE);
    }
}
