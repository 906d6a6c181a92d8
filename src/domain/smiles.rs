use crate::prediction::PredictionError;
use std::fmt;

/// A SMILES string that is non-empty after trimming.
///
/// The content is opaque: no grammar check happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmilesInput(String);

impl SmilesInput {
    pub fn parse(raw: &str) -> Result<Self, PredictionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PredictionError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SmilesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let smiles = SmilesInput::parse("  CCO\n").unwrap();
        assert_eq!(smiles.as_str(), "CCO");
    }

    #[test]
    fn rejects_blank_text() {
        assert!(matches!(
            SmilesInput::parse(" \t\n"),
            Err(PredictionError::EmptyInput)
        ));
        assert!(matches!(SmilesInput::parse(""), Err(PredictionError::EmptyInput)));
    }
}
