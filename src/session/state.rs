use crate::domain::{PropertyRecord, SmilesInput};
use crate::prediction::PredictionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Blank input.
    Idle,
    Ready,
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    text: String,
    submitting: bool,
    record: Option<PropertyRecord>,
    error: Option<String>,
    notice: Option<String>,
    started: u64,
    completed: u64,
}

impl SessionState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            Phase::Submitting
        } else if self.text.trim().is_empty() {
            Phase::Idle
        } else {
            Phase::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.submitting
    }

    pub fn record(&self) -> Option<&PropertyRecord> {
        self.record.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn submissions_started(&self) -> u64 {
        self.started
    }

    pub fn submissions_completed(&self) -> u64 {
        self.completed
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.notice = None;
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Idle/Ready -> Submitting. Blank text records the empty-input error and
    /// leaves the phase unchanged.
    pub(crate) fn begin_submit(&mut self) -> Result<SmilesInput, PredictionError> {
        if self.submitting {
            return Err(PredictionError::Busy);
        }
        let smiles = match SmilesInput::parse(&self.text) {
            Ok(smiles) => smiles,
            Err(err) => {
                self.record = None;
                self.error = Some(err.user_message());
                return Err(err);
            }
        };
        self.submitting = true;
        self.started += 1;
        self.record = None;
        self.error = None;
        Ok(smiles)
    }

    /// Submitting -> Ready, whatever the outcome. The record is replaced, never merged.
    pub(crate) fn finish_submit(&mut self, outcome: &Result<PropertyRecord, PredictionError>) {
        match outcome {
            Ok(record) => {
                self.record = Some(record.clone());
                self.error = None;
            }
            Err(err) => {
                self.record = None;
                self.error = Some(err.user_message());
            }
        }
        self.submitting = false;
        self.completed += 1;
    }
}
