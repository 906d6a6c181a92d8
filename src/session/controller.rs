use super::input::{read_smiles_file, InputError};
use super::state::SessionState;
use crate::domain::PropertyRecord;
use crate::prediction::{LLMClient, PredictionClient, PredictionError};
use std::path::Path;
use tracing::{debug, warn};

pub struct SessionController<C: LLMClient> {
    client: PredictionClient<C>,
    state: SessionState,
}

impl<C: LLMClient> SessionController<C> {
    pub fn new(client: PredictionClient<C>) -> Self {
        Self {
            client,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), InputError> {
        match read_smiles_file(path) {
            Ok(content) => {
                self.state.set_text(content);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "SMILES file not loaded");
                self.state.set_notice(err.to_string());
                Err(err)
            }
        }
    }

    pub fn submit(&mut self) -> Result<&PropertyRecord, PredictionError> {
        self.submit_with(|_| {})
    }

    pub fn submit_with(
        &mut self,
        mut observer: impl FnMut(&SessionState),
    ) -> Result<&PropertyRecord, PredictionError> {
        let smiles = match self.state.begin_submit() {
            Ok(smiles) => smiles,
            Err(err) => {
                observer(&self.state);
                return Err(err);
            }
        };
        debug!(%smiles, "submitting");
        observer(&self.state);

        let outcome = self.client.predict(&smiles);
        self.state.finish_submit(&outcome);
        observer(&self.state);

        match outcome {
            Ok(_) => self.state.record().ok_or(PredictionError::Transport),
            Err(err) => Err(err),
        }
    }
}
