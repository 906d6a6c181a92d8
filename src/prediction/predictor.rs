use super::error::PredictionError;
use super::extract::extract_json_object;
use super::llm_client::LLMClient;
use super::prompt::{PromptBuilder, PromptTemplate};
use super::response::{GenerationRequest, LLMPropertyResponse};
use super::validator::validate_response;
use crate::domain::{PropertyRecord, SmilesInput};
use crate::utils::hash_text;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

pub const DEFAULT_TEMPERATURE: f32 = 0.1;

pub struct PredictionClient<C: LLMClient> {
    llm: Arc<C>,
    prompt_builder: PromptBuilder,
    temperature: f32,
}

impl<C: LLMClient> PredictionClient<C> {
    pub fn new(llm: Arc<C>, template: PromptTemplate) -> Self {
        Self {
            llm,
            prompt_builder: PromptBuilder::new(template),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn predict(&self, smiles: &SmilesInput) -> Result<PropertyRecord, PredictionError> {
        let prompt = self.prompt_builder.build(smiles);
        let prompt_hash = hash_text(&prompt);
        let request = GenerationRequest::json(prompt, self.temperature);

        let started = Instant::now();
        let raw = self.llm.generate(&request).map_err(|err| {
            error!(error = %format!("{:#}", err), %smiles, "model call failed");
            PredictionError::from_transport(&err)
        })?;

        let json = extract_json_object(&raw).map_err(|err| {
            error!(error = %err, raw = %raw, "no JSON object in model response");
            PredictionError::Extraction
        })?;

        let response: LLMPropertyResponse = serde_json::from_str(json).map_err(|err| {
            error!(error = %err, json = %json, "model response is not valid JSON");
            PredictionError::Parse(err.to_string())
        })?;

        let validated = validate_response(response);
        if !validated.rejected_fields.is_empty() {
            warn!(fields = ?validated.rejected_fields, "some predicted fields were dropped");
        }

        info!(
            %smiles,
            prompt_hash = %&prompt_hash[..12],
            missing = validated.record.missing_fields(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "prediction complete"
        );
        Ok(validated.record)
    }
}
