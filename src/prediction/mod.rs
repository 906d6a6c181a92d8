mod error;
mod extract;
mod llm_client;
mod predictor;
mod prompt;
mod response;
mod validator;

pub use error::{classify_message, PredictionError};
pub use extract::{extract_json_object, ExtractionError};
pub use llm_client::{GeminiLLMClient, LLMClient, MockLLMClient};
pub use predictor::{PredictionClient, DEFAULT_TEMPERATURE};
pub use prompt::{
    PromptBuilder, PromptTemplate, ASPIRIN_EXAMPLE_JSON, ASPIRIN_SMILES, RESPONSE_SCHEMA,
};
pub use response::{GenerationRequest, LLMPropertyResponse};
pub use validator::{validate_response, ValidatedProperties};
