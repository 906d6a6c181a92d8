pub mod config;
pub mod domain;
pub mod prediction;
pub mod session;
pub mod telemetry;
pub mod utils;

pub use config::Settings;
pub use domain::{PropertyRecord, SmilesInput};
pub use prediction::{GeminiLLMClient, LLMClient, MockLLMClient, PredictionClient, PredictionError};
pub use session::{SessionController, SessionState};
