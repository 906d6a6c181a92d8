//! Runtime settings, read from the environment (and `.env`) then overridden
//! by command-line flags.

use crate::prediction::DEFAULT_TEMPERATURE;
use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "ALCHEMIA_MODEL";
pub const ENDPOINT_VAR: &str = "ALCHEMIA_ENDPOINT";
pub const TEMPERATURE_VAR: &str = "ALCHEMIA_TEMPERATURE";
pub const TIMEOUT_VAR: &str = "ALCHEMIA_TIMEOUT_SECS";

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
});

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// The API key is not checked here; the client checks it on construction.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        settings.api_key = API_KEY_VARS.iter().find_map(|name| non_empty(*name));
        if let Some(model) = non_empty(MODEL_VAR) {
            settings.model = model;
        }
        if let Some(endpoint) = non_empty(ENDPOINT_VAR) {
            settings.endpoint = endpoint;
        }
        if let Some(raw) = non_empty(TEMPERATURE_VAR) {
            let temperature = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a number: {}", TEMPERATURE_VAR, raw))?;
            settings = settings.with_temperature(temperature)?;
        }
        if let Some(raw) = non_empty(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a whole number: {}", TIMEOUT_VAR, raw))?;
            settings.timeout = Duration::from_secs(secs.max(1));
        }
        Ok(settings)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Result<Self> {
        if !(0.0..=2.0).contains(&temperature) {
            bail!("temperature must be between 0.0 and 2.0, got {}", temperature);
        }
        self.temperature = temperature;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
