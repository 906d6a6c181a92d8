use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f32,
    pub response_mime_type: String,
}

impl GenerationRequest {
    pub fn json(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            response_mime_type: JSON_MIME_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LLMPropertyResponse {
    #[serde(default)]
    pub molecular_weight: Option<Value>,
    #[serde(default)]
    pub log_p: Option<Value>,
    #[serde(default)]
    pub hydrogen_bond_donors: Option<Value>,
    #[serde(default)]
    pub hydrogen_bond_acceptors: Option<Value>,
    #[serde(default)]
    pub polar_surface_area: Option<Value>,
    #[serde(default)]
    pub rotatable_bonds: Option<Value>,
    #[serde(default)]
    pub canonical_smiles: Option<Value>,
    #[serde(default)]
    pub formula: Option<Value>,
    #[serde(default)]
    pub formal_charge: Option<Value>,
}
