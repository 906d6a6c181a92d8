use crate::domain::SmilesInput;
use serde::{Deserialize, Serialize};

/// Aspirin anchor shown to the model, also a valid model answer.
pub const ASPIRIN_SMILES: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";

pub const ASPIRIN_EXAMPLE_JSON: &str = r#"{
  "molecularWeight": 180.158,
  "logP": 1.19,
  "hydrogenBondDonors": 1,
  "hydrogenBondAcceptors": 3,
  "polarSurfaceArea": 63.60,
  "rotatableBonds": 2,
  "canonicalSmiles": "CC(=O)OC1=CC=CC=C1C(=O)O",
  "formula": "C9H8O4",
  "formalCharge": 0
}"#;

/// Keys requested from the model with the JSON type announced for each.
pub const RESPONSE_SCHEMA: &[(&str, &str)] = &[
    ("molecularWeight", "number"),
    ("logP", "number"),
    ("hydrogenBondDonors", "integer"),
    ("hydrogenBondAcceptors", "integer"),
    ("polarSurfaceArea", "number"),
    ("rotatableBonds", "integer"),
    ("canonicalSmiles", "string"),
    ("formula", "string"),
    ("formalCharge", "integer"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub preamble: String,
    pub instructions: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        let preamble = concat!(
            "You are a computational chemistry assistant.\n",
            "Given the SMILES string: \"{smiles}\", predict the following molecular properties:\n",
            "- Molecular Weight (g/mol)\n",
            "- LogP (octanol-water partition coefficient, also known as XLogP3 or ALogP)\n",
            "- Number of Hydrogen Bond Donors\n",
            "- Number of Hydrogen Bond Acceptors\n",
            "- Topological Polar Surface Area (TPSA in Å²)\n",
            "- Number of Rotatable Bonds\n",
            "- Canonical SMILES (standardized representation)\n",
            "- Molecular Formula\n",
            "- Formal Charge"
        )
        .to_string();

        let keys: Vec<String> = RESPONSE_SCHEMA
            .iter()
            .map(|(key, kind)| format!("\"{}\" ({})", key, kind))
            .collect();

        let instructions = format!(
            concat!(
                "Please return the response strictly as a single JSON object with the following keys:\n",
                "{}\n\n",
                "If a property cannot be calculated or is not applicable for the given SMILES, use null for its value.\n",
                "Do not include any explanatory text, comments, or markdown formatting outside of the JSON object itself.\n\n",
                "Example for Aspirin ({}):\n",
                "{}"
            ),
            keys.join("\n"),
            ASPIRIN_SMILES,
            ASPIRIN_EXAMPLE_JSON
        );

        Self {
            preamble,
            instructions,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    template: PromptTemplate,
}

impl PromptBuilder {
    pub fn new(template: PromptTemplate) -> Self {
        Self { template }
    }

    pub fn build(&self, smiles: &SmilesInput) -> String {
        let preamble = self.template.preamble.replace("{smiles}", smiles.as_str());
        format!("{}\n\n{}", preamble, self.template.instructions)
    }
}
