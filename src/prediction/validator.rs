use crate::domain::PropertyRecord;
use serde_json::Value;
use tracing::warn;

use super::response::LLMPropertyResponse;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProperties {
    pub record: PropertyRecord,
    /// Keys present with a value of the wrong type; they end up `None`.
    pub rejected_fields: Vec<&'static str>,
}

struct FieldValidator {
    rejected: Vec<&'static str>,
}

impl FieldValidator {
    fn number(&mut self, key: &'static str, value: Option<Value>) -> Option<f64> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => self.reject(key, &other),
        }
    }

    fn count(&mut self, key: &'static str, value: Option<Value>) -> Option<i64> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(count) => Some(count),
                None => match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(f as i64),
                    _ => self.reject(key, &Value::Number(n)),
                },
            },
            Some(other) => self.reject(key, &other),
        }
    }

    fn text(&mut self, key: &'static str, value: Option<Value>) -> Option<String> {
        match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => self.reject(key, &other),
        }
    }

    fn reject<T>(&mut self, key: &'static str, value: &Value) -> Option<T> {
        warn!(field = key, value = %value, "unexpected value type from model, field dropped");
        self.rejected.push(key);
        None
    }
}

/// Turns the untyped model answer into a [`PropertyRecord`].
///
/// Fields are checked one by one; a bad field is dropped without touching
/// the others. Integral floats such as `2.0` are accepted for counts.
pub fn validate_response(response: LLMPropertyResponse) -> ValidatedProperties {
    let mut fields = FieldValidator {
        rejected: Vec::new(),
    };

    let record = PropertyRecord {
        molecular_weight: fields.number("molecularWeight", response.molecular_weight),
        log_p: fields.number("logP", response.log_p),
        hydrogen_bond_donors: fields.count("hydrogenBondDonors", response.hydrogen_bond_donors),
        hydrogen_bond_acceptors: fields
            .count("hydrogenBondAcceptors", response.hydrogen_bond_acceptors),
        polar_surface_area: fields.number("polarSurfaceArea", response.polar_surface_area),
        rotatable_bonds: fields.count("rotatableBonds", response.rotatable_bonds),
        canonical_smiles: fields.text("canonicalSmiles", response.canonical_smiles),
        formula: fields.text("formula", response.formula),
        formal_charge: fields.count("formalCharge", response.formal_charge),
    };

    ValidatedProperties {
        record,
        rejected_fields: fields.rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(json: &str) -> ValidatedProperties {
        validate_response(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn keeps_values_exactly() {
        let validated = validate(
            r#"{"molecularWeight": 46.069, "logP": -0.0014, "hydrogenBondDonors": 1,
                "hydrogenBondAcceptors": 1, "polarSurfaceArea": 20.23, "rotatableBonds": 0,
                "canonicalSmiles": "CCO", "formula": "C2H6O", "formalCharge": 0}"#,
        );
        assert!(validated.rejected_fields.is_empty());
        let record = validated.record;
        assert_eq!(record.molecular_weight, Some(46.069));
        assert_eq!(record.log_p, Some(-0.0014));
        assert_eq!(record.rotatable_bonds, Some(0));
        assert_eq!(record.formula.as_deref(), Some("C2H6O"));
    }

    #[test]
    fn nulls_and_missing_keys_stay_none() {
        let record = validate(r#"{"molecularWeight": null, "formula": "CH4"}"#).record;
        assert_eq!(record.molecular_weight, None);
        assert_eq!(record.formal_charge, None);
        assert_eq!(record.formula.as_deref(), Some("CH4"));
    }

    #[test]
    fn wrong_type_only_drops_that_field() {
        let validated = validate(
            r#"{"molecularWeight": "heavy", "hydrogenBondDonors": 2.5, "rotatableBonds": 3.0,
                "formula": 12, "logP": 0.5}"#,
        );
        assert_eq!(
            validated.rejected_fields,
            vec!["molecularWeight", "hydrogenBondDonors", "formula"]
        );
        assert_eq!(validated.record.rotatable_bonds, Some(3));
        assert_eq!(validated.record.log_p, Some(0.5));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record = validate(r#"{"boilingPoint": 78.37, "formalCharge": -1}"#).record;
        assert_eq!(record.formal_charge, Some(-1));
    }
}
