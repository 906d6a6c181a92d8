use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted molecular properties for one SMILES input.
///
/// Every field is independently optional: a missing or unusable value leaves
/// that field `None` and never affects its siblings. Keys serialize in the
/// camelCase form the model is asked to produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub molecular_weight: Option<f64>,
    pub log_p: Option<f64>,
    pub hydrogen_bond_donors: Option<i64>,
    pub hydrogen_bond_acceptors: Option<i64>,
    pub polar_surface_area: Option<f64>,
    pub rotatable_bonds: Option<i64>,
    pub canonical_smiles: Option<String>,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub formal_charge: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    Number(f64),
    Count(i64),
    Text(&'a str),
    Missing,
}

impl PropertyValue<'_> {
    pub fn is_missing(&self) -> bool {
        match self {
            PropertyValue::Missing => true,
            PropertyValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(value) => write!(f, "{}", value),
            PropertyValue::Count(value) => write!(f, "{}", value),
            PropertyValue::Text(text) => write!(f, "{}", text),
            PropertyValue::Missing => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyEntry<'a> {
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub value: PropertyValue<'a>,
}

impl PropertyRecord {
    pub fn entries(&self) -> [PropertyEntry<'_>; 9] {
        [
            entry("Canonical SMILES", None, text(&self.canonical_smiles)),
            entry("Molecular Formula", None, text(&self.formula)),
            entry("Molecular Weight", Some("g/mol"), number(self.molecular_weight)),
            entry("LogP", None, number(self.log_p)),
            entry("H-Bond Donors", None, count(self.hydrogen_bond_donors)),
            entry("H-Bond Acceptors", None, count(self.hydrogen_bond_acceptors)),
            entry("Polar Surface Area", Some("Å²"), number(self.polar_surface_area)),
            entry("Rotatable Bonds", None, count(self.rotatable_bonds)),
            entry("Formal Charge", None, count(self.formal_charge)),
        ]
    }

    pub fn missing_fields(&self) -> usize {
        self.entries()
            .iter()
            .filter(|entry| entry.value.is_missing())
            .count()
    }
}

fn entry<'a>(
    label: &'static str,
    unit: Option<&'static str>,
    value: PropertyValue<'a>,
) -> PropertyEntry<'a> {
    PropertyEntry { label, unit, value }
}

fn number(value: Option<f64>) -> PropertyValue<'static> {
    value.map_or(PropertyValue::Missing, PropertyValue::Number)
}

fn count(value: Option<i64>) -> PropertyValue<'static> {
    value.map_or(PropertyValue::Missing, PropertyValue::Count)
}

fn text(value: &Option<String>) -> PropertyValue<'_> {
    value
        .as_deref()
        .map_or(PropertyValue::Missing, PropertyValue::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys_and_keeps_nulls() {
        let record = PropertyRecord {
            log_p: Some(1.19),
            hydrogen_bond_donors: Some(1),
            ..PropertyRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["logP"], serde_json::json!(1.19));
        assert_eq!(value["hydrogenBondDonors"], serde_json::json!(1));
        assert!(value["canonicalSmiles"].is_null());
        assert!(value["formalCharge"].is_null());
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let record = PropertyRecord {
            formula: Some("  ".to_string()),
            canonical_smiles: Some("CCO".to_string()),
            ..PropertyRecord::default()
        };
        let entries = record.entries();
        assert!(!entries[0].value.is_missing());
        assert!(entries[1].value.is_missing());
        assert_eq!(record.missing_fields(), 8);
    }
}
