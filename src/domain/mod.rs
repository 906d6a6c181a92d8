mod properties;
mod smiles;

pub use properties::{PropertyEntry, PropertyRecord, PropertyValue};
pub use smiles::SmilesInput;
