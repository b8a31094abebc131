use crate::models::classification::ContractClassification;

/// A contract returned by the generation service, paired with the
/// classification it was generated for. A failed generation is an explicit
/// error from the generator, never an empty `source_text`.
#[derive(Debug, Clone)]
pub struct GeneratedContract {
    pub source_text: String,
    pub classification: ContractClassification,
}

impl GeneratedContract {
    pub fn new(source_text: String, classification: ContractClassification) -> Self {
        Self {
            source_text,
            classification,
        }
    }
}
