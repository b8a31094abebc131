use std::path::PathBuf;

use crate::models::classification::ContractClassification;

/// Locations of one persisted corpus sample. The report and label files are
/// derivable from the contract path by suffix substitution.
#[derive(Debug, Clone)]
pub struct StoredArtifact {
    pub contract_path: PathBuf,
    pub report_path: PathBuf,
    pub labels_path: PathBuf,
    pub classification: ContractClassification,
}
