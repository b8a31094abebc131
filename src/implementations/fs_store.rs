use std::fs;
use std::path::Path;

use chrono::Utc;
use log::info;

use crate::config::StorageConfig;
use crate::errors::{PipelineError, PipelineResult};
use crate::models::artifact::StoredArtifact;
use crate::models::contract::GeneratedContract;
use crate::models::validation::AnalysisReport;
use crate::traits::artifact_store::ArtifactStore;

/// Header block prefixed to every stored contract file, whether or not the
/// model produced one of its own.
pub fn contract_header() -> String {
    format!(
        "// SPDX-License-Identifier: MIT\n// Generated by vulnsmith v{} for security research; not for deployment.\n\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Implementation of the ArtifactStore trait that writes the corpus into a
/// directory tree segmented by classification:
/// `<root>/<complexity>/<vulnerable|clean>/<index>.<ext>`.
pub struct FsArtifactStore {
    config: StorageConfig,
}

impl FsArtifactStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Next free sequential index in `dir`: one past the highest
    /// `<integer>.<ext>` name already present. Names that do not parse as an
    /// integer are ignored.
    pub(crate) fn next_index(dir: &Path) -> PipelineResult<u64> {
        let mut max_index: Option<u64> = None;

        let entries = fs::read_dir(dir).map_err(|e| {
            PipelineError::Storage(format!("failed to list {}: {}", dir.display(), e))
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                PipelineError::Storage(format!("failed to list {}: {}", dir.display(), e))
            })?;
            let path = entry.path();
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(n) = stem.parse::<u64>() {
                    max_index = Some(max_index.map_or(n, |m| m.max(n)));
                }
            }
        }

        Ok(max_index.map_or(0, |m| m + 1))
    }

    fn write_file(path: &Path, contents: &str) -> PipelineResult<()> {
        fs::write(path, contents).map_err(|e| {
            PipelineError::Storage(format!("failed to write {}: {}", path.display(), e))
        })
    }

    fn create_dir(path: &Path) -> PipelineResult<()> {
        // create_dir_all is idempotent; a pre-existing directory is fine.
        fs::create_dir_all(path).map_err(|e| {
            PipelineError::Storage(format!("failed to create {}: {}", path.display(), e))
        })
    }
}

impl ArtifactStore for FsArtifactStore {
    fn save(
        &self,
        contract: &GeneratedContract,
        report: &AnalysisReport,
    ) -> PipelineResult<StoredArtifact> {
        let classification = &contract.classification;
        let status_segment = if report.issues_found {
            "vulnerable"
        } else {
            "clean"
        };

        let contract_dir = self
            .config
            .contracts_dir
            .join(classification.complexity.as_str())
            .join(status_segment);
        let report_dir = self
            .config
            .reports_dir
            .join(classification.complexity.as_str())
            .join(status_segment);

        Self::create_dir(&contract_dir)?;
        Self::create_dir(&report_dir)?;

        let index = Self::next_index(&contract_dir)?;
        let contract_path = contract_dir.join(format!("{}.sol", index));
        let report_path = report_dir.join(format!("{}_slither_report.txt", index));
        let labels_path = report_dir.join(format!("{}_labels.json", index));

        let mut body = contract_header();
        body.push_str(&contract.source_text);
        Self::write_file(&contract_path, &body)?;
        Self::write_file(&report_path, &report.raw_text)?;

        let labels = serde_json::json!({
            "complexity": classification.complexity.as_str(),
            "vulnerabilities": &classification.vulnerabilities,
            "issues_found": report.issues_found,
            "created_at": Utc::now().to_rfc3339(),
        });
        let labels_str = serde_json::to_string_pretty(&labels)
            .map_err(|e| PipelineError::Storage(format!("failed to serialize labels: {}", e)))?;
        Self::write_file(&labels_path, &labels_str)?;

        info!("Stored contract at {}", contract_path.display());
        Ok(StoredArtifact {
            contract_path,
            report_path,
            labels_path,
            classification: classification.clone(),
        })
    }
}
