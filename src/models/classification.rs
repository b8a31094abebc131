use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{PipelineError, PipelineResult};

/// Structural complexity requested from the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The label assigned to one pipeline iteration: a complexity level and the
/// set of vulnerability tags the generated contract is expected to contain.
/// Immutable once created; a fresh one is sampled per iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractClassification {
    pub complexity: Complexity,
    /// 1 to 5 unique tags drawn from the catalog, in draw order
    pub vulnerabilities: Vec<String>,
}

impl ContractClassification {
    /// Build a classification, rejecting tag lists the pipeline never
    /// produces: empty, oversized, or containing duplicates.
    pub fn new(complexity: Complexity, vulnerabilities: Vec<String>) -> PipelineResult<Self> {
        if vulnerabilities.is_empty() {
            return Err(PipelineError::InvalidInput(
                "classification requires at least one vulnerability tag".to_string(),
            ));
        }
        if vulnerabilities.len() > crate::catalog::MAX_TAGS_PER_CONTRACT {
            return Err(PipelineError::InvalidInput(format!(
                "classification carries {} tags, maximum is {}",
                vulnerabilities.len(),
                crate::catalog::MAX_TAGS_PER_CONTRACT
            )));
        }
        for (i, tag) in vulnerabilities.iter().enumerate() {
            if vulnerabilities[..i].contains(tag) {
                return Err(PipelineError::InvalidInput(format!(
                    "duplicate vulnerability tag: {}",
                    tag
                )));
            }
        }

        Ok(Self {
            complexity,
            vulnerabilities,
        })
    }

    /// Comma-joined tag list as it appears in generation prompts and logs
    pub fn joined_tags(&self) -> String {
        self.vulnerabilities.join(", ")
    }
}

impl fmt::Display for ContractClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.complexity, self.joined_tags())
    }
}
