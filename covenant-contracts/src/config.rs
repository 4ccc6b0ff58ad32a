//! Configuration for contract checking

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ContractResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsConfig {
    /// Registry checks are skipped when false
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Character budget for evidence in violation messages (0 = unbounded)
    #[serde(default = "default_evidence_length")]
    pub evidence_length: usize,

    #[serde(default = "default_true")]
    pub log_violations: bool,

    /// Batches larger than this are verified in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            evidence_length: default_evidence_length(),
            log_violations: default_true(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_true() -> bool { true }
fn default_evidence_length() -> usize { covenant_core::bounded::DEFAULT_EVIDENCE_LENGTH }
fn default_parallel_threshold() -> usize { 64 }

impl ContractsConfig {
    /// Load configuration from a file, or use defaults when no path is given
    pub fn load(path: Option<&Path>) -> ContractResult<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(content: &str) -> ContractResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> ContractResult<String> {
        Ok(toml::to_string_pretty(self).map_err(anyhow::Error::from)?)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> ContractResult<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
