//! Contract-related error types

use thiserror::Error;

use crate::violation::ObligationViolation;

/// Main contract error type
#[derive(Error, Debug)]
pub enum ContractError {
    /// A call broke one obligation
    #[error("Contract violation: {0}")]
    Violation(#[from] ObligationViolation),

    /// A call broke several obligations
    #[error("{} contract violations: {}", .0.len(), summarize(.0))]
    Violations(Vec<ObligationViolation>),

    /// Parameter position outside the 63 a selector can address
    #[error("Invalid parameter position: {0}")]
    InvalidParameter(usize),

    /// Error raised while building filters
    #[error(transparent)]
    Core(#[from] covenant_core::Error),

    /// Malformed configuration file
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ContractError {
    /// Every violation carried by this error, if any
    pub fn violations(&self) -> Vec<&ObligationViolation> {
        match self {
            ContractError::Violation(violation) => vec![violation],
            ContractError::Violations(violations) => violations.iter().collect(),
            _ => Vec::new(),
        }
    }
}

fn summarize(violations: &[ObligationViolation]) -> String {
    violations
        .iter()
        .map(|violation| violation.message())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for contract operations
pub type ContractResult<T> = Result<T, ContractError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
