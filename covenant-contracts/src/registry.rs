//! Obligation registry
//!
//! Holds the obligations declared for each function and checks calls
//! against them.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use covenant_core::Value;

use crate::config::ContractsConfig;
use crate::errors::{ContractError, ContractResult};
use crate::obligation::Obligation;
use crate::violation::{ObligationViolation, Plaintiff};

/// One call to check: a function name and its positional arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function: String,
    pub arguments: Vec<Value>,
}

impl Call {
    pub fn new(function: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            function: function.into(),
            arguments,
        }
    }
}

/// Obligations keyed by function name
#[derive(Debug, Default)]
pub struct ObligationRegistry {
    obligations: FxHashMap<String, Vec<Obligation>>,
    config: ContractsConfig,
}

impl ObligationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ContractsConfig) -> Self {
        Self {
            obligations: FxHashMap::default(),
            config,
        }
    }

    pub fn config(&self) -> &ContractsConfig {
        &self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Register an obligation for a function. Returns false when an equal
    /// obligation is already registered for it.
    pub fn register(&mut self, function: impl Into<String>, obligation: Obligation) -> bool {
        let function = function.into();
        let obligations = self.obligations.entry(function.clone()).or_default();
        if obligations.contains(&obligation) {
            debug!(function = %function, rule = %obligation.rule(), "duplicate obligation ignored");
            return false;
        }
        debug!(function = %function, obligation = %obligation, "registered obligation");
        obligations.push(obligation);
        true
    }

    /// Obligations registered for a function, in registration order
    pub fn obligations(&self, function: &str) -> &[Obligation] {
        self.obligations
            .get(function)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of functions with at least one obligation
    pub fn function_count(&self) -> usize {
        self.obligations.len()
    }

    pub fn clear(&mut self) {
        self.obligations.clear();
    }

    /// Check a call, stopping at the first broken obligation
    pub fn check_preconditions(&self, function: &str, arguments: &[Value]) -> ContractResult<()> {
        if !self.config.enabled {
            return Ok(());
        }
        trace!(function, arguments = arguments.len(), "checking preconditions");
        for obligation in self.obligations(function) {
            if let Err(violation) = self.check_one(function, obligation, arguments) {
                return Err(ContractError::Violation(violation));
            }
        }
        Ok(())
    }

    /// Check a call against every obligation, collecting all violations
    pub fn check_all(&self, function: &str, arguments: &[Value]) -> ContractResult<()> {
        let violations = self.violations(function, arguments);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ContractError::Violations(violations))
        }
    }

    /// Every violation a call produces, empty when checking is disabled
    pub fn violations(&self, function: &str, arguments: &[Value]) -> Vec<ObligationViolation> {
        if !self.config.enabled {
            return Vec::new();
        }
        self.obligations(function)
            .iter()
            .filter_map(|obligation| self.check_one(function, obligation, arguments).err())
            .collect()
    }

    /// Check many calls. Batches above the configured threshold are
    /// checked in parallel; results keep the order of `calls`.
    pub fn verify_batch(&self, calls: &[Call]) -> Vec<ContractResult<()>> {
        let check = |call: &Call| self.check_preconditions(&call.function, &call.arguments);
        if calls.len() > self.config.parallel_threshold {
            debug!(calls = calls.len(), "verifying batch in parallel");
            calls.par_iter().map(check).collect()
        } else {
            calls.iter().map(check).collect()
        }
    }

    fn check_one(
        &self,
        function: &str,
        obligation: &Obligation,
        arguments: &[Value],
    ) -> Result<(), ObligationViolation> {
        let result = obligation.check_with_limit(
            Plaintiff::named(function),
            arguments,
            self.config.evidence_length,
        );
        if let Err(violation) = &result {
            if self.config.log_violations {
                warn!(function, message = %violation, "contract violation");
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
