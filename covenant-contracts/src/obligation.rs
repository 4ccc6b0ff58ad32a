//! Obligations and the contract protocol
//!
//! An `Obligation` binds a `ParameterSelector` to a `Rule`. Checking a call
//! filters the selected arguments through the rule; when that fails the
//! obligation manufactures a violation through the `Contract` template.

use std::fmt;

use covenant_core::bounded::DEFAULT_EVIDENCE_LENGTH;
use covenant_core::{FilterState, Value};

use crate::rule::Rule;
use crate::selector::ParameterSelector;
use crate::violation::{BoundedDisplay, Cause, ObligationViolation, Plaintiff};

/// A contract that can describe itself and build its own violations.
///
/// Implementors supply the wording and the violation constructor; the
/// provided `violation` methods assemble the message
/// `"{base}: {evidence} [{type}]"`, or `"{base}: null"` without evidence.
pub trait Contract {
    /// What the contract examines
    type Evidence: BoundedDisplay + ?Sized;

    /// What a failed check produces
    type Violation;

    /// One sentence describing the contract
    fn description(&self) -> String;

    /// Base violation message, before the evidence is appended
    fn violation_message(
        &self,
        plaintiff: &Plaintiff,
        evidence: Option<&Self::Evidence>,
        cause: Option<&Cause>,
    ) -> String;

    fn new_violation(
        &self,
        plaintiff: Plaintiff,
        evidence: Option<&Self::Evidence>,
        message: String,
        cause: Option<Cause>,
    ) -> Self::Violation;

    fn violation(
        &self,
        plaintiff: Plaintiff,
        evidence: Option<&Self::Evidence>,
        cause: Option<Cause>,
    ) -> Self::Violation {
        self.violation_with_limit(plaintiff, evidence, cause, DEFAULT_EVIDENCE_LENGTH)
    }

    /// Like `violation`, rendering the evidence within `limit` characters
    fn violation_with_limit(
        &self,
        plaintiff: Plaintiff,
        evidence: Option<&Self::Evidence>,
        cause: Option<Cause>,
        limit: usize,
    ) -> Self::Violation {
        let base = self.violation_message(&plaintiff, evidence, cause.as_ref());
        let message = match evidence {
            Some(evidence) => format!(
                "{}: {} [{}]",
                base,
                evidence.bounded(limit),
                evidence.type_name()
            ),
            None => format!("{}: null", base),
        };
        self.new_violation(plaintiff, evidence, message, cause)
    }
}

/// A precondition on selected positional parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Obligation {
    selector: ParameterSelector,
    rule: Rule,
}

impl Obligation {
    pub fn new(selector: impl Into<ParameterSelector>, rule: Rule) -> Self {
        Self {
            selector: selector.into(),
            rule,
        }
    }

    pub fn selector(&self) -> ParameterSelector {
        self.selector
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Run the rule over the selected arguments
    pub fn filter_parameters(&self, arguments: &[Value]) -> FilterState {
        self.selector
            .filter_parameters(Some(&self.rule), Some(arguments))
    }

    /// Check a call, producing a violation whose evidence is the whole
    /// argument list
    pub fn check<P: fmt::Debug + ?Sized>(
        &self,
        plaintiff: &P,
        arguments: &[Value],
    ) -> Result<(), ObligationViolation> {
        self.check_with_limit(Plaintiff::of(plaintiff), arguments, DEFAULT_EVIDENCE_LENGTH)
    }

    pub fn check_with_limit(
        &self,
        plaintiff: Plaintiff,
        arguments: &[Value],
        limit: usize,
    ) -> Result<(), ObligationViolation> {
        if self.filter_parameters(arguments).is_kept() {
            return Ok(());
        }
        let evidence = Value::List(arguments.to_vec());
        Err(self.violation_with_limit(plaintiff, Some(&evidence), None, limit))
    }
}

impl Contract for Obligation {
    type Evidence = Value;
    type Violation = ObligationViolation;

    fn description(&self) -> String {
        if self.selector.is_none() {
            return format!("No parameter may {}.", self.rule.requirement());
        }
        format!("{} {}.", self.selector, self.rule.predicate())
    }

    fn violation_message(
        &self,
        _plaintiff: &Plaintiff,
        _evidence: Option<&Value>,
        _cause: Option<&Cause>,
    ) -> String {
        // A zero bitmap fails when some argument passes the rule
        if self.selector.is_none() {
            return format!("Some parameter {}", self.rule.affirmation());
        }
        format!("{} {}", self.selector, self.rule.wording())
    }

    fn new_violation(
        &self,
        plaintiff: Plaintiff,
        evidence: Option<&Value>,
        message: String,
        cause: Option<Cause>,
    ) -> ObligationViolation {
        ObligationViolation::new(self.clone(), plaintiff, evidence.cloned(), message, cause)
    }
}

impl fmt::Display for Obligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
#[path = "obligation_tests.rs"]
mod tests;
