//! Violations: the typed errors produced when an obligation fails

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use covenant_core::bounded::{self, DEFAULT_EVIDENCE_LENGTH};
use covenant_core::Value;
use thiserror::Error;

use crate::obligation::Obligation;

/// Underlying error that led to a violation
pub type Cause = Arc<dyn StdError + Send + Sync>;

/// Evidence that can be embedded in a violation message
pub trait BoundedDisplay {
    /// Render within `limit` characters (`0` for unbounded)
    fn bounded(&self, limit: usize) -> String;

    /// Runtime type name shown after the rendering
    fn type_name(&self) -> &str;
}

impl BoundedDisplay for Value {
    fn bounded(&self, limit: usize) -> String {
        bounded::render(self, limit)
    }

    fn type_name(&self) -> &str {
        Value::type_name(self)
    }
}

/// The object under contract: its type and a short debug rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plaintiff {
    type_name: &'static str,
    description: String,
}

impl Plaintiff {
    pub fn of<P: fmt::Debug + ?Sized>(plaintiff: &P) -> Self {
        Self {
            type_name: std::any::type_name::<P>(),
            description: bounded::elide(&format!("{:?}", plaintiff), DEFAULT_EVIDENCE_LENGTH),
        }
    }

    /// A plaintiff known only by name, such as a free function
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            type_name: "fn",
            description: name.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Plaintiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.type_name)
    }
}

/// A failed obligation
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ObligationViolation {
    obligation: Obligation,
    plaintiff: Plaintiff,
    evidence: Option<Value>,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl ObligationViolation {
    pub fn new(
        obligation: Obligation,
        plaintiff: Plaintiff,
        evidence: Option<Value>,
        message: String,
        cause: Option<Cause>,
    ) -> Self {
        Self {
            obligation,
            plaintiff,
            evidence,
            message,
            cause,
        }
    }

    pub fn obligation(&self) -> &Obligation {
        &self.obligation
    }

    pub fn plaintiff(&self) -> &Plaintiff {
        &self.plaintiff
    }

    pub fn evidence(&self) -> Option<&Value> {
        self.evidence.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
