//! Obligations with their own violation types
//!
//! `typed_obligation!` declares a newtype around `Obligation` whose
//! `Contract::Violation` is a distinct error type, so callers can match on
//! which obligation failed without inspecting messages.
//!
//! ```
//! use covenant_contracts::{typed_obligation, Contract, Rule, PARAMETER_1};
//! use covenant_contracts::Value;
//!
//! typed_obligation! {
//!     /// The first argument must be a valid identifier
//!     pub struct MustBeIdentifier => NotAnIdentifier;
//! }
//!
//! let contract = MustBeIdentifier::new(PARAMETER_1, Rule::string_id());
//! let error: NotAnIdentifier = contract.check(&"parser", &[Value::from("9lives")]).unwrap_err();
//! assert_eq!(error.obligation().rule().name(), "string-id");
//! ```

use crate::errors::ContractResult;
use crate::rule::Rule;
use crate::selector::ParameterSelector;

#[macro_export]
macro_rules! typed_obligation {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $violation:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name($crate::Obligation);

        impl $name {
            pub fn new(
                selector: impl ::std::convert::Into<$crate::ParameterSelector>,
                rule: $crate::Rule,
            ) -> Self {
                Self($crate::Obligation::new(selector, rule))
            }

            pub fn obligation(&self) -> &$crate::Obligation {
                &self.0
            }

            pub fn filter_parameters(&self, arguments: &[$crate::Value]) -> $crate::FilterState {
                self.0.filter_parameters(arguments)
            }

            pub fn check<P: ::std::fmt::Debug + ?Sized>(
                &self,
                plaintiff: &P,
                arguments: &[$crate::Value],
            ) -> ::std::result::Result<(), $violation> {
                self.0.check(plaintiff, arguments).map_err($violation)
            }
        }

        impl $crate::Contract for $name {
            type Evidence = $crate::Value;
            type Violation = $violation;

            fn description(&self) -> ::std::string::String {
                $crate::Contract::description(&self.0)
            }

            fn violation_message(
                &self,
                plaintiff: &$crate::Plaintiff,
                evidence: ::std::option::Option<&$crate::Value>,
                cause: ::std::option::Option<&$crate::Cause>,
            ) -> ::std::string::String {
                $crate::Contract::violation_message(&self.0, plaintiff, evidence, cause)
            }

            fn new_violation(
                &self,
                plaintiff: $crate::Plaintiff,
                evidence: ::std::option::Option<&$crate::Value>,
                message: ::std::string::String,
                cause: ::std::option::Option<$crate::Cause>,
            ) -> $violation {
                $violation($crate::Contract::new_violation(
                    &self.0, plaintiff, evidence, message, cause,
                ))
            }
        }

        #[doc = concat!("Violation of [`", stringify!($name), "`]")]
        #[derive(Debug, Clone)]
        $vis struct $violation($crate::ObligationViolation);

        impl $violation {
            pub fn into_inner(self) -> $crate::ObligationViolation {
                self.0
            }
        }

        impl ::std::ops::Deref for $violation {
            type Target = $crate::ObligationViolation;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::fmt::Display for $violation {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::error::Error for $violation {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                ::std::error::Error::source(&self.0)
            }
        }

        impl ::std::convert::From<$violation> for $crate::ObligationViolation {
            fn from(violation: $violation) -> Self {
                violation.0
            }
        }

        impl ::std::convert::From<$violation> for $crate::ContractError {
            fn from(violation: $violation) -> Self {
                $crate::ContractError::Violation(violation.0)
            }
        }
    };
}

typed_obligation! {
    /// Selected parameters must not be nil
    pub struct MustNotBeNull => NullViolation;
}

typed_obligation! {
    /// Selected parameters must be numbers greater than zero
    pub struct MustBeGreaterThanZero => NotPositiveViolation;
}

typed_obligation! {
    /// Selected parameters must be strings matching a pattern
    pub struct MustMatchPattern => PatternMismatchViolation;
}

impl MustNotBeNull {
    pub fn for_parameters(selector: impl Into<ParameterSelector>) -> Self {
        Self::new(selector, Rule::NotNull)
    }
}

impl MustBeGreaterThanZero {
    pub fn for_parameters(selector: impl Into<ParameterSelector>) -> Self {
        Self::new(selector, Rule::greater_than(0))
    }
}

impl MustMatchPattern {
    pub fn for_parameters(
        selector: impl Into<ParameterSelector>,
        pattern: &str,
    ) -> ContractResult<Self> {
        Ok(Self::new(selector, Rule::matches_pattern(pattern)?))
    }
}

#[cfg(test)]
#[path = "typed_tests.rs"]
mod tests;
