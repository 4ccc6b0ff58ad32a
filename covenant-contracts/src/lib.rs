//! Covenant contract system
//!
//! Preconditions on positional parameters. An obligation pairs a
//! [`ParameterSelector`] (which parameters) with a [`Rule`] (what they must
//! satisfy); checking a call either passes or yields an
//! [`ObligationViolation`] describing the offending arguments.
//!
//! ```
//! use covenant_contracts::{Obligation, Rule, Value, PARAMETER_1};
//!
//! let positive = Obligation::new(PARAMETER_1, Rule::greater_than(0));
//! assert!(positive.check(&"withdraw", &[Value::from(10)]).is_ok());
//!
//! let violation = positive.check(&"withdraw", &[Value::from(0)]).unwrap_err();
//! assert_eq!(violation.message(), "Parameter 1 is not greater than 0: [0] [list]");
//! ```

pub mod catalog;
pub mod config;
pub mod errors;
pub mod obligation;
pub mod registry;
pub mod rule;
pub mod selector;
pub mod typed;
pub mod violation;

pub use covenant_core::{Filter, FilterState, Value, ValueType};

pub use config::ContractsConfig;
pub use errors::{ContractError, ContractResult};
pub use obligation::{Contract, Obligation};
pub use registry::{Call, ObligationRegistry};
pub use rule::{NamedFilter, Rule};
pub use selector::{
    ParameterSelector, Positions, EVERY_PARAMETER, PARAMETER_1, PARAMETER_2, PARAMETER_3,
    PARAMETER_4, PARAMETER_5, PARAMETER_6, PARAMETER_7, PARAMETER_8, PARAMETER_9,
    PARAMETER_COUNT,
};
pub use typed::{
    MustBeGreaterThanZero, MustMatchPattern, MustNotBeNull, NotPositiveViolation, NullViolation,
    PatternMismatchViolation,
};
pub use violation::{BoundedDisplay, Cause, ObligationViolation, Plaintiff};
