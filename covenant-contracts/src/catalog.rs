//! Shared obligation constants
//!
//! Built on first use and shared for the life of the process.

use covenant_core::filters::IsNull;
use once_cell::sync::Lazy;

use crate::obligation::Obligation;
use crate::rule::Rule;
use crate::selector::{ParameterSelector, PARAMETER_1, PARAMETER_2};
use crate::typed::{MustBeGreaterThanZero, MustNotBeNull};

pub static EVERY_PARAMETER_MUST_NOT_BE_NULL: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(ParameterSelector::every(), Rule::NotNull));

pub static PARAMETER_1_MUST_NOT_BE_NULL: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(PARAMETER_1, Rule::NotNull));

pub static PARAMETER_2_MUST_NOT_BE_NULL: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(PARAMETER_2, Rule::NotNull));

pub static PARAMETER_1_MUST_BE_GREATER_THAN_ZERO: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(PARAMETER_1, Rule::greater_than(0)));

pub static EVERY_PARAMETER_MUST_BE_GREATER_THAN_ZERO: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(ParameterSelector::every(), Rule::greater_than(0)));

pub static PARAMETER_1_MUST_NOT_BE_EMPTY_STRING: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(PARAMETER_1, Rule::not_empty_string()));

pub static PARAMETER_1_MUST_BE_STRING_ID: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(PARAMETER_1, Rule::string_id()));

/// Zero-bitmap obligation: fails when any argument is nil
pub static NO_PARAMETER_MAY_BE_NULL: Lazy<Obligation> =
    Lazy::new(|| Obligation::new(ParameterSelector::none(), Rule::in_domain("null", IsNull)));

pub static MUST_NOT_BE_NULL: Lazy<MustNotBeNull> =
    Lazy::new(|| MustNotBeNull::for_parameters(ParameterSelector::every()));

pub static MUST_BE_GREATER_THAN_ZERO: Lazy<MustBeGreaterThanZero> =
    Lazy::new(|| MustBeGreaterThanZero::for_parameters(ParameterSelector::every()));

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
