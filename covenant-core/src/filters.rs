//! Leaf filters over `Value`
//!
//! Every leaf is a small single-value predicate. A value of the wrong type
//! for a filter (a list handed to a string check, say) is discarded rather
//! than reported, in keeping with the fail-closed rule for filters.

pub mod elements;
pub mod membership;
pub mod number;
pub mod text;

pub use elements::{ContainsMembers, ContainsOnlyMembers, ExcludesMembers, Length, NoDuplicates, NoNulls};
pub use membership::{EqualTo, InstanceOf, MemberOf, NotEqualTo};
pub use number::{Between, Compare, Comparison};
pub use text::{Pattern, StringLength, TextClass};

use crate::filter::{Filter, FilterState};
use crate::value::Value;

/// Keeps every value except `Value::Nil`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotNull;

impl Filter<Value> for NotNull {
    fn filter(&self, value: &Value) -> FilterState {
        FilterState::from(!value.is_nil())
    }
}

/// Keeps only `Value::Nil`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsNull;

impl Filter<Value> for IsNull {
    fn filter(&self, value: &Value) -> FilterState {
        FilterState::from(value.is_nil())
    }
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
