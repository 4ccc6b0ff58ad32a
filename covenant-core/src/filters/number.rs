//! Ordering filters
//!
//! Integers and floats compare with each other; strings, characters and
//! booleans compare within their own type (see `Value::compare`).

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::filter::{Filter, FilterState};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl Comparison {
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Comparison::GreaterThan => ordering == Ordering::Greater,
            Comparison::GreaterThanOrEqualTo => ordering != Ordering::Less,
            Comparison::LessThan => ordering == Ordering::Less,
            Comparison::LessThanOrEqualTo => ordering != Ordering::Greater,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::GreaterThan => ">",
            Comparison::GreaterThanOrEqualTo => ">=",
            Comparison::LessThan => "<",
            Comparison::LessThanOrEqualTo => "<=",
        }
    }

    /// Phrase used in descriptions, e.g. "greater than"
    pub fn phrase(self) -> &'static str {
        match self {
            Comparison::GreaterThan => "greater than",
            Comparison::GreaterThanOrEqualTo => "greater than or equal to",
            Comparison::LessThan => "less than",
            Comparison::LessThanOrEqualTo => "less than or equal to",
        }
    }
}

/// Compares each value against a fixed bound
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compare {
    comparison: Comparison,
    bound: Value,
}

impl Compare {
    pub fn new(comparison: Comparison, bound: impl Into<Value>) -> Self {
        Self {
            comparison,
            bound: bound.into(),
        }
    }

    pub fn greater_than(bound: impl Into<Value>) -> Self {
        Self::new(Comparison::GreaterThan, bound)
    }

    pub fn greater_than_or_equal_to(bound: impl Into<Value>) -> Self {
        Self::new(Comparison::GreaterThanOrEqualTo, bound)
    }

    pub fn less_than(bound: impl Into<Value>) -> Self {
        Self::new(Comparison::LessThan, bound)
    }

    pub fn less_than_or_equal_to(bound: impl Into<Value>) -> Self {
        Self::new(Comparison::LessThanOrEqualTo, bound)
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn bound(&self) -> &Value {
        &self.bound
    }
}

impl Filter<Value> for Compare {
    fn filter(&self, value: &Value) -> FilterState {
        value
            .compare(&self.bound)
            .map_or(FilterState::Discarded, |ordering| {
                FilterState::from(self.comparison.accepts(ordering))
            })
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.comparison.symbol(), self.bound)
    }
}

/// Keeps values within an inclusive range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Between {
    minimum: Value,
    maximum: Value,
}

impl Between {
    pub fn new(minimum: impl Into<Value>, maximum: impl Into<Value>) -> Result<Self> {
        let minimum = minimum.into();
        let maximum = maximum.into();
        match minimum.compare(&maximum) {
            None if minimum.value_type() != maximum.value_type()
                && !(minimum.is_number() && maximum.is_number()) =>
            {
                Err(Error::TypeMismatch {
                    expected: minimum.type_name(),
                    actual: maximum.type_name(),
                })
            }
            None => Err(Error::InvalidBounds(format!(
                "{} values have no ordering",
                minimum.type_name()
            ))),
            Some(Ordering::Greater) => Err(Error::InvalidBounds(format!(
                "minimum {} exceeds maximum {}",
                minimum, maximum
            ))),
            Some(_) => Ok(Self { minimum, maximum }),
        }
    }

    pub fn minimum(&self) -> &Value {
        &self.minimum
    }

    pub fn maximum(&self) -> &Value {
        &self.maximum
    }
}

impl Filter<Value> for Between {
    fn filter(&self, value: &Value) -> FilterState {
        let above = value
            .compare(&self.minimum)
            .is_some_and(|ordering| ordering != Ordering::Less);
        let below = value
            .compare(&self.maximum)
            .is_some_and(|ordering| ordering != Ordering::Greater);
        FilterState::from(above && below)
    }
}

impl fmt::Display for Between {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.minimum, self.maximum)
    }
}
