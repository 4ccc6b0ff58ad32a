//! Container filters
//!
//! Element checks look at list items and at map values. Strings and bytes
//! only take part in `Length`.

use rustc_hash::FxHashSet;
use std::fmt;

use super::membership::{distinct, write_members};
use crate::error::{Error, Result};
use crate::filter::{Filter, FilterState};
use crate::value::Value;

fn elements(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::List(items) => Some(items.iter().collect()),
        Value::Map(map) => Some(map.values().collect()),
        _ => None,
    }
}

/// Keeps lists without repeated elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoDuplicates;

impl Filter<Value> for NoDuplicates {
    fn filter(&self, value: &Value) -> FilterState {
        match value {
            Value::List(items) => {
                let mut seen = FxHashSet::default();
                FilterState::from(items.iter().all(|item| seen.insert(item)))
            }
            _ => FilterState::Discarded,
        }
    }
}

/// Keeps lists and maps with no `Nil` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoNulls;

impl Filter<Value> for NoNulls {
    fn filter(&self, value: &Value) -> FilterState {
        elements(value).map_or(FilterState::Discarded, |items| {
            FilterState::from(!items.iter().any(|item| item.is_nil()))
        })
    }
}

/// Keeps containers holding every one of the required members
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainsMembers {
    members: Vec<Value>,
}

impl ContainsMembers {
    pub fn new<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            members: distinct(members),
        }
    }

    pub fn members(&self) -> &[Value] {
        &self.members
    }
}

impl Filter<Value> for ContainsMembers {
    fn filter(&self, value: &Value) -> FilterState {
        elements(value).map_or(FilterState::Discarded, |items| {
            FilterState::from(self.members.iter().all(|member| items.contains(&member)))
        })
    }
}

impl fmt::Display for ContainsMembers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(f, &self.members)
    }
}

/// Keeps containers whose elements all come from the allowed members
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainsOnlyMembers {
    members: Vec<Value>,
}

impl ContainsOnlyMembers {
    pub fn new<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            members: distinct(members),
        }
    }

    pub fn members(&self) -> &[Value] {
        &self.members
    }
}

impl Filter<Value> for ContainsOnlyMembers {
    fn filter(&self, value: &Value) -> FilterState {
        elements(value).map_or(FilterState::Discarded, |items| {
            FilterState::from(items.iter().all(|item| self.members.contains(item)))
        })
    }
}

impl fmt::Display for ContainsOnlyMembers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(f, &self.members)
    }
}

/// Keeps containers holding none of the excluded members
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExcludesMembers {
    members: Vec<Value>,
}

impl ExcludesMembers {
    pub fn new<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            members: distinct(members),
        }
    }

    pub fn members(&self) -> &[Value] {
        &self.members
    }
}

impl Filter<Value> for ExcludesMembers {
    fn filter(&self, value: &Value) -> FilterState {
        elements(value).map_or(FilterState::Discarded, |items| {
            FilterState::from(!items.iter().any(|item| self.members.contains(item)))
        })
    }
}

impl fmt::Display for ExcludesMembers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(f, &self.members)
    }
}

/// Keeps containers whose length lies in `minimum..=maximum`.
///
/// Applies to strings (characters), bytes, lists and maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length {
    minimum: usize,
    maximum: usize,
}

impl Length {
    pub fn new(minimum: usize, maximum: usize) -> Result<Self> {
        if minimum > maximum {
            return Err(Error::InvalidBounds(format!(
                "minimum length {} exceeds maximum length {}",
                minimum, maximum
            )));
        }
        Ok(Self { minimum, maximum })
    }

    pub fn exactly(length: usize) -> Self {
        Self {
            minimum: length,
            maximum: length,
        }
    }

    pub fn at_least(minimum: usize) -> Self {
        Self {
            minimum,
            maximum: usize::MAX,
        }
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }
}

impl Filter<Value> for Length {
    fn filter(&self, value: &Value) -> FilterState {
        value.length().map_or(FilterState::Discarded, |length| {
            FilterState::from(length >= self.minimum && length <= self.maximum)
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minimum == self.maximum {
            write!(f, "{}", self.minimum)
        } else if self.maximum == usize::MAX {
            write!(f, "at least {}", self.minimum)
        } else {
            write!(f, "{} to {}", self.minimum, self.maximum)
        }
    }
}
