//! Equality, membership and type filters

use std::fmt;

use crate::filter::{Filter, FilterState};
use crate::value::{Value, ValueType};

/// Keeps values structurally equal to the expected one.
///
/// `Integer(1)` and `Float(1.0)` are not equal; use `Compare` for numeric
/// equality across types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EqualTo(pub Value);

impl Filter<Value> for EqualTo {
    fn filter(&self, value: &Value) -> FilterState {
        FilterState::from(*value == self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotEqualTo(pub Value);

impl Filter<Value> for NotEqualTo {
    fn filter(&self, value: &Value) -> FilterState {
        FilterState::from(*value != self.0)
    }
}

/// Keeps values found in a fixed set of members
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberOf {
    members: Vec<Value>,
}

impl MemberOf {
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

    pub fn contains(&self, value: &Value) -> bool {
        self.members.contains(value)
    }
}

impl Filter<Value> for MemberOf {
    fn filter(&self, value: &Value) -> FilterState {
        FilterState::from(self.contains(value))
    }
}

impl fmt::Display for MemberOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_members(f, &self.members)
    }
}

/// Keeps values whose runtime type is one of the given types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceOf {
    types: Vec<ValueType>,
}

impl InstanceOf {
    pub fn new(types: impl IntoIterator<Item = ValueType>) -> Self {
        let mut types: Vec<ValueType> = types.into_iter().collect();
        types.sort();
        types.dedup();
        Self { types }
    }

    pub fn types(&self) -> &[ValueType] {
        &self.types
    }
}

impl Filter<Value> for InstanceOf {
    fn filter(&self, value: &Value) -> FilterState {
        FilterState::from(self.types.contains(&value.value_type()))
    }
}

impl fmt::Display for InstanceOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.types.iter().map(|t| t.name()).collect();
        write!(f, "{}", names.join(" or "))
    }
}

/// Collect members in order, dropping repeats
pub(crate) fn distinct<I, V>(members: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut out: Vec<Value> = Vec::new();
    for member in members {
        let member = member.into();
        if !out.contains(&member) {
            out.push(member);
        }
    }
    out
}

pub(crate) fn write_members(f: &mut fmt::Formatter<'_>, members: &[Value]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", member)?;
    }
    write!(f, "}}")
}
