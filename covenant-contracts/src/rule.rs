//! Rule catalogue
//!
//! A `Rule` is the domain filter of an obligation together with the words
//! used to describe it. Each variant wraps one leaf filter from
//! `covenant_core::filters`; the rule adds the predicate ("must be greater
//! than 0") used in descriptions and the wording ("is not greater than 0")
//! used in violation messages.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use covenant_core::filters::{
    Between, Compare, Comparison, ContainsMembers, ContainsOnlyMembers, EqualTo,
    ExcludesMembers, InstanceOf, Length, MemberOf, NoDuplicates, NoNulls, NotEqualTo, NotNull,
    Pattern, StringLength, TextClass,
};
use covenant_core::{Filter, FilterState, Value, ValueType};

use crate::errors::ContractResult;

/// A caller-supplied filter registered under a name.
///
/// Two named filters are equal when their names are equal.
#[derive(Clone)]
pub struct NamedFilter {
    name: String,
    filter: Arc<dyn Filter<Value>>,
}

impl NamedFilter {
    pub fn new(name: impl Into<String>, filter: impl Filter<Value> + 'static) -> Self {
        Self {
            name: name.into(),
            filter: Arc::new(filter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for NamedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NamedFilter").field(&self.name).finish()
    }
}

impl PartialEq for NamedFilter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for NamedFilter {}

impl Hash for NamedFilter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Filter<Value> for NamedFilter {
    fn filter(&self, value: &Value) -> FilterState {
        self.filter.filter(value)
    }
}

/// Domain filter of an obligation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Arbitrary named filter
    InDomain(NamedFilter),
    NotNull,
    EqualTo(EqualTo),
    NotEqualTo(NotEqualTo),
    /// One of greater than, greater than or equal to, less than, less than
    /// or equal to
    Compare(Compare),
    Between(Between),
    InstanceOf(InstanceOf),
    NotInstanceOf(InstanceOf),
    /// Character-class string checks, including identifiers
    Text(TextClass),
    StringLength(StringLength),
    MatchesPattern(Pattern),
    MemberOf(MemberOf),
    NotMemberOf(MemberOf),
    ContainsMembers(ContainsMembers),
    ContainsOnlyMembers(ContainsOnlyMembers),
    ExcludesMembers(ExcludesMembers),
    NoDuplicates,
    NoNulls,
    Length(Length),
}

impl Rule {
    pub fn in_domain(name: impl Into<String>, filter: impl Filter<Value> + 'static) -> Self {
        Rule::InDomain(NamedFilter::new(name, filter))
    }

    pub fn equal_to(expected: impl Into<Value>) -> Self {
        Rule::EqualTo(EqualTo(expected.into()))
    }

    pub fn not_equal_to(unexpected: impl Into<Value>) -> Self {
        Rule::NotEqualTo(NotEqualTo(unexpected.into()))
    }

    pub fn greater_than(bound: impl Into<Value>) -> Self {
        Rule::Compare(Compare::greater_than(bound))
    }

    pub fn greater_than_or_equal_to(bound: impl Into<Value>) -> Self {
        Rule::Compare(Compare::greater_than_or_equal_to(bound))
    }

    pub fn less_than(bound: impl Into<Value>) -> Self {
        Rule::Compare(Compare::less_than(bound))
    }

    pub fn less_than_or_equal_to(bound: impl Into<Value>) -> Self {
        Rule::Compare(Compare::less_than_or_equal_to(bound))
    }

    pub fn between(minimum: impl Into<Value>, maximum: impl Into<Value>) -> ContractResult<Self> {
        Ok(Rule::Between(Between::new(minimum, maximum)?))
    }

    pub fn instance_of(types: impl IntoIterator<Item = ValueType>) -> Self {
        Rule::InstanceOf(InstanceOf::new(types))
    }

    pub fn not_instance_of(types: impl IntoIterator<Item = ValueType>) -> Self {
        Rule::NotInstanceOf(InstanceOf::new(types))
    }

    pub fn empty_string() -> Self {
        Rule::Text(TextClass::Empty)
    }

    pub fn not_empty_string() -> Self {
        Rule::Text(TextClass::NotEmpty)
    }

    pub fn excludes_spaces() -> Self {
        Rule::Text(TextClass::ExcludesSpaces)
    }

    pub fn contains_non_spaces() -> Self {
        Rule::Text(TextClass::ContainsNonSpaces)
    }

    pub fn only_numerics() -> Self {
        Rule::Text(TextClass::OnlyNumerics)
    }

    pub fn only_alpha() -> Self {
        Rule::Text(TextClass::OnlyAlpha)
    }

    pub fn only_alpha_numerics() -> Self {
        Rule::Text(TextClass::OnlyAlphaNumerics)
    }

    pub fn only_printable() -> Self {
        Rule::Text(TextClass::OnlyPrintable)
    }

    /// Alphanumerics and underscores, not starting with a digit
    pub fn string_id() -> Self {
        Rule::Text(TextClass::Identifier)
    }

    pub fn string_length(minimum: usize, maximum: usize) -> ContractResult<Self> {
        Ok(Rule::StringLength(StringLength::new(minimum, maximum)?))
    }

    pub fn matches_pattern(pattern: &str) -> ContractResult<Self> {
        Ok(Rule::MatchesPattern(Pattern::new(pattern)?))
    }

    pub fn member_of<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Rule::MemberOf(MemberOf::new(members))
    }

    pub fn not_member_of<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Rule::NotMemberOf(MemberOf::new(members))
    }

    pub fn contains_members<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Rule::ContainsMembers(ContainsMembers::new(members))
    }

    pub fn contains_only_members<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Rule::ContainsOnlyMembers(ContainsOnlyMembers::new(members))
    }

    pub fn excludes_members<I, V>(members: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Rule::ExcludesMembers(ExcludesMembers::new(members))
    }

    pub fn length(minimum: usize, maximum: usize) -> ContractResult<Self> {
        Ok(Rule::Length(Length::new(minimum, maximum)?))
    }

    /// Short, stable name of the rule
    pub fn name(&self) -> &str {
        match self {
            Rule::InDomain(named) => named.name(),
            Rule::NotNull => "not-null",
            Rule::EqualTo(_) => "equal-to",
            Rule::NotEqualTo(_) => "not-equal-to",
            Rule::Compare(compare) => match compare.comparison() {
                Comparison::GreaterThan => "greater-than",
                Comparison::GreaterThanOrEqualTo => "greater-than-or-equal-to",
                Comparison::LessThan => "less-than",
                Comparison::LessThanOrEqualTo => "less-than-or-equal-to",
            },
            Rule::Between(_) => "between",
            Rule::InstanceOf(_) => "instance-of",
            Rule::NotInstanceOf(_) => "not-instance-of",
            Rule::Text(class) => match class {
                TextClass::Empty => "empty-string",
                TextClass::NotEmpty => "not-empty-string",
                TextClass::ExcludesSpaces => "excludes-spaces",
                TextClass::ContainsNonSpaces => "contains-non-spaces",
                TextClass::OnlyNumerics => "only-numerics",
                TextClass::OnlyAlpha => "only-alpha",
                TextClass::OnlyAlphaNumerics => "only-alpha-numerics",
                TextClass::OnlyPrintable => "only-printable",
                TextClass::Identifier => "string-id",
            },
            Rule::StringLength(_) => "string-length",
            Rule::MatchesPattern(_) => "matches-pattern",
            Rule::MemberOf(_) => "member-of",
            Rule::NotMemberOf(_) => "not-member-of",
            Rule::ContainsMembers(_) => "contains-members",
            Rule::ContainsOnlyMembers(_) => "contains-only-members",
            Rule::ExcludesMembers(_) => "excludes-members",
            Rule::NoDuplicates => "no-duplicates",
            Rule::NoNulls => "no-nulls",
            Rule::Length(_) => "length",
        }
    }

    /// What the governed parameters must satisfy, e.g. "must not be null"
    pub fn predicate(&self) -> String {
        format!("must {}", self.requirement())
    }

    /// The predicate without its modal verb, e.g. "not be null"
    pub fn requirement(&self) -> String {
        match self {
            Rule::InDomain(named) => format!("be in domain {}", named.name()),
            Rule::NotNull => "not be null".to_string(),
            Rule::EqualTo(EqualTo(expected)) => format!("be equal to {}", expected),
            Rule::NotEqualTo(NotEqualTo(unexpected)) => {
                format!("not be equal to {}", unexpected)
            }
            Rule::Compare(compare) => format!(
                "be {} {}",
                compare.comparison().phrase(),
                compare.bound()
            ),
            Rule::Between(range) => format!(
                "be between {} and {}",
                range.minimum(),
                range.maximum()
            ),
            Rule::InstanceOf(types) => format!("be an instance of {}", types),
            Rule::NotInstanceOf(types) => format!("not be an instance of {}", types),
            Rule::Text(class) => text_phrase(*class).0.to_string(),
            Rule::StringLength(length) => format!("have a string length of {}", length),
            Rule::MatchesPattern(pattern) => format!("match pattern {}", pattern),
            Rule::MemberOf(members) => format!("be a member of {}", members),
            Rule::NotMemberOf(members) => format!("not be a member of {}", members),
            Rule::ContainsMembers(members) => format!("contain the members {}", members),
            Rule::ContainsOnlyMembers(members) => {
                format!("contain only the members {}", members)
            }
            Rule::ExcludesMembers(members) => format!("not contain the members {}", members),
            Rule::NoDuplicates => "not contain duplicates".to_string(),
            Rule::NoNulls => "not contain nulls".to_string(),
            Rule::Length(length) => format!("have a length of {}", length),
        }
    }

    /// How a failing parameter is described, e.g. "is null"
    pub fn wording(&self) -> String {
        match self {
            Rule::InDomain(named) => format!("is not in domain {}", named.name()),
            Rule::NotNull => "is null".to_string(),
            Rule::EqualTo(EqualTo(expected)) => format!("is not equal to {}", expected),
            Rule::NotEqualTo(NotEqualTo(unexpected)) => format!("is equal to {}", unexpected),
            Rule::Compare(compare) => format!(
                "is not {} {}",
                compare.comparison().phrase(),
                compare.bound()
            ),
            Rule::Between(range) => format!(
                "is not between {} and {}",
                range.minimum(),
                range.maximum()
            ),
            Rule::InstanceOf(types) => format!("is not an instance of {}", types),
            Rule::NotInstanceOf(types) => format!("is an instance of {}", types),
            Rule::Text(class) => text_phrase(*class).1.to_string(),
            Rule::StringLength(length) => {
                format!("does not have a string length of {}", length)
            }
            Rule::MatchesPattern(pattern) => format!("does not match pattern {}", pattern),
            Rule::MemberOf(members) => format!("is not a member of {}", members),
            Rule::NotMemberOf(members) => format!("is a member of {}", members),
            Rule::ContainsMembers(members) => {
                format!("does not contain the members {}", members)
            }
            Rule::ContainsOnlyMembers(members) => {
                format!("does not contain only the members {}", members)
            }
            Rule::ExcludesMembers(members) => format!("contains members of {}", members),
            Rule::NoDuplicates => "contains duplicates".to_string(),
            Rule::NoNulls => "contains nulls".to_string(),
            Rule::Length(length) => format!("does not have a length of {}", length),
        }
    }

    /// How a passing parameter is described, e.g. "is not null"
    pub fn affirmation(&self) -> String {
        match self {
            Rule::InDomain(named) => format!("is in domain {}", named.name()),
            Rule::NotNull => "is not null".to_string(),
            Rule::EqualTo(EqualTo(expected)) => format!("is equal to {}", expected),
            Rule::NotEqualTo(NotEqualTo(unexpected)) => format!("is not equal to {}", unexpected),
            Rule::Compare(compare) => format!(
                "is {} {}",
                compare.comparison().phrase(),
                compare.bound()
            ),
            Rule::Between(range) => format!(
                "is between {} and {}",
                range.minimum(),
                range.maximum()
            ),
            Rule::InstanceOf(types) => format!("is an instance of {}", types),
            Rule::NotInstanceOf(types) => format!("is not an instance of {}", types),
            Rule::Text(class) => text_phrase(*class).2.to_string(),
            Rule::StringLength(length) => format!("has a string length of {}", length),
            Rule::MatchesPattern(pattern) => format!("matches pattern {}", pattern),
            Rule::MemberOf(members) => format!("is a member of {}", members),
            Rule::NotMemberOf(members) => format!("is not a member of {}", members),
            Rule::ContainsMembers(members) => format!("contains the members {}", members),
            Rule::ContainsOnlyMembers(members) => {
                format!("contains only the members {}", members)
            }
            Rule::ExcludesMembers(members) => {
                format!("does not contain the members {}", members)
            }
            Rule::NoDuplicates => "does not contain duplicates".to_string(),
            Rule::NoNulls => "does not contain nulls".to_string(),
            Rule::Length(length) => format!("has a length of {}", length),
        }
    }
}

// (requirement, violation wording, affirmation)
fn text_phrase(class: TextClass) -> (&'static str, &'static str, &'static str) {
    match class {
        TextClass::Empty => (
            "be an empty string",
            "is not an empty string",
            "is an empty string",
        ),
        TextClass::NotEmpty => (
            "not be an empty string",
            "is an empty string",
            "is not an empty string",
        ),
        TextClass::ExcludesSpaces => (
            "not contain spaces",
            "contains spaces",
            "does not contain spaces",
        ),
        TextClass::ContainsNonSpaces => (
            "contain non-space characters",
            "does not contain non-space characters",
            "contains non-space characters",
        ),
        TextClass::OnlyNumerics => (
            "contain only numerics",
            "does not contain only numerics",
            "contains only numerics",
        ),
        TextClass::OnlyAlpha => (
            "contain only alphabetic characters",
            "does not contain only alphabetic characters",
            "contains only alphabetic characters",
        ),
        TextClass::OnlyAlphaNumerics => (
            "contain only alphanumeric characters",
            "does not contain only alphanumeric characters",
            "contains only alphanumeric characters",
        ),
        TextClass::OnlyPrintable => (
            "contain only printable characters",
            "does not contain only printable characters",
            "contains only printable characters",
        ),
        TextClass::Identifier => (
            "be a valid identifier",
            "is not a valid identifier",
            "is a valid identifier",
        ),
    }
}

impl Filter<Value> for Rule {
    fn filter(&self, value: &Value) -> FilterState {
        match self {
            Rule::InDomain(named) => named.filter(value),
            Rule::NotNull => NotNull.filter(value),
            Rule::EqualTo(equal) => equal.filter(value),
            Rule::NotEqualTo(not_equal) => not_equal.filter(value),
            Rule::Compare(compare) => compare.filter(value),
            Rule::Between(range) => range.filter(value),
            Rule::InstanceOf(types) => types.filter(value),
            Rule::NotInstanceOf(types) => types.filter(value).opposite(),
            Rule::Text(class) => class.filter(value),
            Rule::StringLength(length) => length.filter(value),
            Rule::MatchesPattern(pattern) => pattern.filter(value),
            Rule::MemberOf(members) => members.filter(value),
            Rule::NotMemberOf(members) => members.filter(value).opposite(),
            Rule::ContainsMembers(members) => members.filter(value),
            Rule::ContainsOnlyMembers(members) => members.filter(value),
            Rule::ExcludesMembers(members) => members.filter(value),
            Rule::NoDuplicates => NoDuplicates.filter(value),
            Rule::NoNulls => NoNulls.filter(value),
            Rule::Length(length) => length.filter(value),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
