//! String filters
//!
//! Lengths are measured in characters, not bytes.

use regex::Regex;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::filter::{Filter, FilterState};
use crate::value::Value;

/// Character-class checks over a string value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextClass {
    /// No characters at all
    Empty,
    /// At least one character
    NotEmpty,
    /// No whitespace anywhere
    ExcludesSpaces,
    /// At least one non-whitespace character
    ContainsNonSpaces,
    /// ASCII digits only
    OnlyNumerics,
    /// Alphabetic characters only
    OnlyAlpha,
    /// Alphabetic characters and digits only
    OnlyAlphaNumerics,
    /// No control characters
    OnlyPrintable,
    /// Alphanumerics and underscores, not starting with a digit
    Identifier,
}

impl TextClass {
    pub fn accepts(self, text: &str) -> bool {
        match self {
            TextClass::Empty => text.is_empty(),
            TextClass::NotEmpty => !text.is_empty(),
            TextClass::ExcludesSpaces => !text.chars().any(char::is_whitespace),
            TextClass::ContainsNonSpaces => text.chars().any(|c| !c.is_whitespace()),
            TextClass::OnlyNumerics => text.chars().all(|c| c.is_ascii_digit()),
            TextClass::OnlyAlpha => text.chars().all(char::is_alphabetic),
            TextClass::OnlyAlphaNumerics => text.chars().all(char::is_alphanumeric),
            TextClass::OnlyPrintable => !text.chars().any(char::is_control),
            TextClass::Identifier => is_identifier(text),
        }
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Filter<Value> for TextClass {
    fn filter(&self, value: &Value) -> FilterState {
        value
            .as_str()
            .map_or(FilterState::Discarded, |text| {
                FilterState::from(self.accepts(text))
            })
    }
}

/// Keeps strings whose character count lies in `minimum..=maximum`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringLength {
    minimum: usize,
    maximum: usize,
}

impl StringLength {
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

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }
}

impl Filter<Value> for StringLength {
    fn filter(&self, value: &Value) -> FilterState {
        match value {
            Value::String(text) => {
                let length = text.chars().count();
                FilterState::from(length >= self.minimum && length <= self.maximum)
            }
            _ => FilterState::Discarded,
        }
    }
}

impl fmt::Display for StringLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minimum == self.maximum {
            write!(f, "{}", self.minimum)
        } else {
            write!(f, "{} to {}", self.minimum, self.maximum)
        }
    }
}

/// Keeps strings that match a regular expression in full.
///
/// Equality and hashing go by the source text of the expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl Filter<Value> for Pattern {
    fn filter(&self, value: &Value) -> FilterState {
        value
            .as_str()
            .map_or(FilterState::Discarded, |text| {
                FilterState::from(self.is_match(text))
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}
