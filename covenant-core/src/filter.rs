//! Filter capability and combinators
//!
//! A `Filter` is a pure predicate over a single value that answers
//! `FilterState::Kept` or `FilterState::Discarded`. There is no third
//! outcome: anything short of a definite `Kept` is treated as `Discarded`.

use std::any::Any as AnyPayload;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::error::{Error, Result};

/// Result of filtering one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterState {
    Kept,
    Discarded,
}

impl FilterState {
    pub fn is_kept(self) -> bool {
        self == FilterState::Kept
    }

    pub fn is_discarded(self) -> bool {
        self == FilterState::Discarded
    }

    /// Swap `Kept` and `Discarded`
    pub fn opposite(self) -> Self {
        match self {
            FilterState::Kept => FilterState::Discarded,
            FilterState::Discarded => FilterState::Kept,
        }
    }

    /// `Discarded` if either side is discarded
    pub fn and(self, other: FilterState) -> Self {
        if self.is_discarded() {
            self
        } else {
            other
        }
    }

    /// `Kept` if either side is kept
    pub fn or(self, other: FilterState) -> Self {
        if self.is_kept() {
            self
        } else {
            other
        }
    }
}

impl From<bool> for FilterState {
    fn from(kept: bool) -> Self {
        if kept {
            FilterState::Kept
        } else {
            FilterState::Discarded
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterState::Kept => write!(f, "KEPT"),
            FilterState::Discarded => write!(f, "DISCARDED"),
        }
    }
}

/// A pure, total predicate over one value.
///
/// Filters are shared between threads as part of immutable contract
/// constants, hence the `Send + Sync` bound. Closures of the form
/// `Fn(&T) -> FilterState` are filters.
pub trait Filter<T: ?Sized>: Send + Sync {
    fn filter(&self, value: &T) -> FilterState;
}

impl<T: ?Sized, F> Filter<T> for F
where
    F: Fn(&T) -> FilterState + Send + Sync,
{
    fn filter(&self, value: &T) -> FilterState {
        self(value)
    }
}

/// Evaluate one filter on one value, catching a panic inside the filter.
///
/// A panic is reported as `Error::FilterPanicked` carrying the panic
/// message. Callers that follow the fail-closed rule treat any `Err` as
/// `FilterState::Discarded`.
pub fn try_filter_one<T, F>(filter: &F, value: &T) -> Result<FilterState>
where
    T: ?Sized,
    F: Filter<T> + ?Sized,
{
    panic::catch_unwind(AssertUnwindSafe(|| filter.filter(value))).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        debug!(reason = %message, "filter panicked");
        Error::FilterPanicked(message)
    })
}

fn panic_message(payload: &(dyn AnyPayload + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Keeps what the inner filter discards
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Not<F>(pub F);

impl<T: ?Sized, F: Filter<T>> Filter<T> for Not<F> {
    fn filter(&self, value: &T) -> FilterState {
        self.0.filter(value).opposite()
    }
}

/// Keeps a value only if every inner filter keeps it.
///
/// Stops at the first discarding filter. An empty `All` keeps everything.
pub struct All<T: ?Sized> {
    filters: Vec<Box<dyn Filter<T>>>,
}

impl<T: ?Sized> All<T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter (builder pattern)
    pub fn with(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T: ?Sized> Default for All<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Filter<T> for All<T> {
    fn filter(&self, value: &T) -> FilterState {
        let mut state = FilterState::Kept;
        for filter in &self.filters {
            state = state.and(filter.filter(value));
            if state.is_discarded() {
                break;
            }
        }
        state
    }
}

/// Keeps a value if at least one inner filter keeps it.
///
/// An empty `Any` discards everything.
pub struct Any<T: ?Sized> {
    filters: Vec<Box<dyn Filter<T>>>,
}

impl<T: ?Sized> Any<T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter (builder pattern)
    pub fn with(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T: ?Sized> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Filter<T> for Any<T> {
    fn filter(&self, value: &T) -> FilterState {
        let mut state = FilterState::Discarded;
        for filter in &self.filters {
            state = state.or(filter.filter(value));
            if state.is_kept() {
                break;
            }
        }
        state
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
