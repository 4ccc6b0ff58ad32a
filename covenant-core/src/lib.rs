//! Core types for the Covenant contract engine
//!
//! This crate provides the building blocks the contract layer composes:
//! - `Value`, the dynamic representation of a positional argument
//! - `FilterState` and the `Filter` capability, with combinators
//! - leaf filters (numbers, text, membership, containers, types)
//! - bounded string rendering for diagnostics
//! - error types

pub mod bounded;
pub mod error;
pub mod filter;
pub mod filters;
pub mod value;

pub use error::{Error, Result};
pub use filter::{try_filter_one, All, Any, Filter, FilterState, Not};
pub use value::{Value, ValueType};
