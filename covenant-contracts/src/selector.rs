//! Parameter selection
//!
//! A `ParameterSelector` names the positional parameters an obligation
//! governs. It is a 63-bit bitmap: bit `i` stands for parameter `i + 1`.
//!
//! Two bitmaps are special:
//!
//! - [`EVERY_PARAMETER`] (all 63 bits) governs every parameter.
//! - `0` governs no parameter and inverts the check: the selection passes
//!   only when the filter keeps *none* of the arguments. A filter that keeps
//!   nulls over bitmap `0` therefore reads "no argument may be null".
//!
//! Filters are evaluated defensively. A panic inside a filter is caught and
//! counts as a discarded argument, so a broken filter can fail a check but
//! never unwind through the caller.

use std::fmt;

use covenant_core::{try_filter_one, Filter, FilterState};
use tracing::{debug, trace};

use crate::errors::{ContractError, ContractResult};

/// Number of positional parameters a selector can address
pub const PARAMETER_COUNT: usize = 63;

/// Bitmap selecting every parameter
pub const EVERY_PARAMETER: u64 = 0x7FFF_FFFF_FFFF_FFFF;

pub const PARAMETER_1: ParameterSelector = ParameterSelector::new(0x0001);
pub const PARAMETER_2: ParameterSelector = ParameterSelector::new(0x0002);
pub const PARAMETER_3: ParameterSelector = ParameterSelector::new(0x0004);
pub const PARAMETER_4: ParameterSelector = ParameterSelector::new(0x0008);
pub const PARAMETER_5: ParameterSelector = ParameterSelector::new(0x0010);
pub const PARAMETER_6: ParameterSelector = ParameterSelector::new(0x0020);
pub const PARAMETER_7: ParameterSelector = ParameterSelector::new(0x0040);
pub const PARAMETER_8: ParameterSelector = ParameterSelector::new(0x0080);
pub const PARAMETER_9: ParameterSelector = ParameterSelector::new(0x0100);

/// Immutable set of governed parameter positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ParameterSelector {
    bitmap: u64,
}

impl ParameterSelector {
    /// Build from a raw bitmap. Bit 63 lies outside the selector and is
    /// dropped.
    pub const fn new(bitmap: u64) -> Self {
        Self {
            bitmap: bitmap & EVERY_PARAMETER,
        }
    }

    pub const fn every() -> Self {
        Self::new(EVERY_PARAMETER)
    }

    /// The inverted, zero bitmap
    pub const fn none() -> Self {
        Self::new(0)
    }

    /// Select a single parameter, numbered from 1
    pub fn parameter(number: usize) -> Option<Self> {
        if (1..=PARAMETER_COUNT).contains(&number) {
            Some(Self::new(1 << (number - 1)))
        } else {
            None
        }
    }

    /// Select every parameter but one, numbered from 1
    pub fn every_except(number: usize) -> Option<Self> {
        Self::parameter(number).map(|single| Self::new(EVERY_PARAMETER & !single.bitmap))
    }

    /// Select the given 0-based positions
    pub fn from_positions(positions: impl IntoIterator<Item = usize>) -> ContractResult<Self> {
        let mut bitmap = 0u64;
        for position in positions {
            if position >= PARAMETER_COUNT {
                return Err(ContractError::InvalidParameter(position));
            }
            bitmap |= 1 << position;
        }
        Ok(Self::new(bitmap))
    }

    pub const fn bitmap(&self) -> u64 {
        self.bitmap
    }

    pub fn is_every(&self) -> bool {
        self.bitmap == EVERY_PARAMETER
    }

    pub fn is_none(&self) -> bool {
        self.bitmap == 0
    }

    /// Whether the 0-based `position` is selected
    pub fn is_selected(&self, position: usize) -> bool {
        position < PARAMETER_COUNT && self.bitmap & (1 << position) != 0
    }

    /// Selected 0-based positions, ascending
    pub fn positions(&self) -> Positions {
        Positions {
            remaining: self.bitmap,
        }
    }

    pub fn count(&self) -> usize {
        self.bitmap.count_ones() as usize
    }

    /// Human-readable name of the selection, used as the subject of
    /// descriptions and violation messages.
    ///
    /// Whichever of the selected or unselected positions is the shorter
    /// list is spelled out:
    ///
    /// ```
    /// use covenant_contracts::ParameterSelector;
    ///
    /// assert_eq!(ParameterSelector::new(0b100).render(), "Parameter 3");
    /// assert_eq!(ParameterSelector::new(0b10101).render(), "Every parameter in ( 1, 3, 5 )");
    /// assert_eq!(ParameterSelector::every_except(3).unwrap().render(), "Every parameter except 3");
    /// ```
    pub fn render(&self) -> String {
        if self.is_every() {
            return "Every parameter".to_string();
        }
        if self.count() == 1 {
            return format!("Parameter {}", self.bitmap.trailing_zeros() + 1);
        }

        let (included, excluded): (Vec<usize>, Vec<usize>) =
            (0..PARAMETER_COUNT).partition(|&position| self.is_selected(position));

        if included.len() == 1 {
            format!("Parameter {}", included[0] + 1)
        } else if excluded.len() == 1 {
            format!("Every parameter except {}", excluded[0] + 1)
        } else if included.len() <= excluded.len() {
            format!("Every parameter in ( {} )", numbered(&included))
        } else {
            format!("Every parameter except ( {} )", numbered(&excluded))
        }
    }

    /// Apply `filter` to the selected arguments.
    ///
    /// - no filter: kept
    /// - zero bitmap: discarded as soon as the filter keeps any argument,
    ///   kept otherwise (including for an absent or empty list)
    /// - absent list: discarded
    /// - otherwise: discarded at the first selected position that is past
    ///   the end of the list or whose argument the filter discards; kept
    ///   when every selected argument is kept
    pub fn filter_parameters<T, F>(&self, filter: Option<&F>, parameters: Option<&[T]>) -> FilterState
    where
        F: Filter<T> + ?Sized,
    {
        let Some(filter) = filter else {
            return FilterState::Kept;
        };

        if self.is_none() {
            let Some(parameters) = parameters else {
                return FilterState::Kept;
            };
            for (position, parameter) in parameters.iter().enumerate() {
                let state = guarded(filter, parameter, position);
                if state.is_kept() {
                    trace!(position, "argument kept under an inverted selection");
                    return state.opposite();
                }
            }
            return FilterState::Kept;
        }

        let Some(parameters) = parameters else {
            return FilterState::Discarded;
        };
        for position in self.positions() {
            let Some(parameter) = parameters.get(position) else {
                trace!(position, length = parameters.len(), "selected parameter is missing");
                return FilterState::Discarded;
            };
            let state = guarded(filter, parameter, position);
            if state.is_discarded() {
                return state;
            }
        }
        FilterState::Kept
    }
}

fn guarded<T, F>(filter: &F, parameter: &T, position: usize) -> FilterState
where
    F: Filter<T> + ?Sized,
{
    match try_filter_one(filter, parameter) {
        Ok(state) => {
            trace!(position, %state, "filtered parameter");
            state
        }
        Err(error) => {
            debug!(position, %error, "filter failed, parameter discarded");
            FilterState::Discarded
        }
    }
}

fn numbered(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|position| (position + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<u64> for ParameterSelector {
    fn from(bitmap: u64) -> Self {
        Self::new(bitmap)
    }
}

impl fmt::Display for ParameterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over the selected 0-based positions of a selector
#[derive(Debug, Clone)]
pub struct Positions {
    remaining: u64,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let position = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for Positions {}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
