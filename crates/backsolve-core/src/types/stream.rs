//! Cash flow stream type.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A single cash flow keyed by its day offset from the valuation date.
///
/// # Example
///
/// ```rust
/// use backsolve_core::types::CashFlowEntry;
///
/// let cf = CashFlowEntry::floating(2.5, 91.0, 0.0525);
/// assert_eq!(cf.reference_rate, 0.0525);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    /// Cash flow amount (total dollars, signed)
    pub amount: f64,
    /// Days after the valuation date (day zero)
    pub day_offset: f64,
    /// Period reference rate as a decimal (0.05 = 5%); ignored by flat-yield discounting
    #[serde(default)]
    pub reference_rate: f64,
}

impl CashFlowEntry {
    /// Creates an entry with no reference rate.
    #[must_use]
    pub fn new(amount: f64, day_offset: f64) -> Self {
        Self {
            amount,
            day_offset,
            reference_rate: 0.0,
        }
    }

    /// Creates an entry discounted off a floating reference rate.
    #[must_use]
    pub fn floating(amount: f64, day_offset: f64, reference_rate: f64) -> Self {
        Self {
            amount,
            day_offset,
            reference_rate,
        }
    }
}

impl fmt::Display for CashFlowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {}: {} @ {:.4}%",
            self.day_offset,
            self.amount,
            self.reference_rate * 100.0
        )
    }
}

/// An ordered, validated stream of cash flows.
///
/// A stream always holds at least one entry, every value is finite, the
/// first day offset is after day zero and offsets are strictly increasing.
/// Once built it cannot be mutated.
///
/// Serializes as a bare array of entries, the same shape it deserializes from.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowStream {
    entries: Vec<CashFlowEntry>,
}

impl CashFlowStream {
    /// Builds a stream from entries, checking every invariant.
    pub fn new(entries: Vec<CashFlowEntry>) -> CoreResult<Self> {
        if entries.is_empty() {
            return Err(CoreError::EmptyStream);
        }

        let mut previous = 0.0;
        for (index, entry) in entries.iter().enumerate() {
            check_finite("amount", index, entry.amount)?;
            check_finite("day offset", index, entry.day_offset)?;
            check_finite("reference rate", index, entry.reference_rate)?;

            if entry.day_offset <= previous {
                return Err(if index == 0 {
                    CoreError::NonPositiveFirstOffset {
                        offset: entry.day_offset,
                    }
                } else {
                    CoreError::NonIncreasingDayOffset {
                        index,
                        offset: entry.day_offset,
                        previous,
                    }
                });
            }
            previous = entry.day_offset;
        }

        log::trace!("built cash flow stream with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Builds a stream from parallel amount, offset and rate sequences.
    ///
    /// All three sequences must have the same length.
    pub fn from_slices(
        amounts: &[f64],
        day_offsets: &[f64],
        reference_rates: &[f64],
    ) -> CoreResult<Self> {
        check_length("day offsets", amounts.len(), day_offsets.len())?;
        check_length("reference rates", amounts.len(), reference_rates.len())?;

        Self::new(
            amounts
                .iter()
                .zip(day_offsets)
                .zip(reference_rates)
                .map(|((&amount, &day_offset), &reference_rate)| {
                    CashFlowEntry::floating(amount, day_offset, reference_rate)
                })
                .collect(),
        )
    }

    /// Builds a stream from amounts and offsets alone, with zero reference rates.
    pub fn from_slices_without_rates(amounts: &[f64], day_offsets: &[f64]) -> CoreResult<Self> {
        check_length("day offsets", amounts.len(), day_offsets.len())?;

        Self::new(
            amounts
                .iter()
                .zip(day_offsets)
                .map(|(&amount, &day_offset)| CashFlowEntry::new(amount, day_offset))
                .collect(),
        )
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[CashFlowEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `false`; a built stream is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlowEntry> {
        self.entries.iter()
    }

    /// Returns the day offset of the first entry.
    #[must_use]
    pub fn first_day_offset(&self) -> f64 {
        self.entries[0].day_offset
    }

    /// Returns the day offset of the last entry.
    #[must_use]
    pub fn last_day_offset(&self) -> f64 {
        self.entries[self.entries.len() - 1].day_offset
    }

    /// Returns a copy of this stream with every reference rate replaced.
    ///
    /// Passing zero turns spread backsolving into yield backsolving.
    pub fn with_flat_reference_rate(&self, rate: f64) -> CoreResult<Self> {
        Self::new(
            self.entries
                .iter()
                .map(|cf| CashFlowEntry::floating(cf.amount, cf.day_offset, rate))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a CashFlowStream {
    type Item = &'a CashFlowEntry;
    type IntoIter = std::slice::Iter<'a, CashFlowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for CashFlowStream {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CashFlowStream {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<CashFlowEntry>::deserialize(deserializer)?;
        Self::new(entries).map_err(serde::de::Error::custom)
    }
}

fn check_finite(field: &'static str, index: usize, value: f64) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NonFinite {
            field,
            index,
            value,
        })
    }
}

fn check_length(field: &'static str, expected: usize, actual: usize) -> CoreResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CoreError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}
