//! The integer sequence and its running total

use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Sequence summed when no numbers are supplied
pub const DEFAULT_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Ordered, immutable sequence of integers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbers {
    values: Vec<i64>,
}

impl Default for Numbers {
    fn default() -> Self {
        Self::from_slice(&DEFAULT_NUMBERS)
    }
}

impl Numbers {
    /// Create a sequence from owned values
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn from_slice(values: &[i64]) -> Self {
        Self::new(values.to_vec())
    }

    /// Parse a comma-separated list like "10,-3,7"
    ///
    /// Entries are trimmed. An empty or whitespace-only string yields the
    /// empty sequence.
    pub fn parse(list: &str) -> Result<Self> {
        if list.trim().is_empty() {
            return Ok(Self::new(Vec::new()));
        }

        let values = list
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i64>().map_err(|source| Error::InvalidNumber {
                    input: part.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = values.len(), "parsed number list");
        Ok(Self::new(values))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.values.iter()
    }

    /// Sum every element exactly once, in order
    ///
    /// Returns `Error::Overflow` with the index of the element that pushed
    /// the accumulator out of `i64` range.
    pub fn sum(&self) -> Result<i64> {
        let mut total: i64 = 0;
        for (index, value) in self.values.iter().enumerate() {
            total = total
                .checked_add(*value)
                .ok_or(Error::Overflow { index })?;
            trace!(index, value, total, "accumulated");
        }
        Ok(total)
    }
}

impl<'a> IntoIterator for &'a Numbers {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<i64>> for Numbers {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}
