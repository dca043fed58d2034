use std::fmt;
use std::ops::Index;

use delegate::delegate;
use itertools::Itertools;

use crate::{AllPartitions, Error, Result};

/// An integer partition: a non-increasing sequence of positive parts.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Partition {
    parts: Vec<usize>,
}

impl Partition {
    /// Creates a partition from a vector of parts.
    /// Fails unless the parts are positive and non-increasing.
    pub fn new(parts: Vec<usize>) -> Result<Self> {
        if !Self::is_valid(&parts) {
            return Err(Error::InvalidPartition(format!("{parts:?}")));
        }
        Ok(Self { parts })
    }

    /// Creates a partition from parts the caller guarantees to be sorted
    /// and positive. Used by producers whose output is valid by construction.
    pub(crate) fn new_unchecked(parts: Vec<usize>) -> Self {
        debug_assert!(Self::is_valid(&parts));
        Self { parts }
    }

    /// The empty partition of 0.
    pub fn empty() -> Self {
        Self { parts: vec![] }
    }

    // non-increasing, so positivity reduces to the last part.
    fn is_valid(parts: &[usize]) -> bool {
        parts.windows(2).all(|w| w[0] >= w[1]) && parts.last().map_or(true, |&p| p >= 1)
    }

    delegate! {
        to self.parts {
            /// The number of parts.
            pub fn len(&self) -> usize;

            /// Returns true if the partition has no parts.
            pub fn is_empty(&self) -> bool;

            pub fn iter(&self) -> impl Iterator<Item = &usize>;
        }
    }

    /// The parts of the partition.
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// The integer being partitioned.
    pub fn sum(&self) -> usize {
        self.parts.iter().sum()
    }

    /// The part at `i`, or an error outside `0..len`.
    pub fn get(&self, i: usize) -> Result<usize> {
        self.parts
            .get(i)
            .copied()
            .ok_or(Error::IndexOutOfRange { index: i, len: self.parts.len() })
    }

    /// Replaces the part at `i` in place. The new value must keep the
    /// sequence non-increasing and positive: `parts[i+1] <= v <= parts[i-1]`,
    /// with no upper bound at the first index and a lower bound of 1 at the
    /// last.
    pub fn set(&mut self, i: usize, v: usize) -> Result<()> {
        if i >= self.parts.len() {
            return Err(Error::IndexOutOfRange { index: i, len: self.parts.len() });
        }

        let upper = if i > 0 { self.parts[i - 1] } else { usize::MAX };
        let lower = if i + 1 < self.parts.len() { self.parts[i + 1] } else { 1 };

        if v < lower || v > upper {
            return Err(Error::InvalidPartition(format!(
                "part {v} at index {i} is outside [{lower}, {upper}]"
            )));
        }

        self.parts[i] = v;
        Ok(())
    }

    /// The conjugate partition, i.e. the transpose of the Young diagram.
    pub fn conj(&self) -> Self {
        let Some(&max) = self.parts.first() else {
            return Self::empty();
        };

        // parts are sorted, so the parts >= i form a prefix.
        let parts = (1..=max)
            .map(|i| self.parts.iter().take_while(|&&p| p >= i).count())
            .collect_vec();

        Self::new_unchecked(parts)
    }

    /// Returns true if the Young diagram of `self` contains that of `p`.
    pub fn contains(&self, p: &Partition) -> bool {
        (0..p.len()).all(|i| self[i] >= p[i])
    }

    /// Returns true if cell `(i, j)` lies in the Young diagram.
    pub fn contains_cell(&self, i: usize, j: usize) -> bool {
        j < self[i]
    }

    /// All partitions of a non-negative integer `n`, restartable.
    pub fn all_partitions(n: usize) -> AllPartitions {
        AllPartitions::new(n)
    }
}

impl TryFrom<Vec<usize>> for Partition {
    type Error = Error;

    fn try_from(parts: Vec<usize>) -> Result<Self> {
        Self::new(parts)
    }
}

impl Index<usize> for Partition {
    type Output = usize;

    fn index(&self, i: usize) -> &Self::Output {
        self.parts.get(i).unwrap_or(&0)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.parts.iter().join(", "))
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Partition").field(&self.parts).finish()
    }
}
