use std::fmt;

use crate::{Partition, Result, SkewError};

/// The difference of two nested Young diagrams: the cells of `outer` not
/// covered by `inner`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkewDiagram {
    outer: Partition,
    inner: Partition,
}

impl SkewDiagram {
    /// The skew diagram `outer / inner`.
    /// Fails unless `inner` is contained in `outer`; the failing check is
    /// reported in order: total size, then length, then the first bad row.
    pub fn new(outer: Partition, inner: Partition) -> Result<Self> {
        if inner.sum() > outer.sum() {
            return Err(SkewError::Size { inner: inner.sum(), outer: outer.sum() }.into());
        }
        if inner.len() > outer.len() {
            return Err(SkewError::Length { inner: inner.len(), outer: outer.len() }.into());
        }
        for i in 0..inner.len() {
            if inner[i] > outer[i] {
                return Err(SkewError::RowContainment {
                    row: i,
                    inner: inner[i],
                    outer: outer[i],
                }
                .into());
            }
        }

        Ok(Self { outer, inner })
    }

    pub fn outer(&self) -> &Partition {
        &self.outer
    }

    pub fn inner(&self) -> &Partition {
        &self.inner
    }

    /// The number of cells.
    pub fn n(&self) -> usize {
        self.outer.sum() - self.inner.sum()
    }

    pub fn rows(&self) -> usize {
        self.outer.len()
    }

    pub fn cols(&self) -> usize {
        self.outer[0]
    }

    /// Returns true if cell `(i, j)` lies in the skew diagram.
    pub fn contains_cell(&self, i: usize, j: usize) -> bool {
        self.inner[i] <= j && j < self.outer[i]
    }

    /// The 0/1 cell-membership grid, `rows × cols`, for external rendering.
    pub fn matrix_repr(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|i| {
                (0..self.cols())
                    .map(|j| self.contains_cell(i, j) as u8)
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for SkewDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.outer, self.inner)
    }
}
