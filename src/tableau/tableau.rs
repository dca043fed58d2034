use crate::{Error, Partition, Result};

/// A Young diagram with a label in each box, stored as a `rows × cols`
/// rectangle padded with the sentinel 0 outside the diagram.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YoungTableau {
    shape: Partition,
    grid: Vec<Vec<usize>>,
}

impl YoungTableau {
    /// The tableau of `shape` with the standard row-major fill `1..=n`.
    pub fn new(shape: Partition) -> Self {
        let n = shape.sum();
        Self::build(shape, (1..=n).collect())
    }

    /// The tableau of `shape` filled row-major from `fill`.
    /// Fails unless `fill` holds exactly one label per box.
    pub fn with_fill(shape: Partition, fill: Vec<usize>) -> Result<Self> {
        let n = shape.sum();
        if fill.len() != n {
            return Err(Error::SizeMismatch { fill_len: fill.len(), size: n });
        }
        Ok(Self::build(shape, fill))
    }

    fn build(shape: Partition, fill: Vec<usize>) -> Self {
        let cols = shape[0];
        let mut labels = fill.into_iter();

        let grid: Vec<Vec<usize>> = shape
            .iter()
            .map(|&r| {
                let mut row = Vec::with_capacity(cols);
                row.extend(labels.by_ref().take(r));
                row.resize(cols, 0);
                row
            })
            .collect();

        Self { shape, grid }
    }

    pub fn shape(&self) -> &Partition {
        &self.shape
    }

    /// The number of boxes.
    pub fn n(&self) -> usize {
        self.shape.sum()
    }

    pub fn rows(&self) -> usize {
        self.shape.len()
    }

    pub fn cols(&self) -> usize {
        self.shape[0]
    }

    /// The label at `(i, j)`, or 0 outside the diagram or the grid.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.grid
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0)
    }

    /// Row `i` of the grid, padding included.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.grid[i]
    }

    /// The conjugate tableau: reflect labels across the main diagonal,
    /// onto the conjugate shape.
    pub fn conj(&self) -> Self {
        let shape = self.shape.conj();
        let cols = shape[0];

        let grid: Vec<Vec<usize>> = shape
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                let mut row = Vec::with_capacity(cols);
                row.extend((0..r).map(|j| self.get(j, i)));
                row.resize(cols, 0);
                row
            })
            .collect();

        Self { shape, grid }
    }
}
