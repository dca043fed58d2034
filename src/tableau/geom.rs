use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use crate::YoungTableau;

impl YoungTableau {
    /// The number of occupied cells in row `i` from column `j` rightward.
    pub fn row_len(&self, i: usize, j: usize) -> usize {
        (j..self.cols()).filter(|&l| self.get(i, l) != 0).count()
    }

    /// The number of occupied cells in column `j` from row `i` downward.
    pub fn col_len(&self, i: usize, j: usize) -> usize {
        (i..self.rows()).filter(|&l| self.get(l, j) != 0).count()
    }

    /// The hook length of cell `(i, j)`: the cell itself, its arm and its
    /// leg. 0 outside the diagram.
    pub fn hook_length(&self, i: usize, j: usize) -> usize {
        if self.get(i, j) == 0 {
            return 0;
        }
        self.row_len(i, j) + self.col_len(i, j) - 1
    }

    /// The dimension of the irreducible representation of the symmetric
    /// group indexed by the shape: `n! / ∏ hooks` over all boxes.
    // ref: https://en.wikipedia.org/wiki/Hook_length_formula
    pub fn dimension(&self) -> BigInt {
        let n = self.n();
        let fact: BigInt = (1..=n).map(BigInt::from).product();

        let hooks: BigInt = (0..self.rows())
            .flat_map(|i| (0..self.shape()[i]).map(move |j| (i, j)))
            .map(|(i, j)| {
                let h = self.hook_length(i, j);
                assert!(h > 0, "zero hook at ({i}, {j})");
                BigInt::from(h)
            })
            .product();

        let (dim, rem) = fact.div_rem(&hooks);
        assert!(rem.is_zero(), "hook product does not divide {n}!");
        dim
    }
}

#[cfg(test)]
mod tests {
    use num_traits::One;

    use crate::Partition;

    use super::*;

    fn tab(parts: Vec<usize>) -> YoungTableau {
        YoungTableau::new(Partition::new(parts).unwrap())
    }

    #[test]
    fn row_col_len() {
        let t = tab(vec![3, 2]);
        assert_eq!(t.row_len(0, 0), 3);
        assert_eq!(t.row_len(0, 2), 1);
        assert_eq!(t.row_len(1, 0), 2);
        assert_eq!(t.row_len(1, 2), 0);
        assert_eq!(t.col_len(0, 0), 2);
        assert_eq!(t.col_len(0, 2), 1);
        assert_eq!(t.col_len(1, 0), 1);
        assert_eq!(t.col_len(0, 3), 0);
    }

    #[test]
    fn hook_lengths() {
        let t = tab(vec![3, 2]);
        assert_eq!(t.hook_length(0, 0), 4);
        assert_eq!(t.hook_length(0, 1), 3);
        assert_eq!(t.hook_length(0, 2), 1);
        assert_eq!(t.hook_length(1, 0), 2);
        assert_eq!(t.hook_length(1, 1), 1);

        // outside the diagram
        assert_eq!(t.hook_length(1, 2), 0);
        assert_eq!(t.hook_length(2, 0), 0);
    }

    #[test]
    fn hook_lengths_staircase() {
        let t = tab(vec![3, 2, 1]);
        assert_eq!(t.hook_length(0, 0), 5);
        assert_eq!(t.hook_length(0, 1), 3);
        assert_eq!(t.hook_length(0, 2), 1);
        assert_eq!(t.hook_length(1, 0), 3);
        assert_eq!(t.hook_length(1, 1), 1);
        assert_eq!(t.hook_length(2, 0), 1);
    }

    #[test]
    fn dimensions() {
        assert_eq!(tab(vec![4]).dimension(), BigInt::one());
        assert_eq!(tab(vec![1, 1, 1, 1]).dimension(), BigInt::one());
        assert_eq!(tab(vec![2, 1]).dimension(), BigInt::from(2));
        assert_eq!(tab(vec![2, 2]).dimension(), BigInt::from(2));
        assert_eq!(tab(vec![3, 2]).dimension(), BigInt::from(5));
        assert_eq!(tab(vec![3, 2, 1]).dimension(), BigInt::from(16));
    }

    #[test]
    fn dimension_of_empty_shape() {
        let t = YoungTableau::new(Partition::empty());
        assert_eq!(t.dimension(), BigInt::one());
    }

    #[test]
    fn dimension_is_conj_invariant() {
        for p in Partition::all_partitions(6) {
            let t = YoungTableau::new(p);
            assert_eq!(t.dimension(), t.conj().dimension());
        }
    }

    // Σ dim² over all shapes of n is n! (the regular representation).
    #[test]
    fn sum_of_squares_is_factorial() {
        for n in 1..=6 {
            let sum: BigInt = Partition::all_partitions(n)
                .iter()
                .map(|p| {
                    let d = YoungTableau::new(p).dimension();
                    &d * &d
                })
                .sum();
            let fact: BigInt = (1..=n).map(BigInt::from).product();
            assert_eq!(sum, fact, "n = {n}");
        }
    }
}
