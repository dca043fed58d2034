use std::ops::{AddAssign, SubAssign};

use ahash::AHashMap;
use num_integer::Integer;
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::Zero;

// Largest n whose pentagonal sums stay within i64; from here on the
// BigInt-backed table takes over.
const BIGINT_MIN: usize = 395;

/// Memoized partition counting via Euler's pentagonal number theorem.
///
/// Two independent append-only tables back the recurrence: a machine-width
/// one for `n < 395` and a big-integer one above. Each régime recurses
/// through its own table only; values are never copied between the two.
// ref: https://en.wikipedia.org/wiki/Pentagonal_number_theorem
pub struct PartitionCounter {
    small: AHashMap<usize, i64>,
    big: AHashMap<usize, BigInt>,
}

impl PartitionCounter {
    pub fn new() -> Self {
        let small = AHashMap::from_iter([(0, 1), (1, 1), (2, 2)]);
        let big = AHashMap::from_iter([(0, 1), (1, 1), (2, 2)].map(|(n, v)| (n, BigInt::from(v))));
        Self { small, big }
    }

    /// The number of partitions of `n`, with `count(0) == 1`.
    pub fn count(&mut self, n: usize) -> BigInt {
        if n < BIGINT_MIN {
            BigInt::from(self.count_small(n))
        } else {
            self.count_big(n)
        }
    }

    // Both régimes fill bottom-up, so no recursion and every intermediate
    // value is already in the table when a later one needs it.
    fn count_small(&mut self, n: usize) -> i64 {
        if let Some(&v) = self.small.get(&n) {
            return v;
        }
        for m in 3..=n {
            if self.small.contains_key(&m) {
                continue;
            }
            let v = pentagonal_sum(m, &self.small);
            trace!("p({m}) = {v}");
            self.small.insert(m, v);
        }
        self.small[&n]
    }

    fn count_big(&mut self, n: usize) -> BigInt {
        if let Some(v) = self.big.get(&n) {
            return v.clone();
        }
        debug!("p({n}): filling the bigint table");
        for m in 3..=n {
            if self.big.contains_key(&m) {
                continue;
            }
            let v = pentagonal_sum(m, &self.big);
            self.big.insert(m, v);
        }
        self.big[&n].clone()
    }
}

impl Default for PartitionCounter {
    fn default() -> Self {
        Self::new()
    }
}

// One step of the recurrence,
//
//   p(m) = Σ_j (-1)^(j-1) [ p(m - j(3j-1)/2) + p(m - j(3j+1)/2) ]
//
// over the j whose first pentagonal argument is still non-negative.
// Every value below `m` must already be present in `table`.
fn pentagonal_sum<T>(m: usize, table: &AHashMap<usize, T>) -> T
where
    T: Zero,
    for<'a> T: AddAssign<&'a T> + SubAssign<&'a T>,
{
    let mut acc = T::zero();

    for j in 1usize.. {
        let g = j * (3 * j - 1) / 2;
        if g > m {
            break;
        }
        for g in [g, g + j] {
            if g > m {
                continue;
            }
            if j.is_even() {
                acc -= &table[&(m - g)];
            } else {
                acc += &table[&(m - g)];
            }
        }
    }

    acc
}
