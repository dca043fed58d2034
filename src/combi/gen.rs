use crate::Partition;

/// The set of all partitions of a fixed non-negative integer, traversed
/// largest part first: `[n]` down to `[1, 1, ..., 1]`.
///
/// The value only captures `n`; every traversal starts a fresh cursor and
/// reproduces the identical sequence, whose length equals
/// [`PartitionCounter::count`](crate::PartitionCounter::count) of `n` —
/// except for `n == 0`, where the enumerated list is empty while the count
/// is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllPartitions {
    n: usize,
}

impl AllPartitions {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn iter(&self) -> PartitionIter {
        PartitionIter::new(self.n)
    }
}

impl IntoIterator for AllPartitions {
    type Item = Partition;
    type IntoIter = PartitionIter;

    fn into_iter(self) -> PartitionIter {
        self.iter()
    }
}

impl IntoIterator for &AllPartitions {
    type Item = Partition;
    type IntoIter = PartitionIter;

    fn into_iter(self) -> PartitionIter {
        self.iter()
    }
}

/// One traversal over the partitions of `n`.
///
/// The parts of the current partition sit in `a[..k]`, non-increasing.
/// Each `next` emits the current state and then rewrites the buffer in
/// place to its successor.
pub struct PartitionIter {
    a: Vec<usize>,
    k: usize,
    done: bool,
}

impl PartitionIter {
    pub(crate) fn new(n: usize) -> Self {
        // the partition list of 0 is empty, even though p(0) = 1.
        if n == 0 {
            return Self { a: vec![], k: 0, done: true };
        }

        let mut a = vec![0; n];
        a[0] = n;

        Self { a, k: 1, done: false }
    }

    // The successor of `a[..k]`: decrement the rightmost part above 1 and
    // redistribute the freed total (that 1 plus the all-1 tail) greedily,
    // in chunks no larger than the decremented part.
    fn advance(&mut self) {
        let Some(i) = (0..self.k).rfind(|&i| self.a[i] > 1) else {
            self.done = true;
            return;
        };

        self.a[i] -= 1;
        let x = self.a[i];

        let mut rem = self.k - i;
        let mut j = i + 1;
        while rem > x {
            self.a[j] = x;
            rem -= x;
            j += 1;
        }
        self.a[j] = rem;
        self.k = j + 1;
    }
}

impl Iterator for PartitionIter {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let part = Partition::new_unchecked(self.a[..self.k].to_vec());
        self.advance();

        Some(part)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use crate::PartitionCounter;
    use num_bigint::BigInt;

    use super::*;

    #[test]
    fn partitions_of_5() {
        let v = AllPartitions::new(5)
            .iter()
            .map(|p| p.parts().to_vec())
            .collect_vec();
        let expected: Vec<Vec<usize>> = vec![
            vec![5],
            vec![4, 1],
            vec![3, 2],
            vec![3, 1, 1],
            vec![2, 2, 1],
            vec![2, 1, 1, 1],
            vec![1, 1, 1, 1, 1],
        ];
        assert_eq!(v, expected);
    }

    #[test]
    fn partitions_of_4() {
        let v = Partition::all_partitions(4)
            .iter()
            .map(|p| p.parts().to_vec())
            .collect_vec();
        let expected: Vec<Vec<usize>> = vec![
            vec![4],
            vec![3, 1],
            vec![2, 2],
            vec![2, 1, 1],
            vec![1, 1, 1, 1],
        ];
        assert_eq!(v, expected);
    }

    #[test]
    fn partitions_of_0_is_empty() {
        assert_eq!(AllPartitions::new(0).iter().count(), 0);
    }

    #[test]
    fn partitions_of_1() {
        let v = AllPartitions::new(1).iter().collect_vec();
        assert_eq!(v, vec![Partition::new(vec![1]).unwrap()]);
    }

    #[test]
    fn restartable() {
        let all = AllPartitions::new(6);
        let v0 = all.iter().collect_vec();
        let v1 = all.iter().collect_vec();
        assert_eq!(v0, v1);

        // by-ref and by-value traversals agree too.
        let v2 = (&all).into_iter().collect_vec();
        assert_eq!(v0, v2);
    }

    #[test]
    fn emitted_partitions_are_valid_and_distinct() {
        let n = 9;
        let v = AllPartitions::new(n).iter().collect_vec();

        for p in v.iter() {
            assert_eq!(p.sum(), n);
            assert!(Partition::new(p.parts().to_vec()).is_ok());
        }

        let set: HashSet<_> = v.iter().collect();
        assert_eq!(set.len(), v.len());
    }

    #[test]
    fn length_matches_count() {
        let mut c = PartitionCounter::new();
        for n in 1..=30 {
            let len = AllPartitions::new(n).iter().count();
            assert_eq!(BigInt::from(len), c.count(n), "n = {n}");
        }
    }

    #[test]
    fn count_of_0_disagrees_with_empty_list() {
        // documented discrepancy: p(0) = 1, but nothing is enumerated.
        let mut c = PartitionCounter::new();
        assert_eq!(c.count(0), BigInt::from(1));
        assert_eq!(AllPartitions::new(0).iter().count(), 0);
    }
}
