use num_bigint::BigUint;
use num_traits::One;
use std::iter::StepBy;
use std::ops::RangeInclusive;

/// Interleaved slice of `[1, n]` owned by one worker.
///
/// Worker `k` of `p` owns `{k+1, k+1+p, k+1+2p, …} ∩ [1, n]`, i.e. the
/// residue class of `k+1` modulo `p`. The `p` partitions of a range are
/// disjoint and together cover it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    worker: usize,
    workers: usize,
    n: u64,
}

impl Partition {
    /// Callers guarantee `worker < workers`, which also rules out zero workers
    pub(crate) fn new(worker: usize, workers: usize, n: u64) -> Self {
        debug_assert!(worker < workers, "worker {worker} out of range for {workers} workers");
        Self { worker, workers, n }
    }

    pub fn worker(&self) -> usize {
        self.worker
    }

    /// First index owned by this partition (may exceed `n`)
    pub fn first(&self) -> u64 {
        self.worker as u64 + 1
    }

    pub fn indices(&self) -> StepBy<RangeInclusive<u64>> {
        (self.first()..=self.n).step_by(self.workers)
    }

    pub fn len(&self) -> u64 {
        if self.first() > self.n {
            0
        } else {
            (self.n - self.first()) / self.workers as u64 + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Product of every index in the partition; one when it is empty
    pub fn product(&self) -> BigUint {
        let mut product = BigUint::one();
        for index in self.indices() {
            product *= index;
        }
        product
    }
}

/// The `workers` partitions of `[1, n]`, in worker order
pub fn partitions(n: u64, workers: usize) -> impl Iterator<Item = Partition> {
    (0..workers).map(move |worker| Partition::new(worker, workers, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_over_four_workers() {
        let sets: Vec<Vec<u64>> = partitions(10, 4).map(|p| p.indices().collect()).collect();
        assert_eq!(
            sets,
            vec![vec![1, 5, 9], vec![2, 6, 10], vec![3, 7], vec![4, 8]]
        );
    }

    #[test]
    fn test_partitions_cover_range_exactly_once() {
        for n in 2..60u64 {
            for workers in 2..n as usize {
                let mut seen = vec![0u32; n as usize + 1];
                for partition in partitions(n, workers) {
                    for index in partition.indices() {
                        seen[index as usize] += 1;
                    }
                }
                assert_eq!(seen[0], 0);
                assert!(
                    seen[1..].iter().all(|&count| count == 1),
                    "gap or overlap for n={n}, workers={workers}"
                );
            }
        }
    }

    #[test]
    fn test_len_matches_indices() {
        for n in 0..40u64 {
            for workers in 1..12 {
                for partition in partitions(n, workers) {
                    assert_eq!(partition.len(), partition.indices().count() as u64);
                }
            }
        }
    }

    #[test]
    fn test_zero_workers_yield_no_partitions() {
        assert_eq!(partitions(10, 0).count(), 0);
        // Every public partition has a non-zero stride
        for partition in partitions(10, 3) {
            assert!(partition.len() > 0);
            assert!(partition.indices().all(|index| (index - partition.first()) % 3 == 0));
        }
    }

    #[test]
    fn test_empty_partition_contributes_one() {
        let partition = Partition::new(5, 8, 3);
        assert!(partition.is_empty());
        assert_eq!(partition.product(), BigUint::one());
    }

    #[test]
    fn test_partition_product() {
        assert_eq!(Partition::new(0, 4, 10).product(), BigUint::from(45u32));
        assert_eq!(Partition::new(1, 4, 10).product(), BigUint::from(120u32));
    }
}
