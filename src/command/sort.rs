use clap::Args;
use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::command::HeapOrder;
use crate::runtime::{self, Config};

pub const RANDOM_VALUE_RANGE: std::ops::RangeInclusive<i64> = -1000..=1000;

#[derive(Args)]
pub struct SortCMD {
    // Values to sort
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    // Sort this many random values instead
    #[arg(long)]
    pub random: Option<usize>,

    // Seed for --random
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

impl SortCMD {
    /// Run the commandline option.
    /// Heap-sorts the given (or generated) integers in the configured order
    pub fn try_execute(&mut self) -> anyhow::Result<()> {
        let values = match (self.values.is_empty(), self.random) {
            (false, None) => self.values.clone(),
            (true, Some(count)) => random_values(count, self.seed),
            (false, Some(_)) => {
                return Err(runtime::Error::invalid_argument(
                    "--random",
                    Some("cannot be combined with explicit values"),
                )
                .into())
            }
            (true, None) => {
                return Err(runtime::Error::invalid_argument(
                    "values",
                    Some("give values to sort or use --random"),
                )
                .into())
            }
        };

        let params = HeapSort {
            order: Config::current_order(),
            values,
        };
        log::debug!("Sorting {} values, order {:?}", params.values.len(), params.order);

        let sorted = params.run();
        println!("{}", sorted.iter().join(" "));

        log::info!("Sort has finished successfully");
        Ok(())
    }
}

/// Heap sort of a batch of integers.
pub struct HeapSort {
    pub order: HeapOrder,
    pub values: Vec<i64>,
}

impl HeapSort {
    /// Insert everything, then drain in priority order
    pub fn run(self) -> Vec<i64> {
        let mut heap = self.order.new_heap();
        heap.extend(self.values);
        heap.into_sorted_vec()
    }
}

pub fn random_values(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(RANDOM_VALUE_RANGE)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_max() {
        let sorted = HeapSort {
            order: HeapOrder::Max,
            values: vec![3, -7, 12, 3, 0],
        }
        .run();
        assert_eq!(sorted, vec![12, 3, 3, 0, -7]);
    }

    #[test]
    fn test_sort_min_random() {
        let values = random_values(200, 42);
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|v| RANDOM_VALUE_RANGE.contains(v)));

        let mut expected = values.clone();
        expected.sort();
        let sorted = HeapSort {
            order: HeapOrder::Min,
            values,
        }
        .run();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_random_is_seeded() {
        assert_eq!(random_values(16, 7), random_values(16, 7));
    }

    #[test]
    fn test_rejects_values_and_random() {
        let mut cmd = SortCMD {
            values: vec![1, 2],
            random: Some(3),
            seed: 0,
        };
        assert!(cmd.try_execute().is_err());

        let mut cmd = SortCMD {
            values: vec![],
            random: None,
            seed: 0,
        };
        assert!(cmd.try_execute().is_err());
    }
}
