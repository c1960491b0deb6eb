//! Stable radix sort for integer keys in any base from 2 to [`MAX_BASE`].
//!
//! Two strategies sit behind one driver:
//!
//! - [`Strategy::Msd`] partitions by the leading digit and recurses into each
//!   bucket. It also handles negative keys when `negative_numbers` is set,
//!   by biasing digits into `2 * base` buckets.
//! - [`Strategy::Lsd`] runs one full stable pass per digit position, least
//!   significant first. Keys must be non-negative.
//!
//! Every sort returns a new vector and leaves the input untouched. A
//! [`RadixSorter`] keeps its scratch buffer and bucket arrays between calls.
//!
//! ```
//! use radix_sort::{SortConfig, Strategy, radix_sort};
//!
//! let sorted = radix_sort(&[22, 23, 21, 32, 33, 31, 12, 13, 11], SortConfig::new(10));
//! assert_eq!(sorted, [11, 12, 13, 21, 22, 23, 31, 32, 33]);
//!
//! let config = SortConfig::new(10).with_negative_numbers(true);
//! assert_eq!(radix_sort(&[9, -8, 7, -1], config), [-8, -1, 7, 9]);
//!
//! let lsd = SortConfig::new(2).with_strategy(Strategy::Lsd);
//! assert_eq!(radix_sort(b"foobar", lsd), b"abfoor");
//! ```

mod algorithms;
mod config;
mod element;
mod error;

use std::ops::Range;

use log::debug;

use algorithms::common::{CountArena, Side, scan_keys};
use algorithms::digit::{Radix, leading_place};
use algorithms::{lsd, msd};

pub use algorithms::common::is_sorted_non_decreasing;
pub use algorithms::digit::{
    MAX_BASE, bucket_count, digit, digit_count, max_digit_count, power,
};
pub use config::{ALL_STRATEGIES, SortConfig, Strategy, strategy_name};
pub use element::RadixElement;
pub use error::RadixError;

/// Reusable radix sorter over items of type `I`.
///
/// Holds the scratch buffer and bucket-count arrays so repeated sorts only
/// allocate the returned vector. Not meant for concurrent use; each call
/// needs `&mut self`.
#[derive(Clone, Debug)]
pub struct RadixSorter<I> {
    config: SortConfig,
    scratch: Vec<I>,
    arena: CountArena,
}

impl<I: Copy> RadixSorter<I> {
    pub fn new(config: SortConfig) -> Result<Self, RadixError> {
        config.validate()?;
        Ok(Self {
            config,
            scratch: Vec::new(),
            arena: CountArena::default(),
        })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Stable sort of `input` by the integer key `key` returns.
    pub fn try_sort_by_key<K, F>(&mut self, input: &[I], key: F) -> Result<Vec<I>, RadixError>
    where
        K: RadixElement,
        F: Fn(&I) -> K,
    {
        let mut out = input.to_vec();
        if out.len() < 2 {
            return Ok(out);
        }

        let scan = scan_keys(input, &key);
        if !self.config.negative_numbers {
            if let Some(index) = scan.first_negative {
                return Err(RadixError::NegativeElement { index });
            }
        }

        let SortConfig {
            base,
            strategy,
            negative_numbers,
        } = self.config;
        let radix = Radix {
            base,
            negative: negative_numbers,
        };
        let (digits, place) = leading_place(scan.max_magnitude, base as u64);
        debug!(
            "radix sort strategy={} base={} negative={} len={} digits={}",
            strategy_name(strategy),
            base,
            negative_numbers,
            out.len(),
            digits
        );

        self.scratch.resize(out.len(), out[0]);
        let side = match strategy {
            Strategy::Msd => msd::sort(
                &mut out,
                &mut self.scratch,
                &mut self.arena,
                radix,
                place,
                msd::INSERTION_THRESHOLD,
                &key,
            ),
            Strategy::Lsd => {
                let mut counts = self.arena.take(0, radix.buckets());
                let side = lsd::sort(&mut out, &mut self.scratch, &mut counts, radix, digits, &key);
                self.arena.put(0, counts);
                side
            }
        };

        if side == Side::Scratch {
            std::mem::swap(&mut out, &mut self.scratch);
        }
        Ok(out)
    }

    /// Like [`Self::try_sort_by_key`].
    ///
    /// # Panics
    ///
    /// Panics on any [`RadixError`].
    pub fn sort_by_key<K, F>(&mut self, input: &[I], key: F) -> Vec<I>
    where
        K: RadixElement,
        F: Fn(&I) -> K,
    {
        unwrap_sorted(self.try_sort_by_key(input, key))
    }
}

impl<T: RadixElement> RadixSorter<T> {
    pub fn try_sort(&mut self, input: &[T]) -> Result<Vec<T>, RadixError> {
        self.try_sort_by_key(input, |&x| x)
    }

    /// Sorts `input[range]`, the half-open `[begin, end)` window.
    pub fn try_sort_range(
        &mut self,
        input: &[T],
        range: Range<usize>,
    ) -> Result<Vec<T>, RadixError> {
        if range.start > range.end || range.end > input.len() {
            return Err(RadixError::InvalidRange {
                start: range.start,
                end: range.end,
                len: input.len(),
            });
        }
        self.try_sort(&input[range])
    }

    /// # Panics
    ///
    /// Panics on any [`RadixError`].
    pub fn sort(&mut self, input: &[T]) -> Vec<T> {
        unwrap_sorted(self.try_sort(input))
    }
}

pub fn try_radix_sort<T: RadixElement>(
    input: &[T],
    config: SortConfig,
) -> Result<Vec<T>, RadixError> {
    RadixSorter::new(config)?.try_sort(input)
}

/// Sorted copy of `input`.
///
/// # Panics
///
/// Panics if `config` is invalid or the input has negative keys while
/// `negative_numbers` is off.
pub fn radix_sort<T: RadixElement>(input: &[T], config: SortConfig) -> Vec<T> {
    unwrap_sorted(try_radix_sort(input, config))
}

pub fn try_radix_sort_range<T: RadixElement>(
    input: &[T],
    range: Range<usize>,
    config: SortConfig,
) -> Result<Vec<T>, RadixError> {
    RadixSorter::new(config)?.try_sort_range(input, range)
}

/// # Panics
///
/// Panics on any [`RadixError`].
pub fn radix_sort_range<T: RadixElement>(
    input: &[T],
    range: Range<usize>,
    config: SortConfig,
) -> Vec<T> {
    unwrap_sorted(try_radix_sort_range(input, range, config))
}

pub fn try_radix_sort_by_key<I, K, F>(
    input: &[I],
    config: SortConfig,
    key: F,
) -> Result<Vec<I>, RadixError>
where
    I: Copy,
    K: RadixElement,
    F: Fn(&I) -> K,
{
    RadixSorter::new(config)?.try_sort_by_key(input, key)
}

/// # Panics
///
/// Panics on any [`RadixError`].
pub fn radix_sort_by_key<I, K, F>(input: &[I], config: SortConfig, key: F) -> Vec<I>
where
    I: Copy,
    K: RadixElement,
    F: Fn(&I) -> K,
{
    unwrap_sorted(try_radix_sort_by_key(input, config, key))
}

/// Stable sorting permutation: `out[i]` is the input position of the `i`-th
/// smallest key, ties in input order.
pub fn try_sort_indices<T: RadixElement>(
    input: &[T],
    config: SortConfig,
) -> Result<Vec<usize>, RadixError> {
    let indices: Vec<usize> = (0..input.len()).collect();
    RadixSorter::new(config)?.try_sort_by_key(&indices, |&i| input[i])
}

/// # Panics
///
/// Panics on any [`RadixError`].
pub fn sort_indices<T: RadixElement>(input: &[T], config: SortConfig) -> Vec<usize> {
    unwrap_sorted(try_sort_indices(input, config))
}

fn unwrap_sorted<I>(result: Result<Vec<I>, RadixError>) -> Vec<I> {
    match result {
        Ok(sorted) => sorted,
        Err(err) => panic!("radix sort contract violated: {err}"),
    }
}
