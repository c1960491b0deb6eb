use std::ops::Range;

use log::trace;

use crate::RadixElement;

use super::common::{CountArena, Side, insertion_sort_by_key};
use super::digit::Radix;

/// Partitions at or below this length are insertion sorted instead of
/// bucketed.
pub(crate) const INSERTION_THRESHOLD: usize = 24;

/// Most-significant-digit radix sort of `data`, using `scratch` (same length)
/// as the second buffer. `place` is the place value of the leading digit.
///
/// Buffers trade roles at every level. The returned side names the buffer
/// holding the sorted result; the other holds leftovers.
pub(crate) fn sort<I, K, F>(
    data: &mut [I],
    scratch: &mut [I],
    arena: &mut CountArena,
    radix: Radix,
    place: u64,
    insertion_threshold: usize,
    key: &F,
) -> Side
where
    I: Copy,
    K: RadixElement,
    F: Fn(&I) -> K,
{
    debug_assert_eq!(data.len(), scratch.len());
    let mut msd = Msd {
        arena,
        radix,
        insertion_threshold,
        key,
    };
    msd.level(data, scratch, place, 0)
}

struct Msd<'a, F> {
    arena: &'a mut CountArena,
    radix: Radix,
    insertion_threshold: usize,
    key: &'a F,
}

impl<F> Msd<'_, F> {
    fn level<I, K>(&mut self, data: &mut [I], scratch: &mut [I], place: u64, depth: usize) -> Side
    where
        I: Copy,
        K: RadixElement,
        F: Fn(&I) -> K,
    {
        if data.len() < 2 || place == 0 {
            return Side::Data;
        }
        // Items here agree on every digit above `place`, so the full key
        // orders them.
        if data.len() <= self.insertion_threshold {
            insertion_sort_by_key(data, self.key);
            return Side::Data;
        }

        let radix = self.radix;
        let key = self.key;
        let buckets = radix.buckets();
        let next_place = place / radix.base as u64;
        let mut counts = self.arena.take(depth, buckets);

        // With fewer items than buckets only the digits that occur are
        // visited, so a level costs O(len) rather than O(base).
        let sparse = data.len() < buckets;
        let mut present = Vec::new();
        for item in data.iter() {
            let d = radix.of(key(item), place);
            if sparse && counts[d] == 0 {
                present.push(d);
            }
            counts[d] += 1;
        }
        if sparse {
            present.sort_unstable();
        } else {
            present.extend((0..buckets).filter(|&b| counts[b] != 0));
        }

        // Every item shares this digit: nothing to move, descend in place.
        if let &[only] = present.as_slice() {
            counts[only] = 0;
            self.arena.put_zeroed(depth, counts);
            return self.level(data, scratch, next_place, depth + 1);
        }

        let mut sum = 0;
        for &d in &present {
            let count = counts[d];
            counts[d] = sum;
            sum += count;
        }
        for item in data.iter() {
            let d = radix.of(key(item), place);
            scratch[counts[d]] = *item;
            counts[d] += 1;
        }
        // `counts` now holds bucket end offsets.
        let mut ranges: Vec<Range<usize>> = Vec::with_capacity(present.len());
        let mut start = 0;
        for &d in &present {
            ranges.push(start..counts[d]);
            start = counts[d];
            counts[d] = 0;
        }
        self.arena.put_zeroed(depth, counts);

        if next_place == 0 {
            return Side::Scratch;
        }

        trace!(
            "msd level depth={} place={} len={} buckets={} occupied={}",
            depth,
            place,
            data.len(),
            buckets,
            ranges.len()
        );

        // The largest bucket picks where this level's result lives; smaller
        // buckets that finish in the other buffer are copied across.
        let largest = ranges
            .iter()
            .enumerate()
            .max_by_key(|(_, r)| r.len())
            .map_or(0, |(i, _)| i);
        let range = ranges[largest].clone();
        let target = self
            .level(&mut scratch[range.clone()], &mut data[range], next_place, depth + 1)
            .flip();

        for (i, range) in ranges.into_iter().enumerate() {
            if i == largest {
                continue;
            }
            let side = self
                .level(
                    &mut scratch[range.clone()],
                    &mut data[range.clone()],
                    next_place,
                    depth + 1,
                )
                .flip();
            if side != target {
                match target {
                    Side::Data => data[range.clone()].copy_from_slice(&scratch[range]),
                    Side::Scratch => scratch[range.clone()].copy_from_slice(&data[range]),
                }
            }
        }

        target
    }
}
