use log::trace;

use crate::RadixElement;

use super::common::{Side, inclusive_prefix_sum};
use super::digit::Radix;

/// Least-significant-digit radix sort: `passes` full-array passes, from place
/// value 1 upward, alternating between `data` and `scratch`.
///
/// A pass where every item lands in one bucket is skipped, since it would
/// only copy. Returns the side holding the sorted result.
pub(crate) fn sort<I, K, F>(
    data: &mut [I],
    scratch: &mut [I],
    counts: &mut Vec<usize>,
    radix: Radix,
    passes: u32,
    key: &F,
) -> Side
where
    I: Copy,
    K: RadixElement,
    F: Fn(&I) -> K,
{
    debug_assert_eq!(data.len(), scratch.len());

    let mut side = Side::Data;
    let mut place = 1_u64;
    for pass in 0..passes {
        counts.clear();
        counts.resize(radix.buckets(), 0);

        let moved = match side {
            Side::Data => sort_pass(data, scratch, counts, radix, place, key),
            Side::Scratch => sort_pass(scratch, data, counts, radix, place, key),
        };
        trace!("lsd pass={} place={} moved={}", pass, place, moved);
        if moved {
            side = side.flip();
        }

        if pass + 1 < passes {
            place *= radix.base as u64;
        }
    }
    side
}

/// One stable counting pass from `src` into `dst`. Walks backward, filling
/// each bucket from its end. Returns `false` if the pass was skipped.
fn sort_pass<I, K, F>(
    src: &[I],
    dst: &mut [I],
    counts: &mut [usize],
    radix: Radix,
    place: u64,
    key: &F,
) -> bool
where
    I: Copy,
    K: RadixElement,
    F: Fn(&I) -> K,
{
    for item in src {
        counts[radix.of(key(item), place)] += 1;
    }
    if counts.iter().any(|&c| c == src.len()) {
        return false;
    }

    inclusive_prefix_sum(counts);
    for item in src.iter().rev() {
        let d = radix.of(key(item), place);
        counts[d] -= 1;
        dst[counts[d]] = *item;
    }
    true
}
