use crate::RadixElement;

/// Which of the two working buffers holds a finished result.
///
/// Relative to the call that returns it: `Data` is the slice passed as data,
/// `Scratch` the one passed as scratch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Data,
    Scratch,
}

impl Side {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Side::Data => Side::Scratch,
            Side::Scratch => Side::Data,
        }
    }
}

/// Bucket-count arrays kept per recursion depth so repeated levels and
/// repeated sorts do not allocate.
///
/// Stored arrays are always all zero, so taking one of the same length
/// costs nothing.
#[derive(Clone, Debug, Default)]
pub(crate) struct CountArena {
    levels: Vec<Vec<usize>>,
}

impl CountArena {
    /// Takes the zeroed array for `depth`; hand it back with [`Self::put`]
    /// or [`Self::put_zeroed`].
    pub fn take(&mut self, depth: usize, len: usize) -> Vec<usize> {
        if self.levels.len() <= depth {
            self.levels.resize_with(depth + 1, Vec::new);
        }
        let mut counts = std::mem::take(&mut self.levels[depth]);
        if counts.len() != len {
            counts.clear();
            counts.resize(len, 0);
        }
        counts
    }

    /// Zeroes `counts` and stores it for `depth`.
    pub fn put(&mut self, depth: usize, mut counts: Vec<usize>) {
        counts.fill(0);
        self.levels[depth] = counts;
    }

    /// Stores `counts` for `depth`. The caller has already reset every entry.
    pub fn put_zeroed(&mut self, depth: usize, counts: Vec<usize>) {
        debug_assert!(counts.iter().all(|&c| c == 0));
        self.levels[depth] = counts;
    }
}

/// Stable insertion sort by key, for partitions too small to bucket.
pub(crate) fn insertion_sort_by_key<I, K, F>(data: &mut [I], key: &F)
where
    I: Copy,
    K: RadixElement,
    F: Fn(&I) -> K,
{
    for i in 1..data.len() {
        let item = data[i];
        let k = key(&item);
        let mut j = i;
        while j > 0 && key(&data[j - 1]) > k {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = item;
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct KeyScan {
    pub max_magnitude: u64,
    pub first_negative: Option<usize>,
}

pub(crate) fn scan_keys<I, K, F>(items: &[I], key: &F) -> KeyScan
where
    K: RadixElement,
    F: Fn(&I) -> K,
{
    let mut scan = KeyScan::default();
    for (index, item) in items.iter().enumerate() {
        let k = key(item);
        scan.max_magnitude = scan.max_magnitude.max(k.magnitude());
        if K::SIGNED && scan.first_negative.is_none() && k.is_negative() {
            scan.first_negative = Some(index);
        }
    }
    scan
}

/// Turns counts into bucket end offsets.
#[inline]
pub(crate) fn inclusive_prefix_sum(counts: &mut [usize]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        sum += *c;
        *c = sum;
    }
}

/// Whether `data` is in non-decreasing order.
pub fn is_sorted_non_decreasing<T: PartialOrd>(data: &[T]) -> bool {
    if data.len() < 2 {
        return true;
    }
    for i in 1..data.len() {
        if data[i - 1] > data[i] {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sortedness_check() {
        assert!(is_sorted_non_decreasing::<u8>(&[]));
        assert!(is_sorted_non_decreasing(&[3]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2, 3, 3]));
        assert!(!is_sorted_non_decreasing(&[1, 3, 2]));
        assert!(is_sorted_non_decreasing(&[-5_i64, -5, 0, i64::MAX]));
    }

    #[test]
    fn prefix_sums() {
        let mut ends = [2, 0, 3, 1];
        inclusive_prefix_sum(&mut ends);
        assert_eq!(ends, [2, 2, 5, 6]);
    }

    #[test]
    fn arena_hands_out_zeroed_arrays() {
        let mut arena = CountArena::default();
        let mut counts = arena.take(2, 4);
        assert_eq!(counts, vec![0; 4]);
        counts[1] = 7;
        arena.put(2, counts);

        let mut again = arena.take(2, 4);
        assert_eq!(again, vec![0; 4]);
        again[3] = 1;
        again[3] = 0;
        arena.put_zeroed(2, again);

        let resized = arena.take(2, 3);
        assert_eq!(resized, vec![0; 3]);
        arena.put(2, resized);

        let shallow = arena.take(0, 5);
        assert_eq!(shallow.len(), 5);
        arena.put(0, shallow);
    }

    #[test]
    fn insertion_sort_keeps_equal_keys_in_order() {
        let mut items = [(3_i32, 'a'), (-1, 'b'), (3, 'c'), (0, 'd'), (-1, 'e'), (2, 'f')];
        insertion_sort_by_key(&mut items, &|&(k, _): &(i32, char)| k);
        assert_eq!(
            items,
            [(-1, 'b'), (-1, 'e'), (0, 'd'), (2, 'f'), (3, 'a'), (3, 'c')]
        );

        let mut empty: [u8; 0] = [];
        insertion_sort_by_key(&mut empty, &|&x: &u8| x);
        let mut one = [9_u8];
        insertion_sort_by_key(&mut one, &|&x: &u8| x);
        assert_eq!(one, [9]);
    }

    #[test]
    fn scan_finds_max_magnitude_and_first_negative() {
        let data = [3_i32, 7, -20, 5, -1];
        let scan = scan_keys(&data, &|&x: &i32| x);
        assert_eq!(scan.max_magnitude, 20);
        assert_eq!(scan.first_negative, Some(2));

        let unsigned = [9_u8, 200, 0];
        let scan = scan_keys(&unsigned, &|&x: &u8| x);
        assert_eq!(
            scan,
            KeyScan {
                max_magnitude: 200,
                first_negative: None
            }
        );

        let scan = scan_keys::<i64, i64, _>(&[], &|&x| x);
        assert_eq!(scan, KeyScan::default());
    }
}
