use crate::RadixElement;

/// Largest supported base. Bucket arrays are sized at run time from the base,
/// twice over in negative mode.
pub const MAX_BASE: usize = 1 << 16;

/// Number of base-`base` digits in `value`'s magnitude. Zero has one digit.
///
/// # Panics
///
/// Panics if `base < 2`.
pub fn digit_count<K: RadixElement>(value: K, base: usize) -> u32 {
    assert!(base >= 2, "radix base must be at least 2, got {base}");
    leading_place(value.magnitude(), base as u64).0
}

/// Digit count of the largest magnitude in `values`, which is the number of
/// passes an LSD sort needs. An empty slice counts as one digit.
///
/// # Panics
///
/// Panics if `base < 2`.
pub fn max_digit_count<K: RadixElement>(values: &[K], base: usize) -> u32 {
    assert!(base >= 2, "radix base must be at least 2, got {base}");
    let max = values.iter().map(|v| v.magnitude()).max().unwrap_or(0);
    leading_place(max, base as u64).0
}

/// Digit of `value` at `place` (a power of `base`).
///
/// With `negative` unset the digit is `(value / place) % base`, in
/// `[0, base)`. With `negative` set the digit is biased into `[1, 2 * base)`:
/// non-negative values map to `base + d` and negative values to `base - d`,
/// where `d` is the digit of the magnitude. Ordering buckets by biased digit
/// reproduces signed order.
///
/// # Panics
///
/// Panics if `base < 2`. A zero `place` is a caller bug and panics on the
/// division.
#[inline]
pub fn digit<K: RadixElement>(value: K, place: u64, base: usize, negative: bool) -> usize {
    assert!(base >= 2, "radix base must be at least 2, got {base}");
    biased_digit(value, place, base, negative)
}

/// [`digit`] without the base check, for sort loops whose base is already
/// validated.
#[inline]
fn biased_digit<K: RadixElement>(value: K, place: u64, base: usize, negative: bool) -> usize {
    let d = ((value.magnitude() / place) % base as u64) as usize;
    if !negative {
        d
    } else if value.is_negative() {
        base - d
    } else {
        base + d
    }
}

/// `base^exp` by repeated multiplication, `None` once it leaves `u64`.
///
/// # Panics
///
/// Panics if `base < 2`.
pub fn power(base: usize, exp: u32) -> Option<u64> {
    assert!(base >= 2, "radix base must be at least 2, got {base}");
    let mut value = 1_u64;
    for _ in 0..exp {
        value = value.checked_mul(base as u64)?;
    }
    Some(value)
}

/// Buckets needed per digit position.
#[inline]
pub fn bucket_count(base: usize, negative: bool) -> usize {
    if negative { base * 2 } else { base }
}

/// Digit count of `magnitude` and the place value of its leading digit.
///
/// The place value never exceeds `magnitude`, so it cannot overflow.
#[inline]
pub(crate) fn leading_place(magnitude: u64, base: u64) -> (u32, u64) {
    let mut digits = 1;
    let mut place = 1_u64;
    while magnitude / place >= base {
        place *= base;
        digits += 1;
    }
    (digits, place)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Radix {
    pub base: usize,
    pub negative: bool,
}

impl Radix {
    #[inline]
    pub fn buckets(self) -> usize {
        bucket_count(self.base, self.negative)
    }

    #[inline]
    pub fn of<K: RadixElement>(self, key: K, place: u64) -> usize {
        biased_digit(key, place, self.base, self.negative)
    }
}
