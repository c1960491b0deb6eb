use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_LEN: usize = 65_536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Picks sampling presets from the input length: short runs for small
/// inputs, flat sampling with a longer window for large ones.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_INPUT_LEN {
        group.sampling_mode(SamplingMode::Auto);
        group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
        group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
        group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn rng_for(salt: u64) -> StdRng {
    StdRng::seed_from_u64(RNG_SEED ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Non-negative 31-bit values, the range a C `rand()` produces.
pub fn random_non_negative_31<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random::<i32>() & 0x7fff_ffff).collect()
}

pub fn random_signed<R: Rng + ?Sized>(rng: &mut R, len: usize, magnitude: i64) -> Vec<i64> {
    (0..len)
        .map(|_| rng.random_range(-magnitude..=magnitude))
        .collect()
}

pub fn random_with_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> u64 {
    if bits == 0 {
        return 0;
    }

    let high_bit = (bits - 1).min(63);
    let min = 1_u64 << high_bit;
    let max = if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    };
    rng.random_range(min..=max)
}
