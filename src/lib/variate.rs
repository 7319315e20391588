//! Exponential variates.

use probability::distribution::{Exponential, Inverse};
use probability::source::{self, Source};

use crate::Result;

const WARMUP: usize = 32;

/// Create a random stream given a seed.
///
/// The seed is scrambled and the first draws are discarded so that small or
/// similar seeds give unrelated, well-mixed streams.
pub fn source(seed: u64) -> impl Source {
    let mut source = source::default(scramble(seed));
    for _ in 0..WARMUP {
        source.read_u64();
    }
    source
}

/// Draw an exponentially distributed duration given a rate.
///
/// The uniform draw is taken from the open interval (0, 1); a draw that falls
/// on either end is discarded and repeated.
pub fn exponential<S: Source>(source: &mut S, rate: f64) -> Result<f64> {
    if !(rate > 0.0) || !rate.is_finite() {
        raise!(invalid, "the rate should be positive and finite (got {})", rate);
    }
    let distribution = Exponential::new(rate);
    loop {
        let uniform = source.read::<f64>();
        if uniform > 0.0 && uniform < 1.0 {
            return Ok(distribution.inverse(uniform));
        }
    }
}

/// Draw an interarrival time given an arrival rate.
#[inline]
pub fn interarrival<S: Source>(source: &mut S, rate: f64) -> Result<f64> {
    exponential(source, rate)
}

/// Draw a service time given a mean service time.
pub fn service<S: Source>(source: &mut S, mean: f64) -> Result<f64> {
    if !(mean > 0.0) || !mean.is_finite() {
        raise!(invalid, "the mean service time should be positive and finite (got {})", mean);
    }
    exponential(source, 1.0 / mean)
}

fn scramble(seed: u64) -> u64 {
    let mut value = seed.wrapping_add(0x9E3779B97F4A7C15);
    value = (value ^ (value >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    value = (value ^ (value >> 27)).wrapping_mul(0x94D049BB133111EB);
    value ^ (value >> 31)
}
