use std::time::{SystemTime, UNIX_EPOCH};

use probability::source::Source;

use crate::schedule::Policy;
use crate::{variate, Result};

/// Parameters of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// The mean number of arrivals per unit time.
    pub arrival_rate: f64,
    /// The mean service time of a process.
    pub mean_service_time: f64,
    /// The number of workers.
    pub workers: usize,
    /// The scheduling policy.
    pub policy: Policy,
    /// The number of completions after which the run stops.
    pub target: u64,
    /// The seed of the random stream; the system clock is used if absent.
    pub seed: Option<u64>,
}

impl Config {
    /// Check that all parameters are admissible.
    pub fn validate(&self) -> Result<()> {
        if !(self.arrival_rate > 0.0) || !self.arrival_rate.is_finite() {
            raise!(invalid, "the arrival rate should be positive and finite (got {})",
                   self.arrival_rate);
        }
        if !(self.mean_service_time > 0.0) || !self.mean_service_time.is_finite() {
            raise!(invalid, "the mean service time should be positive and finite (got {})",
                   self.mean_service_time);
        }
        if self.workers == 0 {
            raise!(invalid, "at least one worker is required");
        }
        if self.target == 0 {
            raise!(invalid, "the completion target should be positive");
        }
        Ok(())
    }

    /// Create the random stream of a run.
    pub fn source(&self) -> impl Source {
        variate::source(self.seed.unwrap_or_else(seed))
    }

    /// Return the offered load per worker.
    #[inline]
    pub fn load(&self) -> f64 {
        self.arrival_rate * self.mean_service_time / self.workers as f64
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            arrival_rate: 10.0,
            mean_service_time: 0.04,
            workers: 1,
            policy: Policy::Private,
            target: 10000,
            seed: None,
        }
    }
}

fn seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration.as_secs() ^ (duration.subsec_nanos() as u64) << 32,
        _ => 0x12345678,
    }
}

#[cfg(test)]
mod tests {
    use crate::schedule::Policy;
    use super::Config;

    #[test]
    fn validate() {
        assert!(Config::default().validate().is_ok());

        macro_rules! reject(
            ($($field:ident: $value:expr),*) => ({
                let config = Config { $($field: $value,)* ..Config::default() };
                assert!(config.validate().unwrap_err().is_invalid());
            });
        );

        reject!(arrival_rate: 0.0);
        reject!(arrival_rate: -1.0);
        reject!(arrival_rate: ::std::f64::INFINITY);
        reject!(mean_service_time: 0.0);
        reject!(mean_service_time: ::std::f64::NAN);
        reject!(workers: 0);
        reject!(target: 0);
    }

    #[test]
    fn source() {
        use probability::source::Source;

        let config = Config { seed: Some(1), ..Config::default() };
        let mut source = config.source();
        let draws = (0..12).map(|_| source.read::<f64>()).collect::<Vec<_>>();
        assert!(draws.iter().all(|&draw| draw > 1e-6), "{:?}", draws);
        assert!(draws.iter().any(|&draw| draw > 0.5), "{:?}", draws);

        let mut other = config.source();
        assert_eq!(other.read::<f64>(), draws[0]);
    }

    #[test]
    fn load() {
        let config = Config { arrival_rate: 20.0, workers: 2, policy: Policy::Shared,
                              ..Config::default() };
        assert!((config.load() - 0.4).abs() < 1e-12);
    }
}
