use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::Result;

/// A parameter sweep.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub service: Option<f64>,
    pub workers: Option<usize>,
    pub policy: Option<String>,
    pub target: Option<u64>,
    pub seed: Option<u64>,
    pub limit: Option<u64>,
    pub output: Option<String>,
    pub rates: Option<Rates>,
}

/// An inclusive range of arrival rates.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rates {
    pub from: f64,
    pub to: f64,
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Rates {
    /// Enumerate the rates of the range.
    pub fn values(&self) -> Result<Vec<f64>> {
        if !(self.step > 0.0) || !(self.to >= self.from) {
            raise!("the arrival-rate range from {} to {} with step {} is empty", self.from,
                   self.to, self.step);
        }
        let count = ((self.to - self.from) / self.step + 1e-9).floor() as usize + 1;
        Ok((0..count).map(|i| self.from + i as f64 * self.step).collect())
    }
}

impl Default for Rates {
    fn default() -> Rates {
        Rates { from: 10.0, to: 30.0, step: default_step() }
    }
}

pub fn open<T: AsRef<Path>>(path: T) -> Result<Config> {
    let path = path.as_ref();
    if fs::metadata(path).is_err() {
        raise!("the file {:?} does not exist", path);
    }
    parse(&fs::read_to_string(path)?)
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

fn default_step() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::Rates;

    #[test]
    fn parse() {
        let config = super::parse(r#"
            service = 0.04
            workers = 2
            policy = "shared"
            target = 500

            [rates]
            from = 10
            to = 12.5
            step = 0.5
        "#).unwrap();
        assert_eq!(config.service, Some(0.04));
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.policy.as_ref().map(|policy| &**policy), Some("shared"));
        assert_eq!(config.seed, None);
        assert_eq!(config.rates.unwrap().values().unwrap(),
                   vec![10.0, 10.5, 11.0, 11.5, 12.0, 12.5]);

        assert!(super::parse("speed = 1").is_err());
    }

    #[test]
    fn values() {
        assert_eq!(Rates::default().values().unwrap().len(), 21);
        assert_eq!(Rates { from: 5.0, to: 5.0, step: 1.0 }.values().unwrap(), vec![5.0]);
        assert!(Rates { from: 5.0, to: 4.0, step: 1.0 }.values().is_err());
        assert!(Rates { from: 5.0, to: 6.0, step: 0.0 }.values().is_err());
    }
}
