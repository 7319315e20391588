//! Tool for studying multi-server queueing systems.
//!
//! Processes arrive according to a Poisson process, require exponentially
//! distributed service, and are dispatched to a pool of workers according to
//! a scheduling policy. A run stops once a given number of processes have
//! completed and reports the mean turnaround time, the throughput, the
//! utilization of the workers, and the mean occupancy of the ready queues.

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

mod config;
mod result;

pub mod schedule;
pub mod system;
pub mod timeline;
pub mod variate;

pub use config::Config;
pub use result::{Error, Result};
pub use schedule::Policy;
pub use system::{Summary, System};

/// Run a simulation given a complete configuration.
pub fn simulate(config: &Config) -> Result<Summary> {
    use schedule::{Private, Shared};

    config.validate()?;
    match config.policy {
        Policy::Private => System::<Private, _>::new(config, config.source())?.run(),
        Policy::Shared => System::<Shared, _>::new(config, config.source())?.run(),
    }
}

/// Run a simulation given individual parameters.
pub fn run_simulation(arrival_rate: f64, mean_service_time: f64, workers: usize, policy: Policy,
                      target: u64, seed: Option<u64>) -> Result<Summary> {
    simulate(&Config {
        arrival_rate: arrival_rate,
        mean_service_time: mean_service_time,
        workers: workers,
        policy: policy,
        target: target,
        seed: seed,
    })
}
