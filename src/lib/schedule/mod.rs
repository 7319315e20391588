//! Scheduling policies.

use std::fmt;
use std::str::FromStr;

use probability::source::Source;

use crate::system::Process;
use crate::{Error, Result};

mod private;
mod shared;

pub use self::private::Private;
pub use self::shared::Shared;

/// Ready queues holding processes that wait for a worker.
pub trait Schedule {
    /// Create the queues for a number of workers.
    fn new(workers: usize) -> Self where Self: Sized;

    /// Place an arrived process given that no worker is idle.
    fn push<S: Source>(&mut self, process: Process, source: &mut S) -> Result<()>;

    /// Take the next process for a vacated worker.
    fn pop(&mut self, worker: usize) -> Option<Process>;

    /// Return the number of processes in each queue.
    fn lengths(&self) -> Vec<usize>;

    /// Return the total number of waiting processes.
    fn waiting(&self) -> usize {
        self.lengths().iter().sum()
    }
}

/// A scheduling policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Each worker has its own queue.
    Private,
    /// All workers draw from one queue.
    Shared,
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Policy> {
        match &*value.trim().to_lowercase() {
            "private" | "p" | "1" => Ok(Policy::Private),
            "shared" | "s" | "2" => Ok(Policy::Shared),
            _ => raise!(invalid, "the scheduling policy {:?} is unknown", value),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Policy::Private => write!(formatter, "private"),
            Policy::Shared => write!(formatter, "shared"),
        }
    }
}
