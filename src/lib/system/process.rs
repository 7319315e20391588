use std::fmt;

use crate::Result;

/// A job passing through the system.
#[derive(Clone, Debug, PartialEq)]
pub struct Process {
    /// The identifier given in the order of arrival.
    pub id: u64,
    /// The arrival time.
    pub arrival: f64,
    /// The required service time.
    pub service: f64,
    /// The time the service started.
    pub start: Option<f64>,
    /// The time the service finishes.
    pub finish: Option<f64>,
}

impl Process {
    /// Create a process that has just arrived.
    #[inline]
    pub fn new(id: u64, arrival: f64, service: f64) -> Process {
        Process { id: id, arrival: arrival, service: service, start: None, finish: None }
    }

    /// Stamp the start and finish times and return the latter.
    pub fn start(&mut self, clock: f64) -> Result<f64> {
        if self.start.is_some() || self.finish.is_some() {
            raise!(inconsistent, "{} has already been started", self);
        }
        let finish = clock + self.service;
        self.start = Some(clock);
        self.finish = Some(finish);
        Ok(finish)
    }

    /// Return the time from arrival to completion.
    #[inline]
    pub fn turnaround(&self) -> Option<f64> {
        self.finish.map(|finish| finish - self.arrival)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "process #{}", self.id)
    }
}
