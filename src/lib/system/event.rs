use std::fmt;

use crate::system::Process;
use crate::Result;

/// An event.
#[derive(Clone, Debug)]
pub struct Event {
    /// The time.
    pub time: f64,
    /// The type.
    pub kind: EventKind,
    /// The finishing process in the case of a departure.
    pub process: Option<Process>,
    /// The vacated worker in the case of a departure.
    pub worker: Option<usize>,
}

/// The type of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A process has arrived.
    Arrival,
    /// A process has finished its service.
    Departure,
}

impl Event {
    /// Create an arrival event.
    #[inline]
    pub fn arrival(time: f64) -> Event {
        Event { time: time, kind: EventKind::Arrival, process: None, worker: None }
    }

    /// Create a departure event for a started process.
    pub fn departure(process: Process, worker: usize) -> Result<Event> {
        let time = some!(process.finish, "{} has not been started", process);
        Ok(Event {
            time: time,
            kind: EventKind::Departure,
            process: Some(process),
            worker: Some(worker),
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:12.6} - {}", self.time, self.kind)?;
        if let (&Some(ref process), Some(worker)) = (&self.process, self.worker) {
            write!(formatter, " of {} from worker #{}", process, worker)?;
        }
        Ok(())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EventKind::Arrival => write!(formatter, "arrival"),
            EventKind::Departure => write!(formatter, "departure"),
        }
    }
}
