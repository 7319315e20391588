//! Time-ordered pending events.

use std::collections::BinaryHeap;

use crate::system::Event;
use crate::Result;

/// A priority queue of events ordered by time and then by insertion.
pub struct Timeline {
    clock: f64,
    sequence: u64,
    heap: BinaryHeap<Entry>,
}

struct Entry {
    time: f64,
    sequence: u64,
    event: Event,
}

order!(Entry(time, sequence) descending);

impl Timeline {
    /// Create a timeline.
    #[inline]
    pub fn new() -> Timeline {
        Timeline { clock: 0.0, sequence: 0, heap: BinaryHeap::new() }
    }

    /// Schedule an event.
    ///
    /// Events can only be scheduled at or after the current clock.
    pub fn push(&mut self, event: Event) -> Result<()> {
        let time = event.time;
        if time.is_nan() || time < self.clock {
            raise!(inconsistent, "attempted to schedule {} before the clock ({})", event,
                   self.clock);
        }
        let sequence = self.sequence;
        self.sequence += 1;
        self.heap.push(Entry { time: time, sequence: sequence, event: event });
        Ok(())
    }

    /// Remove the earliest event and advance the clock to its time.
    pub fn pop(&mut self) -> Option<Event> {
        let Entry { time, event, .. } = self.heap.pop()?;
        self.clock = time;
        Some(event)
    }

    /// Return the number of pending events.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Count the pending events that satisfy a predicate.
    pub fn count<F>(&self, predicate: F) -> usize where F: Fn(&Event) -> bool {
        self.heap.iter().filter(|entry| predicate(&entry.event)).count()
    }

    getters! {
        clock: f64,
    }
}

impl Default for Timeline {
    #[inline]
    fn default() -> Timeline {
        Timeline::new()
    }
}
