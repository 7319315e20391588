use crate::system::Process;
use crate::Result;

/// Statistics about a system integrated over simulated time.
#[derive(Clone, Copy, Debug, Default)]
pub struct History {
    /// The number of arrived processes.
    pub arrived: u64,
    /// The number of processes that have entered service.
    pub started: u64,
    /// The number of completed processes.
    pub completed: u64,
    /// The sum of the turnaround times of the completed processes.
    pub turnaround: f64,
    /// The integral of the number of busy workers.
    pub busy: f64,
    /// The integral of the number of waiting processes.
    pub waiting: f64,
    /// The time of the last accounted event.
    pub last: f64,
}

/// Steady-state metrics of a finished run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// The mean time from arrival to completion.
    pub avg_turnaround_time: f64,
    /// The number of completions per unit time.
    pub throughput: f64,
    /// The fraction of aggregate worker time spent busy.
    pub utilization: f64,
    /// The time-weighted mean number of waiting processes.
    pub avg_queue_occupancy: f64,
    /// The time of the last completion.
    pub final_clock: f64,
    /// The number of completed processes.
    pub completed: u64,
}

impl History {
    /// Account for the interval between the previous event and `time` during
    /// which the numbers of busy workers and waiting processes were constant.
    pub fn advance(&mut self, time: f64, busy: usize, waiting: usize) -> Result<()> {
        let delta = time - self.last;
        if !(delta >= 0.0) {
            raise!(inconsistent, "the clock went backwards from {} to {}", self.last, time);
        }
        self.busy += busy as f64 * delta;
        self.waiting += waiting as f64 * delta;
        self.last = time;
        Ok(())
    }

    /// Take into account a completed process.
    pub fn complete(&mut self, process: &Process) -> Result<()> {
        self.turnaround += some!(process.turnaround(), "{} has not been started", process);
        self.completed += 1;
        Ok(())
    }

    /// Derive the metrics for a given number of workers.
    pub fn summarize(&self, workers: usize) -> Result<Summary> {
        if self.completed == 0 || !(self.last > 0.0) || workers == 0 {
            raise!(inconsistent, "cannot summarize {} completions over {} time units and {} workers",
                   self.completed, self.last, workers);
        }
        let clock = self.last;
        Ok(Summary {
            avg_turnaround_time: self.turnaround / self.completed as f64,
            throughput: self.completed as f64 / clock,
            utilization: self.busy / (clock * workers as f64),
            avg_queue_occupancy: self.waiting / clock,
            final_clock: clock,
            completed: self.completed,
        })
    }
}
