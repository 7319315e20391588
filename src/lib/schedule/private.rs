use std::collections::VecDeque;

use probability::source::Source;

use crate::schedule::Schedule;
use crate::system::Process;
use crate::Result;

/// A policy where each worker has its own first-in-first-out queue.
///
/// A process that finds every worker busy joins a queue chosen uniformly at
/// random. A vacated worker only serves its own queue.
pub struct Private {
    queues: Vec<VecDeque<Process>>,
}

impl Schedule for Private {
    fn new(workers: usize) -> Private {
        Private { queues: vec![VecDeque::new(); workers] }
    }

    fn push<S: Source>(&mut self, process: Process, source: &mut S) -> Result<()> {
        let count = self.queues.len();
        let index = match count {
            0 => raise!(inconsistent, "there are no queues to place {} into", process),
            1 => 0,
            _ => ((source.read::<f64>() * count as f64) as usize).min(count - 1),
        };
        trace!(target: "Schedule", "Placing {} into queue #{}.", process, index);
        self.queues[index].push_back(process);
        Ok(())
    }

    fn pop(&mut self, worker: usize) -> Option<Process> {
        self.queues.get_mut(worker).and_then(|queue| queue.pop_front())
    }

    fn lengths(&self) -> Vec<usize> {
        self.queues.iter().map(VecDeque::len).collect()
    }

    fn waiting(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }
}
