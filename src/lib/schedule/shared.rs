use std::collections::VecDeque;

use probability::source::Source;

use crate::schedule::Schedule;
use crate::system::Process;
use crate::Result;

/// A policy where all workers draw from one first-in-first-out queue.
pub struct Shared {
    queue: VecDeque<Process>,
}

impl Schedule for Shared {
    #[inline]
    fn new(_: usize) -> Shared {
        Shared { queue: VecDeque::new() }
    }

    #[inline]
    fn push<S: Source>(&mut self, process: Process, _: &mut S) -> Result<()> {
        self.queue.push_back(process);
        Ok(())
    }

    #[inline]
    fn pop(&mut self, _: usize) -> Option<Process> {
        self.queue.pop_front()
    }

    #[inline]
    fn lengths(&self) -> Vec<usize> {
        vec![self.queue.len()]
    }

    #[inline]
    fn waiting(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::schedule::Schedule;
    use crate::system::Process;
    use crate::variate;
    use super::Shared;

    #[test]
    fn fifo() {
        let mut source = variate::source(42);
        let mut schedule = Shared::new(3);
        for id in 0..5 {
            schedule.push(Process::new(id, 0.0, 1.0), &mut source).unwrap();
        }
        assert_eq!(schedule.waiting(), 5);
        assert_eq!(schedule.pop(2).unwrap().id, 0);
        assert_eq!(schedule.pop(0).unwrap().id, 1);
        assert_eq!(schedule.pop(1).unwrap().id, 2);
        assert_eq!(schedule.lengths(), vec![2]);
    }
}
