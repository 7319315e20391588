//! Complete system.

use probability::source::Source;

use crate::schedule::Schedule;
use crate::timeline::Timeline;
use crate::{variate, Config, Result};

mod event;
mod history;
mod process;
mod worker;

pub use self::event::{Event, EventKind};
pub use self::history::{History, Summary};
pub use self::process::Process;
pub use self::worker::{Pool, Worker};

/// A complete system.
///
/// The system owns the clock, the workers, the ready queues, the pending
/// events, and the statistics. It is advanced one event at a time.
pub struct System<S, R> where S: Schedule, R: Source {
    config: Config,
    source: R,
    timeline: Timeline,
    workers: Pool,
    schedule: S,
    history: History,
}

impl<S, R> System<S, R> where S: Schedule, R: Source {
    /// Create a system and schedule the first arrival.
    pub fn new(config: &Config, source: R) -> Result<System<S, R>> {
        config.validate()?;
        let mut system = System {
            config: *config,
            source: source,
            timeline: Timeline::new(),
            workers: Pool::new(config.workers),
            schedule: S::new(config.workers),
            history: History::default(),
        };
        let time = variate::interarrival(&mut system.source, config.arrival_rate)?;
        system.timeline.push(Event::arrival(time))?;
        Ok(system)
    }

    /// Check if the completion target has been reached.
    #[inline]
    pub fn done(&self) -> bool {
        self.history.completed >= self.config.target
    }

    /// Process the next event and return it.
    pub fn step(&mut self) -> Result<Event> {
        if self.done() {
            raise!(inconsistent, "the target of {} completions has already been reached",
                   self.config.target);
        }
        let event = match self.timeline.pop() {
            Some(event) => event,
            _ => raise!(inconsistent, "the timeline has been exhausted ({})", self.state()),
        };
        let clock = self.timeline.clock();
        self.history.advance(clock, self.workers.busy(), self.schedule.waiting())?;
        trace!(target: "System", "{} | {} busy | {} waiting", event, self.workers.busy(),
               self.schedule.waiting());
        match event.kind {
            EventKind::Arrival => self.arrive()?,
            EventKind::Departure => self.depart(&event)?,
        }
        Ok(event)
    }

    /// Process events until the completion target is reached.
    pub fn run(&mut self) -> Result<Summary> {
        info!(target: "System", "Simulating {} completions with {} {} worker(s) at rate {}...",
              self.config.target, self.workers.len(), self.config.policy,
              self.config.arrival_rate);
        while !self.done() {
            self.step()?;
        }
        let summary = self.summary()?;
        info!(target: "System", "Reached {} completions at time {:.4}.", summary.completed,
              summary.final_clock);
        Ok(summary)
    }

    /// Derive the metrics accumulated so far.
    #[inline]
    pub fn summary(&self) -> Result<Summary> {
        self.history.summarize(self.workers.len())
    }

    /// Return the simulated time.
    #[inline]
    pub fn clock(&self) -> f64 {
        self.timeline.clock()
    }

    /// Return the number of waiting processes.
    #[inline]
    pub fn waiting(&self) -> usize {
        self.schedule.waiting()
    }

    /// Return the number of pending departures of a worker.
    pub fn pending(&self, worker: usize) -> usize {
        self.timeline.count(|event| event.worker == Some(worker))
    }

    getters! {
        ref config: Config,
        ref history: History,
        ref schedule: S,
        ref timeline: Timeline,
        ref workers: Pool,
    }

    fn arrive(&mut self) -> Result<()> {
        let clock = self.timeline.clock();
        let service = variate::service(&mut self.source, self.config.mean_service_time)?;
        let process = Process::new(self.history.arrived, clock, service);
        self.history.arrived += 1;
        match self.workers.idle() {
            Some(worker) => self.assign(worker, process)?,
            _ => self.schedule.push(process, &mut self.source)?,
        }
        let time = clock + variate::interarrival(&mut self.source, self.config.arrival_rate)?;
        self.timeline.push(Event::arrival(time))
    }

    fn depart(&mut self, event: &Event) -> Result<()> {
        let worker = some!(event.worker, "encountered a departure without a worker ({})",
                           self.state());
        let process = some!(event.process.as_ref(),
                            "encountered a departure without a process ({})", self.state());
        if let Err(error) = self.workers.release(worker, process.id) {
            raise!(inconsistent, "{} ({})", error, self.state());
        }
        self.history.complete(process)?;
        if let Some(process) = self.schedule.pop(worker) {
            self.assign(worker, process)?;
        }
        Ok(())
    }

    fn assign(&mut self, worker: usize, mut process: Process) -> Result<()> {
        process.start(self.timeline.clock())?;
        if let Err(error) = self.workers.occupy(worker, process.id) {
            raise!(inconsistent, "{} ({})", error, self.state());
        }
        self.history.started += 1;
        self.timeline.push(Event::departure(process, worker)?)
    }

    fn state(&self) -> String {
        format!("clock {}, {} completed, {} pending events, {} busy workers, {} waiting processes \
                 in queues {:?}", self.timeline.clock(), self.history.completed,
                self.timeline.len(), self.workers.busy(), self.schedule.waiting(),
                self.schedule.lengths())
    }
}

#[cfg(test)]
mod tests {
    use crate::schedule::{Policy, Private, Schedule, Shared};
    use crate::{variate, Config};
    use super::{Event, EventKind, Process, System, Worker};

    fn config(workers: usize, policy: Policy) -> Config {
        Config {
            arrival_rate: 30.0,
            mean_service_time: 0.1,
            workers: workers,
            policy: policy,
            target: 500,
            seed: Some(42),
        }
    }

    fn check<S: Schedule>(config: &Config) {
        let mut system = System::<S, _>::new(config, variate::source(42)).unwrap();
        let mut last = 0.0;
        while !system.done() {
            let completed = system.history().completed;
            let event = system.step().unwrap();
            assert!(event.time >= last);
            last = event.time;

            for worker in 0..config.workers {
                let pending = system.pending(worker);
                match system.workers().get(worker) {
                    Some(Worker::Busy(_)) => assert_eq!(pending, 1),
                    _ => assert_eq!(pending, 0),
                }
            }
            assert_eq!(system.timeline().count(|event| event.kind == EventKind::Arrival), 1);

            let history = system.history();
            let busy = system.workers().busy() as u64;
            assert_eq!(history.arrived, history.completed + busy + system.waiting() as u64);
            assert_eq!(history.started, history.completed + busy);
            if system.waiting() > 0 && system.schedule().lengths().len() == 1 {
                assert!(system.workers().idle().is_none());
            }
            if event.kind == EventKind::Departure {
                assert_eq!(history.completed, completed + 1);
            } else {
                assert_eq!(history.completed, completed);
            }
        }
        let summary = system.summary().unwrap();
        assert_eq!(summary.completed, config.target);
        assert_eq!(summary.final_clock, last);
        assert!(system.step().is_err());
    }

    #[test]
    fn private() {
        check::<Private>(&config(3, Policy::Private));
    }

    #[test]
    fn shared() {
        check::<Shared>(&config(3, Policy::Shared));
    }

    #[test]
    fn single() {
        check::<Private>(&config(1, Policy::Private));
        check::<Shared>(&config(1, Policy::Shared));
    }

    #[test]
    fn first() {
        let config = config(2, Policy::Shared);
        let mut system = System::<Shared, _>::new(&config, variate::source(42)).unwrap();
        assert_eq!(system.timeline().len(), 1);

        let event = system.step().unwrap();
        assert_eq!(event.kind, EventKind::Arrival);
        assert!(event.time > 0.0);
        assert_eq!(system.clock(), event.time);
        assert_eq!(system.workers().get(0), Some(Worker::Busy(0)));
        assert_eq!(system.workers().get(1), Some(Worker::Idle));
        assert_eq!(system.timeline().len(), 2);
    }

    #[test]
    fn invalid() {
        let config = Config { workers: 0, ..config(1, Policy::Shared) };
        let result = System::<Shared, _>::new(&config, variate::source(42));
        assert!(result.err().unwrap().is_invalid());
    }

    #[test]
    fn exhausted() {
        let config = config(2, Policy::Private);
        let mut system = System::<Private, _>::new(&config, variate::source(42)).unwrap();
        system.step().unwrap();
        while system.timeline.pop().is_some() {}

        let error = system.step().unwrap_err();
        assert!(!error.is_invalid());
        let message = error.to_string();
        assert!(message.starts_with("the timeline has been exhausted (clock "), "{}", message);
        assert!(message.contains("0 completed, 0 pending events, 1 busy workers"), "{}", message);
    }

    #[test]
    fn stray() {
        fn departure(id: u64, worker: usize, clock: f64) -> Event {
            let mut process = Process::new(id, clock, 0.0);
            process.start(clock).unwrap();
            Event::departure(process, worker).unwrap()
        }

        let config = config(2, Policy::Shared);

        let mut system = System::<Shared, _>::new(&config, variate::source(42)).unwrap();
        system.timeline.push(departure(99, 7, 0.0)).unwrap();
        let error = system.step().unwrap_err();
        assert!(!error.is_invalid());
        let message = error.to_string();
        assert!(message.starts_with("worker #7 does not exist (clock 0, "), "{}", message);

        let mut system = System::<Shared, _>::new(&config, variate::source(42)).unwrap();
        system.timeline.push(departure(99, 1, 0.0)).unwrap();
        let error = system.step().unwrap_err();
        assert!(!error.is_invalid());
        let message = error.to_string();
        assert!(message.starts_with("worker #1 is not serving process #99 (clock 0, "), "{}",
                message);

        let mut system = System::<Shared, _>::new(&config, variate::source(42)).unwrap();
        system.step().unwrap();
        assert_eq!(system.workers().get(0), Some(Worker::Busy(0)));
        let clock = system.clock();
        system.timeline.push(departure(99, 0, clock)).unwrap();
        let error = system.step().unwrap_err();
        assert!(!error.is_invalid());
        let message = error.to_string();
        assert!(message.starts_with("worker #0 is serving process #0 rather than #99 (clock "),
                "{}", message);
        assert!(message.contains("1 busy workers"), "{}", message);
    }
}
