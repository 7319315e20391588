use crate::Result;

/// The state of a worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Worker {
    /// The worker is waiting for a process.
    Idle,
    /// The worker is serving the process with the given identifier.
    Busy(u64),
}

/// A set of workers indexed from zero.
#[derive(Clone, Debug)]
pub struct Pool {
    workers: Vec<Worker>,
    busy: usize,
}

impl Pool {
    /// Create a pool of idle workers.
    #[inline]
    pub fn new(count: usize) -> Pool {
        Pool { workers: vec![Worker::Idle; count], busy: 0 }
    }

    /// Return the lowest-index idle worker.
    pub fn idle(&self) -> Option<usize> {
        self.workers.iter().position(|&worker| worker == Worker::Idle)
    }

    /// Mark an idle worker as serving a process.
    pub fn occupy(&mut self, index: usize, id: u64) -> Result<()> {
        match self.workers.get(index) {
            Some(&Worker::Idle) => {},
            Some(&Worker::Busy(other)) => {
                raise!(inconsistent, "worker #{} is already serving process #{}", index, other);
            },
            None => raise!(inconsistent, "worker #{} does not exist", index),
        }
        self.workers[index] = Worker::Busy(id);
        self.busy += 1;
        Ok(())
    }

    /// Mark a worker serving a process as idle.
    pub fn release(&mut self, index: usize, id: u64) -> Result<()> {
        match self.workers.get(index) {
            Some(&Worker::Busy(current)) if current == id => {},
            Some(&Worker::Busy(current)) => {
                raise!(inconsistent, "worker #{} is serving process #{} rather than #{}", index,
                       current, id);
            },
            Some(&Worker::Idle) => {
                raise!(inconsistent, "worker #{} is not serving process #{}", index, id);
            },
            None => raise!(inconsistent, "worker #{} does not exist", index),
        }
        self.workers[index] = Worker::Idle;
        self.busy -= 1;
        Ok(())
    }

    /// Return the state of a worker.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Worker> {
        self.workers.get(index).cloned()
    }

    /// Return the number of workers.
    #[inline]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    getters! {
        busy: usize,
    }
}

#[cfg(test)]
mod tests {
    use super::{Pool, Worker};

    #[test]
    fn occupy() {
        let mut pool = Pool::new(3);
        assert_eq!(pool.idle(), Some(0));

        pool.occupy(0, 10).unwrap();
        pool.occupy(2, 11).unwrap();
        assert_eq!(pool.idle(), Some(1));
        assert_eq!(pool.busy(), 2);
        assert_eq!(pool.get(2), Some(Worker::Busy(11)));

        assert!(pool.occupy(0, 12).is_err());
        assert!(pool.occupy(3, 12).is_err());

        pool.occupy(1, 12).unwrap();
        assert_eq!(pool.idle(), None);
        assert_eq!(pool.busy(), 3);
    }

    #[test]
    fn release() {
        let mut pool = Pool::new(2);
        pool.occupy(1, 5).unwrap();

        assert!(pool.release(0, 5).is_err());
        assert!(pool.release(1, 6).is_err());
        assert!(pool.release(7, 5).is_err());

        pool.release(1, 5).unwrap();
        assert_eq!(pool.get(1), Some(Worker::Idle));
        assert_eq!(pool.busy(), 0);
        assert!(pool.release(1, 5).is_err());
    }
}
