use std::any::Any;
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, trace};
use parking_lot::{Condvar, Mutex};

use crate::{Error, Result};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Queue {
    jobs: VecDeque<Job>,
    shutdown: bool,
}

struct Shared {
    queue: Mutex<Queue>,
    available: Condvar,
}

/// Fixed-size pool of worker threads draining one FIFO task queue.
///
/// Tasks submitted before [`WorkerPool::shutdown`] always run to completion;
/// submitting afterwards fails with [`Error::PoolShutdown`].
pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    size: usize,
}

/// Completion handle for one submitted task
#[derive(Debug)]
pub struct TaskHandle<T> {
    receiver: Receiver<thread::Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Blocks until the task finishes and returns its value.
    ///
    /// A task that panicked yields [`Error::TaskFailed`].
    pub fn join(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(payload)) => Err(Error::TaskFailed(panic_message(payload.as_ref()))),
            Err(_) => Err(Error::TaskFailed("task dropped before completion".to_string())),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "task panicked".to_string()
    }
}

impl WorkerPool {
    /// Detected hardware parallelism, at least 1
    pub fn optimal_thread_count() -> usize {
        thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    /// Starts `threads` workers; `0` uses [`WorkerPool::optimal_thread_count`]
    pub fn new(threads: usize) -> Result<Self> {
        let size = if threads == 0 {
            Self::optimal_thread_count()
        } else {
            threads
        };

        let shared = Arc::new(Shared {
            queue: Mutex::new(Queue {
                jobs: VecDeque::new(),
                shutdown: false,
            }),
            available: Condvar::new(),
        });

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            let worker_shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("apsp-worker-{}", id))
                .spawn(move || worker_loop(worker_shared));
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(err) => {
                    // Stop the workers that did start before reporting
                    let pool = WorkerPool {
                        shared,
                        workers: Mutex::new(workers),
                        size,
                    };
                    pool.shutdown();
                    return Err(Error::WorkerSpawn(err));
                }
            }
        }

        debug!("worker pool started with {} threads", size);
        Ok(WorkerPool {
            shared,
            workers: Mutex::new(workers),
            size,
        })
    }

    /// Number of worker threads
    pub fn thread_count(&self) -> usize {
        self.size
    }

    /// Queues a task and returns a handle to its result
    pub fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let job: Job = Box::new(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task));
            // The handle may have been dropped; nobody is waiting then
            let _ = sender.send(outcome);
        });

        {
            let mut queue = self.shared.queue.lock();
            if queue.shutdown {
                return Err(Error::PoolShutdown);
            }
            queue.jobs.push_back(job);
        }
        self.shared.available.notify_one();

        Ok(TaskHandle { receiver })
    }

    /// Stops accepting work, lets queued tasks finish, and joins the workers
    pub fn shutdown(&self) {
        {
            let mut queue = self.shared.queue.lock();
            if queue.shutdown {
                return;
            }
            queue.shutdown = true;
        }
        self.shared.available.notify_all();

        let workers = std::mem::take(&mut *self.workers.lock());
        for worker in workers {
            // Tasks run under catch_unwind, so workers do not panic
            let _ = worker.join();
        }
        debug!("worker pool with {} threads shut down", self.size);
    }

    /// True once [`WorkerPool::shutdown`] has been called
    pub fn is_shutdown(&self) -> bool {
        self.shared.queue.lock().shutdown
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("size", &self.size)
            .field("shutdown", &self.is_shutdown())
            .finish()
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(shared: Arc<Shared>) {
    loop {
        let job = {
            let mut queue = shared.queue.lock();
            loop {
                if let Some(job) = queue.jobs.pop_front() {
                    break job;
                }
                if queue.shutdown {
                    trace!("{:?} exiting", thread::current().name());
                    return;
                }
                shared.available.wait(&mut queue);
            }
        };
        job();
    }
}
