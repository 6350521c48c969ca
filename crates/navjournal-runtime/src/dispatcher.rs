#![forbid(unsafe_code)]

//! Deferred work queue for a navigable host.
//!
//! Observers run inside a navigation and cannot re-enter the host that is
//! notifying them. They post closures to the host's [`Dispatcher`] instead;
//! the closures run, FIFO, on the next
//! [`NavigationService::run_pending`](crate::NavigationService::run_pending).
//! Jobs may post further jobs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::service::NavigationService;

type Job = Box<dyn FnOnce(&mut NavigationService)>;

/// Shared handle to a host's deferred job queue.
#[derive(Clone, Default)]
pub struct Dispatcher {
    queue: Rc<RefCell<VecDeque<Job>>>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.pending())
            .finish()
    }
}

impl Dispatcher {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a job for the owning host.
    pub fn post<F>(&self, job: F)
    where
        F: FnOnce(&mut NavigationService) + 'static,
    {
        self.queue.borrow_mut().push_back(Box::new(job));
    }

    /// Number of queued jobs.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// True if nothing is queued.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Drop every queued job.
    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    /// Take the next job. The borrow ends before the job runs.
    pub(crate) fn pop(&self) -> Option<Job> {
        self.queue.borrow_mut().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_and_count() {
        let dispatcher = Dispatcher::new();
        assert!(dispatcher.is_idle());
        dispatcher.post(|_| {});
        dispatcher.post(|_| {});
        assert_eq!(dispatcher.pending(), 2);

        let clone = dispatcher.clone();
        clone.post(|_| {});
        assert_eq!(dispatcher.pending(), 3);

        dispatcher.clear();
        assert!(clone.is_idle());
    }

    #[test]
    fn pop_is_fifo() {
        let dispatcher = Dispatcher::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = Rc::clone(&order);
            dispatcher.post(move |_| order.borrow_mut().push(i));
        }
        let mut service = NavigationService::new();
        while let Some(job) = dispatcher.pop() {
            job(&mut service);
        }
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn debug_shows_pending() {
        let dispatcher = Dispatcher::new();
        dispatcher.post(|_| {});
        assert!(format!("{dispatcher:?}").contains("pending: 1"));
    }
}
