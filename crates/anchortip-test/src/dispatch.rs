//! A UI dispatcher that only runs tasks when the test pumps it.

use anchortip_core::{UiDispatcher, UiTask};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Queues posted tasks until [`ManualDispatcher::run_pending`] is called.
#[derive(Default)]
pub struct ManualDispatcher {
    tasks: Mutex<VecDeque<UiTask>>,
}

impl ManualDispatcher {
    /// Create an idle dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.tasks().len()
    }

    /// Run one task. Returns `false` if nothing was queued.
    pub fn run_one(&self) -> bool {
        // Pop before running so a task may post more work.
        let task = self.tasks().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run tasks until the queue is empty, including tasks posted while
    /// running. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        while self.run_one() {
            ran += 1;
        }
        ran
    }

    fn tasks(&self) -> MutexGuard<'_, VecDeque<UiTask>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UiDispatcher for ManualDispatcher {
    fn post(&self, task: UiTask) {
        self.tasks().push_back(task);
    }
}
