//! Scheduler loop body

use heapless::Vec;

use super::task::PeriodicTask;

/// Scheduler errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// No free task slot
    Full,
}

/// Fixed-capacity cooperative scheduler
///
/// `C` is the context every task action receives; `N` the task capacity.
/// Tasks are checked in the order they were added.
pub struct Scheduler<C, const N: usize> {
    tasks: Vec<PeriodicTask<C>, N>,
}

impl<C, const N: usize> Default for Scheduler<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> Scheduler<C, N> {
    /// Create an empty scheduler
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task, returning its slot
    pub fn add(&mut self, task: PeriodicTask<C>) -> Result<usize, SchedulerError> {
        self.tasks.push(task).map_err(|_| SchedulerError::Full)?;
        Ok(self.tasks.len() - 1)
    }

    /// Run every task that is due at `now_ms`
    ///
    /// Returns the number of tasks that ran. Call this as often as the main
    /// loop allows; a task never runs twice in one tick.
    pub fn tick(&mut self, ctx: &mut C, now_ms: u32) -> usize {
        let mut fired = 0;
        for task in self.tasks.iter_mut() {
            if task.is_due(now_ms) {
                #[cfg(feature = "defmt")]
                defmt::trace!("task {} fired at {} ms", task.name(), now_ms);
                task.fire(ctx, now_ms);
                fired += 1;
            }
        }
        fired
    }

    /// Registered tasks in check order
    pub fn tasks(&self) -> &[PeriodicTask<C>] {
        &self.tasks
    }

    /// Number of registered tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if no task is registered
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<C, const N: usize> core::fmt::Debug for Scheduler<C, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.tasks.iter()).finish()
    }
}
