//! Cooperative periodic-task scheduler
//!
//! Tasks run to completion on the caller's thread, one at a time, from
//! inside [`Scheduler::tick`]. Nothing is preempted; a slow task delays
//! every task after it.

pub mod executor;
pub mod task;

pub use executor::{Scheduler, SchedulerError};
pub use task::{PeriodicTask, TaskFn};
