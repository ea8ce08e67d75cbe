//! Periodic task definition

/// Task action: receives the shared context and the tick timestamp (ms)
pub type TaskFn<C> = fn(&mut C, u32);

/// Action re-invoked at a fixed interval
///
/// The interval is a lower bound between two runs, not a period: the next
/// run is measured from when the previous one actually happened, so late
/// ticks push every later run back.
pub struct PeriodicTask<C> {
    /// Name for logs
    name: &'static str,
    /// Minimum time between runs (ms)
    interval_ms: u32,
    /// Timestamp of the last run, `None` before the first
    last_fire_ms: Option<u32>,
    action: TaskFn<C>,
}

impl<C> PeriodicTask<C> {
    /// Create a task that runs on the first tick and every `interval_ms` after
    pub const fn new(name: &'static str, interval_ms: u32, action: TaskFn<C>) -> Self {
        Self {
            name,
            interval_ms,
            last_fire_ms: None,
            action,
        }
    }

    /// Task name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Interval (ms)
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Timestamp of the last run
    pub fn last_fire_ms(&self) -> Option<u32> {
        self.last_fire_ms
    }

    /// Check if the task should run at `now_ms`
    ///
    /// Uses wrapping arithmetic so the millisecond counter may roll over.
    pub fn is_due(&self, now_ms: u32) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.interval_ms,
        }
    }

    /// Run the action and record `now_ms` as the last run
    pub fn fire(&mut self, ctx: &mut C, now_ms: u32) {
        (self.action)(ctx, now_ms);
        self.last_fire_ms = Some(now_ms);
    }
}

impl<C> core::fmt::Debug for PeriodicTask<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeriodicTask")
            .field("name", &self.name)
            .field("interval_ms", &self.interval_ms)
            .field("last_fire_ms", &self.last_fire_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump(count: &mut u32, _now: u32) {
        *count += 1;
    }

    #[test]
    fn test_due_on_first_check() {
        let task = PeriodicTask::new("bump", 1000, bump);
        assert!(task.is_due(0));
        assert!(task.is_due(12345));
    }

    #[test]
    fn test_interval_boundary() {
        let mut task = PeriodicTask::new("bump", 1000, bump);
        let mut count = 0;

        task.fire(&mut count, 0);
        assert_eq!(count, 1);
        assert!(!task.is_due(999));
        assert!(task.is_due(1000));
    }

    #[test]
    fn test_due_across_wrap() {
        let mut task = PeriodicTask::new("bump", 100, bump);
        let mut count = 0;

        task.fire(&mut count, u32::MAX - 49);
        assert!(!task.is_due(49));
        assert!(task.is_due(50));
    }
}
