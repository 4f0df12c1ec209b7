use std::time::Duration;

/// Shortest interval a periodic task may use.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Task<J> {
    id: TaskId,
    due: Duration,
    every: Option<Duration>,
    job: J,
}

/// Registry of periodic and one-shot jobs keyed by elapsed time.
///
/// Nothing runs on its own: the owner polls with the current elapsed time
/// and runs each returned job to completion before polling again. Jobs due
/// at the same instant come back in registration order.
#[derive(Debug)]
pub struct Scheduler<J> {
    tasks: Vec<Task<J>>,
    next_id: u64,
    running: bool,
}

impl<J> Default for Scheduler<J> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
            running: false,
        }
    }
}

impl<J: Clone> Scheduler<J> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops the registry and drops every pending task.
    pub fn stop(&mut self) {
        self.running = false;
        self.tasks.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Runs `job` every `interval`, first at `now + interval`.
    pub fn every(&mut self, now: Duration, interval: Duration, job: J) -> TaskId {
        let interval = interval.max(MIN_INTERVAL);
        self.push(now + interval, Some(interval), job)
    }

    /// Runs `job` once at `now + delay`.
    pub fn after(&mut self, now: Duration, delay: Duration, job: J) -> TaskId {
        self.push(now + delay, None, job)
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn next_due(&self) -> Option<Duration> {
        if !self.running {
            return None;
        }
        self.tasks.iter().map(|t| t.due).min()
    }

    /// Takes the earliest task due at or before `now`.
    ///
    /// Returns the instant it was due along with the job. Periodic tasks
    /// are put back on the first slot after `now`, so runs missed during a
    /// stall are dropped rather than replayed.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, J)> {
        if !self.running {
            return None;
        }

        let pos = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id.0))
            .map(|(pos, _)| pos)?;

        let task = &mut self.tasks[pos];
        let due = task.due;
        match task.every {
            Some(interval) => {
                task.due = next_slot(due, interval, now);
                Some((due, task.job.clone()))
            }
            None => {
                let task = self.tasks.remove(pos);
                Some((due, task.job))
            }
        }
    }

    fn push(&mut self, due: Duration, every: Option<Duration>, job: J) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            due,
            every,
            job,
        });
        id
    }
}

/// First `due + k * interval` (k >= 1) strictly after `now`.
fn next_slot(due: Duration, interval: Duration, now: Duration) -> Duration {
    let step = interval.as_nanos().max(1);
    let skipped = now.saturating_sub(due).as_nanos() / step;
    let ahead = (skipped + 1).saturating_mul(step);
    due + Duration::from_nanos(u64::try_from(ahead).unwrap_or(u64::MAX))
}
