//! Deferred work scheduled by the shell: next-round transitions, hiding a
//! mismatched pair, moving the catch target and clearing the feedback flash.

use chrono::{DateTime, Utc};

/// Counter advanced at every round transition. Tasks remember the generation
/// that scheduled them so the shell can drop ones that outlived their round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    NextRound,
    HideCards { first: usize, second: usize },
    MoveTarget,
    ClearFlash,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub generation: Generation,
    pub due_at: DateTime<Utc>,
    pub action: DeferredAction,
}

#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    tasks: Vec<ScheduledTask>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, generation: Generation, due_at: DateTime<Utc>, action: DeferredAction) {
        self.tasks.push(ScheduledTask {
            generation,
            due_at,
            action,
        });
    }

    #[must_use]
    pub fn has_due(&self, now: DateTime<Utc>) -> bool {
        self.tasks.iter().any(|task| task.due_at <= now)
    }

    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.tasks.iter().map(|task| task.due_at).min()
    }

    /// Remove and return every task due at `now`, earliest first. Tasks with
    /// equal due times keep their scheduling order.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<ScheduledTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|task| task.due_at <= now);
        self.tasks = pending;
        due.sort_by_key(|task| task.due_at);
        due
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
