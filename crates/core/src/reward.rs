use crate::model::DEFAULT_STICKER_GOAL;

/// Snapshot of the sticker bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardState {
    /// Always below `goal`.
    pub progress: u32,
    pub stickers: u32,
    pub goal: u32,
}

/// Turns every `goal` correct answers into one sticker.
#[derive(Clone, Debug)]
pub struct RewardTracker {
    progress: u32,
    stickers: u32,
    goal: u32,
}

impl RewardTracker {
    /// A zero goal is treated as one so the progress invariant holds.
    #[must_use]
    pub fn new(goal: u32) -> Self {
        Self {
            progress: 0,
            stickers: 0,
            goal: goal.max(1),
        }
    }

    /// Count one correct answer. Returns `true` when it completed a sticker.
    #[must_use = "a completed sticker should trigger celebration feedback"]
    pub fn record_correct(&mut self) -> bool {
        self.progress += 1;
        if self.progress >= self.goal {
            self.progress = 0;
            self.stickers = self.stickers.saturating_add(1);
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.progress = 0;
        self.stickers = 0;
    }

    #[must_use]
    pub fn read(&self) -> RewardState {
        RewardState {
            progress: self.progress,
            stickers: self.stickers,
            goal: self.goal,
        }
    }
}

impl Default for RewardTracker {
    fn default() -> Self {
        Self::new(DEFAULT_STICKER_GOAL)
    }
}
