/// Snapshot of the attempt counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub correct: u32,
    pub incorrect: u32,
}

impl ScoreState {
    /// Total attempts, correct or not.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }
}

/// Counts correct and incorrect attempts for the whole session.
#[derive(Clone, Debug, Default)]
pub struct ScoreAggregator {
    state: ScoreState,
}

impl ScoreAggregator {
    /// Creates an aggregator with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one attempt as correct or incorrect.
    pub fn record(&mut self, outcome: bool) {
        if outcome {
            self.state.correct = self.state.correct.saturating_add(1);
        } else {
            self.state.incorrect = self.state.incorrect.saturating_add(1);
        }
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        self.state = ScoreState::default();
    }

    /// Returns the current counters.
    #[must_use]
    pub fn read(&self) -> ScoreState {
        self.state
    }
}
