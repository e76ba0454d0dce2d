use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::games::{Feedback, MiniGame, Pause, Reaction, Selection};
use crate::model::{GameKind, MAGIC_SYMBOLS, Puzzle};
use crate::timers::DeferredAction;

pub const COUNT_RANGE: RangeInclusive<u8> = 1..=6;
pub const OPTION_COUNT: usize = 4;

/// Draw a counting round: N symbols (repeats allowed) and four distinct
/// numbers to pick from, one of them N.
pub fn generate_counting<R: Rng + ?Sized>(rng: &mut R) -> Puzzle<u8> {
    let count = rng.random_range(COUNT_RANGE);
    let mut items = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        if let Some(symbol) = MAGIC_SYMBOLS.choose(rng) {
            items.push(*symbol);
        }
    }

    // Set accumulator: repeated draws are simply absorbed.
    let mut options = BTreeSet::from([count]);
    while options.len() < OPTION_COUNT {
        options.insert(rng.random_range(COUNT_RANGE));
    }
    let mut options: Vec<u8> = options.into_iter().collect();
    options.shuffle(rng);

    Puzzle::new(items, count, options)
}

/// "Count the creatures and tap the number."
#[derive(Clone, Debug)]
pub struct CountingGame {
    puzzle: Puzzle<u8>,
    solved: bool,
}

impl CountingGame {
    /// Starts with a freshly drawn round.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            puzzle: generate_counting(rng),
            solved: false,
        }
    }

    /// The creatures on screen, the answer and the four numbers offered.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle<u8> {
        &self.puzzle
    }

    /// True once answered correctly, until the next round replaces the puzzle.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

impl MiniGame for CountingGame {
    fn kind(&self) -> GameKind {
        GameKind::Counting
    }

    fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.puzzle = generate_counting(rng);
        self.solved = false;
    }

    fn handle_selection<R: Rng + ?Sized>(&mut self, selection: Selection, _rng: &mut R) -> Reaction {
        let Selection::Option(index) = selection else {
            return Reaction::ignored();
        };
        if self.solved {
            return Reaction::ignored();
        }
        let Some(chosen) = self.puzzle.option(index) else {
            return Reaction::ignored();
        };

        if self.puzzle.attempt(chosen).outcome {
            self.solved = true;
            Reaction::scored(true, Feedback::Correct).then(Pause::Advance, DeferredAction::NextRound)
        } else {
            Reaction::scored(false, Feedback::TryAgain)
        }
    }
}
