use crate::evaluate;
use crate::model::Symbol;

/// One generated round: what is drawn, the right answer and the buttons offered.
///
/// Built once per round and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle<T> {
    items: Vec<Symbol>,
    answer: T,
    options: Vec<T>,
}

impl<T: Copy + PartialEq> Puzzle<T> {
    #[must_use]
    pub fn new(items: Vec<Symbol>, answer: T, options: Vec<T>) -> Self {
        debug_assert!(options.contains(&answer));
        Self {
            items,
            answer,
            options,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Symbol] {
        &self.items
    }

    #[must_use]
    pub fn answer(&self) -> T {
        self.answer
    }

    #[must_use]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// The option shown at `index`, if there is one.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<T> {
        self.options.get(index).copied()
    }

    /// Score a choice against this puzzle.
    #[must_use]
    pub fn attempt(&self, chosen: T) -> Attempt<T> {
        Attempt::new(chosen, self.answer)
    }
}

/// A scored selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt<T> {
    pub chosen: T,
    pub correct: T,
    pub outcome: bool,
}

impl<T: PartialEq> Attempt<T> {
    #[must_use]
    pub fn new(chosen: T, correct: T) -> Self {
        let outcome = evaluate::is_correct(&chosen, &correct);
        Self {
            chosen,
            correct,
            outcome,
        }
    }
}
