use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::games::{Feedback, MiniGame, Pause, Reaction, Selection};
use crate::model::{GameKind, Puzzle, Shape, ShapeColor, Symbol, SymbolGroup};
use crate::timers::DeferredAction;

/// Three copies of one symbol and a single symbol from another group.
/// Options are the four positions, left to right; the answer is the odd symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OddOneOut {
    pub puzzle: Puzzle<Symbol>,
    pub group: SymbolGroup,
}

/// A drawn shape and the four shape names to choose from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeMatch {
    pub puzzle: Puzzle<Shape>,
    pub color: ShapeColor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogicRound {
    OddOneOut(OddOneOut),
    ShapeMatch(ShapeMatch),
}

pub fn generate_odd_one_out<R: Rng + ?Sized>(rng: &mut R) -> OddOneOut {
    let group = *SymbolGroup::ALL
        .choose(rng)
        .unwrap_or(&SymbolGroup::MagicFolk);
    let others: Vec<SymbolGroup> = SymbolGroup::ALL
        .into_iter()
        .filter(|other| *other != group)
        .collect();
    let odd_group = *others.choose(rng).unwrap_or(&others[0]);

    let same = *group.members().choose(rng).unwrap_or(&group.members()[0]);
    let odd = *odd_group
        .members()
        .choose(rng)
        .unwrap_or(&odd_group.members()[0]);

    let mut items = vec![same, same, same, odd];
    items.shuffle(rng);
    let options = items.clone();

    OddOneOut {
        puzzle: Puzzle::new(items, odd, options),
        group,
    }
}

pub fn generate_shape_match<R: Rng + ?Sized>(rng: &mut R) -> ShapeMatch {
    let shape = *Shape::ALL.choose(rng).unwrap_or(&Shape::Circle);
    let color = *ShapeColor::PALETTE
        .choose(rng)
        .unwrap_or(&ShapeColor::PALETTE[0]);
    let mut options = Shape::ALL.to_vec();
    options.shuffle(rng);

    ShapeMatch {
        puzzle: Puzzle::new(Vec::new(), shape, options),
        color,
    }
}

/// Either sub-mode with equal probability.
pub fn generate_logic<R: Rng + ?Sized>(rng: &mut R) -> LogicRound {
    if rng.random_bool(0.5) {
        LogicRound::OddOneOut(generate_odd_one_out(rng))
    } else {
        LogicRound::ShapeMatch(generate_shape_match(rng))
    }
}

/// "What doesn't belong?" / "Which shape is it?"
#[derive(Clone, Debug)]
pub struct LogicGame {
    round: LogicRound,
    solved: bool,
}

impl LogicGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_round(generate_logic(rng))
    }

    #[must_use]
    pub fn with_round(round: LogicRound) -> Self {
        Self {
            round,
            solved: false,
        }
    }

    #[must_use]
    pub fn round(&self) -> &LogicRound {
        &self.round
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    fn answer(&mut self, index: usize) -> Reaction {
        let (outcome, right, wrong) = match &self.round {
            LogicRound::OddOneOut(odd) => match odd.puzzle.option(index) {
                Some(chosen) => (
                    odd.puzzle.attempt(chosen).outcome,
                    Feedback::OddFound,
                    Feedback::LookCloser,
                ),
                None => return Reaction::ignored(),
            },
            LogicRound::ShapeMatch(shape) => match shape.puzzle.option(index) {
                Some(chosen) => (
                    shape.puzzle.attempt(chosen).outcome,
                    Feedback::ShapeRight,
                    Feedback::ShapeWrong,
                ),
                None => return Reaction::ignored(),
            },
        };

        if outcome {
            self.solved = true;
            Reaction::scored(true, right).then(Pause::Advance, DeferredAction::NextRound)
        } else {
            Reaction::scored(false, wrong)
        }
    }
}

impl MiniGame for LogicGame {
    fn kind(&self) -> GameKind {
        GameKind::Logic
    }

    fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.round = generate_logic(rng);
        self.solved = false;
    }

    fn handle_selection<R: Rng + ?Sized>(&mut self, selection: Selection, _rng: &mut R) -> Reaction {
        match selection {
            Selection::Option(index) if !self.solved => self.answer(index),
            _ => Reaction::ignored(),
        }
    }
}
