//! The four mini-games behind one round lifecycle.
//!
//! Each game generates its own rounds and turns a [`Selection`] into a
//! [`Reaction`]. Scoring, sounds and timing belong to the shell; a game only
//! says what happened and which deferred step, if any, should follow.

mod catching;
mod counting;
mod logic;
mod memory;

use rand::Rng;

use crate::model::{GameKind, GameSettings, Point};
use crate::timers::DeferredAction;

pub use catching::{CatchGame, Spark, place_sparks, place_target};
pub use counting::{COUNT_RANGE, CountingGame, OPTION_COUNT, generate_counting};
pub use logic::{
    LogicGame, LogicRound, OddOneOut, ShapeMatch, generate_logic, generate_odd_one_out,
    generate_shape_match,
};
pub use memory::{Card, MemoryGame, PAIR_COUNT, generate_board};

/// Input from the player, already mapped from a button or click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Selection {
    /// Index of an option button, left to right.
    Option(usize),
    /// Click on the catch field.
    Click(Point),
    /// Index of a memory card.
    Card(usize),
    /// The catch game's start button.
    Start,
}

/// Per-game feedback line shown under the play area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    TryAgain,
    Caught { hits: u32, needed: u32 },
    Missed,
    PairFound,
    NotAPair,
    OddFound,
    LookCloser,
    ShapeRight,
    ShapeWrong,
}

/// Sounds a game asks for beyond the outcome jingle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Click,
    Reward,
}

/// Which configured delay a follow-up waits for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pause {
    Advance,
    RoundComplete,
    MismatchHide,
    CatchTick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub pause: Pause,
    pub action: DeferredAction,
}

/// What a game did with a selection or a deferred step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Scored outcome, `None` when the input was not an attempt.
    pub outcome: Option<bool>,
    pub feedback: Option<Feedback>,
    pub cues: Vec<Cue>,
    pub follow_up: Option<FollowUp>,
}

impl Reaction {
    /// Nothing happened: the input was not applicable right now.
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scored(outcome: bool, feedback: Feedback) -> Self {
        Self {
            outcome: Some(outcome),
            feedback: Some(feedback),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cues.push(cue);
        self
    }

    #[must_use]
    pub fn then(mut self, pause: Pause, action: DeferredAction) -> Self {
        self.follow_up = Some(FollowUp { pause, action });
        self
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        *self == Self::default()
    }
}

/// Shared round lifecycle of every mini-game.
pub trait MiniGame {
    fn kind(&self) -> GameKind;

    /// Throw away the current round and generate a fresh one.
    fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R);

    fn handle_selection<R: Rng + ?Sized>(&mut self, selection: Selection, rng: &mut R)
    -> Reaction;

    /// Apply a deferred step scheduled by an earlier reaction.
    fn on_deferred<R: Rng + ?Sized>(&mut self, _action: DeferredAction, _rng: &mut R) -> Reaction {
        Reaction::ignored()
    }
}

/// The game currently on screen.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    Counting(CountingGame),
    Catching(CatchGame),
    Memory(MemoryGame),
    Logic(LogicGame),
}

impl ActiveGame {
    /// Build the given game with a fresh round.
    pub fn start<R: Rng + ?Sized>(kind: GameKind, settings: &GameSettings, rng: &mut R) -> Self {
        match kind {
            GameKind::Counting => Self::Counting(CountingGame::new(rng)),
            GameKind::Catching => Self::Catching(CatchGame::new(settings)),
            GameKind::Memory => Self::Memory(MemoryGame::new(rng)),
            GameKind::Logic => Self::Logic(LogicGame::new(rng)),
        }
    }
}

impl MiniGame for ActiveGame {
    fn kind(&self) -> GameKind {
        match self {
            Self::Counting(game) => game.kind(),
            Self::Catching(game) => game.kind(),
            Self::Memory(game) => game.kind(),
            Self::Logic(game) => game.kind(),
        }
    }

    fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self {
            Self::Counting(game) => game.new_round(rng),
            Self::Catching(game) => game.new_round(rng),
            Self::Memory(game) => game.new_round(rng),
            Self::Logic(game) => game.new_round(rng),
        }
    }

    fn handle_selection<R: Rng + ?Sized>(
        &mut self,
        selection: Selection,
        rng: &mut R,
    ) -> Reaction {
        match self {
            Self::Counting(game) => game.handle_selection(selection, rng),
            Self::Catching(game) => game.handle_selection(selection, rng),
            Self::Memory(game) => game.handle_selection(selection, rng),
            Self::Logic(game) => game.handle_selection(selection, rng),
        }
    }

    fn on_deferred<R: Rng + ?Sized>(&mut self, action: DeferredAction, rng: &mut R) -> Reaction {
        match self {
            Self::Counting(game) => game.on_deferred(action, rng),
            Self::Catching(game) => game.on_deferred(action, rng),
            Self::Memory(game) => game.on_deferred(action, rng),
            Self::Logic(game) => game.on_deferred(action, rng),
        }
    }
}
