use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::evaluate;
use crate::games::{Cue, Feedback, MiniGame, Pause, Reaction, Selection};
use crate::model::{CREATURES, GameKind, Symbol};
use crate::timers::DeferredAction;

pub const PAIR_COUNT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    symbol: Symbol,
    revealed: bool,
    matched: bool,
}

impl Card {
    #[must_use]
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            revealed: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Face up, either matched or waiting for its partner.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }
}

/// Three creatures sampled without replacement, each dealt twice, shuffled.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let pool: Vec<Symbol> = CREATURES.choose_multiple(rng, PAIR_COUNT).copied().collect();
    let mut cards: Vec<Card> = pool.iter().chain(pool.iter()).copied().map(Card::new).collect();
    cards.shuffle(rng);
    cards
}

/// "Find the pairs."
///
/// While a mismatched pair is on display the board is locked; the deferred
/// `HideCards` step turns both cards back over and releases the lock.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    cards: Vec<Card>,
    first: Option<usize>,
    locked: bool,
}

impl MemoryGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_cards(generate_board(rng))
    }

    /// Start from a known layout.
    #[must_use]
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            first: None,
            locked: false,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Cards revealed but not yet matched.
    #[must_use]
    pub fn open_cards(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.revealed && !card.matched)
            .count()
    }

    fn pick(&mut self, index: usize) -> Reaction {
        if self.locked {
            return Reaction::ignored();
        }
        match self.cards.get_mut(index) {
            Some(card) if !card.revealed && !card.matched => card.revealed = true,
            _ => return Reaction::ignored(),
        }

        let Some(first) = self.first.take() else {
            self.first = Some(index);
            return Reaction::default().with_cue(Cue::Click);
        };

        if evaluate::is_pair(self.cards[first].symbol, self.cards[index].symbol) {
            self.cards[first].matched = true;
            self.cards[index].matched = true;
            let reaction = Reaction::scored(true, Feedback::PairFound).with_cue(Cue::Click);
            if self.is_complete() {
                return reaction
                    .with_cue(Cue::Reward)
                    .then(Pause::RoundComplete, DeferredAction::NextRound);
            }
            return reaction;
        }

        self.locked = true;
        Reaction::scored(false, Feedback::NotAPair)
            .with_cue(Cue::Click)
            .then(
                Pause::MismatchHide,
                DeferredAction::HideCards {
                    first,
                    second: index,
                },
            )
    }

    fn hide(&mut self, first: usize, second: usize) {
        for index in [first, second] {
            if let Some(card) = self.cards.get_mut(index) {
                if !card.matched {
                    card.revealed = false;
                }
            }
        }
        self.locked = false;
    }
}

impl MiniGame for MemoryGame {
    fn kind(&self) -> GameKind {
        GameKind::Memory
    }

    fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }

    fn handle_selection<R: Rng + ?Sized>(&mut self, selection: Selection, _rng: &mut R) -> Reaction {
        match selection {
            Selection::Card(index) => self.pick(index),
            _ => Reaction::ignored(),
        }
    }

    fn on_deferred<R: Rng + ?Sized>(&mut self, action: DeferredAction, _rng: &mut R) -> Reaction {
        if let DeferredAction::HideCards { first, second } = action {
            self.hide(first, second);
        }
        Reaction::ignored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DRAGON, FAIRY, UNICORN};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn fixed_board() -> MemoryGame {
        MemoryGame::with_cards(
            [DRAGON, FAIRY, UNICORN, FAIRY, DRAGON, UNICORN]
                .into_iter()
                .map(Card::new)
                .collect(),
        )
    }

    fn pick(game: &mut MemoryGame, index: usize) -> Reaction {
        let mut rng = StdRng::seed_from_u64(0);
        game.handle_selection(Selection::Card(index), &mut rng)
    }

    #[test]
    fn board_has_three_symbols_twice_each() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..300 {
            let board = generate_board(&mut rng);
            assert_eq!(board.len(), PAIR_COUNT * 2);
            let mut counts: HashMap<Symbol, usize> = HashMap::new();
            for card in &board {
                *counts.entry(card.symbol()).or_default() += 1;
                assert!(CREATURES.contains(&card.symbol()));
            }
            assert_eq!(counts.len(), PAIR_COUNT);
            assert!(counts.values().all(|&n| n == 2));
        }
    }

    #[test]
    fn mismatch_locks_until_hidden() {
        let mut game = fixed_board();
        assert!(pick(&mut game, 0).outcome.is_none());
        let reaction = pick(&mut game, 1);
        assert_eq!(reaction.outcome, Some(false));
        assert!(game.is_locked());
        assert_eq!(
            reaction.follow_up.map(|f| f.action),
            Some(DeferredAction::HideCards { first: 0, second: 1 })
        );

        // A third pick during the display delay does nothing.
        assert!(pick(&mut game, 2).is_ignored());
        assert!(!game.cards()[2].is_revealed());

        let mut rng = StdRng::seed_from_u64(0);
        let _ = game.on_deferred(DeferredAction::HideCards { first: 0, second: 1 }, &mut rng);
        assert!(!game.is_locked());
        assert_eq!(game.open_cards(), 0);
        assert!(pick(&mut game, 2).cues.contains(&Cue::Click));
        assert_eq!(game.open_cards(), 1);
    }

    #[test]
    fn matched_cards_stay_up_and_ignore_picks() {
        let mut game = fixed_board();
        let _ = pick(&mut game, 0);
        let reaction = pick(&mut game, 4);
        assert_eq!(reaction.outcome, Some(true));
        assert_eq!(reaction.feedback, Some(Feedback::PairFound));
        assert!(game.cards()[0].is_matched() && game.cards()[4].is_matched());
        assert!(pick(&mut game, 0).is_ignored());
        assert_eq!(game.open_cards(), 0);
    }

    #[test]
    fn same_card_twice_is_not_a_pair() {
        let mut game = fixed_board();
        let _ = pick(&mut game, 3);
        assert!(pick(&mut game, 3).is_ignored());
        assert_eq!(game.open_cards(), 1);
    }

    #[test]
    fn last_pair_completes_board() {
        let mut game = fixed_board();
        for (a, b) in [(0, 4), (1, 3)] {
            let _ = pick(&mut game, a);
            let _ = pick(&mut game, b);
        }
        let _ = pick(&mut game, 2);
        let reaction = pick(&mut game, 5);
        assert!(game.is_complete());
        assert!(reaction.cues.contains(&Cue::Reward));
        assert_eq!(
            reaction.follow_up.map(|f| (f.pause, f.action)),
            Some((Pause::RoundComplete, DeferredAction::NextRound))
        );
    }

    #[test]
    fn at_most_one_card_waits_for_a_partner() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = MemoryGame::new(&mut rng);
        for step in 0..60 {
            let index = step * 7 % 6;
            let reaction = game.handle_selection(Selection::Card(index), &mut rng);
            if !game.is_locked() {
                assert!(game.open_cards() <= 1);
            }
            if let Some(follow_up) = reaction.follow_up {
                let _ = game.on_deferred(follow_up.action, &mut rng);
            }
            if game.is_complete() {
                game.new_round(&mut rng);
            }
        }
    }
}
