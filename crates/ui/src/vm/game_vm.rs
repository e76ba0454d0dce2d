use forest_core::games::{CatchGame, CountingGame, LogicGame, LogicRound, MemoryGame};
use forest_core::model::{CARD_BACK, DRAGON, Point, Shape, Symbol};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountingVm {
    pub title: &'static str,
    pub items: Vec<Symbol>,
    pub options: Vec<String>,
    pub solved: bool,
}

#[must_use]
pub fn map_counting(game: &CountingGame) -> CountingVm {
    let puzzle = game.puzzle();
    CountingVm {
        title: "Count the magic creatures and tap the number!",
        items: puzzle.items().to_vec(),
        options: puzzle.options().iter().map(ToString::to_string).collect(),
        solved: game.is_solved(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkVm {
    pub at: Point,
    pub symbol: Symbol,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchVm {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target: Option<MarkVm>,
    pub sparks: Vec<MarkVm>,
    pub can_start: bool,
}

#[must_use]
pub fn map_catch(game: &CatchGame) -> CatchVm {
    let field = game.field();
    CatchVm {
        title: format!("Catch the dragon! Click it {} times!", game.hits_needed()),
        width: field.width,
        height: field.height,
        target: game.target().map(|at| MarkVm { at, symbol: DRAGON }),
        sparks: game
            .sparks()
            .iter()
            .map(|spark| MarkVm {
                at: spark.at,
                symbol: spark.symbol,
            })
            .collect(),
        can_start: !game.is_running() && game.hits() < game.hits_needed(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCardVm {
    pub face: Symbol,
    pub matched: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryVm {
    pub title: &'static str,
    pub cards: Vec<MemoryCardVm>,
    pub locked: bool,
}

#[must_use]
pub fn map_memory(game: &MemoryGame) -> MemoryVm {
    MemoryVm {
        title: "Find the pairs!",
        cards: game
            .cards()
            .iter()
            .map(|card| MemoryCardVm {
                face: if card.is_face_up() {
                    card.symbol()
                } else {
                    CARD_BACK
                },
                matched: card.is_matched(),
            })
            .collect(),
        locked: game.is_locked(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogicVm {
    OddOneOut {
        title: &'static str,
        items: Vec<Symbol>,
        options: Vec<String>,
        solved: bool,
    },
    ShapeMatch {
        title: &'static str,
        shape: Shape,
        color: &'static str,
        options: Vec<String>,
        solved: bool,
    },
}

#[must_use]
pub fn map_logic(game: &LogicGame) -> LogicVm {
    match game.round() {
        LogicRound::OddOneOut(round) => LogicVm::OddOneOut {
            title: "What doesn't belong?",
            items: round.puzzle.items().to_vec(),
            options: (1..=round.puzzle.options().len())
                .map(|n| n.to_string())
                .collect(),
            solved: game.is_solved(),
        },
        LogicRound::ShapeMatch(round) => LogicVm::ShapeMatch {
            title: "Which shape is it?",
            shape: round.puzzle.answer(),
            color: round.color.hex(),
            options: round
                .puzzle
                .options()
                .iter()
                .map(|shape| shape.name().to_string())
                .collect(),
            solved: game.is_solved(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_core::games::{Card, MiniGame, Selection};
    use forest_core::model::{FAIRY, GameSettings, UNICORN};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn counting_buttons_show_the_options() {
        let mut rng = StdRng::seed_from_u64(5);
        let game = CountingGame::new(&mut rng);
        let vm = map_counting(&game);
        assert_eq!(vm.options.len(), 4);
        assert!(vm.options.contains(&game.puzzle().answer().to_string()));
        assert!(!vm.solved);
    }

    #[test]
    fn hidden_cards_show_their_back() {
        let mut game = MemoryGame::with_cards(
            [FAIRY, UNICORN, FAIRY, UNICORN]
                .into_iter()
                .map(Card::new)
                .collect(),
        );
        let mut rng = StdRng::seed_from_u64(0);
        game.handle_selection(Selection::Card(1), &mut rng);
        let vm = map_memory(&game);
        let faces: Vec<Symbol> = vm.cards.iter().map(|card| card.face).collect();
        assert_eq!(faces, vec![CARD_BACK, UNICORN, CARD_BACK, CARD_BACK]);
    }

    #[test]
    fn idle_catch_round_can_start() {
        let game = CatchGame::new(&GameSettings::default());
        let vm = map_catch(&game);
        assert!(vm.can_start);
        assert!(vm.target.is_none());
        assert_eq!((vm.width, vm.height), (960, 260));
        assert_eq!(vm.title, "Catch the dragon! Click it 5 times!");
    }

    #[test]
    fn logic_options_match_the_round() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let game = LogicGame::new(&mut rng);
            match map_logic(&game) {
                LogicVm::OddOneOut { items, options, .. } => {
                    assert_eq!(items.len(), 4);
                    assert_eq!(options, vec!["1", "2", "3", "4"]);
                }
                LogicVm::ShapeMatch { shape, options, .. } => {
                    assert!(options.contains(&shape.name().to_string()));
                }
            }
        }
    }

    #[test]
    fn solved_logic_round_is_flagged() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = LogicGame::new(&mut rng);
        let right = match game.round() {
            LogicRound::OddOneOut(round) => {
                let answer = round.puzzle.answer();
                round.puzzle.options().iter().position(|&s| s == answer)
            }
            LogicRound::ShapeMatch(round) => {
                let answer = round.puzzle.answer();
                round.puzzle.options().iter().position(|&s| s == answer)
            }
        }
        .unwrap();
        let is_solved = |vm: LogicVm| match vm {
            LogicVm::OddOneOut { solved, .. } | LogicVm::ShapeMatch { solved, .. } => solved,
        };

        assert!(!is_solved(map_logic(&game)));
        game.handle_selection(Selection::Option(right), &mut rng);
        assert!(is_solved(map_logic(&game)));
    }
}
