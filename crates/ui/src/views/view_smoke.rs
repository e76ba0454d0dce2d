use forest_core::games::ActiveGame;
use forest_core::model::{CARD_BACK, GameKind};

use crate::vm::{LogicVm, map_logic};

use super::test_harness::{ViewKind, expected_shell, setup_view_harness};

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn chrome_smoke_renders_score_and_welcome() {
    let html = render(ViewKind::Chrome);
    for expected in [
        "Magic Forest",
        "Welcome to the Magic Forest!",
        "Correct: 0 | Attempts: 0",
        "New game",
        "Mix",
        "Sound: on",
        "Catch the Dragon",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[test]
fn counting_view_smoke_renders_the_options() {
    let html = render(ViewKind::Game(GameKind::Counting));
    assert!(html.contains("Count the magic creatures"), "missing title in {html}");

    let shell = expected_shell(ViewKind::Game(GameKind::Counting));
    let ActiveGame::Counting(game) = shell.active() else {
        panic!("expected a counting round");
    };
    assert_eq!(html.matches("btn-answer").count(), 4, "{html}");
    let glyphs = html.matches("class=\"glyph\"").count();
    assert_eq!(glyphs, game.puzzle().items().len(), "{html}");
}

#[test]
fn catch_view_smoke_renders_the_idle_field() {
    let html = render(ViewKind::Game(GameKind::Catching));
    assert!(html.contains("Click it 5 times"), "missing title in {html}");
    assert!(html.contains("catch-field"), "missing field in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(!html.contains("class=\"target\""), "target before start in {html}");
}

#[test]
fn memory_view_smoke_renders_six_hidden_cards() {
    let html = render(ViewKind::Game(GameKind::Memory));
    assert!(html.contains("Find the pairs!"), "missing title in {html}");
    assert_eq!(html.matches(CARD_BACK.glyph()).count(), 6, "{html}");
}

#[test]
fn logic_view_smoke_renders_the_round() {
    let html = render(ViewKind::Game(GameKind::Logic));
    let shell = expected_shell(ViewKind::Game(GameKind::Logic));
    let ActiveGame::Logic(game) = shell.active() else {
        panic!("expected a logic round");
    };
    match map_logic(game) {
        LogicVm::OddOneOut { title, .. } => {
            assert!(html.contains("doesn"), "missing {title} in {html}");
        }
        LogicVm::ShapeMatch { options, .. } => {
            assert!(html.contains("shape-figure"), "missing figure in {html}");
            for option in options {
                assert!(html.contains(&option), "missing {option} in {html}");
            }
        }
    }
}
