use dioxus::prelude::*;
use forest_core::games::{ActiveGame, Selection};
use forest_core::model::Shape;

use crate::context::{AppContext, use_shell};
use crate::vm::{LogicVm, digit_option, map_logic};

use super::{GameMissing, select};

#[component]
fn ShapeFigure(shape: Shape, color: &'static str) -> Element {
    rsx! {
        svg { class: "shape-figure", width: "960", height: "340", "viewBox": "0 0 960 340",
            match shape {
                Shape::Circle => rsx! {
                    circle { cx: "490", cy: "180", r: "130", fill: color }
                },
                Shape::Square => rsx! {
                    rect { x: "360", y: "50", width: "260", height: "260", fill: color }
                },
                Shape::Triangle => rsx! {
                    polygon { points: "490,50 360,310 620,310", fill: color }
                },
                Shape::Heart => rsx! {
                    circle { cx: "445", cy: "135", r: "65", fill: color }
                    circle { cx: "575", cy: "135", r: "65", fill: color }
                    polygon { points: "360,180 640,180 500,320", fill: color }
                },
            }
        }
    }
}

#[component]
pub fn LogicView() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_shell();
    let clock = ctx.clock();

    let vm = match shell.read().active() {
        ActiveGame::Logic(game) => Some(map_logic(game)),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! { GameMissing {} };
    };
    let (title, options, solved) = match &vm {
        LogicVm::OddOneOut {
            title,
            options,
            solved,
            ..
        }
        | LogicVm::ShapeMatch {
            title,
            options,
            solved,
            ..
        } => (*title, options.clone(), *solved),
    };

    rsx! {
        div {
            class: "game game--logic",
            tabindex: "0",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.data().set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if let Key::Character(ch) = evt.key() {
                    if let Some(idx) = digit_option(&ch) {
                        select(shell, clock, Selection::Option(idx));
                    }
                }
            },
            h2 { class: "game-title", "{title}" }
            match vm {
                LogicVm::OddOneOut { items, .. } => rsx! {
                    div { class: "glyph-row glyph-row--large",
                        for (idx, symbol) in items.iter().enumerate() {
                            span { key: "{idx}", class: "glyph", "{symbol}" }
                        }
                    }
                },
                LogicVm::ShapeMatch { shape, color, .. } => rsx! {
                    ShapeFigure { shape, color }
                },
            }
            div { class: "answer-row",
                for (idx, label) in options.iter().enumerate() {
                    button {
                        key: "{idx}",
                        class: "btn btn-answer",
                        r#type: "button",
                        disabled: solved,
                        onclick: move |_| select(shell, clock, Selection::Option(idx)),
                        "{label}"
                    }
                }
            }
        }
    }
}
