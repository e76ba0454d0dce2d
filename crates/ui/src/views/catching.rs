use dioxus::prelude::*;
use forest_core::games::{ActiveGame, Selection};
use forest_core::model::Point;

use crate::context::{AppContext, use_shell};
use crate::vm::map_catch;

use super::{GameMissing, select};

#[component]
pub fn CatchView() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_shell();
    let clock = ctx.clock();

    let vm = match shell.read().active() {
        ActiveGame::Catching(game) => Some(map_catch(game)),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! { GameMissing {} };
    };

    rsx! {
        div { class: "game game--catching",
            h2 { class: "game-title", "{vm.title}" }
            // Children ignore pointer events so click offsets are always
            // relative to the field itself.
            svg {
                class: "catch-field",
                width: "{vm.width}",
                height: "{vm.height}",
                "viewBox": "0 0 {vm.width} {vm.height}",
                onclick: move |evt: MouseEvent| {
                    let at = evt.element_coordinates();
                    select(shell, clock, Selection::Click(Point::new(at.x, at.y)));
                },
                for (idx, spark) in vm.sparks.iter().enumerate() {
                    text {
                        key: "{idx}",
                        class: "spark",
                        x: "{spark.at.x}",
                        y: "{spark.at.y}",
                        "{spark.symbol}"
                    }
                }
                if let Some(target) = &vm.target {
                    text {
                        class: "target",
                        x: "{target.at.x}",
                        y: "{target.at.y}",
                        "{target.symbol}"
                    }
                }
            }
            div { class: "answer-row",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !vm.can_start,
                    onclick: move |_| select(shell, clock, Selection::Start),
                    "Start"
                }
            }
        }
    }
}
