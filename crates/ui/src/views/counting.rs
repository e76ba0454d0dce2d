use dioxus::prelude::*;
use forest_core::games::{ActiveGame, Selection};

use crate::context::{AppContext, use_shell};
use crate::vm::{digit_option, map_counting};

use super::{GameMissing, select};

#[component]
pub fn CountingView() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_shell();
    let clock = ctx.clock();

    let vm = match shell.read().active() {
        ActiveGame::Counting(game) => Some(map_counting(game)),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! { GameMissing {} };
    };

    rsx! {
        div {
            class: "game game--counting",
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
            h2 { class: "game-title", "{vm.title}" }
            div { class: "glyph-row",
                for (idx, symbol) in vm.items.iter().enumerate() {
                    span { key: "{idx}", class: "glyph", "{symbol}" }
                }
            }
            div { class: "answer-row",
                for (idx, label) in vm.options.iter().enumerate() {
                    button {
                        key: "{idx}",
                        class: "btn btn-answer",
                        r#type: "button",
                        disabled: vm.solved,
                        onclick: move |_| select(shell, clock, Selection::Option(idx)),
                        "{label}"
                    }
                }
            }
        }
    }
}
