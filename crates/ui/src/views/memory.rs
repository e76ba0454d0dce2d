use dioxus::prelude::*;
use forest_core::games::{ActiveGame, Selection};

use crate::context::{AppContext, use_shell};
use crate::vm::{MemoryCardVm, map_memory};

use super::{GameMissing, select};

fn card_class(card: MemoryCardVm, locked: bool) -> &'static str {
    match (card.matched, locked) {
        (true, _) => "card card--matched",
        (false, true) => "card card--locked",
        (false, false) => "card",
    }
}

#[component]
pub fn MemoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_shell();
    let clock = ctx.clock();

    let vm = match shell.read().active() {
        ActiveGame::Memory(game) => Some(map_memory(game)),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! { GameMissing {} };
    };

    rsx! {
        div { class: "game game--memory",
            h2 { class: "game-title", "{vm.title}" }
            div { class: "memory-grid",
                for (idx, card) in vm.cards.iter().copied().enumerate() {
                    button {
                        key: "{idx}",
                        class: card_class(card, vm.locked),
                        r#type: "button",
                        onclick: move |_| select(shell, clock, Selection::Card(idx)),
                        "{card.face}"
                    }
                }
            }
        }
    }
}
