mod catching;
mod counting;
mod logic;
mod memory;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use dioxus::prelude::*;
use forest_core::games::Selection;
use services::{Clock, GameShell};

pub use catching::CatchView;
pub use counting::CountingView;
pub use logic::LogicView;
pub use memory::MemoryView;

/// Forward one selection to the shell, stamped with the current time.
fn select(mut shell: Signal<GameShell>, clock: Clock, selection: Selection) {
    let reaction = shell.write().handle_selection(selection, clock.now());
    if reaction.is_ignored() {
        tracing::debug!(?selection, "selection ignored");
    }
}

/// Shown while the shell is still on another game.
#[component]
fn GameMissing() -> Element {
    rsx! {
        div { class: "game game--empty" }
    }
}
