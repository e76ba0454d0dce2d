use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};
use forest_core::model::GameKind;

use crate::context::{AppContext, use_shell};
use crate::views::{CatchView, CountingView, LogicView, MemoryView};
use crate::vm::{
    flash_class, map_feedback, map_sticker_bar, nav_label, score_label, sound_label, status_text,
};

/// How often the layout checks the shell for due tasks.
const TICK: Duration = Duration::from_millis(30);

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CountingView)] Counting {},
        #[route("/catch", CatchView)] Catching {},
        #[route("/memory", MemoryView)] Memory {},
        #[route("/logic", LogicView)] Logic {},
}

#[must_use]
pub fn route_for(kind: GameKind) -> Route {
    match kind {
        GameKind::Counting => Route::Counting {},
        GameKind::Catching => Route::Catching {},
        GameKind::Memory => Route::Memory {},
        GameKind::Logic => Route::Logic {},
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell = use_shell();
    let clock = ctx.clock();

    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            let now = clock.now();
            if shell.peek().has_due(now) {
                shell.write().fire_due(now);
            }
        }
    });

    let flash = flash_class(shell.read().flash());
    rsx! {
        div { class: "app",
            GameHeader {}
            GameNav {}
            StatusLine {}
            main { class: "{flash}",
                Outlet::<Route> {}
            }
            FeedbackLine {}
            ScoreFooter {}
        }
    }
}

#[component]
pub fn GameHeader() -> Element {
    let shell = use_shell();
    let bar = map_sticker_bar(shell.read().reward());
    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "🪄 Magic Forest" }
            div { class: "sticker-bar",
                span { class: "sticker-label", "Stickers:" }
                span { class: "sticker-stars", "{bar.stars}" }
                div {
                    class: "sticker-progress",
                    title: "{bar.progress}/{bar.goal}",
                    div { class: "sticker-progress-fill", style: "width: {bar.percent}%;" }
                }
            }
        }
    }
}

#[component]
pub fn GameNav() -> Element {
    let navigator = use_navigator();
    let mut shell = use_shell();
    let sound_on = shell.read().sound_enabled();

    let game_buttons = GameKind::ALL.into_iter().map(move |kind| {
        let mut shell = shell;
        let label = nav_label(kind);
        rsx! {
            button {
                key: "{label}",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    shell.write().navigate(kind);
                    navigator.push(route_for(kind));
                },
                "{label}"
            }
        }
    });

    rsx! {
        nav { class: "game-nav",
            {game_buttons}
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let kind = {
                        let mut shell = shell.write();
                        shell.mix();
                        shell.kind()
                    };
                    navigator.push(route_for(kind));
                },
                "🔀 Mix"
            }
            button {
                class: "btn btn-secondary nav-sound",
                r#type: "button",
                onclick: move |_| {
                    shell.write().toggle_sound();
                },
                "{sound_label(sound_on)}"
            }
        }
    }
}

#[component]
pub fn StatusLine() -> Element {
    let shell = use_shell();
    let text = status_text(shell.read().status());
    rsx! {
        p { class: "status-line", "{text}" }
    }
}

#[component]
pub fn FeedbackLine() -> Element {
    let shell = use_shell();
    let (class, text) = match shell.read().feedback().map(map_feedback) {
        Some(vm) if vm.positive => ("feedback feedback--good", vm.text),
        Some(vm) => ("feedback feedback--warn", vm.text),
        None => ("feedback", String::new()),
    };
    rsx! {
        p { class: "{class}", "{text}" }
    }
}

#[component]
pub fn ScoreFooter() -> Element {
    let mut shell = use_shell();
    let label = score_label(shell.read().score());
    rsx! {
        footer { class: "app-footer",
            span { class: "score", "{label}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    shell.write().reset();
                },
                "New game"
            }
        }
    }
}
