use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use forest_core::model::{GameKind, GameSettings};
use forest_core::time::fixed_clock;
use services::{AudioSink, Clock, GameShell, SilentAudio};

use crate::context::{UiApp, build_app_context};
use crate::routes::{FeedbackLine, GameHeader, GameNav, ScoreFooter, StatusLine};
use crate::views::{CatchView, CountingView, LogicView, MemoryView};

const SEED: u64 = 11;

struct TestApp;

impl UiApp for TestApp {
    fn settings(&self) -> GameSettings {
        GameSettings::default()
    }

    fn audio_sink(&self) -> Arc<dyn AudioSink> {
        Arc::new(SilentAudio)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn seed(&self) -> Option<u64> {
        Some(SEED)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// Header, navigation, status, feedback and footer around an empty page.
    Chrome,
    Game(GameKind),
}

#[derive(Props, Clone, PartialEq)]
struct ViewHarnessProps {
    view: ViewKind,
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp);
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| {
        let mut shell = ctx.new_shell();
        if let ViewKind::Game(kind) = props.view {
            shell.navigate(kind);
        }
        Signal::new(shell)
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Chrome => rsx! {
            GameHeader {}
            GameNav {}
            StatusLine {}
            FeedbackLine {}
            ScoreFooter {}
        },
        ViewKind::Game(GameKind::Counting) => rsx! { CountingView {} },
        ViewKind::Game(GameKind::Catching) => rsx! { CatchView {} },
        ViewKind::Game(GameKind::Memory) => rsx! { MemoryView {} },
        ViewKind::Game(GameKind::Logic) => rsx! { LogicView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// The shell the harness renders, built the same way so tests can compare.
pub fn expected_shell(view: ViewKind) -> GameShell {
    let app: Arc<dyn UiApp> = Arc::new(TestApp);
    let mut shell = build_app_context(&app).new_shell();
    if let ViewKind::Game(kind) = view {
        shell.navigate(kind);
    }
    shell
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { view });
    ViewHarness { dom }
}
