use std::sync::Arc;

use dioxus::prelude::*;
use forest_core::model::GameSettings;
use services::{Audio, AudioSink, Clock, GameShell};

pub trait UiApp: Send + Sync {
    fn settings(&self) -> GameSettings;
    fn audio_sink(&self) -> Arc<dyn AudioSink>;

    fn clock(&self) -> Clock {
        Clock::system()
    }

    /// Fixed seed for reproducible rounds. `None` seeds from the OS.
    fn seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    settings: GameSettings,
    audio_sink: Arc<dyn AudioSink>,
    clock: Clock,
    seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            settings: app.settings(),
            audio_sink: app.audio_sink(),
            clock: app.clock(),
            seed: app.seed(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Build the shell that lives for the whole window.
    #[must_use]
    pub fn new_shell(&self) -> GameShell {
        let audio = Audio::new(
            Arc::clone(&self.audio_sink),
            self.settings.sound_enabled(),
        );
        match self.seed {
            Some(seed) => GameShell::with_seed(self.settings, audio, seed),
            None => GameShell::new(self.settings, audio),
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The shell shared by the layout and every game view.
#[must_use]
pub fn use_shell() -> Signal<GameShell> {
    use_context::<Signal<GameShell>>()
}
