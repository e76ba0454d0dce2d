use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use forest_core::model::{GameSettings, GameSettingsDraft};
use services::{AudioSink, Clock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, WebAudioSink, build_app_context};

const DEFAULT_LOG_FILTER: &str = "app=info,services=info";

struct DesktopApp {
    settings: GameSettings,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> GameSettings {
        self.settings
    }

    fn audio_sink(&self) -> Arc<dyn AudioSink> {
        Arc::new(WebAudioSink)
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }
}

fn load_settings() -> Result<GameSettings, forest_core::Error> {
    Ok(GameSettingsDraft::new().validate()?)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let settings = load_settings()?;
    tracing::info!(
        sticker_goal = settings.sticker_goal(),
        sound = settings.sound_enabled(),
        "starting Magic Forest"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { settings });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Magic Forest")
            .with_inner_size(LogicalSize::new(980.0, 660.0))
            .with_min_inner_size(LogicalSize::new(860.0, 580.0))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
