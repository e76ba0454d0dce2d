#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod shell;

pub use forest_core::Clock;

pub use audio::{Audio, AudioSink, Melody, RecordingAudio, SilentAudio, Tone};
pub use error::AudioError;
pub use shell::{ENCOURAGE_LINES, Flash, GameShell, PRAISE_LINES, Status};
