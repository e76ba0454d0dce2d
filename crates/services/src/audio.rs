//! Sound cues.
//!
//! The shell only knows melodies. Turning a tone into sound is the job of an
//! [`AudioSink`]; a missing or broken backend must never interrupt a game, so
//! [`Audio`] logs sink failures at debug level and carries on.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::AudioError;

/// One beep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tone {
    pub frequency: u32,
    pub duration: Duration,
}

impl Tone {
    #[must_use]
    pub const fn new(frequency: u32, millis: u64) -> Self {
        Self {
            frequency,
            duration: Duration::from_millis(millis),
        }
    }
}

const SUCCESS: [Tone; 3] = [
    Tone::new(880, 120),
    Tone::new(1100, 120),
    Tone::new(1320, 120),
];
const FAIL: [Tone; 2] = [Tone::new(300, 180), Tone::new(250, 180)];
const REWARD: [Tone; 4] = [
    Tone::new(880, 120),
    Tone::new(980, 120),
    Tone::new(1240, 120),
    Tone::new(1560, 120),
];
const CLICK: [Tone; 1] = [Tone::new(950, 40)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Melody {
    Success,
    Fail,
    Reward,
    Click,
}

impl Melody {
    #[must_use]
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Melody::Success => &SUCCESS,
            Melody::Fail => &FAIL,
            Melody::Reward => &REWARD,
            Melody::Click => &CLICK,
        }
    }
}

/// Audio backend. Calls are fire-and-forget.
pub trait AudioSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `AudioError` when the backend cannot play the tone.
    fn play(&self, frequency: u32, duration: Duration) -> Result<(), AudioError>;

    /// Play tones back to back. Backends that can queue sound should override
    /// this; the default stops at the first failing tone.
    ///
    /// # Errors
    ///
    /// Returns the first `AudioError` raised by `play`.
    fn play_sequence(&self, tones: &[Tone]) -> Result<(), AudioError> {
        for tone in tones {
            self.play(tone.frequency, tone.duration)?;
        }
        Ok(())
    }
}

/// Plays nothing. Used when no backend is wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&self, _frequency: u32, _duration: Duration) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Keeps every tone it is asked to play, for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    tones: Arc<Mutex<Vec<Tone>>>,
    failing: bool,
}

impl RecordingAudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that records nothing and rejects every tone.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tones(&self) -> Vec<Tone> {
        self.tones
            .lock()
            .map(|tones| tones.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded tones.
    pub fn take(&self) -> Vec<Tone> {
        self.tones
            .lock()
            .map(|mut tones| std::mem::take(&mut *tones))
            .unwrap_or_default()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&self, frequency: u32, duration: Duration) -> Result<(), AudioError> {
        if self.failing {
            return Err(AudioError::Unavailable);
        }
        let mut tones = self
            .tones
            .lock()
            .map_err(|err| AudioError::Rejected(err.to_string()))?;
        tones.push(Tone {
            frequency,
            duration,
        });
        Ok(())
    }
}

/// Sound switch in front of a sink.
#[derive(Clone)]
pub struct Audio {
    sink: Arc<dyn AudioSink>,
    enabled: bool,
}

impl Audio {
    #[must_use]
    pub fn new(sink: Arc<dyn AudioSink>, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(SilentAudio), false)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn play(&self, melody: Melody) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.sink.play_sequence(melody.tones()) {
            tracing::debug!(?melody, error = %err, "sound cue dropped");
        }
    }
}

impl std::fmt::Debug for Audio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Audio")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_audio_plays_nothing() {
        let sink = RecordingAudio::new();
        let audio = Audio::new(Arc::new(sink.clone()), false);
        audio.play(Melody::Success);
        assert!(sink.tones().is_empty());
    }

    #[test]
    fn melodies_reach_the_sink_in_order() {
        let sink = RecordingAudio::new();
        let audio = Audio::new(Arc::new(sink.clone()), true);
        audio.play(Melody::Fail);
        audio.play(Melody::Click);
        let frequencies: Vec<u32> = sink.take().iter().map(|t| t.frequency).collect();
        assert_eq!(frequencies, vec![300, 250, 950]);
        assert!(sink.tones().is_empty());
    }

    #[test]
    fn failing_backend_is_tolerated() {
        let audio = Audio::new(Arc::new(RecordingAudio::failing()), true);
        audio.play(Melody::Reward);
        assert!(audio.is_enabled());
    }

    #[test]
    fn reward_melody_climbs() {
        let tones = Melody::Reward.tones();
        assert_eq!(tones.len(), 4);
        assert!(tones.windows(2).all(|w| w[0].frequency < w[1].frequency));
        assert!(tones.iter().all(|t| t.duration == Duration::from_millis(120)));
    }
}
