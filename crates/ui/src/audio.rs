use std::time::Duration;

use dioxus::document::eval;
use services::{AudioError, AudioSink, Tone};

/// Square-wave beeps through the webview's Web Audio API.
///
/// Playback is queued in the page and never awaited. A webview without Web
/// Audio simply stays silent.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAudioSink;

impl AudioSink for WebAudioSink {
    fn play(&self, frequency: u32, duration: Duration) -> Result<(), AudioError> {
        self.play_sequence(&[Tone {
            frequency,
            duration,
        }])
    }

    fn play_sequence(&self, tones: &[Tone]) -> Result<(), AudioError> {
        if tones.is_empty() {
            return Ok(());
        }
        let _ = eval(&tone_script(tones));
        Ok(())
    }
}

pub(crate) fn tone_script(tones: &[Tone]) -> String {
    let notes = tones
        .iter()
        .map(|tone| format!("[{},{}]", tone.frequency, tone.duration.as_millis()))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"(function() {{
                const Ctx = window.AudioContext || window.webkitAudioContext;
                if (!Ctx) {{
                    return;
                }}
                const ctx = window.__forestAudio || (window.__forestAudio = new Ctx());
                let at = ctx.currentTime;
                for (const [freq, ms] of [{notes}]) {{
                    const osc = ctx.createOscillator();
                    const gain = ctx.createGain();
                    osc.type = "square";
                    osc.frequency.value = freq;
                    gain.gain.value = 0.06;
                    osc.connect(gain);
                    gain.connect(ctx.destination);
                    osc.start(at);
                    at += ms / 1000;
                    osc.stop(at);
                }}
            }})();"#
    )
}
