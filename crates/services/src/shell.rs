//! The game shell: one active mini-game, the session score and the sticker
//! bar, plus the deferred tasks that drive round transitions.
//!
//! The shell never reads the system clock. Anything that can schedule work
//! takes `now`, and the presentation layer calls [`GameShell::fire_due`] whenever
//! [`GameShell::has_due`] reports pending work.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use forest_core::games::{ActiveGame, Cue, Feedback, MiniGame, Pause, Reaction, Selection};
use forest_core::model::{GameKind, GameSettings};
use forest_core::timers::{DeferredAction, Generation, TimerQueue};
use forest_core::{RewardState, RewardTracker, ScoreAggregator, ScoreState};

use crate::audio::{Audio, Melody};

/// Number of praise lines to pick from after a correct answer.
pub const PRAISE_LINES: usize = 4;
/// Number of encouragement lines to pick from after a miss.
pub const ENCOURAGE_LINES: usize = 2;

/// What the status line above the play area says.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Welcome,
    Intro(GameKind),
    Mix,
    /// Index into the praise lines, below [`PRAISE_LINES`].
    Praise(usize),
    Reward,
    /// Index into the encouragement lines, below [`ENCOURAGE_LINES`].
    Encourage(usize),
    Restart,
}

/// Short tint of the play area after an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flash {
    Good,
    Bad,
}

pub struct GameShell {
    settings: GameSettings,
    score: ScoreAggregator,
    reward: RewardTracker,
    active: ActiveGame,
    generation: Generation,
    timers: TimerQueue,
    flash: Option<Flash>,
    /// The tint stays until the latest attempt's clear time.
    flash_until: Option<DateTime<Utc>>,
    feedback: Option<Feedback>,
    status: Status,
    audio: Audio,
    rng: StdRng,
}

impl GameShell {
    /// Start on a counting round with an OS-seeded generator.
    #[must_use]
    pub fn new(settings: GameSettings, audio: Audio) -> Self {
        Self::with_rng(settings, audio, StdRng::from_os_rng())
    }

    /// Deterministic shell for tests.
    #[must_use]
    pub fn with_seed(settings: GameSettings, audio: Audio, seed: u64) -> Self {
        Self::with_rng(settings, audio, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, mut audio: Audio, mut rng: StdRng) -> Self {
        audio.set_enabled(audio.is_enabled() && settings.sound_enabled());
        let active = ActiveGame::start(GameKind::Counting, &settings, &mut rng);
        Self {
            score: ScoreAggregator::new(),
            reward: RewardTracker::new(settings.sticker_goal()),
            active,
            generation: Generation::default(),
            timers: TimerQueue::new(),
            flash: None,
            flash_until: None,
            feedback: None,
            status: Status::Welcome,
            audio,
            rng,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn score(&self) -> ScoreState {
        self.score.read()
    }

    #[must_use]
    pub fn reward(&self) -> RewardState {
        self.reward.read()
    }

    #[must_use]
    pub fn active(&self) -> &ActiveGame {
        &self.active
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.active.kind()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn flash(&self) -> Option<Flash> {
        self.flash
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.audio.is_enabled()
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    /// Switch to `kind` and start a fresh round of it.
    pub fn navigate(&mut self, kind: GameKind) {
        self.switch_to(kind);
        self.status = Status::Intro(kind);
    }

    /// Pick one of the four games at random.
    pub fn mix(&mut self) {
        let kind = GameKind::random(&mut self.rng);
        self.switch_to(kind);
        self.status = Status::Mix;
        self.audio.play(Melody::Click);
    }

    /// Clear score and stickers and restart the current game.
    pub fn reset(&mut self) {
        self.score.reset();
        self.reward.reset();
        self.begin_round();
        self.status = Status::Restart;
        self.audio.play(Melody::Click);
        tracing::info!(game = ?self.kind(), "score and stickers reset");
    }

    /// Turn sound on or off. Returns the new state.
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = !self.audio.is_enabled();
        self.audio.set_enabled(enabled);
        self.audio.play(Melody::Click);
        enabled
    }

    /// Route player input to the active game and apply what it reports.
    pub fn handle_selection(&mut self, selection: Selection, now: DateTime<Utc>) -> Reaction {
        let reaction = self.active.handle_selection(selection, &mut self.rng);
        self.apply(&reaction, now);
        reaction
    }

    #[must_use]
    pub fn has_due(&self, now: DateTime<Utc>) -> bool {
        self.timers.has_due(now)
    }

    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.timers.next_due()
    }

    /// Run every task due at `now`. Tasks scheduled for an earlier round are
    /// dropped. Returns how many tasks were applied.
    pub fn fire_due(&mut self, now: DateTime<Utc>) -> usize {
        let mut applied = 0;
        for task in self.timers.take_due(now) {
            if task.generation != self.generation {
                tracing::debug!(
                    action = ?task.action,
                    scheduled = task.generation.value(),
                    current = self.generation.value(),
                    "dropping stale task"
                );
                continue;
            }
            match task.action {
                DeferredAction::NextRound => self.begin_round(),
                DeferredAction::ClearFlash => self.clear_flash(now),
                action => {
                    let reaction = self.active.on_deferred(action, &mut self.rng);
                    self.apply(&reaction, now);
                }
            }
            applied += 1;
        }
        applied
    }

    fn switch_to(&mut self, kind: GameKind) {
        self.active = ActiveGame::start(kind, &self.settings, &mut self.rng);
        self.advance_generation();
        tracing::debug!(game = ?kind, generation = self.generation.value(), "navigated");
    }

    fn begin_round(&mut self) {
        self.active.new_round(&mut self.rng);
        self.advance_generation();
        tracing::debug!(
            game = ?self.kind(),
            generation = self.generation.value(),
            "new round"
        );
    }

    fn advance_generation(&mut self) {
        self.generation = self.generation.next();
        self.flash = None;
        self.flash_until = None;
        self.feedback = None;
    }

    fn clear_flash(&mut self, now: DateTime<Utc>) {
        if self.flash_until.is_some_and(|until| now >= until) {
            self.flash = None;
            self.flash_until = None;
        }
    }

    fn apply(&mut self, reaction: &Reaction, now: DateTime<Utc>) {
        if reaction.cues.contains(&Cue::Click) {
            self.audio.play(Melody::Click);
        }
        if let Some(feedback) = reaction.feedback {
            self.feedback = Some(feedback);
        }
        if let Some(outcome) = reaction.outcome {
            self.record(outcome, now);
        }
        if reaction.cues.contains(&Cue::Reward) {
            self.audio.play(Melody::Reward);
        }
        if let Some(follow_up) = reaction.follow_up {
            let at = now + self.delay(follow_up.pause);
            self.timers.schedule(self.generation, at, follow_up.action);
        }
    }

    fn record(&mut self, outcome: bool, now: DateTime<Utc>) {
        self.score.record(outcome);
        self.flash = Some(if outcome { Flash::Good } else { Flash::Bad });
        let clear_at = now + millis(self.settings.delays().flash_ms);
        self.flash_until = Some(clear_at);
        self.timers
            .schedule(self.generation, clear_at, DeferredAction::ClearFlash);

        if !outcome {
            self.status = Status::Encourage(self.rng.random_range(0..ENCOURAGE_LINES));
            self.audio.play(Melody::Fail);
            return;
        }

        self.audio.play(Melody::Success);
        if self.reward.record_correct() {
            let reward = self.reward.read();
            tracing::info!(stickers = reward.stickers, "sticker earned");
            self.status = Status::Reward;
            self.audio.play(Melody::Reward);
        } else {
            self.status = Status::Praise(self.rng.random_range(0..PRAISE_LINES));
        }
    }

    fn delay(&self, pause: Pause) -> Duration {
        let delays = self.settings.delays();
        millis(match pause {
            Pause::Advance => delays.advance_ms,
            Pause::RoundComplete => delays.round_complete_ms,
            Pause::MismatchHide => delays.mismatch_hide_ms,
            Pause::CatchTick => delays.catch_tick_ms,
        })
    }
}

fn millis(ms: u32) -> Duration {
    Duration::milliseconds(i64::from(ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forest_core::model::GameSettingsDraft;
    use forest_core::time::fixed_now;

    fn shell() -> GameShell {
        GameShell::with_seed(GameSettings::default(), Audio::silent(), 3)
    }

    #[test]
    fn starts_on_counting_with_welcome() {
        let shell = shell();
        assert_eq!(shell.kind(), GameKind::Counting);
        assert_eq!(shell.status(), Status::Welcome);
        assert_eq!(shell.score(), ScoreState::default());
        assert_eq!(shell.pending_tasks(), 0);
    }

    #[test]
    fn navigation_advances_the_generation() {
        let mut shell = shell();
        let before = shell.generation();
        shell.navigate(GameKind::Logic);
        assert_eq!(shell.kind(), GameKind::Logic);
        assert_eq!(shell.status(), Status::Intro(GameKind::Logic));
        assert_eq!(shell.generation(), before.next());
    }

    #[test]
    fn pauses_map_to_configured_delays() {
        let shell = shell();
        assert_eq!(shell.delay(Pause::Advance), Duration::milliseconds(700));
        assert_eq!(shell.delay(Pause::RoundComplete), Duration::milliseconds(800));
        assert_eq!(shell.delay(Pause::MismatchHide), Duration::milliseconds(900));
        assert_eq!(shell.delay(Pause::CatchTick), Duration::milliseconds(900));
    }

    #[test]
    fn settings_can_start_muted() {
        let settings = GameSettingsDraft {
            sound_enabled: false,
            ..GameSettingsDraft::default()
        }
        .validate()
        .unwrap();
        let audio = Audio::new(std::sync::Arc::new(crate::audio::SilentAudio), true);
        let mut shell = GameShell::with_seed(settings, audio, 1);
        assert!(!shell.sound_enabled());
        assert!(shell.toggle_sound());
        assert!(shell.sound_enabled());
    }

    #[test]
    fn misses_pick_an_encouragement_line() {
        let mut shell = shell();
        shell.record(false, fixed_now());
        assert!(matches!(shell.status(), Status::Encourage(i) if i < ENCOURAGE_LINES));
        assert_eq!(shell.flash(), Some(Flash::Bad));
        assert_eq!(shell.score().incorrect, 1);
    }

    #[test]
    fn early_clear_keeps_a_newer_flash() {
        let mut shell = shell();
        let start = fixed_now();
        shell.record(false, start);
        shell.record(true, start + Duration::milliseconds(150));

        shell.clear_flash(start + Duration::milliseconds(180));
        assert_eq!(shell.flash(), Some(Flash::Good));
        shell.clear_flash(start + Duration::milliseconds(330));
        assert_eq!(shell.flash(), None);
    }
}
