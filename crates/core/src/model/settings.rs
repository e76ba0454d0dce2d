use thiserror::Error;

pub const DEFAULT_STICKER_GOAL: u32 = 5;
pub const DEFAULT_HITS_PER_ROUND: u32 = 5;
pub const DEFAULT_HIT_HALF_WIDTH: u32 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("sticker goal must be at least 1")]
    ZeroStickerGoal,
    #[error("a catch round needs at least one hit")]
    ZeroHitsPerRound,
    #[error("hit box half-width must be positive")]
    ZeroHitBox,
    #[error("catch field {width}x{height} is too small for margin {margin}")]
    FieldTooSmall { width: u32, height: u32, margin: u32 },
    #[error("catch tick period must be positive")]
    ZeroTick,
}

/// Play area of the catch game, in canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: u32,
    pub height: u32,
    /// Keeps the target away from the edges.
    pub margin: u32,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: 960,
            height: 260,
            margin: 60,
        }
    }
}

/// Fixed delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delays {
    /// Correct answer in counting or logic → next round.
    pub advance_ms: u32,
    /// Finished memory board or catch round → next round.
    pub round_complete_ms: u32,
    pub mismatch_hide_ms: u32,
    pub catch_tick_ms: u32,
    pub flash_ms: u32,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            advance_ms: 700,
            round_complete_ms: 800,
            mismatch_hide_ms: 900,
            catch_tick_ms: 900,
            flash_ms: 180,
        }
    }
}

/// Validated game tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    sticker_goal: u32,
    hits_per_round: u32,
    hit_half_width: u32,
    field: FieldSize,
    delays: Delays,
    sound_enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettingsDraft {
    pub sticker_goal: u32,
    pub hits_per_round: u32,
    pub hit_half_width: u32,
    pub field: FieldSize,
    pub delays: Delays,
    pub sound_enabled: bool,
}

impl Default for GameSettingsDraft {
    fn default() -> Self {
        Self {
            sticker_goal: DEFAULT_STICKER_GOAL,
            hits_per_round: DEFAULT_HITS_PER_ROUND,
            hit_half_width: DEFAULT_HIT_HALF_WIDTH,
            field: FieldSize::default(),
            delays: Delays::default(),
            sound_enabled: true,
        }
    }
}

impl GameSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `SettingsError` when a counter is zero or the catch field
    /// leaves no room inside its margin.
    pub fn validate(self) -> Result<GameSettings, SettingsError> {
        if self.sticker_goal == 0 {
            return Err(SettingsError::ZeroStickerGoal);
        }
        if self.hits_per_round == 0 {
            return Err(SettingsError::ZeroHitsPerRound);
        }
        if self.hit_half_width == 0 {
            return Err(SettingsError::ZeroHitBox);
        }
        let FieldSize {
            width,
            height,
            margin,
        } = self.field;
        if width <= margin.saturating_mul(2) || height <= margin.saturating_mul(2) {
            return Err(SettingsError::FieldTooSmall {
                width,
                height,
                margin,
            });
        }
        if self.delays.catch_tick_ms == 0 {
            return Err(SettingsError::ZeroTick);
        }

        Ok(GameSettings {
            sticker_goal: self.sticker_goal,
            hits_per_round: self.hits_per_round,
            hit_half_width: self.hit_half_width,
            field: self.field,
            delays: self.delays,
            sound_enabled: self.sound_enabled,
        })
    }
}

impl GameSettings {
    #[must_use]
    pub fn sticker_goal(&self) -> u32 {
        self.sticker_goal
    }

    #[must_use]
    pub fn hits_per_round(&self) -> u32 {
        self.hits_per_round
    }

    #[must_use]
    pub fn hit_half_width(&self) -> u32 {
        self.hit_half_width
    }

    #[must_use]
    pub fn field(&self) -> FieldSize {
        self.field
    }

    #[must_use]
    pub fn delays(&self) -> Delays {
        self.delays
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sticker_goal: DEFAULT_STICKER_GOAL,
            hits_per_round: DEFAULT_HITS_PER_ROUND,
            hit_half_width: DEFAULT_HIT_HALF_WIDTH,
            field: FieldSize::default(),
            delays: Delays::default(),
            sound_enabled: true,
        }
    }
}
