#![forbid(unsafe_code)]

pub mod error;
pub mod evaluate;
pub mod games;
pub mod model;
pub mod reward;
pub mod score;
pub mod time;
pub mod timers;

pub use error::Error;
pub use reward::{RewardState, RewardTracker};
pub use score::{ScoreAggregator, ScoreState};
pub use time::Clock;
