use forest_core::games::Feedback;
use forest_core::model::GameKind;
use forest_core::{RewardState, ScoreState};
use services::{ENCOURAGE_LINES, Flash, PRAISE_LINES, Status};

const PRAISE: [&str; PRAISE_LINES] = ["Well done! ✨", "Magical! 😊", "Super! 💫", "Great job! 👏"];
const ENCOURAGE: [&str; ENCOURAGE_LINES] = ["Almost! Try again! 🙂", "You can do it! 💪"];

#[must_use]
pub fn status_text(status: Status) -> &'static str {
    match status {
        Status::Welcome => "Welcome to the Magic Forest! ✨",
        Status::Intro(GameKind::Counting) => "🔢 Count the magic creatures and tap the right number!",
        Status::Intro(GameKind::Catching) => "🐉 Click the dragon before it flies away!",
        Status::Intro(GameKind::Memory) => "🃏 Find the pairs in Magic Pairs!",
        Status::Intro(GameKind::Logic) => "🧠 What doesn't belong? Or which shape fits?",
        Status::Mix => "🔀 Magic mix! Have fun!",
        Status::Praise(idx) => PRAISE.get(idx).copied().unwrap_or(PRAISE[0]),
        Status::Reward => "🎉 Bravo! A new magic sticker! 🌟",
        Status::Encourage(idx) => ENCOURAGE.get(idx).copied().unwrap_or(ENCOURAGE[0]),
        Status::Restart => "Restart in the Magic Forest! 🌈",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: String,
    pub positive: bool,
}

#[must_use]
pub fn map_feedback(feedback: Feedback) -> FeedbackVm {
    let (text, positive) = match feedback {
        Feedback::Correct => ("Right! 🎉".to_string(), true),
        Feedback::TryAgain => ("Look again! 🙂".to_string(), false),
        Feedback::Caught { hits, needed } => (format!("Caught! ({hits}/{needed}) 🎉"), true),
        Feedback::Missed => ("Just missed! 😉".to_string(), false),
        Feedback::PairFound => ("A pair! ✨".to_string(), true),
        Feedback::NotAPair => ("Not the same, remember them! 🙂".to_string(), false),
        Feedback::OddFound => ("Right! That one is different. 🎉".to_string(), true),
        Feedback::LookCloser => ("Look closely again! 🙂".to_string(), false),
        Feedback::ShapeRight => ("Exactly right! 💡".to_string(), true),
        Feedback::ShapeWrong => ("Try again! 👀".to_string(), false),
    };
    FeedbackVm { text, positive }
}

#[must_use]
pub fn score_label(score: ScoreState) -> String {
    format!("Correct: {} | Attempts: {}", score.correct, score.attempts())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerBarVm {
    pub stars: String,
    pub progress: u32,
    pub goal: u32,
    /// Width of the filled part, 0..=100.
    pub percent: u32,
}

#[must_use]
pub fn map_sticker_bar(reward: RewardState) -> StickerBarVm {
    let goal = reward.goal.max(1);
    StickerBarVm {
        stars: "🌟".repeat(reward.stickers as usize),
        progress: reward.progress,
        goal,
        percent: reward.progress.saturating_mul(100) / goal,
    }
}

#[must_use]
pub fn nav_label(kind: GameKind) -> String {
    let icon = match kind {
        GameKind::Counting => "🔢",
        GameKind::Catching => "🐉",
        GameKind::Memory => "🃏",
        GameKind::Logic => "🧠",
    };
    format!("{icon} {}", kind.label())
}

#[must_use]
pub fn sound_label(enabled: bool) -> &'static str {
    if enabled {
        "🔊 Sound: on"
    } else {
        "🔇 Sound: off"
    }
}

#[must_use]
pub fn flash_class(flash: Option<Flash>) -> &'static str {
    match flash {
        Some(Flash::Good) => "play-area play-area--good",
        Some(Flash::Bad) => "play-area play-area--bad",
        None => "play-area",
    }
}

/// Digits 1–4 pick an answer button.
#[must_use]
pub fn digit_option(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0),
        "2" => Some(1),
        "3" => Some(2),
        "4" => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_footer_counts_all_attempts() {
        let score = ScoreState {
            correct: 3,
            incorrect: 2,
        };
        assert_eq!(score_label(score), "Correct: 3 | Attempts: 5");
    }

    #[test]
    fn sticker_bar_shows_stars_and_progress() {
        let vm = map_sticker_bar(RewardState {
            progress: 2,
            stickers: 3,
            goal: 5,
        });
        assert_eq!(vm.stars, "🌟🌟🌟");
        assert_eq!(vm.percent, 40);
        assert_eq!(vm.goal, 5);
    }

    #[test]
    fn every_status_has_text() {
        for idx in 0..PRAISE_LINES {
            assert!(!status_text(Status::Praise(idx)).is_empty());
        }
        for idx in 0..ENCOURAGE_LINES {
            assert!(!status_text(Status::Encourage(idx)).is_empty());
        }
        for kind in GameKind::ALL {
            assert!(status_text(Status::Intro(kind)).len() > 10);
        }
    }

    #[test]
    fn catch_feedback_shows_hit_count() {
        let vm = map_feedback(Feedback::Caught { hits: 3, needed: 5 });
        assert_eq!(vm.text, "Caught! (3/5) 🎉");
        assert!(vm.positive);
        assert!(!map_feedback(Feedback::NotAPair).positive);
    }

    #[test]
    fn digits_map_to_buttons() {
        assert_eq!(digit_option("1"), Some(0));
        assert_eq!(digit_option("4"), Some(3));
        assert_eq!(digit_option("5"), None);
        assert_eq!(digit_option("a"), None);
    }
}
