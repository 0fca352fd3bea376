//! State engines behind each interactive page.

pub mod community;
pub mod dashboard;
pub mod progression;
pub mod quiz;

pub use community::Feed;
pub use dashboard::{DayUsage, Goal, Impact, UsageStats};
pub use progression::{BadgeTier, ProgressionEngine, DEFAULT_SEED_POINTS};
pub use quiz::{FeedbackTier, OptionMark, QuizEngine, QuizPhase};
