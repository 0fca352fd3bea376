//! Usage statistics shown on the dashboard.
//!
//! These are sample numbers; there is no metering behind them. Points,
//! badge and completed challenges come from the progression engine instead.

/// Daily usage target in gallons.
pub const DAILY_TARGET: u32 = 90;

const QUIZ_GOAL: u32 = 30;
const CHALLENGE_GOAL: u32 = 10;
const STREAK_GOAL: u32 = 30;

const GALLONS_PER_BOTTLE: f64 = 7.5;
const GALLONS_PER_TREE: f64 = 46.0;
const GALLONS_PER_BATHTUB: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayUsage {
    pub day: &'static str,
    pub usage: u32,
    pub target: u32,
}

impl DayUsage {
    pub fn target_ratio(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        self.usage as f64 / self.target as f64
    }

    pub fn is_over_target(&self) -> bool {
        self.usage > self.target
    }
}

/// A goal shown as `current/goal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub label: &'static str,
    pub current: u32,
    pub goal: u32,
}

impl Goal {
    /// Clamped to 1.0 once the goal is met.
    pub fn fraction(&self) -> f64 {
        if self.goal == 0 {
            return 1.0;
        }
        (self.current as f64 / self.goal as f64).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impact {
    pub gallons_saved: u32,
    pub bottles: u32,
    pub trees: u32,
    pub bathtubs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageStats {
    pub daily_usage: u32,
    pub weekly_average: u32,
    pub monthly_total: u32,
    pub saved_this_month: u32,
    pub current_streak: u32,
    pub quizzes_taken: u32,
    pub week: Vec<DayUsage>,
}

impl UsageStats {
    pub fn sample() -> Self {
        let week = [
            ("Mon", 95),
            ("Tue", 88),
            ("Wed", 92),
            ("Thu", 87),
            ("Fri", 85),
            ("Sat", 90),
            ("Sun", 83),
        ]
        .into_iter()
        .map(|(day, usage)| DayUsage {
            day,
            usage,
            target: DAILY_TARGET,
        })
        .collect();

        Self {
            daily_usage: 85,
            weekly_average: 92,
            monthly_total: 2760,
            saved_this_month: 840,
            current_streak: 7,
            quizzes_taken: 12,
            week,
        }
    }

    /// How far the weekly average sits below the target, in percent.
    /// Negative when above target.
    pub fn below_target_percent(&self) -> f64 {
        let target = DAILY_TARGET as f64;
        (target - self.weekly_average as f64) * 100.0 / target
    }

    /// `challenges_completed` is the live count from the progression engine.
    pub fn goals(&self, challenges_completed: usize) -> [Goal; 3] {
        [
            Goal {
                label: "Quizzes Completed",
                current: self.quizzes_taken,
                goal: QUIZ_GOAL,
            },
            Goal {
                label: "Challenges Completed",
                current: u32::try_from(challenges_completed).unwrap_or(u32::MAX),
                goal: CHALLENGE_GOAL,
            },
            Goal {
                label: "Daily Streak",
                current: self.current_streak,
                goal: STREAK_GOAL,
            },
        ]
    }

    pub fn impact(&self) -> Impact {
        let saved = self.saved_this_month as f64;
        Impact {
            gallons_saved: self.saved_this_month,
            bottles: (saved / GALLONS_PER_BOTTLE) as u32,
            trees: (saved / GALLONS_PER_TREE) as u32,
            bathtubs: (saved / GALLONS_PER_BATHTUB) as u32,
        }
    }
}

impl Default for UsageStats {
    fn default() -> Self {
        Self::sample()
    }
}
