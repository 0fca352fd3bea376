//! Advisory notifications raised by engine actions.
//!
//! A notice is returned alongside a state transition so the shell can show
//! it. Nothing in the engines depends on whether it is displayed.

/// Points announced for a correct quiz answer. Display only, the quiz score
/// counts answers, not points.
pub const QUIZ_ANSWER_POINTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AnswerCorrect,
    AnswerIncorrect { correct_option: usize },
    ChallengeCompleted { title: String, points: u32 },
    PostShared,
    LinkCopied,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AnswerCorrect => "Correct!",
            Notice::AnswerIncorrect { .. } => "Not quite",
            Notice::ChallengeCompleted { .. } => "Challenge completed!",
            Notice::PostShared => "Post shared with the community!",
            Notice::LinkCopied => "Post link copied to clipboard!",
        }
    }

    pub fn description(&self) -> Option<String> {
        match self {
            Notice::AnswerCorrect => {
                Some(format!("You earned {} points!", QUIZ_ANSWER_POINTS))
            }
            Notice::AnswerIncorrect { correct_option } => Some(format!(
                "The right answer was {}.",
                option_label(*correct_option)
            )),
            Notice::ChallengeCompleted { title, points } => {
                Some(format!("{}: you earned {} points!", title, points))
            }
            Notice::PostShared | Notice::LinkCopied => None,
        }
    }

    /// Whether the notice reports something going the user's way.
    pub fn is_positive(&self) -> bool {
        !matches!(self, Notice::AnswerIncorrect { .. })
    }
}

/// Letter shown next to an option, `A` for index 0.
pub fn option_label(index: usize) -> char {
    const LABELS: [char; 4] = ['A', 'B', 'C', 'D'];
    LABELS.get(index).copied().unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_notice_mentions_points() {
        let notice = Notice::ChallengeCompleted {
            title: "Zero Drip Week".to_string(),
            points: 75,
        };
        assert_eq!(notice.title(), "Challenge completed!");
        assert_eq!(
            notice.description().as_deref(),
            Some("Zero Drip Week: you earned 75 points!")
        );
        assert!(notice.is_positive());
    }

    #[test]
    fn test_incorrect_notice_names_answer() {
        let notice = Notice::AnswerIncorrect { correct_option: 3 };
        assert_eq!(
            notice.description().as_deref(),
            Some("The right answer was D.")
        );
        assert!(!notice.is_positive());
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(3), 'D');
        assert_eq!(option_label(9), '?');
    }
}
