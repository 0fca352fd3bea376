//! Quiz progression and scoring.
//!
//! The quiz walks a fixed list of questions. Each question is answered,
//! revealed, then advanced past; after the last question is revealed,
//! advancing completes the quiz. Only `reset` leaves the completed state.

use crate::models::{Question, NUM_OPTIONS};
use crate::notice::{Notice, QUIZ_ANSWER_POINTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for an answer to the current question.
    Answering,
    /// The answer was submitted, correctness and explanation are visible.
    Revealed,
    /// All questions were answered.
    Completed,
}

/// Qualitative feedback for the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Great,
    GoodEffort,
}

impl FeedbackTier {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            FeedbackTier::Excellent
        } else if percentage >= 60.0 {
            FeedbackTier::Great
        } else {
            FeedbackTier::GoodEffort
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent work! You're a water conservation expert!",
            FeedbackTier::Great => "Great job! Keep learning about water conservation!",
            FeedbackTier::GoodEffort => {
                "Good effort! There's always more to learn about saving water!"
            }
        }
    }
}

/// How an option should be drawn given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Selected,
    /// Revealed and this is the right answer.
    Correct,
    /// Revealed, selected, and wrong.
    Wrong,
}

pub struct QuizEngine {
    questions: Vec<Question>,
    current_index: usize,
    selected_option: Option<usize>,
    revealed: bool,
    score: usize,
    completed: bool,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            selected_option: None,
            revealed: false,
            score: 0,
            completed: false,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        if self.completed {
            QuizPhase::Completed
        } else if self.revealed {
            QuizPhase::Revealed
        } else {
            QuizPhase::Answering
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Conservation points for the correct answers so far.
    pub fn points(&self) -> u32 {
        u32::try_from(self.score)
            .unwrap_or(u32::MAX)
            .saturating_mul(QUIZ_ANSWER_POINTS)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn select_option(&mut self, index: usize) {
        if self.revealed || self.completed {
            tracing::debug!(index, "selection ignored after reveal");
            return;
        }
        let in_range = self
            .current_question()
            .is_some_and(|q| index < q.options.len());
        if !in_range {
            tracing::debug!(index, "selection out of range");
            return;
        }
        self.selected_option = Some(index);
    }

    pub fn select_next_option(&mut self) {
        let next = match self.selected_option {
            Some(index) => (index + 1) % NUM_OPTIONS,
            None => 0,
        };
        self.select_option(next);
    }

    pub fn select_previous_option(&mut self) {
        let previous = match self.selected_option {
            Some(index) => (index + NUM_OPTIONS - 1) % NUM_OPTIONS,
            None => 0,
        };
        self.select_option(previous);
    }

    /// Reveals the current question. Returns the advisory notice, or `None`
    /// when there is nothing to submit.
    pub fn submit_answer(&mut self) -> Option<Notice> {
        if self.revealed || self.completed {
            tracing::debug!("submit ignored, answer already revealed");
            return None;
        }
        let Some(selected) = self.selected_option else {
            tracing::debug!("submit ignored, nothing selected");
            return None;
        };
        let question = self.questions.get(self.current_index)?;

        let correct = question.is_correct(selected);
        if correct {
            self.score += 1;
        }
        self.revealed = true;

        tracing::info!(
            question = question.id,
            selected,
            correct,
            score = self.score,
            "answer submitted"
        );

        if correct {
            Some(Notice::AnswerCorrect)
        } else {
            Some(Notice::AnswerIncorrect {
                correct_option: question.correct_option,
            })
        }
    }

    pub fn advance(&mut self) {
        if !self.revealed || self.completed {
            tracing::debug!("advance ignored, answer not revealed");
            return;
        }

        if self.is_last_question() {
            self.completed = true;
            tracing::info!(
                score = self.score,
                total = self.questions.len(),
                "quiz completed"
            );
        } else {
            self.current_index += 1;
            self.selected_option = None;
            self.revealed = false;
        }
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.selected_option = None;
        self.revealed = false;
        self.score = 0;
        self.completed = false;
        tracing::info!("quiz reset");
    }

    pub fn progress_fraction(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let answered = self.current_index + usize::from(self.revealed);
        answered as f64 / self.questions.len() as f64
    }

    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.score as f64 / self.questions.len() as f64) * 100.0
    }

    pub fn feedback_tier(&self) -> FeedbackTier {
        FeedbackTier::for_percentage(self.percentage())
    }

    pub fn option_mark(&self, index: usize) -> OptionMark {
        let is_selected = self.selected_option == Some(index);
        if !self.revealed {
            return if is_selected {
                OptionMark::Selected
            } else {
                OptionMark::Idle
            };
        }

        let is_correct = self
            .current_question()
            .is_some_and(|q| q.is_correct(index));
        match (is_correct, is_selected) {
            (true, _) => OptionMark::Correct,
            (false, true) => OptionMark::Wrong,
            (false, false) => OptionMark::Idle,
        }
    }
}
