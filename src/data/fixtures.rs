//! Fixture data compiled into the binary.
//!
//! The built-in fixtures go through the same parser and validation as
//! user-supplied files, so a broken edit here surfaces as a `LoadError`.

use crate::models::{Challenge, Post, Question};

use super::loader::{parse_challenges, parse_posts, parse_questions, LoadError};

const QUESTIONS_JSON: &str = include_str!("../../fixtures/questions.json");
const CHALLENGES_JSON: &str = include_str!("../../fixtures/challenges.json");
const POSTS_JSON: &str = include_str!("../../fixtures/posts.json");

pub fn builtin_questions() -> Result<Vec<Question>, LoadError> {
    parse_questions(QUESTIONS_JSON, "built-in questions")
}

pub fn builtin_challenges() -> Result<Vec<Challenge>, LoadError> {
    parse_challenges(CHALLENGES_JSON, "built-in challenges")
}

pub fn builtin_posts() -> Result<Vec<Post>, LoadError> {
    parse_posts(POSTS_JSON, "built-in posts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_questions_answer_key() {
        let questions = builtin_questions().unwrap();
        let key: Vec<usize> = questions.iter().map(|q| q.correct_option).collect();
        assert_eq!(key, vec![1, 0, 3, 1, 2]);
    }

    #[test]
    fn test_builtin_challenges() {
        let challenges = builtin_challenges().unwrap();
        assert_eq!(challenges.len(), 6);

        let zero_drip = challenges.iter().find(|c| c.id == 2).unwrap();
        assert_eq!(zero_drip.points, 75);
        assert!(zero_drip.completed);
        assert_eq!(challenges.iter().filter(|c| c.completed).count(), 1);
    }

    #[test]
    fn test_builtin_posts() {
        let posts = builtin_posts().unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].author, "Sarah Chen");
        assert!(posts[1].liked);
    }
}
