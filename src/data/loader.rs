use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Challenge, Post, Question, NUM_OPTIONS};

/// Error loading or validating fixture data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{origin} must contain at least one entry")]
    Empty { origin: String },
    #[error("{origin}: {message}")]
    Invalid { origin: String, message: String },
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    parse_questions(&read(path)?, &path.display().to_string())
}

pub fn load_challenges_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Challenge>, LoadError> {
    let path = path.as_ref();
    parse_challenges(&read(path)?, &path.display().to_string())
}

pub fn load_posts_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Post>, LoadError> {
    let path = path.as_ref();
    parse_posts(&read(path)?, &path.display().to_string())
}

pub fn parse_questions(json: &str, origin: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = parse_entries(json, origin)?;
    require_entries(&questions, origin)?;
    require_unique_ids(questions.iter().map(|q| q.id), origin)?;

    if let Some(question) = questions.iter().find(|q| q.correct_option >= NUM_OPTIONS) {
        return Err(invalid(
            origin,
            format!(
                "question {} has correct_option {} but only {} options",
                question.id, question.correct_option, NUM_OPTIONS
            ),
        ));
    }

    tracing::debug!(origin, count = questions.len(), "loaded questions");
    Ok(questions)
}

pub fn parse_challenges(json: &str, origin: &str) -> Result<Vec<Challenge>, LoadError> {
    let challenges: Vec<Challenge> = parse_entries(json, origin)?;
    require_entries(&challenges, origin)?;
    require_unique_ids(challenges.iter().map(|c| c.id), origin)?;

    if let Some(challenge) = challenges.iter().find(|c| c.points == 0) {
        return Err(invalid(
            origin,
            format!("challenge {} must award at least one point", challenge.id),
        ));
    }

    tracing::debug!(origin, count = challenges.len(), "loaded challenges");
    Ok(challenges)
}

/// An empty feed is allowed; the community page starts blank.
pub fn parse_posts(json: &str, origin: &str) -> Result<Vec<Post>, LoadError> {
    let posts: Vec<Post> = parse_entries(json, origin)?;
    require_unique_ids(posts.iter().map(|p| p.id), origin)?;

    tracing::debug!(origin, count = posts.len(), "loaded posts");
    Ok(posts)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_entries<T: DeserializeOwned>(json: &str, origin: &str) -> Result<Vec<T>, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn require_entries<T>(entries: &[T], origin: &str) -> Result<(), LoadError> {
    if entries.is_empty() {
        return Err(LoadError::Empty {
            origin: origin.to_string(),
        });
    }
    Ok(())
}

fn require_unique_ids(ids: impl Iterator<Item = u32>, origin: &str) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(origin, format!("duplicate id {}", id)));
        }
    }
    Ok(())
}

fn invalid(origin: &str, message: String) -> LoadError {
    LoadError::Invalid {
        origin: origin.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ONE_QUESTION: &str = r#"[{
        "id": 7,
        "prompt": "Which uses less water?",
        "options": ["Bath", "Short shower", "Long shower", "Hosepipe"],
        "correct_option": 1,
        "explanation": "A short shower uses a fraction of a full bath.",
        "tip": "Time your showers."
    }]"#;

    #[test]
    fn test_load_questions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ONE_QUESTION.as_bytes()).unwrap();

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 7);
        assert!(questions[0].is_correct(1));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions_from_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_questions("[{", "broken").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_empty_question_list() {
        let err = parse_questions("[]", "empty").unwrap_err();
        assert_eq!(err.to_string(), "empty must contain at least one entry");
    }

    #[test]
    fn test_wrong_option_count_is_rejected() {
        let json = r#"[{"id": 1, "prompt": "?", "options": ["a", "b", "c"],
            "correct_option": 0, "explanation": "", "tip": ""}]"#;
        assert!(matches!(
            parse_questions(json, "three").unwrap_err(),
            LoadError::Parse { .. }
        ));
    }

    #[test]
    fn test_correct_option_out_of_range() {
        let json = ONE_QUESTION.replace("\"correct_option\": 1", "\"correct_option\": 4");
        let err = parse_questions(&json, "range").unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
    }

    #[test]
    fn test_duplicate_challenge_ids() {
        let json = r#"[
            {"id": 1, "title": "a", "description": "", "points": 10, "difficulty": "easy"},
            {"id": 1, "title": "b", "description": "", "points": 20, "difficulty": "hard"}
        ]"#;
        let err = parse_challenges(json, "dupes").unwrap_err();
        assert_eq!(err.to_string(), "dupes: duplicate id 1");
    }

    #[test]
    fn test_zero_point_challenge() {
        let json = r#"[{"id": 3, "title": "a", "description": "", "points": 0, "difficulty": "medium"}]"#;
        assert!(matches!(
            parse_challenges(json, "zero").unwrap_err(),
            LoadError::Invalid { .. }
        ));
    }

    #[test]
    fn test_challenge_completed_defaults_to_false() {
        let json = r#"[{"id": 3, "title": "a", "description": "", "points": 5, "difficulty": "medium"}]"#;
        let challenges = parse_challenges(json, "defaults").unwrap();
        assert!(!challenges[0].completed);
    }

    #[test]
    fn test_empty_feed_is_allowed() {
        assert!(parse_posts("[]", "feed").unwrap().is_empty());
    }
}
