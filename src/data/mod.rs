mod fixtures;
mod loader;

pub use fixtures::{builtin_challenges, builtin_posts, builtin_questions};
pub use loader::{
    load_challenges_from_json, load_posts_from_json, load_questions_from_json, LoadError,
};
