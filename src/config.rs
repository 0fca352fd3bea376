use std::path::PathBuf;

use crate::engine::DEFAULT_SEED_POINTS;
use crate::route::Route;

/// Startup configuration. Any fixture path left as `None` falls back to
/// the built-in fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub start_route: Route,
    pub seed_points: u32,
    pub questions: Option<PathBuf>,
    pub challenges: Option<PathBuf>,
    pub posts: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_route: Route::Home,
            seed_points: DEFAULT_SEED_POINTS,
            questions: None,
            challenges: None,
            posts: None,
        }
    }
}
