//! Page routes, addressed by path the same way the navbar links them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Quiz,
    Games,
    Community,
    Dashboard,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown route '{0}', expected one of /, /quiz, /games, /community, /dashboard")]
pub struct ParseRouteError(String);

impl Route {
    /// Navbar order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Quiz,
        Route::Games,
        Route::Community,
        Route::Dashboard,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Quiz => "/quiz",
            Route::Games => "/games",
            Route::Community => "/community",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Quiz => "Daily Quiz",
            Route::Games => "Challenges",
            Route::Community => "Community",
            Route::Dashboard => "Dashboard",
        }
    }

    fn position(self) -> usize {
        Route::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.position() + 1) % Route::ALL.len()]
    }

    pub fn previous(self) -> Route {
        Route::ALL[(self.position() + Route::ALL.len() - 1) % Route::ALL.len()]
    }

    /// Route for a 1-based navbar slot.
    pub fn from_slot(slot: usize) -> Option<Route> {
        slot.checked_sub(1).and_then(|i| Route::ALL.get(i).copied())
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| ParseRouteError(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
        assert_eq!("/quiz/".parse::<Route>(), Ok(Route::Quiz));
    }

    #[test]
    fn test_unknown_path() {
        let err = "/leaderboard".parse::<Route>().unwrap_err();
        assert!(err.to_string().contains("/leaderboard"));
        assert!("".parse::<Route>().is_err());
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Route::Home.next(), Route::Quiz);
        assert_eq!(Route::Dashboard.next(), Route::Home);
        assert_eq!(Route::Home.previous(), Route::Dashboard);
    }

    #[test]
    fn test_slots() {
        assert_eq!(Route::from_slot(1), Some(Route::Home));
        assert_eq!(Route::from_slot(5), Some(Route::Dashboard));
        assert_eq!(Route::from_slot(0), None);
        assert_eq!(Route::from_slot(6), None);
    }
}
