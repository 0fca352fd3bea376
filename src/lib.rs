//! # dropwise
//!
//! A terminal water-conservation companion: a daily quiz, point-earning
//! challenges with badge tiers, a community feed and a usage dashboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dropwise::{Config, Site, SiteError};
//!
//! fn main() -> Result<(), SiteError> {
//!     // Built-in fixtures, starting on the home page
//!     let site = Site::new(&Config::default())?;
//!
//!     // Run in the terminal until the user quits
//!     site.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
pub mod engine;
mod error;
pub mod logging;
mod models;
mod notice;
mod route;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

pub use app::App;
pub use config::Config;
pub use data::{
    builtin_challenges, builtin_posts, builtin_questions, load_challenges_from_json,
    load_posts_from_json, load_questions_from_json, LoadError,
};
pub use error::SiteError;
pub use models::{Challenge, Difficulty, Post, PostCategory, Question, NUM_OPTIONS};
pub use notice::Notice;
pub use route::{ParseRouteError, Route};

/// The whole application, ready to run in the terminal.
pub struct Site {
    app: App,
}

impl Site {
    /// Build the site from configuration, loading fixtures.
    pub fn new(config: &Config) -> Result<Self, SiteError> {
        Ok(Self {
            app: App::from_config(config)?,
        })
    }

    /// Wrap an already built app.
    pub fn with_app(app: App) -> Self {
        Self { app }
    }

    /// Run the site in the terminal.
    ///
    /// This will take over the terminal, display the UI, and return when
    /// the user quits.
    pub fn run(mut self) -> Result<(), SiteError> {
        let mut term = terminal::init()?;
        tracing::info!(route = %self.app.route(), "site started");
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        tracing::info!("site stopped");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::SiteTerminal, app: &mut App) -> Result<(), SiteError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.is_composing() {
        handle_compose_input(app, key);
        return false;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Tab => {
            app.next_page();
            return false;
        }
        KeyCode::BackTab => {
            app.previous_page();
            return false;
        }
        KeyCode::Esc => {
            app.dismiss_notice();
            return false;
        }
        KeyCode::Char(c) => {
            if let Some(route) = c.to_digit(10).and_then(|d| Route::from_slot(d as usize)) {
                app.navigate(route);
                return false;
            }
        }
        _ => {}
    }

    match app.route() {
        Route::Home => handle_home_input(app, key),
        Route::Quiz => handle_quiz_input(app, key),
        Route::Games => handle_games_input(app, key),
        Route::Community => handle_community_input(app, key),
        Route::Dashboard => {}
    }
    false
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.navigate(Route::Quiz);
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    if app.quiz().is_completed() {
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') => app.retake_quiz(),
            KeyCode::Char('v') | KeyCode::Char('V') => app.navigate(Route::Dashboard),
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ 'a'..='d') => app.select_option(c as usize - 'a' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm_quiz_step(),
        _ => {}
    }
}

fn handle_games_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_challenge(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_challenge(),
        KeyCode::Enter | KeyCode::Char(' ') => app.complete_selected_challenge(),
        _ => {}
    }
}

fn handle_community_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_post(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_post(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.like_selected_post(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.share_selected_post(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.start_compose(),
        _ => {}
    }
}

fn handle_compose_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.cancel_compose(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.draft_pop(),
        KeyCode::Char(c) => app.draft_push(c),
        _ => {}
    }
}
