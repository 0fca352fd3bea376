use crate::config::Config;
use crate::data::{
    builtin_challenges, builtin_posts, builtin_questions, load_challenges_from_json,
    load_posts_from_json, load_questions_from_json, LoadError,
};
use crate::engine::{Feed, ProgressionEngine, QuizEngine, QuizPhase, UsageStats};
use crate::models::{Challenge, Post, Question};
use crate::notice::Notice;
use crate::route::Route;

const MAX_POST_LENGTH: usize = 500;

/// Everything the pages show, owned by the single UI thread.
pub struct App {
    route: Route,
    quiz: QuizEngine,
    progression: ProgressionEngine,
    feed: Feed,
    stats: UsageStats,
    notice: Option<Notice>,
    challenge_cursor: usize,
    post_cursor: usize,
    draft: Option<String>,
}

impl App {
    pub fn new(
        questions: Vec<Question>,
        challenges: Vec<Challenge>,
        posts: Vec<Post>,
        seed_points: u32,
    ) -> Self {
        Self {
            route: Route::Home,
            quiz: QuizEngine::new(questions),
            progression: ProgressionEngine::new(challenges, seed_points),
            feed: Feed::new(posts),
            stats: UsageStats::sample(),
            notice: None,
            challenge_cursor: 0,
            post_cursor: 0,
            draft: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        let questions = match &config.questions {
            Some(path) => load_questions_from_json(path)?,
            None => builtin_questions()?,
        };
        let challenges = match &config.challenges {
            Some(path) => load_challenges_from_json(path)?,
            None => builtin_challenges()?,
        };
        let posts = match &config.posts {
            Some(path) => load_posts_from_json(path)?,
            None => builtin_posts()?,
        };

        let mut app = Self::new(questions, challenges, posts, config.seed_points);
        app.route = config.start_route;
        Ok(app)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn progression(&self) -> &ProgressionEngine {
        &self.progression
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn stats(&self) -> &UsageStats {
        &self.stats
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn challenge_cursor(&self) -> usize {
        self.challenge_cursor
    }

    pub fn post_cursor(&self) -> usize {
        self.post_cursor
    }

    /// The post being written, if the composer is open.
    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    pub fn is_composing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn navigate(&mut self, route: Route) {
        if route != self.route {
            tracing::debug!(from = %self.route, to = %route, "navigate");
        }
        self.route = route;
        self.notice = None;
        self.draft = None;
    }

    pub fn next_page(&mut self) {
        self.navigate(self.route.next());
    }

    pub fn previous_page(&mut self) {
        self.navigate(self.route.previous());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn raise(&mut self, notice: Option<Notice>) {
        if notice.is_some() {
            self.notice = notice;
        }
    }

    pub fn select_option(&mut self, index: usize) {
        self.quiz.select_option(index);
    }

    pub fn select_next_option(&mut self) {
        self.quiz.select_next_option();
    }

    pub fn select_previous_option(&mut self) {
        self.quiz.select_previous_option();
    }

    /// Submits while answering, moves on once the answer is revealed.
    pub fn confirm_quiz_step(&mut self) {
        match self.quiz.phase() {
            QuizPhase::Answering => {
                let notice = self.quiz.submit_answer();
                self.raise(notice);
            }
            QuizPhase::Revealed => {
                self.quiz.advance();
                self.notice = None;
            }
            QuizPhase::Completed => {}
        }
    }

    pub fn retake_quiz(&mut self) {
        self.quiz.reset();
        self.notice = None;
    }

    pub fn select_next_challenge(&mut self) {
        let count = self.progression.challenge_count();
        if count > 0 {
            self.challenge_cursor = (self.challenge_cursor + 1).min(count - 1);
        }
    }

    pub fn select_previous_challenge(&mut self) {
        self.challenge_cursor = self.challenge_cursor.saturating_sub(1);
    }

    pub fn complete_selected_challenge(&mut self) {
        let Some(id) = self
            .progression
            .challenges()
            .nth(self.challenge_cursor)
            .map(|c| c.id)
        else {
            return;
        };
        let notice = self.progression.complete_challenge(id);
        self.raise(notice);
    }

    pub fn select_next_post(&mut self) {
        let count = self.feed.len();
        if count > 0 {
            self.post_cursor = (self.post_cursor + 1).min(count - 1);
        }
    }

    pub fn select_previous_post(&mut self) {
        self.post_cursor = self.post_cursor.saturating_sub(1);
    }

    fn selected_post_id(&self) -> Option<u32> {
        self.feed.posts().get(self.post_cursor).map(|p| p.id)
    }

    pub fn like_selected_post(&mut self) {
        if let Some(id) = self.selected_post_id() {
            self.feed.toggle_like(id);
        }
    }

    pub fn share_selected_post(&mut self) {
        if let Some(id) = self.selected_post_id() {
            let notice = self.feed.share(id);
            self.raise(notice);
        }
    }

    pub fn start_compose(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(String::new());
        }
    }

    pub fn cancel_compose(&mut self) {
        self.draft = None;
    }

    pub fn draft_push(&mut self, c: char) {
        if let Some(draft) = &mut self.draft {
            if draft.chars().count() < MAX_POST_LENGTH {
                draft.push(c);
            }
        }
    }

    pub fn draft_pop(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.pop();
        }
    }

    /// Posts the draft. A blank draft stays open.
    pub fn submit_draft(&mut self) {
        let Some(draft) = &self.draft else {
            return;
        };
        let notice = self.feed.create_post(draft);
        if notice.is_some() {
            self.draft = None;
            self.post_cursor = 0;
        }
        self.raise(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_from_config_uses_builtin_fixtures() {
        let app = app();
        assert_eq!(app.route(), Route::Home);
        assert_eq!(app.quiz().total_questions(), 5);
        assert_eq!(app.progression().challenge_count(), 6);
        assert_eq!(app.progression().total_points(), 120);
        assert_eq!(app.feed().len(), 4);
    }

    #[test]
    fn test_start_route_from_config() {
        let config = Config {
            start_route: Route::Games,
            ..Config::default()
        };
        assert_eq!(App::from_config(&config).unwrap().route(), Route::Games);
    }

    #[test]
    fn test_missing_fixture_file() {
        let config = Config {
            questions: Some("/nonexistent/questions.json".into()),
            ..Config::default()
        };
        assert!(matches!(
            App::from_config(&config),
            Err(LoadError::Read { .. })
        ));
    }

    #[test]
    fn test_confirm_walks_the_quiz() {
        let mut app = app();
        app.navigate(Route::Quiz);

        app.confirm_quiz_step();
        assert!(app.notice().is_none());

        app.select_option(1);
        app.confirm_quiz_step();
        assert_eq!(app.notice(), Some(&Notice::AnswerCorrect));
        assert_eq!(app.quiz().phase(), QuizPhase::Revealed);

        app.confirm_quiz_step();
        assert_eq!(app.quiz().question_number(), 2);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_retake_after_completion() {
        let mut app = app();
        for option in [1, 0, 3, 1, 2] {
            app.select_option(option);
            app.confirm_quiz_step();
            app.confirm_quiz_step();
        }
        assert_eq!(app.quiz().phase(), QuizPhase::Completed);
        assert_eq!(app.quiz().score(), 5);

        app.retake_quiz();
        assert_eq!(app.quiz().phase(), QuizPhase::Answering);
        assert_eq!(app.quiz().score(), 0);
    }

    #[test]
    fn test_complete_selected_challenge() {
        let mut app = app();
        app.navigate(Route::Games);

        app.complete_selected_challenge();
        assert_eq!(app.progression().total_points(), 170);
        assert!(matches!(
            app.notice(),
            Some(Notice::ChallengeCompleted { points: 50, .. })
        ));

        app.select_next_challenge();
        app.dismiss_notice();
        app.complete_selected_challenge();
        assert_eq!(app.progression().total_points(), 170);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_dashboard_goal_follows_completed_challenges() {
        let mut app = app();
        let challenge_goal = |app: &App| app.stats().goals(app.progression().completed_count())[1];
        let before = challenge_goal(&app).current;

        app.navigate(Route::Games);
        app.complete_selected_challenge();
        assert_eq!(challenge_goal(&app).current, before + 1);
    }

    #[test]
    fn test_challenge_cursor_is_clamped() {
        let mut app = app();
        for _ in 0..10 {
            app.select_next_challenge();
        }
        assert_eq!(app.challenge_cursor(), 5);
        for _ in 0..10 {
            app.select_previous_challenge();
        }
        assert_eq!(app.challenge_cursor(), 0);
    }

    #[test]
    fn test_compose_and_post() {
        let mut app = app();
        app.navigate(Route::Community);
        app.select_next_post();

        app.start_compose();
        app.submit_draft();
        assert!(app.is_composing());

        for c in "Rain barrel!".chars() {
            app.draft_push(c);
        }
        app.draft_pop();
        app.submit_draft();

        assert!(!app.is_composing());
        assert_eq!(app.post_cursor(), 0);
        assert_eq!(app.feed().posts()[0].content, "Rain barrel");
        assert_eq!(app.notice(), Some(&Notice::PostShared));
    }

    #[test]
    fn test_like_and_share_selected_post() {
        let mut app = app();
        app.like_selected_post();
        assert_eq!(app.feed().posts()[0].likes, 48);
        app.like_selected_post();
        assert_eq!(app.feed().posts()[0].likes, 47);

        app.share_selected_post();
        assert_eq!(app.notice(), Some(&Notice::LinkCopied));
    }

    #[test]
    fn test_navigation_clears_notice_and_draft() {
        let mut app = app();
        app.share_selected_post();
        app.start_compose();
        app.next_page();

        assert_eq!(app.route(), Route::Quiz);
        assert!(app.notice().is_none());
        assert!(!app.is_composing());

        app.previous_page();
        app.previous_page();
        assert_eq!(app.route(), Route::Dashboard);
    }
}
