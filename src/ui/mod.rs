mod community;
mod dashboard;
mod games;
mod home;
mod navbar;
mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::notice::Notice;
use crate::route::Route;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    navbar::render(frame, chunks[0], app.route());

    let page = chunks[1].inner(Margin::new(2, 1));
    match app.route() {
        Route::Home => home::render(frame, page),
        Route::Quiz if app.quiz().is_completed() => result::render(frame, page, app.quiz()),
        Route::Quiz => quiz::render(frame, page, app.quiz()),
        Route::Games => games::render(frame, page, app),
        Route::Community => community::render(frame, page, app),
        Route::Dashboard => dashboard::render(frame, page, app),
    }

    if let Some(notice) = app.notice() {
        render_notice(frame, chunks[2], notice);
    }
    render_controls(frame, chunks[3], controls_for(app));
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let color = if notice.is_positive() {
        Color::Green
    } else {
        Color::Yellow
    };

    let mut spans = vec![Span::styled(
        notice.title(),
        Style::default().fg(color).bold(),
    )];
    if let Some(description) = notice.description() {
        spans.push(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::Gray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn controls_for(app: &App) -> &'static str {
    match app.route() {
        Route::Home => "enter take the quiz  ·  tab next page  ·  1-5 jump  ·  q quit",
        Route::Quiz if app.quiz().is_completed() => {
            "r retake quiz  ·  v view dashboard  ·  tab next page  ·  q quit"
        }
        Route::Quiz => "j/k choose  ·  a-d pick  ·  enter submit/next  ·  tab next page  ·  q quit",
        Route::Games => "j/k choose  ·  enter complete  ·  tab next page  ·  q quit",
        Route::Community if app.is_composing() => "type your post  ·  enter post  ·  esc cancel",
        Route::Community => "j/k choose  ·  l like  ·  s share  ·  n new post  ·  q quit",
        Route::Dashboard => "tab next page  ·  1-5 jump  ·  q quit",
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
