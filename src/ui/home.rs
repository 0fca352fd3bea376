use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::route::Route;

const FEATURES: [(Route, &str); 4] = [
    (
        Route::Quiz,
        "Test what you know about everyday water use and pick up a saving tip per question.",
    ),
    (
        Route::Games,
        "Complete conservation challenges, earn points and climb from starter to gold.",
    ),
    (
        Route::Community,
        "Share ideas, tips and achievements with other water savers.",
    ),
    (
        Route::Dashboard,
        "Track your daily usage against your target and see the impact of your savings.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(8), Constraint::Fill(1)]).split(area);

    let hero = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("EVERY DROP ", Style::default().fg(Color::White).bold()),
            Span::styled("COUNTS", Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(""),
        Line::from("Learn, play and connect to save water at home.".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER to start the daily quiz",
            Style::default().fg(Color::Green).bold(),
        )),
    ];
    let widget = Paragraph::new(hero).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[0]);

    let mut lines = Vec::with_capacity(FEATURES.len() * 3);
    for (route, blurb) in FEATURES {
        let slot = Route::ALL.iter().position(|r| *r == route).unwrap_or(0) + 1;
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", slot), Style::default().fg(Color::DarkGray)),
            Span::styled(route.label(), Style::default().fg(Color::Cyan).bold()),
            Span::styled(format!("  {}", route.path()), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", blurb),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[1],
    );
}
