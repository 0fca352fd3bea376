use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::engine::{FeedbackTier, QuizEngine};

fn tier_color(tier: FeedbackTier) -> Color {
    match tier {
        FeedbackTier::Excellent => Color::Green,
        FeedbackTier::Great => Color::Cyan,
        FeedbackTier::GoodEffort => Color::Yellow,
    }
}

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizEngine) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let tier = quiz.feedback_tier();
    let color = tier_color(tier);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "You scored {} out of {}  ({:.0}%)",
                quiz.score(),
                quiz.total_questions(),
                quiz.percentage()
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from("Your Water Conservation Score".fg(Color::DarkGray)),
        Line::from(Span::styled(
            format!("{} points", quiz.points()),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(tier.message().fg(Color::Gray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, chunks[1]);
}
