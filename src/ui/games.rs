use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::{BadgeTier, ProgressionEngine};
use crate::models::{Challenge, Difficulty};

pub fn badge_color(tier: BadgeTier) -> Color {
    match tier {
        BadgeTier::Starter => Color::Gray,
        BadgeTier::Bronze => Color::LightRed,
        BadgeTier::Silver => Color::White,
        BadgeTier::Gold => Color::Yellow,
    }
}

fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Magenta,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let progression = app.progression();
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    render_stats(frame, chunks[0], progression);
    render_badge(frame, chunks[1], progression);
    render_tier_legend(frame, chunks[2], progression.badge_tier());
    render_challenges(frame, chunks[3], progression, app.challenge_cursor());
}

fn render_stats(frame: &mut Frame, area: Rect, progression: &ProgressionEngine) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    let tier = progression.badge_tier();

    let cards = [
        ("Total Points", progression.total_points().to_string(), Color::Cyan),
        (
            "Completed",
            format!(
                "{}/{}",
                progression.completed_count(),
                progression.challenge_count()
            ),
            Color::Green,
        ),
        ("Badge Level", tier.label().to_uppercase(), badge_color(tier)),
    ];

    for ((title, value, color), column) in cards.into_iter().zip(columns.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(title.fg(Color::DarkGray)),
            Line::from(Span::styled(value, Style::default().fg(color).bold())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );
        frame.render_widget(widget, *column);
    }
}

fn render_badge(frame: &mut Frame, area: Rect, progression: &ProgressionEngine) {
    let label = match progression.next_tier() {
        Some(next) => format!(
            "{} points to {}",
            progression.points_to_next_tier(),
            next.label()
        ),
        None => "Top tier reached".to_string(),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Unlock higher badges by completing more challenges ")
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        )
        .ratio(progression.tier_progress().clamp(0.0, 1.0))
        .label(label)
        .gauge_style(Style::default().fg(badge_color(progression.badge_tier())));
    frame.render_widget(gauge, area);
}

fn render_tier_legend(frame: &mut Frame, area: Rect, current: BadgeTier) {
    let mut spans = Vec::with_capacity(BadgeTier::ALL.len() * 2);
    for (i, tier) in BadgeTier::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        }
        let style = if tier == current {
            Style::default().fg(badge_color(tier)).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tier.band_label(), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_challenges(
    frame: &mut Frame,
    area: Rect,
    progression: &ProgressionEngine,
    cursor: usize,
) {
    let lines: Vec<Line> = progression
        .challenges()
        .enumerate()
        .flat_map(|(index, challenge)| challenge_lines(challenge, index == cursor))
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Active Challenges ")
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn challenge_lines(challenge: &Challenge, is_selected: bool) -> [Line<'_>; 3] {
    let title_style = if challenge.completed {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if is_selected { ">" } else { " " };
    let status = if challenge.completed {
        Span::styled("  completed", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("  +{} pts", challenge.points),
            Style::default().fg(Color::Cyan),
        )
    };

    [
        Line::from(vec![
            Span::styled(format!("{} ", marker), title_style),
            Span::styled(challenge.title.as_str(), title_style),
            Span::styled(
                format!("  [{}]", challenge.difficulty.label()),
                Style::default().fg(difficulty_color(challenge.difficulty)),
            ),
            status,
        ]),
        Line::from(Span::styled(
            format!("  {}", challenge.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}
