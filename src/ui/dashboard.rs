use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::{ProgressionEngine, UsageStats};

use super::games::badge_color;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(4),
    ])
    .split(area);

    render_quick_stats(frame, rows[0], stats, app.progression());

    let middle = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .spacing(1)
        .split(rows[1]);
    render_footprint(frame, middle[0], stats);
    render_achievements(frame, middle[1], stats, app.progression());

    render_impact(frame, rows[2], stats);
}

fn render_quick_stats(
    frame: &mut Frame,
    area: Rect,
    stats: &UsageStats,
    progression: &ProgressionEngine,
) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    let cards = [
        ("Today's Usage", stats.daily_usage, "gallons"),
        ("Water Saved", stats.saved_this_month, "gallons this month"),
        ("Current Streak", stats.current_streak, "days active"),
        ("Total Points", progression.total_points(), "points earned"),
    ];

    for ((title, value, unit), column) in cards.into_iter().zip(columns.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(title.fg(Color::DarkGray)),
            Line::from(vec![
                Span::styled(value.to_string(), Style::default().fg(Color::Cyan).bold()),
                Span::styled(format!(" {}", unit), Style::default().fg(Color::DarkGray)),
            ]),
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

fn render_footprint(frame: &mut Frame, area: Rect, stats: &UsageStats) {
    let block = Block::default()
        .title(" Your Water Footprint ")
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); stats.week.len()];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (day, row) in stats.week.iter().zip(rows.iter()) {
        let color = if day.is_over_target() {
            Color::Yellow
        } else {
            Color::Cyan
        };
        let gauge = Gauge::default()
            .ratio(day.target_ratio().clamp(0.0, 1.0))
            .label(format!("{} {} gal", day.day, day.usage))
            .gauge_style(Style::default().fg(color).bg(Color::Black));
        frame.render_widget(gauge, *row);
    }

    let below = stats.below_target_percent();
    let summary = if below >= 0.0 {
        Span::styled(
            format!("Weekly average {} gal/day, {:.0}% under target", stats.weekly_average, below),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(
            format!("Weekly average {} gal/day, {:.0}% over target", stats.weekly_average, -below),
            Style::default().fg(Color::Yellow),
        )
    };
    if let Some(row) = rows.last() {
        frame.render_widget(Paragraph::new(summary), *row);
    }
}

fn render_achievements(
    frame: &mut Frame,
    area: Rect,
    stats: &UsageStats,
    progression: &ProgressionEngine,
) {
    let tier = progression.badge_tier();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Leader", capitalize(tier.label())),
            Style::default().fg(badge_color(tier)).bold(),
        )),
        Line::from(
            format!("{} points", progression.total_points()).fg(Color::Gray),
        ),
    ];
    if let Some(next) = progression.next_tier() {
        lines.push(Line::from(
            format!(
                "{} points to {}",
                progression.points_to_next_tier(),
                capitalize(next.label())
            )
            .fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(""));

    for goal in stats.goals(progression.completed_count()) {
        let filled = (goal.fraction() * 10.0).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("{:<22}", goal.label), Style::default().fg(Color::Gray)),
            Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
            Span::styled("░".repeat(10 - filled), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(" {}/{}", goal.current, goal.goal),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Your Achievements ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_impact(frame: &mut Frame, area: Rect, stats: &UsageStats) {
    let impact = stats.impact();
    let line = Line::from(vec![
        Span::styled(impact.gallons_saved.to_string(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" gallons saved  ·  ", Style::default().fg(Color::Gray)),
        Span::styled(impact.bottles.to_string(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" bottles  ·  ", Style::default().fg(Color::Gray)),
        Span::styled(impact.trees.to_string(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" trees worth  ·  ", Style::default().fg(Color::Gray)),
        Span::styled(impact.bathtubs.to_string(), Style::default().fg(Color::Cyan).bold()),
        Span::styled(" bathtubs", Style::default().fg(Color::Gray)),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .title(" Your Environmental Impact ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
