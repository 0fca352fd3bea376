use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Post, PostCategory};

fn category_color(category: PostCategory) -> Color {
    match category {
        PostCategory::Idea => Color::Cyan,
        PostCategory::Tip => Color::Yellow,
        PostCategory::Achievement => Color::Green,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).split(area);

    render_composer(frame, chunks[0], app.draft());
    render_feed(frame, chunks[1], app.feed().posts(), app.post_cursor());
}

fn render_composer(frame: &mut Frame, area: Rect, draft: Option<&str>) {
    let (content, border) = match draft {
        Some(text) => (
            Line::from(vec![
                Span::styled(text, Style::default().fg(Color::White)),
                Span::styled("_", Style::default().fg(Color::Cyan)),
            ]),
            Color::Cyan,
        ),
        None => (
            Line::from(
                "Share an innovative idea, conservation tip, or your achievements... (n)"
                    .fg(Color::DarkGray),
            ),
            Color::DarkGray,
        ),
    };

    let widget = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Share with the community ")
            .borders(Borders::ALL)
            .border_style(border)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feed(frame: &mut Frame, area: Rect, posts: &[Post], cursor: usize) {
    if posts.is_empty() {
        frame.render_widget(
            Paragraph::new("No posts yet. Be the first to share!").fg(Color::DarkGray),
            area,
        );
        return;
    }

    // The post above the selection stays visible for context.
    let first = cursor.saturating_sub(1);
    let lines: Vec<Line> = posts
        .iter()
        .enumerate()
        .skip(first)
        .flat_map(|(index, post)| post_lines(post, index == cursor))
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn post_lines(post: &Post, is_selected: bool) -> [Line<'_>; 4] {
    let marker = if is_selected { ">" } else { " " };
    let author_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let heart = if post.liked {
        Span::styled("♥", Style::default().fg(Color::Red))
    } else {
        Span::styled("♡", Style::default().fg(Color::Gray))
    };

    [
        Line::from(vec![
            Span::styled(format!("{} [{}] ", marker, post.avatar), author_style),
            Span::styled(post.author.as_str(), author_style),
            Span::styled(
                format!("  {}", post.badge),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  {}", post.time_ago),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  {}", post.category.label()),
                Style::default().fg(category_color(post.category)),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", post.content),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::raw("  "),
            heart,
            Span::styled(
                format!(" {}   {} comments", post.likes, post.comments),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ]
}
