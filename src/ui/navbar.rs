use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::route::Route;

pub fn render(frame: &mut Frame, area: Rect, current: Route) {
    let titles = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, route)| Line::from(format!("{} {}", i + 1, route.label())));
    let selected = Route::ALL.iter().position(|r| *r == current).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .divider("·")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray)
                .title(Span::styled(
                    " DROPWISE ",
                    Style::default().fg(Color::Cyan).bold(),
                )),
        );
    frame.render_widget(tabs, area);
}
