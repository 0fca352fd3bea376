use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::engine::{OptionMark, QuizEngine, QuizPhase};
use crate::models::Question;
use crate::notice::option_label;

pub fn render(frame: &mut Frame, area: Rect, quiz: &QuizEngine) {
    let Some(question) = quiz.current_question() else {
        frame.render_widget(
            Paragraph::new("No questions loaded.").fg(Color::DarkGray),
            area,
        );
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_progress(frame, chunks[0], chunks[1], quiz);
    render_prompt(frame, chunks[2], &question.prompt);
    render_options(frame, chunks[3], question, quiz);
    if quiz.is_revealed() {
        render_explanation(frame, chunks[4], question);
    }
    render_action(frame, chunks[5], quiz);
}

fn render_progress(frame: &mut Frame, label_area: Rect, gauge_area: Rect, quiz: &QuizEngine) {
    let label = format!(
        "Question {} of {}",
        quiz.question_number(),
        quiz.total_questions()
    );
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Right)
            .fg(Color::DarkGray),
        label_area,
    );

    let gauge = Gauge::default()
        .ratio(quiz.progress_fraction().clamp(0.0, 1.0))
        .label("")
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black));
    frame.render_widget(gauge, gauge_area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area.inner(Margin::new(0, 1)));
}

fn render_options(frame: &mut Frame, area: Rect, question: &Question, quiz: &QuizEngine) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = match quiz.option_mark(index) {
            OptionMark::Idle => (" ", Style::default().fg(Color::Gray)),
            OptionMark::Selected => (">", Style::default().fg(Color::Cyan).bold()),
            OptionMark::Correct => ("+", Style::default().fg(Color::Green).bold()),
            OptionMark::Wrong => ("-", Style::default().fg(Color::Red).bold()),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_explanation(frame: &mut Frame, area: Rect, question: &Question) {
    let content = vec![
        Line::from(Span::styled(
            "Explanation",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(question.explanation.as_str().fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            "Water saving tip",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from(question.tip.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_action(frame: &mut Frame, area: Rect, quiz: &QuizEngine) {
    let (text, color) = match quiz.phase() {
        QuizPhase::Answering if quiz.selected_option().is_none() => {
            ("Pick an answer", Color::DarkGray)
        }
        QuizPhase::Answering => ("ENTER  Submit Answer", Color::Green),
        QuizPhase::Revealed if quiz.is_last_question() => ("ENTER  Complete Quiz", Color::Cyan),
        QuizPhase::Revealed => ("ENTER  Next Question", Color::Cyan),
        QuizPhase::Completed => ("", Color::Reset),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color).bold()))
            .alignment(Alignment::Center),
        area,
    );
}
