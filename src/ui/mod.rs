pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    for (idx, panel) in app.panels().iter().enumerate() {
        let focused = idx == app.focus();
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(7)])
            .split(columns[idx]);

        let header_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", panel.title()), header_style)),
            sections[0],
        );
        panel.render(frame, sections[1], focused);
    }

    render_help_bar(frame, chunks[1]);

    if let Some(message) = app.alert() {
        render_alert(frame, message, frame.area());
    }
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " Tab: switch panel | Enter: submit | Up/Down: scroll | Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

/// Blocking notification box. Input goes nowhere else until it is
/// dismissed.
fn render_alert(frame: &mut Frame, message: &str, area: Rect) {
    let modal_area = centered_rect(50, 25, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Notice ");

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let text = vec![
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Enter or Esc to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        inner,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
