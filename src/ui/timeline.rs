//! Timeline screen rendering
//!
//! Renders the itinerary as a chronological sequence of stop blocks.
//! An empty itinerary renders an empty panel; unlike the list view
//! there is no empty-state message here.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Renders the timeline screen
///
/// One block per destination: the 1-based stop number and name, then
/// its date and time on the following line.
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the itinerary
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Timeline blocks
            Constraint::Length(1), // Notice line
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let timeline = app.views().timeline;

    let mut lines: Vec<Line> = Vec::with_capacity(timeline.stops.len() * 3);
    for stop in &timeline.stops {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Stop {}: ", stop.index + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                stop.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  Date: {} | Time: {}", stop.date, stop.time.format("%H:%M")),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(" Timeline ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
    frame.render_widget(
        Paragraph::new(super::notice_line(app.notice.as_ref())),
        chunks[1],
    );
    render_help(frame, chunks[2]);
}

/// Renders the help text at the bottom of the screen
fn render_help(frame: &mut Frame, area: ratatui::layout::Rect) {
    let help_text = Line::from(vec![
        Span::styled("1-3", Style::default().fg(Color::Yellow)),
        Span::raw(" Views  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(" Add  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Back  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
