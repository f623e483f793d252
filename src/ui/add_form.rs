//! Add-destination form rendering
//!
//! Renders the three input fields for a new stop. The focused field
//! carries a cursor marker; validation failures appear on the notice
//! line and leave the typed values in place.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, DestField};
use crate::itinerary::max_planning_date;

/// Renders the add-destination form
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the form buffers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Form fields
            Constraint::Length(1), // Notice line
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let form = &app.dest_form;
    let today = Local::now().date_naive();

    let lines = vec![
        Line::from(""),
        field_line("Name", &form.name, form.focus == DestField::Name),
        field_line("Date", &form.date, form.focus == DestField::Date),
        field_line("Time", &form.time, form.focus == DestField::Time),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Dates accepted: {} to {} (YYYY-MM-DD)",
                today,
                max_planning_date(today)
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Time is optional (HH:MM); blank stores 12:00",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Add Destination ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);
    frame.render_widget(
        Paragraph::new(super::notice_line(app.notice.as_ref())),
        chunks[1],
    );
    render_help(frame, chunks[2]);
}

/// Builds one labeled input line, marking the focused field
fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "\u{25B8} " } else { "  " }; // ▸ or space
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<6}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("\u{2581}", Style::default().fg(Color::Cyan))); // ▁
    }
    Line::from(spans)
}

/// Renders the help text at the bottom of the screen
fn render_help(frame: &mut Frame, area: Rect) {
    let help_text = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Add  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
