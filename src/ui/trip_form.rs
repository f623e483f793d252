//! Trip settings form rendering
//!
//! Renders the trip name and start/end date fields. The start date is
//! guarded against the past on submission; a rejected start date comes
//! back as a cleared field plus a notice.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, TripField};

/// Renders the trip settings form
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

    let form = &app.trip_form;
    let today = Local::now().date_naive();

    let lines = vec![
        Line::from(""),
        field_line("Trip name", &form.name, form.focus == TripField::Name),
        field_line("Start date", &form.start_date, form.focus == TripField::StartDate),
        field_line("End date", &form.end_date, form.focus == TripField::EndDate),
        Line::from(""),
        Line::from(Span::styled(
            format!("Start date cannot be before today ({})", today),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Destinations may not be scheduled after the end date",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" Trip Settings ")
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
        Span::styled(format!("{:<12}", label), label_style),
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
        Span::raw(" Apply  "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_form_fields_and_hints_render() {
        let app = App::new();
        let content = render_to_string(&app);

        assert!(content.contains("Trip Settings"));
        assert!(content.contains("Trip name"));
        assert!(content.contains("Start date"));
        assert!(content.contains("End date"));
        assert!(content.contains("cannot be before today"));
    }

    #[test]
    fn test_prefilled_values_are_shown() {
        let mut app = App::new();
        app.trip.name = "Iberia loop".to_string();
        app.trip.end_date = Some("2025-05-20".parse::<NaiveDate>().unwrap());
        app.trip_form.load(&app.trip.clone());

        let content = render_to_string(&app);

        assert!(content.contains("Iberia loop"));
        assert!(content.contains("2025-05-20"));
    }

    #[test]
    fn test_guard_notice_is_shown() {
        let today: NaiveDate = "2025-03-01".parse().unwrap();
        let mut app = App::new();
        app.trip_form.start_date = "2025-01-01".to_string();
        app.submit_trip(today);

        let content = render_to_string(&app);
        assert!(content.contains("Cannot select a start date before today"));
    }
}
