//! Itinerary list screen rendering
//!
//! Renders the main list view: a trip header, one numbered entry per
//! destination with its date and time, and the notice and key help
//! lines at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::views::{ListView, NO_DESTINATIONS_MESSAGE};

/// Renders the itinerary list screen
///
/// Displays the trip header (name, optional From/To dates, destination
/// count), the sorted destination list with the selection cursor, the
/// generation footer, and the notice/help lines.
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the itinerary and selection
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Trip header
            Constraint::Min(3),    // Destination list
            Constraint::Length(1), // Generation footer
            Constraint::Length(1), // Notice line
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let list = app.views().list;

    render_header(frame, &list, chunks[0]);
    render_stops(frame, app, &list, chunks[1]);
    render_footer(frame, &list, chunks[2]);
    frame.render_widget(
        Paragraph::new(super::notice_line(app.notice.as_ref())),
        chunks[3],
    );
    render_help(frame, chunks[4]);
}

/// Renders the trip header with name, dates, and destination count
fn render_header(frame: &mut Frame, list: &ListView, area: Rect) {
    let mut date_spans: Vec<Span> = Vec::new();
    if let Some(start) = list.start_date {
        date_spans.push(Span::styled(
            format!("From: {}  ", start),
            Style::default().fg(Color::White),
        ));
    }
    if let Some(end) = list.end_date {
        date_spans.push(Span::styled(
            format!("To: {}", end),
            Style::default().fg(Color::White),
        ));
    }
    if date_spans.is_empty() {
        date_spans.push(Span::styled(
            "No trip dates set",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let width = area.width as usize;
    let separator = "─".repeat(width.saturating_sub(2));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "TRIPDECK",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                list.trip_name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(date_spans),
        Line::from(Span::styled(
            format!("Total Destinations: {}", list.entries.len()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(separator, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the destination list content
fn render_stops(frame: &mut Frame, app: &App, list: &ListView, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(list.entries.len().max(1));

    for entry in &list.entries {
        let is_selected = entry.index == app.selected_index;

        let cursor = if is_selected { "\u{25B8} " } else { "  " }; // ▸ or space
        let cursor_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let name_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(cursor, cursor_style),
            Span::styled(
                format!("{:>2}. ", entry.index + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!("{:<20}", entry.name), name_style),
            Span::styled(
                format!(
                    "Date: {} | Time: {}",
                    entry.date,
                    entry.time.format("%H:%M")
                ),
                Style::default().fg(Color::Gray),
            ),
        ];

        if is_selected {
            spans.push(Span::styled(
                "   d removes",
                Style::default().fg(Color::DarkGray),
            ));
        }

        lines.push(Line::from(spans));
    }

    if list.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_DESTINATIONS_MESSAGE,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(" Travel Itinerary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the generation footer under the list
fn render_footer(frame: &mut Frame, list: &ListView, area: Rect) {
    let footer = Line::from(Span::styled(
        format!("Generated on: {}", list.generated_at.format("%b %d, %Y %H:%M")),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}

/// Renders the help text at the bottom of the screen
fn render_help(frame: &mut Frame, area: Rect) {
    let help_text = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Navigate  "),
        Span::styled("a", Style::default().fg(Color::Yellow)),
        Span::raw(" Add  "),
        Span::styled("d", Style::default().fg(Color::Yellow)),
        Span::raw(" Remove  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(" Trip  "),
        Span::styled("1-3", Style::default().fg(Color::Yellow)),
        Span::raw(" Views  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" Rate  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::DEFAULT_TRIP_NAME;
    use chrono::{Days, Local};
    use ratatui::{backend::TestBackend, Terminal};

    /// Renders the list view into a string for assertions
    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(90, 24);
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

    /// Adds a stop dated `days` ahead of the real clock
    fn seed_stop(app: &mut App, name: &str, days: u64) {
        let today = Local::now().date_naive();
        let date = today.checked_add_days(Days::new(days)).unwrap().to_string();
        app.itinerary
            .add(name, &date, "09:00", None, today)
            .expect("seed stop should validate");
    }

    #[test]
    fn test_empty_list_shows_placeholder_and_message() {
        let app = App::new();
        let content = render_to_string(&app);

        assert!(content.contains(DEFAULT_TRIP_NAME));
        assert!(content.contains(NO_DESTINATIONS_MESSAGE));
        assert!(content.contains("Total Destinations: 0"));
        assert!(content.contains("Generated on:"));
    }

    #[test]
    fn test_stops_are_rendered_with_positions() {
        let mut app = App::new();
        seed_stop(&mut app, "Rome", 1);
        seed_stop(&mut app, "Paris", 2);

        let content = render_to_string(&app);

        assert!(content.contains("1. Rome"));
        assert!(content.contains("2. Paris"));
        assert!(content.contains("Time: 09:00"));
        assert!(!content.contains(NO_DESTINATIONS_MESSAGE));
    }

    #[test]
    fn test_selected_stop_has_cursor_and_remove_hint() {
        let mut app = App::new();
        seed_stop(&mut app, "Rome", 1);
        app.selected_index = 0;

        let content = render_to_string(&app);

        assert!(content.contains('\u{25B8}'), "selected stop carries the cursor");
        assert!(content.contains("d removes"));
    }

    #[test]
    fn test_trip_dates_shown_only_when_present() {
        let mut app = App::new();
        assert!(render_to_string(&app).contains("No trip dates set"));

        app.trip.start_date = Some("2025-05-01".parse().unwrap());
        let content = render_to_string(&app);
        assert!(content.contains("From: 2025-05-01"));
        assert!(!content.contains("To:"));

        app.trip.end_date = Some("2025-05-20".parse().unwrap());
        let content = render_to_string(&app);
        assert!(content.contains("To: 2025-05-20"));
    }

    #[test]
    fn test_trip_name_in_header() {
        let mut app = App::new();
        app.trip.name = "Iberia loop".to_string();
        let content = render_to_string(&app);
        assert!(content.contains("Iberia loop"));
    }

    #[test]
    fn test_help_text_is_rendered() {
        let app = App::new();
        let content = render_to_string(&app);
        assert!(content.contains("Navigate"));
        assert!(content.contains("Quit"));
    }
}
