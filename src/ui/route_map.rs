//! Schematic route screen rendering
//!
//! Renders the itinerary as a vertical chain of numbered point markers
//! joined by connector lines, with no connector after the last point.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::views::{RouteSegment, EMPTY_ROUTE_MESSAGE};

/// Renders the route screen
///
/// # Arguments
/// * `frame` - The ratatui Frame to render to
/// * `app` - The application state containing the itinerary
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Route chain
            Constraint::Length(1), // Notice line
            Constraint::Length(1), // Help text
        ])
        .split(area);

    let route = app.views().route;

    let mut lines: Vec<Line> = Vec::with_capacity(route.segments.len().max(1));
    for segment in &route.segments {
        match segment {
            RouteSegment::Point { position, name } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" ({}) ", position),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(name.clone(), Style::default().fg(Color::White)),
                ]));
            }
            RouteSegment::Connector => {
                // Heavy vertical bar, distinct from the light border glyph
                lines.push(Line::from(Span::styled(
                    "  \u{2503}", // ┃
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
    }

    if route.segments.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_ROUTE_MESSAGE,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(" Route ")
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Local};
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

    fn seed_stop(app: &mut App, name: &str, days: u64) {
        let today = Local::now().date_naive();
        let date = today.checked_add_days(Days::new(days)).unwrap().to_string();
        app.itinerary
            .add(name, &date, "", None, today)
            .expect("seed stop should validate");
    }

    #[test]
    fn test_empty_route_shows_message() {
        let app = App::new();
        let content = render_to_string(&app);
        assert!(content.contains(EMPTY_ROUTE_MESSAGE));
    }

    #[test]
    fn test_points_are_joined_by_connectors() {
        let mut app = App::new();
        seed_stop(&mut app, "Rome", 1);
        seed_stop(&mut app, "Paris", 2);
        seed_stop(&mut app, "Berlin", 3);

        let content = render_to_string(&app);

        assert!(content.contains("(1) Rome"));
        assert!(content.contains("(2) Paris"));
        assert!(content.contains("(3) Berlin"));
        let connectors = content.matches('\u{2503}').count();
        assert_eq!(connectors, 2, "one connector between each pair, none after the last");
        assert!(!content.contains(EMPTY_ROUTE_MESSAGE));
    }

    #[test]
    fn test_single_point_has_no_connector() {
        let mut app = App::new();
        seed_stop(&mut app, "Rome", 1);

        let content = render_to_string(&app);

        assert!(content.contains("(1) Rome"));
        assert_eq!(content.matches('\u{2503}').count(), 0);
    }
}
