//! UI rendering module for Tripdeck
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod add_form;
pub mod help_overlay;
pub mod itinerary_list;
pub mod rating_overlay;
pub mod route_map;
pub mod timeline;
pub mod trip_form;

pub use add_form::render as render_add_form;
pub use help_overlay::render as render_help_overlay;
pub use itinerary_list::render as render_itinerary_list;
pub use rating_overlay::render as render_rating_overlay;
pub use route_map::render as render_route_map;
pub use timeline::render as render_timeline;
pub use trip_form::render as render_trip_form;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::app::{Notice, NoticeKind};

/// Builds the one-line notice shown at the bottom of a screen; blank
/// when there is nothing to report.
pub(crate) fn notice_line(notice: Option<&Notice>) -> Line<'static> {
    match notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(color),
            ))
        }
        None => Line::from(""),
    }
}
