//! Application state management for Tripdeck
//!
//! This module contains the main application state, handling keyboard
//! input, form editing, and state transitions between the itinerary
//! views.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::itinerary::Itinerary;
use crate::rating;
use crate::trip::{parse_optional_date, TripDetails, TripError};
use crate::views::{build_views, ItineraryViews, View};

/// Application state enum representing the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Itinerary list view (the main screen)
    List,
    /// Timeline view of all stops
    Timeline,
    /// Schematic route view
    RouteMap,
    /// Add-destination form
    AddDestination,
    /// Trip settings form (name, start/end dates)
    TripSettings,
}

/// Severity of the transient notice line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Confirmation of a completed action
    Info,
    /// A rejected input; the operation was aborted
    Error,
}

/// A one-line message shown at the bottom of the screen until the next
/// action replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Fields of the add-destination form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestField {
    #[default]
    Name,
    Date,
    Time,
}

impl DestField {
    fn next(self) -> Self {
        match self {
            DestField::Name => DestField::Date,
            DestField::Date => DestField::Time,
            DestField::Time => DestField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            DestField::Name => DestField::Time,
            DestField::Date => DestField::Name,
            DestField::Time => DestField::Date,
        }
    }
}

/// Input buffers for the add-destination form
#[derive(Debug, Default)]
pub struct DestinationForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub focus: DestField,
}

impl DestinationForm {
    /// Clears all buffers and resets focus to the name field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.date.clear();
        self.time.clear();
        self.focus = DestField::Name;
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.focus {
            DestField::Name => &mut self.name,
            DestField::Date => &mut self.date,
            DestField::Time => &mut self.time,
        }
    }
}

/// Fields of the trip settings form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripField {
    #[default]
    Name,
    StartDate,
    EndDate,
}

impl TripField {
    fn next(self) -> Self {
        match self {
            TripField::Name => TripField::StartDate,
            TripField::StartDate => TripField::EndDate,
            TripField::EndDate => TripField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            TripField::Name => TripField::EndDate,
            TripField::StartDate => TripField::Name,
            TripField::EndDate => TripField::StartDate,
        }
    }
}

/// Input buffers for the trip settings form
#[derive(Debug, Default)]
pub struct TripForm {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub focus: TripField,
}

impl TripForm {
    /// Prefills the buffers from the current trip details.
    pub fn load(&mut self, trip: &TripDetails) {
        self.name = trip.name.clone();
        self.start_date = trip.start_date.map(|d| d.to_string()).unwrap_or_default();
        self.end_date = trip.end_date.map(|d| d.to_string()).unwrap_or_default();
        self.focus = TripField::Name;
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.focus {
            TripField::Name => &mut self.name,
            TripField::StartDate => &mut self.start_date,
            TripField::EndDate => &mut self.end_date,
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/screen
    pub state: AppState,
    /// The ordered destination collection
    pub itinerary: Itinerary,
    /// Trip-wide metadata, kept outside the itinerary
    pub trip: TripDetails,
    /// Index of currently selected stop in the list view
    pub selected_index: usize,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag to show the rating overlay
    pub show_rating: bool,
    /// Transient message line, replaced by the next action
    pub notice: Option<Notice>,
    /// Add-destination form buffers
    pub dest_form: DestinationForm,
    /// Trip settings form buffers
    pub trip_form: TripForm,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self {
            state: AppState::List,
            itinerary: Itinerary::new(),
            trip: TripDetails::default(),
            selected_index: 0,
            should_quit: false,
            show_help: false,
            show_rating: false,
            notice: None,
            dest_form: DestinationForm::default(),
            trip_form: TripForm::default(),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// This is used to apply CLI arguments like --trip-name and --view
    /// to prefill trip metadata and the initial screen.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();

        if let Some(name) = config.trip_name {
            app.trip.name = name;
        }
        app.trip.start_date = config.start_date;
        app.trip.end_date = config.end_date;
        if let Some(view) = config.initial_view {
            app.state = view_state(view);
        }

        app
    }

    /// Builds all three view fragments from the current state.
    ///
    /// Every draw re-derives the fragments from scratch; itineraries
    /// are human-sized, so no incremental diffing is needed.
    pub fn views(&self) -> ItineraryViews {
        build_views(&self.itinerary, &self.trip, Local::now())
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// - `q`: Quit (from any view); `Esc` quits from the list view and
    ///   backs out everywhere else
    /// - `1`/`2`/`3`, `Tab`: Switch between list, timeline, and route views
    /// - `Up`/`k`, `Down`/`j`: Move selection in the list view
    /// - `a`: Open the add-destination form
    /// - `t`: Open trip settings
    /// - `d`/`Delete`: Remove the selected stop (list view)
    /// - `r`: Open the rating overlay (`1`-`5` rates)
    /// - `?`: Show help overlay
    /// - In forms: `Tab`/`Down` and `BackTab`/`Up` move focus, `Enter`
    ///   submits, `Esc` cancels, `Backspace` deletes
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay - intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {} // Ignore other keys when help is shown
            }
            return;
        }

        // Rating overlay - 1-5 rates, anything else closes
        if self.show_rating {
            match key_event.code {
                KeyCode::Char(c @ '1'..='5') => {
                    let stars = c as u8 - b'0';
                    self.notice = Some(Notice::info(rating::acknowledgement(stars)));
                    self.show_rating = false;
                }
                KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('q') => {
                    self.show_rating = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::List => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    self.remove_selected();
                }
                KeyCode::Char('a') => {
                    self.open_add_form();
                }
                KeyCode::Char('t') => {
                    self.open_trip_settings();
                }
                KeyCode::Char('1') => self.state = AppState::List,
                KeyCode::Char('2') => self.state = AppState::Timeline,
                KeyCode::Char('3') => self.state = AppState::RouteMap,
                KeyCode::Tab => self.cycle_view(),
                KeyCode::Char('r') => {
                    self.show_rating = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::Timeline | AppState::RouteMap => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.state = AppState::List;
                }
                KeyCode::Char('a') => {
                    self.open_add_form();
                }
                KeyCode::Char('t') => {
                    self.open_trip_settings();
                }
                KeyCode::Char('1') => self.state = AppState::List,
                KeyCode::Char('2') => self.state = AppState::Timeline,
                KeyCode::Char('3') => self.state = AppState::RouteMap,
                KeyCode::Tab => self.cycle_view(),
                KeyCode::Char('r') => {
                    self.show_rating = true;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::AddDestination => match key_event.code {
                KeyCode::Esc => {
                    self.state = AppState::List;
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.dest_form.focus = self.dest_form.focus.next();
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.dest_form.focus = self.dest_form.focus.prev();
                }
                KeyCode::Enter => {
                    self.submit_destination(Local::now().date_naive());
                }
                KeyCode::Backspace => {
                    self.dest_form.active_buffer().pop();
                }
                KeyCode::Char(c) => {
                    self.dest_form.active_buffer().push(c);
                }
                _ => {}
            },
            AppState::TripSettings => match key_event.code {
                KeyCode::Esc => {
                    self.state = AppState::List;
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.trip_form.focus = self.trip_form.focus.next();
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.trip_form.focus = self.trip_form.focus.prev();
                }
                KeyCode::Enter => {
                    self.submit_trip(Local::now().date_naive());
                }
                KeyCode::Backspace => {
                    self.trip_form.active_buffer().pop();
                }
                KeyCode::Char(c) => {
                    self.trip_form.active_buffer().push(c);
                }
                _ => {}
            },
        }
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.itinerary.len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.itinerary.len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Opens the add-destination form with a fresh notice line.
    fn open_add_form(&mut self) {
        self.notice = None;
        self.state = AppState::AddDestination;
    }

    /// Opens trip settings with the buffers prefilled from the trip.
    fn open_trip_settings(&mut self) {
        self.notice = None;
        self.trip_form.load(&self.trip);
        self.state = AppState::TripSettings;
    }

    /// Advances to the next of the three main views.
    fn cycle_view(&mut self) {
        self.state = match self.state {
            AppState::List => AppState::Timeline,
            AppState::Timeline => AppState::RouteMap,
            _ => AppState::List,
        };
    }

    /// Removes the currently selected stop, keeping the selection in
    /// range afterwards.
    fn remove_selected(&mut self) {
        let Some(stop) = self.itinerary.stops().get(self.selected_index) else {
            return;
        };
        let removed = stop.name.clone();
        self.itinerary.remove(self.selected_index);
        if self.selected_index > 0 && self.selected_index >= self.itinerary.len() {
            self.selected_index -= 1;
        }
        self.notice = Some(Notice::info(format!("Removed {}", removed)));
    }

    /// Submits the add-destination form.
    ///
    /// On success the fields are cleared and the app returns to the
    /// list view. On failure the fields are kept so the user can
    /// correct them, and the error is shown as a notice.
    ///
    /// `today` is a parameter so tests can pin the clock; handle_key
    /// passes the current date.
    pub fn submit_destination(&mut self, today: NaiveDate) {
        let result = self.itinerary.add(
            &self.dest_form.name,
            &self.dest_form.date,
            &self.dest_form.time,
            self.trip.end_date,
            today,
        );
        match result {
            Ok(()) => {
                let name = self.dest_form.name.trim().to_string();
                self.dest_form.clear();
                self.notice = Some(Notice::info(format!("Added {}", name)));
                self.state = AppState::List;
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    /// Submits the trip settings form.
    ///
    /// The name and end date always apply; destinations already added
    /// are not re-validated against a changed end date. A start date
    /// earlier than `today` is rejected by resetting that field and
    /// notifying, independent of destination validation.
    pub fn submit_trip(&mut self, today: NaiveDate) {
        let start = match parse_optional_date(&self.trip_form.start_date) {
            Ok(start) => start,
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                return;
            }
        };
        let end = match parse_optional_date(&self.trip_form.end_date) {
            Ok(end) => end,
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
                return;
            }
        };

        self.trip.name = self.trip_form.name.trim().to_string();
        self.trip.end_date = end;

        if let Some(start) = start {
            if start < today {
                self.trip_form.start_date.clear();
                self.trip.start_date = None;
                self.notice = Some(Notice::error(TripError::StartDateInPast.to_string()));
                return;
            }
        }
        self.trip.start_date = start;

        self.notice = Some(Notice::info("Trip details updated"));
        self.state = AppState::List;
    }
}

/// Maps a view selection to its application state.
fn view_state(view: View) -> AppState {
    match view {
        View::List => AppState::List,
        View::Timeline => AppState::Timeline,
        View::RouteMap => AppState::RouteMap,
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
