//! Command-line interface parsing for Tripdeck
//!
//! This module handles parsing of CLI arguments using clap, including
//! flags to prefill trip metadata and the --view flag for opening
//! directly in a specific view.

use chrono::NaiveDate;
use clap::Parser;
use thiserror::Error;

use crate::views::View;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// A date flag did not parse as a calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The trip start date is earlier than today
    #[error("Cannot select a start date before today")]
    StartDateInPast,

    /// The specified view name is not recognized
    #[error("Invalid view: '{0}'. Valid views: list, timeline, route, map")]
    InvalidView(String),
}

/// Tripdeck - Build a travel itinerary with list, timeline, and route views
#[derive(Parser, Debug)]
#[command(name = "tripdeck")]
#[command(about = "Terminal travel itinerary builder")]
#[command(version)]
pub struct Cli {
    /// Trip name shown in the itinerary header
    #[arg(long, value_name = "NAME")]
    pub trip_name: Option<String>,

    /// First day of the trip (YYYY-MM-DD, not before today)
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,

    /// Last day of the trip (YYYY-MM-DD); destinations may not be scheduled after it
    #[arg(long, value_name = "DATE")]
    pub end_date: Option<String>,

    /// Open directly in a specific view
    ///
    /// Valid views: list, timeline, route, map
    #[arg(long, value_name = "VIEW")]
    pub view: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Trip name to prefill (if specified)
    pub trip_name: Option<String>,
    /// Trip start date to prefill (if specified)
    pub start_date: Option<NaiveDate>,
    /// Trip end date to prefill (if specified)
    pub end_date: Option<NaiveDate>,
    /// Initial view to open in (if specified)
    pub initial_view: Option<View>,
}

/// Parses a date flag value into a NaiveDate.
///
/// # Arguments
/// * `s` - The date string from CLI
///
/// # Returns
/// * `Ok(NaiveDate)` if the string is a valid ISO date
/// * `Err(CliError::InvalidDate)` otherwise
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, CliError> {
    s.parse().map_err(|_| CliError::InvalidDate(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// `today` bounds the start date: starting a trip in the past is
    /// rejected here the same way the trip-settings form rejects it.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    /// * `today` - The current calendar date
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a flag value was invalid
    pub fn from_cli(cli: &Cli, today: NaiveDate) -> Result<Self, CliError> {
        let start_date = match &cli.start_date {
            None => None,
            Some(s) => {
                let parsed = parse_date_arg(s)?;
                if parsed < today {
                    return Err(CliError::StartDateInPast);
                }
                Some(parsed)
            }
        };

        let end_date = match &cli.end_date {
            None => None,
            Some(s) => Some(parse_date_arg(s)?),
        };

        let initial_view = match &cli.view {
            None => None,
            Some(s) => Some(View::from_str(s).ok_or_else(|| CliError::InvalidView(s.clone()))?),
        };

        Ok(StartupConfig {
            trip_name: cli.trip_name.clone(),
            start_date,
            end_date,
            initial_view,
        })
    }
}
