use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatingError {
    #[error("Invalid flight number '{number}': {reason}")]
    InvalidFlightNumber { number: String, reason: &'static str },

    #[error("Invalid seat letter '{0}'")]
    InvalidSeatLetter(String),

    #[error("Invalid seat row '{0}'")]
    InvalidSeatRow(String),

    #[error("Invalid row number '{0}'")]
    InvalidRowNumber(i64),

    #[error("Seat {0} already occupied")]
    SeatOccupied(String),
}

pub type Result<T> = std::result::Result<T, SeatingError>;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Seating(#[from] SeatingError),

    #[error("Flight {flight} refers to unknown aircraft '{registration}'")]
    UnknownAircraft { flight: String, registration: String },

    #[error("Flight {0} is listed more than once")]
    DuplicateFlight(String),
}
