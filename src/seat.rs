use crate::aircraft::SeatingPlan;
use crate::error::{Result, SeatingError};
use std::fmt;
use std::fmt::Formatter;

/// A validated seat designator such as `12C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seat {
    pub row: u16,
    pub letter: char,
}

impl Seat {
    /// Parses `designator` against `plan`.
    ///
    /// The trailing character is the seat letter and everything before it is the
    /// row. The letter is checked first, then the row text, then the row range.
    pub fn parse(designator: &str, plan: &SeatingPlan) -> Result<Seat> {
        let letter = designator
            .chars()
            .next_back()
            .ok_or_else(|| SeatingError::InvalidSeatLetter(String::new()))?;
        if plan.letter_index(letter).is_none() {
            return Err(SeatingError::InvalidSeatLetter(letter.to_string()));
        }

        let row_text = &designator[..designator.len() - letter.len_utf8()];
        let row = row_text
            .parse::<i64>()
            .map_err(|_| SeatingError::InvalidSeatRow(row_text.to_string()))?;

        if !plan.contains_row(row) {
            return Err(SeatingError::InvalidRowNumber(row));
        }

        Ok(Seat {
            row: row as u16,
            letter,
        })
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}
