use crate::aircraft::Aircraft;
use crate::card::CardPrinter;
use crate::error::{Result, SeatingError};
use crate::seat::Seat;
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

#[cfg(test)]
mod tests;

pub type Passenger = String;

/// Flight number made of a two letter airline code and a route number up to 9999.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightNumber(String);

impl FlightNumber {
    const MAX_ROUTE_DIGITS: usize = 4;

    pub fn parse(number: &str) -> Result<FlightNumber> {
        let invalid = |reason| SeatingError::InvalidFlightNumber {
            number: number.to_string(),
            reason,
        };

        let split = number.char_indices().nth(2).map_or(number.len(), |(i, _)| i);
        let (airline, route) = number.split_at(split);

        if airline.chars().count() != 2 || !airline.chars().all(char::is_alphabetic) {
            return Err(invalid("no airline code"));
        }
        if !airline.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(invalid("invalid airline code"));
        }
        if route.is_empty()
            || route.len() > Self::MAX_ROUTE_DIGITS
            || !route.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("invalid route number"));
        }

        Ok(FlightNumber(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn airline(&self) -> &str {
        &self.0[..2]
    }

    pub fn route(&self) -> u16 {
        self.0[2..].parse().unwrap_or_default()
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Flight {
    number: FlightNumber,
    aircraft: Arc<Aircraft>,
    // cells follow the aircraft's declared letter order
    seating: BTreeMap<u16, Vec<Option<Passenger>>>,
}

impl Flight {
    pub fn new(number: &str, aircraft: Arc<Aircraft>) -> Result<Flight> {
        let number = FlightNumber::parse(number)?;
        let plan = aircraft.seating_plan();
        let seating = plan
            .rows
            .clone()
            .map(|row| (row, vec![None; plan.letters.len()]))
            .collect();
        tracing::debug!(flight = %number, aircraft = %aircraft, "flight opened");
        Ok(Flight {
            number,
            aircraft,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn airline(&self) -> &str {
        self.number.airline()
    }

    pub fn route(&self) -> u16 {
        self.number.route()
    }

    pub fn aircraft(&self) -> &Arc<Aircraft> {
        &self.aircraft
    }

    pub fn aircraft_model(&self) -> &'static str {
        self.aircraft.model()
    }

    fn cell(&self, seat: Seat) -> Option<&Option<Passenger>> {
        let idx = self.aircraft.seating_plan().letter_index(seat.letter)?;
        self.seating.get(&seat.row)?.get(idx)
    }

    fn cell_mut(&mut self, seat: Seat) -> Option<&mut Option<Passenger>> {
        let idx = self.aircraft.seating_plan().letter_index(seat.letter)?;
        self.seating.get_mut(&seat.row)?.get_mut(idx)
    }

    /// Allocates a seat to a passenger.
    ///
    /// `seat` is a designator such as `12C`. Fails without touching the chart if
    /// the designator does not fit the aircraft or the seat is already taken.
    pub fn allocate_seat(&mut self, seat: &str, passenger: &str) -> Result<Seat> {
        let parsed = Seat::parse(seat, &self.aircraft.seating_plan())?;
        match self.cell_mut(parsed) {
            Some(cell) if cell.is_none() => {
                *cell = Some(passenger.to_string());
            }
            Some(_) => return Err(SeatingError::SeatOccupied(seat.to_string())),
            None => return Err(SeatingError::InvalidRowNumber(parsed.row.into())),
        }
        tracing::debug!(flight = %self.number, seat = %parsed, passenger, "seat allocated");
        Ok(parsed)
    }

    /// Who sits in `seat`, validating the designator the same way allocation does.
    pub fn passenger_at(&self, seat: &str) -> Result<Option<&str>> {
        let parsed = Seat::parse(seat, &self.aircraft.seating_plan())?;
        Ok(self.cell(parsed).and_then(|p| p.as_deref()))
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating
            .values()
            .map(|row| row.iter().filter(|p| p.is_none()).count())
            .sum()
    }

    pub fn num_occupied_seats(&self) -> usize {
        self.aircraft.num_seats() - self.num_available_seats()
    }

    /// Occupied seats by ascending row, then by the aircraft's letter order.
    pub fn passenger_seats(&self) -> impl Iterator<Item = (&str, Seat)> + '_ {
        let letters = self.aircraft.seating_plan().letters;
        self.seating.iter().flat_map(move |(row, cells)| {
            cells
                .iter()
                .zip(letters)
                .filter_map(move |(cell, letter)| {
                    cell.as_deref().map(|passenger| {
                        (passenger, Seat { row: *row, letter: *letter })
                    })
                })
        })
    }

    pub fn make_boarding_cards<P: CardPrinter + ?Sized>(&self, card_printer: &mut P) {
        for (passenger, seat) in self.passenger_seats() {
            card_printer.print_card(
                passenger,
                &seat.to_string(),
                self.number(),
                self.aircraft_model(),
            );
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.aircraft)
    }
}
