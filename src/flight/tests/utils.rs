use crate::aircraft::{Aircraft, AircraftType};
use crate::flight::Flight;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn airbus(registration: &str) -> Arc<Aircraft> {
    Arc::new(Aircraft::new(registration, AircraftType::Airbus319))
}

pub fn boeing(registration: &str) -> Arc<Aircraft> {
    Arc::new(Aircraft::new(registration, AircraftType::Boeing777))
}

pub fn flight(number: &str, aircraft: Arc<Aircraft>, allocations: &[(&str, &str)]) -> Flight {
    let mut flight = Flight::new(number, aircraft).unwrap();
    for (seat, passenger) in allocations {
        flight.allocate_seat(seat, passenger).unwrap();
    }
    flight
}

/// Seats printed by `make_boarding_cards`, in call order.
pub fn card_seats(flight: &Flight) -> Vec<String> {
    let mut seats = Vec::new();
    flight.make_boarding_cards(&mut |_: &str, seat: &str, _: &str, _: &str| {
        seats.push(seat.to_string())
    });
    seats
}

pub fn arb_aircraft_type() -> impl Strategy<Value = AircraftType> {
    prop_oneof![Just(AircraftType::Airbus319), Just(AircraftType::Boeing777)]
}

/// A seat designator valid for `kind`.
pub fn arb_seat(kind: AircraftType) -> impl Strategy<Value = String> {
    let plan = kind.seating_plan();
    (plan.rows.clone(), 0..plan.letters.len())
        .prop_map(move |(row, idx)| format!("{}{}", row, plan.letters[idx]))
}
