use crate::error::SeatingError;
use crate::flight::Flight;
use crate::flight::tests::utils::{airbus, boeing, flight};
use crate::seat::Seat;

#[test]
fn test_valid_flight_numbers() {
    for number in ["BA758", "AF72", "LH1", "UA9999", "KL0001"] {
        assert!(Flight::new(number, airbus("G-EUPT")).is_ok(), "{} rejected", number);
    }
}

#[test]
fn test_invalid_flight_numbers() {
    for number in ["br758", "b2758", "BA99999", "Ba758", "BA", "B", "", "BA75X", "BA 758", "ÄB12", "12345"] {
        match Flight::new(number, airbus("G-EUPT")) {
            Err(SeatingError::InvalidFlightNumber { number: n, .. }) => assert_eq!(n, number),
            _ => panic!("{} accepted", number),
        }
    }
}

#[test]
fn test_flight_number_reasons() {
    let reason = |number: &str| match Flight::new(number, airbus("G-EUPT")) {
        Err(SeatingError::InvalidFlightNumber { reason, .. }) => reason,
        _ => panic!("{} accepted", number),
    };
    assert_eq!(reason("b2758"), "no airline code");
    assert_eq!(reason("br758"), "invalid airline code");
    assert_eq!(reason("BA99999"), "invalid route number");
}

#[test]
fn test_error_message_carries_input() {
    let err = Flight::new("br758", airbus("G-EUPT")).err().unwrap();
    assert!(err.to_string().contains("br758"));
}

#[test]
fn test_accessors() {
    let f = flight("BA758", airbus("G-EUPT"), &[]);
    assert_eq!(f.number(), "BA758");
    assert_eq!(f.airline(), "BA");
    assert_eq!(f.route(), 758);
    assert_eq!(f.aircraft_model(), "Airbus A319");
    assert_eq!(f.aircraft().registration(), "G-EUPT");
}

#[test]
fn test_new_flight_is_empty() {
    assert_eq!(flight("BA758", airbus("G-EUPT"), &[]).num_available_seats(), 22 * 6);
    assert_eq!(flight("AF72", boeing("F-GSPS"), &[]).num_available_seats(), 55 * 10);
}

#[test]
fn test_allocate_seat() {
    let mut f = flight("BA758", airbus("G-EUPT"), &[]);
    let seat = f.allocate_seat("12A", "Guido van Rossum").unwrap();

    assert_eq!(seat, Seat { row: 12, letter: 'A' });
    assert_eq!(f.num_available_seats(), 131);
    assert_eq!(f.num_occupied_seats(), 1);
    assert_eq!(f.passenger_at("12A").unwrap(), Some("Guido van Rossum"));
    assert_eq!(f.passenger_at("12B").unwrap(), None);
}

#[test]
fn test_seat_occupied() {
    let mut f = flight("BA758", airbus("G-EUPT"), &[("12A", "Guido van Rossum")]);

    assert_eq!(
        f.allocate_seat("12A", "Bjarne Stroustrup"),
        Err(SeatingError::SeatOccupied("12A".to_string()))
    );
    assert_eq!(f.passenger_at("12A").unwrap(), Some("Guido van Rossum"));
    assert_eq!(f.num_available_seats(), 131);
}

#[test]
fn test_invalid_seats_leave_chart_untouched() {
    let mut f = flight("BA758", airbus("G-EUPT"), &[]);

    assert_eq!(
        f.allocate_seat("12G", "X"),
        Err(SeatingError::InvalidSeatLetter("G".to_string()))
    );
    assert_eq!(
        f.allocate_seat("XXA", "X"),
        Err(SeatingError::InvalidSeatRow("XX".to_string()))
    );
    assert_eq!(
        f.allocate_seat("23A", "X"),
        Err(SeatingError::InvalidRowNumber(23))
    );
    assert_eq!(
        f.allocate_seat("0A", "X"),
        Err(SeatingError::InvalidRowNumber(0))
    );
    assert_eq!(f.num_available_seats(), 132);
}

#[test]
fn test_boeing_layout() {
    let mut f = flight("AF72", boeing("F-GSPS"), &[]);

    assert!(f.allocate_seat("55K", "Larry Wall").is_ok());
    assert!(f.allocate_seat("33G", "Yukihiro Matsumoto").is_ok());
    assert_eq!(
        f.allocate_seat("10I", "X"),
        Err(SeatingError::InvalidSeatLetter("I".to_string()))
    );
    assert_eq!(
        f.allocate_seat("56A", "X"),
        Err(SeatingError::InvalidRowNumber(56))
    );
    assert_eq!(f.num_available_seats(), 548);
}

#[test]
fn test_same_passenger_may_hold_two_seats() {
    let f = flight("BA758", airbus("G-EUPT"), &[("1A", "Dennis Ritchie"), ("1B", "Dennis Ritchie")]);
    assert_eq!(f.num_available_seats(), 130);
}

#[test]
fn test_passenger_at_validates() {
    let f = flight("BA758", airbus("G-EUPT"), &[]);
    assert_eq!(
        f.passenger_at("99A"),
        Err(SeatingError::InvalidRowNumber(99))
    );
}

#[test]
fn test_end_to_end() {
    let f = flight(
        "BA758",
        airbus("G-EUPT"),
        &[
            ("12A", "Guido van Rossum"),
            ("15F", "Bjarne Stroustrup"),
            ("15E", "Anders Hejlsberg"),
            ("1C", "John McCarthy"),
            ("1D", "Richard Hickey"),
        ],
    );
    assert_eq!(f.num_available_seats(), 132 - 5);
}
