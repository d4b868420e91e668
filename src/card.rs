use std::io;
use std::io::Write;

/// Receives one boarding card per occupied seat.
pub trait CardPrinter {
    fn print_card(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str);
}

impl<F> CardPrinter for F
where
    F: FnMut(&str, &str, &str, &str),
{
    fn print_card(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        self(passenger, seat, flight_number, aircraft_model)
    }
}

pub fn render_card(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) -> String {
    let output = format!(
        "| Name: {}  Flight: {}  Seat: {}  Aircraft: {} |",
        passenger, flight_number, seat, aircraft_model
    );
    let width = output.chars().count() - 2;
    let banner = format!("+{}+", "-".repeat(width));
    let border = format!("|{}|", " ".repeat(width));
    [banner.as_str(), border.as_str(), output.as_str(), border.as_str(), banner.as_str()].join("\n")
}

/// Writes bordered cards followed by a blank separator line.
pub struct ConsoleCardPrinter<W: Write> {
    out: W,
}

impl ConsoleCardPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleCardPrinter { out: io::stdout() }
    }
}

impl<W: Write> ConsoleCardPrinter<W> {
    pub fn new(out: W) -> Self {
        ConsoleCardPrinter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CardPrinter for ConsoleCardPrinter<W> {
    fn print_card(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        let card = render_card(passenger, seat, flight_number, aircraft_model);
        if let Err(e) = writeln!(self.out, "{}\n", card) {
            // Broken pipe is common if the reader goes away early
            if e.kind() != io::ErrorKind::BrokenPipe {
                tracing::warn!(flight = flight_number, seat, error = %e, "failed to print boarding card");
            }
        }
    }
}
