use crate::card::ConsoleCardPrinter;
use crate::flight::Flight;
use crate::scenario::Scenario;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::Tabled;
use tabled::settings::Style;

mod aircraft;
mod card;
mod error;
mod flight;
mod logger;
mod scenario;
mod seat;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file; the built-in demo flights are used when omitted
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct FlightRow {
    flight: String,
    airline: String,
    route: u16,
    aircraft: String,
    model: String,
    occupied: usize,
    available: usize,
}

impl From<&Flight> for FlightRow {
    fn from(f: &Flight) -> Self {
        FlightRow {
            flight: f.number().to_string(),
            airline: f.airline().to_string(),
            route: f.route(),
            aircraft: f.aircraft().registration().to_string(),
            model: f.aircraft_model().to_string(),
            occupied: f.num_occupied_seats(),
            available: f.num_available_seats(),
        }
    }
}

#[derive(Tabled)]
struct SeatRow {
    seat: String,
    passenger: String,
}

fn paginate(content: String) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(p) => p,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table<T: Tabled>(rows: &[T]) {
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let mut scenario = match &args.scenario {
        Some(path) => {
            println!("Check-in desk open. Loaded flights from {}", path.display());
            Scenario::load_from_file(path)?
        }
        None => {
            println!("Check-in desk open. Using demo flights");
            Scenario::demo()?
        }
    };

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "seats".to_string(),
            "allocate".to_string(),
            "cards".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let rows: Vec<FlightRow> = scenario.flights.iter().map(FlightRow::from).collect();
                        if rows.is_empty() {
                            println!("No flights loaded.")
                        } else {
                            print_table(&rows);
                        }
                    },
                    "seats" => {
                        match parts.get(1).map(|n| (n, scenario.flight(n))) {
                            Some((_, Some(flight))) => {
                                let rows: Vec<SeatRow> = flight.passenger_seats()
                                    .map(|(passenger, seat)| SeatRow {
                                        seat: seat.to_string(),
                                        passenger: passenger.to_string(),
                                    })
                                    .collect();
                                if rows.is_empty() {
                                    println!("No seats allocated on {}.", flight.number());
                                } else {
                                    print_table(&rows);
                                }
                                println!("{} of {} seats available.", flight.num_available_seats(), flight.aircraft().num_seats());
                            },
                            Some((n, None)) => println!("{}", format!("Unknown flight: {}", n).red()),
                            None => println!("Usage: seats <flight>"),
                        }
                    },
                    "allocate" => {
                        if let (Some(number), Some(seat)) = (parts.get(1), parts.get(2)) {
                            let passenger = parts[3..].join(" ");
                            if passenger.is_empty() {
                                println!("Usage: allocate <flight> <seat> <passenger>");
                                continue;
                            }
                            match scenario.flight_mut(number) {
                                Some(flight) => match flight.allocate_seat(seat, &passenger) {
                                    Ok(s) => println!("{}", format!("Seat {} on {} allocated to {}.", s, number, passenger).green()),
                                    Err(e) => println!("{}", e.to_string().red()),
                                },
                                None => println!("{}", format!("Unknown flight: {}", number).red()),
                            }
                        } else {
                            println!("Usage: allocate <flight> <seat> <passenger>");
                        }
                    },
                    "cards" => {
                        match parts.get(1) {
                            Some(number) => match scenario.flight(number) {
                                Some(flight) => flight.make_boarding_cards(&mut ConsoleCardPrinter::stdout()),
                                None => println!("{}", format!("Unknown flight: {}", number).red()),
                            },
                            None => {
                                let mut printer = ConsoleCardPrinter::stdout();
                                scenario.flights.iter().for_each(|f| f.make_boarding_cards(&mut printer));
                            }
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                        - List all flights in a table");
                        println!("  seats <flight>            - List allocated seats of <flight> in boarding order");
                        println!("  allocate <flight> <s> <p> - Allocate seat <s> (e.g. 12C) on <flight> to passenger <p>");
                        println!("  cards [flight]            - Print boarding cards for <flight> or for every flight");
                        println!("  help / ?                  - Show this help menu");
                        println!("  exit / quit               - Leave the check-in desk\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
