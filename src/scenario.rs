use crate::aircraft::{Aircraft, AircraftType, Registration};
use crate::error::ScenarioError;
use crate::flight::Flight;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Deserialize)]
struct RawAllocation {
    seat: String,
    passenger: String,
}

#[derive(Deserialize)]
struct RawFlight {
    number: String,
    aircraft: String,
    #[serde(default)]
    allocations: Vec<RawAllocation>,
}

#[derive(Deserialize)]
struct RawData {
    aircraft: Vec<Aircraft>,
    flights: Vec<RawFlight>,
}

/// A set of flights with their aircraft and initial seat allocations.
pub struct Scenario {
    pub aircraft: HashMap<Registration, Arc<Aircraft>>,
    pub flights: Vec<Flight>,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let scenario = Self::from_json(&data)?;
        tracing::info!(
            path = %path.as_ref().display(),
            flights = scenario.flights.len(),
            aircraft = scenario.aircraft.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    pub fn from_json(data: &str) -> Result<Self, ScenarioError> {
        let raw: RawData = serde_json::from_str(data)?;

        let aircraft: HashMap<Registration, Arc<Aircraft>> = raw
            .aircraft
            .into_iter()
            .map(|a| (a.registration.clone(), Arc::new(a)))
            .collect();

        let mut flights: Vec<Flight> = Vec::with_capacity(raw.flights.len());
        for rf in raw.flights {
            if flights.iter().any(|f| f.number() == rf.number) {
                return Err(ScenarioError::DuplicateFlight(rf.number));
            }
            let ac = aircraft
                .get(rf.aircraft.as_str())
                .cloned()
                .ok_or_else(|| ScenarioError::UnknownAircraft {
                    flight: rf.number.clone(),
                    registration: rf.aircraft.clone(),
                })?;
            let mut flight = Flight::new(&rf.number, ac)?;
            for allocation in rf.allocations {
                flight.allocate_seat(&allocation.seat, &allocation.passenger)?;
            }
            flights.push(flight);
        }

        Ok(Scenario { aircraft, flights })
    }

    /// Two sample flights used when no scenario file is given.
    pub fn demo() -> Result<Self, ScenarioError> {
        let a319 = Arc::new(Aircraft::new("G-EUPT", AircraftType::Airbus319));
        let b777 = Arc::new(Aircraft::new("F-GSPS", AircraftType::Boeing777));

        let mut f = Flight::new("BA758", a319.clone())?;
        f.allocate_seat("12A", "Guido van Rossum")?;
        f.allocate_seat("15F", "Bjarne Stroustrup")?;
        f.allocate_seat("15E", "Anders Hejlsberg")?;
        f.allocate_seat("1C", "John McCarthy")?;
        f.allocate_seat("1D", "Richard Hickey")?;

        let mut g = Flight::new("AF72", b777.clone())?;
        g.allocate_seat("55K", "Larry Wall")?;
        g.allocate_seat("33G", "Yukihiro Matsumoto")?;
        g.allocate_seat("4B", "Brian Kernighan")?;
        g.allocate_seat("4A", "Dennis Ritchie")?;

        let aircraft = [a319, b777]
            .into_iter()
            .map(|a| (a.registration.clone(), a))
            .collect();

        Ok(Scenario {
            aircraft,
            flights: vec![f, g],
        })
    }

    pub fn flight(&self, number: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.number() == number)
    }

    pub fn flight_mut(&mut self, number: &str) -> Option<&mut Flight> {
        self.flights.iter_mut().find(|f| f.number() == number)
    }
}
