use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::ops::RangeInclusive;
use std::sync::Arc;

pub type Registration = Arc<str>;

/// Rows and seat letters that together define every addressable seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatingPlan {
    pub rows: RangeInclusive<u16>,
    pub letters: &'static [char],
}

impl SeatingPlan {
    pub fn num_rows(&self) -> usize {
        self.rows.clone().count()
    }

    pub fn contains_row(&self, row: i64) -> bool {
        u16::try_from(row).is_ok_and(|r| self.rows.contains(&r))
    }

    /// Position of `letter` in the declared letter sequence.
    pub fn letter_index(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|l| *l == letter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AircraftType {
    Boeing777,
    #[serde(alias = "airbusa319")]
    Airbus319,
}

impl AircraftType {
    pub fn model(&self) -> &'static str {
        match self {
            AircraftType::Boeing777 => "Boeing 777",
            AircraftType::Airbus319 => "Airbus A319",
        }
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        match self {
            AircraftType::Boeing777 => SeatingPlan {
                rows: 1..=55,
                letters: &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K'],
            },
            AircraftType::Airbus319 => SeatingPlan {
                rows: 1..=22,
                letters: &['A', 'B', 'C', 'D', 'E', 'F'],
            },
        }
    }

    pub fn num_seats(&self) -> usize {
        let plan = self.seating_plan();
        plan.num_rows() * plan.letters.len()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub registration: Registration,
    #[serde(rename = "type")]
    pub kind: AircraftType,
}

impl Aircraft {
    pub fn new(registration: &str, kind: AircraftType) -> Aircraft {
        Aircraft {
            registration: Arc::from(registration),
            kind,
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &'static str {
        self.kind.model()
    }

    pub fn seating_plan(&self) -> SeatingPlan {
        self.kind.seating_plan()
    }

    pub fn num_seats(&self) -> usize {
        self.kind.num_seats()
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.registration, self.model())
    }
}
