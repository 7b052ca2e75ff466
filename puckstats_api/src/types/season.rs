//! Season identifiers as used by the NHL APIs.

use std::fmt;

use serde::{Serialize, Serializer};

/// One NHL season, encoded on the wire as eight digits `YYYYYYYY`
/// (e.g. `20192020`).
///
/// The second year is the first year or the year after it; a repeated year
/// (`20002000`) is the encoding the records API uses for single-year bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season {
    start_year: i32,
    end_year: i32,
}

impl Season {
    /// Returns `None` unless both years are four-digit years and
    /// `end_year - start_year` is 0 or 1.
    pub fn new(start_year: i32, end_year: i32) -> Option<Self> {
        let valid_year = |y: i32| (1..=9999).contains(&y);
        if !valid_year(start_year) || !valid_year(end_year) {
            return None;
        }
        match end_year - start_year {
            0 | 1 => Some(Self {
                start_year,
                end_year,
            }),
            _ => None,
        }
    }

    /// The repeated-year code for a single year, e.g. 2000 → `20002000`.
    pub fn single_year(year: i32) -> Option<Self> {
        Self::new(year, year)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// The numeric `seasonId` value.
    pub fn code(&self) -> i64 {
        i64::from(self.start_year) * 10_000 + i64::from(self.end_year)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:04}", self.start_year, self.end_year)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
