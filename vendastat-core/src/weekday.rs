//! Weekday indexing and localized names.

use chrono::{Datelike, NaiveDate};

/// Weekday labels shown in the report, indexed Monday=0 … Sunday=6.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Segunda-Feira",
    "Terça-Feira",
    "Quarta-Feira",
    "Quinta-Feira",
    "Sexta-Feira",
    "Sábado",
    "Domingo",
];

/// Weekday index of a calendar date, Monday=0 … Sunday=6.
///
/// Dates are plain calendar dates; no timezone is involved.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_monday() as u8
}

/// Label for a weekday index produced by [`weekday_index`].
pub fn weekday_name(index: u8) -> &'static str {
    WEEKDAY_NAMES[index as usize]
}
