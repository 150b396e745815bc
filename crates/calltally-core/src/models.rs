//! Core data types for calltally.
//!
//! This module defines the primary types used throughout the library:
//! - [`TimeBand`] - Time-of-day band partitioning the 24-hour clock
//! - [`BandCounts`] - Per-band call counters
//! - [`SummaryRow`] - One emitted per-day summary

use serde::Serialize;

/// Time-of-day band. The six bands partition hours 0-23 with no gap
/// or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// Before 09:00 (`[0,9)`)
    Before9,
    /// 09:00 to 12:00 (`[9,12)`)
    NineToTwelve,
    /// 12:00 to 13:00 (`[12,13)`)
    TwelveToThirteen,
    /// 13:00 to 17:00 (`[13,17)`)
    ThirteenToSeventeen,
    /// 17:00 to 20:00 (`[17,20)`)
    SeventeenToTwenty,
    /// 20:00 and later (`[20,24)`)
    After20,
}

impl TimeBand {
    /// All bands in report column order.
    pub const ALL: [TimeBand; 6] = [
        TimeBand::Before9,
        TimeBand::NineToTwelve,
        TimeBand::TwelveToThirteen,
        TimeBand::ThirteenToSeventeen,
        TimeBand::SeventeenToTwenty,
        TimeBand::After20,
    ];

    /// Classify a 24-hour clock hour into its band.
    ///
    /// Bands are checked in ascending order, first match wins. Exhaustive
    /// for hours 0-23; hours above 23 fall into [`TimeBand::After20`].
    pub fn classify(hour: u32) -> TimeBand {
        if hour < 9 {
            TimeBand::Before9
        } else if hour < 12 {
            TimeBand::NineToTwelve
        } else if hour < 13 {
            TimeBand::TwelveToThirteen
        } else if hour < 17 {
            TimeBand::ThirteenToSeventeen
        } else if hour < 20 {
            TimeBand::SeventeenToTwenty
        } else {
            TimeBand::After20
        }
    }

    /// Column label as it appears in the report header.
    pub fn label(&self) -> &'static str {
        match self {
            TimeBand::Before9 => "Avant 9h",
            TimeBand::NineToTwelve => "9-12",
            TimeBand::TwelveToThirteen => "12-13",
            TimeBand::ThirteenToSeventeen => "13-17",
            TimeBand::SeventeenToTwenty => "17-20",
            TimeBand::After20 => "20+",
        }
    }
}

impl std::fmt::Display for TimeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-band call counters for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub before9: u64,
    pub nine_to_twelve: u64,
    pub twelve_to_thirteen: u64,
    pub thirteen_to_seventeen: u64,
    pub seventeen_to_twenty: u64,
    pub after20: u64,
}

impl BandCounts {
    /// Increment the counter for one band.
    pub fn increment(&mut self, band: TimeBand) {
        match band {
            TimeBand::Before9 => self.before9 += 1,
            TimeBand::NineToTwelve => self.nine_to_twelve += 1,
            TimeBand::TwelveToThirteen => self.twelve_to_thirteen += 1,
            TimeBand::ThirteenToSeventeen => self.thirteen_to_seventeen += 1,
            TimeBand::SeventeenToTwenty => self.seventeen_to_twenty += 1,
            TimeBand::After20 => self.after20 += 1,
        }
    }

    /// Counter value for one band.
    pub fn get(&self, band: TimeBand) -> u64 {
        match band {
            TimeBand::Before9 => self.before9,
            TimeBand::NineToTwelve => self.nine_to_twelve,
            TimeBand::TwelveToThirteen => self.twelve_to_thirteen,
            TimeBand::ThirteenToSeventeen => self.thirteen_to_seventeen,
            TimeBand::SeventeenToTwenty => self.seventeen_to_twenty,
            TimeBand::After20 => self.after20,
        }
    }

    /// Sum of all six counters.
    pub fn sum(&self) -> u64 {
        TimeBand::ALL.iter().map(|band| self.get(*band)).sum()
    }
}

/// One emitted per-day summary.
///
/// Invariant: `total` equals `counts.sum()`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    /// Day label: full weekday name plus unpadded `year-month-day`
    /// (e.g. `Wednesday 2023-3-15`).
    pub day: String,
    /// Per-band counts for the day.
    pub counts: BandCounts,
    /// Total matching calls for the day.
    pub total: u64,
}
