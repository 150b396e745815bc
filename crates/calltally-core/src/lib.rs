//! # calltally-core
//!
//! Call-log parsing and per-day time-band aggregation.
//!
//! The library turns lines of a comma-delimited phone-call log into a
//! per-day summary: records of a target category are matched, their
//! localized 12-hour timestamps extracted, and each call is counted into
//! one of six fixed time-of-day bands. A summary row is produced for each
//! calendar day, in the order days appear in the input.
//!
//! ## Example
//!
//! ```rust
//! use calltally_core::prelude::*;
//!
//! let line = "2023-03-15 2:30:00 p.m.,555-0101,555-0199,RG General,ag7,0:04,ans,in,HQ,web,c42";
//!
//! let record = match_record(line).unwrap();
//! assert!(record.accepts(TARGET_CATEGORY));
//!
//! let ts = parse_call_date(record.date_text).unwrap();
//!
//! let mut agg = DayAggregator::new();
//! agg.ingest(&ts);
//! let (row, grand_total) = agg.finalize();
//!
//! assert_eq!(row.unwrap().counts.thirteen_to_seventeen, 1);
//! assert_eq!(grand_total, 1);
//! ```

pub mod aggregate;
pub mod error;
pub mod models;
pub mod parse;
pub mod record;

// Re-export commonly used types at the crate root
pub use aggregate::{DayAggregator, day_id};
pub use error::{ParseError, Result};
pub use models::{BandCounts, SummaryRow, TimeBand};
pub use parse::parse_call_date;
pub use record::{RawRecord, TARGET_CATEGORY, match_record};

/// Prelude module for convenient imports.
///
/// ```
/// use calltally_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{DayAggregator, day_id};
    pub use crate::error::{ParseError, Result};
    pub use crate::models::*;
    pub use crate::parse::parse_call_date;
    pub use crate::record::{RawRecord, TARGET_CATEGORY, match_record};
}
