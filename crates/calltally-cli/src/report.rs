//! Fixed-width table rendering.
//!
//! Column layout is byte-compatible with the reports this tool replaces:
//! a left-justified 20-column day label, seven right-justified 10-column
//! count columns, single-space separators and one trailing space per line.

use calltally_core::{SummaryRow, TimeBand};

/// Header line: `Date` plus the six band labels and `Total`.
pub fn format_header() -> String {
    format!(
        "{:<20} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} ",
        "Date",
        TimeBand::Before9.label(),
        TimeBand::NineToTwelve.label(),
        TimeBand::TwelveToThirteen.label(),
        TimeBand::ThirteenToSeventeen.label(),
        TimeBand::SeventeenToTwenty.label(),
        TimeBand::After20.label(),
        "Total",
    )
}

/// One per-day row, band columns in report order, total last.
pub fn format_row(row: &SummaryRow) -> String {
    format!(
        "{:<20} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} ",
        row.day,
        row.counts.before9,
        row.counts.nine_to_twelve,
        row.counts.twelve_to_thirteen,
        row.counts.thirteen_to_seventeen,
        row.counts.seventeen_to_twenty,
        row.counts.after20,
        row.total,
    )
}

/// Grand-total trailer. The double space after the colon is a list-print
/// artifact of the prior reports, preserved for compatibility.
pub fn format_grand_total(total: u64) -> String {
    format!("Appels total:  {}", total)
}
