//! Per-day aggregation with flush-on-boundary semantics.
//!
//! The aggregator consumes accepted call timestamps in input order and
//! keeps running band counters for the day currently being read. When the
//! observed calendar day changes, the completed day's [`SummaryRow`] is
//! handed back to the caller and the counters reset. The final in-progress
//! day is only emitted by [`DayAggregator::finalize`]; no record after the
//! end of input triggers the boundary check.
//!
//! Precondition (assumed, not checked): input is chronologically ordered.
//! Out-of-order input produces one row per contiguous run of a day label,
//! not merged rows.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::{BandCounts, SummaryRow, TimeBand};

/// Day identity label: full weekday name plus unpadded `year-month-day`.
///
/// Month and day are deliberately not zero-padded; the label is kept
/// byte-compatible with the prior reports.
pub fn day_id(ts: &NaiveDateTime) -> String {
    format!(
        "{} {}-{}-{}",
        ts.format("%A"),
        ts.year(),
        ts.month(),
        ts.day()
    )
}

/// Stateful per-day accumulator over an ordered stream of call timestamps.
#[derive(Debug, Default)]
pub struct DayAggregator {
    current_day: Option<String>,
    counts: BandCounts,
    day_total: u64,
    grand_total: u64,
}

impl DayAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Running count of all ingested records.
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Consume one accepted call timestamp.
    ///
    /// Returns the completed prior day's row when `ts` crosses a day
    /// boundary; the very first record never emits a row.
    pub fn ingest(&mut self, ts: &NaiveDateTime) -> Option<SummaryRow> {
        let day = day_id(ts);

        let mut emitted = None;
        if self.current_day.as_deref() != Some(day.as_str()) {
            if self.grand_total > 0 {
                emitted = self.flush_current();
            }
            self.current_day = Some(day);
        }

        self.counts.increment(TimeBand::classify(ts.hour()));
        self.day_total += 1;
        self.grand_total += 1;

        emitted
    }

    /// End of input: flush the last in-progress day and report the grand
    /// total. Emits no row if nothing was ever ingested.
    pub fn finalize(mut self) -> (Option<SummaryRow>, u64) {
        let row = if self.grand_total > 0 {
            self.flush_current()
        } else {
            None
        };
        (row, self.grand_total)
    }

    fn flush_current(&mut self) -> Option<SummaryRow> {
        let day = self.current_day.take()?;
        let row = SummaryRow {
            day,
            counts: self.counts,
            total: self.day_total,
        };
        self.counts = BandCounts::default();
        self.day_total = 0;
        Some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn day_id_uses_unpadded_month_and_day() {
        assert_eq!(day_id(&ts(2023, 3, 15, 8)), "Wednesday 2023-3-15");
        assert_eq!(day_id(&ts(2023, 11, 2, 8)), "Thursday 2023-11-2");
    }

    #[test]
    fn first_record_emits_nothing() {
        let mut agg = DayAggregator::new();
        assert!(agg.ingest(&ts(2023, 3, 15, 8)).is_none());
        assert_eq!(agg.grand_total(), 1);
    }

    #[test]
    fn day_boundary_flushes_completed_day() {
        let mut agg = DayAggregator::new();
        assert!(agg.ingest(&ts(2023, 3, 15, 8)).is_none());
        assert!(agg.ingest(&ts(2023, 3, 15, 14)).is_none());

        let row = agg.ingest(&ts(2023, 3, 16, 10)).unwrap();
        assert_eq!(row.day, "Wednesday 2023-3-15");
        assert_eq!(row.counts.before9, 1);
        assert_eq!(row.counts.thirteen_to_seventeen, 1);
        assert_eq!(row.total, 2);

        // New day's counters start fresh.
        let (last, grand) = agg.finalize();
        let last = last.unwrap();
        assert_eq!(last.day, "Thursday 2023-3-16");
        assert_eq!(last.counts.nine_to_twelve, 1);
        assert_eq!(last.total, 1);
        assert_eq!(grand, 3);
    }

    #[test]
    fn three_days_emit_three_rows_in_order() {
        let input = [
            ts(2023, 3, 15, 8),
            ts(2023, 3, 15, 12),
            ts(2023, 3, 16, 18),
            ts(2023, 3, 17, 21),
            ts(2023, 3, 17, 9),
        ];

        let mut agg = DayAggregator::new();
        let mut rows = Vec::new();
        for t in &input {
            rows.extend(agg.ingest(t));
        }
        let (last, grand) = agg.finalize();
        rows.extend(last);

        let days: Vec<&str> = rows.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(
            days,
            [
                "Wednesday 2023-3-15",
                "Thursday 2023-3-16",
                "Friday 2023-3-17"
            ]
        );
        for row in &rows {
            assert_eq!(row.counts.sum(), row.total);
        }
        assert_eq!(grand, rows.iter().map(|r| r.total).sum::<u64>());
        assert_eq!(grand, 5);
    }

    #[test]
    fn finalize_without_input_reports_zero() {
        let agg = DayAggregator::new();
        let (row, grand) = agg.finalize();
        assert!(row.is_none());
        assert_eq!(grand, 0);
    }

    #[test]
    fn out_of_order_input_repeats_day_labels() {
        // Documented consequence of the ordering precondition: a revisited
        // day gets a second row instead of being merged.
        let mut agg = DayAggregator::new();
        let mut rows = Vec::new();
        rows.extend(agg.ingest(&ts(2023, 3, 15, 8)));
        rows.extend(agg.ingest(&ts(2023, 3, 16, 8)));
        rows.extend(agg.ingest(&ts(2023, 3, 15, 9)));
        let (last, _) = agg.finalize();
        rows.extend(last);

        let days: Vec<&str> = rows.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(
            days,
            [
                "Wednesday 2023-3-15",
                "Thursday 2023-3-16",
                "Wednesday 2023-3-15"
            ]
        );
    }
}
