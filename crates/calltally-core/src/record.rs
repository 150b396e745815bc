//! Record matching for call-log lines.
//!
//! A candidate line is eleven comma-delimited fields. Only two fields are
//! semantically used: the date text (field 1) and the category text
//! (field 4); the rest are opaque. Matching uses greedy `(.*)` fields, so
//! earlier fields may legally swallow embedded commas. That is tolerant
//! rather than strictly CSV-correct, and it is the contract the upstream
//! export has always been read with.

use std::sync::LazyLock;

use regex::Regex;

/// Category substring a record must carry to be counted.
pub const TARGET_CATEGORY: &str = "RG General";

/// Eleven greedy comma-separated fields.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*),(.*),(.*),(.*),(.*),(.*),(.*),(.*),(.*),(.*),(.*)")
        .expect("record pattern is valid")
});

/// The two semantically used fields of one matched log line.
///
/// Borrows from the input line; lives only while the line is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Field 1: localized date text.
    pub date_text: &'a str,
    /// Field 4: call category text.
    pub category: &'a str,
}

impl RawRecord<'_> {
    /// Whether this record should be forwarded into aggregation: the date
    /// text must be non-empty and the category must contain `target` as a
    /// substring (containment, not equality).
    pub fn accepts(&self, target: &str) -> bool {
        !self.date_text.is_empty() && self.category.contains(target)
    }
}

/// Match one line against the eleven-field record shape.
///
/// Returns `None` for lines that do not fit (fewer than ten commas);
/// such lines are simply not records and carry no error.
pub fn match_record(line: &str) -> Option<RawRecord<'_>> {
    let caps = LINE_RE.captures(line)?;

    Some(RawRecord {
        date_text: caps.get(1).map_or("", |m| m.as_str()),
        category: caps.get(4).map_or("", |m| m.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_well_formed_line() {
        let record =
            match_record("2023-03-15 8:15:00 a.m.,555-0101,555-0199,RG General,a,b,c,d,e,f,g")
                .unwrap();
        assert_eq!(record.date_text, "2023-03-15 8:15:00 a.m.");
        assert_eq!(record.category, "RG General");
    }

    #[test]
    fn match_too_few_fields() {
        assert_eq!(match_record("2023-03-15 8:15:00 a.m.,x,y,RG General"), None);
        assert_eq!(match_record("garbage"), None);
    }

    #[test]
    fn match_greedy_fields_swallow_extra_commas() {
        // Twelve fields: the first greedy field takes the extra comma.
        let record = match_record("a,b,c,d,e,f,g,h,i,j,k,l").unwrap();
        assert_eq!(record.date_text, "a,b");
        assert_eq!(record.category, "e");
    }

    #[test]
    fn accepts_substring_category() {
        let record = RawRecord {
            date_text: "2023-03-15 8:15:00 a.m.",
            category: "RG General Inbound",
        };
        assert!(record.accepts(TARGET_CATEGORY));
    }

    #[test]
    fn rejects_other_category() {
        let record = RawRecord {
            date_text: "2023-03-15 8:15:00 a.m.",
            category: "RG Special",
        };
        assert!(!record.accepts(TARGET_CATEGORY));
    }

    #[test]
    fn rejects_empty_date_text() {
        let record = RawRecord {
            date_text: "",
            category: "RG General",
        };
        assert!(!record.accepts(TARGET_CATEGORY));
    }
}
