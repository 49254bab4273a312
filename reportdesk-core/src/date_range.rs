//! Validated date ranges and the presets offered next to the date inputs.
//!
//! Calendar rendering is the browser's job (`<input type="date">`); this
//! module only deals in `YYYY-MM-DD` strings and inclusive ranges.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::FormError;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of calendar days. `start <= end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Shortcut buttons shown beside the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Just today
    Today,
    /// Today and the six days before
    Last7Days,
    /// Today and the 29 days before
    Last30Days,
    /// First of this month through today
    ThisMonth,
    /// All of the previous month
    LastMonth,
}

impl Preset {
    /// Presets in button order.
    pub const ALL: [Preset; 5] = [
        Preset::Today,
        Preset::Last7Days,
        Preset::Last30Days,
        Preset::ThisMonth,
        Preset::LastMonth,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Today => "Today",
            Preset::Last7Days => "Last 7 days",
            Preset::Last30Days => "Last 30 days",
            Preset::ThisMonth => "This month",
            Preset::LastMonth => "Last month",
        }
    }

    /// Resolve against `today`.
    pub fn range(self, today: NaiveDate) -> DateRange {
        let (start, end) = match self {
            Preset::Today => (today, today),
            Preset::Last7Days => (today - Duration::days(6), today),
            Preset::Last30Days => (today - Duration::days(29), today),
            Preset::ThisMonth => (first_of_month(today), today),
            Preset::LastMonth => {
                let end = first_of_month(today) - Duration::days(1);
                (first_of_month(end), end)
            }
        };
        DateRange { start, end }
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.day0()))
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FormError> {
        if start > end {
            return Err(FormError::InvertedRange);
        }
        Ok(Self { start, end })
    }

    /// Build from the two date input values.
    pub fn parse(start: &str, end: &str) -> Result<Self, FormError> {
        Self::new(parse_day(start)?, parse_day(end)?)
    }

    /// First day
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Which preset (if any) produces this range for `today`.
    pub fn matching_preset(&self, today: NaiveDate) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.range(today) == *self)
    }

    /// `(start, end)` as input values.
    pub fn to_input_values(&self) -> (String, String) {
        (format_day(self.start), format_day(self.end))
    }

    /// Human label, e.g. "Mar 1 - Mar 31, 2025".
    pub fn label(&self) -> String {
        if self.start == self.end {
            self.start.format("%b %-d, %Y").to_string()
        } else if self.start.year() == self.end.year() {
            format!(
                "{} - {}",
                self.start.format("%b %-d"),
                self.end.format("%b %-d, %Y")
            )
        } else {
            format!(
                "{} - {}",
                self.start.format("%b %-d, %Y"),
                self.end.format("%b %-d, %Y")
            )
        }
    }
}

/// Parse a `YYYY-MM-DD` input value.
pub fn parse_day(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw.trim(), ISO_FORMAT)
        .map_err(|_| FormError::InvalidDate(raw.trim().to_owned()))
}

/// Format a day as an input value.
pub fn format_day(day: NaiveDate) -> String {
    day.format(ISO_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            DateRange::new(day(2025, 3, 2), day(2025, 3, 1)),
            Err(FormError::InvertedRange)
        );
        assert!(DateRange::new(day(2025, 3, 1), day(2025, 3, 1)).is_ok());
    }

    #[test]
    fn parse_reports_bad_input() {
        assert_eq!(
            DateRange::parse("2025-13-01", "2025-12-01"),
            Err(FormError::InvalidDate("2025-13-01".into()))
        );
        let range = DateRange::parse(" 2025-01-01", "2025-01-31 ").expect("valid");
        assert_eq!(range.days(), 31);
    }

    #[test]
    fn presets_resolve_relative_to_today() {
        let today = day(2025, 3, 15);
        assert_eq!(Preset::Today.range(today).days(), 1);
        assert_eq!(Preset::Last7Days.range(today).start(), day(2025, 3, 9));
        assert_eq!(Preset::Last30Days.range(today).days(), 30);
        assert_eq!(Preset::ThisMonth.range(today).start(), day(2025, 3, 1));

        let last_month = Preset::LastMonth.range(today);
        assert_eq!(last_month.start(), day(2025, 2, 1));
        assert_eq!(last_month.end(), day(2025, 2, 28));
    }

    #[test]
    fn last_month_crosses_year_boundary() {
        let range = Preset::LastMonth.range(day(2025, 1, 10));
        assert_eq!(range.start(), day(2024, 12, 1));
        assert_eq!(range.end(), day(2024, 12, 31));
    }

    #[test]
    fn matching_preset_is_found() {
        let today = day(2025, 3, 15);
        let range = DateRange::parse("2025-03-09", "2025-03-15").expect("valid");
        assert_eq!(range.matching_preset(today), Some(Preset::Last7Days));
        let custom = DateRange::parse("2025-03-02", "2025-03-03").expect("valid");
        assert_eq!(custom.matching_preset(today), None);
    }

    #[test]
    fn labels_collapse_shared_year() {
        let range = DateRange::parse("2025-03-01", "2025-03-31").expect("valid");
        assert_eq!(range.label(), "Mar 1 - Mar 31, 2025");
        let single = DateRange::parse("2025-03-01", "2025-03-01").expect("valid");
        assert_eq!(single.label(), "Mar 1, 2025");
        let spanning = DateRange::parse("2024-12-30", "2025-01-02").expect("valid");
        assert_eq!(spanning.label(), "Dec 30, 2024 - Jan 2, 2025");
    }

    #[test]
    fn input_values_round_trip_format() {
        let range = DateRange::parse("2025-03-01", "2025-03-31").expect("valid");
        assert_eq!(
            range.to_input_values(),
            ("2025-03-01".to_string(), "2025-03-31".to_string())
        );
    }
}
