//! Calendar helpers shared by both engines.

use chrono::{Month, NaiveDate};

/// Number of month buckets in a calendar year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Returns the long English name for a zero-based month index.
///
/// Out-of-range indexes yield an empty string.
///
/// # Examples
///
/// ```
/// use campus_engine::calculation::month_name;
///
/// assert_eq!(month_name(0), "January");
/// assert_eq!(month_name(11), "December");
/// assert_eq!(month_name(12), "");
/// ```
pub fn month_name(month0: u32) -> &'static str {
    month0
        .checked_add(1)
        .and_then(|month| u8::try_from(month).ok())
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name())
        .unwrap_or("")
}

/// Returns the first and last day of a zero-based month, or `None` when the
/// month index or year is out of chrono's range.
///
/// # Examples
///
/// ```
/// use campus_engine::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_bounds(2024, 1).unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn month_bounds(year: i32, month0: u32) -> Option<(NaiveDate, NaiveDate)> {
    let month = month0.checked_add(1)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = if month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt()?
    };
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_all_month_names() {
        let names: Vec<&str> = (0..12).map(month_name).collect();
        assert_eq!(
            names,
            vec![
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December"
            ]
        );
    }

    #[test]
    fn test_out_of_range_month_is_empty() {
        assert_eq!(month_name(12), "");
        assert_eq!(month_name(u32::MAX), "");
    }

    #[test]
    fn test_month_bounds_december_and_leap_february() {
        let (first, last) = month_bounds(2025, 11).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        let (_, last) = month_bounds(2025, 1).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_month_bounds_at_calendar_limits() {
        let (_, last) = month_bounds(NaiveDate::MAX.year(), 11).unwrap();
        assert_eq!(last, NaiveDate::MAX);
        assert!(month_bounds(2025, 12).is_none());
        assert!(month_bounds(NaiveDate::MAX.year() + 1, 0).is_none());
    }
}
