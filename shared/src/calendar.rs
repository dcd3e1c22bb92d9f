//! Month calendar used to pick the schedule day.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::models::DayAvailability;

/// One calendar row, Sunday first; `None` pads days outside the month
pub type Week = [Option<NaiveDate>; 7];

/// Year and 1-based month shown by the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Move by `delta` months; `None` when the result is out of range.
    pub fn shift(&self, delta: i32) -> Option<Self> {
        let first = self.first_day()?;
        let shifted = if delta >= 0 {
            first.checked_add_months(Months::new(delta.unsigned_abs()))?
        } else {
            first.checked_sub_months(Months::new(delta.unsigned_abs()))?
        };
        Some(Self::of(shifted))
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Weeks covering the month; empty when `month` is not a real month.
pub fn month_grid(month: YearMonth) -> Vec<Week> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut week: Week = [None; 7];
    let mut column = first.weekday().num_days_from_sunday() as usize;

    let days = first
        .iter_days()
        .take_while(|day| day.month() == month.month && day.year() == month.year);
    for day in days {
        week[column] = Some(day);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column != 0 {
        weeks.push(week);
    }
    weeks
}

/// Providers do not work on weekends.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether `date` can be chosen given the availability of its month.
///
/// Days the availability list does not mention count as available.
pub fn is_selectable(date: NaiveDate, availability: &[DayAvailability]) -> bool {
    is_working_day(date)
        && availability
            .iter()
            .find(|entry| entry.day == date.day())
            .map_or(true, |entry| entry.available)
}

/// Dates of the month the provider has marked as unavailable.
pub fn disabled_days(month: YearMonth, availability: &[DayAvailability]) -> Vec<NaiveDate> {
    availability
        .iter()
        .filter(|entry| !entry.available)
        .filter_map(|entry| month.day(entry.day))
        .collect()
}

/// Months before `from` cannot be navigated to.
pub fn can_show(month: YearMonth, from: YearMonth) -> bool {
    month >= from
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_grid_march_2021() {
        let weeks = month_grid(YearMonth::new(2021, 3));

        // March 1st 2021 was a Monday
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], Some(date(2021, 3, 1)));
        assert_eq!(weeks.len(), 5);

        let days: Vec<NaiveDate> = weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 31);
        assert_eq!(days.last(), Some(&date(2021, 3, 31)));
    }

    #[test]
    fn test_month_grid_starting_on_sunday() {
        // August 2021 starts on a Sunday
        let weeks = month_grid(YearMonth::new(2021, 8));
        assert_eq!(weeks[0][0], Some(date(2021, 8, 1)));
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[4][2], Some(date(2021, 8, 31)));
        assert_eq!(weeks[4][3], None);
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(month_grid(YearMonth::new(2021, 13)).is_empty());
    }

    #[test]
    fn test_weekends_not_selectable() {
        assert!(!is_selectable(date(2021, 3, 13), &[]));
        assert!(!is_selectable(date(2021, 3, 14), &[]));
        assert!(is_selectable(date(2021, 3, 15), &[]));
    }

    #[test]
    fn test_unavailable_weekday_not_selectable() {
        let availability = vec![
            DayAvailability { day: 15, available: false },
            DayAvailability { day: 16, available: true },
        ];
        assert!(!is_selectable(date(2021, 3, 15), &availability));
        assert!(is_selectable(date(2021, 3, 16), &availability));
        assert!(is_selectable(date(2021, 3, 17), &availability));
    }

    #[test]
    fn test_disabled_days_skips_invalid_entries() {
        let availability = vec![
            DayAvailability { day: 3, available: false },
            DayAvailability { day: 4, available: true },
            DayAvailability { day: 30, available: false },
        ];
        assert_eq!(
            disabled_days(YearMonth::new(2021, 2), &availability),
            vec![date(2021, 2, 3)]
        );
    }

    #[test]
    fn test_disabled_days_agree_with_is_selectable() {
        let month = YearMonth::new(2021, 3);
        let availability = vec![
            DayAvailability { day: 1, available: false },
            DayAvailability { day: 6, available: false },
            DayAvailability { day: 17, available: true },
        ];
        let unavailable = disabled_days(month, &availability);

        for day in month_grid(month).iter().flatten().flatten() {
            let cell_enabled = is_working_day(*day) && !unavailable.contains(day);
            assert_eq!(cell_enabled, is_selectable(*day, &availability), "{}", day);
        }
    }

    #[test]
    fn test_shift_across_years() {
        let december = YearMonth::new(2021, 12);
        assert_eq!(december.shift(1), Some(YearMonth::new(2022, 1)));
        assert_eq!(december.shift(-12), Some(YearMonth::new(2020, 12)));
        assert_eq!(YearMonth::new(2021, 0).shift(1), None);
    }

    #[test]
    fn test_cannot_show_past_months() {
        let from = YearMonth::new(2021, 3);
        assert!(!can_show(YearMonth::new(2021, 2), from));
        assert!(can_show(YearMonth::new(2021, 3), from));
        assert!(can_show(YearMonth::new(2022, 1), from));
    }
}
