//! Display locale and the selected-day label of the dashboard.

use std::fmt;
use std::str::FromStr;

use chrono::{Locale, NaiveDate, NaiveTime};
use thiserror::Error;

use crate::calendar::YearMonth;

/// Languages the dashboard can render dates in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayLocale {
    #[default]
    EnUs,
    PtBr,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl DisplayLocale {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayLocale::EnUs => "en-US",
            DisplayLocale::PtBr => "pt-BR",
        }
    }

    fn chrono_locale(&self) -> Locale {
        match self {
            DisplayLocale::EnUs => Locale::en_US,
            DisplayLocale::PtBr => Locale::pt_BR,
        }
    }

    /// strftime pattern for the "day 15 of March" part of the label
    fn day_and_month_pattern(&self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "day %d of %B",
            DisplayLocale::PtBr => "dia %d de %B",
        }
    }

    /// Column headers of the month calendar, Sunday first
    pub fn weekday_initials(&self) -> [&'static str; 7] {
        match self {
            DisplayLocale::EnUs => ["S", "M", "T", "W", "T", "F", "S"],
            DisplayLocale::PtBr => ["D", "S", "T", "Q", "Q", "S", "S"],
        }
    }

    /// Word shown before the label when the selected day is today
    pub fn today_word(&self) -> &'static str {
        match self {
            DisplayLocale::EnUs => "Today",
            DisplayLocale::PtBr => "Hoje",
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayLocale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_lowercase().as_str() {
            "en" | "en-us" => Ok(DisplayLocale::EnUs),
            "pt" | "pt-br" => Ok(DisplayLocale::PtBr),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

/// Text shown above the schedule for the selected day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDateLabel {
    pub day_and_month: String,
    pub weekday: String,
    pub is_today: bool,
}

/// Build the selected-day label. `today` is passed in so the result only
/// depends on its arguments.
pub fn format_selected_date_label(
    selected_date: NaiveDate,
    today: NaiveDate,
    locale: DisplayLocale,
) -> SelectedDateLabel {
    let at_midnight = selected_date.and_time(NaiveTime::MIN).and_utc();
    let chrono_locale = locale.chrono_locale();

    SelectedDateLabel {
        day_and_month: at_midnight
            .format_localized(locale.day_and_month_pattern(), chrono_locale)
            .to_string(),
        weekday: at_midnight.format_localized("%A", chrono_locale).to_string(),
        is_today: selected_date == today,
    }
}

/// Calendar caption such as "March 2021".
pub fn format_month_title(month: YearMonth, locale: DisplayLocale) -> String {
    match month.first_day() {
        Some(first) => first
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized("%B %Y", locale.chrono_locale())
            .to_string(),
        None => format!("{:02}/{}", month.month, month.year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, 15).unwrap()
    }

    #[test]
    fn test_label_en_us() {
        let label = format_selected_date_label(march_15(), march_15(), DisplayLocale::EnUs);
        assert_eq!(label.day_and_month, "day 15 of March");
        assert_eq!(label.weekday, "Monday");
        assert!(label.is_today);
    }

    #[test]
    fn test_label_pt_br() {
        let tomorrow = NaiveDate::from_ymd_opt(2021, 3, 16).unwrap();
        let label = format_selected_date_label(march_15(), tomorrow, DisplayLocale::PtBr);
        assert_eq!(label.day_and_month, "dia 15 de março");
        assert!(label.weekday.starts_with("segunda"));
        assert!(!label.is_today);
    }

    #[test]
    fn test_day_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2021, 4, 2).unwrap();
        let label = format_selected_date_label(date, march_15(), DisplayLocale::EnUs);
        assert_eq!(label.day_and_month, "day 02 of April");
        assert_eq!(label.weekday, "Friday");
    }

    #[test]
    fn test_month_title() {
        assert_eq!(
            format_month_title(YearMonth::new(2021, 3), DisplayLocale::EnUs),
            "March 2021"
        );
        assert_eq!(
            format_month_title(YearMonth::new(2021, 3), DisplayLocale::PtBr),
            "março 2021"
        );
        assert_eq!(
            format_month_title(YearMonth::new(2021, 13), DisplayLocale::EnUs),
            "13/2021"
        );
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!("en-US".parse::<DisplayLocale>(), Ok(DisplayLocale::EnUs));
        assert_eq!("pt_BR".parse::<DisplayLocale>(), Ok(DisplayLocale::PtBr));
        assert_eq!(" PT-br ".parse::<DisplayLocale>(), Ok(DisplayLocale::PtBr));
        assert_eq!("pt".parse::<DisplayLocale>(), Ok(DisplayLocale::PtBr));
        assert_eq!(
            "fr-FR".parse::<DisplayLocale>(),
            Err(UnsupportedLocale("fr-FR".to_string()))
        );
    }

    #[test]
    fn test_locale_display_round_trips() {
        for locale in [DisplayLocale::EnUs, DisplayLocale::PtBr] {
            assert_eq!(locale.to_string().parse::<DisplayLocale>(), Ok(locale));
        }
    }
}
