//! Day schedule of a provider.
//!
//! Splits the appointments of the selected day into morning and afternoon
//! sections and picks the appointment that comes next. Everything here is a
//! pure function over the snapshot returned by the API; the caller chooses the
//! time zone used to read the hour of each appointment.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};

use crate::models::Appointment;

/// First hour that belongs to the afternoon section
pub const AFTERNOON_START_HOUR: u32 = 12;

/// Appointments of one day grouped by period, in the order they were received
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedule<'a> {
    pub morning: Vec<&'a Appointment>,
    pub afternoon: Vec<&'a Appointment>,
}

impl<'a> DaySchedule<'a> {
    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }
}

/// Hour of the appointment as seen in `tz`.
pub fn local_hour<Tz: TimeZone>(appointment: &Appointment, tz: &Tz) -> u32 {
    appointment.date.with_timezone(tz).hour()
}

/// Split appointments into morning (hour < 12) and afternoon (hour >= 12).
///
/// Every appointment lands in exactly one section and relative order is kept.
pub fn partition<'a, Tz: TimeZone>(appointments: &'a [Appointment], tz: &Tz) -> DaySchedule<'a> {
    let (morning, afternoon): (Vec<_>, Vec<_>) = appointments
        .iter()
        .partition(|appointment| local_hour(appointment, tz) < AFTERNOON_START_HOUR);

    let schedule = DaySchedule { morning, afternoon };
    tracing::trace!(
        morning = schedule.morning.len(),
        afternoon = schedule.afternoon.len(),
        "Partitioned day schedule"
    );
    schedule
}

/// First appointment in input order that starts strictly after `now`.
///
/// Only meaningful when the selected day is today, so any other day yields
/// `None`. The list is not sorted here: callers pass it in chronological
/// order for the result to be the soonest appointment.
pub fn next_appointment<'a, Tz: TimeZone>(
    appointments: &'a [Appointment],
    selected_date: NaiveDate,
    now: &DateTime<Tz>,
) -> Option<&'a Appointment> {
    if now.date_naive() != selected_date {
        return None;
    }

    appointments
        .iter()
        .find(|appointment| appointment.date > now.with_timezone(&chrono::Utc))
}

/// "HH:MM" time of the appointment in `tz`.
pub fn format_hour<Tz: TimeZone>(appointment: &Appointment, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    appointment.date.with_timezone(tz).format("%H:%M").to_string()
}
