//! Types and logic shared by the GoBarber web client.
//!
//! Everything here is plain Rust with no browser dependency so it can be
//! unit tested natively.

pub mod api;
pub mod calendar;
pub mod locale;
pub mod models;
pub mod schedule;
pub mod validation;

pub use calendar::YearMonth;
pub use locale::{format_month_title, format_selected_date_label, DisplayLocale, SelectedDateLabel};
pub use models::{Appointment, AppointmentClient, DayAvailability, Session, User};
pub use schedule::{next_appointment, partition, DaySchedule};
pub use validation::{FormErrors, ValidationError};
