pub mod appointment_item;
pub mod calendar;
pub mod form;
pub mod header;
pub mod schedule_section;
pub mod toast_container;
