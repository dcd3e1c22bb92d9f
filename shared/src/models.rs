use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated provider (or a freshly registered account)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Client identity attached to an appointment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentClient {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A scheduled booking on the provider's agenda
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// The backend calls the booking client `user`
    #[serde(rename = "user")]
    pub client: AppointmentClient,
}

/// Whether the provider still has free slots on a day of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: u32,
    #[serde(alias = "availability")]
    pub available: bool,
}

/// Token and user returned by a successful sign in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}
