use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an appointment.
///
/// `Declined`, `Completed` and `Cancelled` are terminal: once reached,
/// no further transitions are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Accepted,
        AppointmentStatus::Declined,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    /// Parse the wire/UI form of a status. Unknown values yield `None`
    /// rather than panicking; callers decide how to fail closed.
    pub fn parse(value: &str) -> Option<AppointmentStatus> {
        match value {
            "pending" => Some(AppointmentStatus::Pending),
            "accepted" => Some(AppointmentStatus::Accepted),
            "declined" => Some(AppointmentStatus::Declined),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Accepted => "accepted",
            AppointmentStatus::Declined => "declined",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is acting on an appointment. Admins manage the program calendar;
/// incubatees manage only their own bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Incubatee,
}

/// A scheduled mentor/incubatee meeting as delivered by the backend API.
///
/// The backend owns these records; this struct is a cache-side copy.
/// `status` is the only field that is ever mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub mentor_id: String,
    pub mentor_name: String,
    pub incubatee_name: String,
    pub startup_name: String,
    pub date: DateTime<Utc>,
    // Some backend records predate the requested_at column and omit it.
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
    pub status: AppointmentStatus,
}
