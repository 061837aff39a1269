//! Incubator Console Appointment Core
//!
//! This library holds the business core of the incubator program console:
//! the appointment lifecycle rules, the per-screen appointment cache and
//! the deterministic list projection behind every appointment screen
//! (admin calendar, admin list, incubatee "my appointments").
//!
//! # Modules
//!
//! - `models`: appointment records, statuses, roles and listing controls
//! - `services::policy`: the status transition rules
//! - `services::store`: the refetchable in-memory appointment cache
//! - `services::projector`: filter + search + sort projection
//! - `services::appointments`: gateway/cache/notification glue
//! - `client`: HTTP gateway to the incubator REST API
//! - `notify`: user-facing notification surface
//!
//! The backend API is the source of truth for all state; everything here
//! is a disposable client-side projection of it.

pub mod client;
pub mod models;
pub mod notify;
pub mod services;

#[cfg(test)]
pub mod client_mock;

// Re-export the main API types for ease of use
pub use client::{AppointmentGateway, IncubatorApiClient};
pub use models::appointment::{Appointment, AppointmentStatus, Role};
pub use models::query::{ListQuery, SortKey, SortOrder, StatusFilter};
pub use notify::{NotificationSink, Severity, TracingSink};
pub use services::appointments::AppointmentService;
pub use services::store::{AppointmentStore, StatusChange};
