use tracing::{debug, warn};

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::services::policy;

/// Outcome of a local status change attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The record was found and the transition was applied.
    Applied,
    /// The record was found but the transition is not legal from its
    /// current status. The cache is untouched.
    Rejected,
    /// No record with that id is cached. Expected under concurrent
    /// refetches, so this is a no-op rather than an error.
    NotFound,
}

/// In-memory cache of the appointment collection for one screen/session.
///
/// The backend is the source of truth; this cache is disposable and can be
/// rebuilt from a full refetch at any time via [`AppointmentStore::load`].
/// Records keep their load order, which the projector relies on for stable
/// tie-breaking.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire cached collection. Last write wins; no merge.
    /// Duplicate ids in the input are the caller's fault.
    pub fn load(&mut self, records: Vec<Appointment>) {
        debug!("Loading {} appointments into store", records.len());
        self.appointments = records;
    }

    /// Apply a status change to the cached record with the given id.
    ///
    /// Only the `status` field is touched; all other fields are immutable
    /// post-creation. Illegal transitions and unknown ids leave the cache
    /// unchanged and are reported through the return value.
    pub fn apply_status_change(&mut self, id: &str, new_status: AppointmentStatus) -> StatusChange {
        let Some(record) = self.appointments.iter_mut().find(|a| a.id == id) else {
            warn!("Status change for unknown appointment id {}, ignoring", id);
            return StatusChange::NotFound;
        };

        if !policy::can_transition(record.status, new_status) {
            warn!(
                "Rejected transition {} -> {} for appointment {}",
                record.status, new_status, id
            );
            return StatusChange::Rejected;
        }

        debug!(
            "Appointment {} status {} -> {}",
            id, record.status, new_status
        );
        record.status = new_status;
        StatusChange::Applied
    }

    /// Remove a record from the cache. Idempotent: removing an absent id
    /// is a no-op and returns `false`.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);
        before != self.appointments.len()
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
