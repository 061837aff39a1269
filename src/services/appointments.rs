use tracing::{info, warn};

use crate::client::AppointmentGateway;
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::models::query::ListQuery;
use crate::notify::{NotificationSink, Severity};
use crate::services::policy;
use crate::services::projector;
use crate::services::store::{AppointmentStore, StatusChange};

/// Glue between the backend gateway, the local cache and the toast surface.
///
/// One service instance per screen/session. The flow for a transition
/// intent is: validate against the cached record and the policy, persist
/// through the gateway, then apply the change to the cache. Invalid intents
/// never reach the network.
pub struct AppointmentService<G, S> {
    gateway: G,
    sink: S,
    store: AppointmentStore,
}

impl<G: AppointmentGateway, S: NotificationSink> AppointmentService<G, S> {
    pub fn new(gateway: G, sink: S) -> Self {
        Self {
            gateway,
            sink,
            store: AppointmentStore::new(),
        }
    }

    /// Refetch the full appointment collection and replace the cache.
    /// On gateway failure the previous cache is kept so the screen keeps
    /// showing the last known state.
    pub async fn refresh(&mut self) -> Result<usize, String> {
        match self.gateway.list_appointments().await {
            Ok(records) => {
                let count = records.len();
                self.store.load(records);
                info!("Refreshed appointment cache with {} records", count);
                Ok(count)
            }
            Err(e) => {
                self.sink
                    .notify(Severity::Error, "Could not refresh appointments");
                Err(e)
            }
        }
    }

    /// Handle a transition intent from the UI.
    ///
    /// Returns the local outcome; a gateway failure after successful
    /// validation is an `Err` and leaves the cache unchanged (the next
    /// refresh reconciles).
    pub async fn request_transition(
        &mut self,
        id: &str,
        target: AppointmentStatus,
    ) -> Result<StatusChange, String> {
        let Some(record) = self.store.get(id) else {
            warn!("Transition requested for unknown appointment {}", id);
            self.sink
                .notify(Severity::Warning, "Appointment no longer exists");
            return Ok(StatusChange::NotFound);
        };

        if !policy::can_transition(record.status, target) {
            self.sink.notify(
                Severity::Warning,
                &format!("Cannot move appointment from {} to {}", record.status, target),
            );
            return Ok(StatusChange::Rejected);
        }

        self.gateway.update_status(id, target).await.map_err(|e| {
            self.sink
                .notify(Severity::Error, "Failed to save appointment status");
            e
        })?;

        // Gateway confirmed; mirror the change locally.
        let outcome = self.store.apply_status_change(id, target);
        self.sink
            .notify(Severity::Info, &format!("Appointment {}", target));
        Ok(outcome)
    }

    /// Hard-delete an appointment. Live records (pending/accepted) are
    /// refused locally; deleting an id absent from the cache is a no-op.
    pub async fn delete_appointment(&mut self, id: &str) -> Result<bool, String> {
        let Some(record) = self.store.get(id) else {
            return Ok(false);
        };

        if !policy::can_delete(record.status) {
            self.sink.notify(
                Severity::Warning,
                "Active appointments must be cancelled before deletion",
            );
            return Ok(false);
        }

        self.gateway.delete_appointment(id).await.map_err(|e| {
            self.sink
                .notify(Severity::Error, "Failed to delete appointment");
            e
        })?;

        Ok(self.store.remove(id))
    }

    /// Project the cached collection for a set of listing controls.
    pub fn view(&self, query: &ListQuery) -> Vec<Appointment> {
        projector::project(self.store.appointments(), query)
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }
}
