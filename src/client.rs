use dotenv::dotenv;
use reqwest::Client;
use serde::Serialize;
use std::env;
use std::future::Future;
use tracing::{debug, info};

use crate::models::appointment::{Appointment, AppointmentStatus};

/// Persistence gateway to the incubator backend. The backend owns all
/// appointment state; this trait covers the queries and mutations the
/// console needs. Calls may be retried or abandoned by the caller — the
/// core modules themselves never await anything.
pub trait AppointmentGateway {
    fn list_appointments(&self) -> impl Future<Output = Result<Vec<Appointment>, String>> + Send;

    fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> impl Future<Output = Result<(), String>> + Send;

    fn delete_appointment(&self, id: &str) -> impl Future<Output = Result<(), String>> + Send;
}

#[derive(Debug, Serialize)]
struct StatusUpdateRequest {
    status: AppointmentStatus,
}

/// HTTP client for the incubator REST API.
pub struct IncubatorApiClient {
    client: Client,
    endpoint: String,
    api_token: String,
}

impl IncubatorApiClient {
    /// Create a new API client from environment variables.
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            client: Client::new(),
            endpoint: env::var("INCUBATOR_API_ENDPOINT")
                .expect("INCUBATOR_API_ENDPOINT must be set in environment"),
            api_token: env::var("INCUBATOR_API_TOKEN")
                .expect("INCUBATOR_API_TOKEN must be set in environment"),
        }
    }

    pub fn new(endpoint: &str, api_token: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
            api_token: api_token.to_string(),
        }
    }
}

impl AppointmentGateway for IncubatorApiClient {
    /// Fetch the full appointment collection for the current session.
    async fn list_appointments(&self) -> Result<Vec<Appointment>, String> {
        let url = format!("{}/appointments", self.endpoint);

        info!("Fetching appointments from backend");
        debug!("API URL: {}", url);

        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch appointments: {}", e))?;

        info!("Response received with status: {}", res.status());

        let res = res
            .error_for_status()
            .map_err(|e| format!("Backend rejected appointment fetch: {}", e))?;

        res.json::<Vec<Appointment>>()
            .await
            .map_err(|e| format!("Failed to decode appointment list: {}", e))
    }

    /// Persist a status change for a single appointment.
    async fn update_status(&self, id: &str, status: AppointmentStatus) -> Result<(), String> {
        let url = format!("{}/appointments/{}/status", self.endpoint, id);

        info!("Updating appointment {} to status {}", id, status);

        self.client
            .patch(&url)
            .bearer_auth(&self.api_token)
            .json(&StatusUpdateRequest { status })
            .send()
            .await
            .map_err(|e| format!("Failed to update appointment status: {}", e))?
            .error_for_status()
            .map_err(|e| format!("Backend rejected status update: {}", e))?;

        Ok(())
    }

    /// Hard-delete an appointment record.
    async fn delete_appointment(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/appointments/{}", self.endpoint, id);

        info!("Deleting appointment {}", id);

        self.client
            .delete(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| format!("Failed to delete appointment: {}", e))?
            .error_for_status()
            .map_err(|e| format!("Backend rejected appointment deletion: {}", e))?;

        Ok(())
    }
}
