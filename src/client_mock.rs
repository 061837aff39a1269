use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;
use std::sync::{Arc, Mutex};

use crate::client::AppointmentGateway;
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::notify::{NotificationSink, Severity};

// Mock the toast surface so tests can assert on emitted messages
mock! {
    pub Sink {}

    impl NotificationSink for Sink {
        fn notify(&self, severity: Severity, message: &str);
    }
}

#[derive(Default)]
struct FakeGatewayState {
    appointments: Vec<Appointment>,
    status_updates: Vec<(String, AppointmentStatus)>,
    deletions: Vec<String>,
    fail: bool,
}

/// In-memory stand-in for the incubator backend. Records every mutation it
/// receives so tests can assert which calls reached the gateway, and can be
/// switched into a failing mode to simulate network errors. Clones share
/// state, so tests keep a handle after moving a clone into a service.
#[derive(Clone)]
pub struct FakeGateway {
    state: Arc<Mutex<FakeGatewayState>>,
}

impl FakeGateway {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeGatewayState {
                appointments,
                ..FakeGatewayState::default()
            })),
        }
    }

    /// Make every subsequent call return an error.
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().unwrap().fail = failing;
    }

    pub fn status_updates(&self) -> Vec<(String, AppointmentStatus)> {
        self.state.lock().unwrap().status_updates.clone()
    }

    pub fn deletions(&self) -> Vec<String> {
        self.state.lock().unwrap().deletions.clone()
    }
}

impl AppointmentGateway for FakeGateway {
    async fn list_appointments(&self) -> Result<Vec<Appointment>, String> {
        let state = self.state.lock().unwrap();
        if state.fail {
            return Err("simulated backend failure".to_string());
        }
        Ok(state.appointments.clone())
    }

    async fn update_status(&self, id: &str, status: AppointmentStatus) -> Result<(), String> {
        let mut state = self.state.lock().unwrap();
        if state.fail {
            return Err("simulated backend failure".to_string());
        }
        state.status_updates.push((id.to_string(), status));
        if let Some(record) = state.appointments.iter_mut().find(|a| a.id == id) {
            record.status = status;
        }
        Ok(())
    }

    async fn delete_appointment(&self, id: &str) -> Result<(), String> {
        let mut state = self.state.lock().unwrap();
        if state.fail {
            return Err("simulated backend failure".to_string());
        }
        state.deletions.push(id.to_string());
        state.appointments.retain(|a| a.id != id);
        Ok(())
    }
}

/// Notification sink that records every message it receives. Clones share
/// the message log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

pub fn sample_date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap()
}

/// Build a test appointment with sensible defaults.
pub fn sample_appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.to_string(),
        mentor_id: format!("mentor_{}", id),
        mentor_name: "Alice Mentor".to_string(),
        incubatee_name: "Bob Founder".to_string(),
        startup_name: "Test Startup".to_string(),
        date: sample_date(15),
        requested_at: Some(sample_date(1)),
        status,
    }
}
