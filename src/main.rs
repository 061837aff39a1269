use std::env;

use tracing::{info, Level};

use incubator_console::{
    AppointmentService, IncubatorApiClient, ListQuery, TracingSink,
};

/// One-shot console listing: fetch the appointment collection from the
/// backend and print the projection the given controls would render.
/// Listing controls come from the environment so the binary can be driven
/// from scripts the same way the UI drives the core.
#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Listing controls, all optional and fail-closed to defaults
    let status_filter = env::var("CONSOLE_STATUS_FILTER").unwrap_or_else(|_| "all".to_string());
    let search_text = env::var("CONSOLE_SEARCH_TEXT").unwrap_or_default();
    let sort_key = env::var("CONSOLE_SORT_KEY").unwrap_or_else(|_| "appointment_date".to_string());
    let sort_order = env::var("CONSOLE_SORT_ORDER").unwrap_or_else(|_| "asc".to_string());

    let query = ListQuery::from_params(&status_filter, &search_text, &sort_key, &sort_order);

    let client = IncubatorApiClient::from_env();
    let mut service = AppointmentService::new(client, TracingSink);

    match service.refresh().await {
        Ok(count) => info!("Loaded {} appointments", count),
        Err(e) => {
            eprintln!("Failed to load appointments: {}", e);
            std::process::exit(1);
        }
    }

    let listing = service.view(&query);
    info!("Projection contains {} appointments", listing.len());

    for appointment in &listing {
        println!(
            "{}  {}  {:9}  {} / {} (mentor: {})",
            appointment.id,
            appointment.date.format("%Y-%m-%d %H:%M"),
            appointment.status.to_string(),
            appointment.incubatee_name,
            appointment.startup_name,
            appointment.mentor_name,
        );
    }
}
