use std::cmp::Ordering;

use crate::models::appointment::Appointment;
use crate::models::query::{ListQuery, SortKey, SortOrder, StatusFilter};

/// Derive the display list for a set of UI controls.
///
/// Filtering, search and sorting are combined into one deterministic pass:
/// - status filter is an exact match (`All` passes everything);
/// - search is a case-insensitive substring match against the incubatee
///   name OR the mentor name, empty text matches everything;
/// - sorting is stable, so equal timestamps keep their input order.
///
/// Returns a fresh `Vec`; the input collection is never mutated. Safe to
/// call on every render.
pub fn project(appointments: &[Appointment], query: &ListQuery) -> Vec<Appointment> {
    let needle = query.search_text.to_lowercase();

    let mut result: Vec<Appointment> = appointments
        .iter()
        .filter(|a| matches_status(a, query.status_filter))
        .filter(|a| matches_search(a, &needle))
        .cloned()
        .collect();

    // Vec::sort_by is a stable sort, which the tie-break contract needs.
    result.sort_by(|a, b| compare(a, b, query.sort_key, query.sort_order));
    result
}

fn matches_status(appointment: &Appointment, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => appointment.status == status,
    }
}

fn matches_search(appointment: &Appointment, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    appointment.incubatee_name.to_lowercase().contains(needle)
        || appointment.mentor_name.to_lowercase().contains(needle)
}

fn compare(a: &Appointment, b: &Appointment, key: SortKey, order: SortOrder) -> Ordering {
    match key {
        SortKey::AppointmentDate => apply_order(a.date.cmp(&b.date), order),
        SortKey::RequestedAt => {
            // Records without a requested_at timestamp sort last under both
            // orders, so the direction flip only applies between two
            // present timestamps.
            match (a.requested_at, b.requested_at) {
                (Some(ta), Some(tb)) => apply_order(ta.cmp(&tb), order),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    }
}

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}
