use serde::{Deserialize, Serialize};

use crate::models::appointment::AppointmentStatus;

/// Status filter for the appointment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    /// Parse a raw filter value from a UI control. "all" or anything
    /// unrecognized falls back to `All` so a misconfigured dropdown can
    /// never blank the list.
    pub fn from_param(value: &str) -> StatusFilter {
        if value == "all" {
            return StatusFilter::All;
        }
        match AppointmentStatus::parse(value) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    AppointmentDate,
    RequestedAt,
}

impl SortKey {
    /// Unknown sort keys fail closed to the default ordering key.
    pub fn from_param(value: &str) -> SortKey {
        match value {
            "requestedAt" | "requested_at" => SortKey::RequestedAt,
            _ => SortKey::AppointmentDate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_param(value: &str) -> SortOrder {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// The full set of listing controls a screen exposes: status dropdown,
/// free-text search and sort selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub status_filter: StatusFilter,
    pub search_text: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            status_filter: StatusFilter::All,
            search_text: String::new(),
            sort_key: SortKey::AppointmentDate,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    /// Build a query from the raw string values of UI controls.
    /// Every parameter fails closed to its default on unrecognized input.
    pub fn from_params(
        status_filter: &str,
        search_text: &str,
        sort_key: &str,
        sort_order: &str,
    ) -> ListQuery {
        ListQuery {
            status_filter: StatusFilter::from_param(status_filter),
            search_text: search_text.to_string(),
            sort_key: SortKey::from_param(sort_key),
            sort_order: SortOrder::from_param(sort_order),
        }
    }
}
