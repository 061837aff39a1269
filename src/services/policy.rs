use crate::models::appointment::{AppointmentStatus, Role};

/// Decide whether a status transition is legal, independent of any screen.
///
/// The lifecycle is one-directional:
///
/// ```text
/// pending  -> accepted | declined | cancelled
/// accepted -> completed | cancelled
/// declined, completed, cancelled -> (terminal)
/// ```
///
/// A no-op transition (`current == target`) is never allowed; transitions
/// must change state. This function never panics and performs no I/O —
/// callers surface a `false` result as a toast or disabled button.
pub fn can_transition(current: AppointmentStatus, target: AppointmentStatus) -> bool {
    allowed_targets(current).contains(&target)
}

/// The outgoing edge set for a status. Empty for terminal states.
pub fn allowed_targets(current: AppointmentStatus) -> &'static [AppointmentStatus] {
    match current {
        AppointmentStatus::Pending => &[
            AppointmentStatus::Accepted,
            AppointmentStatus::Declined,
            AppointmentStatus::Cancelled,
        ],
        AppointmentStatus::Accepted => {
            &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
        }
        AppointmentStatus::Declined
        | AppointmentStatus::Completed
        | AppointmentStatus::Cancelled => &[],
    }
}

/// Role-restricted transition targets, used by screens to decide which
/// action buttons to render. Admins run the mentor side of the lifecycle;
/// incubatees can only withdraw their own bookings.
pub fn actions_for(role: Role, current: AppointmentStatus) -> &'static [AppointmentStatus] {
    match (role, current) {
        (Role::Admin, AppointmentStatus::Pending) => {
            &[AppointmentStatus::Accepted, AppointmentStatus::Declined]
        }
        (Role::Admin, AppointmentStatus::Accepted) => {
            &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
        }
        (Role::Incubatee, AppointmentStatus::Pending)
        | (Role::Incubatee, AppointmentStatus::Accepted) => &[AppointmentStatus::Cancelled],
        _ => &[],
    }
}

/// Whether a record may be hard-deleted. Live appointments (pending or
/// accepted) must be cancelled or declined first.
pub fn can_delete(status: AppointmentStatus) -> bool {
    !matches!(
        status,
        AppointmentStatus::Pending | AppointmentStatus::Accepted
    )
}
