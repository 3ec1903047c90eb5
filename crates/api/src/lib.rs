// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service boundary layer for Curbside.
//!
//! Pure functions between the HTTP boundary and persistence: check-in
//! authorization and event assembly, status transitions, display decoration,
//! and dashboard statistics. The server resolves entities through the
//! persistence crate and hands them here; nothing in this crate touches the
//! database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use curbside_domain::{
    GpsFix, Parent, PickupEvent, PickupMode, PickupStatus, Student, format_timestamp,
    generate_queue_ticket,
};
use std::str::FromStr;
use time::OffsetDateTime;
use tracing::debug;

mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use request_response::{PickupEventView, PickupStats, decorate_event};

/// Generic message for failed check-in resolution.
///
/// "No such parent", "no such student", and "student owned by a different
/// parent" all surface identically so the endpoint cannot be used to probe
/// the directory.
const CHECKIN_NOT_FOUND: &str = "Could not find student or parent, or parent not authorized";

/// Resolves a check-in to an authorized (parent, student) pair.
///
/// The caller looks up the parent by exact name and the student by name
/// scoped to that parent's ownership; this function collapses both lookup
/// results into the API contract. Student ownership is the sole
/// authorization check in the system.
///
/// # Errors
///
/// Returns [`ApiError::ResourceNotFound`] with a deliberately generic
/// message when either lookup came back empty.
pub fn authorize_checkin(
    parent: Option<Parent>,
    student: Option<Student>,
) -> Result<(Parent, Student), ApiError> {
    match (parent, student) {
        (Some(parent), Some(student)) => Ok((parent, student)),
        _ => Err(ApiError::ResourceNotFound {
            message: String::from(CHECKIN_NOT_FOUND),
        }),
    }
}

/// Assembles a new pickup event for an authorized check-in.
///
/// Generates the queue ticket from the server clock, maps the request's
/// pickup-type string (anything but `"car_line"` silently becomes walk-up),
/// and stamps the check-in time. The caller persists the result.
#[must_use]
pub fn create_pickup_event(
    parent: &Parent,
    student: &Student,
    pickup_type: &str,
    fix: GpsFix,
    now: OffsetDateTime,
) -> PickupEvent {
    let mode: PickupMode = PickupMode::from_checkin_value(pickup_type);
    let ticket: String = generate_queue_ticket(now);

    debug!(
        parent_id = parent.parent_id,
        student_id = student.student_id,
        ticket = %ticket,
        mode = %mode,
        "Assembled pickup event"
    );

    PickupEvent::new(
        student.student_id,
        parent.parent_id,
        ticket,
        mode,
        fix,
        now,
    )
}

/// Applies a status update to an event in place.
///
/// The new status overwrites the old unconditionally; there is no
/// forward-only enforcement, so dashboards can correct a mistaken advance.
/// Reaching `picked_up` stamps the completion time; no other transition
/// touches timestamps, and regressing afterward leaves the stamp as-is.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] when the status name is unrecognized.
pub fn apply_status_update(
    event: &mut PickupEvent,
    status_name: &str,
    now: OffsetDateTime,
) -> Result<PickupStatus, ApiError> {
    let status: PickupStatus = PickupStatus::from_str(status_name)?;

    event.status = status;
    if status == PickupStatus::PickedUp {
        event.completed_time = Some(format_timestamp(now));
    }

    Ok(status)
}

/// Computes the admin dashboard counts from today's events.
///
/// The average wait time is a fixed display placeholder; real measurement
/// needs per-event queue timing that is not captured yet.
#[must_use]
pub fn compute_stats(total_students: i64, todays_events: &[PickupEvent]) -> PickupStats {
    let count_status = |status: PickupStatus| -> i64 {
        i64::try_from(
            todays_events
                .iter()
                .filter(|event| event.status == status)
                .count(),
        )
        .unwrap_or(i64::MAX)
    };

    PickupStats {
        total_students,
        total_today: i64::try_from(todays_events.len()).unwrap_or(i64::MAX),
        waiting: count_status(PickupStatus::Waiting),
        sent_to_pickup: count_status(PickupStatus::SentToPickup),
        completed: count_status(PickupStatus::PickedUp),
        average_wait_time: String::from("3.2 min"),
    }
}
