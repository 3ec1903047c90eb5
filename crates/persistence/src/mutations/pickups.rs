// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pickup event writes.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::NewPickupEventRow;
use crate::diesel_schema::pickup_events;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use curbside_domain::PickupEvent;

/// Persists a freshly assembled pickup event and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_pickup_event(
    conn: &mut SqliteConnection,
    event: &PickupEvent,
) -> Result<i64, PersistenceError> {
    debug!(
        "Inserting pickup event for student {} (ticket {})",
        event.student_id, event.queue_ticket
    );

    diesel::insert_into(pickup_events::table)
        .values(NewPickupEventRow {
            student_id: event.student_id,
            parent_id: event.parent_id,
            queue_ticket: &event.queue_ticket,
            checkin_time: &event.checkin_time,
            pickup_mode: event.pickup_mode.as_str(),
            gps_lat: event.gps_lat,
            gps_lng: event.gps_lng,
            accuracy: event.accuracy,
            status: event.status.as_str(),
            completed_time: event.completed_time.as_deref(),
            notes: event.notes.as_deref(),
        })
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Writes an event's status and completion timestamp back to its row.
///
/// Last write wins; two concurrent updates to the same event race without
/// coordination, which matches the dashboard contract.
///
/// # Errors
///
/// Returns [`PersistenceError::EventNotFound`] if the event has no ID or no
/// row matches it, or another error if the update fails.
pub fn update_pickup_status(
    conn: &mut SqliteConnection,
    event: &PickupEvent,
) -> Result<(), PersistenceError> {
    let event_id: i64 = event
        .event_id
        .ok_or(PersistenceError::EventNotFound(0))?;

    let updated: usize = diesel::update(
        pickup_events::table.filter(pickup_events::event_id.eq(event_id)),
    )
    .set((
        pickup_events::status.eq(event.status.as_str()),
        pickup_events::completed_time.eq(event.completed_time.as_deref()),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::EventNotFound(event_id));
    }

    debug!("Updated pickup event {} to {}", event_id, event.status);
    Ok(())
}
