// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pickup event queries.
//!
//! "Today" filters match on the RFC 3339 date prefix of `checkin_time`;
//! callers pass the prefix (e.g. `"2026-09-01"`) so queries stay
//! deterministic under test.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::PickupEventRow;
use crate::diesel_schema::{pickup_events, students};
use crate::error::PersistenceError;
use curbside_domain::{PickupEvent, PickupStatus};

/// Retrieves a pickup event by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if the
/// event does not exist.
pub fn find_pickup_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Option<PickupEvent>, PersistenceError> {
    let result: Result<PickupEventRow, diesel::result::Error> = pickup_events::table
        .filter(pickup_events::event_id.eq(event_id))
        .select(PickupEventRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(PickupEvent::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a pickup event by queue ticket.
///
/// Tickets are not unique; the earliest matching event wins.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if no
/// event carries that ticket.
pub fn find_pickup_by_queue_ticket(
    conn: &mut SqliteConnection,
    queue_ticket: &str,
) -> Result<Option<PickupEvent>, PersistenceError> {
    debug!("Looking up pickup event by queue ticket: {}", queue_ticket);

    let result: Result<PickupEventRow, diesel::result::Error> = pickup_events::table
        .filter(pickup_events::queue_ticket.eq(queue_ticket))
        .order((pickup_events::checkin_time.asc(), pickup_events::event_id.asc()))
        .select(PickupEventRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(PickupEvent::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists events not yet picked up, in check-in order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn active_pickups(conn: &mut SqliteConnection) -> Result<Vec<PickupEvent>, PersistenceError> {
    let rows: Vec<PickupEventRow> = pickup_events::table
        .filter(pickup_events::status.ne(PickupStatus::PickedUp.as_str()))
        .order(pickup_events::checkin_time.asc())
        .select(PickupEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(PickupEvent::try_from).collect()
}

/// Lists active events for students rostered under a teacher.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn active_pickups_for_teacher(
    conn: &mut SqliteConnection,
    teacher_id: i64,
) -> Result<Vec<PickupEvent>, PersistenceError> {
    let rows: Vec<PickupEventRow> = pickup_events::table
        .inner_join(students::table)
        .filter(students::teacher_id.eq(teacher_id))
        .filter(pickup_events::status.ne(PickupStatus::PickedUp.as_str()))
        .order(pickup_events::checkin_time.asc())
        .select(PickupEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(PickupEvent::try_from).collect()
}

/// Lists today's completed events for students rostered under a teacher.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn completed_pickups_for_teacher(
    conn: &mut SqliteConnection,
    teacher_id: i64,
    today_prefix: &str,
) -> Result<Vec<PickupEvent>, PersistenceError> {
    let rows: Vec<PickupEventRow> = pickup_events::table
        .inner_join(students::table)
        .filter(students::teacher_id.eq(teacher_id))
        .filter(pickup_events::status.eq(PickupStatus::PickedUp.as_str()))
        .filter(pickup_events::checkin_time.like(format!("{today_prefix}%")))
        .order(pickup_events::checkin_time.asc())
        .select(PickupEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(PickupEvent::try_from).collect()
}

/// Lists every event checked in today, regardless of status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn todays_pickups(
    conn: &mut SqliteConnection,
    today_prefix: &str,
) -> Result<Vec<PickupEvent>, PersistenceError> {
    let rows: Vec<PickupEventRow> = pickup_events::table
        .filter(pickup_events::checkin_time.like(format!("{today_prefix}%")))
        .order(pickup_events::checkin_time.asc())
        .select(PickupEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(PickupEvent::try_from).collect()
}
