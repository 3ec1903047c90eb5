// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service-layer data transfer objects.
//!
//! The pickup-event view is the shape every read path returns: the persisted
//! event plus display fields re-resolved from the directory at read time.
//! Display fields are never persisted, so they always reflect current
//! directory data rather than a snapshot taken at check-in.

use curbside_domain::{Parent, PickupEvent, PickupMode, PickupStatus, Student, Teacher};
use serde::{Deserialize, Serialize};

/// A pickup event decorated for display.
///
/// Field names follow the JSON contract the dashboards already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupEventView {
    /// The event's database identifier.
    #[serde(rename = "id")]
    pub event_id: i64,
    pub student_id: i64,
    pub parent_id: i64,
    #[serde(rename = "queueId")]
    pub queue_ticket: String,
    pub checkin_time: String,
    #[serde(rename = "pickupType")]
    pub pickup_mode: PickupMode,
    pub gps_lat: f64,
    pub gps_lng: f64,
    pub accuracy: f64,
    pub status: PickupStatus,
    pub completed_time: Option<String>,
    pub notes: Option<String>,
    /// Display fields. A dangling foreign key (student or parent deleted
    /// after the event was created) leaves these unset rather than erroring.
    pub student_name: Option<String>,
    pub parent_name: Option<String>,
    pub teacher_name: Option<String>,
    pub grade: Option<String>,
}

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupStats {
    /// Total enrolled students.
    pub total_students: i64,
    /// Events checked in today.
    pub total_today: i64,
    /// Today's events still waiting.
    pub waiting: i64,
    /// Today's events sent to the pickup area.
    pub sent_to_pickup: i64,
    /// Today's completed pickups.
    pub completed: i64,
    /// Display string for average wait time.
    pub average_wait_time: String,
}

/// Decorates a persisted event with display fields from the directory.
///
/// `event_id` falls back to 0 for an unpersisted event; read paths only ever
/// decorate rows that came out of the database.
#[must_use]
pub fn decorate_event(
    event: &PickupEvent,
    student: Option<&Student>,
    parent: Option<&Parent>,
    teacher: Option<&Teacher>,
) -> PickupEventView {
    PickupEventView {
        event_id: event.event_id.unwrap_or(0),
        student_id: event.student_id,
        parent_id: event.parent_id,
        queue_ticket: event.queue_ticket.clone(),
        checkin_time: event.checkin_time.clone(),
        pickup_mode: event.pickup_mode,
        gps_lat: event.gps_lat,
        gps_lng: event.gps_lng,
        accuracy: event.accuracy,
        status: event.status,
        completed_time: event.completed_time.clone(),
        notes: event.notes.clone(),
        student_name: student.map(|s| s.name.clone()),
        parent_name: parent.map(|p| p.name.clone()),
        teacher_name: teacher.map(|t| t.name.clone()),
        grade: student.map(|s| s.grade.clone()),
    }
}
