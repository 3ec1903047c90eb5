// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::{PickupMode, PickupStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Formats a timestamp as RFC 3339 text.
///
/// Timestamps travel through the system (and into the database) as text.
#[must_use]
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_default()
}

/// A parent or guardian authorized to pick up one or more students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent {
    /// Canonical numeric identifier assigned by the database.
    pub parent_id: i64,
    /// Full name; check-in resolves parents by exact name match.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Contact phone number, if on file.
    pub phone: Option<String>,
    /// Credential hash. No login surface exists in this service; the column
    /// is kept for schema parity with the mobile app's account store.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// A teacher responsible for a classroom roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Canonical numeric identifier assigned by the database.
    pub teacher_id: i64,
    /// Full name.
    pub name: String,
    /// Classroom identifier (e.g. "Room 12").
    pub classroom: String,
    /// Grade taught.
    pub grade: String,
    /// Email address (unique).
    pub email: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// A student enrolled for pickup coordination.
///
/// A student belongs to exactly one parent (the authorization boundary for
/// check-ins) and one teacher (the dashboard grouping).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Canonical numeric identifier assigned by the database.
    pub student_id: i64,
    /// Full name; check-in resolves students by name plus parent ownership.
    pub name: String,
    /// Grade level (e.g. "3rd").
    pub grade: String,
    /// The teacher this student is rostered under.
    pub teacher_id: i64,
    /// The sole parent authorized to check this student in.
    pub parent_id: i64,
    /// Default release mode when the check-in omits a preference.
    pub default_pickup: PickupMode,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// The circular geofence around a school's pickup area.
///
/// The zone table is a singleton by convention: the first row is the active
/// zone, and no row at all means location validation is skipped (fail open).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolZone {
    /// Canonical numeric identifier assigned by the database.
    pub zone_id: i64,
    /// School display name.
    pub school_name: String,
    /// Latitude of the zone center, decimal degrees.
    pub center_lat: f64,
    /// Longitude of the zone center, decimal degrees.
    pub center_lng: f64,
    /// Allowed radius around the center, meters.
    pub radius_meters: i32,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// A GPS fix submitted by the parent's device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    /// Latitude, decimal degrees.
    pub lat: f64,
    /// Longitude, decimal degrees.
    pub lng: f64,
    /// Reported GPS error radius, meters.
    pub accuracy: f64,
}

/// One pickup request: a parent+student pair tied to a generated queue ticket.
///
/// Events are created exactly once per check-in (no de-duplication) and are
/// never deleted. Display names are intentionally absent here; read paths
/// re-resolve them from the directory so they always reflect current data
/// rather than a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupEvent {
    /// Canonical numeric identifier. `None` until persisted.
    pub event_id: Option<i64>,
    /// The student being released.
    pub student_id: i64,
    /// The parent who checked in.
    pub parent_id: i64,
    /// Short human-readable queue code, e.g. "P-482". Not unique.
    pub queue_ticket: String,
    /// Check-in timestamp (RFC 3339).
    pub checkin_time: String,
    /// Release mode requested at check-in.
    pub pickup_mode: PickupMode,
    /// Latitude of the submitted fix.
    pub gps_lat: f64,
    /// Longitude of the submitted fix.
    pub gps_lng: f64,
    /// Reported GPS accuracy, meters.
    pub accuracy: f64,
    /// Current position in the release flow.
    pub status: PickupStatus,
    /// Completion timestamp, set only on reaching `picked_up`.
    pub completed_time: Option<String>,
    /// Free-text staff notes.
    pub notes: Option<String>,
}

impl PickupEvent {
    /// Creates a new event at check-in time: status `waiting`, no completion
    /// timestamp, no notes.
    #[must_use]
    pub fn new(
        student_id: i64,
        parent_id: i64,
        queue_ticket: String,
        pickup_mode: PickupMode,
        fix: GpsFix,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: None,
            student_id,
            parent_id,
            queue_ticket,
            checkin_time: format_timestamp(now),
            pickup_mode,
            gps_lat: fix.lat,
            gps_lng: fix.lng,
            accuracy: fix.accuracy,
            status: PickupStatus::Waiting,
            completed_time: None,
            notes: None,
        }
    }
}
