// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory inserts: parents, teachers, students, and the school zone.
//!
//! Enrollment is managed out of band (the district's sync job); these
//! mutations exist for that importer, the demo seed, and tests.

use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::debug;

use crate::data_models::{NewParentRow, NewSchoolZoneRow, NewStudentRow, NewTeacherRow};
use crate::diesel_schema::{parents, school_zones, students, teachers};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use curbside_domain::{PickupMode, format_timestamp};

/// Inserts a parent and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate email).
pub fn insert_parent(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
    phone: Option<&str>,
    password_hash: &str,
) -> Result<i64, PersistenceError> {
    debug!("Inserting parent: {}", name);

    let created_at: String = format_timestamp(OffsetDateTime::now_utc());
    diesel::insert_into(parents::table)
        .values(NewParentRow {
            name,
            email,
            phone,
            password_hash,
            created_at: &created_at,
        })
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Inserts a teacher and returns the assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate email).
pub fn insert_teacher(
    conn: &mut SqliteConnection,
    name: &str,
    classroom: &str,
    grade: &str,
    email: &str,
) -> Result<i64, PersistenceError> {
    debug!("Inserting teacher: {}", name);

    let created_at: String = format_timestamp(OffsetDateTime::now_utc());
    diesel::insert_into(teachers::table)
        .values(NewTeacherRow {
            name,
            classroom,
            grade,
            email,
            created_at: &created_at,
        })
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Inserts a student and returns the assigned ID.
///
/// The teacher and parent rows must already exist; foreign key enforcement
/// rejects dangling references at insert time.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_student(
    conn: &mut SqliteConnection,
    name: &str,
    grade: &str,
    teacher_id: i64,
    parent_id: i64,
    default_pickup: PickupMode,
) -> Result<i64, PersistenceError> {
    debug!("Inserting student: {}", name);

    let created_at: String = format_timestamp(OffsetDateTime::now_utc());
    diesel::insert_into(students::table)
        .values(NewStudentRow {
            name,
            grade,
            teacher_id,
            parent_id,
            default_pickup: default_pickup.as_str(),
            created_at: &created_at,
        })
        .execute(conn)?;

    get_last_insert_rowid(conn)
}

/// Inserts a school zone and returns the assigned ID.
///
/// The first inserted zone is the active geofence.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_school_zone(
    conn: &mut SqliteConnection,
    school_name: &str,
    center_lat: f64,
    center_lng: f64,
    radius_meters: i32,
) -> Result<i64, PersistenceError> {
    debug!("Inserting school zone: {}", school_name);

    let created_at: String = format_timestamp(OffsetDateTime::now_utc());
    diesel::insert_into(school_zones::table)
        .values(NewSchoolZoneRow {
            school_name,
            center_lat,
            center_lng,
            radius_meters,
            created_at: &created_at,
        })
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
