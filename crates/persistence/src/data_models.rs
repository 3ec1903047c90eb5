// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row and insert structs, plus conversions into domain types.
//!
//! Status and mode columns are stored as text; converting a row back into a
//! domain value parses them strictly and surfaces a `CorruptRow` error if
//! the database holds something the domain no longer recognizes.

use std::str::FromStr;

use diesel::prelude::*;

use crate::diesel_schema::{parents, pickup_events, school_zones, students, teachers};
use crate::error::PersistenceError;
use curbside_domain::{
    Parent, PickupEvent, PickupMode, PickupStatus, SchoolZone, Student, Teacher,
};

#[derive(Queryable, Selectable)]
#[diesel(table_name = parents)]
pub struct ParentRow {
    pub parent_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub created_at: String,
}

impl From<ParentRow> for Parent {
    fn from(row: ParentRow) -> Self {
        Self {
            parent_id: row.parent_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = parents)]
pub struct NewParentRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub password_hash: &'a str,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = teachers)]
pub struct TeacherRow {
    pub teacher_id: i64,
    pub name: String,
    pub classroom: String,
    pub grade: String,
    pub email: String,
    pub created_at: String,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Self {
            teacher_id: row.teacher_id,
            name: row.name,
            classroom: row.classroom,
            grade: row.grade,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = teachers)]
pub struct NewTeacherRow<'a> {
    pub name: &'a str,
    pub classroom: &'a str,
    pub grade: &'a str,
    pub email: &'a str,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = students)]
pub struct StudentRow {
    pub student_id: i64,
    pub name: String,
    pub grade: String,
    pub teacher_id: i64,
    pub parent_id: i64,
    pub default_pickup: String,
    pub created_at: String,
}

impl TryFrom<StudentRow> for Student {
    type Error = PersistenceError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        let default_pickup: PickupMode = PickupMode::from_str(&row.default_pickup)?;
        Ok(Self {
            student_id: row.student_id,
            name: row.name,
            grade: row.grade,
            teacher_id: row.teacher_id,
            parent_id: row.parent_id,
            default_pickup,
            created_at: row.created_at,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = students)]
pub struct NewStudentRow<'a> {
    pub name: &'a str,
    pub grade: &'a str,
    pub teacher_id: i64,
    pub parent_id: i64,
    pub default_pickup: &'a str,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = school_zones)]
pub struct SchoolZoneRow {
    pub zone_id: i64,
    pub school_name: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_meters: i32,
    pub created_at: String,
}

impl From<SchoolZoneRow> for SchoolZone {
    fn from(row: SchoolZoneRow) -> Self {
        Self {
            zone_id: row.zone_id,
            school_name: row.school_name,
            center_lat: row.center_lat,
            center_lng: row.center_lng,
            radius_meters: row.radius_meters,
            created_at: row.created_at,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = school_zones)]
pub struct NewSchoolZoneRow<'a> {
    pub school_name: &'a str,
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_meters: i32,
    pub created_at: &'a str,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = pickup_events)]
pub struct PickupEventRow {
    pub event_id: i64,
    pub student_id: i64,
    pub parent_id: i64,
    pub queue_ticket: String,
    pub checkin_time: String,
    pub pickup_mode: String,
    pub gps_lat: f64,
    pub gps_lng: f64,
    pub accuracy: f64,
    pub status: String,
    pub completed_time: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<PickupEventRow> for PickupEvent {
    type Error = PersistenceError;

    fn try_from(row: PickupEventRow) -> Result<Self, Self::Error> {
        let pickup_mode: PickupMode = PickupMode::from_str(&row.pickup_mode)?;
        let status: PickupStatus = PickupStatus::from_str(&row.status)?;
        Ok(Self {
            event_id: Some(row.event_id),
            student_id: row.student_id,
            parent_id: row.parent_id,
            queue_ticket: row.queue_ticket,
            checkin_time: row.checkin_time,
            pickup_mode,
            gps_lat: row.gps_lat,
            gps_lng: row.gps_lng,
            accuracy: row.accuracy,
            status,
            completed_time: row.completed_time,
            notes: row.notes,
        })
    }
}

#[derive(Insertable)]
#[diesel(table_name = pickup_events)]
pub struct NewPickupEventRow<'a> {
    pub student_id: i64,
    pub parent_id: i64,
    pub queue_ticket: &'a str,
    pub checkin_time: &'a str,
    pub pickup_mode: &'a str,
    pub gps_lat: f64,
    pub gps_lng: f64,
    pub accuracy: f64,
    pub status: &'a str,
    pub completed_time: Option<&'a str>,
    pub notes: Option<&'a str>,
}
