// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo fixtures.
//!
//! A small school: one zone, two classrooms, three families. Loaded behind
//! the server's `--seed-demo` flag so a fresh checkout can exercise the
//! check-in flow without the district importer.

use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::parents;
use crate::error::PersistenceError;
use crate::mutations::directory::{
    insert_parent, insert_school_zone, insert_student, insert_teacher,
};
use curbside_domain::PickupMode;

/// Placeholder credential hash for demo accounts. Nothing in this service
/// authenticates against it.
const DEMO_HASH: &str = "$2b$12$demo-account-placeholder";

/// Loads the demo directory unless parents already exist.
///
/// Returns `true` if data was seeded, `false` if the database already had
/// directory rows.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub fn seed_demo_data(conn: &mut SqliteConnection) -> Result<bool, PersistenceError> {
    let existing: i64 = parents::table.count().get_result(conn)?;
    if existing > 0 {
        info!("Directory already populated; skipping demo seed");
        return Ok(false);
    }

    insert_school_zone(conn, "Maple Grove Elementary", 40.0, -75.0, 100)?;

    let rivera: i64 = insert_teacher(
        conn,
        "Ms. Rivera",
        "Room 12",
        "3rd",
        "rivera@school.example",
    )?;
    let okafor: i64 = insert_teacher(
        conn,
        "Mr. Okafor",
        "Room 7",
        "5th",
        "okafor@school.example",
    )?;

    let alice: i64 = insert_parent(
        conn,
        "Alice Johnson",
        "alice@example.com",
        Some("555-0101"),
        DEMO_HASH,
    )?;
    let carol: i64 = insert_parent(
        conn,
        "Carol Nguyen",
        "carol@example.com",
        Some("555-0102"),
        DEMO_HASH,
    )?;
    let david: i64 = insert_parent(
        conn,
        "David Park",
        "david@example.com",
        None,
        DEMO_HASH,
    )?;

    insert_student(conn, "Bob Johnson", "3rd", rivera, alice, PickupMode::CarLine)?;
    insert_student(conn, "Emma Johnson", "5th", okafor, alice, PickupMode::CarLine)?;
    insert_student(conn, "Liam Nguyen", "3rd", rivera, carol, PickupMode::WalkUp)?;
    insert_student(conn, "Ava Park", "5th", okafor, david, PickupMode::WalkUp)?;

    info!("Seeded demo directory: 1 zone, 2 teachers, 3 parents, 4 students");
    Ok(true)
}
