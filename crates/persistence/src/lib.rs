// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Curbside.
//!
//! Diesel over `SQLite` with embedded migrations. The adapter owns a single
//! connection; the server serializes access behind a mutex. In-memory
//! databases back unit and integration tests, file-based databases back
//! deployments (with WAL enabled for read concurrency).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use curbside_domain::{Parent, PickupEvent, PickupMode, SchoolZone, Student, Teacher};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Directory
    // ========================================================================

    /// Inserts a parent and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_parent(
        &mut self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        password_hash: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::insert_parent(&mut self.conn, name, email, phone, password_hash)
    }

    /// Inserts a teacher and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_teacher(
        &mut self,
        name: &str,
        classroom: &str,
        grade: &str,
        email: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::insert_teacher(&mut self.conn, name, classroom, grade, email)
    }

    /// Inserts a student and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a dangling teacher or
    /// parent reference.
    pub fn insert_student(
        &mut self,
        name: &str,
        grade: &str,
        teacher_id: i64,
        parent_id: i64,
        default_pickup: PickupMode,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::insert_student(
            &mut self.conn,
            name,
            grade,
            teacher_id,
            parent_id,
            default_pickup,
        )
    }

    /// Inserts a school zone and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_school_zone(
        &mut self,
        school_name: &str,
        center_lat: f64,
        center_lng: f64,
        radius_meters: i32,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::insert_school_zone(
            &mut self.conn,
            school_name,
            center_lat,
            center_lng,
            radius_meters,
        )
    }

    /// Retrieves a parent by exact name match.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if no parent matches.
    pub fn find_parent_by_name(&mut self, name: &str) -> Result<Option<Parent>, PersistenceError> {
        queries::directory::find_parent_by_name(&mut self.conn, name)
    }

    /// Retrieves a parent by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if the parent does
    /// not exist.
    pub fn find_parent_by_id(&mut self, parent_id: i64) -> Result<Option<Parent>, PersistenceError> {
        queries::directory::find_parent_by_id(&mut self.conn, parent_id)
    }

    /// Retrieves a student by name scoped to the owning parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if no student of that
    /// name belongs to that parent.
    pub fn find_student_by_name_and_parent(
        &mut self,
        name: &str,
        parent_id: i64,
    ) -> Result<Option<Student>, PersistenceError> {
        queries::directory::find_student_by_name_and_parent(&mut self.conn, name, parent_id)
    }

    /// Retrieves a student by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if the student does
    /// not exist.
    pub fn find_student_by_id(
        &mut self,
        student_id: i64,
    ) -> Result<Option<Student>, PersistenceError> {
        queries::directory::find_student_by_id(&mut self.conn, student_id)
    }

    /// Retrieves a teacher by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if the teacher does
    /// not exist.
    pub fn find_teacher_by_id(
        &mut self,
        teacher_id: i64,
    ) -> Result<Option<Teacher>, PersistenceError> {
        queries::directory::find_teacher_by_id(&mut self.conn, teacher_id)
    }

    /// Lists the students rostered under a teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_students_by_teacher(
        &mut self,
        teacher_id: i64,
    ) -> Result<Vec<Student>, PersistenceError> {
        queries::directory::find_students_by_teacher(&mut self.conn, teacher_id)
    }

    /// Lists every student.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_students(&mut self) -> Result<Vec<Student>, PersistenceError> {
        queries::directory::list_students(&mut self.conn)
    }

    /// Lists every teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_teachers(&mut self) -> Result<Vec<Teacher>, PersistenceError> {
        queries::directory::list_teachers(&mut self.conn)
    }

    /// Counts enrolled students.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_students(&mut self) -> Result<i64, PersistenceError> {
        queries::directory::count_students(&mut self.conn)
    }

    // ========================================================================
    // School zone
    // ========================================================================

    /// Retrieves the active school zone, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn default_school_zone(&mut self) -> Result<Option<SchoolZone>, PersistenceError> {
        queries::zones::default_school_zone(&mut self.conn)
    }

    // ========================================================================
    // Pickup events
    // ========================================================================

    /// Persists a freshly assembled pickup event and returns the assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_pickup_event(&mut self, event: &PickupEvent) -> Result<i64, PersistenceError> {
        mutations::pickups::insert_pickup_event(&mut self.conn, event)
    }

    /// Retrieves a pickup event by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if the event does not
    /// exist.
    pub fn find_pickup_event(
        &mut self,
        event_id: i64,
    ) -> Result<Option<PickupEvent>, PersistenceError> {
        queries::pickups::find_pickup_event(&mut self.conn, event_id)
    }

    /// Retrieves a pickup event by queue ticket (earliest match).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails; `Ok(None)` if no event carries
    /// that ticket.
    pub fn find_pickup_by_queue_ticket(
        &mut self,
        queue_ticket: &str,
    ) -> Result<Option<PickupEvent>, PersistenceError> {
        queries::pickups::find_pickup_by_queue_ticket(&mut self.conn, queue_ticket)
    }

    /// Lists events not yet picked up, in check-in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_pickups(&mut self) -> Result<Vec<PickupEvent>, PersistenceError> {
        queries::pickups::active_pickups(&mut self.conn)
    }

    /// Lists active events for students rostered under a teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_pickups_for_teacher(
        &mut self,
        teacher_id: i64,
    ) -> Result<Vec<PickupEvent>, PersistenceError> {
        queries::pickups::active_pickups_for_teacher(&mut self.conn, teacher_id)
    }

    /// Lists today's completed events for students rostered under a teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn completed_pickups_for_teacher(
        &mut self,
        teacher_id: i64,
        today_prefix: &str,
    ) -> Result<Vec<PickupEvent>, PersistenceError> {
        queries::pickups::completed_pickups_for_teacher(&mut self.conn, teacher_id, today_prefix)
    }

    /// Lists every event checked in today.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn todays_pickups(
        &mut self,
        today_prefix: &str,
    ) -> Result<Vec<PickupEvent>, PersistenceError> {
        queries::pickups::todays_pickups(&mut self.conn, today_prefix)
    }

    /// Writes an event's status and completion timestamp back to its row.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::EventNotFound`] for an unknown or
    /// unpersisted event, or another error if the update fails.
    pub fn update_pickup_status(&mut self, event: &PickupEvent) -> Result<(), PersistenceError> {
        mutations::pickups::update_pickup_status(&mut self.conn, event)
    }

    // ========================================================================
    // Demo data
    // ========================================================================

    /// Loads the demo directory unless directory rows already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn seed_demo_data(&mut self) -> Result<bool, PersistenceError> {
        mutations::seed::seed_demo_data(&mut self.conn)
    }
}
