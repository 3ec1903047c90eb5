// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory lookups: parents, students, and teachers.
//!
//! These are the equality lookups the pickup lifecycle depends on. The
//! student-by-name-and-parent query doubles as the system's only
//! authorization check: a student resolves only under the parent that owns
//! them.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{ParentRow, StudentRow, TeacherRow};
use crate::diesel_schema::{parents, students, teachers};
use crate::error::PersistenceError;
use curbside_domain::{Parent, Student, Teacher};

/// Retrieves a parent by exact name match.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if no
/// parent has that name.
pub fn find_parent_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Parent>, PersistenceError> {
    debug!("Looking up parent by name: {}", name);

    let result: Result<ParentRow, diesel::result::Error> = parents::table
        .filter(parents::name.eq(name))
        .select(ParentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Parent::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a parent by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if the
/// parent does not exist.
pub fn find_parent_by_id(
    conn: &mut SqliteConnection,
    parent_id: i64,
) -> Result<Option<Parent>, PersistenceError> {
    let result: Result<ParentRow, diesel::result::Error> = parents::table
        .filter(parents::parent_id.eq(parent_id))
        .select(ParentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Parent::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a student by name, scoped to the owning parent.
///
/// A student of the right name owned by a different parent does not
/// resolve; callers cannot tell that case apart from "no such student".
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if no
/// matching student exists under this parent.
pub fn find_student_by_name_and_parent(
    conn: &mut SqliteConnection,
    name: &str,
    parent_id: i64,
) -> Result<Option<Student>, PersistenceError> {
    debug!(
        "Looking up student by name: {} under parent: {}",
        name, parent_id
    );

    let result: Result<StudentRow, diesel::result::Error> = students::table
        .filter(students::name.eq(name))
        .filter(students::parent_id.eq(parent_id))
        .select(StudentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Student::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a student by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if the
/// student does not exist.
pub fn find_student_by_id(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Option<Student>, PersistenceError> {
    let result: Result<StudentRow, diesel::result::Error> = students::table
        .filter(students::student_id.eq(student_id))
        .select(StudentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Student::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a teacher by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if the
/// teacher does not exist.
pub fn find_teacher_by_id(
    conn: &mut SqliteConnection,
    teacher_id: i64,
) -> Result<Option<Teacher>, PersistenceError> {
    let result: Result<TeacherRow, diesel::result::Error> = teachers::table
        .filter(teachers::teacher_id.eq(teacher_id))
        .select(TeacherRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Teacher::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists every student, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_students(conn: &mut SqliteConnection) -> Result<Vec<Student>, PersistenceError> {
    let rows: Vec<StudentRow> = students::table
        .order(students::name.asc())
        .select(StudentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Student::try_from).collect()
}

/// Lists the students rostered under a teacher, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_students_by_teacher(
    conn: &mut SqliteConnection,
    teacher_id: i64,
) -> Result<Vec<Student>, PersistenceError> {
    let rows: Vec<StudentRow> = students::table
        .filter(students::teacher_id.eq(teacher_id))
        .order(students::name.asc())
        .select(StudentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Student::try_from).collect()
}

/// Lists every teacher, ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_teachers(conn: &mut SqliteConnection) -> Result<Vec<Teacher>, PersistenceError> {
    let rows: Vec<TeacherRow> = teachers::table
        .order(teachers::name.asc())
        .select(TeacherRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Teacher::from).collect())
}

/// Counts enrolled students.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_students(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(students::table.count().get_result(conn)?)
}
