// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the persistence crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod pickup_tests;
mod seed_tests;

use time::macros::datetime;
use time::OffsetDateTime;

use crate::Persistence;
use curbside_domain::{GpsFix, PickupEvent, PickupMode};

/// Directory row IDs shared by the pickup tests.
pub struct DirectoryIds {
    pub parent_id: i64,
    pub teacher_id: i64,
    pub student_id: i64,
}

pub fn test_db() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// Fixed check-in instant so timestamp prefixes are predictable.
pub fn test_time() -> OffsetDateTime {
    datetime!(2026-09-01 14:30:00 UTC)
}

pub fn test_fix() -> GpsFix {
    GpsFix {
        lat: 40.0,
        lng: -75.0,
        accuracy: 10.0,
    }
}

/// Inserts one parent, one teacher, and one student and returns their IDs.
pub fn seed_directory(db: &mut Persistence) -> DirectoryIds {
    let parent_id = db
        .insert_parent("Alice Johnson", "alice@example.com", Some("555-0100"), "x")
        .unwrap();
    let teacher_id = db
        .insert_teacher("Ms. Rivera", "Room 12", "3rd", "rivera@example.com")
        .unwrap();
    let student_id = db
        .insert_student("Bob Johnson", "3rd", teacher_id, parent_id, PickupMode::CarLine)
        .unwrap();
    DirectoryIds {
        parent_id,
        teacher_id,
        student_id,
    }
}

pub fn make_event(ids: &DirectoryIds, queue_ticket: &str, now: OffsetDateTime) -> PickupEvent {
    PickupEvent::new(
        ids.student_id,
        ids.parent_id,
        queue_ticket.to_string(),
        PickupMode::CarLine,
        test_fix(),
        now,
    )
}
