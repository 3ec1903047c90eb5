// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for service-layer tests.

use curbside_domain::{GpsFix, Parent, PickupMode, Student, Teacher};

pub fn test_parent(parent_id: i64, name: &str) -> Parent {
    Parent {
        parent_id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: Some(String::from("555-0100")),
        password_hash: String::from("$2b$12$test"),
        created_at: String::from("2026-08-01T00:00:00Z"),
    }
}

pub fn test_teacher(teacher_id: i64, name: &str) -> Teacher {
    Teacher {
        teacher_id,
        name: name.to_string(),
        classroom: String::from("Room 12"),
        grade: String::from("3rd"),
        email: format!("{}@school.example", name.to_lowercase().replace(' ', ".")),
        created_at: String::from("2026-08-01T00:00:00Z"),
    }
}

pub fn test_student(student_id: i64, name: &str, teacher_id: i64, parent_id: i64) -> Student {
    Student {
        student_id,
        name: name.to_string(),
        grade: String::from("3rd"),
        teacher_id,
        parent_id,
        default_pickup: PickupMode::CarLine,
        created_at: String::from("2026-08-01T00:00:00Z"),
    }
}

pub fn test_fix() -> GpsFix {
    GpsFix {
        lat: 40.0,
        lng: -75.0,
        accuracy: 5.0,
    }
}
