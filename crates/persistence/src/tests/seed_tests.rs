// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data seeding tests.

use super::test_db;

#[test]
fn test_seed_populates_empty_database() {
    let mut db = test_db();

    let seeded = db.seed_demo_data().unwrap();

    assert!(seeded);
    assert!(db.default_school_zone().unwrap().is_some());
    assert_eq!(db.list_teachers().unwrap().len(), 2);
    assert_eq!(db.count_students().unwrap(), 4);
    assert!(db.find_parent_by_name("Alice Johnson").unwrap().is_some());
}

#[test]
fn test_seed_is_skipped_when_directory_exists() {
    let mut db = test_db();
    db.insert_parent("Existing Parent", "existing@example.com", None, "x")
        .unwrap();

    let seeded = db.seed_demo_data().unwrap();

    assert!(!seeded);
    assert_eq!(db.list_teachers().unwrap().len(), 0);
}

#[test]
fn test_seeded_students_resolve_under_their_parents() {
    let mut db = test_db();
    db.seed_demo_data().unwrap();

    let alice = db.find_parent_by_name("Alice Johnson").unwrap().unwrap();
    let bob = db
        .find_student_by_name_and_parent("Bob Johnson", alice.parent_id)
        .unwrap();

    assert!(bob.is_some());
}
