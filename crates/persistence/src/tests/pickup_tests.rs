// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pickup event persistence tests.

use time::macros::datetime;

use crate::PersistenceError;
use curbside_domain::{format_timestamp, PickupMode, PickupStatus};

use super::{make_event, seed_directory, test_db, test_time};

#[test]
fn test_insert_and_find_pickup_event() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);
    let event = make_event(&ids, "A-123", test_time());

    let event_id = db.insert_pickup_event(&event).unwrap();
    let stored = db.find_pickup_event(event_id).unwrap().unwrap();

    assert_eq!(stored.event_id, Some(event_id));
    assert_eq!(stored.student_id, ids.student_id);
    assert_eq!(stored.parent_id, ids.parent_id);
    assert_eq!(stored.queue_ticket, "A-123");
    assert_eq!(stored.checkin_time, "2026-09-01T14:30:00Z");
    assert_eq!(stored.pickup_mode, PickupMode::CarLine);
    assert_eq!(stored.status, PickupStatus::Waiting);
    assert!(stored.completed_time.is_none());
}

#[test]
fn test_find_unknown_pickup_event_returns_none() {
    let mut db = test_db();

    assert!(db.find_pickup_event(42).unwrap().is_none());
}

#[test]
fn test_find_by_queue_ticket_returns_earliest_match() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);

    // Tickets are random and can collide; lookup favors the older event
    let later = make_event(&ids, "P-500", datetime!(2026-09-01 15:00:00 UTC));
    let later_id = db.insert_pickup_event(&later).unwrap();
    let earlier = make_event(&ids, "P-500", datetime!(2026-09-01 14:00:00 UTC));
    let earlier_id = db.insert_pickup_event(&earlier).unwrap();

    let found = db.find_pickup_by_queue_ticket("P-500").unwrap().unwrap();

    assert_eq!(found.event_id, Some(earlier_id));
    assert_ne!(found.event_id, Some(later_id));
}

#[test]
fn test_find_by_unknown_queue_ticket_returns_none() {
    let mut db = test_db();

    assert!(db.find_pickup_by_queue_ticket("Z-000").unwrap().is_none());
}

#[test]
fn test_active_pickups_excludes_completed_and_orders_by_checkin() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);

    let second = make_event(&ids, "A-200", datetime!(2026-09-01 14:10:00 UTC));
    let second_id = db.insert_pickup_event(&second).unwrap();
    let first = make_event(&ids, "A-100", datetime!(2026-09-01 14:05:00 UTC));
    let first_id = db.insert_pickup_event(&first).unwrap();

    let mut done = make_event(&ids, "A-300", datetime!(2026-09-01 13:00:00 UTC));
    let done_id = db.insert_pickup_event(&done).unwrap();
    done.event_id = Some(done_id);
    done.status = PickupStatus::PickedUp;
    done.completed_time = Some(format_timestamp(datetime!(2026-09-01 13:05:00 UTC)));
    db.update_pickup_status(&done).unwrap();

    let active = db.active_pickups().unwrap();

    assert_eq!(active.len(), 2);
    assert_eq!(active[0].event_id, Some(first_id));
    assert_eq!(active[1].event_id, Some(second_id));
}

#[test]
fn test_active_pickups_for_teacher_filters_by_roster() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);
    let other_teacher = db
        .insert_teacher("Mr. Okafor", "Room 7", "5th", "okafor@example.com")
        .unwrap();
    let other_student = db
        .insert_student("Ava Park", "5th", other_teacher, ids.parent_id, PickupMode::WalkUp)
        .unwrap();

    db.insert_pickup_event(&make_event(&ids, "A-111", test_time()))
        .unwrap();
    let mut other_event = make_event(&ids, "A-222", test_time());
    other_event.student_id = other_student;
    db.insert_pickup_event(&other_event).unwrap();

    let mine = db.active_pickups_for_teacher(ids.teacher_id).unwrap();
    let theirs = db.active_pickups_for_teacher(other_teacher).unwrap();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].student_id, ids.student_id);
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].student_id, other_student);
}

#[test]
fn test_update_pickup_status_persists_status_and_completion() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);
    let mut event = make_event(&ids, "P-321", test_time());
    let event_id = db.insert_pickup_event(&event).unwrap();
    event.event_id = Some(event_id);

    event.status = PickupStatus::SentToPickup;
    db.update_pickup_status(&event).unwrap();
    let stored = db.find_pickup_event(event_id).unwrap().unwrap();
    assert_eq!(stored.status, PickupStatus::SentToPickup);
    assert!(stored.completed_time.is_none());

    event.status = PickupStatus::PickedUp;
    event.completed_time = Some("2026-09-01T15:00:00Z".to_string());
    db.update_pickup_status(&event).unwrap();
    let stored = db.find_pickup_event(event_id).unwrap().unwrap();
    assert_eq!(stored.status, PickupStatus::PickedUp);
    assert_eq!(stored.completed_time.as_deref(), Some("2026-09-01T15:00:00Z"));
}

#[test]
fn test_update_unpersisted_event_is_rejected() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);
    let event = make_event(&ids, "P-321", test_time());

    let result = db.update_pickup_status(&event);

    assert!(matches!(result, Err(PersistenceError::EventNotFound(0))));
}

#[test]
fn test_update_unknown_event_is_rejected() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);
    let mut event = make_event(&ids, "P-321", test_time());
    event.event_id = Some(777);

    let result = db.update_pickup_status(&event);

    assert!(matches!(result, Err(PersistenceError::EventNotFound(777))));
}

#[test]
fn test_completed_pickups_for_teacher_scopes_to_day_and_status() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);

    let mut today_done = make_event(&ids, "A-101", datetime!(2026-09-01 14:00:00 UTC));
    let today_done_id = db.insert_pickup_event(&today_done).unwrap();
    today_done.event_id = Some(today_done_id);
    today_done.status = PickupStatus::PickedUp;
    today_done.completed_time = Some(format_timestamp(datetime!(2026-09-01 14:20:00 UTC)));
    db.update_pickup_status(&today_done).unwrap();

    // Still active today
    db.insert_pickup_event(&make_event(&ids, "A-102", datetime!(2026-09-01 14:30:00 UTC)))
        .unwrap();

    // Completed, but yesterday
    let mut old_done = make_event(&ids, "A-103", datetime!(2026-08-31 14:00:00 UTC));
    let old_done_id = db.insert_pickup_event(&old_done).unwrap();
    old_done.event_id = Some(old_done_id);
    old_done.status = PickupStatus::PickedUp;
    old_done.completed_time = Some(format_timestamp(datetime!(2026-08-31 14:20:00 UTC)));
    db.update_pickup_status(&old_done).unwrap();

    let completed = db
        .completed_pickups_for_teacher(ids.teacher_id, "2026-09-01")
        .unwrap();

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].event_id, Some(today_done_id));
}

#[test]
fn test_todays_pickups_filters_by_checkin_date() {
    let mut db = test_db();
    let ids = seed_directory(&mut db);

    db.insert_pickup_event(&make_event(&ids, "A-201", datetime!(2026-09-01 08:00:00 UTC)))
        .unwrap();
    db.insert_pickup_event(&make_event(&ids, "P-202", datetime!(2026-09-01 15:00:00 UTC)))
        .unwrap();
    db.insert_pickup_event(&make_event(&ids, "A-203", datetime!(2026-08-31 08:00:00 UTC)))
        .unwrap();

    let today = db.todays_pickups("2026-09-01").unwrap();

    assert_eq!(today.len(), 2);
}
