// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{test_fix, test_parent, test_student};
use crate::{PickupStats, apply_status_update, compute_stats, create_pickup_event};
use curbside_domain::PickupEvent;
use time::macros::datetime;

fn event_with_status(status_name: &str) -> PickupEvent {
    let mut event: PickupEvent = create_pickup_event(
        &test_parent(1, "Alice Johnson"),
        &test_student(10, "Bob Johnson", 5, 1),
        "car_line",
        test_fix(),
        datetime!(2026-09-01 15:00:00 UTC),
    );
    apply_status_update(&mut event, status_name, datetime!(2026-09-01 15:10:00 UTC)).unwrap();
    event
}

#[test]
fn test_stats_count_events_by_status() {
    let events: Vec<PickupEvent> = vec![
        event_with_status("waiting"),
        event_with_status("waiting"),
        event_with_status("sent_to_pickup"),
        event_with_status("picked_up"),
    ];

    let stats: PickupStats = compute_stats(120, &events);

    assert_eq!(stats.total_students, 120);
    assert_eq!(stats.total_today, 4);
    assert_eq!(stats.waiting, 2);
    assert_eq!(stats.sent_to_pickup, 1);
    assert_eq!(stats.completed, 1);
}

#[test]
fn test_stats_with_no_events_today() {
    let stats: PickupStats = compute_stats(85, &[]);

    assert_eq!(stats.total_today, 0);
    assert_eq!(stats.waiting, 0);
    assert_eq!(stats.sent_to_pickup, 0);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.average_wait_time, "3.2 min");
}

#[test]
fn test_stats_serialize_with_dashboard_field_names() {
    let stats: PickupStats = compute_stats(1, &[]);
    let json: serde_json::Value = serde_json::to_value(&stats).unwrap();

    assert!(json.get("totalStudents").is_some());
    assert!(json.get("totalToday").is_some());
    assert!(json.get("sentToPickup").is_some());
    assert!(json.get("averageWaitTime").is_some());
}
