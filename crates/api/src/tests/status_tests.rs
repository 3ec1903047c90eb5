// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{test_fix, test_parent, test_student};
use crate::{ApiError, apply_status_update, create_pickup_event};
use curbside_domain::{PickupEvent, PickupStatus};
use time::macros::datetime;

fn waiting_event() -> PickupEvent {
    create_pickup_event(
        &test_parent(1, "Alice Johnson"),
        &test_student(10, "Bob Johnson", 5, 1),
        "car_line",
        test_fix(),
        datetime!(2026-09-01 15:00:00 UTC),
    )
}

#[test]
fn test_advance_to_sent_to_pickup() {
    let mut event: PickupEvent = waiting_event();

    let status = apply_status_update(
        &mut event,
        "sent_to_pickup",
        datetime!(2026-09-01 15:05:00 UTC),
    )
    .unwrap();

    assert_eq!(status, PickupStatus::SentToPickup);
    assert_eq!(event.status, PickupStatus::SentToPickup);
    assert!(event.completed_time.is_none());
}

#[test]
fn test_picked_up_stamps_completion_time() {
    let mut event: PickupEvent = waiting_event();

    apply_status_update(&mut event, "picked_up", datetime!(2026-09-01 15:12:00 UTC)).unwrap();

    assert_eq!(event.status, PickupStatus::PickedUp);
    assert_eq!(
        event.completed_time.as_deref(),
        Some("2026-09-01T15:12:00Z")
    );
}

#[test]
fn test_regression_from_picked_up_keeps_completion_time() {
    let mut event: PickupEvent = waiting_event();
    apply_status_update(&mut event, "picked_up", datetime!(2026-09-01 15:12:00 UTC)).unwrap();

    // Updates overwrite unconditionally; moving backward is allowed and the
    // completion stamp stays put.
    let status = apply_status_update(&mut event, "waiting", datetime!(2026-09-01 15:20:00 UTC));

    assert_eq!(status, Ok(PickupStatus::Waiting));
    assert_eq!(event.status, PickupStatus::Waiting);
    assert_eq!(
        event.completed_time.as_deref(),
        Some("2026-09-01T15:12:00Z")
    );
}

#[test]
fn test_unrecognized_status_name_is_rejected_without_mutation() {
    let mut event: PickupEvent = waiting_event();

    let result = apply_status_update(&mut event, "released", datetime!(2026-09-01 15:05:00 UTC));

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(event.status, PickupStatus::Waiting);
}
