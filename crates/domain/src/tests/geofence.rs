// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GpsFix, SchoolZone, haversine_distance_meters, validate_location};

fn test_zone(center_lat: f64, center_lng: f64, radius_meters: i32) -> SchoolZone {
    SchoolZone {
        zone_id: 1,
        school_name: String::from("Test Elementary"),
        center_lat,
        center_lng,
        radius_meters,
        created_at: String::from("2026-08-01T00:00:00Z"),
    }
}

#[test]
fn test_haversine_distance_is_symmetric() {
    let d1: f64 = haversine_distance_meters(40.0, -75.0, 40.001, -75.001);
    let d2: f64 = haversine_distance_meters(40.001, -75.001, 40.0, -75.0);
    assert!((d1 - d2).abs() < 1e-9);
}

#[test]
fn test_haversine_distance_of_identical_points_is_zero() {
    let d: f64 = haversine_distance_meters(40.0, -75.0, 40.0, -75.0);
    assert!(d.abs() < 1e-9);
}

#[test]
fn test_haversine_matches_known_reference_distance() {
    // One degree of latitude is roughly 111.2 km.
    let d: f64 = haversine_distance_meters(40.0, -75.0, 41.0, -75.0);
    assert!((d - 111_195.0).abs() < 200.0, "got {d}");
}

#[test]
fn test_zone_center_is_always_inside_its_own_zone() {
    let zone: SchoolZone = test_zone(40.0, -75.0, 1);
    let fix: GpsFix = GpsFix {
        lat: 40.0,
        lng: -75.0,
        accuracy: 0.0,
    };
    assert!(validate_location(Some(&zone), &fix));
}

#[test]
fn test_no_zone_allows_arbitrary_coordinates() {
    let origin: GpsFix = GpsFix {
        lat: 0.0,
        lng: 0.0,
        accuracy: 0.0,
    };
    let pole: GpsFix = GpsFix {
        lat: 90.0,
        lng: 180.0,
        accuracy: 0.0,
    };
    assert!(validate_location(None, &origin));
    assert!(validate_location(None, &pole));
}

#[test]
fn test_point_inside_radius_plus_accuracy_is_valid() {
    // Zone radius 100m, accuracy 10m: a point ~50m away must pass.
    let zone: SchoolZone = test_zone(40.0, -75.0, 100);
    // ~0.00045 degrees of latitude is ~50m.
    let fix: GpsFix = GpsFix {
        lat: 40.00045,
        lng: -75.0,
        accuracy: 10.0,
    };
    assert!(validate_location(Some(&zone), &fix));
}

#[test]
fn test_point_outside_radius_plus_accuracy_is_invalid() {
    // Zone radius 100m, accuracy 10m: a point ~150m away must fail.
    let zone: SchoolZone = test_zone(40.0, -75.0, 100);
    // ~0.00135 degrees of latitude is ~150m.
    let fix: GpsFix = GpsFix {
        lat: 40.00135,
        lng: -75.0,
        accuracy: 10.0,
    };
    assert!(!validate_location(Some(&zone), &fix));
}

#[test]
fn test_validation_is_monotonic_in_accuracy() {
    let zone: SchoolZone = test_zone(40.0, -75.0, 100);
    let base: GpsFix = GpsFix {
        lat: 40.0012,
        lng: -75.0,
        accuracy: 40.0,
    };
    assert!(validate_location(Some(&zone), &base));

    // Increasing accuracy never turns a valid point invalid.
    for accuracy in [50.0, 100.0, 500.0] {
        let wider: GpsFix = GpsFix { accuracy, ..base };
        assert!(validate_location(Some(&zone), &wider));
    }
}

#[test]
fn test_accuracy_widens_the_acceptance_radius() {
    let zone: SchoolZone = test_zone(40.0, -75.0, 100);
    // ~133m out: outside the bare radius, inside radius + 50m accuracy.
    let tight: GpsFix = GpsFix {
        lat: 40.0012,
        lng: -75.0,
        accuracy: 0.0,
    };
    let loose: GpsFix = GpsFix {
        accuracy: 50.0,
        ..tight
    };
    assert!(!validate_location(Some(&zone), &tight));
    assert!(validate_location(Some(&zone), &loose));
}
