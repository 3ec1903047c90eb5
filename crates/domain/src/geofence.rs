// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Geofence validation for pickup check-ins.
//!
//! A check-in is accepted when the submitted GPS fix lies within the zone's
//! radius, widened by the fix's reported accuracy: a noisy signal from a
//! parent standing at the fence line should pass, not fail.

use crate::types::{GpsFix, SchoolZone};

/// Mean Earth radius in meters, as used by the Haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two points given in decimal
/// degrees, via the Haversine formula.
///
/// The result is symmetric in its arguments. Coordinates are assumed to be
/// valid latitudes/longitudes; malformed values are the caller's problem and
/// are rejected upstream when request fields are parsed.
#[must_use]
pub fn haversine_distance_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat: f64 = (lat2 - lat1).to_radians();
    let d_lng: f64 = (lng2 - lng1).to_radians();

    let a: f64 = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c: f64 = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Decides whether a GPS fix is inside the pickup area.
///
/// With no zone configured this returns `true` unconditionally: a school that
/// has not set up its geofence gets pickup coordination without location
/// checks rather than a dead check-in flow (fail-open policy).
///
/// Otherwise the fix is accepted iff its Haversine distance from the zone
/// center is at most `radius_meters + accuracy`.
#[must_use]
pub fn validate_location(zone: Option<&SchoolZone>, fix: &GpsFix) -> bool {
    let Some(zone) = zone else {
        return true;
    };

    let distance: f64 =
        haversine_distance_meters(fix.lat, fix.lng, zone.center_lat, zone.center_lng);

    distance <= f64::from(zone.radius_meters) + fix.accuracy
}
