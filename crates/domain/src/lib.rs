// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain layer for Curbside, the school pickup-coordination system.
//!
//! This crate holds the entity types shared by every other layer, the
//! geofence validator, queue-ticket generation, and the pickup mode/status
//! enums. It performs no I/O; resolving entities against the database is the
//! persistence crate's job.

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

mod error;
mod geofence;
mod status;
mod ticket;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use geofence::{EARTH_RADIUS_METERS, haversine_distance_meters, validate_location};
pub use status::{PickupMode, PickupStatus};
pub use ticket::generate_queue_ticket;
pub use types::{GpsFix, Parent, PickupEvent, SchoolZone, Student, Teacher, format_timestamp};
