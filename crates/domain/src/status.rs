// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a student is released at dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PickupMode {
    /// Released to the vehicle queue.
    CarLine,
    /// Released to a pedestrian at the walk-up point.
    #[default]
    WalkUp,
}

impl PickupMode {
    /// Converts this mode to its wire/database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CarLine => "car_line",
            Self::WalkUp => "walk_up",
        }
    }

    /// Maps the check-in request's pickup-type string to a mode.
    ///
    /// Anything other than the literal `"car_line"` becomes `WalkUp` with no
    /// validation error; the mobile clients send free-form strings here.
    /// Callers that need a strict parse use [`FromStr`] instead.
    #[must_use]
    pub fn from_checkin_value(value: &str) -> Self {
        if value == "car_line" {
            Self::CarLine
        } else {
            Self::WalkUp
        }
    }
}

impl FromStr for PickupMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car_line" => Ok(Self::CarLine),
            "walk_up" => Ok(Self::WalkUp),
            _ => Err(DomainError::UnknownPickupMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for PickupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a pickup event sits in the release flow.
///
/// The flow runs waiting → `sent_to_pickup` → `picked_up`. Status updates
/// overwrite unconditionally; there is no forward-only enforcement, and the
/// admin dashboards rely on being able to correct a mistaken advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    /// Checked in; student not yet called.
    #[default]
    Waiting,
    /// Student has been sent to the pickup area.
    SentToPickup,
    /// Pickup complete.
    PickedUp,
}

impl PickupStatus {
    /// Converts this status to its wire/database representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::SentToPickup => "sent_to_pickup",
            Self::PickedUp => "picked_up",
        }
    }
}

impl FromStr for PickupStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "sent_to_pickup" => Ok(Self::SentToPickup),
            "picked_up" => Ok(Self::PickedUp),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
