// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! School zone lookup.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::SchoolZoneRow;
use crate::diesel_schema::school_zones;
use crate::error::PersistenceError;
use curbside_domain::SchoolZone;

/// Retrieves the active school zone.
///
/// The zone table is a singleton by convention: the first row (lowest ID) is
/// the active geofence. `Ok(None)` means no zone is configured and location
/// validation fails open.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn default_school_zone(
    conn: &mut SqliteConnection,
) -> Result<Option<SchoolZone>, PersistenceError> {
    let result: Result<SchoolZoneRow, diesel::result::Error> = school_zones::table
        .order(school_zones::zone_id.asc())
        .select(SchoolZoneRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(SchoolZone::from(row))),
        Err(diesel::result::Error::NotFound) => {
            debug!("No school zone configured; location validation fails open");
            Ok(None)
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
