// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Generates a queue ticket of the form `{A|P}-{100..999}`.
///
/// The letter reflects AM/PM of the server clock at creation time and the
/// number is drawn uniformly from the 900-value range. No uniqueness check is
/// performed; two concurrent check-ins can receive the same ticket. Tickets
/// identify a request to humans at the curb, not to the database — the event
/// ID does that.
#[must_use]
pub fn generate_queue_ticket(now: OffsetDateTime) -> String {
    let period: char = if now.hour() >= 12 { 'P' } else { 'A' };
    let number: u16 = rand::random_range(100..1000);
    format!("{period}-{number}")
}
