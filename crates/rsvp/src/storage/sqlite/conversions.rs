//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.

use rusqlite::Row;

use rsvp_core::rsvp::Rsvp;

/// Convert a SQLite row to an Rsvp.
///
/// Expected columns: rsvp_id, guest_name, total_attending
pub fn row_to_rsvp(row: &Row) -> rusqlite::Result<Rsvp> {
    let id: i64 = row.get(0)?;
    let guest_name: String = row.get(1)?;
    let total_attending: i32 = row.get(2)?;

    Ok(Rsvp {
        id,
        guest_name,
        total_attending,
    })
}
