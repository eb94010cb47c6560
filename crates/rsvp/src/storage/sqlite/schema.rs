//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps IDs monotonic: an ID is never handed out twice, even
/// after the row that held it is deleted.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS rsvp (
    rsvp_id INTEGER PRIMARY KEY AUTOINCREMENT,
    guest_name VARCHAR(50) NOT NULL CHECK (length(guest_name) <= 50),
    total_attending INTEGER NOT NULL CHECK (total_attending >= 0)
);
"#;

pub const INSERT_RSVP: &str = r#"
INSERT INTO rsvp (guest_name, total_attending)
VALUES (?1, ?2)
"#;

pub const SELECT_RSVP_BY_ID: &str = r#"
SELECT rsvp_id, guest_name, total_attending
FROM rsvp
WHERE rsvp_id = ?1
"#;

pub const SELECT_ALL_RSVPS: &str = r#"
SELECT rsvp_id, guest_name, total_attending
FROM rsvp
ORDER BY rsvp_id ASC
"#;

pub const UPDATE_RSVP: &str = r#"
UPDATE rsvp
SET guest_name = ?2, total_attending = ?3
WHERE rsvp_id = ?1
"#;

pub const DELETE_RSVP: &str = r#"
DELETE FROM rsvp
WHERE rsvp_id = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS rsvp"));
        assert!(CREATE_TABLES.contains("rsvp_id INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_RSVP.contains("INSERT"));
        assert!(SELECT_RSVP_BY_ID.contains("WHERE rsvp_id = ?1"));
        assert!(SELECT_ALL_RSVPS.contains("SELECT"));
        assert!(UPDATE_RSVP.contains("UPDATE"));
        assert!(DELETE_RSVP.contains("DELETE"));
    }

    #[test]
    fn test_schema_column_names() {
        for column in ["rsvp_id", "guest_name", "total_attending"] {
            assert!(CREATE_TABLES.contains(column));
            assert!(SELECT_RSVP_BY_ID.contains(column));
            assert!(SELECT_ALL_RSVPS.contains(column));
        }
    }
}
