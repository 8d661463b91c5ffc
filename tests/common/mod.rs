//! Shared test infrastructure for model layer tests.
//!
//! `setup_test_db()` creates a temporary SQLite database with the full
//! schema applied. The returned TempDir must be kept alive for the
//! Connection to remain valid.

#![allow(dead_code)]

use rusqlite::Connection;
use tempfile::TempDir;

use momtrack::db::MIGRATIONS;
use momtrack::models::action_item::NewActionItem;
use momtrack::models::meeting::NewMom;

pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = rusqlite::Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");

    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");

    (dir, conn)
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// A date `n` days away from today (negative for the past).
pub fn days_from_today(n: i64) -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(n))
        .format("%Y-%m-%d")
        .to_string()
}

/// Meeting creation payload with sensible defaults.
pub fn new_mom(project: &str, meeting_date: &str) -> NewMom {
    NewMom {
        meeting_date: meeting_date.to_string(),
        start_time: "10:00".to_string(),
        end_time: "11:00".to_string(),
        present_attendees: vec!["alice".to_string(), "bob".to_string()],
        absent_attendees: vec![],
        external_attendees: vec![],
        project_name: project.to_string(),
        meeting_type: "Online".to_string(),
        location: "https://meet.example.com/abc".to_string(),
        status: "Open".to_string(),
        created_by: 1,
    }
}

/// Action item payload assigned to `username`, due on `due_date`.
pub fn new_action_item(mom_id: i64, username: &str, due_date: &str) -> NewActionItem {
    NewActionItem {
        mom_id,
        project: "Atlas".to_string(),
        action_item: "Follow up on integration".to_string(),
        assigned_to: username.to_string(),
        re_assigned_to: None,
        due_date: due_date.to_string(),
        status: "Pending".to_string(),
        remark: vec![],
        meeting_date: None,
    }
}
