//! Cascade delete of a meeting and all of its child records.
//!
//! The schema carries no database-enforced cascades, so the application
//! sequences the deletes itself and self-verifies by comparing pre-delete
//! counts against what each delete reported.

use rusqlite::Connection;
use serde::Serialize;

use super::{action_item, decision, information, meeting};

/// Snapshot of the meeting taken before deletion.
#[derive(Debug, Serialize)]
pub struct MomSnapshot {
    pub id: i64,
    pub project_name: String,
    pub meeting_date: String,
    pub status: String,
    pub created_by: i64,
}

/// Per-entity row counts, used for both the expected and actual sides of
/// the verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildCounts {
    pub information: i64,
    pub decisions: i64,
    pub action_items: i64,
}

#[derive(Debug, Serialize)]
pub struct CascadeVerification {
    pub expected: ChildCounts,
    pub actual: ChildCounts,
    pub all_deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct CascadeDeleteResult {
    pub mom: MomSnapshot,
    pub deleted: ChildCounts,
    pub verification: CascadeVerification,
}

/// Delete a meeting together with its information, decision and action-item
/// rows. The whole cascade runs in one transaction: any failure rolls back
/// every step, including child deletes that already executed.
pub fn delete_complete(
    conn: &mut Connection,
    mom_id: i64,
) -> rusqlite::Result<Option<CascadeDeleteResult>> {
    let tx = conn.transaction()?;

    let mom = match meeting::find_by_id(&tx, mom_id)? {
        Some(m) => m,
        None => return Ok(None),
    };

    let expected = ChildCounts {
        information: information::count_for_mom(&tx, mom_id)?,
        decisions: decision::count_for_mom(&tx, mom_id)?,
        action_items: action_item::count_for_mom(&tx, mom_id)?,
    };

    let actual = ChildCounts {
        information: information::delete_all_for_mom(&tx, mom_id)?,
        decisions: decision::delete_all_for_mom(&tx, mom_id)?,
        action_items: action_item::delete_all_for_mom(&tx, mom_id)?,
    };

    if !meeting::delete(&tx, mom_id)? {
        // The row was read at the top of this transaction, so this cannot
        // happen under SQLite's write serialization; bail out and roll back
        // the child deletes if it somehow does.
        return Err(rusqlite::Error::QueryReturnedNoRows);
    }
    tx.commit()?;

    let all_deleted = expected == actual;
    Ok(Some(CascadeDeleteResult {
        mom: MomSnapshot {
            id: mom.id,
            project_name: mom.project_name,
            meeting_date: mom.meeting_date,
            status: mom.status,
            created_by: mom.created_by,
        },
        deleted: actual.clone(),
        verification: CascadeVerification {
            expected,
            actual,
            all_deleted,
        },
    }))
}
