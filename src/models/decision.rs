//! Decision entries attached to a meeting.

use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub id: i64,
    pub mom_id: i64,
    pub decision: String,
}

#[derive(Debug, Deserialize)]
pub struct NewDecision {
    pub mom_id: i64,
    pub decision: String,
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Decision> {
    Ok(Decision {
        id: row.get("id")?,
        mom_id: row.get("mom_id")?,
        decision: row.get("decision")?,
    })
}

/// Insert a new decision. Returns the generated row id.
pub fn create(conn: &Connection, new: &NewDecision) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO mom_decision (mom_id, decision) VALUES (?1, ?2)",
        params![new.mom_id, new.decision],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Decision>> {
    let mut stmt = conn.prepare("SELECT * FROM mom_decision WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], map_row)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// List decisions newest-first, optionally scoped to one meeting. Returns the
/// page plus the total count for the filter.
pub fn find_paginated(
    conn: &Connection,
    mom_id: Option<i64>,
    skip: i64,
    limit: i64,
) -> rusqlite::Result<(Vec<Decision>, i64)> {
    let mut where_clause = String::new();
    let mut params_list: Vec<String> = vec![];
    if let Some(mid) = mom_id {
        where_clause.push_str(" AND mom_id = ?");
        params_list.push(mid.to_string());
    }

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM mom_decision WHERE 1=1{}", where_clause),
        rusqlite::params_from_iter(params_list.iter()),
        |row| row.get(0),
    )?;

    let sql = format!(
        "SELECT * FROM mom_decision WHERE 1=1{} ORDER BY id DESC LIMIT {} OFFSET {}",
        where_clause, limit, skip
    );
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(rusqlite::params_from_iter(params_list.iter()), map_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok((items, total))
}

/// All decisions for a meeting, in insertion order.
pub fn find_all_for_mom(conn: &Connection, mom_id: i64) -> rusqlite::Result<Vec<Decision>> {
    let mut stmt = conn.prepare("SELECT * FROM mom_decision WHERE mom_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![mom_id], map_row)?;
    rows.collect()
}

pub fn count_for_mom(conn: &Connection, mom_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM mom_decision WHERE mom_id = ?1",
        params![mom_id],
        |row| row.get(0),
    )
}

pub fn update(conn: &Connection, id: i64, text: &str) -> rusqlite::Result<Option<Decision>> {
    let changed = conn.execute(
        "UPDATE mom_decision SET decision = ?1 WHERE id = ?2",
        params![text, id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    find_by_id(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let changed = conn.execute("DELETE FROM mom_decision WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Bulk delete for one meeting. The count is taken before the delete runs,
/// since the delete itself does not report an accurate row count on every
/// backend.
pub fn delete_all_for_mom(conn: &Connection, mom_id: i64) -> rusqlite::Result<i64> {
    let count = count_for_mom(conn, mom_id)?;
    conn.execute("DELETE FROM mom_decision WHERE mom_id = ?1", params![mom_id])?;
    Ok(count)
}
