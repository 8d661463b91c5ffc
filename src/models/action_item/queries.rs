use rusqlite::{Connection, params};

use super::types::*;

pub(super) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn remarks_to_json(remarks: &[RemarkEntry]) -> String {
    serde_json::to_string(remarks).unwrap_or_else(|_| "[]".to_string())
}

/// A null or unreadable remark column normalizes to the empty log.
fn remarks_from_json(raw: Option<&str>) -> Vec<RemarkEntry> {
    match raw {
        Some(s) => serde_json::from_str(s).unwrap_or_default(),
        None => Vec::new(),
    }
}

pub(super) fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ActionItem> {
    let raw_remark: Option<String> = row.get("remark")?;
    Ok(ActionItem {
        id: row.get("id")?,
        mom_id: row.get("mom_id")?,
        project: row.get("project")?,
        action_item: row.get("action_item")?,
        assigned_to: row.get("assigned_to")?,
        re_assigned_to: row.get("re_assigned_to")?,
        due_date: row.get("due_date")?,
        status: row.get("status")?,
        remark: remarks_from_json(raw_remark.as_deref()),
        updated_at: row.get("updated_at")?,
        meeting_date: row.get("meeting_date")?,
    })
}

/// Insert a new action item. The remark log starts from whatever entries
/// were supplied (empty by default) and `updated_at` is stamped with today.
/// Returns the generated row id.
pub fn create(conn: &Connection, new: &NewActionItem) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO mom_action_item (mom_id, project, action_item, assigned_to, \
         re_assigned_to, due_date, status, remark, updated_at, meeting_date) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            new.mom_id,
            new.project,
            new.action_item,
            new.assigned_to,
            new.re_assigned_to,
            new.due_date,
            new.status,
            remarks_to_json(&new.remark),
            today(),
            new.meeting_date,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find an action item by id, remark log normalized.
pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<ActionItem>> {
    let mut stmt = conn.prepare("SELECT * FROM mom_action_item WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], map_row)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// List action items ordered by due date ascending; items due the same day
/// show most-recently-created first. Returns the page plus the total count
/// for the filter.
pub fn find_paginated(
    conn: &Connection,
    filter: &ActionItemFilter,
    skip: i64,
    limit: i64,
) -> rusqlite::Result<(Vec<ActionItem>, i64)> {
    let mut where_clause = String::new();
    let mut params_list: Vec<String> = vec![];

    if let Some(mid) = filter.mom_id {
        where_clause.push_str(" AND mom_id = ?");
        params_list.push(mid.to_string());
    }
    if let Some(a) = &filter.assigned_to {
        where_clause.push_str(" AND assigned_to = ?");
        params_list.push(a.clone());
    }
    if let Some(d) = &filter.due_date {
        where_clause.push_str(" AND due_date = ?");
        params_list.push(d.clone());
    }
    if let Some(u) = &filter.updated_at {
        where_clause.push_str(" AND updated_at = ?");
        params_list.push(u.clone());
    }
    if let Some(r) = &filter.remark {
        where_clause.push_str(" AND remark LIKE '%' || ? || '%'");
        params_list.push(r.clone());
    }
    if let Some(r) = &filter.re_assigned_to {
        where_clause.push_str(" AND re_assigned_to = ?");
        params_list.push(r.clone());
    }

    let total: i64 = conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM mom_action_item WHERE 1=1{}",
            where_clause
        ),
        rusqlite::params_from_iter(params_list.iter()),
        |row| row.get(0),
    )?;

    let sql = format!(
        "SELECT * FROM mom_action_item WHERE 1=1{} \
         ORDER BY due_date ASC, id DESC LIMIT {} OFFSET {}",
        where_clause, limit, skip
    );
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(rusqlite::params_from_iter(params_list.iter()), map_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok((items, total))
}

/// All items for a meeting, due date ascending, no pagination.
pub fn find_all_for_mom(conn: &Connection, mom_id: i64) -> rusqlite::Result<Vec<ActionItem>> {
    let mut stmt = conn
        .prepare("SELECT * FROM mom_action_item WHERE mom_id = ?1 ORDER BY due_date ASC")?;
    let rows = stmt.query_map(params![mom_id], map_row)?;
    rows.collect()
}

pub fn count_for_mom(conn: &Connection, mom_id: i64) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM mom_action_item WHERE mom_id = ?1",
        params![mom_id],
        |row| row.get(0),
    )
}

/// Apply a partial update. Every provided field overwrites the stored value
/// except `remark`: supplied entries extend the existing log instead of
/// replacing it. `updated_at` is stamped with today regardless of which
/// fields changed.
pub fn update(
    conn: &Connection,
    id: i64,
    upd: &ActionItemUpdate,
) -> rusqlite::Result<Option<ActionItem>> {
    let existing = match find_by_id(conn, id)? {
        Some(item) => item,
        None => return Ok(None),
    };

    let mut remarks = existing.remark.clone();
    if let Some(new_entries) = &upd.remark {
        remarks.extend(new_entries.iter().cloned());
    }

    let re_assigned = match &upd.re_assigned_to {
        Some(r) => Some(r.clone()),
        None => existing.re_assigned_to.clone(),
    };
    let meeting_date = match &upd.meeting_date {
        Some(d) => Some(d.clone()),
        None => existing.meeting_date.clone(),
    };

    conn.execute(
        "UPDATE mom_action_item SET project = ?1, action_item = ?2, assigned_to = ?3, \
         re_assigned_to = ?4, due_date = ?5, status = ?6, remark = ?7, updated_at = ?8, \
         meeting_date = ?9 WHERE id = ?10",
        params![
            upd.project.as_ref().unwrap_or(&existing.project),
            upd.action_item.as_ref().unwrap_or(&existing.action_item),
            upd.assigned_to.as_ref().unwrap_or(&existing.assigned_to),
            re_assigned,
            upd.due_date.as_ref().unwrap_or(&existing.due_date),
            upd.status.as_ref().unwrap_or(&existing.status),
            remarks_to_json(&remarks),
            today(),
            meeting_date,
            id,
        ],
    )?;

    find_by_id(conn, id)
}

/// Append one remark entry to an item's log, stamping `remark_date` and
/// `updated_at` with today.
///
/// The stored list is copied, extended, and written back whole; the
/// read-modify-write runs in a transaction so the request either lands fully
/// or rolls back. Known limitation: two requests racing on the same item can
/// still lose one append.
pub fn add_remark(
    conn: &mut Connection,
    id: i64,
    text: &str,
    username: &str,
) -> rusqlite::Result<Option<ActionItem>> {
    let tx = conn.transaction()?;

    let existing = match find_by_id(&tx, id)? {
        Some(item) => item,
        None => return Ok(None),
    };

    let mut remarks = existing.remark.clone();
    remarks.push(RemarkEntry {
        text: text.to_string(),
        by: username.to_string(),
        remark_date: today(),
    });

    tx.execute(
        "UPDATE mom_action_item SET remark = ?1, updated_at = ?2 WHERE id = ?3",
        params![remarks_to_json(&remarks), today(), id],
    )?;
    tx.commit()?;

    find_by_id(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let changed = conn.execute("DELETE FROM mom_action_item WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Bulk delete for one meeting. The count is taken before the delete runs,
/// since the delete itself does not report an accurate row count on every
/// backend.
pub fn delete_all_for_mom(conn: &Connection, mom_id: i64) -> rusqlite::Result<i64> {
    let count = count_for_mom(conn, mom_id)?;
    conn.execute(
        "DELETE FROM mom_action_item WHERE mom_id = ?1",
        params![mom_id],
    )?;
    Ok(count)
}
