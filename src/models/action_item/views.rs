//! Read views over action items: assignee- and reassignment-scoped queries,
//! overdue and due-soon reporting.

use std::collections::BTreeMap;

use rusqlite::{Connection, params};

use super::queries::{map_row, today};
use super::types::*;

/// Items originally assigned to `username`, joined against the owning
/// meeting so rows whose meeting no longer exists are silently excluded.
/// The denormalized `project` comes straight off the item row.
pub fn find_by_assigned(
    conn: &Connection,
    username: &str,
    sort_by: &str,
    order: &str,
) -> rusqlite::Result<Vec<ActionItem>> {
    let sort_col = match sort_by {
        "status" => "ai.status",
        "action_item" => "ai.action_item",
        _ => "ai.due_date",
    };
    let direction = if order.eq_ignore_ascii_case("desc") {
        "DESC"
    } else {
        "ASC"
    };

    let sql = format!(
        "SELECT ai.* FROM mom_action_item ai \
         JOIN mom m ON m.id = ai.mom_id \
         WHERE ai.assigned_to = ?1 ORDER BY {} {}",
        sort_col, direction
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![username], map_row)?;
    rows.collect()
}

/// Items whose due date is strictly before today, due date ascending.
/// Status is deliberately not filtered: a Completed item past its due date
/// still counts as overdue.
pub fn find_overdue(conn: &Connection) -> rusqlite::Result<Vec<ActionItem>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM mom_action_item WHERE due_date < ?1 ORDER BY due_date ASC",
    )?;
    let rows = stmt.query_map(params![today()], map_row)?;
    rows.collect()
}

/// Items with a due date between today and today+days, inclusive on both
/// ends, due date ascending.
pub fn find_due_soon(conn: &Connection, days: i64) -> rusqlite::Result<Vec<ActionItem>> {
    let start = chrono::Local::now().date_naive();
    let end = start + chrono::Duration::days(days);
    let mut stmt = conn.prepare(
        "SELECT * FROM mom_action_item \
         WHERE due_date >= ?1 AND due_date <= ?2 ORDER BY due_date ASC",
    )?;
    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;
    rows.collect()
}

/// Items currently reassigned to `username`, each enriched with its remark
/// breakdown. Returns the page plus the total count for the filter.
pub fn find_by_reassigned(
    conn: &Connection,
    username: &str,
    sort_by: &str,
    order: &str,
    skip: i64,
    limit: i64,
) -> rusqlite::Result<(Vec<ReassignedActionItem>, i64)> {
    let sort_col = match sort_by {
        "status" => "status",
        "updated_at" => "updated_at",
        "meeting_date" => "meeting_date",
        _ => "due_date",
    };
    let direction = if order.eq_ignore_ascii_case("desc") {
        "DESC"
    } else {
        "ASC"
    };

    let total: i64 = conn.query_row(
        "SELECT COUNT(*) FROM mom_action_item WHERE re_assigned_to = ?1",
        params![username],
        |row| row.get(0),
    )?;

    let sql = format!(
        "SELECT * FROM mom_action_item WHERE re_assigned_to = ?1 \
         ORDER BY {} {}, id DESC LIMIT {} OFFSET {}",
        sort_col, direction, limit, skip
    );
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(params![username], map_row)?
        .collect::<Result<Vec<ActionItem>, _>>()?;

    Ok((items.into_iter().map(enrich_with_remarks).collect(), total))
}

fn enrich_with_remarks(item: ActionItem) -> ReassignedActionItem {
    let remark_count = item.remark.len();
    let latest_remark = latest_remark(&item.remark);
    let remarks_by_user = group_remarks_by_user(&item.remark);
    ReassignedActionItem {
        item,
        remark_count,
        latest_remark,
        remarks_by_user,
    }
}

/// The entry with the maximum `remark_date`; later entries win date ties.
/// If any entry's date fails to parse, the last entry in storage order wins.
fn latest_remark(remarks: &[RemarkEntry]) -> Option<RemarkEntry> {
    if remarks.is_empty() {
        return None;
    }
    let mut dated = Vec::with_capacity(remarks.len());
    for entry in remarks {
        match chrono::NaiveDate::parse_from_str(&entry.remark_date, "%Y-%m-%d") {
            Ok(date) => dated.push((date, entry)),
            Err(_) => return remarks.last().cloned(),
        }
    }
    dated
        .into_iter()
        .max_by_key(|(date, _)| *date)
        .map(|(_, entry)| entry.clone())
}

/// Bucket every entry under its author, preserving storage order within
/// each bucket.
fn group_remarks_by_user(remarks: &[RemarkEntry]) -> BTreeMap<String, Vec<RemarkEntry>> {
    let mut grouped: BTreeMap<String, Vec<RemarkEntry>> = BTreeMap::new();
    for entry in remarks {
        grouped.entry(entry.by.clone()).or_default().push(entry.clone());
    }
    grouped
}
