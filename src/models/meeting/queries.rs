use rusqlite::{Connection, params};

use super::types::*;

/// Attendee lists are stored as JSON arrays in TEXT columns.
fn names_to_json(names: &[String]) -> String {
    serde_json::to_string(names).unwrap_or_else(|_| "[]".to_string())
}

fn names_from_json(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn map_mom_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Mom> {
    Ok(Mom {
        id: row.get("id")?,
        meeting_date: row.get("meeting_date")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        present_attendees: names_from_json(&row.get::<_, String>("present_attendees")?),
        absent_attendees: names_from_json(&row.get::<_, String>("absent_attendees")?),
        external_attendees: names_from_json(&row.get::<_, String>("external_attendees")?),
        project_name: row.get("project_name")?,
        meeting_type: row.get("meeting_type")?,
        location: row.get("location")?,
        status: row.get("status")?,
        created_date: row.get("created_date")?,
        created_by: row.get("created_by")?,
    })
}

/// Insert a new meeting. `created_date` is stamped with today's date.
/// Returns the generated row id.
pub fn create(conn: &Connection, new: &NewMom) -> rusqlite::Result<i64> {
    let created_date = chrono::Local::now().format("%Y-%m-%d").to_string();
    conn.execute(
        "INSERT INTO mom (meeting_date, start_time, end_time, present_attendees, \
         absent_attendees, external_attendees, project_name, meeting_type, location, \
         status, created_date, created_by) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            new.meeting_date,
            new.start_time,
            new.end_time,
            names_to_json(&new.present_attendees),
            names_to_json(&new.absent_attendees),
            names_to_json(&new.external_attendees),
            new.project_name,
            new.meeting_type,
            new.location,
            new.status,
            created_date,
            new.created_by,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find a meeting by id.
pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Mom>> {
    let mut stmt = conn.prepare("SELECT * FROM mom WHERE id = ?1")?;
    let mut rows = stmt.query_map(params![id], map_mom_row)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// List meetings with optional filters, newest meeting date first (creation
/// date breaks ties). Returns the page of rows plus the total count for the
/// filter.
pub fn find_paginated(
    conn: &Connection,
    filter: &MomFilter,
    skip: i64,
    limit: i64,
) -> rusqlite::Result<(Vec<Mom>, i64)> {
    let mut where_clause = String::new();
    let mut params_list: Vec<String> = vec![];

    if let Some(p) = &filter.project {
        where_clause.push_str(" AND LOWER(project_name) LIKE '%' || LOWER(?) || '%'");
        params_list.push(p.clone());
    }
    if let Some(s) = &filter.status {
        where_clause.push_str(" AND status = ?");
        params_list.push(s.clone());
    }
    if let Some(t) = &filter.meeting_type {
        where_clause.push_str(" AND meeting_type = ?");
        params_list.push(t.clone());
    }
    if let Some(d) = &filter.meeting_date {
        where_clause.push_str(" AND meeting_date = ?");
        params_list.push(d.clone());
    }
    if let Some(c) = filter.created_by {
        where_clause.push_str(" AND created_by = ?");
        params_list.push(c.to_string());
    }

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM mom WHERE 1=1{}", where_clause),
        rusqlite::params_from_iter(params_list.iter()),
        |row| row.get(0),
    )?;

    let sql = format!(
        "SELECT * FROM mom WHERE 1=1{} \
         ORDER BY meeting_date DESC, created_date DESC LIMIT {} OFFSET {}",
        where_clause, limit, skip
    );
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(rusqlite::params_from_iter(params_list.iter()), map_mom_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok((items, total))
}

/// Apply a partial update. Only provided fields overwrite the stored row.
pub fn update(conn: &Connection, id: i64, upd: &MomUpdate) -> rusqlite::Result<Option<Mom>> {
    let existing = match find_by_id(conn, id)? {
        Some(m) => m,
        None => return Ok(None),
    };

    let present = upd
        .present_attendees
        .as_ref()
        .unwrap_or(&existing.present_attendees);
    let absent = upd
        .absent_attendees
        .as_ref()
        .unwrap_or(&existing.absent_attendees);
    let external = upd
        .external_attendees
        .as_ref()
        .unwrap_or(&existing.external_attendees);

    conn.execute(
        "UPDATE mom SET meeting_date = ?1, start_time = ?2, end_time = ?3, \
         present_attendees = ?4, absent_attendees = ?5, external_attendees = ?6, \
         project_name = ?7, meeting_type = ?8, location = ?9, status = ?10 \
         WHERE id = ?11",
        params![
            upd.meeting_date.as_ref().unwrap_or(&existing.meeting_date),
            upd.start_time.as_ref().unwrap_or(&existing.start_time),
            upd.end_time.as_ref().unwrap_or(&existing.end_time),
            names_to_json(present),
            names_to_json(absent),
            names_to_json(external),
            upd.project_name.as_ref().unwrap_or(&existing.project_name),
            upd.meeting_type.as_ref().unwrap_or(&existing.meeting_type),
            upd.location.as_ref().unwrap_or(&existing.location),
            upd.status.as_ref().unwrap_or(&existing.status),
            id,
        ],
    )?;

    find_by_id(conn, id)
}

/// Convenience partial update of just the status field.
pub fn update_status(conn: &Connection, id: i64, status: &str) -> rusqlite::Result<Option<Mom>> {
    let changed = conn.execute(
        "UPDATE mom SET status = ?1 WHERE id = ?2",
        params![status, id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    find_by_id(conn, id)
}

/// Delete the meeting row only. Child records stay behind; the cascade
/// orchestrator handles full removal.
pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let changed = conn.execute("DELETE FROM mom WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}
