use rusqlite::params;

use momtrack::models::action_item::{self, ActionItemUpdate, RemarkEntry};
use momtrack::models::meeting;

mod common;
use common::{days_from_today, new_action_item, new_mom, setup_test_db, today};

fn seed_meeting(conn: &rusqlite::Connection) -> i64 {
    meeting::create(conn, &new_mom("Atlas", "2026-09-01")).expect("create meeting")
}

fn reassign(conn: &rusqlite::Connection, id: i64, username: &str) {
    let upd = ActionItemUpdate {
        re_assigned_to: Some(username.to_string()),
        ..Default::default()
    };
    action_item::update(conn, id, &upd)
        .expect("update")
        .expect("item exists");
}

/// Write a remark log straight into the column, bypassing the date stamping
/// in `add_remark`.
fn write_remarks(conn: &rusqlite::Connection, id: i64, remarks: &[RemarkEntry]) {
    conn.execute(
        "UPDATE mom_action_item SET remark = ?1 WHERE id = ?2",
        params![serde_json::to_string(remarks).expect("serialize"), id],
    )
    .expect("write remarks");
}

fn entry(text: &str, by: &str, date: &str) -> RemarkEntry {
    RemarkEntry {
        text: text.to_string(),
        by: by.to_string(),
        remark_date: date.to_string(),
    }
}

#[test]
fn test_by_assigned_excludes_items_with_deleted_meeting() {
    let (_dir, conn) = setup_test_db();
    let live = seed_meeting(&conn);
    let doomed = seed_meeting(&conn);

    let keep = action_item::create(&conn, &new_action_item(live, "alice", "2026-09-05"))
        .expect("create");
    action_item::create(&conn, &new_action_item(doomed, "alice", "2026-09-06"))
        .expect("create");

    meeting::delete(&conn, doomed).expect("delete meeting");

    let items =
        action_item::find_by_assigned(&conn, "alice", "due_date", "asc").expect("query");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, keep);
    // Denormalized project comes off the item row itself.
    assert_eq!(items[0].project, "Atlas");
}

#[test]
fn test_by_assigned_sorting() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);

    let first = action_item::create(&conn, &new_action_item(mom_id, "alice", "2026-09-05"))
        .expect("create");
    let second = action_item::create(&conn, &new_action_item(mom_id, "alice", "2026-09-20"))
        .expect("create");

    let items =
        action_item::find_by_assigned(&conn, "alice", "due_date", "desc").expect("query");
    assert_eq!(items[0].id, second);
    assert_eq!(items[1].id, first);

    let upd = ActionItemUpdate {
        status: Some("Completed".to_string()),
        ..Default::default()
    };
    action_item::update(&conn, first, &upd).expect("update").expect("item exists");

    let items = action_item::find_by_assigned(&conn, "alice", "status", "asc").expect("query");
    assert_eq!(items[0].status, "Completed");
    assert_eq!(items[1].status, "Pending");
}

#[test]
fn test_overdue_ignores_status_and_orders_ascending() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);

    let mut done = new_action_item(mom_id, "alice", &days_from_today(-1));
    done.status = "Completed".to_string();
    let done_id = action_item::create(&conn, &done).expect("create");
    let old_id = action_item::create(
        &conn,
        &new_action_item(mom_id, "alice", &days_from_today(-5)),
    )
    .expect("create");
    // Due today is not overdue.
    action_item::create(&conn, &new_action_item(mom_id, "alice", &today())).expect("create");

    let items = action_item::find_overdue(&conn).expect("query");
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![old_id, done_id]);
}

#[test]
fn test_due_soon_window_is_inclusive() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);

    let today_id = action_item::create(&conn, &new_action_item(mom_id, "alice", &today()))
        .expect("create");
    let edge_id = action_item::create(
        &conn,
        &new_action_item(mom_id, "alice", &days_from_today(7)),
    )
    .expect("create");
    // Outside the window on both sides.
    action_item::create(
        &conn,
        &new_action_item(mom_id, "alice", &days_from_today(-1)),
    )
    .expect("create");
    action_item::create(
        &conn,
        &new_action_item(mom_id, "alice", &days_from_today(8)),
    )
    .expect("create");

    let items = action_item::find_due_soon(&conn, 7).expect("query");
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![today_id, edge_id]);
}

#[test]
fn test_reassigned_view_groups_remarks_by_author() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);
    let id = action_item::create(&conn, &new_action_item(mom_id, "alice", "2026-09-10"))
        .expect("create");
    reassign(&conn, id, "bob");

    write_remarks(
        &conn,
        id,
        &[
            entry("kickoff notes", "alice", "2026-08-01"),
            entry("taking over", "bob", "2026-08-03"),
            entry("handed off context", "alice", "2026-08-02"),
        ],
    );

    let (items, total) =
        action_item::find_by_reassigned(&conn, "bob", "due_date", "asc", 0, 10).expect("query");
    assert_eq!(total, 1);
    let view = &items[0];

    assert_eq!(view.remark_count, 3);
    // Original assignee is preserved alongside the reassignment.
    assert_eq!(view.item.assigned_to, "alice");
    assert_eq!(view.item.re_assigned_to.as_deref(), Some("bob"));

    let alice = &view.remarks_by_user["alice"];
    assert_eq!(alice.len(), 2);
    // Storage order preserved within a bucket, not date order.
    assert_eq!(alice[0].text, "kickoff notes");
    assert_eq!(alice[1].text, "handed off context");
    assert_eq!(view.remarks_by_user["bob"].len(), 1);

    let bucketed: usize = view.remarks_by_user.values().map(|v| v.len()).sum();
    assert_eq!(bucketed, view.remark_count);

    // Latest by remark_date, not by position.
    assert_eq!(view.latest_remark.as_ref().expect("latest").text, "taking over");
}

#[test]
fn test_reassigned_latest_remark_falls_back_to_storage_order() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);
    let id = action_item::create(&conn, &new_action_item(mom_id, "alice", "2026-09-10"))
        .expect("create");
    reassign(&conn, id, "bob");

    write_remarks(
        &conn,
        id,
        &[
            entry("good date", "alice", "2026-08-09"),
            entry("bad date", "bob", "sometime"),
            entry("last in storage", "alice", "2026-08-01"),
        ],
    );

    let (items, _) =
        action_item::find_by_reassigned(&conn, "bob", "due_date", "asc", 0, 10).expect("query");
    assert_eq!(
        items[0].latest_remark.as_ref().expect("latest").text,
        "last in storage"
    );
}

#[test]
fn test_reassigned_pagination_and_sorting() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);

    for day in [5, 3, 8] {
        let id = action_item::create(
            &conn,
            &new_action_item(mom_id, "alice", &days_from_today(day)),
        )
        .expect("create");
        reassign(&conn, id, "bob");
    }
    // Reassigned to someone else: excluded.
    let other = action_item::create(&conn, &new_action_item(mom_id, "alice", &days_from_today(1)))
        .expect("create");
    reassign(&conn, other, "carol");

    let (page, total) =
        action_item::find_by_reassigned(&conn, "bob", "due_date", "asc", 0, 2).expect("query");
    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);
    assert!(page[0].item.due_date < page[1].item.due_date);

    let (rest, _) =
        action_item::find_by_reassigned(&conn, "bob", "due_date", "asc", 2, 2).expect("query");
    assert_eq!(rest.len(), 1);

    let (desc, _) =
        action_item::find_by_reassigned(&conn, "bob", "due_date", "desc", 0, 10).expect("query");
    assert_eq!(desc[0].item.due_date, days_from_today(8));
}

#[test]
fn test_reassigned_empty_log_has_no_latest_remark() {
    let (_dir, conn) = setup_test_db();
    let mom_id = seed_meeting(&conn);
    let id = action_item::create(&conn, &new_action_item(mom_id, "alice", "2026-09-10"))
        .expect("create");
    reassign(&conn, id, "bob");

    let (items, _) =
        action_item::find_by_reassigned(&conn, "bob", "due_date", "asc", 0, 10).expect("query");
    assert_eq!(items[0].remark_count, 0);
    assert!(items[0].latest_remark.is_none());
    assert!(items[0].remarks_by_user.is_empty());
}
