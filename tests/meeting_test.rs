use momtrack::models::meeting::{self, MomFilter, MomUpdate};
use momtrack::models::information::{self, NewInformation};

mod common;
use common::{new_mom, setup_test_db, today};

#[test]
fn test_create_meeting() {
    let (_dir, conn) = setup_test_db();

    let id = meeting::create(&conn, &new_mom("Atlas", "2026-09-01")).expect("create meeting");
    assert!(id > 0);

    let mom = meeting::find_by_id(&conn, id)
        .expect("query")
        .expect("meeting exists");
    assert_eq!(mom.project_name, "Atlas");
    assert_eq!(mom.meeting_date, "2026-09-01");
    assert_eq!(mom.status, "Open");
    assert_eq!(mom.meeting_type, "Online");
    assert_eq!(mom.present_attendees, vec!["alice", "bob"]);
    assert!(mom.absent_attendees.is_empty());
    assert_eq!(mom.created_date, today());
    assert_eq!(mom.created_by, 1);
}

#[test]
fn test_find_by_id_missing() {
    let (_dir, conn) = setup_test_db();
    let found = meeting::find_by_id(&conn, 999).expect("query");
    assert!(found.is_none());
}

#[test]
fn test_list_project_filter_is_case_insensitive_substring() {
    let (_dir, conn) = setup_test_db();
    meeting::create(&conn, &new_mom("Atlas Phase 1", "2026-09-01")).expect("create");
    meeting::create(&conn, &new_mom("atlas extras", "2026-09-02")).expect("create");
    meeting::create(&conn, &new_mom("Borealis", "2026-09-03")).expect("create");

    let filter = MomFilter {
        project: Some("ATLAS".to_string()),
        ..Default::default()
    };
    let (items, total) = meeting::find_paginated(&conn, &filter, 0, 10).expect("paginate");
    assert_eq!(total, 2);
    assert!(items.iter().all(|m| m.project_name.to_lowercase().contains("atlas")));
}

#[test]
fn test_list_status_filter_is_exact() {
    let (_dir, conn) = setup_test_db();
    let open = meeting::create(&conn, &new_mom("Atlas", "2026-09-01")).expect("create");
    let closed = meeting::create(&conn, &new_mom("Atlas", "2026-09-02")).expect("create");
    meeting::update_status(&conn, closed, "Closed").expect("update status");

    let filter = MomFilter {
        status: Some("Closed".to_string()),
        ..Default::default()
    };
    let (items, total) = meeting::find_paginated(&conn, &filter, 0, 10).expect("paginate");
    assert_eq!(total, 1);
    assert_eq!(items[0].id, closed);
    assert_ne!(items[0].id, open);
}

#[test]
fn test_list_orders_by_meeting_date_descending() {
    let (_dir, conn) = setup_test_db();
    meeting::create(&conn, &new_mom("Atlas", "2026-01-10")).expect("create");
    meeting::create(&conn, &new_mom("Atlas", "2026-03-01")).expect("create");
    meeting::create(&conn, &new_mom("Atlas", "2026-02-15")).expect("create");

    let (items, _) =
        meeting::find_paginated(&conn, &MomFilter::default(), 0, 10).expect("paginate");
    let dates: Vec<&str> = items.iter().map(|m| m.meeting_date.as_str()).collect();
    assert_eq!(dates, vec!["2026-03-01", "2026-02-15", "2026-01-10"]);
}

#[test]
fn test_list_pagination() {
    let (_dir, conn) = setup_test_db();
    for i in 1..=5 {
        meeting::create(&conn, &new_mom("Atlas", &format!("2026-09-0{i}"))).expect("create");
    }

    let (items, total) =
        meeting::find_paginated(&conn, &MomFilter::default(), 2, 2).expect("paginate");
    assert_eq!(total, 5);
    assert_eq!(items.len(), 2);

    // Past the end: empty page, same total.
    let (tail, total) =
        meeting::find_paginated(&conn, &MomFilter::default(), 10, 2).expect("paginate");
    assert_eq!(total, 5);
    assert!(tail.is_empty());
}

#[test]
fn test_update_applies_only_provided_fields() {
    let (_dir, conn) = setup_test_db();
    let id = meeting::create(&conn, &new_mom("Atlas", "2026-09-01")).expect("create");

    let upd = MomUpdate {
        location: Some("Room 4B".to_string()),
        status: Some("Pending".to_string()),
        ..Default::default()
    };
    let updated = meeting::update(&conn, id, &upd)
        .expect("update")
        .expect("meeting exists");

    assert_eq!(updated.location, "Room 4B");
    assert_eq!(updated.status, "Pending");
    // Untouched fields keep their values.
    assert_eq!(updated.project_name, "Atlas");
    assert_eq!(updated.meeting_date, "2026-09-01");
    assert_eq!(updated.present_attendees, vec!["alice", "bob"]);
}

#[test]
fn test_update_replaces_attendee_lists_when_provided() {
    let (_dir, conn) = setup_test_db();
    let id = meeting::create(&conn, &new_mom("Atlas", "2026-09-01")).expect("create");

    let upd = MomUpdate {
        present_attendees: Some(vec!["carol".to_string()]),
        absent_attendees: Some(vec!["alice".to_string(), "bob".to_string()]),
        ..Default::default()
    };
    let updated = meeting::update(&conn, id, &upd)
        .expect("update")
        .expect("meeting exists");
    assert_eq!(updated.present_attendees, vec!["carol"]);
    assert_eq!(updated.absent_attendees, vec!["alice", "bob"]);
}

#[test]
fn test_update_missing_returns_none() {
    let (_dir, conn) = setup_test_db();
    let upd = MomUpdate {
        location: Some("nowhere".to_string()),
        ..Default::default()
    };
    assert!(meeting::update(&conn, 42, &upd).expect("update").is_none());
    assert!(meeting::update_status(&conn, 42, "Closed").expect("update").is_none());
}

#[test]
fn test_delete_removes_meeting_row_only() {
    let (_dir, conn) = setup_test_db();
    let id = meeting::create(&conn, &new_mom("Atlas", "2026-09-01")).expect("create");
    information::create(
        &conn,
        &NewInformation {
            mom_id: id,
            information: "Kickoff recap shared".to_string(),
        },
    )
    .expect("create information");

    assert!(meeting::delete(&conn, id).expect("delete"));
    assert!(meeting::find_by_id(&conn, id).expect("query").is_none());

    // Children survive a meeting-only delete; cascade is a separate path.
    let orphans = information::find_all_for_mom(&conn, id).expect("query children");
    assert_eq!(orphans.len(), 1);

    // Deleting again reports nothing removed.
    assert!(!meeting::delete(&conn, id).expect("delete again"));
}
