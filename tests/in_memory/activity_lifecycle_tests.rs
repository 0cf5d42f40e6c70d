//! End-to-end lifecycle flows over the in-memory adapters.

use super::helpers::{create_pending, seeded_service, t};
use rstest::rstest;
use workpulse::activity::domain::ActivityStatus;
use workpulse::activity::services::{ReassignRequest, UpdateStatusRequest};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn activity_walks_full_lifecycle_and_reopens() {
    let service = seeded_service();
    let id = create_pending(&service, "Commission the new press").await;

    service
        .update_status(
            UpdateStatusRequest::new(id.as_str(), ActivityStatus::InProgress, "u1").with_start_time(t(8)),
        )
        .await
        .expect("transition to in_progress should succeed");
    service
        .update_status(
            UpdateStatusRequest::new(id.as_str(), ActivityStatus::Completed, "u1").with_end_time(t(16)),
        )
        .await
        .expect("transition to completed should succeed");

    // Completed is not a dead end: reopening moves the activity back to
    // pending and the walk can start over.
    let reopened = service
        .update_status(UpdateStatusRequest::new(id.as_str(), ActivityStatus::Pending, "u1"))
        .await
        .expect("reopening should succeed");
    assert_eq!(reopened.status(), ActivityStatus::Pending);

    let cancelled = service
        .update_status(UpdateStatusRequest::new(id.as_str(), ActivityStatus::Cancelled, "u1"))
        .await
        .expect("cancellation should succeed");
    assert_eq!(cancelled.status(), ActivityStatus::Cancelled);

    let statuses: Vec<ActivityStatus> = cancelled
        .status_history()
        .iter()
        .map(|entry| entry.status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            ActivityStatus::Pending,
            ActivityStatus::InProgress,
            ActivityStatus::Completed,
            ActivityStatus::Pending,
            ActivityStatus::Cancelled,
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_records_every_change_in_order() {
    let service = seeded_service();
    let id = create_pending(&service, "Rotate the stock").await;

    service
        .reassign(ReassignRequest::new(id.as_str(), "u2", "u1", "c1"))
        .await
        .expect("first reassignment should succeed");
    service
        .update_status(
            UpdateStatusRequest::new(id.as_str(), ActivityStatus::InProgress, "u2").with_start_time(t(9)),
        )
        .await
        .expect("transition should succeed");
    let current = service
        .reassign(ReassignRequest::new(id.as_str(), "u1", "u2", "c1"))
        .await
        .expect("second reassignment should succeed");

    let history = current.status_history();
    assert_eq!(history.len(), 4);

    let assignees: Vec<&str> = history
        .iter()
        .map(|entry| entry.assigned_to.as_str())
        .collect();
    assert_eq!(assignees, vec!["u1", "u2", "u2", "u1"]);

    let editors: Vec<&str> = history
        .iter()
        .map(|entry| entry.changed_by.as_str())
        .collect();
    assert_eq!(editors, vec!["u1", "u1", "u2", "u2"]);

    // Chronological insertion order is authoritative.
    for window in history.windows(2) {
        if let [earlier, later] = window {
            assert!(earlier.changed_at <= later.changed_at);
        }
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timing_survives_partial_updates() {
    let service = seeded_service();
    let id = create_pending(&service, "Service the forklift").await;

    service
        .update_status(
            UpdateStatusRequest::new(id.as_str(), ActivityStatus::InProgress, "u1").with_start_time(t(9)),
        )
        .await
        .expect("transition should succeed");

    // Completing supplies only the end; the start must carry over.
    let completed = service
        .update_status(
            UpdateStatusRequest::new(id.as_str(), ActivityStatus::Completed, "u1").with_end_time(t(11)),
        )
        .await
        .expect("completion should succeed");

    assert_eq!(completed.start_time(), Some(t(9)));
    assert_eq!(completed.end_time(), Some(t(11)));
}
