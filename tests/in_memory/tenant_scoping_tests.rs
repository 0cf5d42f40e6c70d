//! Tenant isolation and soft-delete visibility tests.

use super::helpers::{create_pending, seeded_service, t};
use rstest::rstest;
use workpulse::activity::domain::{ActivityDomainError, ActivityStatus};
use workpulse::activity::services::{
    ActivityLifecycleError, CreateActivityRequest, ReassignRequest, UpdateStatusRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_from_other_company_never_resolves() {
    let service = seeded_service();

    let create_result = service
        .create_activity(
            CreateActivityRequest::new("Cross-tenant create", "u1", "c1").with_assignee("u9"),
        )
        .await;
    assert!(matches!(
        create_result,
        Err(ActivityLifecycleError::Domain(
            ActivityDomainError::UnresolvedAssignee { .. }
        ))
    ));

    let id = create_pending(&service, "Cross-tenant reassign").await;
    let reassign_result = service
        .reassign(ReassignRequest::new(id.as_str(), "u9", "u1", "c1"))
        .await;
    assert!(matches!(
        reassign_result,
        Err(ActivityLifecycleError::Domain(
            ActivityDomainError::UnresolvedAssignee { .. }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn soft_deleted_activity_disappears_from_every_read_path() {
    let service = seeded_service();
    let id = create_pending(&service, "Ephemeral").await;

    service
        .deactivate_activity(&id)
        .await
        .expect("deactivation should succeed");

    let by_id = service
        .activity_by_id(&id)
        .await
        .expect("lookup should succeed");
    assert!(by_id.is_none());

    let by_user = service
        .activities_for_user("u1")
        .await
        .expect("query should succeed");
    assert!(by_user.is_empty());

    let pending = service
        .pending_activities_for_user("u1")
        .await
        .expect("query should succeed");
    assert!(pending.is_empty());

    let by_company = service
        .activities_for_company("c1")
        .await
        .expect("query should succeed");
    assert!(by_company.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_queries_follow_the_current_assignee() {
    let service = seeded_service();
    let id = create_pending(&service, "Wandering task").await;

    service
        .reassign(ReassignRequest::new(id.as_str(), "u2", "u1", "c1"))
        .await
        .expect("reassignment should succeed");

    let for_creator = service
        .activities_for_user("u1")
        .await
        .expect("query should succeed");
    assert!(for_creator.is_empty());

    let for_assignee = service
        .activities_for_user("u2")
        .await
        .expect("query should succeed");
    assert_eq!(for_assignee.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn company_query_spans_all_statuses() {
    let service = seeded_service();
    let pending = create_pending(&service, "Still pending").await;
    let started = create_pending(&service, "Being worked").await;
    service
        .update_status(
            UpdateStatusRequest::new(started.as_str(), ActivityStatus::InProgress, "u1")
                .with_start_time(t(9)),
        )
        .await
        .expect("transition should succeed");

    let activities = service
        .activities_for_company("c1")
        .await
        .expect("query should succeed");

    let ids: Vec<String> = activities
        .iter()
        .map(|activity| activity.id().to_string())
        .collect();
    assert_eq!(ids, vec![started, pending]);
}
