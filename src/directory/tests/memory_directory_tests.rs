//! Lookup semantics tests for the in-memory directory adapter.

use crate::directory::{
    adapters::memory::InMemoryUserDirectory,
    domain::{CompanyId, UserId, UserRecord, UserRole},
    ports::UserDirectory,
};
use rstest::{fixture, rstest};

#[fixture]
fn directory() -> InMemoryUserDirectory {
    let directory = InMemoryUserDirectory::new();
    let alice = UserRecord::new(
        UserId::new("u1").expect("valid user id"),
        CompanyId::new("c1").expect("valid company id"),
        "Alice",
        UserRole::Supervisor,
    )
    .expect("valid user record");
    directory.insert(alice).expect("insert should succeed");
    directory
}

fn user_id(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn company_id(raw: &str) -> CompanyId {
    CompanyId::new(raw).expect("valid company id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_resolves_user_within_company(directory: InMemoryUserDirectory) {
    let found = directory
        .find_by_id_and_company(&user_id("u1"), &company_id("c1"))
        .await
        .expect("lookup should succeed");

    assert_eq!(
        found.as_ref().map(|record| record.id().as_str()),
        Some("u1")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_misses_user_from_other_company(directory: InMemoryUserDirectory) {
    let found = directory
        .find_by_id_and_company(&user_id("u1"), &company_id("c2"))
        .await
        .expect("lookup should succeed");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_misses_unknown_user(directory: InMemoryUserDirectory) {
    let found = directory
        .find_by_id_and_company(&user_id("ghost"), &company_id("c1"))
        .await
        .expect("lookup should succeed");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_misses_deactivated_user(directory: InMemoryUserDirectory) {
    let mut bob = UserRecord::new(user_id("u2"), company_id("c1"), "Bob", UserRole::Employee)
        .expect("valid user record");
    bob.deactivate();
    directory.insert(bob).expect("insert should succeed");

    let found = directory
        .find_by_id_and_company(&user_id("u2"), &company_id("c1"))
        .await
        .expect("lookup should succeed");

    assert!(found.is_none());
}
