//! Shared helpers for in-memory integration tests.

use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use std::sync::Arc;
use workpulse::activity::{
    adapters::memory::InMemoryActivityRepository,
    services::{ActivityLifecycleService, CreateActivityRequest},
};
use workpulse::directory::{
    adapters::memory::InMemoryUserDirectory,
    domain::{CompanyId, UserId, UserRecord, UserRole},
};

/// Service type exercised by the integration suites.
pub type TestService =
    ActivityLifecycleService<InMemoryActivityRepository, InMemoryUserDirectory, DefaultClock>;

/// Builds a service whose directory knows two companies:
/// `c1` with users `u1` (supervisor) and `u2` (employee), and `c2` with
/// user `u9`.
pub fn seeded_service() -> TestService {
    let directory = InMemoryUserDirectory::new();
    let seeds = [
        ("u1", "c1", "Alice", UserRole::Supervisor),
        ("u2", "c1", "Bob", UserRole::Employee),
        ("u9", "c2", "Vera", UserRole::Employee),
    ];
    for (id, company, name, role) in seeds {
        let record = UserRecord::new(
            UserId::new(id).expect("valid user id"),
            CompanyId::new(company).expect("valid company id"),
            name,
            role,
        )
        .expect("valid user record");
        directory.insert(record).expect("insert should succeed");
    }

    ActivityLifecycleService::new(
        Arc::new(InMemoryActivityRepository::new()),
        Arc::new(directory),
        Arc::new(DefaultClock),
    )
}

/// Fixed timestamp helper; hours of 2026-03-14 UTC.
pub fn t(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Creates a pending activity for `u1` in `c1` and returns its id.
pub async fn create_pending(service: &TestService, title: &str) -> String {
    let activity = service
        .create_activity(CreateActivityRequest::new(title, "u1", "c1"))
        .await
        .expect("activity creation should succeed");
    activity.id().to_string()
}
