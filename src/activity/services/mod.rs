//! Application services for activity lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    ActivityLifecycleError, ActivityLifecycleResult, ActivityLifecycleService,
    CreateActivityRequest, ReassignRequest, UpdateStatusRequest,
};
