//! Core module - prefix resolution, routes and the backend's data model

mod prefix;
mod route;
mod status;
mod types;

pub(crate) use prefix::PathPrefix;
pub(crate) use route::Route;
pub(crate) use status::{StatusClass, status_class};
pub(crate) use types::{HealthStatus, ProjectSummary, ResultFilter, RunTally, TestResult};
