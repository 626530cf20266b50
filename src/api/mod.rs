//! Backend API access
//!
//! `FetchClient` wraps an `HttpTransport`; the endpoint helpers give the
//! backend routes typed results.

mod client;
mod endpoints;
mod transport;

pub(crate) use client::FetchClient;
pub(crate) use endpoints::{all_results, health, list_projects, project_results};
pub(crate) use transport::UreqTransport;
