//! Constants for the pluck-jira client.

use reqwest::header::HeaderName;

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Header Jira requires on write requests to disable XSRF token checks.
pub const ATLASSIAN_TOKEN: HeaderName = HeaderName::from_static("x-atlassian-token");

/// The value Jira expects under [`ATLASSIAN_TOKEN`] for API-driven writes.
pub const NO_CHECK: &str = "no-check";
