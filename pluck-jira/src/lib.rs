//! # Jira CSV Attachment Client
//!
//! Provides Jira REST API integration for round-tripping CSV attachments on
//! an issue: fetching issue metadata, selecting the most recently created CSV
//! attachment, downloading it, posting comments, and uploading replacement
//! attachments, with Basic-Auth credentials discovered from `.netrc`.

pub mod auth;
mod client;
mod consts;
pub mod error;
pub mod headers;
pub mod models;
pub mod select;

mod endpoints;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export errors
pub use error::{Error, Result};
// Re-export models
pub use models::{Attachment, Comment, CommentRequest, Issue, IssueFields, JiraAuth};
// Re-export the selection pipeline
pub use select::{csv_attachments, latest_attachment};
