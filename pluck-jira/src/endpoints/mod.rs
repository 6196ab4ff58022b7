//! # Jira API Endpoints
//!
//! Organized endpoint implementations for different Jira API resource types:
//! issue reads, attachment selection/download/upload, and comments.

pub mod attachments;
pub mod comments;
pub mod issues;
