//! # Pluck Core Library
//!
//! Shared utilities for the pluck workspace: credential discovery from
//! `.netrc`, Jira host resolution from the environment, and the local CSV
//! store that downloaded attachments land in. The Jira client crate builds on
//! these without owning any of the local configuration concerns itself.

pub mod creds;
pub mod csv_store;
pub mod url;

// Re-export main types for client crates
pub use creds::Credentials;
pub use csv_store::{CsvRow, CsvStore, CsvStoreError};
// `self::` disambiguates the module from the url crate.
pub use self::url::{ENV_JIRA_HOST, ensure_url_scheme, resolve_jira_base_url};
