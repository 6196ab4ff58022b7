//! Authentication helpers for the Jira client.
//!
//! These helpers centralize credential lookup and runtime construction so a
//! host process can go from a home directory and a Jira host to a working
//! client in one call.

use std::path::Path;

use anyhow::{Context, Result};
use pluck_core::creds::netrc::normalize_host;
use pluck_core::creds::{self, Credentials};
pub use pluck_core::url::ENV_JIRA_HOST;
use pluck_core::url::resolve_jira_base_url;
use tokio::runtime::Runtime;

use crate::{JiraClient, create_jira_client};

/// Get the $JIRA_HOST environment variable value.
/// If the host doesn't include a scheme (http:// or https://), assumes https://.
pub fn get_jira_host() -> Result<String> {
  resolve_jira_base_url()
}

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(get_jira_credentials(home, jira_host).is_ok())
}

/// Retrieve Jira credentials from `.netrc`.
///
/// Looks for the normalized host first, then falls back to a generic
/// `atlassian.net` entry.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let normalized_host = normalize_host(jira_host);

  if let Some(found) = creds::get_credentials(home, &normalized_host)? {
    return Ok(found);
  }
  if let Some(found) = creds::get_credentials(home, "atlassian.net")? {
    return Ok(found);
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{normalized_host}' or 'atlassian.net'."
  ))
}

/// Creates an authenticated Jira client using credentials from .netrc.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str) -> Result<JiraClient> {
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;

  Ok(create_jira_client(
    jira_host,
    &credentials.username,
    &credentials.password,
  ))
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(home: &Path, jira_host: &str) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, jira_host)?;
  Ok((rt, client))
}
