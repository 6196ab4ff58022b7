//! # Credential Management
//!
//! Discovery of Jira credentials from the user's `.netrc` file. This module
//! only ever reads credentials; writing or updating entries is left to the
//! user's own tooling.

pub mod netrc;

use std::path::Path;

use anyhow::Result;

/// Represents credentials for a service
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Look up credentials for a host in `{home}/.netrc`.
///
/// The host is normalized (scheme and trailing slash stripped) before the
/// lookup. Returns `Ok(None)` when the file is absent or holds no complete
/// entry for the machine.
pub fn get_credentials(home: &Path, host: &str) -> Result<Option<Credentials>> {
  let path = netrc::get_netrc_path(home);
  if !path.exists() {
    return Ok(None);
  }

  netrc::parse_netrc_file(&path, &netrc::normalize_host(host))
}

#[cfg(test)]
mod tests {
  use pluck_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_get_credentials_normalizes_host() {
    let guard = NetrcGuard::new(
      "machine company.atlassian.net\n  login user@example.com\n  password secret-token\n",
    );

    let creds = get_credentials(guard.home_dir(), "https://company.atlassian.net/")
      .unwrap()
      .unwrap();
    assert_eq!(creds.username, "user@example.com");
    assert_eq!(creds.password, "secret-token");
  }

  #[test]
  fn test_get_credentials_missing_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let result = get_credentials(temp_dir.path(), "company.atlassian.net").unwrap();
    assert!(result.is_none());
  }
}
