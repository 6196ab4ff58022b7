//! Helpers for reading credentials stored in `.netrc` files.
//!
//! The parser accepts both the single-line form
//! (`machine host login user password pass`) and the indented multi-line form,
//! which is what most tools write. Entries are scanned in file order and the
//! first complete entry for the requested machine wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Strip the URL scheme and trailing slash from a host so it matches the bare
/// machine names `.netrc` entries use.
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Returns `Ok(None)` when the target machine is not present or its entry is
/// missing a `login` or `password` value.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
  let reader = BufReader::new(file);

  let mut machine: Option<String> = None;
  let mut username: Option<String> = None;
  let mut password: Option<String> = None;

  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
      match token {
        "machine" => {
          // A new machine keyword closes the previous entry.
          if let Some(creds) = complete_entry(machine.as_deref(), target_machine, &username, &password) {
            return Ok(Some(creds));
          }
          machine = tokens.next().map(str::to_string);
          username = None;
          password = None;
        }
        "login" => username = tokens.next().map(str::to_string),
        "password" => password = tokens.next().map(str::to_string),
        _ => {}
      }
    }
  }

  Ok(complete_entry(machine.as_deref(), target_machine, &username, &password))
}

fn complete_entry(
  machine: Option<&str>,
  target: &str,
  username: &Option<String>,
  password: &Option<String>,
) -> Option<Credentials> {
  match (machine, username, password) {
    (Some(m), Some(user), Some(pass)) if m == target => Some(Credentials {
      username: user.clone(),
      password: pass.clone(),
    }),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::TempDir;

  use super::*;

  fn create_test_netrc(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    let mut file = File::create(&netrc_path).expect("Failed to create test .netrc");
    file.write_all(content.as_bytes()).expect("Failed to write test .netrc");

    (temp_dir, netrc_path)
  }

  #[test]
  fn test_parse_netrc_file_multiline() {
    let content = r#"machine example.com
  login testuser
  password testpass
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let creds = parse_netrc_file(&netrc_path, "example.com").unwrap().unwrap();
    assert_eq!(creds.username, "testuser");
    assert_eq!(creds.password, "testpass");
  }

  #[test]
  fn test_parse_netrc_file_single_line() {
    let content = "machine example.com login testuser password testpass\n";
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let creds = parse_netrc_file(&netrc_path, "example.com").unwrap().unwrap();
    assert_eq!(creds.username, "testuser");
    assert_eq!(creds.password, "testpass");
  }

  #[test]
  fn test_parse_netrc_file_multiple_machines() {
    let content = r#"machine first.example.com
  login first-user
  password first-pass

machine second.example.com
  login second-user
  password second-pass
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let creds = parse_netrc_file(&netrc_path, "second.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "second-user");
    assert_eq!(creds.password, "second-pass");

    let creds = parse_netrc_file(&netrc_path, "first.example.com").unwrap().unwrap();
    assert_eq!(creds.username, "first-user");
  }

  #[test]
  fn test_parse_netrc_file_machine_not_found() {
    let content = "machine example.com login testuser password testpass\n";
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let result = parse_netrc_file(&netrc_path, "other.example.com").unwrap();
    assert!(result.is_none());
  }

  #[test]
  fn test_parse_netrc_file_incomplete_entry() {
    let content = r#"machine example.com
  login testuser
"#;
    let (_temp_dir, netrc_path) = create_test_netrc(content);

    let result = parse_netrc_file(&netrc_path, "example.com").unwrap();
    assert!(result.is_none());
  }

  #[test]
  fn test_parse_netrc_file_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join(".netrc");

    let result = parse_netrc_file(&missing, "example.com");
    assert!(result.is_err());
  }

  #[test]
  fn test_normalize_host() {
    assert_eq!(normalize_host("https://example.com"), "example.com");
    assert_eq!(normalize_host("http://example.com/"), "example.com");
    assert_eq!(normalize_host("example.com"), "example.com");
    assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
  }
}
