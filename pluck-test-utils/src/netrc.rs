//! `.netrc` fixture management for testing
//!
//! Credential lookup reads `$HOME/.netrc`. [`NetrcGuard`] creates a temporary
//! home directory containing a `.netrc` with the given content, points `HOME`
//! at it, and restores the original `HOME` when dropped.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for test `.netrc` files
///
/// Creates a temporary `.netrc` file with the given content, sets the HOME
/// environment variable to point to the temporary directory, and restores the
/// original HOME environment variable when dropped.
pub struct NetrcGuard {
  #[allow(dead_code)]
  temp_dir: TempDir,
  netrc_path: PathBuf,
  original_home: Option<String>,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let original_home = std::env::var("HOME").ok();

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    let mut file = fs::File::create(&netrc_path).expect("Failed to create test .netrc");
    file.write_all(content.as_bytes()).expect("Failed to write test .netrc");

    // SAFETY: tests using this guard are single-threaded with respect to
    // environment access; the original HOME is restored on drop.
    unsafe {
      std::env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      netrc_path,
      original_home,
    }
  }

  /// Get the path to the `.netrc` file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

impl Drop for NetrcGuard {
  fn drop(&mut self) {
    match &self.original_home {
      // SAFETY: restoring the HOME snapshot taken at construction.
      Some(home) => unsafe {
        std::env::set_var("HOME", home);
      },
      // SAFETY: HOME was unset when the guard was created.
      None => unsafe {
        std::env::remove_var("HOME");
      },
    }
  }
}
