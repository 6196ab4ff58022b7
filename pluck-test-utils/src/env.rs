//! Environment variable management for testing
//!
//! Tests that read process-wide environment variables (such as `JIRA_HOST`)
//! must not leak state into each other. [`EnvVarGuard`] snapshots a single
//! variable on creation and restores it when dropped.

use std::env;

/// RAII guard over a single environment variable.
///
/// The original value (or absence) is captured when the guard is created and
/// restored on drop, regardless of what the test sets in between.
pub struct EnvVarGuard {
  name: &'static str,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Create a guard for the named variable, snapshotting its current value.
  pub fn new(name: &'static str) -> Self {
    let original = env::var(name).ok();
    Self { name, original }
  }

  /// Set the guarded variable to the given value.
  pub fn set(&self, value: &str) {
    // SAFETY: tests using this guard are single-threaded with respect to
    // environment access; the guard restores the prior value on drop.
    unsafe {
      env::set_var(self.name, value);
    }
  }

  /// Remove the guarded variable from the environment.
  pub fn remove(&self) {
    // SAFETY: same single-threaded environment access contract as `set`.
    unsafe {
      env::remove_var(self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      // SAFETY: restoring the snapshot taken at construction.
      Some(val) => unsafe {
        env::set_var(self.name, val);
      },
      // SAFETY: the variable was unset when the guard was created.
      None => unsafe {
        env::remove_var(self.name);
      },
    }
  }
}
