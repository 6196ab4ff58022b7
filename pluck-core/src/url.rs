//! URL parsing helpers shared across crates.
//!
//! These helpers live in `pluck-core` so the Jira client and any host process
//! resolve the Jira base URL the same way without depending on a specific
//! client instance.

use anyhow::{Context, Result};
use url::{Position, Url};

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Get the $JIRA_HOST environment variable value with proper URL scheme.
///
/// If the host doesn't include a scheme (http:// or https://), assumes
/// https://. Returns an error if the environment variable is not set.
pub fn resolve_jira_base_url() -> Result<String> {
  match std::env::var(ENV_JIRA_HOST) {
    Ok(host) => ensure_url_scheme(&host),
    Err(_) => Err(anyhow::anyhow!(
      "Jira host environment variable '{ENV_JIRA_HOST}' not set"
    )),
  }
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// Inputs without a scheme are prefixed with https://. The result is
/// normalized so a bare host carries no trailing slash, which keeps
/// `format!("{base}/rest/api/...")` joins clean.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  Ok(normalize_url(&url))
}

/// Render a URL without the bare "/" path `Url` inserts for http(s) URLs.
fn normalize_url(url: &Url) -> String {
  let mut result = String::from(&url[..Position::BeforePath]);

  if url.path() != "/" {
    result.push_str(url.path());
  }

  if let Some(query) = url.query() {
    result.push('?');
    result.push_str(query);
  }

  if let Some(fragment) = url.fragment() {
    result.push('#');
    result.push_str(fragment);
  }

  result
}
