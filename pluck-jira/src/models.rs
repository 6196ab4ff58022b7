use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
  pub id: String,
  pub key: String,
  pub fields: IssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
  pub summary: Option<String>,
  /// Attachments linked to the issue; absent in the payload when empty.
  #[serde(default)]
  pub attachment: Vec<Attachment>,
}

/// Represents a file attached to a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
  pub id: String,
  pub filename: String,
  /// Creation timestamp in Jira's `2024-03-01T10:15:30.000+0000` format.
  #[serde(deserialize_with = "jira_datetime::deserialize")]
  pub created: DateTime<FixedOffset>,
  pub size: Option<u64>,
  #[serde(rename = "mimeType")]
  pub mime_type: Option<String>,
  /// Direct download URL for the attachment body.
  pub content: String,
}

/// Represents a comment creation payload
#[derive(Debug, Serialize)]
pub struct CommentRequest {
  pub body: String,
}

/// Represents a created comment as returned by Jira
#[derive(Debug, Deserialize)]
pub struct Comment {
  pub id: String,
  pub body: Option<String>,
}

pub(crate) mod jira_datetime {
  use chrono::{DateTime, FixedOffset};
  use serde::{Deserialize, Deserializer};

  /// Jira renders timestamps without a colon in the offset, which RFC 3339
  /// parsing rejects.
  const JIRA_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

  pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_str(&raw, JIRA_FORMAT)
      .or_else(|_| DateTime::parse_from_rfc3339(&raw))
      .map_err(serde::de::Error::custom)
  }
}
