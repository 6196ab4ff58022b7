//! The selection pipeline that narrows an issue's attachment list down to a
//! single CSV file: filter by filename, then take the most recently created.

use crate::models::Attachment;

/// Keep attachments whose filename contains the substring `"csv"`.
///
/// This is deliberately a case-sensitive substring match, not an extension
/// check: `report.csv`, `csv-export.txt`, and `foo.csvold` all pass, while
/// `report.CSV` does not. Input order is preserved, and an empty input yields
/// an empty output.
pub fn csv_attachments(attachments: &[Attachment]) -> Vec<&Attachment> {
  attachments
    .iter()
    .filter(|attachment| attachment.filename.contains("csv"))
    .collect()
}

/// Select the candidate with the greatest creation timestamp.
///
/// Ties resolve to the first-encountered candidate (replacement only happens
/// on a strictly greater timestamp). An empty slice yields `None`.
pub fn latest_attachment<'a>(candidates: &[&'a Attachment]) -> Option<&'a Attachment> {
  let mut latest: Option<&Attachment> = None;

  for candidate in candidates {
    match latest {
      Some(current) if candidate.created <= current.created => {}
      _ => latest = Some(candidate),
    }
  }

  latest
}

#[cfg(test)]
mod tests {
  use chrono::DateTime;

  use super::*;

  fn attachment(id: &str, filename: &str, created: &str) -> Attachment {
    Attachment {
      id: id.to_string(),
      filename: filename.to_string(),
      created: DateTime::parse_from_rfc3339(created).unwrap(),
      size: None,
      mime_type: None,
      content: format!("https://jira.example.com/secure/attachment/{id}/{filename}"),
    }
  }

  #[test]
  fn test_csv_attachments_substring_match() {
    let attachments = vec![
      attachment("1", "report.csv", "2024-03-01T10:00:00+00:00"),
      attachment("2", "notes.txt", "2024-03-01T11:00:00+00:00"),
      attachment("3", "csv-export.txt", "2024-03-01T12:00:00+00:00"),
      attachment("4", "data.csvold", "2024-03-01T13:00:00+00:00"),
    ];

    let filtered = csv_attachments(&attachments);
    let names: Vec<&str> = filtered.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(names, vec!["report.csv", "csv-export.txt", "data.csvold"]);
  }

  #[test]
  fn test_csv_attachments_is_case_sensitive() {
    let attachments = vec![attachment("1", "REPORT.CSV", "2024-03-01T10:00:00+00:00")];

    assert!(csv_attachments(&attachments).is_empty());
  }

  #[test]
  fn test_csv_attachments_empty_input() {
    assert!(csv_attachments(&[]).is_empty());
  }

  #[test]
  fn test_csv_attachments_is_idempotent() {
    let attachments = vec![
      attachment("1", "a.csv", "2024-03-01T10:00:00+00:00"),
      attachment("2", "b.txt", "2024-03-01T11:00:00+00:00"),
      attachment("3", "c.csv", "2024-03-01T12:00:00+00:00"),
    ];

    let once: Vec<Attachment> = csv_attachments(&attachments).into_iter().cloned().collect();
    let twice = csv_attachments(&once);

    let names: Vec<&str> = twice.iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(names, vec!["a.csv", "c.csv"]);
  }

  #[test]
  fn test_latest_attachment_picks_maximum() {
    let a = attachment("1", "a.csv", "2024-03-01T10:00:00+00:00");
    let b = attachment("2", "b.csv", "2024-03-05T10:00:00+00:00");
    let c = attachment("3", "c.csv", "2024-03-03T10:00:00+00:00");

    let candidates = vec![&a, &b, &c];
    let selected = latest_attachment(&candidates).unwrap();
    assert_eq!(selected.filename, "b.csv");

    for candidate in &candidates {
      assert!(selected.created >= candidate.created);
    }
  }

  #[test]
  fn test_latest_attachment_tie_first_wins() {
    let first = attachment("1", "first.csv", "2024-03-01T10:00:00+00:00");
    let second = attachment("2", "second.csv", "2024-03-01T10:00:00+00:00");

    let selected = latest_attachment(&[&first, &second]).unwrap();
    assert_eq!(selected.id, "1");
  }

  #[test]
  fn test_latest_attachment_empty_is_none() {
    assert!(latest_attachment(&[]).is_none());
  }

  #[test]
  fn test_filter_then_latest_fixture() {
    // The non-CSV file is newest overall but must not be selected.
    let attachments = vec![
      attachment("1", "a.txt", "2024-03-09T10:00:00+00:00"),
      attachment("2", "b.csv", "2024-03-05T10:00:00+00:00"),
      attachment("3", "c.csv", "2024-03-03T10:00:00+00:00"),
    ];

    let candidates = csv_attachments(&attachments);
    let selected = latest_attachment(&candidates).unwrap();
    assert_eq!(selected.filename, "b.csv");
  }
}
