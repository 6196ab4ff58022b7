//! Header construction for authenticated Jira requests.
//!
//! All functions here are pure: write-header normalization copies the input
//! map and sets the required values, so a client's header map is never
//! mutated after construction and can be shared freely across tasks.

use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::consts::{ATLASSIAN_TOKEN, NO_CHECK};

/// Build a header map carrying a Basic-Auth `Authorization` entry.
///
/// The value is `Basic base64("{username}:{password}")` with the standard
/// alphabet and padding. Credentials are not validated; empty strings produce
/// a syntactically valid header the server will reject. The value is marked
/// sensitive so it stays out of debug output.
pub fn basic_auth_header(username: &str, password: &str) -> HeaderMap {
  let payload = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));

  let mut value = HeaderValue::from_str(&format!("Basic {payload}"))
    .expect("base64 output is always a valid header value");
  value.set_sensitive(true);

  let mut headers = HeaderMap::new();
  headers.insert(AUTHORIZATION, value);
  headers
}

/// Headers for a JSON write request: a copy of `base` with
/// `Content-Type: application/json` and `X-Atlassian-Token: no-check` set,
/// replacing any prior values under either key.
pub fn json_write_headers(base: &HeaderMap) -> HeaderMap {
  let mut headers = base.clone();
  headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
  headers.insert(ATLASSIAN_TOKEN, HeaderValue::from_static(NO_CHECK));
  headers
}

/// Headers for a multipart upload: a copy of `base` with
/// `X-Atlassian-Token: no-check` set and any prior `Content-Type` removed.
///
/// The multipart `Content-Type` must carry the form boundary, so it is left
/// to the transport's form builder rather than fixed here.
pub fn multipart_write_headers(base: &HeaderMap) -> HeaderMap {
  let mut headers = base.clone();
  headers.remove(CONTENT_TYPE);
  headers.insert(ATLASSIAN_TOKEN, HeaderValue::from_static(NO_CHECK));
  headers
}
