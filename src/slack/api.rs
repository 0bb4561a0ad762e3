//! Type definitions and helpers for the Slack API.

use super::auth::{to_auth_header_val, SlackAccessToken};
use serde::Deserialize;
use std::time::Duration;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// Per-request timeout. Slack is treated as unreachable beyond this, which
/// the caller maps to its usual request-failure case.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A client that holds a connection pool internally, as per
/// [reqwest::Client]. The API base is parameterised so that tests can target
/// a local mock server.
pub struct SlackClient {
    base: String,
    client: reqwest::Client,
}

impl SlackClient {
    pub fn new(base: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Could not build HTTP client");

        SlackClient { base, client }
    }

    /// Create a GET request to any Slack API endpoint, handling
    /// authentication.
    pub(super) fn get(&self, path: &str, token: &SlackAccessToken) -> reqwest::RequestBuilder {
        self.client
            .get(self.base.to_owned() + path)
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }

    /// Create a POST request to any Slack API endpoint, handling
    /// authentication.
    pub(super) fn post(&self, path: &str, token: &SlackAccessToken) -> reqwest::RequestBuilder {
        self.client
            .post(self.base.to_owned() + path)
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "members": []
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// The `ok` field is checked here, and should be checked on responses too,
// primarily to ensure appropriate deserialization behaviour in case of an
// otherwise empty successful response.
//
// Ideally we'd be able to use `ok` as a tag, rather than defining `APIResult`
// as untagged. See:
//   <https://github.com/serde-rs/serde/issues/745#issuecomment-294314786>
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}
