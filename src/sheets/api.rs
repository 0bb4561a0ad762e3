//! Type definitions and helpers for the Google Sheets API.

use super::auth::SheetsAccessToken;
use super::error::SheetsError;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// The base URL of the Sheets API.
pub const API_BASE: &str = "https://sheets.googleapis.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A client that holds a connection pool internally, as per
/// [reqwest::Client]. The API base is parameterised so that tests can target
/// a local mock server.
pub struct SheetsClient {
    base: String,
    client: reqwest::Client,
}

impl SheetsClient {
    pub fn new(base: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Could not build HTTP client");

        SheetsClient { base, client }
    }

    /// Create an authenticated GET request to an absolute Sheets API URL.
    pub(super) fn get(&self, url: Url, token: &SheetsAccessToken) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(&token.0)
    }

    /// Create an unauthenticated POST request, used for the token exchange
    /// which targets the key file's `token_uri` rather than the API base.
    pub(super) fn post(&self, url: Url) -> reqwest::RequestBuilder {
        self.client.post(url)
    }

    /// The endpoint serving the cell values of one worksheet. The worksheet
    /// name goes into the path and may contain characters that need
    /// escaping, hence [Url] rather than string concatenation.
    ///
    /// <https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets.values/get>
    pub(super) fn values_url(
        &self,
        spreadsheet: &SpreadsheetId,
        worksheet: &str,
    ) -> Result<Url, SheetsError> {
        let mut url =
            Url::parse(&self.base).map_err(|_| SheetsError::BadApiBase(self.base.clone()))?;

        url.path_segments_mut()
            .map_err(|_| SheetsError::BadApiBase(self.base.clone()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet.0.as_str(), "values", worksheet]);

        Ok(url)
    }
}

/// The document identifier embedded in a spreadsheet's shareable URL,
/// between the `/d/` and `/edit` path segments.
#[derive(Clone, PartialEq, Eq)]
pub struct SpreadsheetId(pub String);

impl SpreadsheetId {
    pub fn from_share_url(url: &Url) -> Result<Self, SheetsError> {
        let bad = || SheetsError::BadSpreadsheetUrl(url.clone());

        let mut segments = url.path_segments().ok_or_else(bad)?;

        segments.find(|s| *s == "d").ok_or_else(bad)?;

        segments
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| SpreadsheetId(s.to_owned()))
            .ok_or_else(bad)
    }
}

/// Extract the error message from an unsuccessful response. Google's API and
/// OAuth endpoints use different error shapes; fall back to the HTTP status
/// when neither parses.
pub(super) async fn response_error(res: reqwest::Response) -> SheetsError {
    let status = res.status();

    match res.text().await {
        Ok(body) => SheetsError::APIResponseError(describe_error(status, &body)),
        Err(e) => SheetsError::APIRequestFailed(e),
    }
}

/// `{"error": {"code": 403, "message": "...", "status": "PERMISSION_DENIED"}}`
#[derive(Deserialize)]
struct APIError {
    error: APIErrorBody,
}

#[derive(Deserialize)]
struct APIErrorBody {
    message: String,
}

/// `{"error": "invalid_grant", "error_description": "..."}`
#[derive(Deserialize)]
struct OAuthError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

fn describe_error(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(e) = serde_json::from_str::<APIError>(body) {
        return e.error.message;
    }

    if let Ok(e) = serde_json::from_str::<OAuthError>(body) {
        return match e.error_description {
            Some(desc) => format!("{}: {}", e.error, desc),
            None => e.error,
        };
    }

    format!("HTTP {}", status)
}
