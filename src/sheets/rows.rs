//! Reading a worksheet as header-keyed rows.

use super::api::{response_error, SheetsClient, SpreadsheetId};
use super::auth::SheetsAccessToken;
use super::error::SheetsError;
use serde::Deserialize;
use std::collections::HashMap;

/// One data row of the roster worksheet, keyed by the column names from the
/// header row. Read once per run and discarded after the participants have
/// been extracted.
pub struct RosterRow(HashMap<String, String>);

impl RosterRow {
    /// The cell under `column`, or the empty string for columns the row
    /// doesn't have.
    pub fn get(&self, column: &str) -> &str {
        self.0.get(column).map(String::as_str).unwrap_or("")
    }
}

impl FromIterator<(String, String)> for RosterRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        RosterRow(iter.into_iter().collect())
    }
}

/// <https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets.values#ValueRange>
#[derive(Deserialize)]
struct ValuesResponse {
    /// Omitted entirely when the worksheet is empty.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Pair each data row up with the header row. Rows shorter than the header
/// are padded with empty cells; cells beyond the last header are dropped.
fn rows_from_values(values: Vec<Vec<String>>) -> Vec<RosterRow> {
    let mut rows = values.into_iter();

    let headers = match rows.next() {
        Some(headers) => headers,
        None => return Vec::new(),
    };

    rows.map(|row| {
        headers
            .iter()
            .cloned()
            .zip(row.into_iter().chain(std::iter::repeat(String::new())))
            .collect()
    })
    .collect()
}

impl SheetsClient {
    /// Fetch every row of the named worksheet, the first row consumed as
    /// column headers.
    pub async fn fetch_rows(
        &self,
        spreadsheet: &SpreadsheetId,
        worksheet: &str,
        token: &SheetsAccessToken,
    ) -> Result<Vec<RosterRow>, SheetsError> {
        let url = self.values_url(spreadsheet, worksheet)?;

        let res = self.get(url, token).send().await?;

        if !res.status().is_success() {
            return Err(response_error(res).await);
        }

        let body: ValuesResponse = res.json().await?;
        Ok(rows_from_values(body.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_rows_from_values() {
        let rows = rows_from_values(vec![
            strings(&["Date", "To (1)", "From (1)"]),
            strings(&["12/05/25", "Alice", "Bob"]),
            strings(&["12/12/25", "Carol"]),
        ]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Date"), "12/05/25");
        assert_eq!(rows[0].get("To (1)"), "Alice");
        assert_eq!(rows[0].get("From (1)"), "Bob");

        // Short rows read as empty cells, as does an unknown column.
        assert_eq!(rows[1].get("From (1)"), "");
        assert_eq!(rows[1].get("No Such Column"), "");
    }

    #[test]
    fn test_rows_from_empty_worksheet() {
        assert!(rows_from_values(vec![]).is_empty());
        assert!(rows_from_values(vec![strings(&["Date"])]).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_rows() {
        let mut srv = mockito::Server::new_async().await;

        let mock = srv
            .mock("GET", "/v4/spreadsheets/sheet-1/values/Sheet1")
            .match_header("authorization", "Bearer ya29.test-token")
            .with_body(
                r#"{
                    "range": "Sheet1!A1:Z100",
                    "majorDimension": "ROWS",
                    "values": [
                        ["Date", "To (1)"],
                        ["12/05/25", "Alice"]
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = SheetsClient::new(srv.url());
        let rows = client
            .fetch_rows(
                &SpreadsheetId("sheet-1".into()),
                "Sheet1",
                &SheetsAccessToken("ya29.test-token".into()),
            )
            .await
            .unwrap_or_else(|e| panic!("{}", e));

        mock.assert_async().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("To (1)"), "Alice");
    }

    #[tokio::test]
    async fn test_fetch_rows_access_denied() {
        let mut srv = mockito::Server::new_async().await;

        let _mock = srv
            .mock("GET", "/v4/spreadsheets/sheet-1/values/Nope")
            .with_status(404)
            .with_body(
                r#"{"error": {"code": 404, "message": "Unable to parse range: Nope", "status": "INVALID_ARGUMENT"}}"#,
            )
            .create_async()
            .await;

        let client = SheetsClient::new(srv.url());
        let res = client
            .fetch_rows(
                &SpreadsheetId("sheet-1".into()),
                "Nope",
                &SheetsAccessToken("ya29.test-token".into()),
            )
            .await;

        match res {
            Err(SheetsError::APIResponseError(e)) => {
                assert_eq!(e, "Unable to parse range: Nope")
            }
            _ => panic!("expected an API response error"),
        }
    }
}
