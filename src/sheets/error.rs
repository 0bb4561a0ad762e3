use std::fmt;
use url::Url;

/// Sum type representing every possible unexceptional fail state. Each of
/// these is fatal for the run: without the roster there is nothing to post.
pub enum SheetsError {
    CredentialFile(std::io::Error),
    CredentialParse(serde_json::Error),
    Assertion(jsonwebtoken::errors::Error),
    APIRequestFailed(reqwest::Error),
    APIResponseError(String),
    BadSpreadsheetUrl(Url),
    BadApiBase(String),
}

impl From<reqwest::Error> for SheetsError {
    fn from(e: reqwest::Error) -> Self {
        SheetsError::APIRequestFailed(e)
    }
}

impl fmt::Display for SheetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            SheetsError::CredentialFile(e) => {
                format!("Could not read service-account key file: {}", e)
            }
            SheetsError::CredentialParse(e) => {
                format!("Could not parse service-account key file: {}", e)
            }
            SheetsError::Assertion(e) => format!("Could not sign JWT assertion: {}", e),
            SheetsError::APIRequestFailed(e) => format!("Sheets API request failed: {:?}", e),
            SheetsError::APIResponseError(e) => format!("Sheets API returned error: {}", e),
            SheetsError::BadSpreadsheetUrl(u) => {
                format!("Could not find a spreadsheet ID in URL: {}", u)
            }
            SheetsError::BadApiBase(b) => format!("Invalid Sheets API base: {}", b),
        };

        write!(f, "{}", x)
    }
}
