//! Reading the ride roster out of a Google Sheets worksheet.
//!
//! Authentication uses a service-account key: a short-lived JWT assertion is
//! exchanged at Google's token endpoint for a bearer token scoped to
//! read-only spreadsheet access. See [auth].

pub mod api;
pub mod auth;
pub mod error;
pub mod rows;
