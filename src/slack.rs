//! Posting the monthly reminder to a Slack channel, and resolving roster
//! names to mentionable Slack identities beforehand.
//!
//! See [message] for delivery and [directory] for identity resolution.

pub mod api;
pub mod auth;
pub mod block;
pub mod channel;
pub mod directory;
pub mod error;
pub mod mention;
pub mod message;
