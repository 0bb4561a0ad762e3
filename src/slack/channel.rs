//! The channel the reminder is delivered to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Channels are referred to by their underlying ID rather than their
/// changeable display name. The ID can be found in the Slack UI by copying a
/// link to the channel.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelId(pub String);

/// Format without the surrounding newtype wrapper.
impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
