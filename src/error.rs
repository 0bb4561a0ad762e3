use crate::sheets::error::SheetsError;
use crate::slack::error::SlackError;
use std::fmt;

/// Sum type representing every fail state that aborts the run. Anything else
/// is recovered locally with a logged warning.
pub enum Failure {
    /// The roster couldn't be read; nothing is posted.
    RosterAccess(SheetsError),
    /// The message was built but couldn't be delivered.
    Delivery(SlackError),
}

impl From<SheetsError> for Failure {
    fn from(e: SheetsError) -> Self {
        Failure::RosterAccess(e)
    }
}

impl From<SlackError> for Failure {
    fn from(e: SlackError) -> Self {
        Failure::Delivery(e)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            Failure::RosterAccess(e) => format!("Error accessing the roster: {}", e),
            Failure::Delivery(e) => format!("Error posting to Slack: {}", e),
        };

        write!(f, "{}", x)
    }
}
