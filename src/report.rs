//! Assembling the reminder message.
//!
//! The layout is fixed: a header section, a body section linking the
//! spreadsheet and listing the mentions, a divider, and a context footer
//! naming the maintainer. A flat fallback string accompanies the blocks for
//! notification previews.

use crate::period::TargetPeriod;
use crate::slack::block::Block;
use crate::slack::mention::Mention;
use url::Url;

/// The link label shown in place of the raw spreadsheet URL.
const SPREADSHEET_LABEL: &str = "College Ministry Volunteer Drivers";

/// A fully rendered reminder, constructed once and sent once.
pub struct Report {
    pub blocks: Vec<Block>,
    /// Flat text used for notification previews and accessibility.
    pub fallback: String,
}

impl Report {
    pub fn build(
        period: &TargetPeriod,
        spreadsheet_url: &Url,
        mentions: &[Mention],
        maintainer: &Mention,
    ) -> Self {
        let mentions_text = mentions
            .iter()
            .map(Mention::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let header = format!(":alarm_clock: {} rides", period.label());

        let body = format!(
            "<{}|{}>. Unavailable? Please find someone to swap with.\n\n{}",
            spreadsheet_url, SPREADSHEET_LABEL, mentions_text
        );

        let footer = format!(
            "This message was sent by rideminder. Please contact {} if I am not working",
            maintainer
        );

        Report {
            blocks: vec![
                Block::Section(header),
                Block::Section(body),
                Block::Divider,
                Block::Context(vec![footer]),
            ],
            fallback: format!("{} rides: {}", period.label(), mentions_text),
        }
    }
}
