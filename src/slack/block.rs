use serde::ser::SerializeStruct;
use serde::{ser, Serialize};

/// Slack's block API is its most modern, and lets the reminder mix rich
/// formatting with plain body text. This is our limited subset thereof.
///
/// <https://api.slack.com/reference/block-kit/blocks>
pub enum Block {
    /// A section block containing "mrkdwn", Slack's alternative to Markdown.
    ///
    /// <https://api.slack.com/reference/surfaces/formatting#basics>
    Section(String),
    Divider,
    /// A context block: small print, one mrkdwn element per entry.
    Context(Vec<String>),
}

// This won't scale to other block types but for now is simpler than a more
// custom serialisation implementation.
#[derive(Serialize)]
struct RawTextBlock<'a> {
    #[serde(rename = "type")]
    typ: &'static str,
    text: &'a String,
}

impl ser::Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Block::Section(x) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "section")?;

                let inner = RawTextBlock {
                    typ: "mrkdwn",
                    text: x,
                };
                state.serialize_field("text", &inner)?;
                state.end()
            }

            Block::Divider => {
                let mut state = serializer.serialize_struct("Block", 1)?;
                state.serialize_field("type", "divider")?;
                state.end()
            }

            Block::Context(xs) => {
                let mut state = serializer.serialize_struct("Block", 2)?;
                state.serialize_field("type", "context")?;

                let elements: Vec<RawTextBlock> = xs
                    .iter()
                    .map(|x| RawTextBlock {
                        typ: "mrkdwn",
                        text: x,
                    })
                    .collect();
                state.serialize_field("elements", &elements)?;
                state.end()
            }
        }
    }
}
