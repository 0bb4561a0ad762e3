//! Deliver the assembled reminder to the target channel.

use super::{api::*, auth::SlackAccessToken, block::Block, channel::ChannelId, error::SlackError};
use serde::{Deserialize, Serialize};

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a ChannelId,
    blocks: &'a [Block],
    // Used for notification previews in the presence of `blocks`.
    text: &'a str,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
}

impl SlackClient {
    /// Post a block message to a channel by its ID, with `text` as the flat
    /// fallback for notifications. The bot must already be a member of the
    /// channel.
    pub async fn post_message(
        &self,
        channel: &ChannelId,
        blocks: &[Block],
        text: &str,
        token: &SlackAccessToken,
    ) -> Result<(), SlackError> {
        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage", token)
            .json(&MessageRequest {
                channel,
                blocks,
                text,
            })
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(_) => Ok(()),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn token() -> SlackAccessToken {
        SlackAccessToken("xoxb-test".into())
    }

    #[tokio::test]
    async fn test_post_message_success() {
        let mut srv = mockito::Server::new_async().await;

        let mock = srv
            .mock("POST", "/chat.postMessage")
            .match_header("authorization", "Bearer xoxb-test")
            .match_body(Matcher::Json(json!({
                "channel": "C012345",
                "blocks": [
                    {
                        "type": "section",
                        "text": { "type": "mrkdwn", "text": "hello" }
                    }
                ],
                "text": "hello"
            })))
            .with_body(r#"{ "ok": true }"#)
            .create_async()
            .await;

        let client = SlackClient::new(srv.url());
        let res = client
            .post_message(
                &ChannelId("C012345".into()),
                &[Block::Section("hello".into())],
                "hello",
                &token(),
            )
            .await;

        mock.assert_async().await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_post_message_api_error() {
        let mut srv = mockito::Server::new_async().await;

        let _mock = srv
            .mock("POST", "/chat.postMessage")
            .with_body(r#"{ "ok": false, "error": "channel_not_found" }"#)
            .create_async()
            .await;

        let client = SlackClient::new(srv.url());
        let res = client
            .post_message(
                &ChannelId("C-bad".into()),
                &[Block::Divider],
                "fallback",
                &token(),
            )
            .await;

        match res {
            Err(SlackError::APIResponseError(e)) => assert_eq!(e, "channel_not_found"),
            _ => panic!("expected an API response error"),
        }
    }
}
