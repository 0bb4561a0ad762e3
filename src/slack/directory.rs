//! Resolve human names to Slack user IDs.
//!
//! Slack offers no single call for "the user directory filtered by channel",
//! so this is an explicit two-step: fetch the target channel's membership
//! IDs, then scan the workspace directory and keep only entries whose ID is
//! a member. The result is a map from lowercased display name to user ID.

use super::{api::*, auth::SlackAccessToken, channel::ChannelId, error::SlackError};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// A Slack user ID, e.g. `U012AB3CD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Which population of users names are resolved against. The platform is
/// ambiguous about which is canonical, so both are supported and the choice
/// is left to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipScope {
    /// Only members of the target channel. A participant outside the channel
    /// won't resolve, and so won't be pinged.
    Channel,
    /// The entire workspace directory.
    Workspace,
}

/// Maps lowercased display names to user IDs. Built fresh each run; lookups
/// are case-insensitive, matching how names arrive from the spreadsheet.
pub struct IdentityMap(HashMap<String, UserId>);

impl IdentityMap {
    pub fn empty() -> Self {
        IdentityMap(HashMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&UserId> {
        self.0.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, UserId)> for IdentityMap {
    fn from_iter<I: IntoIterator<Item = (String, UserId)>>(iter: I) -> Self {
        IdentityMap(
            iter.into_iter()
                .map(|(name, id)| (name.to_lowercase(), id))
                .collect(),
        )
    }
}

/// One entry of the workspace directory, as returned by `users.list`.
#[derive(Deserialize)]
struct DirectoryEntry {
    id: UserId,
    /// The account name, used as a fallback when no real name is set.
    name: String,
    #[serde(default)]
    profile: Profile,
}

#[serde_as]
#[derive(Deserialize, Default)]
struct Profile {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    real_name: Option<String>,
}

impl DirectoryEntry {
    /// The name participants are matched against: the profile's real name if
    /// present, else the account name.
    fn display_name(&self) -> Option<&str> {
        let name = self.profile.real_name.as_deref().unwrap_or(&self.name);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// <https://api.slack.com/methods/users.list#args>
#[derive(Serialize)]
struct UsersRequest {
    /// Maximum supported is 1000, but a limit of 200 is "recommended".
    limit: u16,
    cursor: Option<String>,
}

/// <https://api.slack.com/methods/users.list#examples>
#[derive(Deserialize)]
struct UsersResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    members: Vec<DirectoryEntry>,
    #[serde(default)]
    response_metadata: PaginationMeta,
}

/// <https://api.slack.com/methods/conversations.members#args>
#[derive(Serialize)]
struct MembersRequest<'a> {
    channel: &'a ChannelId,
    limit: u16,
    cursor: Option<String>,
}

/// <https://api.slack.com/methods/conversations.members#examples>
#[derive(Deserialize)]
struct MembersResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    members: Vec<UserId>,
    #[serde(default)]
    response_metadata: PaginationMeta,
}

/// The metadata attached to paginated responses. Slack signals the last page
/// with an empty cursor, or by omitting the metadata entirely.
#[serde_as]
#[derive(Deserialize, Default)]
struct PaginationMeta {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    next_cursor: Option<String>,
}

impl SlackClient {
    /// Build the name→ID map for the given scope. Entries are keyed on the
    /// lowercased display name; the first directory entry to claim a name
    /// wins.
    pub async fn identity_map(
        &self,
        channel: &ChannelId,
        scope: MembershipScope,
        token: &SlackAccessToken,
    ) -> Result<IdentityMap, SlackError> {
        let members = match scope {
            MembershipScope::Channel => Some(self.channel_members(channel, token).await?),
            MembershipScope::Workspace => None,
        };

        let mut map: HashMap<String, UserId> = HashMap::new();

        for entry in self.directory(token).await? {
            if let Some(members) = &members {
                if !members.contains(&entry.id) {
                    continue;
                }
            }

            let name = match entry.display_name() {
                Some(name) => name.to_lowercase(),
                None => continue,
            };
            map.entry(name).or_insert(entry.id);
        }

        Ok(IdentityMap(map))
    }

    /// As [SlackClient::identity_map], but degrading to an empty map on any
    /// API failure. Resolution failure shouldn't abort the run; it only
    /// means nobody gets pinged.
    pub async fn identity_map_or_empty(
        &self,
        channel: &ChannelId,
        scope: MembershipScope,
        token: &SlackAccessToken,
    ) -> IdentityMap {
        match self.identity_map(channel, scope, token).await {
            Ok(map) => map,
            Err(e) => {
                warn!("Failed to build Slack identity map: {}", e);
                IdentityMap::empty()
            }
        }
    }

    /// The user IDs of everyone currently in `channel`.
    async fn channel_members(
        &self,
        channel: &ChannelId,
        token: &SlackAccessToken,
    ) -> Result<HashSet<UserId>, SlackError> {
        let mut members: HashSet<UserId> = HashSet::new();
        let mut cursor: Option<String> = None;

        loop {
            let res: APIResult<MembersResponse> = self
                .get("/conversations.members", token)
                .query(&MembersRequest {
                    channel,
                    limit: 200,
                    cursor,
                })
                .send()
                .await?
                .json()
                .await?;

            match res {
                APIResult::Ok(res) => {
                    members.extend(res.members);

                    cursor = res.response_metadata.next_cursor;
                    if cursor.is_none() {
                        break Ok(members);
                    }
                }
                APIResult::Err(res) => break Err(SlackError::APIResponseError(res.error)),
            }
        }
    }

    /// Every entry of the workspace directory.
    async fn directory(&self, token: &SlackAccessToken) -> Result<Vec<DirectoryEntry>, SlackError> {
        let mut entries: Vec<DirectoryEntry> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let res: APIResult<UsersResponse> = self
                .get("/users.list", token)
                .query(&UsersRequest { limit: 200, cursor })
                .send()
                .await?
                .json()
                .await?;

            match res {
                APIResult::Ok(mut res) => {
                    entries.append(&mut res.members);

                    cursor = res.response_metadata.next_cursor;
                    if cursor.is_none() {
                        break Ok(entries);
                    }
                }
                APIResult::Err(res) => break Err(SlackError::APIResponseError(res.error)),
            }
        }
    }
}
