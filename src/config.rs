//! Run configuration, read from the environment once at startup and passed
//! down into each pipeline stage by parameter.

use crate::slack::auth::SlackAccessToken;
use crate::slack::channel::ChannelId;
use crate::slack::directory::MembershipScope;
use std::{fmt, path::PathBuf};
use url::Url;

/// Conventional filename for the Google service-account key, next to the
/// binary, unless overridden via `$GOOGLE_SERVICE_ACCOUNT_FILE`.
const DEFAULT_KEY_FILE: &str = "service-account.json";

/// Everything the run needs, validated before any network call is made.
pub struct Config {
    pub slack_token: SlackAccessToken,
    /// The channel the reminder is posted to, and which scopes identity
    /// resolution when [MembershipScope::Channel] is in effect.
    pub channel: ChannelId,
    pub spreadsheet_url: Url,
    pub worksheet: String,
    /// Display name looked up in the identity map for the footer contact.
    pub maintainer: String,
    pub membership_scope: MembershipScope,
    pub key_file: PathBuf,
}

pub enum ConfigError {
    MissingVar(&'static str),
    InvalidUrl(&'static str, url::ParseError),
    InvalidScope(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            ConfigError::MissingVar(k) => {
                format!("Missing required environment variable: {}", k)
            }
            ConfigError::InvalidUrl(k, e) => format!("Could not parse ${} as a URL: {}", k, e),
            ConfigError::InvalidScope(s) => format!(
                "Invalid $MEMBERSHIP_SCOPE (expected \"channel\" or \"workspace\"): {}",
                s
            ),
        };

        write!(f, "{}", x)
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build a config from any key/value source. Factored out of
    /// [Config::from_env] so tests needn't mutate process environment.
    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |k: &'static str| lookup(k).ok_or(ConfigError::MissingVar(k));

        let spreadsheet_url = Url::parse(&require("GOOGLE_SHEET_URL")?)
            .map_err(|e| ConfigError::InvalidUrl("GOOGLE_SHEET_URL", e))?;

        let membership_scope = match lookup("MEMBERSHIP_SCOPE").as_deref() {
            None | Some("channel") => MembershipScope::Channel,
            Some("workspace") => MembershipScope::Workspace,
            Some(s) => return Err(ConfigError::InvalidScope(s.to_owned())),
        };

        let key_file = lookup("GOOGLE_SERVICE_ACCOUNT_FILE")
            .unwrap_or_else(|| DEFAULT_KEY_FILE.to_owned())
            .into();

        Ok(Config {
            slack_token: SlackAccessToken(require("SLACK_BOT_TOKEN")?),
            channel: ChannelId(require("TARGET_CHANNEL_ID")?),
            spreadsheet_url,
            worksheet: require("WORKSHEET_NAME")?,
            maintainer: require("MAINTAINER_NAME")?,
            membership_scope,
            key_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("SLACK_BOT_TOKEN", "xoxb-foo"),
            ("TARGET_CHANNEL_ID", "C012345"),
            ("GOOGLE_SHEET_URL", "https://docs.google.com/spreadsheets/d/abc123/edit"),
            ("WORKSHEET_NAME", "Sheet1"),
            ("MAINTAINER_NAME", "Jane Doe"),
        ])
    }

    fn build(env: &HashMap<&'static str, &'static str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|k| env.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn test_complete_config() {
        let config = build(&full_env()).unwrap_or_else(|e| panic!("{}", e));

        assert_eq!(config.slack_token.0, "xoxb-foo");
        assert_eq!(config.channel.0, "C012345");
        assert_eq!(config.worksheet, "Sheet1");
        assert_eq!(config.maintainer, "Jane Doe");
        assert_eq!(config.membership_scope, MembershipScope::Channel);
        assert_eq!(config.key_file, PathBuf::from("service-account.json"));
    }

    #[test]
    fn test_missing_var() {
        let mut env = full_env();
        env.remove("SLACK_BOT_TOKEN");

        match build(&env) {
            Err(ConfigError::MissingVar("SLACK_BOT_TOKEN")) => (),
            _ => panic!("expected missing SLACK_BOT_TOKEN"),
        }
    }

    #[test]
    fn test_invalid_sheet_url() {
        let mut env = full_env();
        env.insert("GOOGLE_SHEET_URL", "not a url");

        assert!(matches!(
            build(&env),
            Err(ConfigError::InvalidUrl("GOOGLE_SHEET_URL", _))
        ));
    }

    #[test]
    fn test_membership_scope() {
        let mut env = full_env();
        env.insert("MEMBERSHIP_SCOPE", "workspace");
        let config = build(&env).unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(config.membership_scope, MembershipScope::Workspace);

        env.insert("MEMBERSHIP_SCOPE", "everyone");
        assert!(matches!(build(&env), Err(ConfigError::InvalidScope(_))));
    }

    #[test]
    fn test_key_file_override() {
        let mut env = full_env();
        env.insert("GOOGLE_SERVICE_ACCOUNT_FILE", "/etc/keys/sa.json");

        let config = build(&env).unwrap_or_else(|e| panic!("{}", e));
        assert_eq!(config.key_file, PathBuf::from("/etc/keys/sa.json"));
    }
}
