//! Mention tokens for the rendered message.

use super::directory::{IdentityMap, UserId};
use std::fmt;
use tracing::warn;

/// One token in the mention list: either a resolved user reference, which
/// Slack renders as a clickable @-mention, or the person's literal name when
/// no identity matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mention {
    User(UserId),
    Literal(String),
}

/// Resolve a roster name against the identity map, case-insensitively. A
/// miss degrades to the literal name; that person simply won't be pinged.
pub fn resolve(map: &IdentityMap, name: &str) -> Mention {
    match map.get(name) {
        Some(id) => Mention::User(id.clone()),
        None => {
            warn!("Could not find Slack ID for name: {}", name);
            Mention::Literal(name.to_owned())
        }
    }
}

/// Format to the syntax Slack expects for user mentions, or inert plain
/// text for unresolved names.
///
/// <https://api.slack.com/reference/surfaces/formatting#mentioning-users>
impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mention::User(id) => write!(f, "<@{}>", id.0),
            Mention::Literal(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> IdentityMap {
        IdentityMap::from_iter([("Alice".to_owned(), UserId("U001".into()))])
    }

    #[test]
    fn test_resolve_hit_is_case_insensitive() {
        assert_eq!(resolve(&map(), "alice"), Mention::User(UserId("U001".into())));
        assert_eq!(resolve(&map(), "ALICE"), Mention::User(UserId("U001".into())));
    }

    #[test]
    fn test_resolve_miss_keeps_literal_name() {
        assert_eq!(resolve(&map(), "Bob"), Mention::Literal("Bob".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Mention::User(UserId("U001".into())).to_string(), "<@U001>");
        assert_eq!(Mention::Literal("Bob".into()).to_string(), "Bob");
    }
}
