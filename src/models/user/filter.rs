// src/models/user/filter.rs
use std::fmt;
use std::str::FromStr;

use super::User;

/// Which rows the user list shows when records share field values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupRule {
    /// Keep a row if it is the first record with its name, or the first with
    /// its email, or the first with its role. A later record is hidden only
    /// when its name, email and role each already appeared on some earlier row.
    #[default]
    Legacy,
    /// Show every record.
    None,
    /// Keep a row if it is the first with its name or the first with its email.
    NameOrEmail,
}

impl DedupRule {
    pub fn as_str(self) -> &'static str {
        match self {
            DedupRule::Legacy => "legacy",
            DedupRule::None => "none",
            DedupRule::NameOrEmail => "name-or-email",
        }
    }

    /// Filter `users`, preserving order.
    pub fn apply(self, users: &[User]) -> Vec<User> {
        users
            .iter()
            .enumerate()
            .filter(|(idx, user)| self.keeps(users, *idx, user))
            .map(|(_, user)| user.clone())
            .collect()
    }

    fn keeps(self, users: &[User], idx: usize, user: &User) -> bool {
        let first_name = || first_index(users, |u| u.name == user.name) == idx;
        let first_email = || first_index(users, |u| u.email == user.email) == idx;
        let first_role = || first_index(users, |u| u.role == user.role) == idx;
        match self {
            DedupRule::None => true,
            DedupRule::NameOrEmail => first_name() || first_email(),
            DedupRule::Legacy => first_name() || first_email() || first_role(),
        }
    }
}

fn first_index(users: &[User], pred: impl Fn(&User) -> bool) -> usize {
    users.iter().position(pred).unwrap_or(usize::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDedupRule(pub String);

impl fmt::Display for UnknownDedupRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown dedup rule '{}' (expected legacy, none or name-or-email)",
            self.0
        )
    }
}

impl FromStr for DedupRule {
    type Err = UnknownDedupRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(DedupRule::Legacy),
            "none" => Ok(DedupRule::None),
            "name-or-email" => Ok(DedupRule::NameOrEmail),
            _ => Err(UnknownDedupRule(s.to_string())),
        }
    }
}
