use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A single authorization token a role can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Permission {
    Read,
    Write,
    Delete,
    Execute,
}

impl Permission {
    /// The fixed checklist shown in the role form, in display order.
    pub const CHECKLIST: [Permission; 4] = [
        Permission::Read,
        Permission::Write,
        Permission::Delete,
        Permission::Execute,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Read => "Read",
            Permission::Write => "Write",
            Permission::Delete => "Delete",
            Permission::Execute => "Execute",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token outside the four known permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown permission token '{}'", self.0)
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    /// Tokens match exactly; `"read"` is not `Read`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::CHECKLIST
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

/// Duplicate-free permission tokens in insertion order.
///
/// Membership ignores order; display keeps the order tokens were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet(Vec<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Returns false if the token was already present.
    pub fn insert(&mut self, permission: Permission) -> bool {
        if self.contains(permission) {
            return false;
        }
        self.0.push(permission);
        true
    }

    /// Returns false if the token was not present.
    pub fn remove(&mut self, permission: Permission) -> bool {
        let before = self.0.len();
        self.0.retain(|p| *p != permission);
        self.0.len() != before
    }

    /// Flip one token; returns whether it is present afterwards.
    pub fn toggle(&mut self, permission: Permission) -> bool {
        if self.remove(permission) {
            false
        } else {
            self.0.push(permission);
            true
        }
    }

    /// Bring the set in line with a submitted checklist by toggling every
    /// token whose checked state differs. Kept tokens stay where they were,
    /// newly checked ones go to the end.
    pub fn apply_checklist(&mut self, checked: &[Permission]) {
        for permission in Permission::CHECKLIST {
            if checked.contains(&permission) != self.contains(permission) {
                self.toggle(permission);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = PermissionSet::new();
        for permission in iter {
            set.insert(permission);
        }
        set
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(Permission::as_str).collect();
        f.write_str(&labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!("Write".parse::<Permission>(), Ok(Permission::Write));
        assert!("write".parse::<Permission>().is_err());
        assert!("Admin".parse::<Permission>().is_err());
    }

    #[test]
    fn insert_ignores_duplicates() {
        let set: PermissionSet = [Permission::Read, Permission::Write, Permission::Read]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "Read, Write");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut set = PermissionSet::new();
        assert!(set.toggle(Permission::Delete));
        assert!(set.contains(Permission::Delete));
        assert!(!set.toggle(Permission::Delete));
        assert!(set.is_empty());
    }

    #[test]
    fn apply_checklist_keeps_existing_order() {
        let mut set: PermissionSet = [Permission::Delete, Permission::Read, Permission::Write]
            .into_iter()
            .collect();
        set.apply_checklist(&[Permission::Read, Permission::Delete, Permission::Execute]);
        assert_eq!(set.to_string(), "Delete, Read, Execute");
    }

    #[test]
    fn serializes_as_token_list() {
        let set: PermissionSet = [Permission::Read, Permission::Execute].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Read","Execute"]"#);
    }
}
