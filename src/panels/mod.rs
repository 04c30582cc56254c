//! Permission-gated CRUD for the user and role panels.
//!
//! Each panel is `Idle` until an add or edit request passes its gate, then
//! `AwaitingSave` with a draft until the save resolves. Every gated call
//! takes the caller's `ActivePermissions`; panels keep no state of their own
//! between requests and always read from the record store.

pub mod roles;
pub mod users;

use std::fmt;

pub use roles::RolePanel;
pub use users::UserPanel;

/// A blocking message shown to the operator. Dismissal is the only action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Notice(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a panel's form modal is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode<D> {
    Idle,
    /// Create when the draft has no id, edit otherwise.
    AwaitingSave(D),
}

impl<D> PanelMode<D> {
    pub fn into_draft(self) -> Option<D> {
        match self {
            PanelMode::Idle => None,
            PanelMode::AwaitingSave(draft) => Some(draft),
        }
    }
}

/// A request to open the form modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRequest {
    New,
    Edit(i64),
}

impl ModalRequest {
    /// `modal=new`, or `modal=edit` with an id. Anything else opens nothing.
    pub fn from_params(modal: Option<&str>, id: Option<i64>) -> Option<Self> {
        match (modal?, id) {
            ("new", _) => Some(ModalRequest::New),
            ("edit", Some(id)) => Some(ModalRequest::Edit(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved<T> {
    Created(T),
    Updated(T),
}

impl<T> Saved<T> {
    pub fn record(&self) -> &T {
        match self {
            Saved::Created(t) | Saved::Updated(t) => t,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError<D> {
    /// Permission or guard refusal; the modal closes.
    Denied(Notice),
    /// Missing required fields; the modal stays open with the draft.
    Invalid { draft: D, errors: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_request_needs_id_for_edit() {
        assert_eq!(ModalRequest::from_params(Some("new"), None), Some(ModalRequest::New));
        assert_eq!(ModalRequest::from_params(Some("edit"), Some(4)), Some(ModalRequest::Edit(4)));
        assert_eq!(ModalRequest::from_params(Some("edit"), None), None);
        assert_eq!(ModalRequest::from_params(Some("close"), Some(4)), None);
        assert_eq!(ModalRequest::from_params(None, Some(4)), None);
    }
}
