use crate::auth::permissions::ActivePermissions;
use crate::models::permission::Permission;
use crate::models::role::Role;
use crate::models::user::{DedupRule, User, UserDraft};
use crate::store::RecordStore;

use super::{ModalRequest, Notice, PanelMode, SaveError, Saved};

/// What the user panel shows: the filtered user rows and the roles offered
/// in the selector.
#[derive(Debug, Clone)]
pub struct UserListing {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
}

pub struct UserPanel<'a> {
    store: &'a RecordStore,
    dedup: DedupRule,
}

impl<'a> UserPanel<'a> {
    pub fn new(store: &'a RecordStore, dedup: DedupRule) -> Self {
        Self { store, dedup }
    }

    pub async fn list(&self) -> UserListing {
        let users = self.store.fetch_users().await;
        let roles = self.store.fetch_roles().await;
        UserListing {
            users: self.dedup.apply(&users),
            roles,
        }
    }

    pub async fn open(
        &self,
        active: &ActivePermissions,
        request: ModalRequest,
    ) -> Result<PanelMode<UserDraft>, Notice> {
        match request {
            ModalRequest::New => self.open_add(active),
            ModalRequest::Edit(id) => self.open_edit(active, id).await,
        }
    }

    pub fn open_add(&self, active: &ActivePermissions) -> Result<PanelMode<UserDraft>, Notice> {
        active.require(Permission::Write, "You do not have permission to add users.")?;
        Ok(PanelMode::AwaitingSave(UserDraft::default()))
    }

    /// The form opens pre-filled with the stored values.
    pub async fn open_edit(
        &self,
        active: &ActivePermissions,
        id: i64,
    ) -> Result<PanelMode<UserDraft>, Notice> {
        active.require(Permission::Write, "You do not have permission to edit users.")?;
        let user = self
            .store
            .find_user(id)
            .await
            .ok_or_else(|| Notice::new("User not found."))?;
        Ok(PanelMode::AwaitingSave(UserDraft::from(&user)))
    }

    pub async fn delete(&self, active: &ActivePermissions, id: i64) -> Result<(), Notice> {
        active.require(Permission::Delete, "You do not have permission to delete users.")?;
        self.store.delete_user(id).await;
        Ok(())
    }

    /// Update when the draft carries an id, create otherwise. Resolves only
    /// after the store has applied the change.
    pub async fn save(
        &self,
        active: &ActivePermissions,
        draft: UserDraft,
    ) -> Result<Saved<User>, SaveError<UserDraft>> {
        let denial = if draft.is_edit() {
            "You do not have permission to edit users."
        } else {
            "You do not have permission to add users."
        };
        active
            .require(Permission::Write, denial)
            .map_err(SaveError::Denied)?;

        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(SaveError::Invalid { draft, errors });
        }

        match draft.id {
            Some(id) => {
                let user = draft.into_new_user().with_id(id);
                Ok(Saved::Updated(self.store.update_user(user).await))
            }
            None => Ok(Saved::Created(self.store.add_user(draft.into_new_user()).await)),
        }
    }
}
