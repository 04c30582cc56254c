use crate::auth::permissions::ActivePermissions;
use crate::models::permission::{Permission, PermissionSet};
use crate::models::role::{ADMIN_ROLE, Role, RoleDraft, RoleFormInput, RoleRow};
use crate::store::RecordStore;

use super::{ModalRequest, Notice, PanelMode, SaveError, Saved};

const LAST_ADMIN_EDIT: &str = "You cannot edit the last admin role.";
const LAST_ADMIN_DELETE: &str = "You cannot delete the last admin role.";

pub struct RolePanel<'a> {
    store: &'a RecordStore,
}

impl<'a> RolePanel<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<RoleRow> {
        let roles = self.store.fetch_roles().await;
        let locked = self.admin_locked().await;
        roles
            .into_iter()
            .map(|role| RoleRow {
                guarded: locked && role.name == ADMIN_ROLE,
                role,
            })
            .collect()
    }

    /// True while exactly one user holds the admin role.
    pub async fn admin_locked(&self) -> bool {
        self.store.count_users_with_role(ADMIN_ROLE).await == 1
    }

    /// The last-admin guard for one role. Independent of any permission.
    pub async fn is_guarded(&self, role: &Role) -> bool {
        role.name == ADMIN_ROLE && self.admin_locked().await
    }

    pub async fn open(
        &self,
        active: &ActivePermissions,
        request: ModalRequest,
    ) -> Result<PanelMode<RoleDraft>, Notice> {
        match request {
            ModalRequest::New => self.open_add(active),
            ModalRequest::Edit(id) => self.open_edit(active, id).await,
        }
    }

    pub fn open_add(&self, active: &ActivePermissions) -> Result<PanelMode<RoleDraft>, Notice> {
        active.require(Permission::Write, "You do not have permission to add roles.")?;
        Ok(PanelMode::AwaitingSave(RoleDraft::default()))
    }

    /// Guard first, then `Write`.
    pub async fn open_edit(
        &self,
        active: &ActivePermissions,
        id: i64,
    ) -> Result<PanelMode<RoleDraft>, Notice> {
        let role = self
            .store
            .find_role(id)
            .await
            .ok_or_else(|| Notice::new("Role not found."))?;
        if self.is_guarded(&role).await {
            return Err(Notice::new(LAST_ADMIN_EDIT));
        }
        active.require(Permission::Write, "You do not have permission to edit roles.")?;
        Ok(PanelMode::AwaitingSave(RoleDraft::from(&role)))
    }

    /// Guard first, then `Delete`. An unknown id passes to the store, which
    /// ignores it.
    pub async fn delete(&self, active: &ActivePermissions, id: i64) -> Result<(), Notice> {
        if let Some(role) = self.store.find_role(id).await {
            if self.is_guarded(&role).await {
                return Err(Notice::new(LAST_ADMIN_DELETE));
            }
        }
        active.require(Permission::Delete, "You do not have permission to delete roles.")?;
        self.store.delete_role(id).await;
        Ok(())
    }

    /// Build the draft a role form submission describes. The checklist is
    /// applied on top of the stored permissions so kept tokens keep their
    /// order. Unknown tokens are dropped.
    pub async fn draft_from_form(&self, input: &RoleFormInput) -> RoleDraft {
        let base = match input.id {
            Some(id) => self
                .store
                .find_role(id)
                .await
                .map(|r| r.permissions)
                .unwrap_or_default(),
            None => PermissionSet::new(),
        };
        let checked: Vec<Permission> = input
            .permissions
            .iter()
            .filter_map(|token| match token.parse() {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("Ignoring role form token: {e}");
                    None
                }
            })
            .collect();

        let mut permissions = base;
        permissions.apply_checklist(&checked);
        RoleDraft {
            id: input.id,
            name: input.name.clone(),
            permissions,
        }
    }

    /// Update when the draft carries an id, create otherwise. Edits of a
    /// guarded role are refused here too.
    pub async fn save(
        &self,
        active: &ActivePermissions,
        draft: RoleDraft,
    ) -> Result<Saved<Role>, SaveError<RoleDraft>> {
        if let Some(id) = draft.id {
            if let Some(stored) = self.store.find_role(id).await {
                if self.is_guarded(&stored).await {
                    return Err(SaveError::Denied(Notice::new(LAST_ADMIN_EDIT)));
                }
            }
        }
        let denial = if draft.is_edit() {
            "You do not have permission to edit roles."
        } else {
            "You do not have permission to add roles."
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
                let role = draft.into_new_role().with_id(id);
                Ok(Saved::Updated(self.store.update_role(role).await))
            }
            None => Ok(Saved::Created(self.store.add_role(draft.into_new_role()).await)),
        }
    }
}
