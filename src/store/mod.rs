//! In-memory record store: the single authority for users and roles.
//!
//! Every operation is async and completes on a later scheduling turn, but
//! none of them can fail. Updates and deletes that match no id are silent
//! no-ops. Nothing here enforces the last-admin guard.

pub mod events;
pub mod seed;

use tokio::sync::{RwLock, broadcast};

use crate::models::role::{NewRole, Role};
use crate::models::user::{NewUser, User};

pub use events::{StoreEvent, spawn_change_log};

const EVENT_CAPACITY: usize = 64;

struct Collections {
    users: Vec<User>,
    roles: Vec<Role>,
    next_user_id: i64,
    next_role_id: i64,
}

pub struct RecordStore {
    collections: RwLock<Collections>,
    events: broadcast::Sender<StoreEvent>,
}

impl RecordStore {
    /// Ids handed out later start above both the record count and the
    /// largest id already present.
    pub fn new(users: Vec<User>, roles: Vec<Role>) -> Self {
        let next_user_id = next_id(users.len(), users.iter().map(|u| u.id));
        let next_role_id = next_id(roles.len(), roles.iter().map(|r| r.id));
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            collections: RwLock::new(Collections {
                users,
                roles,
                next_user_id,
                next_role_id,
            }),
            events,
        }
    }

    /// Two users (Alice, Bob) and two roles (Admin, Editor).
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::roles())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub async fn fetch_users(&self) -> Vec<User> {
        settle().await;
        self.collections.read().await.users.clone()
    }

    pub async fn fetch_roles(&self) -> Vec<Role> {
        settle().await;
        self.collections.read().await.roles.clone()
    }

    pub async fn find_user(&self, id: i64) -> Option<User> {
        settle().await;
        let c = self.collections.read().await;
        c.users.iter().find(|u| u.id == id).cloned()
    }

    pub async fn find_role(&self, id: i64) -> Option<Role> {
        settle().await;
        let c = self.collections.read().await;
        c.roles.iter().find(|r| r.id == id).cloned()
    }

    /// Number of users whose role name matches exactly.
    pub async fn count_users_with_role(&self, role_name: &str) -> usize {
        settle().await;
        let c = self.collections.read().await;
        c.users.iter().filter(|u| u.role == role_name).count()
    }

    pub async fn add_user(&self, new: NewUser) -> User {
        settle().await;
        let user = {
            let mut c = self.collections.write().await;
            let user = new.with_id(c.next_user_id);
            c.next_user_id += 1;
            c.users.push(user.clone());
            user
        };
        self.publish(StoreEvent::UserAdded { id: user.id, name: user.name.clone() });
        user
    }

    /// Replace the record with the same id. Returns the input either way.
    pub async fn update_user(&self, user: User) -> User {
        settle().await;
        let replaced = {
            let mut c = self.collections.write().await;
            match c.users.iter_mut().find(|u| u.id == user.id) {
                Some(slot) => {
                    *slot = user.clone();
                    true
                }
                None => false,
            }
        };
        if replaced {
            self.publish(StoreEvent::UserUpdated { id: user.id, name: user.name.clone() });
        }
        user
    }

    pub async fn delete_user(&self, id: i64) {
        settle().await;
        let removed = {
            let mut c = self.collections.write().await;
            let before = c.users.len();
            c.users.retain(|u| u.id != id);
            c.users.len() != before
        };
        if removed {
            self.publish(StoreEvent::UserDeleted { id });
        }
    }

    pub async fn add_role(&self, new: NewRole) -> Role {
        settle().await;
        let role = {
            let mut c = self.collections.write().await;
            let role = new.with_id(c.next_role_id);
            c.next_role_id += 1;
            c.roles.push(role.clone());
            role
        };
        self.publish(StoreEvent::RoleAdded { id: role.id, name: role.name.clone() });
        role
    }

    /// Replace the record with the same id. Returns the input either way.
    pub async fn update_role(&self, role: Role) -> Role {
        settle().await;
        let replaced = {
            let mut c = self.collections.write().await;
            match c.roles.iter_mut().find(|r| r.id == role.id) {
                Some(slot) => {
                    *slot = role.clone();
                    true
                }
                None => false,
            }
        };
        if replaced {
            self.publish(StoreEvent::RoleUpdated { id: role.id, name: role.name.clone() });
        }
        role
    }

    pub async fn delete_role(&self, id: i64) {
        settle().await;
        let removed = {
            let mut c = self.collections.write().await;
            let before = c.roles.len();
            c.roles.retain(|r| r.id != id);
            c.roles.len() != before
        };
        if removed {
            self.publish(StoreEvent::RoleDeleted { id });
        }
    }

    fn publish(&self, event: StoreEvent) {
        // Err only means nobody is subscribed.
        let _ = self.events.send(event);
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(vec![], vec![])
    }
}

fn next_id(count: usize, ids: impl Iterator<Item = i64>) -> i64 {
    let max_id = ids.max().unwrap_or(0);
    max_id.max(count as i64) + 1
}

/// Results land on the next scheduling turn, never inline.
async fn settle() {
    tokio::task::yield_now().await;
}
