use std::fmt;

use tokio::sync::broadcast::error::RecvError;

use super::RecordStore;

/// Emitted after a mutation actually changed a collection.
/// No-op updates and deletes of unknown ids emit nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    UserAdded { id: i64, name: String },
    UserUpdated { id: i64, name: String },
    UserDeleted { id: i64 },
    RoleAdded { id: i64, name: String },
    RoleUpdated { id: i64, name: String },
    RoleDeleted { id: i64 },
}

impl fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEvent::UserAdded { id, name } => write!(f, "user {id} '{name}' added"),
            StoreEvent::UserUpdated { id, name } => write!(f, "user {id} '{name}' updated"),
            StoreEvent::UserDeleted { id } => write!(f, "user {id} deleted"),
            StoreEvent::RoleAdded { id, name } => write!(f, "role {id} '{name}' added"),
            StoreEvent::RoleUpdated { id, name } => write!(f, "role {id} '{name}' updated"),
            StoreEvent::RoleDeleted { id } => write!(f, "role {id} deleted"),
        }
    }
}

/// Log every store change until the store is dropped.
pub fn spawn_change_log(store: &RecordStore) {
    let mut rx = store.subscribe();
    actix_web::rt::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => log::info!("Record store: {event}"),
                Err(RecvError::Lagged(missed)) => {
                    log::warn!("Record store change log skipped {missed} events");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}
