use actix_web::cookie::Key;

use crate::models::user::DedupRule;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_key: Key,
    pub user_list_dedup: DedupRule,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Bad values fall back to defaults
    /// with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        };

        let user_list_dedup = match lookup("USER_LIST_DEDUP") {
            Some(val) => val.parse().unwrap_or_else(|e| {
                log::warn!("{e}; using '{}'", DedupRule::default().as_str());
                DedupRule::default()
            }),
            None => DedupRule::default(),
        };
        if user_list_dedup == DedupRule::Legacy {
            log::warn!(
                "User list uses the legacy dedup rule (first name OR email OR role); \
                 set USER_LIST_DEDUP=none to show every user"
            );
        }

        Self {
            bind_addr,
            session_key,
            user_list_dedup,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
