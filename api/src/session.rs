//! Session resolution and sign-out.
//!
//! The client-safe [`Session`] carries only the display attributes the
//! navbar needs. The server keeps a fuller record (including the owning
//! user id) that never crosses the wire.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Display attributes of the signed-in user, or absent when signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub avatar_url: String,
}

/// Resolve the current session. Returns `None` when nobody is signed in.
#[server]
pub async fn resolve_session() -> Result<Option<Session>, ServerFnError> {
    Ok(store::current().map(|record| Session {
        name: record.name,
        avatar_url: record.avatar_url,
    }))
}

/// Invalidate the current session. The next resolution sees a signed-out
/// state.
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    store::clear();
    Ok(())
}

#[cfg(feature = "server")]
pub(crate) mod store {
    use std::sync::{PoisonError, RwLock};

    use once_cell::sync::Lazy;

    /// Full server-side session record. `user_id` stays on this side of the
    /// wire; created roasters are stamped with it.
    #[derive(Debug, Clone)]
    pub struct SessionRecord {
        pub user_id: String,
        pub name: String,
        pub avatar_url: String,
    }

    // Seeded demo identity standing in for the external auth layer.
    static CURRENT: Lazy<RwLock<Option<SessionRecord>>> =
        Lazy::new(|| RwLock::new(Some(demo_session())));

    fn demo_session() -> SessionRecord {
        SessionRecord {
            user_id: "u-demo".to_string(),
            name: "Demo Roaster".to_string(),
            avatar_url: "https://i.pravatar.cc/64?u=roastery-demo".to_string(),
        }
    }

    pub fn current() -> Option<SessionRecord> {
        CURRENT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear() {
        *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::info!("session invalidated");
    }

    #[cfg(test)]
    pub fn restore_demo() {
        *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = Some(demo_session());
    }
}
