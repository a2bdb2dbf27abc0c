//! Roaster records and the create/list server functions.
//!
//! The length rules live here (not in the UI crate) so the form's inline
//! messages and the server's re-validation can never drift apart.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Minimum character count for each free-text field.
pub const MIN_FIELD_CHARS: usize = 2;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const LOCATION_TOO_SHORT: &str = "Location must be at least 2 characters";

/// A coffee-roasting business, as returned by the server. `id`, the
/// timestamps, and `user_id` are always server-assigned; clients never
/// fabricate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roaster {
    pub id: String,
    pub name: String,
    pub location: String,
    /// RFC 3339 timestamps, assigned on creation.
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
}

/// Client-proposed fields for a new roaster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoaster {
    pub name: String,
    pub location: String,
}

pub fn name_error(name: &str) -> Option<&'static str> {
    (name.chars().count() < MIN_FIELD_CHARS).then_some(NAME_TOO_SHORT)
}

pub fn location_error(location: &str) -> Option<&'static str> {
    (location.chars().count() < MIN_FIELD_CHARS).then_some(LOCATION_TOO_SHORT)
}

/// Validate and persist a new roaster, returning the canonical record.
/// Requires an active session; the record is stamped with the session's
/// user id.
#[server]
pub async fn create_roaster(roaster: NewRoaster) -> Result<Roaster, ServerFnError> {
    store::create(roaster).map_err(|rejection| ServerFnError::new(rejection.to_string()))
}

/// All roasters, newest first.
#[server]
pub async fn list_roasters() -> Result<Vec<Roaster>, ServerFnError> {
    Ok(store::list())
}

#[cfg(feature = "server")]
mod store {
    use std::sync::{PoisonError, RwLock};

    use once_cell::sync::Lazy;
    use time::{format_description::well_known::Rfc3339, OffsetDateTime};
    use uuid::Uuid;

    use super::{location_error, name_error, NewRoaster, Roaster};
    use crate::session;

    /// Server-side reasons a creation request is refused. Flattened to the
    /// wire's message-bearing failure at the server-function boundary.
    #[derive(Debug, PartialEq, Eq, thiserror::Error)]
    pub enum RoasterRejection {
        #[error("You must be signed in to add a roaster")]
        Unauthenticated,
        #[error("{0}")]
        InvalidField(&'static str),
        #[error("Could not stamp the new roaster with a creation time")]
        Timestamp,
    }

    static ROASTERS: Lazy<RwLock<Vec<Roaster>>> = Lazy::new(|| RwLock::new(Vec::new()));

    pub fn create(roaster: NewRoaster) -> Result<Roaster, RoasterRejection> {
        let session =
            session::store::current().ok_or(RoasterRejection::Unauthenticated)?;

        if let Some(message) = name_error(&roaster.name) {
            tracing::warn!(field = "name", "rejected roaster creation");
            return Err(RoasterRejection::InvalidField(message));
        }
        if let Some(message) = location_error(&roaster.location) {
            tracing::warn!(field = "location", "rejected roaster creation");
            return Err(RoasterRejection::InvalidField(message));
        }

        let stamp = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|_| RoasterRejection::Timestamp)?;

        let record = Roaster {
            id: Uuid::new_v4().to_string(),
            name: roaster.name,
            location: roaster.location,
            created_at: stamp.clone(),
            updated_at: stamp,
            user_id: session.user_id,
        };

        ROASTERS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        tracing::info!(id = %record.id, name = %record.name, "roaster created");

        Ok(record)
    }

    pub fn list() -> Vec<Roaster> {
        ROASTERS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .cloned()
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use std::sync::Mutex;

        use super::*;

        // The stores are process-global; hold this across each test so they
        // don't interleave.
        static TEST_LOCK: Mutex<()> = Mutex::new(());

        fn proposed(name: &str, location: &str) -> NewRoaster {
            NewRoaster {
                name: name.to_string(),
                location: location.to_string(),
            }
        }

        #[test]
        fn create_assigns_server_fields() {
            let _guard = TEST_LOCK.lock().unwrap();
            session::store::restore_demo();

            let record = create(proposed("Acme Roasters", "Seattle")).unwrap();
            assert!(!record.id.is_empty());
            assert_eq!(record.created_at, record.updated_at);
            assert_eq!(record.user_id, "u-demo");
            assert_eq!(record.name, "Acme Roasters");
            assert_eq!(record.location, "Seattle");
        }

        #[test]
        fn create_requires_a_session() {
            let _guard = TEST_LOCK.lock().unwrap();
            session::store::clear();

            let rejection = create(proposed("Acme Roasters", "Seattle")).unwrap_err();
            assert_eq!(rejection, RoasterRejection::Unauthenticated);

            session::store::restore_demo();
        }

        #[test]
        fn create_rejects_short_fields() {
            let _guard = TEST_LOCK.lock().unwrap();
            session::store::restore_demo();

            let rejection = create(proposed("A", "Seattle")).unwrap_err();
            assert_eq!(
                rejection,
                RoasterRejection::InvalidField(super::super::NAME_TOO_SHORT)
            );

            let rejection = create(proposed("Acme Roasters", "X")).unwrap_err();
            assert_eq!(
                rejection,
                RoasterRejection::InvalidField(super::super::LOCATION_TOO_SHORT)
            );
        }

        #[test]
        fn list_returns_newest_first() {
            let _guard = TEST_LOCK.lock().unwrap();
            session::store::restore_demo();

            let first = create(proposed("First Crack", "Portland")).unwrap();
            let second = create(proposed("Second Crack", "Oakland")).unwrap();

            let listed = list();
            let first_pos = listed.iter().position(|r| r.id == first.id).unwrap();
            let second_pos = listed.iter().position(|r| r.id == second.id).unwrap();
            assert!(second_pos < first_pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_characters_pass_validation() {
        assert_eq!(name_error("Ok"), None);
        assert_eq!(location_error("NY"), None);
    }

    #[test]
    fn short_fields_carry_their_messages() {
        assert_eq!(name_error("A"), Some(NAME_TOO_SHORT));
        assert_eq!(name_error(""), Some(NAME_TOO_SHORT));
        assert_eq!(location_error("X"), Some(LOCATION_TOO_SHORT));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        assert_eq!(name_error("Üß"), None);
        assert_eq!(name_error("Ü"), Some(NAME_TOO_SHORT));
    }
}
