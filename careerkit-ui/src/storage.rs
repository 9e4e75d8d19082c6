//! Browser persistence for the profile and the session id.
//!
//! The profile is written on every field mutation and removed on reset.
//! On the server these are no-ops; nothing renders differently there
//! because the demo profile is the fallback on both sides.

use careerkit_app::domain::Profile;

pub const PROFILE_KEY: &str = "careerkit.profile.v1";
pub const SESSION_KEY: &str = "careerkit.session.v1";

#[cfg(feature = "hydrate")]
mod imp {
    use super::*;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn load_profile() -> Option<Profile> {
        let raw = local_storage()?.get_item(PROFILE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!("stored profile unreadable, falling back to demo: {err}");
                None
            }
        }
    }

    pub fn save_profile(profile: &Profile) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(profile) {
            let _ = storage.set_item(PROFILE_KEY, &raw);
        }
    }

    pub fn clear_profile() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(PROFILE_KEY);
        }
    }

    /// Stable per-browser session id for the server-side rate limiter.
    pub fn session_id() -> String {
        if let Some(storage) = local_storage() {
            if let Ok(Some(existing)) = storage.get_item(SESSION_KEY) {
                return existing;
            }
            let fresh = uuid::Uuid::new_v4().to_string();
            let _ = storage.set_item(SESSION_KEY, &fresh);
            return fresh;
        }
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(not(feature = "hydrate"))]
mod imp {
    use super::*;

    pub fn load_profile() -> Option<Profile> {
        None
    }

    pub fn save_profile(_profile: &Profile) {}

    pub fn clear_profile() {}

    pub fn session_id() -> String {
        "server".to_string()
    }
}

pub use imp::{clear_profile, load_profile, save_profile, session_id};
