//! User profiles and the default-profile fallback.
//!
//! Records reference profiles by an optional string tag with no
//! referential integrity; unknown or missing tags resolve to the default
//! profile at read time.

use anyhow::Result;
use paisa_core::Profile;
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

pub const DEFAULT_PROFILE_ID: &str = "default";

pub struct ProfileService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> ProfileService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// Stored profiles; an empty store reads as just the default profile
    pub fn list(&self) -> Vec<Profile> {
        let stored: Vec<Profile> = read_list(self.store, keys::PROFILES);
        if stored.is_empty() {
            vec![Profile::new(DEFAULT_PROFILE_ID, "Personal")]
        } else {
            stored
        }
    }

    /// Persist the default profile, used by first-run setup
    pub fn seed_default(&self) -> Result<Profile> {
        let profile = Profile::new(DEFAULT_PROFILE_ID, "Personal");
        let mut all: Vec<Profile> = read_list(self.store, keys::PROFILES);
        if !all.iter().any(|p| p.id == DEFAULT_PROFILE_ID) {
            all.push(profile.clone());
            write_list(self.store, keys::PROFILES, &all)?;
        }
        Ok(profile)
    }

    pub fn add(&self, name: &str) -> Result<Profile> {
        let profile = Profile::new(Uuid::new_v4().to_string(), name);
        let mut all = self.list();
        all.push(profile.clone());
        write_list(self.store, keys::PROFILES, &all)?;
        Ok(profile)
    }

    /// Resolve a record's profile tag: known ids pass through, anything
    /// else (missing or orphaned) silently resolves to the default
    pub fn resolve_id(&self, tag: Option<&str>) -> String {
        match tag {
            Some(id) if self.list().iter().any(|p| p.id == id) => id.to_string(),
            _ => DEFAULT_PROFILE_ID.to_string(),
        }
    }
}
