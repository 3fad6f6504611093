//! Profile repository
//!
//! One JSON document per user under `profiles/<username>_profile.json`.
//! Profiles aren't cached; each call goes to disk.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::UserProfile;

use super::file_io::{read_json_optional, write_json_atomic};

const PROFILE_SUFFIX: &str = "_profile.json";

/// Repository for user profiles
pub struct ProfileRepository {
    dir: PathBuf,
}

impl ProfileRepository {
    /// Create a new repository rooted at the profiles directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{}{}", username, PROFILE_SUFFIX))
    }

    /// Save a profile, returning the file it was written to
    pub fn save(&self, profile: &UserProfile) -> Result<PathBuf, BudgetError> {
        let path = self.path_for(&profile.username);
        write_json_atomic(&path, profile)?;
        debug!(username = %profile.username, "saved profile");
        Ok(path)
    }

    /// Load a profile; `None` when the user has no saved profile
    pub fn load(&self, username: &str) -> Result<Option<UserProfile>, BudgetError> {
        read_json_optional(self.path_for(username))
    }

    /// Names of all users with a saved profile, sorted
    pub fn list(&self) -> Result<Vec<String>, BudgetError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            BudgetError::Storage(format!("Failed to read {}: {}", self.dir.display(), e))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable profile entry");
                    continue;
                }
            };
            let file_name = entry.file_name();
            if let Some(name) = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(PROFILE_SUFFIX))
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Delete a profile; `false` when there was nothing to delete
    pub fn delete(&self, username: &str) -> Result<bool, BudgetError> {
        let path = self.path_for(username);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| {
            BudgetError::Storage(format!("Failed to delete {}: {}", path.display(), e))
        })?;
        Ok(true)
    }

    /// Move a profile to a new username, rewriting its `username` field
    pub fn rename(&self, old: &str, new: &str) -> Result<bool, BudgetError> {
        let Some(mut profile) = self.load(old)? else {
            return Ok(false);
        };
        let (from, to) = (self.path_for(old), self.path_for(new));
        fs::rename(&from, &to).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to rename {} to {}: {}",
                from.display(),
                to.display(),
                e
            ))
        })?;

        profile.username = new.to_string();
        profile.touch();
        self.save(&profile)?;
        Ok(true)
    }
}
