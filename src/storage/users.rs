//! User list repository
//!
//! Users are kept in a headerless comma separated file, one
//! `username,state,user_id` line per user. New users are appended; renames
//! and deletions rewrite the file. Lines that don't parse as a user are
//! kept verbatim so their name and id stay reserved and survive rewrites.

use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::warn;

use crate::error::BudgetError;
use crate::models::{User, UserId};

/// One line of the user list
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    User(User),
    Unreadable(Vec<String>),
}

impl Entry {
    fn user(&self) -> Option<&User> {
        match self {
            Entry::User(user) => Some(user),
            Entry::Unreadable(_) => None,
        }
    }

    fn username(&self) -> Option<&str> {
        match self {
            Entry::User(user) => Some(user.username.as_str()),
            Entry::Unreadable(fields) => fields
                .first()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty()),
        }
    }

    fn user_id(&self) -> Option<UserId> {
        match self {
            Entry::User(user) => Some(user.user_id.clone()),
            Entry::Unreadable(fields) => fields.get(2).and_then(|id| UserId::parse(id.trim()).ok()),
        }
    }
}

/// Repository for registered users
pub struct UserRepository {
    path: PathBuf,
    entries: RefCell<Vec<Entry>>,
}

impl UserRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Load users from disk
    ///
    /// Lines that don't describe a valid user are kept aside with a
    /// warning: they aren't listed, but their name and id still count as
    /// taken.
    pub fn load(&self) -> Result<(), BudgetError> {
        let mut entries = Vec::new();

        if self.path.exists() {
            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&self.path)
                .map_err(|e| {
                    BudgetError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
                })?;

            for (line, result) in reader.records().enumerate() {
                let record = result.map_err(|e| {
                    BudgetError::Storage(format!("Failed to read user list: {}", e))
                })?;

                let username = record.get(0).unwrap_or("").trim();
                let state = record.get(1).map(str::trim).filter(|s| !s.is_empty());
                let id = record.get(2).unwrap_or("").trim();

                let parsed = UserId::parse(id)
                    .map_err(|e| e.to_string())
                    .and_then(|id| User::new(username, state, id).map_err(|e| e.to_string()));

                match parsed {
                    Ok(user) => entries.push(Entry::User(user)),
                    Err(e) => {
                        warn!(line = line + 1, error = %e, "malformed user entry");
                        entries.push(Entry::Unreadable(
                            record.iter().map(str::to_string).collect(),
                        ));
                    }
                }
            }
        }

        *self.entries.borrow_mut() = entries;
        Ok(())
    }

    /// All valid users in file order
    pub fn get_all(&self) -> Vec<User> {
        self.entries
            .borrow()
            .iter()
            .filter_map(Entry::user)
            .cloned()
            .collect()
    }

    /// Find a user by name, ignoring case
    pub fn find(&self, username: &str) -> Option<User> {
        let wanted = username.trim().to_lowercase();
        self.entries
            .borrow()
            .iter()
            .filter_map(Entry::user)
            .find(|u| u.username.to_lowercase() == wanted)
            .cloned()
    }

    /// Every username taken, malformed lines included
    pub fn usernames(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter_map(Entry::username)
            .map(str::to_string)
            .collect()
    }

    /// Usernames taken by anyone other than the user with `user_id`
    pub fn usernames_except(&self, user_id: &UserId) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.user().map_or(true, |u| &u.user_id != user_id))
            .filter_map(Entry::username)
            .map(str::to_string)
            .collect()
    }

    /// Every user id taken, malformed lines included when their id parses
    pub fn user_ids(&self) -> Vec<UserId> {
        self.entries.borrow().iter().filter_map(Entry::user_id).collect()
    }

    /// Append a user to memory and to the end of the file
    pub fn append(&self, user: User) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BudgetError::Storage(format!("Failed to open user list: {}", e)))?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer
            .write_record(user_row(&user))
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| BudgetError::Storage(format!("Failed to write user list: {}", e)))?;

        self.entries.borrow_mut().push(Entry::User(user));
        Ok(())
    }

    /// Replace a user in place (matched by id) and rewrite the file
    pub fn update(&self, user: User) -> Result<(), BudgetError> {
        {
            let mut entries = self.entries.borrow_mut();
            let existing = entries
                .iter_mut()
                .find(|e| e.user().is_some_and(|u| u.user_id == user.user_id))
                .ok_or_else(|| BudgetError::user_not_found(user.user_id.to_string()))?;
            *existing = Entry::User(user);
        }
        self.rewrite()
    }

    /// Remove a user by name and rewrite the file
    pub fn remove(&self, username: &str) -> Result<Option<User>, BudgetError> {
        let wanted = username.trim().to_lowercase();
        let removed = {
            let mut entries = self.entries.borrow_mut();
            let position = entries
                .iter()
                .position(|e| e.user().is_some_and(|u| u.username.to_lowercase() == wanted));
            match position.map(|i| entries.remove(i)) {
                Some(Entry::User(user)) => Some(user),
                _ => None,
            }
        };

        if removed.is_some() {
            self.rewrite()?;
        }
        Ok(removed)
    }

    fn rewrite(&self) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("txt.tmp");
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&temp_path)
                .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

            for entry in self.entries.borrow().iter() {
                let written = match entry {
                    Entry::User(user) => writer.write_record(user_row(user)),
                    Entry::Unreadable(fields) => writer.write_record(fields),
                };
                written.map_err(|e| {
                    BudgetError::Storage(format!("Failed to write user list: {}", e))
                })?;
            }
            writer
                .flush()
                .map_err(|e| BudgetError::Storage(format!("Failed to flush user list: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            BudgetError::Storage(format!("Failed to rename temp file: {}", e))
        })
    }
}

fn user_row(user: &User) -> [&str; 3] {
    [
        user.username.as_str(),
        user.state.as_deref().unwrap_or(""),
        user.user_id.as_str(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user(name: &str, state: Option<&str>, id: &str) -> User {
        User::new(name, state, UserId::parse(id).unwrap()).unwrap()
    }

    #[test]
    fn test_append_writes_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.txt");
        let repo = UserRepository::new(path.clone());

        repo.append(user("alice", Some("Texas"), "000001")).unwrap();
        repo.append(user("bob", None, "000002")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "alice,Texas,000001\nbob,,000002\n");
    }

    #[test]
    fn test_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.txt");

        {
            let repo = UserRepository::new(path.clone());
            repo.append(user("alice", Some("New York"), "000001")).unwrap();
        }

        let repo = UserRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.get_all(), vec![user("alice", Some("New York"), "000001")]);
        assert!(repo.find("ALICE").is_some());
    }

    #[test]
    fn test_malformed_lines_stay_reserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.txt");
        fs::write(&path, "alice,Texas,000001\nbroken\ncarol,Narnia,000003\ndave,,12\n")
            .unwrap();

        let repo = UserRepository::new(path);
        repo.load().unwrap();

        let listed: Vec<String> = repo.get_all().into_iter().map(|u| u.username).collect();
        assert_eq!(listed, vec!["alice"]);
        assert!(repo.find("carol").is_none());
        assert_eq!(repo.usernames(), vec!["alice", "broken", "carol", "dave"]);
        assert_eq!(
            repo.user_ids(),
            vec![UserId::parse("000001").unwrap(), UserId::parse("000003").unwrap()]
        );
    }

    #[test]
    fn test_rewrite_keeps_malformed_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.txt");
        fs::write(&path, "alice,Narnia,000001\nbob,,000002\nbroken\n").unwrap();

        let repo = UserRepository::new(path.clone());
        repo.load().unwrap();
        assert!(repo.remove("bob").unwrap().is_some());
        assert!(repo.remove("alice").unwrap().is_none());

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alice,Narnia,000001\nbroken\n"
        );
    }

    #[test]
    fn test_update_and_remove_rewrite_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.txt");
        let repo = UserRepository::new(path.clone());

        repo.append(user("alice", None, "000001")).unwrap();
        repo.append(user("bob", None, "000002")).unwrap();

        repo.update(user("alicia", None, "000001")).unwrap();
        let removed = repo.remove("BOB").unwrap();
        assert_eq!(removed.map(|u| u.username), Some("bob".to_string()));

        assert_eq!(fs::read_to_string(&path).unwrap(), "alicia,,000001\n");
        assert!(repo.remove("nobody").unwrap().is_none());
    }
}
