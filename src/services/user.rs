//! User service
//!
//! Creates, renames, lists and deletes users. Usernames are unique ignoring
//! case and ids are unique six-digit strings; both are checked against the
//! user list already in memory.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::user::clean_username;
use crate::models::{Money, User, UserId, UserProfile};
use crate::services::identity::{self, IdGenerator, RandomIdGenerator};
use crate::services::tax;
use crate::storage::Storage;

/// Input for creating a user
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub state: Option<String>,
    /// Explicit id; generated when absent
    pub user_id: Option<String>,
    /// Gross monthly income
    pub income: Money,
    pub tax_rate: f64,
}

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a user with a randomly generated id when none is given
    pub fn create(&self, new_user: NewUser) -> BudgetResult<User> {
        self.create_with_generator(new_user, &mut RandomIdGenerator::thread_local())
    }

    /// Create a user, drawing ids from `generator`
    ///
    /// Registers the user in the user list and saves an empty profile
    /// holding the income and tax rate.
    pub fn create_with_generator<G: IdGenerator>(
        &self,
        new_user: NewUser,
        generator: &mut G,
    ) -> BudgetResult<User> {
        let username =
            clean_username(&new_user.username).map_err(|e| BudgetError::Validation(e.to_string()))?;
        let usernames = self.storage.users.usernames();
        if identity::is_username_taken(&username, usernames.iter().map(String::as_str)) {
            return Err(BudgetError::duplicate_username(username));
        }

        tax::validate(new_user.income, new_user.tax_rate)?;

        let existing_ids = self.storage.users.user_ids();
        let user_id = match new_user.user_id.as_deref().map(str::trim) {
            Some(raw) => {
                let id = UserId::parse(raw).map_err(|e| BudgetError::Validation(e.to_string()))?;
                if identity::is_id_taken(&id, &existing_ids) {
                    return Err(BudgetError::duplicate_user_id(id.to_string()));
                }
                id
            }
            None => identity::generate_unique_id(&existing_ids, generator)?,
        };

        let user = User::new(&username, new_user.state.as_deref(), user_id)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.users.append(user.clone())?;
        self.storage
            .profiles
            .save(&UserProfile::new(&user, new_user.income, new_user.tax_rate))?;

        info!(username = %user.username, user_id = %user.user_id, "created user");
        Ok(user)
    }

    /// Find a user by name, ignoring case
    pub fn get(&self, username: &str) -> BudgetResult<User> {
        self.storage
            .users
            .find(username)
            .ok_or_else(|| BudgetError::user_not_found(username.trim()))
    }

    /// A user's saved profile, if any
    pub fn profile(&self, username: &str) -> BudgetResult<Option<UserProfile>> {
        let user = self.get(username)?;
        self.storage.profiles.load(&user.username)
    }

    /// All users in registration order
    pub fn list(&self) -> Vec<User> {
        self.storage.users.get_all()
    }

    /// Names of users with a saved profile
    pub fn profile_names(&self) -> BudgetResult<Vec<String>> {
        self.storage.profiles.list()
    }

    /// Rename a user, keeping their id
    ///
    /// The new name goes through the same validation as a new user; a
    /// change of case alone is allowed.
    pub fn rename(&self, old: &str, new: &str) -> BudgetResult<User> {
        let mut user = self.get(old)?;
        let new_name = clean_username(new).map_err(|e| BudgetError::Validation(e.to_string()))?;

        let others = self.storage.users.usernames_except(&user.user_id);
        if identity::is_username_taken(&new_name, others.iter().map(String::as_str)) {
            return Err(BudgetError::duplicate_username(new_name));
        }

        // Profile first: a failed move leaves the user list untouched
        let old_name = std::mem::replace(&mut user.username, new_name);
        let moved = self.storage.profiles.rename(&old_name, &user.username)?;
        if let Err(e) = self.storage.users.update(user.clone()) {
            if moved {
                if let Err(undo) = self.storage.profiles.rename(&user.username, &old_name) {
                    warn!(error = %undo, username = %old_name, "failed to restore profile");
                }
            }
            return Err(e);
        }

        info!(from = %old_name, to = %user.username, "renamed user");
        Ok(user)
    }

    /// Remove a user and their profile
    pub fn delete(&self, username: &str) -> BudgetResult<User> {
        let user = self
            .storage
            .users
            .remove(username)?
            .ok_or_else(|| BudgetError::user_not_found(username.trim()))?;
        self.storage.profiles.delete(&user.username)?;

        info!(username = %user.username, "deleted user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn new_user(name: &str, id: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            user_id: Some(id.to_string()),
            income: Money::from_cents(500000),
            tax_rate: 0.2,
            ..Default::default()
        }
    }

    struct Fixed(Vec<&'static str>);

    impl IdGenerator for Fixed {
        fn next_id(&mut self) -> UserId {
            UserId::parse(self.0.remove(0)).unwrap()
        }
    }

    #[test]
    fn test_create_saves_user_and_profile() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);

        let user = service
            .create(NewUser {
                state: Some("new york".into()),
                ..new_user(" alice ", "000042")
            })
            .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.state.as_deref(), Some("New York"));
        assert_eq!(user.user_id.as_str(), "000042");

        let profile = service.profile("ALICE").unwrap().unwrap();
        assert_eq!(profile.income, Money::from_cents(500000));
        assert_eq!(profile.tax_rate, 0.2);
    }

    #[test]
    fn test_duplicate_username_ignores_case() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("alice", "000001")).unwrap();

        let err = service.create(new_user("ALICE", "000002")).unwrap_err();
        assert!(matches!(err, BudgetError::Duplicate { .. }));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_explicit_id_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("alice", "000001")).unwrap();

        assert!(service.create(new_user("bob", "000001")).unwrap_err().is_validation());
        assert!(service.create(new_user("bob", "12345")).unwrap_err().is_validation());
        assert!(service.create(new_user("bob", "12a456")).unwrap_err().is_validation());
    }

    #[test]
    fn test_generated_id_skips_taken() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("alice", "000001")).unwrap();

        let mut generator = Fixed(vec!["000001", "000001", "000007"]);
        let bob = service
            .create_with_generator(
                NewUser {
                    user_id: None,
                    ..new_user("bob", "")
                },
                &mut generator,
            )
            .unwrap();
        assert_eq!(bob.user_id.as_str(), "000007");
    }

    #[test]
    fn test_invalid_inputs() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);

        let bad_state = NewUser {
            state: Some("Atlantis".into()),
            ..new_user("carol", "000003")
        };
        assert!(service.create(bad_state).unwrap_err().is_validation());

        let bad_rate = NewUser {
            tax_rate: 1.5,
            ..new_user("carol", "000003")
        };
        assert!(service.create(bad_rate).unwrap_err().is_validation());

        assert!(service.create(new_user("  ", "000003")).unwrap_err().is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_rename() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("alice", "000001")).unwrap();
        service.create(new_user("bob", "000002")).unwrap();

        assert!(service.rename("alice", "BOB").unwrap_err().is_validation());

        let renamed = service.rename("alice", "alicia").unwrap();
        assert_eq!(renamed.user_id.as_str(), "000001");
        assert!(service.get("alice").unwrap_err().is_not_found());
        assert_eq!(
            service.profile("alicia").unwrap().unwrap().username,
            "alicia"
        );

        let recased = service.rename("alicia", "Alicia").unwrap();
        assert_eq!(recased.username, "Alicia");
    }

    #[test]
    fn test_failed_profile_move_keeps_old_name() {
        let (temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("alice", "000001")).unwrap();

        let blocker = temp_dir
            .path()
            .join("data")
            .join("profiles")
            .join("alicia_profile.json");
        std::fs::create_dir(&blocker).unwrap();

        assert!(service.rename("alice", "alicia").is_err());
        assert_eq!(service.get("alice").unwrap().user_id.as_str(), "000001");
        assert!(service.get("alicia").unwrap_err().is_not_found());
        assert!(service.profile("alice").unwrap().is_some());
        assert_eq!(
            std::fs::read_to_string(storage.paths().users_file()).unwrap(),
            "alice,,000001\n"
        );
    }

    #[test]
    fn test_malformed_user_lines_stay_taken() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let users_file = paths.users_file();
        let mut storage = Storage::new(paths).unwrap();
        std::fs::write(&users_file, "alice,Narnia,000001\nbob,,000002\n").unwrap();
        storage.load_all().unwrap();
        let service = UserService::new(&storage);

        let err = service.create(new_user("alice", "000009")).unwrap_err();
        assert!(matches!(err, BudgetError::Duplicate { .. }));
        assert!(service.create(new_user("carol", "000001")).unwrap_err().is_validation());
        assert!(service.rename("bob", "Alice").unwrap_err().is_validation());

        service.delete("bob").unwrap();
        assert_eq!(
            std::fs::read_to_string(&users_file).unwrap(),
            "alice,Narnia,000001\n"
        );
    }

    #[test]
    fn test_profile_names() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("bob", "000002")).unwrap();
        service.create(new_user("alice", "000001")).unwrap();
        assert_eq!(service.profile_names().unwrap(), vec!["alice", "bob"]);

        service.delete("bob").unwrap();
        assert_eq!(service.profile_names().unwrap(), vec!["alice"]);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        service.create(new_user("alice", "000001")).unwrap();

        service.delete("Alice").unwrap();
        assert!(service.list().is_empty());
        assert!(storage.profiles.load("alice").unwrap().is_none());
        assert!(service.delete("alice").unwrap_err().is_not_found());
    }
}
