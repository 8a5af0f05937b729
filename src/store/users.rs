use crate::models::{NewUser, User, UserPatch};

use super::{fresh_id, MockStore, StoreError};

impl MockStore {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Case-sensitive match, same as the signup uniqueness check.
    pub fn get_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Create a user. Fails when the email is already registered —
    /// uniqueness is checked at creation only, not on later updates.
    pub fn create_user(&mut self, new: NewUser) -> Result<User, StoreError> {
        if self.get_user_by_email(&new.email).is_some() {
            return Err(StoreError::Validation(format!(
                "email already registered: {}",
                new.email
            )));
        }
        let user = User {
            id: fresh_id(),
            email: new.email,
            password: new.password,
            full_name: new.full_name,
            phone: new.phone,
            role: new.role,
        };
        self.users.push(user.clone());
        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Shallow-merge `patch` into the matching user. Returns the updated
    /// record, or `None` when no user has that id. Never creates.
    pub fn update_user(&mut self, id: &str, patch: &UserPatch) -> Option<User> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        patch.apply(user);
        Some(user.clone())
    }

    /// Remove the matching user. Returns whether a removal occurred.
    pub fn delete_user(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.into(),
            password: "secret1".into(),
            full_name: "Rahim Uddin".into(),
            phone: "+8801711000000".into(),
            role: UserRole::Patient,
        }
    }

    #[test]
    fn create_then_lookup_by_email() {
        let mut store = MockStore::new();
        let created = store.create_user(new_user("rahim@example.com")).unwrap();

        let found = store.get_user_by_email("rahim@example.com").unwrap();
        assert_eq!(found, &created);
        assert_eq!(store.get_user_by_id(&created.id), Some(&created));
    }

    #[test]
    fn duplicate_email_rejected_and_count_unchanged() {
        let mut store = MockStore::new();
        store.create_user(new_user("rahim@example.com")).unwrap();

        let err = store.create_user(new_user("rahim@example.com")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let mut store = MockStore::new();
        store.create_user(new_user("Rahim@Example.com")).unwrap();

        assert!(store.get_user_by_email("rahim@example.com").is_none());
        // Different casing passes the creation check too.
        assert!(store.create_user(new_user("rahim@example.com")).is_ok());
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut store = MockStore::new();
        let created = store.create_user(new_user("rahim@example.com")).unwrap();

        let patch = UserPatch {
            phone: Some("+8801911000000".into()),
            ..UserPatch::default()
        };
        let updated = store.update_user(&created.id, &patch).unwrap();
        assert_eq!(updated.phone, "+8801911000000");
        assert_eq!(updated.full_name, created.full_name);
        assert_eq!(updated.email, created.email);
    }

    #[test]
    fn update_unknown_id_is_absence_not_upsert() {
        let mut store = MockStore::new();
        let patch = UserPatch::default();
        assert!(store.update_user("no-such-id", &patch).is_none());
        assert!(store.users().is_empty());
    }

    #[test]
    fn delete_reports_whether_removed() {
        let mut store = MockStore::new();
        let created = store.create_user(new_user("rahim@example.com")).unwrap();

        assert!(store.delete_user(&created.id));
        assert!(!store.delete_user(&created.id));
        assert!(store.users().is_empty());
    }
}
