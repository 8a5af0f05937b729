//! In-memory clinic data store — entity-scoped operations.
//!
//! One `MockStore` instance holds every collection; operations are split
//! into domain sub-modules, one file per entity family. The store is
//! explicitly constructed and passed around, never a global. Everything
//! is synchronous and single-threaded: a mutation is visible to the next
//! read in the same call chain, and nothing survives a restart except
//! the persisted session (see `crate::session`).

mod appointments;
mod contacts;
mod content;
pub mod seed;
mod services;
mod users;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

use crate::models::{
    Appointment, BlogPost, ContactMessage, GalleryImage, PasswordResetToken, Service, Testimonial,
    User,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Seed fixture is malformed: {0}")]
    Seed(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// MockStore — all collections
// ═══════════════════════════════════════════════════════════

/// Memory-resident collections for every entity type.
///
/// Lookups are linear scans; there is no indexing and no transaction
/// boundary. Ids are timestamp-prefixed strings (best-effort uniqueness,
/// sufficient for a single-threaded core).
#[derive(Debug, Default)]
pub struct MockStore {
    pub(crate) users: Vec<User>,
    pub(crate) services: Vec<Service>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) testimonials: Vec<Testimonial>,
    pub(crate) blog_posts: Vec<BlogPost>,
    pub(crate) contact_messages: Vec<ContactMessage>,
    pub(crate) gallery_images: Vec<GalleryImage>,
    pub(crate) reset_tokens: Vec<PasswordResetToken>,
}

impl MockStore {
    /// Create an empty store (tests, custom seeding).
    pub fn new() -> Self {
        Self::default()
    }

    // ── Password-reset tokens ────────────────────────────

    pub fn put_reset_token(&mut self, token: PasswordResetToken) {
        self.reset_tokens.push(token);
    }

    pub fn find_reset_token(&self, email: &str, token: &str) -> Option<&PasswordResetToken> {
        self.reset_tokens
            .iter()
            .find(|t| t.email == email && t.token == token)
    }

    /// Remove a consumed token. Returns whether a removal occurred.
    pub fn remove_reset_token(&mut self, email: &str, token: &str) -> bool {
        let before = self.reset_tokens.len();
        self.reset_tokens
            .retain(|t| !(t.email == email && t.token == token));
        self.reset_tokens.len() < before
    }
}

/// Generate a fresh record id: millisecond timestamp plus random suffix.
pub(crate) fn fresh_id() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..0x1000000);
    format!("{}-{:06x}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(email: &str, value: &str) -> PasswordResetToken {
        PasswordResetToken {
            email: email.into(),
            token: value.into(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    #[test]
    fn fresh_ids_carry_timestamp_prefix() {
        let id = fresh_id();
        let (prefix, suffix) = id.split_once('-').expect("dash-separated id");
        assert!(prefix.parse::<i64>().is_ok(), "prefix not numeric: {prefix}");
        assert_eq!(suffix.len(), 6);
    }

    #[test]
    fn reset_token_lookup_matches_email_and_token() {
        let mut store = MockStore::new();
        store.put_reset_token(token("a@clinic.bd", "t1"));
        store.put_reset_token(token("b@clinic.bd", "t2"));

        assert!(store.find_reset_token("a@clinic.bd", "t1").is_some());
        assert!(store.find_reset_token("a@clinic.bd", "t2").is_none());
        assert!(store.find_reset_token("c@clinic.bd", "t1").is_none());
    }

    #[test]
    fn remove_reset_token_reports_removal() {
        let mut store = MockStore::new();
        store.put_reset_token(token("a@clinic.bd", "t1"));

        assert!(store.remove_reset_token("a@clinic.bd", "t1"));
        assert!(!store.remove_reset_token("a@clinic.bd", "t1"));
        assert!(store.find_reset_token("a@clinic.bd", "t1").is_none());
    }
}
