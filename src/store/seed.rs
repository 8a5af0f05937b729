//! Seed fixture — initial collections for a fresh process.
//!
//! The fixture is a static JSON document embedded at compile time and
//! deserialized once per `seeded()` call, so every store instance gets
//! its own deep copy. There is no persistence across restarts: a
//! restarted process always starts from this fixture.

use serde::Deserialize;

use crate::models::{
    Appointment, BlogPost, ContactMessage, GalleryImage, PasswordResetToken, Service, Testimonial,
    User,
};

use super::{MockStore, StoreError};

const SEED_JSON: &str = include_str!("../../resources/seed.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    users: Vec<User>,
    services: Vec<Service>,
    appointments: Vec<Appointment>,
    testimonials: Vec<Testimonial>,
    blog_posts: Vec<BlogPost>,
    contact_messages: Vec<ContactMessage>,
    gallery_images: Vec<GalleryImage>,
    #[serde(default)]
    reset_tokens: Vec<PasswordResetToken>,
}

impl MockStore {
    /// Build a store populated from the embedded seed fixture.
    pub fn seeded() -> Result<Self, StoreError> {
        let seed: SeedData = serde_json::from_str(SEED_JSON)?;
        tracing::info!(
            users = seed.users.len(),
            services = seed.services.len(),
            appointments = seed.appointments.len(),
            "store seeded from fixture"
        );
        Ok(Self {
            users: seed.users,
            services: seed.services,
            appointments: seed.appointments,
            testimonials: seed.testimonials,
            blog_posts: seed.blog_posts,
            contact_messages: seed.contact_messages,
            gallery_images: seed.gallery_images,
            reset_tokens: seed.reset_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn fixture_parses_and_populates_every_collection() {
        let store = MockStore::seeded().unwrap();
        assert!(!store.users().is_empty());
        assert!(!store.services().is_empty());
        assert!(!store.appointments().is_empty());
        assert!(!store.testimonials().is_empty());
        assert!(!store.blog_posts().is_empty());
        assert!(!store.contact_messages().is_empty());
        assert!(!store.gallery_images().is_empty());
    }

    #[test]
    fn fixture_carries_one_admin_and_one_doctor() {
        let store = MockStore::seeded().unwrap();
        assert!(store.users().iter().any(|u| u.role == UserRole::Admin));
        assert!(store.users().iter().any(|u| u.role == UserRole::Doctor));
    }

    #[test]
    fn seeded_stores_are_independent_copies() {
        let mut a = MockStore::seeded().unwrap();
        let b = MockStore::seeded().unwrap();

        let id = a.users()[0].id.clone();
        a.delete_user(&id);
        assert!(b.get_user_by_id(&id).is_some(), "seed copy must be deep");
    }

    #[test]
    fn seed_service_slugs_are_unique() {
        let store = MockStore::seeded().unwrap();
        let mut slugs: Vec<_> = store.services().iter().map(|s| s.slug.clone()).collect();
        slugs.sort();
        let len = slugs.len();
        slugs.dedup();
        assert_eq!(slugs.len(), len, "duplicate slug in seed fixture");
    }

    #[test]
    fn seed_emails_are_unique() {
        let store = MockStore::seeded().unwrap();
        let mut emails: Vec<_> = store.users().iter().map(|u| u.email.clone()).collect();
        emails.sort();
        let len = emails.len();
        emails.dedup();
        assert_eq!(emails.len(), len, "duplicate email in seed fixture");
    }
}
