use crate::models::{NewService, Service, ServicePatch};

use super::{fresh_id, MockStore, StoreError};

impl MockStore {
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Catalog-listing order: `display_order` ascending, ties by title.
    pub fn services_ordered(&self) -> Vec<Service> {
        let mut out = self.services.clone();
        out.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.title.cmp(&b.title))
        });
        out
    }

    pub fn featured_services(&self) -> Vec<&Service> {
        self.services.iter().filter(|s| s.is_featured).collect()
    }

    pub fn get_service_by_id(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Slug is the routing parameter for the detail view.
    pub fn get_service_by_slug(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn create_service(&mut self, new: NewService) -> Result<Service, StoreError> {
        if self.get_service_by_slug(&new.slug).is_some() {
            return Err(StoreError::Validation(format!(
                "service slug already in use: {}",
                new.slug
            )));
        }
        let service = Service {
            id: fresh_id(),
            title: new.title,
            title_bn: new.title_bn,
            slug: new.slug,
            category: new.category,
            description: new.description,
            description_bn: new.description_bn,
            price_range: new.price_range,
            duration: new.duration,
            benefits: new.benefits,
            procedure_steps: new.procedure_steps,
            is_featured: new.is_featured,
            display_order: new.display_order,
        };
        self.services.push(service.clone());
        tracing::debug!(service_id = %service.id, slug = %service.slug, "service created");
        Ok(service)
    }

    pub fn update_service(&mut self, id: &str, patch: &ServicePatch) -> Option<Service> {
        let service = self.services.iter_mut().find(|s| s.id == id)?;
        patch.apply(service);
        Some(service.clone())
    }

    pub fn delete_service(&mut self, id: &str) -> bool {
        let before = self.services.len();
        self.services.retain(|s| s.id != id);
        self.services.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_service(slug: &str, order: i64) -> NewService {
        NewService {
            title: "Teeth Whitening".into(),
            title_bn: "দাঁত সাদা করা".into(),
            slug: slug.into(),
            category: "cosmetic".into(),
            description: "Professional whitening.".into(),
            description_bn: "পেশাদার হোয়াইটেনিং।".into(),
            price_range: "৳3,000–৳8,000".into(),
            duration: "45 min".into(),
            benefits: vec!["Brighter smile".into()],
            procedure_steps: vec!["Cleaning".into(), "Gel application".into()],
            is_featured: false,
            display_order: order,
        }
    }

    #[test]
    fn slug_lookup_after_create() {
        let mut store = MockStore::new();
        let created = store.create_service(new_service("teeth-whitening", 1)).unwrap();
        assert_eq!(
            store.get_service_by_slug("teeth-whitening"),
            Some(&created)
        );
    }

    #[test]
    fn duplicate_slug_rejected() {
        let mut store = MockStore::new();
        store.create_service(new_service("teeth-whitening", 1)).unwrap();
        let err = store
            .create_service(new_service("teeth-whitening", 2))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.services().len(), 1);
    }

    #[test]
    fn ordered_listing_sorts_by_display_order() {
        let mut store = MockStore::new();
        store.create_service(new_service("scaling", 3)).unwrap();
        store.create_service(new_service("braces", 1)).unwrap();
        store.create_service(new_service("implant", 2)).unwrap();

        let slugs: Vec<_> = store
            .services_ordered()
            .into_iter()
            .map(|s| s.slug)
            .collect();
        assert_eq!(slugs, vec!["braces", "implant", "scaling"]);
    }

    #[test]
    fn featured_filter() {
        let mut store = MockStore::new();
        let mut featured = new_service("implant", 1);
        featured.is_featured = true;
        store.create_service(featured).unwrap();
        store.create_service(new_service("scaling", 2)).unwrap();

        let featured = store.featured_services();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].slug, "implant");
    }

    #[test]
    fn update_and_delete() {
        let mut store = MockStore::new();
        let created = store.create_service(new_service("scaling", 1)).unwrap();

        let patch = ServicePatch {
            price_range: Some("৳1,500–৳2,500".into()),
            ..ServicePatch::default()
        };
        let updated = store.update_service(&created.id, &patch).unwrap();
        assert_eq!(updated.price_range, "৳1,500–৳2,500");
        assert_eq!(updated.slug, "scaling");

        assert!(store.delete_service(&created.id));
        assert!(store.get_service_by_slug("scaling").is_none());
    }
}
