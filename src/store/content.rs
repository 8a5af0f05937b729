use crate::models::{BlogPost, GalleryImage, Testimonial};

use super::MockStore;

/// Read-only marketing content: testimonials, blog posts, gallery.
/// Seeded from the fixture; the admin console does not edit these.
impl MockStore {
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn featured_testimonials(&self) -> Vec<&Testimonial> {
        self.testimonials.iter().filter(|t| t.is_featured).collect()
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn get_blog_post_by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }

    pub fn gallery_images(&self) -> &[GalleryImage] {
        &self.gallery_images
    }

    pub fn gallery_images_by_category(&self, category: &str) -> Vec<&GalleryImage> {
        self.gallery_images
            .iter()
            .filter(|g| g.category == category)
            .collect()
    }
}
