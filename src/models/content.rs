use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub patient_name: String,
    pub text: String,
    pub text_bn: String,
    /// 1–5 stars; not validated beyond what the fixture carries.
    pub rating: u8,
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub title_bn: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub content_bn: String,
    pub published_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub title_bn: String,
    pub image_url: String,
    pub category: String,
}
