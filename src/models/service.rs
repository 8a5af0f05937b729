use serde::{Deserialize, Serialize};

/// One entry in the clinic's treatment catalog. Bengali copy is carried
/// alongside the English fields (`*_bn`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub title_bn: String,
    /// Unique, used as the routing parameter for the detail view.
    pub slug: String,
    pub category: String,
    pub description: String,
    pub description_bn: String,
    pub price_range: String,
    pub duration: String,
    pub benefits: Vec<String>,
    pub procedure_steps: Vec<String>,
    pub is_featured: bool,
    pub display_order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewService {
    pub title: String,
    pub title_bn: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub description_bn: String,
    pub price_range: String,
    pub duration: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub procedure_steps: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub title_bn: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub description_bn: Option<String>,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub procedure_steps: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i64>,
}

impl ServicePatch {
    pub fn apply(&self, service: &mut Service) {
        if let Some(v) = &self.title {
            service.title = v.clone();
        }
        if let Some(v) = &self.title_bn {
            service.title_bn = v.clone();
        }
        if let Some(v) = &self.slug {
            service.slug = v.clone();
        }
        if let Some(v) = &self.category {
            service.category = v.clone();
        }
        if let Some(v) = &self.description {
            service.description = v.clone();
        }
        if let Some(v) = &self.description_bn {
            service.description_bn = v.clone();
        }
        if let Some(v) = &self.price_range {
            service.price_range = v.clone();
        }
        if let Some(v) = &self.duration {
            service.duration = v.clone();
        }
        if let Some(v) = &self.benefits {
            service.benefits = v.clone();
        }
        if let Some(v) = &self.procedure_steps {
            service.procedure_steps = v.clone();
        }
        if let Some(v) = self.is_featured {
            service.is_featured = v;
        }
        if let Some(v) = self.display_order {
            service.display_order = v;
        }
    }
}
