use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

/// Free-form outcome figures attached to a delivered project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectMetrics {
    pub performance_improvement: Option<String>,
    pub user_growth: Option<String>,
    pub efficiency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub image_url: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub is_active: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub client_name: Option<String>,
    pub metrics: Option<Json<ProjectMetrics>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = 2, max = 200))]
    pub title: String,

    #[validate(length(min = 10, max = 1000))]
    pub description: String,

    #[validate(length(min = 10, max = 5000))]
    pub long_description: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[validate(length(min = 2, max = 100))]
    pub category: String,

    #[validate(length(min = 1, max = 500))]
    pub image_url: String,

    #[validate(url)]
    pub github_url: Option<String>,

    #[validate(url)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default = "default_is_active")]
    pub is_active: bool,

    pub completed_at: Option<DateTime<Utc>>,
    pub client_name: Option<String>,
    pub metrics: Option<ProjectMetrics>,
}

fn default_is_active() -> bool {
    true
}

impl NewProjectRequest {
    pub fn into_project(self) -> Project {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            long_description: self.long_description,
            technologies: self.technologies,
            category: self.category,
            image_url: self.image_url,
            github_url: self.github_url,
            live_url: self.live_url,
            featured: self.featured,
            is_active: self.is_active,
            completed_at: self.completed_at,
            client_name: self.client_name,
            metrics: self.metrics.map(Json),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. Absent fields leave the stored value unchanged; there is
/// no way to null out an optional field through a PATCH.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 2, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 10, max = 1000))]
    pub description: Option<String>,

    #[validate(length(min = 10, max = 5000))]
    pub long_description: Option<String>,

    pub technologies: Option<Vec<String>>,

    #[validate(length(min = 2, max = 100))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub image_url: Option<String>,

    #[validate(url)]
    pub github_url: Option<String>,

    #[validate(url)]
    pub live_url: Option<String>,

    pub featured: Option<bool>,
    pub is_active: Option<bool>,
    pub completed_at: Option<DateTime<Utc>>,
    pub client_name: Option<String>,
    pub metrics: Option<ProjectMetrics>,
}

impl UpdateProjectRequest {
    /// Merges the patch into an existing record and bumps `updated_at`.
    /// Shared by both storage backends so merge semantics cannot drift.
    pub fn apply(&self, project: &mut Project) {
        if let Some(title) = &self.title {
            project.title = title.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(long_description) = &self.long_description {
            project.long_description = long_description.clone();
        }
        if let Some(technologies) = &self.technologies {
            project.technologies = technologies.clone();
        }
        if let Some(category) = &self.category {
            project.category = category.clone();
        }
        if let Some(image_url) = &self.image_url {
            project.image_url = image_url.clone();
        }
        if let Some(github_url) = &self.github_url {
            project.github_url = Some(github_url.clone());
        }
        if let Some(live_url) = &self.live_url {
            project.live_url = Some(live_url.clone());
        }
        if let Some(featured) = self.featured {
            project.featured = featured;
        }
        if let Some(is_active) = self.is_active {
            project.is_active = is_active;
        }
        if let Some(completed_at) = self.completed_at {
            project.completed_at = Some(completed_at);
        }
        if let Some(client_name) = &self.client_name {
            project.client_name = Some(client_name.clone());
        }
        if let Some(metrics) = &self.metrics {
            project.metrics = Some(Json(metrics.clone()));
        }
        project.updated_at = Utc::now();
    }
}

/// Optional equality filters for project listings.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilters {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: i64,
    pub featured: i64,
    pub by_category: HashMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seed_projects;

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut project = seed_projects().remove(0);
        let original_description = project.description.clone();
        let before = project.updated_at;

        let patch = UpdateProjectRequest {
            title: Some("Renamed Project".to_string()),
            featured: Some(false),
            ..Default::default()
        };
        patch.apply(&mut project);

        assert_eq!(project.title, "Renamed Project");
        assert!(!project.featured);
        assert_eq!(project.description, original_description);
        assert!(project.updated_at >= before);
    }

    #[test]
    fn new_request_defaults_active_and_unfeatured() {
        let request: NewProjectRequest = serde_json::from_value(serde_json::json!({
            "title": "Inventory Dashboard",
            "description": "Real-time stock levels for a retail chain",
            "long_description": "A dashboard aggregating warehouse feeds into one live view.",
            "category": "Web Development",
            "image_url": "/projects/inventory.jpg"
        }))
        .unwrap();

        let project = request.into_project();
        assert!(project.is_active);
        assert!(!project.featured);
        assert!(project.technologies.is_empty());
        assert_eq!(project.created_at, project.updated_at);
    }
}
