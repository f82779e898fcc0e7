use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::project::{
        NewProjectRequest, Project, ProjectFilters, ProjectStats, UpdateProjectRequest,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    use_cases::parse_id,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
    featured_limit: usize,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>, featured_limit: usize) -> Self {
        ProjectHandler {
            project_repo,
            featured_limit,
        }
    }

    /// Validates and stores a new portfolio entry.
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let project = request.into_project();
        self.project_repo.insert(&project).await?;

        tracing::info!(project_id = %project.id, title = %project.title, "project created");
        Ok(project)
    }

    /// Active projects, newest first, optionally narrowed by category and
    /// featured flag.
    pub async fn find_all(&self, filters: &ProjectFilters) -> Result<Vec<Project>, AppError> {
        self.project_repo.find_all(filters).await
    }

    pub async fn find_one(&self, id: &str) -> Result<Project, AppError> {
        let id = parse_id(id)?;
        self.project_repo.find_by_id(&id).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        patch.validate()?;

        let id = parse_id(id)?;
        self.project_repo.update(&id, patch).await
    }

    pub async fn remove_project(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.project_repo.delete(&id).await
    }

    /// Featured showcase, capped at the configured limit.
    pub async fn featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo
            .find_featured(self.featured_limit as i64)
            .await
    }

    pub async fn projects_by_category(&self, category: &str) -> Result<Vec<Project>, AppError> {
        self.project_repo.find_by_category(category).await
    }

    pub async fn project_stats(&self) -> Result<ProjectStats, AppError> {
        self.project_repo.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryProjectRepo;

    fn handler() -> ProjectHandler<MemoryProjectRepo> {
        ProjectHandler::new(Arc::new(MemoryProjectRepo::seeded()), 6)
    }

    fn valid_request() -> NewProjectRequest {
        serde_json::from_value(serde_json::json!({
            "title": "Logistics Tracker",
            "description": "Fleet tracking portal for a courier company",
            "long_description": "Live map of vehicle positions with delivery ETAs and alerts.",
            "category": "Web Development",
            "image_url": "/projects/logistics.jpg",
            "featured": true
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_find_one_round_trips() {
        let handler = handler();
        let created = handler.create_project(valid_request()).await.unwrap();

        let fetched = handler.find_one(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched.title, "Logistics Tracker");
    }

    #[tokio::test]
    async fn create_rejects_short_title() {
        let handler = handler();
        let mut request = valid_request();
        request.title = "x".to_string();

        let err = handler.create_project(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn malformed_id_is_a_validation_error() {
        let handler = handler();
        let err = handler.find_one("42").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn featured_respects_the_cap() {
        let handler = ProjectHandler::new(Arc::new(MemoryProjectRepo::seeded()), 1);
        let featured = handler.featured_projects().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert!(featured[0].featured);
    }
}
