use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectFilters, ProjectStats, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

/// Storage port for the project portfolio. Implemented by the Postgres
/// backend and the in-memory fallback; the backend is chosen once at
/// startup and never swapped afterwards.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, project: &Project) -> Result<(), AppError>;
    async fn find_all(&self, filters: &ProjectFilters) -> Result<Vec<Project>, AppError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn update(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<Project, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
    async fn find_featured(&self, limit: i64) -> Result<Vec<Project>, AppError>;
    async fn find_by_category(&self, category: &str) -> Result<Vec<Project>, AppError>;
    async fn stats(&self) -> Result<ProjectStats, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn insert(&self, project: &Project) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO projects (
                id, title, description, long_description, technologies, category,
                image_url, github_url, live_url, featured, is_active,
                completed_at, client_name, metrics, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.long_description)
        .bind(&project.technologies)
        .bind(&project.category)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.featured)
        .bind(project.is_active)
        .bind(project.completed_at)
        .bind(&project.client_name)
        .bind(&project.metrics)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self, filters: &ProjectFilters) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM projects WHERE is_active = TRUE");

        if let Some(category) = &filters.category {
            builder.push(" AND category = ").push_bind(category);
        }
        if let Some(featured) = filters.featured {
            builder.push(" AND featured = ").push_bind(featured);
        }
        builder.push(" ORDER BY created_at DESC");

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with ID {id} not found")))
    }

    async fn update(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<Project, AppError> {
        // Read-modify-write keeps merge semantics identical to the memory
        // backend. Single-writer admin traffic; no transactional guard.
        let mut project = self.find_by_id(id).await?;
        patch.apply(&mut project);

        sqlx::query(
            r#"
            UPDATE projects SET
                title = $1, description = $2, long_description = $3,
                technologies = $4, category = $5, image_url = $6,
                github_url = $7, live_url = $8, featured = $9, is_active = $10,
                completed_at = $11, client_name = $12, metrics = $13,
                updated_at = $14
            WHERE id = $15
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.long_description)
        .bind(&project.technologies)
        .bind(&project.category)
        .bind(&project.image_url)
        .bind(&project.github_url)
        .bind(&project.live_url)
        .bind(project.featured)
        .bind(project.is_active)
        .bind(project.completed_at)
        .bind(&project.client_name)
        .bind(&project.metrics)
        .bind(project.updated_at)
        .bind(project.id)
        .execute(&self.pool)
        .await?;

        Ok(project)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project with ID {id} not found")));
        }

        Ok(())
    }

    async fn find_featured(&self, limit: i64) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE featured = TRUE AND is_active = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE category = $1 AND is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn stats(&self) -> Result<ProjectStats, AppError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE is_active = TRUE")
                .fetch_one(&self.pool)
                .await?;

        let featured: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects WHERE featured = TRUE AND is_active = TRUE",
        )
        .fetch_one(&self.pool)
        .await?;

        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*) FROM projects WHERE is_active = TRUE GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await?;

        let by_category: HashMap<String, i64> = rows.into_iter().collect();

        Ok(ProjectStats {
            total,
            featured,
            by_category,
        })
    }
}
