use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    entities::contact::{month_start, Contact, ContactStats},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

/// Storage port for contact-form submissions.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, contact: &Contact) -> Result<(), AppError>;
    async fn find_all(&self) -> Result<Vec<Contact>, AppError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Contact, AppError>;
    async fn update_status(&self, id: &Uuid, status: &str) -> Result<Contact, AppError>;
    async fn delete(&self, id: &Uuid) -> Result<(), AppError>;
    async fn stats(&self) -> Result<ContactStats, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn insert(&self, contact: &Contact) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (
                id, name, email, company, phone, service, budget, timeline,
                message, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(contact.id)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.company)
        .bind(&contact.phone)
        .bind(&contact.service)
        .bind(&contact.budget)
        .bind(&contact.timeline)
        .bind(&contact.message)
        .bind(&contact.status)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        let contacts =
            sqlx::query_as::<_, Contact>("SELECT * FROM contacts ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(contacts)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact with ID {id} not found")))
    }

    async fn update_status(&self, id: &Uuid, status: &str) -> Result<Contact, AppError> {
        sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts SET status = $1, updated_at = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact with ID {id} not found")))
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Contact with ID {id} not found")));
        }

        Ok(())
    }

    async fn stats(&self) -> Result<ContactStats, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;

        let this_month: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE created_at >= $1")
                .bind(month_start(Utc::now()))
                .fetch_one(&self.pool)
                .await?;

        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM contacts GROUP BY status")
                .fetch_all(&self.pool)
                .await?;

        let status_counts: HashMap<String, i64> = rows.into_iter().collect();

        Ok(ContactStats {
            total,
            this_month,
            status_counts,
        })
    }
}
