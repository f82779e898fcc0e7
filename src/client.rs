//! HTTP client wrapper for front-end consumers. Every method resolves to an
//! [`ApiResponse`] and never returns an error: HTTP failures, undecodable
//! bodies, and dead backends all normalize to `{success: false, message}` so
//! callers can fall back to bundled static content without exception
//! handling at each call site.

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::entities::{
    contact::{Contact, ContactStats},
    project::{Project, ProjectFilters, ProjectStats},
    response::ApiResponse,
};

/// Contact form payload as the front-end assembles it.
#[derive(Debug, Clone, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
    pub timestamp: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResponse<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return ApiResponse::failure(format!("Backend unreachable: {e}")),
        };

        let status = response.status();
        match response.json::<ApiResponse<T>>().await {
            Ok(envelope) => envelope,
            // A non-envelope body from an error status is still a failure
            // worth naming by its status code.
            Err(e) if status.is_success() => {
                ApiResponse::failure(format!("Invalid response body: {e}"))
            }
            Err(_) => ApiResponse::failure(format!("Request failed with status {status}")),
        }
    }

    /// Reachability probe; reports rather than fails when the backend is down.
    pub async fn health_check(&self) -> HealthStatus {
        let status = match self.http.get(self.url("/")).send().await {
            Ok(response) if response.status().is_success() => "healthy".to_string(),
            Ok(response) => format!("error-{}", response.status().as_u16()),
            Err(_) => "unreachable".to_string(),
        };

        HealthStatus {
            status,
            backend: self.base_url.clone(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub async fn submit_contact_form(&self, form: &ContactFormData) -> ApiResponse<Contact> {
        self.execute(self.http.post(self.url("/contact")).json(form))
            .await
    }

    pub async fn get_contacts(&self) -> ApiResponse<Vec<Contact>> {
        self.execute(self.http.get(self.url("/contact"))).await
    }

    pub async fn get_contact_stats(&self) -> ApiResponse<ContactStats> {
        self.execute(self.http.get(self.url("/contact/stats"))).await
    }

    pub async fn get_projects(&self, filters: &ProjectFilters) -> ApiResponse<Vec<Project>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = &filters.category {
            query.push(("category", category.clone()));
        }
        if let Some(featured) = filters.featured {
            query.push(("featured", featured.to_string()));
        }

        self.execute(self.http.get(self.url("/projects")).query(&query))
            .await
    }

    pub async fn get_featured_projects(&self) -> ApiResponse<Vec<Project>> {
        self.execute(self.http.get(self.url("/projects/featured")))
            .await
    }

    pub async fn get_projects_by_category(&self, category: &str) -> ApiResponse<Vec<Project>> {
        self.execute(self.http.get(self.url(&format!("/projects/category/{category}"))))
            .await
    }

    pub async fn get_project(&self, id: &str) -> ApiResponse<Project> {
        self.execute(self.http.get(self.url(&format!("/projects/{id}"))))
            .await
    }

    pub async fn get_project_stats(&self) -> ApiResponse<ProjectStats> {
        self.execute(self.http.get(self.url("/projects/stats")))
            .await
    }

    pub async fn create_project(&self, data: &impl Serialize) -> ApiResponse<Project> {
        self.execute(self.http.post(self.url("/projects")).json(data))
            .await
    }

    pub async fn update_project(&self, id: &str, data: &impl Serialize) -> ApiResponse<Project> {
        self.execute(self.http.patch(self.url(&format!("/projects/{id}"))).json(data))
            .await
    }

    pub async fn delete_project(&self, id: &str) -> ApiResponse<()> {
        self.execute(self.http.delete(self.url(&format!("/projects/{id}"))))
            .await
    }
}
