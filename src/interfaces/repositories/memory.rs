//! In-memory fallback backend. Serves the shared seed fixture when the
//! database cannot be reached at startup; writes land in the list and are
//! lost on restart. Plain last-write-wins mutation under an RwLock, no
//! cross-request atomicity.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::{
    entities::{
        contact::{month_start, Contact, ContactStats},
        project::{Project, ProjectFilters, ProjectStats, UpdateProjectRequest},
    },
    errors::AppError,
    fixtures::{seed_contacts, seed_projects},
    repositories::{contact::ContactRepository, project::ProjectRepository},
};

pub struct MemoryProjectRepo {
    projects: RwLock<Vec<Project>>,
}

impl MemoryProjectRepo {
    pub fn seeded() -> Self {
        MemoryProjectRepo {
            projects: RwLock::new(seed_projects()),
        }
    }

    pub fn empty() -> Self {
        MemoryProjectRepo {
            projects: RwLock::new(Vec::new()),
        }
    }
}

fn newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepo {
    async fn insert(&self, project: &Project) -> Result<(), AppError> {
        self.projects.write().push(project.clone());
        Ok(())
    }

    async fn find_all(&self, filters: &ProjectFilters) -> Result<Vec<Project>, AppError> {
        let mut matched: Vec<Project> = self
            .projects
            .read()
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| {
                filters
                    .category
                    .as_deref()
                    .is_none_or(|c| p.category == c)
            })
            .filter(|p| filters.featured.is_none_or(|f| p.featured == f))
            .cloned()
            .collect();

        newest_first(&mut matched);
        Ok(matched)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        self.projects
            .read()
            .iter()
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Project with ID {id} not found")))
    }

    async fn update(&self, id: &Uuid, patch: &UpdateProjectRequest) -> Result<Project, AppError> {
        let mut projects = self.projects.write();
        let project = projects
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| AppError::NotFound(format!("Project with ID {id} not found")))?;

        patch.apply(project);
        Ok(project.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let mut projects = self.projects.write();
        let before = projects.len();
        projects.retain(|p| p.id != *id);

        if projects.len() == before {
            return Err(AppError::NotFound(format!("Project with ID {id} not found")));
        }
        Ok(())
    }

    async fn find_featured(&self, limit: i64) -> Result<Vec<Project>, AppError> {
        let mut featured: Vec<Project> = self
            .projects
            .read()
            .iter()
            .filter(|p| p.featured && p.is_active)
            .cloned()
            .collect();

        newest_first(&mut featured);
        featured.truncate(limit.max(0) as usize);
        Ok(featured)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Project>, AppError> {
        let mut matched: Vec<Project> = self
            .projects
            .read()
            .iter()
            .filter(|p| p.category == category && p.is_active)
            .cloned()
            .collect();

        newest_first(&mut matched);
        Ok(matched)
    }

    async fn stats(&self) -> Result<ProjectStats, AppError> {
        let projects = self.projects.read();
        let active: Vec<&Project> = projects.iter().filter(|p| p.is_active).collect();

        let mut by_category: HashMap<String, i64> = HashMap::new();
        for project in &active {
            *by_category.entry(project.category.clone()).or_insert(0) += 1;
        }

        Ok(ProjectStats {
            total: active.len() as i64,
            featured: active.iter().filter(|p| p.featured).count() as i64,
            by_category,
        })
    }
}

pub struct MemoryContactRepo {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryContactRepo {
    pub fn new() -> Self {
        MemoryContactRepo {
            contacts: RwLock::new(seed_contacts()),
        }
    }
}

impl Default for MemoryContactRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepo {
    async fn insert(&self, contact: &Contact) -> Result<(), AppError> {
        self.contacts.write().push(contact.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Contact>, AppError> {
        let mut contacts: Vec<Contact> = self.contacts.read().clone();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(contacts)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Contact, AppError> {
        self.contacts
            .read()
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Contact with ID {id} not found")))
    }

    async fn update_status(&self, id: &Uuid, status: &str) -> Result<Contact, AppError> {
        let mut contacts = self.contacts.write();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| AppError::NotFound(format!("Contact with ID {id} not found")))?;

        contact.status = status.to_string();
        contact.updated_at = Utc::now();
        Ok(contact.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let mut contacts = self.contacts.write();
        let before = contacts.len();
        contacts.retain(|c| c.id != *id);

        if contacts.len() == before {
            return Err(AppError::NotFound(format!("Contact with ID {id} not found")));
        }
        Ok(())
    }

    async fn stats(&self) -> Result<ContactStats, AppError> {
        let contacts = self.contacts.read();
        let since = month_start(Utc::now());

        let mut status_counts: HashMap<String, i64> = HashMap::new();
        for contact in contacts.iter() {
            *status_counts.entry(contact.status.clone()).or_insert(0) += 1;
        }

        Ok(ContactStats {
            total: contacts.len() as i64,
            this_month: contacts.iter().filter(|c| c.created_at >= since).count() as i64,
            status_counts,
        })
    }
}
