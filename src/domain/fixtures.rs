//! Seed dataset served by the in-memory backend when the database is
//! unreachable. Kept in one place so every fallback path shows the same
//! portfolio.

use chrono::{DateTime, TimeZone, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::entities::{
    contact::Contact,
    project::{Project, ProjectMetrics},
};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: Uuid::new_v4(),
            title: "AI-Powered E-Commerce Platform".to_string(),
            description: "A modern e-commerce solution with AI-driven product recommendations"
                .to_string(),
            long_description: "A comprehensive e-commerce platform featuring AI-powered product \
                recommendations, advanced analytics, and real-time inventory management."
                .to_string(),
            technologies: vec![
                "Next.js".to_string(),
                "NestJS".to_string(),
                "MongoDB".to_string(),
                "TensorFlow".to_string(),
                "Redis".to_string(),
            ],
            category: "Web Development".to_string(),
            image_url: "/projects/ecommerce-ai.jpg".to_string(),
            github_url: Some("https://github.com/nexflaretech/ai-ecommerce".to_string()),
            live_url: Some("https://demo-ecommerce.nexflaretech.com".to_string()),
            featured: true,
            is_active: true,
            completed_at: Some(date(2024, 9, 15)),
            client_name: Some("TechCorp Solutions".to_string()),
            metrics: Some(Json(ProjectMetrics {
                performance_improvement: Some("40% faster load times".to_string()),
                user_growth: Some("150% increase in conversions".to_string()),
                efficiency: Some("60% reduction in support tickets".to_string()),
            })),
            created_at: date(2024, 8, 1),
            updated_at: date(2024, 9, 15),
        },
        Project {
            id: Uuid::new_v4(),
            title: "Business Process Automation Suite".to_string(),
            description: "Complete automation solution for business workflows and processes"
                .to_string(),
            long_description: "An enterprise-grade automation suite that streamlines business \
                processes, automates repetitive tasks, and provides comprehensive analytics \
                and reporting."
                .to_string(),
            technologies: vec![
                "Python".to_string(),
                "React".to_string(),
                "FastAPI".to_string(),
                "PostgreSQL".to_string(),
                "Celery".to_string(),
            ],
            category: "Automation".to_string(),
            image_url: "/projects/automation-suite.jpg".to_string(),
            github_url: None,
            live_url: Some("https://demo-automation.nexflaretech.com".to_string()),
            featured: true,
            is_active: true,
            completed_at: Some(date(2024, 8, 30)),
            client_name: Some("Manufacturing Inc".to_string()),
            metrics: Some(Json(ProjectMetrics {
                performance_improvement: Some("70% process efficiency".to_string()),
                user_growth: Some("200% task completion rate".to_string()),
                efficiency: Some("50% time savings".to_string()),
            })),
            created_at: date(2024, 7, 15),
            updated_at: date(2024, 8, 30),
        },
        Project {
            id: Uuid::new_v4(),
            title: "Intelligent Customer Support Chatbot".to_string(),
            description: "AI-powered chatbot for 24/7 customer support with natural language \
                processing"
                .to_string(),
            long_description: "An advanced chatbot solution using natural language processing \
                to provide intelligent customer support, handle inquiries, and escalate \
                complex issues to human agents."
                .to_string(),
            technologies: vec![
                "Python".to_string(),
                "OpenAI GPT".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "WebSocket".to_string(),
            ],
            category: "AI/ML".to_string(),
            image_url: "/projects/chatbot-ai.jpg".to_string(),
            github_url: None,
            live_url: Some("https://demo-chatbot.nexflaretech.com".to_string()),
            featured: false,
            is_active: true,
            completed_at: Some(date(2024, 10, 1)),
            client_name: Some("ServiceHub Ltd".to_string()),
            metrics: Some(Json(ProjectMetrics {
                performance_improvement: Some("85% query resolution".to_string()),
                user_growth: Some("90% customer satisfaction".to_string()),
                efficiency: Some("24/7 availability".to_string()),
            })),
            created_at: date(2024, 9, 1),
            updated_at: date(2024, 10, 1),
        },
    ]
}

/// Contact submissions start empty in degraded mode; anything posted while
/// the database is down lives only for the process lifetime.
pub fn seed_contacts() -> Vec<Contact> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_three_categories_with_two_featured() {
        let projects = seed_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects.iter().filter(|p| p.featured).count(), 2);
        assert!(projects.iter().all(|p| p.is_active));

        let categories: Vec<&str> = projects.iter().map(|p| p.category.as_str()).collect();
        assert!(categories.contains(&"Web Development"));
        assert!(categories.contains(&"Automation"));
        assert!(categories.contains(&"AI/ML"));
    }

    #[test]
    fn seed_contacts_start_empty() {
        assert!(seed_contacts().is_empty());
    }
}
