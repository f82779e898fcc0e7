use std::collections::HashMap;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_STATUS: &str = "new";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub service: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inbound contact-form submission. Duplicate emails are allowed by design;
/// the same prospect may write in more than once.
#[derive(Debug, Deserialize, Validate)]
pub struct NewContactRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 200))]
    pub company: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub service: String,

    #[validate(length(min = 1, max = 100))]
    pub budget: String,

    #[validate(length(min = 1, max = 100))]
    pub timeline: String,

    #[validate(length(min = 10, max = 5000))]
    pub message: String,
}

impl NewContactRequest {
    pub fn into_contact(self) -> Contact {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            company: self.company,
            phone: self.phone,
            service: self.service,
            budget: self.budget,
            timeline: self.timeline,
            message: self.message,
            status: DEFAULT_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContactStatusRequest {
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactStats {
    pub total: i64,
    pub this_month: i64,
    pub status_counts: HashMap<String, i64>,
}

/// First instant of the month containing `now`, used for the `this_month`
/// stats bucket.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_start_truncates_to_first_day() {
        let now = Utc.with_ymd_and_hms(2024, 9, 17, 13, 45, 12).unwrap();
        let start = month_start(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn new_submission_gets_default_status() {
        let request = NewContactRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: None,
            phone: None,
            service: "Full Stack Development".into(),
            budget: "$10,000 - $25,000".into(),
            timeline: "3-6 months".into(),
            message: "We need a modern storefront with search.".into(),
        };
        let contact = request.into_contact();
        assert_eq!(contact.status, DEFAULT_STATUS);
        assert_eq!(contact.created_at, contact.updated_at);
    }

    #[test]
    fn rejects_invalid_email() {
        let request = NewContactRequest {
            name: "Jane Doe".into(),
            email: "not-an-email".into(),
            company: None,
            phone: None,
            service: "Consulting".into(),
            budget: "Under $5,000".into(),
            timeline: "ASAP".into(),
            message: "Short project, quick turnaround needed.".into(),
        };
        assert!(request.validate().is_err());
    }
}
