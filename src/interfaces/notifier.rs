//! Outbound notification port for contact submissions. The contract is
//! best-effort: dispatch happens off the request path, failures are logged
//! and never fail the submission that triggered them.

use anyhow::Context;
use async_trait::async_trait;

use crate::entities::contact::Contact;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Tells the site owner a new submission arrived.
    async fn contact_received(&self, contact: &Contact) -> anyhow::Result<()>;

    /// Acknowledges receipt to the person who submitted the form.
    async fn auto_reply(&self, contact: &Contact) -> anyhow::Result<()>;
}

/// Posts notification payloads to a configured webhook endpoint (a mail
/// relay, Slack bridge, or anything else that accepts JSON).
pub struct WebhookNotifier {
    http: reqwest::Client,
    endpoint: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: String) -> Self {
        WebhookNotifier {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    async fn post(&self, payload: serde_json::Value) -> anyhow::Result<()> {
        self.http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .context("notification webhook unreachable")?
            .error_for_status()
            .context("notification webhook rejected payload")?;
        Ok(())
    }
}

#[async_trait]
impl ContactNotifier for WebhookNotifier {
    async fn contact_received(&self, contact: &Contact) -> anyhow::Result<()> {
        self.post(serde_json::json!({
            "kind": "contact_received",
            "contact_id": contact.id,
            "name": contact.name,
            "email": contact.email,
            "company": contact.company,
            "phone": contact.phone,
            "service": contact.service,
            "budget": contact.budget,
            "timeline": contact.timeline,
            "message": contact.message,
            "received_at": contact.created_at,
        }))
        .await
    }

    async fn auto_reply(&self, contact: &Contact) -> anyhow::Result<()> {
        self.post(serde_json::json!({
            "kind": "auto_reply",
            "to": contact.email,
            "name": contact.name,
            "service": contact.service,
        }))
        .await
    }
}

/// Used when no webhook endpoint is configured. Submissions still succeed;
/// dispatch is a traced no-op.
pub struct DisabledNotifier;

#[async_trait]
impl ContactNotifier for DisabledNotifier {
    async fn contact_received(&self, contact: &Contact) -> anyhow::Result<()> {
        tracing::debug!(contact_id = %contact.id, "notification dispatch disabled");
        Ok(())
    }

    async fn auto_reply(&self, contact: &Contact) -> anyhow::Result<()> {
        tracing::debug!(contact_id = %contact.id, "auto-reply dispatch disabled");
        Ok(())
    }
}
