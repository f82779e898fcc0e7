use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::contact::{Contact, ContactStats, NewContactRequest, UpdateContactStatusRequest},
    errors::AppError,
    notifier::ContactNotifier,
    repositories::contact::ContactRepository,
    use_cases::parse_id,
};

pub struct ContactHandler<R, N>
where
    R: ContactRepository + ?Sized,
    N: ContactNotifier + ?Sized + 'static,
{
    pub contact_repo: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> ContactHandler<R, N>
where
    R: ContactRepository + ?Sized,
    N: ContactNotifier + ?Sized + 'static,
{
    pub fn new(contact_repo: Arc<R>, notifier: Arc<N>) -> Self {
        ContactHandler {
            contact_repo,
            notifier,
        }
    }

    /// Stores a form submission, then dispatches the admin notification and
    /// auto-reply in the background. The record is already durable by the
    /// time dispatch starts, so notification failures never surface here.
    pub async fn create_contact(&self, request: NewContactRequest) -> Result<Contact, AppError> {
        request.validate()?;

        let contact = request.into_contact();
        self.contact_repo.insert(&contact).await?;

        tracing::info!(contact_id = %contact.id, email = %contact.email, "contact submission saved");

        let notifier = self.notifier.clone();
        let saved = contact.clone();
        tokio::spawn(async move {
            dispatch_notifications(notifier, &saved).await;
        });

        Ok(contact)
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, AppError> {
        self.contact_repo.find_all().await
    }

    pub async fn find_one(&self, id: &str) -> Result<Contact, AppError> {
        let id = parse_id(id)?;
        self.contact_repo.find_by_id(&id).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        request: &UpdateContactStatusRequest,
    ) -> Result<Contact, AppError> {
        request.validate()?;

        let id = parse_id(id)?;
        self.contact_repo.update_status(&id, &request.status).await
    }

    pub async fn remove_contact(&self, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.contact_repo.delete(&id).await
    }

    pub async fn contact_stats(&self) -> Result<ContactStats, AppError> {
        self.contact_repo.stats().await
    }
}

/// Best-effort, logged-on-failure. Both payloads are attempted even if
/// the first one fails.
pub async fn dispatch_notifications<N>(notifier: Arc<N>, contact: &Contact)
where
    N: ContactNotifier + ?Sized,
{
    if let Err(e) = notifier.contact_received(contact).await {
        tracing::warn!(contact_id = %contact.id, "admin notification failed: {e}");
    }
    if let Err(e) = notifier.auto_reply(contact).await {
        tracing::warn!(contact_id = %contact.id, "auto-reply failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{notifier::MockContactNotifier, repositories::memory::MemoryContactRepo};

    fn valid_request() -> NewContactRequest {
        serde_json::from_value(serde_json::json!({
            "name": "John Doe",
            "email": "john.doe@example.com",
            "service": "Full Stack Development",
            "budget": "$10,000 - $25,000",
            "timeline": "3-6 months",
            "message": "We need a modern e-commerce platform with AI features."
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_survives_notifier_failure() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_contact_received()
            .returning(|_| Err(anyhow::anyhow!("webhook down")));
        notifier
            .expect_auto_reply()
            .returning(|_| Err(anyhow::anyhow!("webhook down")));

        let handler = ContactHandler::new(
            Arc::new(MemoryContactRepo::new()),
            Arc::new(notifier),
        );

        let contact = handler.create_contact(valid_request()).await.unwrap();
        assert_eq!(contact.name, "John Doe");
        assert_eq!(contact.status, "new");
    }

    #[tokio::test]
    async fn dispatch_sends_both_payloads() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_contact_received()
            .times(1)
            .returning(|_| Ok(()));
        notifier.expect_auto_reply().times(1).returning(|_| Ok(()));

        let contact = valid_request().into_contact();
        dispatch_notifications(Arc::new(notifier), &contact).await;
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_store() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_contact_received().times(0);
        notifier.expect_auto_reply().times(0);

        let repo = Arc::new(MemoryContactRepo::new());
        let handler = ContactHandler::new(repo.clone(), Arc::new(notifier));

        let mut request = valid_request();
        request.email = "nope".to_string();
        let err = handler.create_contact(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(handler.list_contacts().await.unwrap().is_empty());
    }
}
