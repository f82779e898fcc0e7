
use studio_backend::{
    client::{ApiClient, ContactFormData},
    entities::project::ProjectFilters,
};
use test_utils::TestApp;

fn sample_form() -> ContactFormData {
    ContactFormData {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        company: None,
        phone: None,
        service: "Consulting".into(),
        budget: "Under $5,000".into(),
        timeline: "1-2 months".into(),
        message: "Looking for help auditing our storefront.".into(),
    }
}

#[tokio::test]
async fn wrapper_fetches_projects_from_a_live_backend() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let response = client.get_projects(&ProjectFilters::default()).await;
    assert!(response.success);
    assert_eq!(response.data.unwrap().len(), 3);

    let featured = client.get_featured_projects().await;
    assert!(featured.success);
    assert!(featured.data.unwrap().iter().all(|p| p.featured));
}

#[tokio::test]
async fn wrapper_submits_contact_forms() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let response = client.submit_contact_form(&sample_form()).await;
    assert!(response.success);
    assert_eq!(response.data.unwrap().email, "jane@example.com");
}

#[tokio::test]
async fn wrapper_surfaces_http_errors_without_panicking() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    // Malformed id -> 400 envelope, still a structured response.
    let response = client.get_project("not-a-uuid").await;
    assert!(!response.success);
    assert!(response.message.is_some());
    assert!(response.data.is_none());
}

#[tokio::test]
async fn dead_backend_degrades_to_a_failure_envelope() {
    // Nothing listens on port 1.
    let client = ApiClient::new("http://127.0.0.1:1");

    let response = client.get_projects(&ProjectFilters::default()).await;
    assert!(!response.success);
    assert!(response.message.unwrap().contains("unreachable"));

    let health = client.health_check().await;
    assert_eq!(health.status, "unreachable");
}

#[tokio::test]
async fn health_check_reports_a_live_backend() {
    let app = TestApp::spawn().await;
    let client = ApiClient::new(&app.address);

    let health = client.health_check().await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.backend, app.address);
}
