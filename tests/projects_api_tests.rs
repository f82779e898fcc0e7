
use studio_backend::entities::{
    project::{Project, ProjectStats},
    response::ApiResponse,
};
use test_utils::{valid_project_body, TestApp};

#[tokio::test]
async fn list_projects_serves_seed_data_newest_first() {
    let app = TestApp::spawn().await;

    let response = app.client.get(app.url("/projects")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let envelope: ApiResponse<Vec<Project>> = response.json().await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.count, Some(3));

    let projects = envelope.data.unwrap();
    assert!(projects
        .windows(2)
        .all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(projects[0].title, "Intelligent Customer Support Chatbot");
}

#[tokio::test]
async fn category_filter_narrows_the_listing() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/projects?category=Automation"))
        .send()
        .await
        .unwrap();
    let envelope: ApiResponse<Vec<Project>> = response.json().await.unwrap();

    let projects = envelope.data.unwrap();
    assert_eq!(projects.len(), 1);
    assert!(projects.iter().all(|p| p.category == "Automation"));
}

#[tokio::test]
async fn featured_query_param_is_parsed_as_boolean() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/projects?featured=true"))
        .send()
        .await
        .unwrap();
    let envelope: ApiResponse<Vec<Project>> = response.json().await.unwrap();
    assert_eq!(envelope.count, Some(2));

    let response = app
        .client
        .get(app.url("/projects?featured=false"))
        .send()
        .await
        .unwrap();
    let envelope: ApiResponse<Vec<Project>> = response.json().await.unwrap();
    assert_eq!(envelope.count, Some(1));
}

#[tokio::test]
async fn featured_endpoint_caps_and_filters() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/projects/featured"))
        .send()
        .await
        .unwrap();
    let envelope: ApiResponse<Vec<Project>> = response.json().await.unwrap();

    let projects = envelope.data.unwrap();
    assert!(projects.len() <= 6);
    assert!(projects.iter().all(|p| p.featured));
}

#[tokio::test]
async fn stats_reflect_active_records() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/projects/stats"))
        .send()
        .await
        .unwrap();
    let envelope: ApiResponse<ProjectStats> = response.json().await.unwrap();

    let stats = envelope.data.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.featured, 2);
    assert_eq!(stats.by_category.get("Web Development"), Some(&1));
}

#[tokio::test]
async fn create_then_fetch_round_trips() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/projects"))
        .json(&valid_project_body())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let envelope: ApiResponse<Project> = response.json().await.unwrap();
    let created = envelope.data.unwrap();
    assert_eq!(created.title, "Fleet Telemetry Portal");
    assert!(created.is_active);

    let response = app
        .client
        .get(app.url(&format!("/projects/{}", created.id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn create_rejects_invalid_payload() {
    let app = TestApp::spawn().await;

    let mut body = valid_project_body();
    body["title"] = serde_json::json!("x");

    let response = app
        .client
        .post(app.url("/projects"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let envelope: serde_json::Value = response.json().await.unwrap();
    assert_eq!(envelope["success"], false);
    assert!(envelope["details"].is_array());
}

#[tokio::test]
async fn malformed_json_gets_the_envelope_too() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/projects"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let envelope: serde_json::Value = response.json().await.unwrap();
    assert_eq!(envelope["success"], false);
}

#[tokio::test]
async fn soft_delete_hides_project_from_listings() {
    let app = TestApp::spawn().await;

    let envelope: ApiResponse<Vec<Project>> = app
        .client
        .get(app.url("/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = envelope.data.unwrap()[0].id;

    let response = app
        .client
        .patch(app.url(&format!("/projects/{id}")))
        .json(&serde_json::json!({"is_active": false}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let envelope: ApiResponse<Vec<Project>> = app
        .client
        .get(app.url("/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(envelope.count, Some(2));
}

#[tokio::test]
async fn deleting_unknown_project_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .delete(app.url(&format!("/projects/{}", uuid::Uuid::new_v4())))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let envelope: serde_json::Value = response.json().await.unwrap();
    assert_eq!(envelope["success"], false);
}

#[tokio::test]
async fn hard_delete_removes_the_record() {
    let app = TestApp::spawn().await;

    let envelope: ApiResponse<Vec<Project>> = app
        .client
        .get(app.url("/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = envelope.data.unwrap()[0].id;

    let response = app
        .client
        .delete(app.url(&format!("/projects/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .client
        .get(app.url(&format!("/projects/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
