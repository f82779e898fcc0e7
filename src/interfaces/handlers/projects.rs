use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        project::{NewProjectRequest, ProjectFilters, UpdateProjectRequest},
        response::ApiResponse,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created()
        .json(ApiResponse::ok(project).with_message("Project created successfully")))
}

#[instrument(skip(state, query))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    // `featured` arrives as a query-string token; anything but the literal
    // "true" means false.
    let filters = ProjectFilters {
        category: query.get("category").cloned().filter(|c| !c.is_empty()),
        featured: query.get("featured").map(|v| v == "true"),
    };

    let projects = state.project_handler.find_all(&filters).await?;
    let count = projects.len();

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(projects)
            .with_message("Projects retrieved successfully")
            .with_count(count),
    ))
}

#[instrument(skip(state))]
pub async fn featured_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.featured_projects().await?;
    let count = projects.len();

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(projects)
            .with_message("Featured projects retrieved successfully")
            .with_count(count),
    ))
}

#[instrument(skip(state))]
pub async fn project_stats(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let stats = state.project_handler.project_stats().await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(stats).with_message("Project statistics retrieved successfully")))
}

#[instrument(skip(state))]
pub async fn projects_by_category(
    category: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let category = category.into_inner();
    let projects = state.project_handler.projects_by_category(&category).await?;
    let count = projects.len();

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(projects)
            .with_message(format!("Projects in {category} category retrieved successfully"))
            .with_count(count),
    ))
}

#[instrument(skip(project_id, state))]
pub async fn get_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler.find_one(&project_id).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(project).with_message("Project retrieved successfully")))
}

#[instrument(skip(project_id, state, data))]
pub async fn update_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(&project_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(project).with_message("Project updated successfully")))
}

#[instrument(skip(project_id, state))]
pub async fn delete_project(
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.remove_project(&project_id).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message_only("Project deleted successfully")))
}
