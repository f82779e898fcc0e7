use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        contact::{NewContactRequest, UpdateContactStatusRequest},
        response::ApiResponse,
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn create_contact(
    state: web::Data<AppState>,
    data: web::Json<NewContactRequest>,
) -> Result<impl Responder, AppError> {
    let contact = state.contact_handler.create_contact(data.into_inner()).await?;

    Ok(HttpResponse::Created()
        .json(ApiResponse::ok(contact).with_message("Contact form submitted successfully")))
}

#[instrument(skip(state))]
pub async fn list_contacts(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let contacts = state.contact_handler.list_contacts().await?;
    let count = contacts.len();

    Ok(HttpResponse::Ok().json(
        ApiResponse::ok(contacts)
            .with_message("Contacts retrieved successfully")
            .with_count(count),
    ))
}

#[instrument(skip(state))]
pub async fn contact_stats(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let stats = state.contact_handler.contact_stats().await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(stats).with_message("Contact statistics retrieved successfully")))
}

#[instrument(skip(contact_id, state))]
pub async fn get_contact(
    contact_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let contact = state.contact_handler.find_one(&contact_id).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(contact).with_message("Contact retrieved successfully")))
}

#[instrument(skip(contact_id, state, data))]
pub async fn update_contact_status(
    contact_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateContactStatusRequest>,
) -> Result<impl Responder, AppError> {
    let contact = state
        .contact_handler
        .update_status(&contact_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(contact).with_message("Status updated successfully")))
}

#[instrument(skip(contact_id, state))]
pub async fn delete_contact(
    contact_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.contact_handler.remove_contact(&contact_id).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::<()>::message_only("Contact deleted successfully")))
}
