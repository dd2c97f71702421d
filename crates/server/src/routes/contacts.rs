use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::{ApiResponse, Contact, ContactInput};
use service::contacts::SharedContactStore;
use tracing::info;

use crate::errors::ApiError;

/// Unwrap a JSON body, mapping rejections (missing fields, bad JSON) to a
/// 400 carrying the standard envelope.
fn require_body(
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<ContactInput, ApiError> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(_) => Err(ApiError::bad_request("Invalid contact data")),
    }
}

/// GET /api/contacts
pub async fn list_contacts(
    State(store): State<SharedContactStore>,
) -> Result<Json<ApiResponse<Vec<Contact>>>, ApiError> {
    let contacts = store
        .list()
        .await
        .map_err(|e| ApiError::storage(e, "An error occurred while retrieving contacts"))?;
    Ok(Json(ApiResponse::ok("Contacts retrieved successfully", contacts)))
}

/// GET /api/contacts/:id
pub async fn get_contact(
    State(store): State<SharedContactStore>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let contact = store
        .get(id)
        .await
        .map_err(|e| ApiError::storage(e, "An error occurred while retrieving the contact"))?;
    match contact {
        Some(contact) => Ok(Json(ApiResponse::ok("Contact retrieved successfully", contact))),
        None => Err(ApiError::not_found("Contact not found")),
    }
}

/// POST /api/contacts
pub async fn create_contact(
    State(store): State<SharedContactStore>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Contact>>), ApiError> {
    let input = require_body(payload)?;
    let contact = store
        .create(input)
        .await
        .map_err(|e| ApiError::storage(e, "An error occurred while creating the contact"))?;
    info!(id = contact.id, "contact created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok("Contact created successfully", contact)),
    ))
}

/// PUT /api/contacts/:id
pub async fn update_contact(
    State(store): State<SharedContactStore>,
    Path(id): Path<u64>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<Json<ApiResponse<Contact>>, ApiError> {
    let input = require_body(payload)?;
    let updated = store
        .update(id, input)
        .await
        .map_err(|e| ApiError::storage(e, "An error occurred while updating the contact"))?;
    match updated {
        Some(contact) => {
            info!(id = contact.id, "contact updated");
            Ok(Json(ApiResponse::ok("Contact updated successfully", contact)))
        }
        None => Err(ApiError::not_found("Contact not found")),
    }
}

/// DELETE /api/contacts/:id
pub async fn delete_contact(
    State(store): State<SharedContactStore>,
    Path(id): Path<u64>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    let deleted = store
        .delete(id)
        .await
        .map_err(|e| ApiError::storage(e, "An error occurred while deleting the contact"))?;
    if deleted {
        info!(id, "contact deleted");
        Ok(Json(ApiResponse::ok("Contact deleted successfully", true)))
    } else {
        Err(ApiError::not_found("Contact not found"))
    }
}
