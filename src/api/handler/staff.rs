use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::state::AppState,
    domain::{
        query,
        staff::{ReplaceOutcome, Staff, StaffForm},
    },
    error::ServiceError,
    responses::ApiResponse,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Search dimension: "Id", "Fullname" or "Gender".
    #[serde(rename = "searchBy")]
    pub search_by: Option<String>,
    /// Search value; when absent no filtering is applied.
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/Staffs",
    tag = "Staffs",
    operation_id = "list_staff",
    params(ListQuery),
    responses(
        (status = 200, description = "List staff, optionally filtered", body = ApiResponse<Vec<Staff>>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Staff>>>, ServiceError> {
    let records = state.staff_store.find_all().await?;
    let records = query::filter(records, query.search_by.as_deref(), query.search.as_deref());
    Ok(Json(ApiResponse::ok(records)))
}

#[utoipa::path(
    get,
    path = "/Staffs/Details/{id}",
    tag = "Staffs",
    operation_id = "staff_details",
    params(
        ("id" = String, Path, description = "Staff id")
    ),
    responses(
        (status = 200, description = "Staff found", body = ApiResponse<Staff>),
        (status = 404, description = "Staff not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Staff>>, ServiceError> {
    let output = state.staff_store.find_by_id(&id).await?;

    match output {
        Some(s) => Ok(Json(ApiResponse::ok(s))),
        None => Err(ServiceError::NotFound("Staff not found".to_string())),
    }
}

#[utoipa::path(
    get,
    path = "/Staffs/Create",
    tag = "Staffs",
    operation_id = "staff_create_form",
    responses(
        (status = 200, description = "Blank staff form", body = ApiResponse<StaffForm>)
    )
)]
#[tracing::instrument]
pub async fn create_form() -> Json<ApiResponse<StaffForm>> {
    Json(ApiResponse::ok(StaffForm::default()))
}

#[utoipa::path(
    post,
    path = "/Staffs/Create",
    tag = "Staffs",
    operation_id = "staff_create",
    request_body(content = StaffForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Staff created, redirect to list"),
        (status = 409, description = "Staff id already exists"),
        (status = 422, description = "Validation failed, submitted values echoed back")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StaffForm>,
) -> Result<Redirect, ServiceError> {
    let staff = form.validate()?;
    state.staff_store.insert(&staff).await?;
    Ok(Redirect::to("/Staffs"))
}

#[utoipa::path(
    get,
    path = "/Staffs/Edit/{id}",
    tag = "Staffs",
    operation_id = "staff_edit_form",
    params(
        ("id" = String, Path, description = "Staff id")
    ),
    responses(
        (status = 200, description = "Staff to edit", body = ApiResponse<Staff>),
        (status = 404, description = "Staff not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Staff>>, ServiceError> {
    let output = state.staff_store.find_by_id(&id).await?;

    match output {
        Some(s) => Ok(Json(ApiResponse::ok(s))),
        None => Err(ServiceError::NotFound("Staff not found".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/Staffs/Edit/{id}",
    tag = "Staffs",
    operation_id = "staff_edit",
    params(
        ("id" = String, Path, description = "Staff id")
    ),
    request_body(content = StaffForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Staff updated, redirect to list"),
        (status = 404, description = "Staff not found or id mismatch"),
        (status = 409, description = "Concurrent modification"),
        (status = 422, description = "Validation failed, submitted values echoed back")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<StaffForm>,
) -> Result<Redirect, ServiceError> {
    // The body must target the record named in the URL; a mismatch would let
    // a form retarget a different record.
    if id != form.id {
        return Err(ServiceError::NotFound("Staff not found".to_string()));
    }

    let staff = form.validate()?;

    match state.staff_store.replace(&staff).await? {
        ReplaceOutcome::Written => Ok(Redirect::to("/Staffs")),
        ReplaceOutcome::ConflictRecordGone => {
            Err(ServiceError::NotFound("Staff not found".to_string()))
        }
        ReplaceOutcome::ConflictStillExists => Err(ServiceError::Conflict(format!(
            "Staff {id} was modified by another request"
        ))),
    }
}

#[utoipa::path(
    get,
    path = "/Staffs/Delete/{id}",
    tag = "Staffs",
    operation_id = "staff_delete_form",
    params(
        ("id" = String, Path, description = "Staff id")
    ),
    responses(
        (status = 200, description = "Staff to confirm deletion of", body = ApiResponse<Staff>),
        (status = 404, description = "Staff not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Staff>>, ServiceError> {
    let output = state.staff_store.find_by_id(&id).await?;

    match output {
        Some(s) => Ok(Json(ApiResponse::ok(s))),
        None => Err(ServiceError::NotFound("Staff not found".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/Staffs/Delete/{id}",
    tag = "Staffs",
    operation_id = "staff_delete",
    params(
        ("id" = String, Path, description = "Staff id")
    ),
    responses(
        (status = 303, description = "Staff removed if present, redirect to list")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_confirmed(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, ServiceError> {
    state.staff_store.remove(&id).await?;
    Ok(Redirect::to("/Staffs"))
}
