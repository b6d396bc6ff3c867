use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    api::state::AppState,
    error::ServiceError,
    export::{excel, pdf},
};

const EXCEL_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// Document format: "excel" or "pdf".
    pub format: Option<String>,
}

#[utoipa::path(
    get,
    path = "/Staffs/Export",
    tag = "Staffs",
    operation_id = "export_staff",
    params(ExportQuery),
    responses(
        (status = 200, description = "Staff table rendered as a downloadable document"),
        (status = 400, description = "Invalid export format")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn export(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, ServiceError> {
    match query.format.as_deref() {
        Some("excel") => {
            let staff = state.staff_store.find_all().await?;
            let bytes = excel::render(&staff)?;
            Ok(attachment(bytes, EXCEL_CONTENT_TYPE, "staff_data.xlsx"))
        }
        Some("pdf") => {
            let staff = state.staff_store.find_all().await?;
            let bytes = pdf::render(&staff)?;
            Ok(attachment(bytes, PDF_CONTENT_TYPE, "staff_data.pdf"))
        }
        _ => Err(ServiceError::BadRequest("Invalid export format".to_string())),
    }
}

fn attachment(bytes: Vec<u8>, content_type: &'static str, filename: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
