use allerscan_core::domain::scan::{ManualScanInput, ScanOutcome, ScanService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::ManualScanValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScanResponse {
    pub data: ScanOutcome,
}

#[utoipa::path(
    post,
    path = "/manual",
    tag = "scan",
    summary = "Scan a typed ingredient list",
    description = "Evaluates an ingredient list against the caller's allergy profile and records the result.",
    responses(
        (status = 201, body = ScanResponse),
        (status = 400, description = "Blank product name or ingredient list")
    ),
    request_body = ManualScanValidator,
    security(("bearer" = [])),
)]
pub async fn scan_manual(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<ManualScanValidator>,
) -> Result<Response<ScanResponse>, ApiError> {
    let outcome = state
        .service
        .evaluate_manual(
            identity,
            ManualScanInput {
                product_name: payload.product_name,
                ingredient_text: payload.ingredients,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ScanResponse { data: outcome }))
}
