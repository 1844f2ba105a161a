use allerscan_core::domain::scan::{GetScanHistoryInput, ScanResult, ScanService};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::validators::GetScanHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetScanHistoryResponse {
    pub data: Vec<ScanResult>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "scan",
    summary = "Get scan history",
    description = "Lists the caller's past scans, most recent first. `limit` defaults to and is capped at 100.",
    responses(
        (status = 200, body = GetScanHistoryResponse)
    ),
    params(GetScanHistoryParams),
    security(("bearer" = [])),
)]
pub async fn get_scan_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetScanHistoryParams>,
) -> Result<Response<GetScanHistoryResponse>, ApiError> {
    let scans = state
        .service
        .get_scan_history(
            identity,
            GetScanHistoryInput {
                offset: params.offset,
                limit: params.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetScanHistoryResponse { data: scans }))
}
