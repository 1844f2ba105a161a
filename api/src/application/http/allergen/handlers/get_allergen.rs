use allerscan_core::domain::allergen::{AllergenEntry, AllergenService};
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergenResponse {
    pub data: AllergenEntry,
}

#[utoipa::path(
    get,
    path = "/{name}",
    tag = "allergen",
    summary = "Resolve an allergen",
    description = "Resolves a canonical allergen name or one of its synonyms.",
    responses(
        (status = 200, body = GetAllergenResponse),
        (status = 400, description = "Unknown allergen")
    ),
    params(
        ("name" = String, Path, description = "Canonical name or synonym"),
    ),
)]
pub async fn get_allergen(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetAllergenResponse>, ApiError> {
    let entry = state.service.get_allergen(&name).map_err(ApiError::from)?;

    Ok(Response::OK(GetAllergenResponse { data: entry }))
}
