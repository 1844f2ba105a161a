use allerscan_core::domain::allergen::{AllergenEntry, AllergenService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListAllergensResponse {
    pub data: Vec<AllergenEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergen",
    summary = "List allergens",
    description = "Lists every canonical allergen with its synonyms, in display order.",
    responses(
        (status = 200, body = ListAllergensResponse)
    ),
)]
pub async fn list_allergens(
    State(state): State<AppState>,
) -> Result<Response<ListAllergensResponse>, ApiError> {
    Ok(Response::OK(ListAllergensResponse {
        data: state.service.list_allergens(),
    }))
}
