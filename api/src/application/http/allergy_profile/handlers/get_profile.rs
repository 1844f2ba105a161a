use allerscan_core::domain::allergy_profile::{AllergyProfile, AllergyProfileService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: AllergyProfile,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get allergy profile",
    description = "Returns the caller's allergy profile, or an empty one if none was saved.",
    responses(
        (status = 200, body = GetProfileResponse)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProfileResponse { data: profile }))
}
