use allerscan_core::domain::allergy_profile::{
    AllergyProfile, AllergyProfileService, UpdateAllergyProfileInput,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        allergy_profile::validators::UpdateAllergyProfileValidator,
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
pub struct UpdateProfileResponse {
    pub data: AllergyProfile,
}

#[utoipa::path(
    put,
    path = "",
    tag = "profile",
    summary = "Replace allergy profile",
    description = "Replaces the caller's declared allergens, custom allergens and severity levels.",
    responses(
        (status = 200, body = UpdateProfileResponse),
        (status = 400, description = "Unknown allergen or invalid severity")
    ),
    request_body = UpdateAllergyProfileValidator,
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateAllergyProfileValidator>,
) -> Result<Response<UpdateProfileResponse>, ApiError> {
    let input = UpdateAllergyProfileInput::try_from(payload).map_err(ApiError::from)?;

    let profile = state
        .service
        .update_profile(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateProfileResponse { data: profile }))
}
