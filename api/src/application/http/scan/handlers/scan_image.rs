use allerscan_core::domain::scan::{ImageScanInput, MAX_IMAGE_SIZE, ScanService};
use axum::extract::{Multipart, State};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        scan::{handlers::scan_manual::ScanResponse, validators::ImageScanForm},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "/image",
    tag = "scan",
    summary = "Scan a label photo",
    description = "Reads the ingredient list from a label photo, evaluates it against the caller's allergy profile and records the result.",
    request_body(content = ImageScanForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = ScanResponse),
        (status = 400, description = "Missing or oversized image"),
        (status = 422, description = "No ingredient list could be read from the image")
    ),
    security(("bearer" = [])),
)]
pub async fn scan_image(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<ScanResponse>, ApiError> {
    let mut product_name: Option<String> = None;
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "product_name" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read product_name: {}", e))
                })?;
                product_name = Some(value);
            }
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let outcome = state
        .service
        .evaluate_from_image(
            identity,
            ImageScanInput {
                product_name,
                image_data,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ScanResponse { data: outcome }))
}
