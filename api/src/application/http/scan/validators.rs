use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ManualScanValidator {
    #[validate(length(
        min = 1,
        max = 200,
        message = "product_name must be between 1 and 200 characters"
    ))]
    pub product_name: String,

    /// Ingredient list as printed on the label.
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients must be between 1 and 5000 characters"
    ))]
    #[schema(example = "Wheat flour, Peanut butter, Sugar, Milk solids")]
    pub ingredients: String,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetScanHistoryParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}

/// Multipart body of an image scan, for the OpenAPI document only.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageScanForm {
    #[schema(format = Binary)]
    pub image: String,
    pub product_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_product_name_fails_validation() {
        let payload = ManualScanValidator {
            product_name: String::new(),
            ingredients: "Milk".to_string(),
        };
        assert!(payload.validate().is_err());

        let payload = ManualScanValidator {
            product_name: "Cookies".to_string(),
            ingredients: "Milk".to_string(),
        };
        assert!(payload.validate().is_ok());
    }
}
