use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    Manual,
    Image,
}

impl ScanSource {
    pub fn as_str(&self) -> &str {
        match self {
            ScanSource::Manual => "manual",
            ScanSource::Image => "image",
        }
    }
}

impl From<&str> for ScanSource {
    fn from(s: &str) -> Self {
        match s {
            "image" => ScanSource::Image,
            "manual" => ScanSource::Manual,
            _ => ScanSource::Manual,
        }
    }
}

/// Validated request to evaluate one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInput {
    product_name: String,
    ingredient_text: String,
    source: ScanSource,
}

impl ScanInput {
    pub fn new(
        product_name: &str,
        ingredient_text: &str,
        source: ScanSource,
    ) -> Result<Self, CoreError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(CoreError::Validation(
                "product_name must not be empty".to_string(),
            ));
        }

        if ingredient_text.trim().is_empty() {
            return Err(CoreError::Validation(
                "ingredient_text must not be empty".to_string(),
            ));
        }

        Ok(Self {
            product_name: product_name.to_string(),
            ingredient_text: ingredient_text.to_string(),
            source,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn ingredient_text(&self) -> &str {
        &self.ingredient_text
    }

    pub fn source(&self) -> ScanSource {
        self.source
    }
}
