//! JSONB column codec shared by the repositories.

use serde::{Serialize, de::DeserializeOwned};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub fn decode_column<T: DeserializeOwned>(
    column: &str,
    value: &serde_json::Value,
) -> Result<T, CoreError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        error!("Failed to decode column {}: {}", column, e);
        CoreError::Persistence(format!("corrupt {} column", column))
    })
}

pub fn encode_column<T: Serialize>(
    column: &str,
    value: &T,
) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(value).map_err(|e| {
        error!("Failed to encode column {}: {}", column, e);
        CoreError::Persistence(format!("could not encode {} column", column))
    })
}
