use allerscan_core::domain::authentication::value_objects::Identity;
use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::http::server::app_state::AppState;

/// Claims this service reads from a bearer token. Tokens are issued elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtClaim {
    /// User id.
    pub sub: String,
    pub exp: usize,
}

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
    #[error("Invalid signature")]
    InvalidSignature,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: i64,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let error_response = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, axum::Json(error_response)).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Verifies an HS256 token and turns its `sub` claim into an [`Identity`].
pub fn identity_from_token(token: &str, state: &AppState) -> Result<Identity, AuthError> {
    let data = decode::<JwtClaim>(token, &state.decoding_key, &Validation::new(Algorithm::HS256))
        .map_err(|e| {
            debug!("rejected bearer token: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::InvalidToken,
            }
        })?;

    let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;

    Ok(Identity::User(user_id))
}

/// Extractor for routes that need a caller.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let token = extract_token_from_bearer(parts).await?;
        let app_state = AppState::from_ref(state);
        let identity = identity_from_token(&token, &app_state)?;

        parts.extensions.insert(identity.clone());

        Ok(RequiredIdentity(identity))
    }
}
