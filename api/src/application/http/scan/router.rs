use allerscan_core::domain::scan::MAX_IMAGE_SIZE;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_scan_history::{__path_get_scan_history, get_scan_history},
    scan_image::{__path_scan_image, scan_image},
    scan_manual::{__path_scan_manual, scan_manual},
};
use crate::application::http::server::app_state::AppState;

/// Room for boundaries and the text fields around the image part.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(scan_manual, scan_image))]
pub struct ScanApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_scan_history))]
pub struct HistoryApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/scan/manual", state.args.server.root_path),
            post(scan_manual),
        )
        .route(
            &format!("{}/scan/image", state.args.server.root_path),
            post(scan_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_scan_history),
        )
}
