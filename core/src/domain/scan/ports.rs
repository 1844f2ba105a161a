use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    scan::{
        entities::{ScanOutcome, ScanResult},
        value_objects::{GetScanHistoryFilter, GetScanHistoryInput, ImageScanInput, ManualScanInput},
    },
};

/// History store. Appends of one user must keep their order.
#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    fn append(
        &self,
        scan: ScanResult,
    ) -> impl Future<Output = Result<ScanResult, CoreError>> + Send;

    /// Most recent first.
    fn list_by_user(
        &self,
        user_id: Uuid,
        filter: GetScanHistoryFilter,
    ) -> impl Future<Output = Result<Vec<ScanResult>, CoreError>> + Send;
}

/// Reads the text printed on a product label. Fails with
/// [`CoreError::Extraction`] when the image is unreadable or holds no text.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for scanning products and reading scan history
#[cfg_attr(test, mockall::automock)]
pub trait ScanService: Send + Sync {
    fn evaluate_manual(
        &self,
        identity: Identity,
        input: ManualScanInput,
    ) -> impl Future<Output = Result<ScanOutcome, CoreError>> + Send;

    fn evaluate_from_image(
        &self,
        identity: Identity,
        input: ImageScanInput,
    ) -> impl Future<Output = Result<ScanOutcome, CoreError>> + Send;

    fn get_scan_history(
        &self,
        identity: Identity,
        input: GetScanHistoryInput,
    ) -> impl Future<Output = Result<Vec<ScanResult>, CoreError>> + Send;
}
