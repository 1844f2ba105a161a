use std::sync::Arc;

use allerscan_core::application::AllerScanService;
use jsonwebtoken::DecodingKey;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AllerScanService,
    pub decoding_key: Arc<DecodingKey>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AllerScanService) -> Self {
        let decoding_key = DecodingKey::from_secret(args.auth.jwt_secret.as_bytes());

        Self {
            args,
            service,
            decoding_key: Arc::new(decoding_key),
        }
    }
}
