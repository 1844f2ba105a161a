use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    scan::{
        engine,
        entities::{ScanInput, ScanOutcome, ScanResult, ScanSource},
        ports::{ScanHistoryRepository, ScanService, TextExtractor},
        value_objects::{GetScanHistoryInput, ImageScanInput, ManualScanInput},
    },
};

impl<AP, SH, TE> Service<AP, SH, TE>
where
    AP: AllergyProfileRepository,
    SH: ScanHistoryRepository,
    TE: TextExtractor,
{
    /// A user who never saved a profile scans against an empty one.
    async fn load_profile(&self, user_id: Uuid) -> Result<AllergyProfile, CoreError> {
        match self
            .allergy_profile_repository
            .get_by_user_id(user_id)
            .await?
        {
            Some(profile) => Ok(profile),
            None => {
                warn!(%user_id, "no allergy profile stored, scanning against an empty one");
                Ok(AllergyProfile::empty(user_id))
            }
        }
    }

    /// The verdict is returned even when the history store rejects it.
    async fn record(&self, scan: ScanResult) -> ScanOutcome {
        match self.scan_history_repository.append(scan.clone()).await {
            Ok(stored) => {
                info!(
                    scan_id = %stored.id,
                    severity = %stored.severity,
                    detected = stored.allergens_detected.len(),
                    "scan recorded"
                );
                ScanOutcome {
                    scan: stored,
                    persisted: true,
                }
            }
            Err(e) => {
                warn!(scan_id = %scan.id, "failed to record scan: {}", e);
                ScanOutcome {
                    scan,
                    persisted: false,
                }
            }
        }
    }
}

impl<AP, SH, TE> ScanService for Service<AP, SH, TE>
where
    AP: AllergyProfileRepository,
    SH: ScanHistoryRepository,
    TE: TextExtractor,
{
    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn evaluate_manual(
        &self,
        identity: Identity,
        input: ManualScanInput,
    ) -> Result<ScanOutcome, CoreError> {
        let user_id = identity.id();
        let scan_input = ScanInput::new(
            &input.product_name,
            &input.ingredient_text,
            ScanSource::Manual,
        )?;

        let profile = self.load_profile(user_id).await?;
        let scan = engine::evaluate(&profile, &scan_input, None, self.taxonomy);

        Ok(self.record(scan).await)
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), image_size = input.image_data.len()))]
    async fn evaluate_from_image(
        &self,
        identity: Identity,
        input: ImageScanInput,
    ) -> Result<ScanOutcome, CoreError> {
        engine::validate_image(&input.image_data)?;

        let profile = self.load_profile(identity.id()).await?;
        let scan = engine::evaluate_from_image(
            &profile,
            input.product_name.as_deref(),
            input.image_data,
            &self.text_extractor,
            self.taxonomy,
        )
        .await
        .inspect_err(|e| warn!("label extraction failed: {}", e))?;

        Ok(self.record(scan).await)
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn get_scan_history(
        &self,
        identity: Identity,
        input: GetScanHistoryInput,
    ) -> Result<Vec<ScanResult>, CoreError> {
        self.scan_history_repository
            .list_by_user(identity.id(), input.into())
            .await
    }
}
