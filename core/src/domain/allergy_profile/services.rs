use tracing::{info, instrument};

use crate::domain::{
    allergy_profile::{
        entities::{AllergyProfile, AllergyProfileConfig},
        ports::{AllergyProfileRepository, AllergyProfileService},
        value_objects::UpdateAllergyProfileInput,
    },
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    scan::ports::{ScanHistoryRepository, TextExtractor},
};

impl<AP, SH, TE> AllergyProfileService for Service<AP, SH, TE>
where
    AP: AllergyProfileRepository,
    SH: ScanHistoryRepository,
    TE: TextExtractor,
{
    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_profile(&self, identity: Identity) -> Result<AllergyProfile, CoreError> {
        let user_id = identity.id();

        let profile = self
            .allergy_profile_repository
            .get_by_user_id(user_id)
            .await?
            .unwrap_or_else(|| AllergyProfile::empty(user_id));

        Ok(profile)
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateAllergyProfileInput,
    ) -> Result<AllergyProfile, CoreError> {
        let profile = AllergyProfile::new(
            AllergyProfileConfig {
                user_id: identity.id(),
                declared_allergens: input.declared_allergens,
                custom_allergens: input.custom_allergens,
                severity_overrides: input.severity_overrides,
            },
            self.taxonomy,
        )?;

        let profile = self.allergy_profile_repository.upsert(profile).await?;

        info!(
            declared = profile.declared_allergens.len(),
            custom = profile.custom_allergens.len(),
            "allergy profile updated"
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::fakes::{StaticTextExtractor, fake_service},
        scan::entities::Severity,
    };

    fn identity() -> Identity {
        Identity::User(Uuid::new_v4())
    }

    #[tokio::test]
    async fn missing_profile_reads_as_empty() {
        let service = fake_service(StaticTextExtractor::returning(""));
        let identity = identity();

        let profile = service.get_profile(identity.clone()).await.unwrap();

        assert_eq!(profile.user_id, identity.id());
        assert!(profile.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_and_is_read_back() {
        let service = fake_service(StaticTextExtractor::returning(""));
        let identity = identity();

        service
            .update_profile(
                identity.clone(),
                UpdateAllergyProfileInput {
                    declared_allergens: vec!["Peanut".into(), "dairy".into()],
                    custom_allergens: vec!["kiwi".into()],
                    severity_overrides: BTreeMap::from([("peanuts".into(), Severity::Severe)]),
                },
            )
            .await
            .unwrap();

        let replaced = service
            .update_profile(
                identity.clone(),
                UpdateAllergyProfileInput {
                    declared_allergens: vec!["eggs".into()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = service.get_profile(identity).await.unwrap();
        assert_eq!(stored, replaced);
        assert_eq!(
            stored.declared_allergens.iter().collect::<Vec<_>>(),
            vec!["eggs"]
        );
        assert!(stored.custom_allergens.is_empty());
        assert!(stored.severity_overrides.is_empty());
    }

    #[tokio::test]
    async fn invalid_update_leaves_stored_profile_untouched() {
        let service = fake_service(StaticTextExtractor::returning(""));
        let identity = identity();

        let before = service
            .update_profile(
                identity.clone(),
                UpdateAllergyProfileInput {
                    declared_allergens: vec!["milk".into()],
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let err = service
            .update_profile(
                identity.clone(),
                UpdateAllergyProfileInput {
                    declared_allergens: vec!["unobtainium".into()],
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownAllergen("unobtainium".to_string()));

        let err = service
            .update_profile(
                identity.clone(),
                UpdateAllergyProfileInput {
                    declared_allergens: vec!["milk".into()],
                    severity_overrides: BTreeMap::from([("milk".into(), Severity::Safe)]),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidSeverity(_)));

        assert_eq!(service.get_profile(identity).await.unwrap(), before);
    }
}
