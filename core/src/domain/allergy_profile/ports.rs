use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    allergy_profile::{entities::AllergyProfile, value_objects::UpdateAllergyProfileInput},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
};

/// Profile store. A read must reflect the caller's latest completed write.
#[cfg_attr(test, mockall::automock)]
pub trait AllergyProfileRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<AllergyProfile>, CoreError>> + Send;

    /// Inserts or replaces the user's profile (last write wins).
    fn upsert(
        &self,
        profile: AllergyProfile,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;
}

/// Service trait for allergy profile reads and writes
#[cfg_attr(test, mockall::automock)]
pub trait AllergyProfileService: Send + Sync {
    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateAllergyProfileInput,
    ) -> impl Future<Output = Result<AllergyProfile, CoreError>> + Send;
}
