use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
        common::entities::app_errors::CoreError,
    },
    entity::allergy_profiles::{ActiveModel, Column, Entity},
    infrastructure::db::columns::encode_column,
};

#[derive(Debug, Clone)]
pub struct PostgresAllergyProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresAllergyProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AllergyProfileRepository for PostgresAllergyProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<AllergyProfile>, CoreError> {
        let model = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get allergy profile: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        model.map(AllergyProfile::try_from).transpose()
    }

    async fn upsert(&self, profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(profile.user_id),
            declared_allergens: Set(encode_column(
                "declared_allergens",
                &profile.declared_allergens,
            )?),
            custom_allergens: Set(encode_column("custom_allergens", &profile.custom_allergens)?),
            severity_overrides: Set(encode_column(
                "severity_overrides",
                &profile.severity_overrides,
            )?),
            created_at: Set(profile.created_at.fixed_offset()),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        // created_at is left alone on conflict so it keeps the first write.
        let stored = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::DeclaredAllergens,
                        Column::CustomAllergens,
                        Column::SeverityOverrides,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to upsert allergy profile: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        AllergyProfile::try_from(stored)
    }
}
