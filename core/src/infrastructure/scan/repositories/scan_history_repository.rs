use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        scan::{
            entities::ScanResult, ports::ScanHistoryRepository,
            value_objects::GetScanHistoryFilter,
        },
    },
    entity::scan_records::{ActiveModel, Column, Entity},
    infrastructure::db::columns::encode_column,
};

#[derive(Debug, Clone)]
pub struct PostgresScanHistoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresScanHistoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ScanHistoryRepository for PostgresScanHistoryRepository {
    async fn append(&self, scan: ScanResult) -> Result<ScanResult, CoreError> {
        let active_model = ActiveModel {
            id: Set(scan.id),
            user_id: Set(scan.user_id),
            product_name: Set(scan.product_name.clone()),
            ingredients: Set(encode_column("ingredients", &scan.ingredients)?),
            allergens_detected: Set(encode_column(
                "allergens_detected",
                &scan.allergens_detected,
            )?),
            per_allergen_risk: Set(encode_column("per_allergen_risk", &scan.per_allergen_risk)?),
            evidence: Set(encode_column("evidence", &scan.evidence)?),
            severity: Set(scan.severity.as_str().to_string()),
            safe: Set(scan.safe),
            source: Set(scan.source.as_str().to_string()),
            notes: Set(scan.notes.clone()),
            timestamp: Set(scan.timestamp.fixed_offset()),
        };

        let stored = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to append scan record: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        ScanResult::try_from(stored)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        filter: GetScanHistoryFilter,
    ) -> Result<Vec<ScanResult>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .offset(filter.offset as u64)
            .limit(filter.limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list scan history: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        models.into_iter().map(ScanResult::try_from).collect()
    }
}
