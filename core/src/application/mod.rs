use crate::{
    domain::{
        allergen::AllergenTaxonomy,
        common::{AllerScanConfig, entities::app_errors::CoreError, services::Service},
    },
    infrastructure::{
        allergy_profile::repositories::allergy_profile_repository::PostgresAllergyProfileRepository,
        db::postgres::Postgres,
        llm::gemini_client::GeminiTextExtractor,
        scan::repositories::scan_history_repository::PostgresScanHistoryRepository,
    },
};

pub type AllerScanService =
    Service<PostgresAllergyProfileRepository, PostgresScanHistoryRepository, GeminiTextExtractor>;

pub async fn create_service(config: AllerScanConfig) -> Result<AllerScanService, CoreError> {
    let postgres = Postgres::new(&config.database).await?;

    Ok(Service::new(
        PostgresAllergyProfileRepository::new(postgres.get_db()),
        PostgresScanHistoryRepository::new(postgres.get_db()),
        GeminiTextExtractor::new(config.llm.gemini_api_key, config.llm.gemini_model),
        AllergenTaxonomy::global(),
    ))
}
