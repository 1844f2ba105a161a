use crate::domain::{
    allergen::{entities::AllergenEntry, ports::AllergenService},
    allergy_profile::ports::AllergyProfileRepository,
    common::{entities::app_errors::CoreError, services::Service},
    scan::ports::{ScanHistoryRepository, TextExtractor},
};

impl<AP, SH, TE> AllergenService for Service<AP, SH, TE>
where
    AP: AllergyProfileRepository,
    SH: ScanHistoryRepository,
    TE: TextExtractor,
{
    fn list_allergens(&self) -> Vec<AllergenEntry> {
        self.taxonomy.entries().to_vec()
    }

    fn get_allergen(&self, name: &str) -> Result<AllergenEntry, CoreError> {
        self.taxonomy
            .lookup(name)
            .cloned()
            .ok_or_else(|| CoreError::UnknownAllergen(name.trim().to_string()))
    }
}
