use crate::domain::{
    allergen::AllergenTaxonomy,
    allergy_profile::ports::AllergyProfileRepository,
    scan::ports::{ScanHistoryRepository, TextExtractor},
};

/// Implements every service trait over the injected ports.
#[derive(Clone)]
pub struct Service<AP, SH, TE>
where
    AP: AllergyProfileRepository,
    SH: ScanHistoryRepository,
    TE: TextExtractor,
{
    pub(crate) allergy_profile_repository: AP,
    pub(crate) scan_history_repository: SH,
    pub(crate) text_extractor: TE,
    pub(crate) taxonomy: &'static AllergenTaxonomy,
}

impl<AP, SH, TE> Service<AP, SH, TE>
where
    AP: AllergyProfileRepository,
    SH: ScanHistoryRepository,
    TE: TextExtractor,
{
    pub fn new(
        allergy_profile_repository: AP,
        scan_history_repository: SH,
        text_extractor: TE,
        taxonomy: &'static AllergenTaxonomy,
    ) -> Self {
        Self {
            allergy_profile_repository,
            scan_history_repository,
            text_extractor,
            taxonomy,
        }
    }

    pub fn taxonomy(&self) -> &'static AllergenTaxonomy {
        self.taxonomy
    }
}
