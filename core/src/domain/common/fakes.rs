//! In-memory port implementations for service tests.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use uuid::Uuid;

use crate::domain::{
    allergen::AllergenTaxonomy,
    allergy_profile::{entities::AllergyProfile, ports::AllergyProfileRepository},
    common::{entities::app_errors::CoreError, services::Service},
    scan::{
        entities::ScanResult,
        ports::{ScanHistoryRepository, TextExtractor},
        value_objects::GetScanHistoryFilter,
    },
};

pub type FakeService =
    Service<InMemoryAllergyProfileRepository, InMemoryScanHistoryRepository, StaticTextExtractor>;

pub fn fake_service(extractor: StaticTextExtractor) -> FakeService {
    Service::new(
        InMemoryAllergyProfileRepository::default(),
        InMemoryScanHistoryRepository::default(),
        extractor,
        AllergenTaxonomy::global(),
    )
}

#[derive(Default)]
pub struct InMemoryAllergyProfileRepository {
    profiles: Mutex<HashMap<Uuid, AllergyProfile>>,
    pub fail_reads: AtomicBool,
}

impl AllergyProfileRepository for InMemoryAllergyProfileRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<AllergyProfile>, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("profile store offline".to_string()));
        }

        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert(&self, mut profile: AllergyProfile) -> Result<AllergyProfile, CoreError> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(existing) = profiles.get(&profile.user_id) {
            profile.created_at = existing.created_at;
        }
        profiles.insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

#[derive(Default)]
pub struct InMemoryScanHistoryRepository {
    scans: Mutex<Vec<ScanResult>>,
    pub fail_writes: AtomicBool,
}

impl InMemoryScanHistoryRepository {
    pub fn len(&self) -> usize {
        self.scans.lock().unwrap().len()
    }
}

impl ScanHistoryRepository for InMemoryScanHistoryRepository {
    async fn append(&self, scan: ScanResult) -> Result<ScanResult, CoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("history store offline".to_string()));
        }

        self.scans.lock().unwrap().push(scan.clone());
        Ok(scan)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        filter: GetScanHistoryFilter,
    ) -> Result<Vec<ScanResult>, CoreError> {
        let scans = self.scans.lock().unwrap();
        let mut owned: Vec<ScanResult> = scans
            .iter()
            .filter(|scan| scan.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

        Ok(owned
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }
}

pub struct StaticTextExtractor {
    response: Result<String, CoreError>,
    calls: AtomicUsize,
}

impl StaticTextExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(CoreError::Extraction(reason.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextExtractor for StaticTextExtractor {
    async fn extract(&self, _image_data: Vec<u8>) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
