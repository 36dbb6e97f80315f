use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::Clinic;

/// Durable keyed storage of tenant configuration. Reads hand out clones so
/// callers work on a consistent snapshot of the clinic.
#[derive(Default)]
pub struct ClinicStore {
    inner: RwLock<HashMap<Uuid, Clinic>>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a clinic record.
    pub async fn put(&self, clinic: Clinic) {
        debug!("Storing clinic {}", clinic.id);
        self.inner.write().await.insert(clinic.id, clinic);
    }

    pub async fn get(&self, clinic_id: Uuid) -> Option<Clinic> {
        self.inner.read().await.get(&clinic_id).cloned()
    }

    pub async fn remove(&self, clinic_id: Uuid) -> Option<Clinic> {
        debug!("Removing clinic {}", clinic_id);
        self.inner.write().await.remove(&clinic_id)
    }

    /// All clinics, ordered by creation time for stable listings.
    pub async fn list(&self) -> Vec<Clinic> {
        let mut clinics: Vec<Clinic> = self.inner.read().await.values().cloned().collect();
        clinics.sort_by_key(|c| c.created_at);
        clinics
    }
}
