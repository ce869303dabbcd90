use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use advisor_ai::workflows::assessment::{
    AssessmentKind, AssessmentRecord, AssessmentRepository, UserId,
};
use advisor_ai::workflows::catalog::{CatalogItem, CatalogRepository, ToolId};
use advisor_ai::workflows::recommendation::{Recommendation, RecommendationRepository};
use advisor_ai::workflows::store::StoreError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalogRepository {
    items: Arc<Mutex<BTreeMap<ToolId, CatalogItem>>>,
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn insert(&self, item: CatalogItem) -> Result<CatalogItem, StoreError> {
        let mut guard = self.items.lock().expect("catalog mutex poisoned");
        if guard.contains_key(&item.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    fn update(&self, item: CatalogItem) -> Result<(), StoreError> {
        let mut guard = self.items.lock().expect("catalog mutex poisoned");
        if guard.contains_key(&item.id) {
            guard.insert(item.id.clone(), item);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }

    fn remove(&self, id: &ToolId) -> Result<(), StoreError> {
        let mut guard = self.items.lock().expect("catalog mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    fn fetch(&self, id: &ToolId) -> Result<Option<CatalogItem>, StoreError> {
        let guard = self.items.lock().expect("catalog mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_active(&self) -> Result<Vec<CatalogItem>, StoreError> {
        let guard = self.items.lock().expect("catalog mutex poisoned");
        Ok(guard.values().filter(|item| item.active).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn append(&self, record: AssessmentRecord) -> Result<AssessmentRecord, StoreError> {
        let mut guard = self.records.lock().expect("assessment mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn latest_of_kind(
        &self,
        user_id: &UserId,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentRecord>, StoreError> {
        let guard = self.records.lock().expect("assessment mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == user_id && record.kind == kind)
            .max_by_key(|record| record.submitted_at)
            .cloned())
    }

    fn latest_for_user(&self, user_id: &UserId) -> Result<Option<AssessmentRecord>, StoreError> {
        let guard = self.records.lock().expect("assessment mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == user_id)
            .max_by_key(|record| record.submitted_at)
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationRepository {
    cache: Arc<Mutex<HashMap<UserId, Vec<Recommendation>>>>,
}

impl RecommendationRepository for InMemoryRecommendationRepository {
    fn replace_for_user(
        &self,
        user_id: &UserId,
        recommendations: Vec<Recommendation>,
    ) -> Result<(), StoreError> {
        let mut guard = self.cache.lock().expect("recommendation mutex poisoned");
        guard.remove(user_id);
        guard.insert(user_id.clone(), recommendations);
        Ok(())
    }

    fn current_for_user(&self, user_id: &UserId) -> Result<Vec<Recommendation>, StoreError> {
        let guard = self.cache.lock().expect("recommendation mutex poisoned");
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }
}
