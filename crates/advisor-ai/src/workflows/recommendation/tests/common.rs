use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::assessment::{
    AssessmentContext, AssessmentId, AssessmentKind, AssessmentRecord, AssessmentRepository,
    ExperienceLevel, ProfileSnapshot, UserId,
};
use crate::workflows::catalog::{
    CatalogItem, CatalogRepository, PricingModel, SetupDifficulty, TimeToValue, ToolId,
};
use crate::workflows::recommendation::{
    Recommendation, RecommendationRepository, RecommendationService, ScoringWeights,
};
use crate::workflows::store::StoreError;

pub(super) fn weights() -> ScoringWeights {
    ScoringWeights::default()
}

pub(super) fn user() -> UserId {
    UserId("user-42".to_string())
}

pub(super) fn cfo_profile() -> ProfileSnapshot {
    ProfileSnapshot {
        role: "cfo".to_string(),
        industry: "Finance".to_string(),
        company_size: "201-1000".to_string(),
        ai_experience: ExperienceLevel::Never,
        goals: vec!["Reduce operational costs".to_string()],
        time_availability: "1-2 hours per week".to_string(),
        implementation_timeline: "This week".to_string(),
    }
}

pub(super) fn cfo_context() -> AssessmentContext {
    AssessmentContext {
        kind: AssessmentKind::Cfo,
        pain_points: vec!["manual reconciliation".to_string()],
        current_tools: vec!["Excel".to_string()],
        readiness: 4,
    }
}

pub(super) fn finance_tool() -> CatalogItem {
    CatalogItem {
        id: ToolId("ledger-sense".to_string()),
        name: "Ledger Sense".to_string(),
        description: "Automated close with continuous reconciliation and cost savings insights"
            .to_string(),
        category: "finance".to_string(),
        pricing_model: PricingModel::Subscription,
        setup_difficulty: SetupDifficulty::Easy,
        time_to_value: TimeToValue::Minutes,
        target_roles: vec!["cfo".to_string()],
        target_industries: vec!["Finance".to_string()],
        target_company_sizes: vec!["201-1000".to_string()],
        features: vec![
            "reconciliation".to_string(),
            "close automation".to_string(),
            "savings tracker".to_string(),
        ],
        rating: Some(4.6),
        active: true,
    }
}

pub(super) fn generic_tool(name: &str) -> CatalogItem {
    CatalogItem {
        id: ToolId::from_name(name),
        name: name.to_string(),
        description: "General purpose workflow assistant".to_string(),
        category: "productivity".to_string(),
        pricing_model: PricingModel::Freemium,
        setup_difficulty: SetupDifficulty::Medium,
        time_to_value: TimeToValue::Days,
        target_roles: Vec::new(),
        target_industries: Vec::new(),
        target_company_sizes: Vec::new(),
        features: vec!["templates".to_string()],
        rating: None,
        active: true,
    }
}

pub(super) fn assessment_record(
    user_id: &UserId,
    profile: ProfileSnapshot,
    context: AssessmentContext,
) -> AssessmentRecord {
    AssessmentRecord {
        id: AssessmentId("assessment-000001".to_string()),
        user_id: user_id.clone(),
        kind: context.kind,
        answers: BTreeMap::new(),
        profile,
        context,
        score: None,
        submitted_at: NaiveDate::from_ymd_opt(2026, 8, 1)
            .expect("valid date")
            .and_hms_opt(9, 0, 0)
            .expect("valid time"),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCatalog {
    items: Arc<Mutex<BTreeMap<ToolId, CatalogItem>>>,
}

impl MemoryCatalog {
    pub(super) fn with_items(items: Vec<CatalogItem>) -> Self {
        let catalog = Self::default();
        {
            let mut guard = catalog.items.lock().expect("catalog mutex poisoned");
            for item in items {
                guard.insert(item.id.clone(), item);
            }
        }
        catalog
    }
}

impl CatalogRepository for MemoryCatalog {
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
pub(super) struct MemoryAssessments {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl MemoryAssessments {
    pub(super) fn with_records(records: Vec<AssessmentRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl AssessmentRepository for MemoryAssessments {
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
pub(super) struct MemoryRecommendations {
    cache: Arc<Mutex<HashMap<UserId, Vec<Recommendation>>>>,
}

impl RecommendationRepository for MemoryRecommendations {
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

/// Repository stub that always fails, for fail-open coverage.
pub(super) struct UnavailableRecommendations;

impl RecommendationRepository for UnavailableRecommendations {
    fn replace_for_user(
        &self,
        _user_id: &UserId,
        _recommendations: Vec<Recommendation>,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn current_for_user(&self, _user_id: &UserId) -> Result<Vec<Recommendation>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn build_service(
    items: Vec<CatalogItem>,
    records: Vec<AssessmentRecord>,
) -> (
    Arc<RecommendationService<MemoryCatalog, MemoryAssessments, MemoryRecommendations>>,
    MemoryRecommendations,
) {
    let catalog = Arc::new(MemoryCatalog::with_items(items));
    let assessments = Arc::new(MemoryAssessments::with_records(records));
    let recommendations = MemoryRecommendations::default();
    let service = Arc::new(RecommendationService::new(
        catalog,
        assessments,
        Arc::new(recommendations.clone()),
        weights(),
    ));
    (service, recommendations)
}
