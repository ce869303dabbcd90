use chrono::NaiveDateTime;
use serde::Serialize;

use crate::workflows::assessment::AssessmentKind;

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentProgressEntry {
    pub kind: AssessmentKind,
    pub kind_label: &'static str,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopPickView {
    pub tool_name: String,
    pub score: u8,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationStats {
    pub count: usize,
    pub average_score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_pick: Option<TopPickView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShareEntry {
    pub category: String,
    pub count: usize,
    pub share_pct: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionLevel {
    Emerging,
    Developing,
    Ready,
}

impl AdoptionLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Ready => "Ready",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdoptionInsights {
    pub adoption_score: u8,
    pub adoption_level: AdoptionLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub user_id: String,
    pub completion_pct: f32,
    pub assessments: Vec<AssessmentProgressEntry>,
    pub recommendations: RecommendationStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_mix: Vec<CategoryShareEntry>,
    pub insights: AdoptionInsights,
    pub executive_summary: String,
}
