use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for end users. Every store in this crate is keyed
/// by user; the hosted backend enforces row-level isolation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier wrapper for persisted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// The three guided wizards offered by the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Personal,
    Business,
    Cfo,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 3] = [Self::Personal, Self::Business, Self::Cfo];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "business" => Some(Self::Business),
            "cfo" => Some(Self::Cfo),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
            Self::Cfo => "cfo",
        }
    }
}

/// Self-reported familiarity with AI tooling, ordered from none to expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Never,
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "never" | "none" => Some(Self::Never),
            "basic" | "beginner" => Some(Self::Basic),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

/// Structured snapshot of a user's situation, derived once per assessment.
///
/// Snapshots are immutable; a newer assessment of the same kind supersedes
/// the previous one rather than merging into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub role: String,
    pub industry: String,
    pub company_size: String,
    pub ai_experience: ExperienceLevel,
    pub goals: Vec<String>,
    pub time_availability: String,
    pub implementation_timeline: String,
}

/// Assessment-scoped signals consumed by the scoring adjustment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentContext {
    pub kind: AssessmentKind,
    pub pain_points: Vec<String>,
    pub current_tools: Vec<String>,
    /// Self-assessed readiness on a 1..=5 scale.
    pub readiness: u8,
}

/// Raw wizard output: the answers keyed by field, tagged with kind and user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub user_id: UserId,
    pub kind: AssessmentKind,
    pub answers: BTreeMap<String, serde_json::Value>,
}

/// Persisted assessment row: the opaque payload plus the derived snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub kind: AssessmentKind,
    pub answers: BTreeMap<String, serde_json::Value>,
    pub profile: ProfileSnapshot,
    pub context: AssessmentContext,
    #[serde(default)]
    pub score: Option<u8>,
    pub submitted_at: NaiveDateTime,
}
