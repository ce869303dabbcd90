use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog tools.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToolId(pub String);

impl ToolId {
    /// Derive a stable identifier from a display name (used by the importer).
    pub fn from_name(name: &str) -> Self {
        let mut slug = String::with_capacity(name.len());
        let mut last_dash = true;
        for ch in name.trim().chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        Self(slug)
    }
}

/// Effort class required to put a tool into production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupDifficulty {
    Easy,
    Medium,
    Hard,
}

impl SetupDifficulty {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" | "moderate" => Some(Self::Medium),
            "hard" | "complex" => Some(Self::Hard),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// How quickly a tool delivers its first useful result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeToValue {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl TimeToValue {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "minutes" => Some(Self::Minutes),
            "hours" => Some(Self::Hours),
            "days" => Some(Self::Days),
            "weeks" | "months" => Some(Self::Weeks),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    Free,
    Freemium,
    Subscription,
    OneTime,
    Custom,
}

impl PricingModel {
    /// Lenient parse: unknown pricing descriptions fall back to `Custom`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "free" => Self::Free,
            "freemium" => Self::Freemium,
            "subscription" | "saas" | "monthly" => Self::Subscription,
            "one_time" | "one-time" | "perpetual" => Self::OneTime,
            _ => Self::Custom,
        }
    }
}

/// A recommendable product entry with the metadata used for matching.
///
/// Target sets are open vocabularies; an empty set (or an "all" entry) means
/// the tool does not restrict on that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ToolId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub pricing_model: PricingModel,
    pub setup_difficulty: SetupDifficulty,
    pub time_to_value: TimeToValue,
    #[serde(default)]
    pub target_roles: Vec<String>,
    #[serde(default)]
    pub target_industries: Vec<String>,
    #[serde(default)]
    pub target_company_sizes: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
