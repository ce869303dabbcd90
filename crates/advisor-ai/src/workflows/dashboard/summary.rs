use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::warn;

use super::insights::generate_insights;
use super::views::{
    AssessmentProgressEntry, CategoryShareEntry, DashboardOverview, RecommendationStats,
    TopPickView,
};
use crate::workflows::assessment::{AssessmentKind, AssessmentRecord, AssessmentRepository, UserId};
use crate::workflows::narrative::{NarrativeGenerator, NarrativeError};
use crate::workflows::recommendation::{Recommendation, RecommendationRepository};
use crate::workflows::store::StoreError;

/// Read-side service assembling the per-user dashboard from the assessment
/// log and the recommendation cache. Derived statistics only; nothing here
/// writes.
pub struct DashboardService<A, R, N> {
    assessments: Arc<A>,
    recommendations: Arc<R>,
    narrator: Arc<N>,
}

impl<A, R, N> DashboardService<A, R, N>
where
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    pub fn new(assessments: Arc<A>, recommendations: Arc<R>, narrator: Arc<N>) -> Self {
        Self {
            assessments,
            recommendations,
            narrator,
        }
    }

    pub fn overview(&self, user_id: &UserId) -> Result<DashboardOverview, StoreError> {
        let mut progress = Vec::with_capacity(AssessmentKind::ALL.len());
        let mut latest: Option<AssessmentRecord> = None;

        for kind in AssessmentKind::ALL {
            let record = self.assessments.latest_of_kind(user_id, kind)?;
            progress.push(AssessmentProgressEntry {
                kind,
                kind_label: kind.label(),
                completed: record.is_some(),
                submitted_at: record.as_ref().map(|record| record.submitted_at),
            });

            if let Some(record) = record {
                let newer = latest
                    .as_ref()
                    .map(|current| record.submitted_at > current.submitted_at)
                    .unwrap_or(true);
                if newer {
                    latest = Some(record);
                }
            }
        }

        let completed = progress.iter().filter(|entry| entry.completed).count();
        let completion_pct = (completed as f32 / AssessmentKind::ALL.len() as f32) * 100.0;

        let recommendations = self.recommendations.current_for_user(user_id)?;
        let stats = recommendation_stats(&recommendations);
        let category_mix = category_mix(&recommendations);
        let insights = generate_insights(&progress, latest.as_ref(), &stats);

        let prompt = summary_prompt(completion_pct, &stats, &insights.observations);
        let executive_summary = match self.narrator.generate(&prompt) {
            Ok(narrative) => narrative,
            Err(NarrativeError::Unavailable(reason)) => {
                // Narrative generation is best-effort; fall back to the facts.
                warn!(user_id = %user_id.0, %reason, "narrative backend unavailable, using fallback summary");
                fallback_summary(completion_pct, &stats)
            }
        };

        Ok(DashboardOverview {
            user_id: user_id.0.clone(),
            completion_pct,
            assessments: progress,
            recommendations: stats,
            category_mix,
            insights,
            executive_summary,
        })
    }
}

fn recommendation_stats(recommendations: &[Recommendation]) -> RecommendationStats {
    let count = recommendations.len();
    let average_score = if count > 0 {
        recommendations
            .iter()
            .map(|entry| entry.score as f32)
            .sum::<f32>()
            / count as f32
    } else {
        0.0
    };

    // The cache is stored ranked, so the first row is the top pick.
    let top_pick = recommendations.first().map(|entry| TopPickView {
        tool_name: entry.tool_name.clone(),
        score: entry.score,
        reason: entry.reason.clone(),
    });

    RecommendationStats {
        count,
        average_score,
        top_pick,
    }
}

fn category_mix(recommendations: &[Recommendation]) -> Vec<CategoryShareEntry> {
    if recommendations.is_empty() {
        return Vec::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in recommendations {
        *counts.entry(entry.category.as_str()).or_default() += 1;
    }

    let total = recommendations.len() as f32;
    counts
        .into_iter()
        .map(|(category, count)| CategoryShareEntry {
            category: category.to_string(),
            count,
            share_pct: (count as f32 / total) * 100.0,
        })
        .collect()
}

fn summary_prompt(
    completion_pct: f32,
    stats: &RecommendationStats,
    observations: &[String],
) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Assessment completion stands at {completion_pct:.0}%"
    ));
    if let Some(top) = &stats.top_pick {
        lines.push(format!(
            "The strongest recommendation is {} with relevance {}",
            top.tool_name, top.score
        ));
    }
    for observation in observations {
        lines.push(observation.clone());
    }
    lines.join("\n")
}

fn fallback_summary(completion_pct: f32, stats: &RecommendationStats) -> String {
    match &stats.top_pick {
        Some(top) => format!(
            "Assessments are {completion_pct:.0}% complete; {} recommendation(s) are active and {} leads the shortlist.",
            stats.count, top.tool_name
        ),
        None => format!(
            "Assessments are {completion_pct:.0}% complete; no recommendations have been generated yet."
        ),
    }
}
