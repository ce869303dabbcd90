use super::views::{AdoptionInsights, AdoptionLevel, AssessmentProgressEntry, RecommendationStats};
use crate::workflows::assessment::AssessmentRecord;

/// Blend completion, self-assessed readiness, and shortlist quality into a
/// single adoption readiness score.
pub(crate) fn generate_insights(
    progress: &[AssessmentProgressEntry],
    latest: Option<&AssessmentRecord>,
    stats: &RecommendationStats,
) -> AdoptionInsights {
    let total = progress.len().max(1) as f32;
    let completed = progress.iter().filter(|entry| entry.completed).count() as f32;
    let completion_part = (completed / total) * 40.0;

    let readiness_part = latest
        .map(|record| (record.context.readiness as f32 / 5.0) * 30.0)
        .unwrap_or(0.0);

    let shortlist_part = if stats.count > 0 {
        (stats.average_score / 100.0) * 30.0
    } else {
        0.0
    };

    let adoption_score = (completion_part + readiness_part + shortlist_part)
        .round()
        .clamp(0.0, 100.0) as u8;

    let adoption_level = if adoption_score >= 75 {
        AdoptionLevel::Ready
    } else if adoption_score >= 45 {
        AdoptionLevel::Developing
    } else {
        AdoptionLevel::Emerging
    };

    let mut focus_areas = Vec::new();
    for entry in progress {
        if !entry.completed {
            focus_areas.push(format!("Complete the {} assessment", entry.kind_label));
        }
    }
    if let Some(record) = latest {
        if record.context.readiness < 3 {
            focus_areas.push("Raise organizational readiness before hard rollouts".to_string());
        }
    }
    if stats.count == 0 {
        focus_areas.push("Generate a recommendation shortlist".to_string());
    }

    let mut observations = Vec::new();
    observations.push(format!(
        "{} of {} assessments complete",
        completed as u32, total as u32
    ));
    if stats.count > 0 {
        observations.push(format!(
            "{} active recommendation(s), average relevance {:.0}",
            stats.count, stats.average_score
        ));
    }
    if let Some(top) = &stats.top_pick {
        observations.push(format!("top pick is {} at {}", top.tool_name, top.score));
    }

    AdoptionInsights {
        adoption_score,
        adoption_level,
        focus_areas,
        observations,
    }
}
