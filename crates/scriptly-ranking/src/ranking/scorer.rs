//! Additive relevance scorer.
//!
//! Each rule contributes independently, so a record strong on one axis
//! is never eliminated for missing another axis's metadata: a missing
//! optional field simply skips that bonus.

use std::fmt;

use scriptly_core::constants::FAST_EXECUTION_SECS;
use scriptly_core::{IntensityLevel, ScriptRecord, SignalWeights, SituationContext};

/// Why a record earned points. Kept in the order bonuses were applied
/// and surfaced through `rank_scored` for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    TitleMatch,
    SituationMatch,
    CategoryMatch,
    TagMatch,
    ProblemTypeMatch,
    FastExecution,
    EmergencySuitable,
    SevereIntensity,
    ModerateIntensity,
    PublicLocationTag,
    WorksInPublic,
    FrustratedStateTag,
    ExhaustedStateTag,
    FrustratedEmergencyFallback,
    RepeatIssue,
}

impl MatchReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchReason::TitleMatch => "title match",
            MatchReason::SituationMatch => "situation match",
            MatchReason::CategoryMatch => "category match",
            MatchReason::TagMatch => "tag match",
            MatchReason::ProblemTypeMatch => "problem type match",
            MatchReason::FastExecution => "fast execution",
            MatchReason::EmergencySuitable => "emergency suitable",
            MatchReason::SevereIntensity => "handles severe intensity",
            MatchReason::ModerateIntensity => "handles moderate intensity",
            MatchReason::PublicLocationTag => "public location tag",
            MatchReason::WorksInPublic => "works in public",
            MatchReason::FrustratedStateTag => "supports frustrated caregiver",
            MatchReason::ExhaustedStateTag => "supports exhausted caregiver",
            MatchReason::FrustratedEmergencyFallback => "emergency fallback",
            MatchReason::RepeatIssue => "recurring issue",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score one record against a query and its extracted context.
///
/// `query_lower` must already be lower-cased — the ranker folds the
/// query once per call rather than once per record. Returns the total
/// and the reasons that contributed, in application order.
pub fn score(
    query_lower: &str,
    context: &SituationContext,
    record: &ScriptRecord,
    weights: &SignalWeights,
) -> (u32, Vec<MatchReason>) {
    let mut total: u32 = 0;
    let mut reasons: Vec<MatchReason> = Vec::new();

    // Direct text signals.
    if record.title.to_lowercase().contains(query_lower) {
        total += weights.title_match;
        reasons.push(MatchReason::TitleMatch);
    }
    if let Some(trigger) = &record.situation_trigger {
        if trigger.to_lowercase().contains(query_lower) {
            total += weights.situation_match;
            reasons.push(MatchReason::SituationMatch);
        }
    }
    if record.normalized_category().contains(query_lower) {
        total += weights.category_match;
        reasons.push(MatchReason::CategoryMatch);
    }
    // Reverse containment: a short tag "contained in" the longer query.
    if record
        .tags
        .iter()
        .any(|t| !t.is_empty() && query_lower.contains(&t.to_lowercase()))
    {
        total += weights.tag_match;
        reasons.push(MatchReason::TagMatch);
    }
    if let Some(problem) = &context.matched_problem {
        let needle = problem.display_form();
        let in_tags = record
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&needle));
        if in_tags || record.normalized_category().contains(&needle) {
            total += weights.problem_type_match;
            reasons.push(MatchReason::ProblemTypeMatch);
        }
    }

    // Situational bonuses.
    if context.is_urgent {
        if record.fits_time_budget(FAST_EXECUTION_SECS) {
            total += weights.urgent_fast_execution;
            reasons.push(MatchReason::FastExecution);
        }
        if record.is_emergency_suitable() {
            total += weights.urgent_emergency_suitable;
            reasons.push(MatchReason::EmergencySuitable);
        }
    }
    if context.is_intense {
        if record.handles_intensity(IntensityLevel::Severe) {
            total += weights.intense_severe;
            reasons.push(MatchReason::SevereIntensity);
        }
        if record.handles_intensity(IntensityLevel::Moderate) {
            total += weights.intense_moderate;
            reasons.push(MatchReason::ModerateIntensity);
        }
    }
    if context.is_public {
        if record.tagged_for_location("public") {
            total += weights.public_location_tag;
            reasons.push(MatchReason::PublicLocationTag);
        }
        if record.usable_in_public() {
            total += weights.public_flag;
            reasons.push(MatchReason::WorksInPublic);
        }
    }
    if context.caregiver_frustrated {
        if record.suits_caregiver_state("frustrated") {
            total += weights.frustrated_state_tag;
            reasons.push(MatchReason::FrustratedStateTag);
        }
        if record.suits_caregiver_state("exhausted") {
            total += weights.exhausted_state_tag;
            reasons.push(MatchReason::ExhaustedStateTag);
        }
        if record.is_emergency_suitable() {
            total += weights.frustrated_emergency_fallback;
            reasons.push(MatchReason::FrustratedEmergencyFallback);
        }
    }
    // Flat recurrence bonus: applies to every record when the caregiver
    // reports a repeat issue.
    if context.is_repeat {
        total += weights.repeat_issue;
        reasons.push(MatchReason::RepeatIssue);
    }

    (total, reasons)
}
