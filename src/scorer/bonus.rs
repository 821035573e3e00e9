// ===== meisterscore/src/scorer/bonus.rs =====
//! Leadership, career-experience, and award bonuses.

use crate::config::{BonusRule, TrackParams};
use crate::record::{ApplicantCategory, BonusInputs};

/// Office-held semesters with base weight for the category, capped.
pub fn leadership_score(
    rule: &BonusRule,
    params: &TrackParams,
    category: ApplicantCategory,
    inputs: &BonusInputs,
) -> f64 {
    let count = inputs
        .leadership
        .iter()
        .filter(|s| params.base_weight(category, **s) > 0.0)
        .count();
    (count as f64 * rule.leadership_points).min(rule.leadership_max)
}

/// Flat points when the school recognizes career-experience activities.
pub fn career_score(rule: &BonusRule, inputs: &BonusInputs) -> Option<f64> {
    let points = rule.career_points?;
    Some(if inputs.career_experience { points } else { 0.0 })
}

pub fn award_score(rule: &BonusRule, inputs: &BonusInputs) -> f64 {
    (f64::from(inputs.awards) * rule.award_points).min(rule.award_max)
}
