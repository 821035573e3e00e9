// ===== meisterscore/src/scorer/volunteer.rs =====
//! Volunteer score: per grade-year hour tiers, where the tier table
//! depends on when the hours were logged. Schools keep separate era
//! tables for enrolled and graduate applicants.

use crate::config::{VolunteerEra, VolunteerRule};
use crate::record::{ApplicantCategory, VolunteerRecord};

fn year_points(eras: &[VolunteerEra], hours: f64, activity_year: i32) -> f64 {
    let Some(era) = eras.iter().find(|e| activity_year >= e.min_year) else {
        return 0.0;
    };
    era.tiers
        .iter()
        .find(|t| hours >= t.min_hours)
        .map(|t| t.points)
        .unwrap_or(era.floor_points)
}

pub fn volunteer_score(
    rule: &VolunteerRule,
    category: ApplicantCategory,
    record: &VolunteerRecord,
) -> f64 {
    let eras = match category {
        ApplicantCategory::Graduate => &rule.graduate,
        _ => &rule.enrolled,
    };
    let total: f64 = record
        .years
        .iter()
        .map(|y| year_points(eras, y.hours, y.activity_year))
        .sum();
    total.min(rule.max)
}
