// ===== meisterscore/src/scorer/weights.rs =====
//! Free-semester weight reallocation.
//!
//! Base weights per semester come from the track table; a flagged
//! semester carries no grades, so its weight moves. Within a year a lone
//! flag hands the whole year total to the remaining semester; a fully
//! flagged year either transfers its base total to the configured target
//! year or (without a transfer map) is recovered by renormalization.

use crate::config::{SchoolConfig, TrackParams};
use crate::record::ApplicantCategory;
use crate::semester::{Semester, YEARS};
use std::collections::BTreeSet;

const EPSILON: f64 = 1e-9;

/// Semesters of `year` that participate in reallocation. Schools that
/// restrict to weighted semesters never touch zero-base slots.
fn year_semesters(
    restrict_to_weighted: bool,
    base: &[f64; 6],
    year: u8,
) -> Vec<Semester> {
    Semester::of_year(year)
        .filter(|s| !restrict_to_weighted || base[s.index()] > 0.0)
        .collect()
}

/// Computes the effective per-semester weights for one applicant.
/// Equivalency applicants have no semester record; every weight is 0.
pub fn effective_weights(
    config: &SchoolConfig,
    params: &TrackParams,
    category: ApplicantCategory,
    flags: &BTreeSet<Semester>,
) -> [f64; 6] {
    if category == ApplicantCategory::Equivalency {
        return [0.0; 6];
    }

    let mut base = [0.0; 6];
    for sem in Semester::ALL {
        base[sem.index()] = params.base_weight(category, sem);
    }

    let mut marks = flags.clone();
    if config.promote_lone_terminal
        && marks.contains(&Semester::Y3S1)
        && !marks.contains(&Semester::Y3S2)
        && base[Semester::Y3S2.index()] == 0.0
    {
        // A 3-1 flag with an unrecorded 3-2 means the whole final year
        // is free.
        marks.insert(Semester::Y3S2);
    }

    let mut eff = base;

    // Within-year absorption: flagged semesters hand their share to the
    // unflagged remainder of the year; a fully flagged year zeroes out.
    for year in YEARS {
        let sems = year_semesters(config.restrict_to_weighted, &base, year);
        if sems.is_empty() {
            continue;
        }
        let year_total: f64 = sems.iter().map(|s| base[s.index()]).sum();
        let flagged: Vec<Semester> =
            sems.iter().copied().filter(|s| marks.contains(s)).collect();
        if flagged.is_empty() {
            continue;
        }
        if flagged.len() < sems.len() {
            let kept: Vec<Semester> = sems
                .iter()
                .copied()
                .filter(|s| !marks.contains(s))
                .collect();
            let kept_total: f64 = kept.iter().map(|s| base[s.index()]).sum();
            for s in &flagged {
                eff[s.index()] = 0.0;
            }
            if kept_total > 0.0 {
                for s in &kept {
                    eff[s.index()] = year_total * base[s.index()] / kept_total;
                }
            }
        } else {
            for s in &sems {
                eff[s.index()] = 0.0;
            }
        }
    }

    // Cross-year transfer: a zeroed year moves its base total to the
    // mapped target year, split by the target's current weights.
    if let Some(targets) = config.transfer_targets {
        for year in YEARS {
            let sems = year_semesters(config.restrict_to_weighted, &base, year);
            if sems.is_empty() {
                continue;
            }
            let eff_total: f64 = sems.iter().map(|s| eff[s.index()]).sum();
            let base_total: f64 = sems.iter().map(|s| base[s.index()]).sum();
            if eff_total == 0.0 && base_total > 0.0 {
                add_to_year(
                    config.restrict_to_weighted,
                    &base,
                    &mut eff,
                    targets[(year - 1) as usize],
                    base_total,
                );
            }
        }
    }

    let total: f64 = eff.iter().sum();
    if total > 0.0 && (total - params.target_sum).abs() > EPSILON {
        let scale = params.target_sum / total;
        for w in &mut eff {
            *w *= scale;
        }
    }
    eff
}

fn add_to_year(
    restrict_to_weighted: bool,
    base: &[f64; 6],
    eff: &mut [f64; 6],
    target_year: u8,
    add: f64,
) {
    if add <= 0.0 {
        return;
    }
    let sems = year_semesters(restrict_to_weighted, base, target_year);
    if sems.is_empty() {
        return;
    }
    let current: f64 = sems.iter().map(|s| eff[s.index()]).sum();
    if current > 0.0 {
        for s in &sems {
            eff[s.index()] += add * eff[s.index()] / current;
        }
    } else {
        let base_total: f64 = sems.iter().map(|s| base[s.index()]).sum();
        if base_total > 0.0 {
            for s in &sems {
                eff[s.index()] += add * base[s.index()] / base_total;
            }
        }
    }
}

/// True when the flagged semesters stay within one school year. Flags on
/// zero-base semesters are ignored for schools that restrict reallocation
/// to weighted semesters. Spanning years is reported, never auto-fixed.
pub fn flags_within_single_year(
    config: &SchoolConfig,
    params: &TrackParams,
    category: ApplicantCategory,
    flags: &BTreeSet<Semester>,
) -> bool {
    let years: BTreeSet<u8> = flags
        .iter()
        .filter(|s| {
            !config.restrict_to_weighted || params.base_weight(category, **s) > 0.0
        })
        .map(|s| s.year())
        .collect();
    years.len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::School;
    use crate::record::Track;

    fn weights(
        school: School,
        track: Track,
        category: ApplicantCategory,
        flags: &[Semester],
    ) -> [f64; 6] {
        let config = school.config();
        let params = config.track_params(track).clone();
        let set: BTreeSet<Semester> = flags.iter().copied().collect();
        effective_weights(&config, &params, category, &set)
    }

    #[test]
    fn no_flags_returns_base_weights() {
        let w = weights(
            School::Agriculture,
            Track::General,
            ApplicantCategory::Enrolled,
            &[],
        );
        assert_eq!(w, [2.0, 2.0, 4.0, 4.0, 8.0, 0.0]);
    }

    #[test]
    fn lone_flag_hands_year_total_to_the_other_semester() {
        let w = weights(
            School::Agriculture,
            Track::General,
            ApplicantCategory::Enrolled,
            &[Semester::Y2S1],
        );
        assert_eq!(w, [2.0, 2.0, 0.0, 8.0, 8.0, 0.0]);
    }

    #[test]
    fn fully_flagged_year_transfers_to_target_year() {
        // Agriculture maps year 2 back to year 1.
        let w = weights(
            School::Agriculture,
            Track::General,
            ApplicantCategory::Enrolled,
            &[Semester::Y2S1, Semester::Y2S2],
        );
        assert_eq!(w, [6.0, 6.0, 0.0, 0.0, 8.0, 0.0]);
    }

    #[test]
    fn equivalency_weights_are_all_zero() {
        let w = weights(
            School::Il,
            Track::General,
            ApplicantCategory::Equivalency,
            &[Semester::Y1S1],
        );
        assert_eq!(w, [0.0; 6]);
    }

    #[test]
    fn cross_year_flags_are_flagged_not_fixed() {
        let config = School::Semiconductor.config();
        let params = config.track_params(Track::General).clone();
        let set: BTreeSet<Semester> =
            [Semester::Y1S1, Semester::Y2S1].into_iter().collect();
        assert!(!flags_within_single_year(
            &config,
            &params,
            ApplicantCategory::Enrolled,
            &set
        ));
        // Scoring still proceeds on the reallocated weights.
        let w = effective_weights(&config, &params, ApplicantCategory::Enrolled, &set);
        let total: f64 = w.iter().sum();
        assert!((total - 20.0).abs() < 1e-9);
    }
}
