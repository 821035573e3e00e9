// ===== meisterscore/src/scorer/course.rs =====
//! Course score: the weighted-average path for semester records and the
//! step-converted path for equivalency exam results.

use crate::config::{SchoolConfig, TrackParams};
use crate::record::EquivalencySubject;
use crate::semester::{Semester, YEARS};

/// Weighted path: Σ(effective weight × semester average), whole-year-free
/// correction multipliers where the school defines them, then the track
/// scale. The result may exceed the nominal course maximum at extreme
/// averages; the published rules keep it that way.
pub fn course_score(
    config: &SchoolConfig,
    params: &TrackParams,
    eff: &[f64; 6],
    averages: &[f64; 6],
) -> f64 {
    let mut sum = 0.0;
    for sem in Semester::ALL {
        let w = eff[sem.index()];
        if w <= 0.0 {
            continue;
        }
        sum += w * averages[sem.index()];
    }

    if let Some(corrections) = config.year_free_corrections {
        for year in YEARS {
            let all_zero = Semester::of_year(year).all(|s| eff[s.index()] == 0.0);
            if all_zero {
                sum *= corrections[(year - 1) as usize];
            }
        }
    }

    sum * params.course_scale
}

/// Equivalency path: step-convert each finite exam score to a point,
/// average, scale. No scores means 0.
pub fn equivalency_score(params: &TrackParams, subjects: &[EquivalencySubject]) -> f64 {
    let points: Vec<f64> = subjects
        .iter()
        .filter(|s| s.score.is_finite())
        .map(|s| f64::from(params.equivalency.score_to_point(s.score)))
        .collect();
    if points.is_empty() {
        return 0.0;
    }
    let avg = points.iter().sum::<f64>() / points.len() as f64;
    avg * params.equivalency.scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::School;
    use crate::record::Track;

    #[test]
    fn perfect_agriculture_record_scores_forty() {
        let config = School::Agriculture.config();
        let params = config.track_params(Track::General);
        let eff = [2.0, 2.0, 4.0, 4.0, 8.0, 0.0];
        let avgs = [5.0; 6];
        assert_eq!(course_score(&config, params, &eff, &avgs), 40.0);
    }

    #[test]
    fn equivalency_points_average_then_scale() {
        let config = School::Agriculture.config();
        let params = config.track_params(Track::General);
        let subjects = vec![
            EquivalencySubject {
                subject: "국어".into(),
                score: 96.0,
            },
            EquivalencySubject {
                subject: "수학".into(),
                score: 82.0,
            },
        ];
        // points 5 and 2, mean 3.5, ×8
        assert_eq!(equivalency_score(params, &subjects), 28.0);
    }

    #[test]
    fn empty_equivalency_list_scores_zero() {
        let config = School::Il.config();
        let params = config.track_params(Track::General);
        assert_eq!(equivalency_score(params, &[]), 0.0);
        let nan_only = vec![EquivalencySubject {
            subject: "수학".into(),
            score: f64::NAN,
        }];
        assert_eq!(equivalency_score(params, &nan_only), 0.0);
    }

    #[test]
    fn year_free_correction_restores_the_full_scale() {
        // A fully free year 1 leaves 16 weight; renormalized weights sum
        // to 20, the ×(100/80) correction and the ×0.8 scale land a
        // perfect record back at 100.
        let config = School::Software.config();
        let params = config.track_params(Track::General);
        let eff = [0.0, 0.0, 3.75, 3.75, 12.5, 0.0];
        let avgs = [0.0, 0.0, 5.0, 5.0, 5.0, 0.0];
        let score = course_score(&config, params, &eff, &avgs);
        assert!((score - 100.0).abs() < 1e-9);
    }
}
