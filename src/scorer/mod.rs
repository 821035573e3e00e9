// ===== meisterscore/src/scorer/mod.rs =====
pub mod attendance;
pub mod average;
pub mod bonus;
pub mod course;
pub mod grades;
pub mod types;
pub mod volunteer;
pub mod weights;

pub use self::types::{ComponentMaxima, ScoreBreakdown};

use crate::config::{School, SchoolConfig};
use crate::record::{ApplicantCategory, ApplicantRecord};
use crate::round::round3;
use crate::semester::Semester;
use std::collections::BTreeMap;

pub struct Scorer {
    config: SchoolConfig,
}

impl Scorer {
    pub fn new(config: SchoolConfig) -> Self {
        Scorer { config }
    }

    pub fn for_school(school: School) -> Self {
        Scorer::new(school.config())
    }

    pub fn config(&self) -> &SchoolConfig {
        &self.config
    }

    /// Scores one applicant. Every component is rounded to 3 decimals and
    /// the total is the rounded sum of the rounded components, matching
    /// the published calculation sheets digit for digit.
    pub fn score(&self, record: &ApplicantRecord) -> ScoreBreakdown {
        let params = self.config.track_params(record.track);

        if record.category == ApplicantCategory::Equivalency {
            let course = round3(course::equivalency_score(
                params,
                &record.equivalency_subjects,
            ));
            return ScoreBreakdown {
                course,
                attendance: None,
                volunteer: None,
                leadership: None,
                career: None,
                awards: None,
                total: course,
                maxima: ComponentMaxima {
                    course: params.equivalency.max,
                    total: params.equivalency.max,
                    ..ComponentMaxima::default()
                },
                effective_weights: Semester::ALL
                    .into_iter()
                    .map(|s| (s, 0.0))
                    .collect(),
                free_semester_violation: false,
            };
        }

        let eff = weights::effective_weights(
            &self.config,
            params,
            record.category,
            &record.free_semesters,
        );

        let mut averages = [0.0; 6];
        for sem in Semester::ALL {
            if let Some(rows) = record.subjects.get(&sem) {
                averages[sem.index()] =
                    average::semester_stats(&self.config, rows).average;
            }
        }

        let course = round3(course::course_score(&self.config, params, &eff, &averages));
        let attendance_score = params.attendance.as_ref().map(|rule| {
            round3(attendance::attendance_score(
                rule,
                params,
                record.category,
                &record.attendance,
            ))
        });
        let volunteer_score = params.volunteer.as_ref().map(|rule| {
            round3(volunteer::volunteer_score(
                rule,
                record.category,
                &record.volunteer,
            ))
        });
        let (leadership, career, awards) = match &params.bonus {
            Some(rule) => (
                Some(round3(bonus::leadership_score(
                    rule,
                    params,
                    record.category,
                    &record.bonus,
                ))),
                bonus::career_score(rule, &record.bonus).map(round3),
                Some(round3(bonus::award_score(rule, &record.bonus))),
            ),
            None => (None, None, None),
        };

        let total = round3(
            course
                + attendance_score.unwrap_or(0.0)
                + volunteer_score.unwrap_or(0.0)
                + leadership.unwrap_or(0.0)
                + career.unwrap_or(0.0)
                + awards.unwrap_or(0.0),
        );

        let maxima = ComponentMaxima {
            course: params.course_max,
            attendance: params.attendance.as_ref().map(|r| r.max()),
            volunteer: params.volunteer.as_ref().map(|r| r.max),
            leadership: params.bonus.as_ref().map(|r| r.leadership_max),
            career: params.bonus.as_ref().and_then(|r| r.career_points),
            awards: params.bonus.as_ref().map(|r| r.award_max),
            total: params.total_max(record.category),
        };

        let effective_weights: BTreeMap<Semester, f64> = Semester::ALL
            .into_iter()
            .map(|s| (s, eff[s.index()]))
            .collect();

        ScoreBreakdown {
            course,
            attendance: attendance_score,
            volunteer: volunteer_score,
            leadership,
            career,
            awards,
            total,
            maxima,
            effective_weights,
            free_semester_violation: !weights::flags_within_single_year(
                &self.config,
                params,
                record.category,
                &record.free_semesters,
            ),
        }
    }
}
