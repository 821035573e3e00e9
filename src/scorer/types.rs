// ===== meisterscore/src/scorer/types.rs =====
use crate::semester::Semester;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-component ceiling for the applicant's school, track, and category.
/// Components a school does not award stay `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentMaxima {
    pub course: f64,
    pub attendance: Option<f64>,
    pub volunteer: Option<f64>,
    pub leadership: Option<f64>,
    pub career: Option<f64>,
    pub awards: Option<f64>,
    pub total: f64,
}

/// Full scoring result for one applicant. Component values are already
/// rounded to 3 decimals; `total` is the rounded sum of the rounded
/// components.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub course: f64,
    pub attendance: Option<f64>,
    pub volunteer: Option<f64>,
    pub leadership: Option<f64>,
    pub career: Option<f64>,
    pub awards: Option<f64>,
    pub total: f64,
    pub maxima: ComponentMaxima,
    pub effective_weights: BTreeMap<Semester, f64>,
    /// Set when the free-semester flags span more than one school year.
    /// The score above is still computed from the flags as given.
    pub free_semester_violation: bool,
}

impl ScoreBreakdown {
    /// Component rows in report order: (label, score, max).
    pub fn components(&self) -> Vec<(&'static str, f64, Option<f64>)> {
        let mut rows = vec![("course", self.course, Some(self.maxima.course))];
        let optional = [
            ("attendance", self.attendance, self.maxima.attendance),
            ("volunteer", self.volunteer, self.maxima.volunteer),
            ("leadership", self.leadership, self.maxima.leadership),
            ("career", self.career, self.maxima.career),
            ("awards", self.awards, self.maxima.awards),
        ];
        for (label, value, max) in optional {
            if let Some(v) = value {
                rows.push((label, v, max));
            }
        }
        rows
    }
}
