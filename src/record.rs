// ===== meisterscore/src/record.rs =====
//! Applicant input model. Every collection defaults to empty so a partial
//! JSON record scores as "no contribution" rather than failing to parse.

use crate::semester::Semester;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumIter, EnumString};

/// Admission category. `Enrolled` covers both currently-enrolled and
/// prospective-graduate applicants (they share weight tables at every
/// school); `Equivalency` is the GED-style exam path.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApplicantCategory {
    #[default]
    Enrolled,
    Graduate,
    Equivalency,
}

/// Admission track. Schools without a special track carry a single
/// `General` parameter block and ignore this field.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Track {
    #[default]
    General,
    Special,
}

/// One graded subject line within a semester. `weighted` marks the
/// math/science flag used by the flagged-subject rule; schools with
/// uniform or roster-based weighting ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectRow {
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub weighted: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AttendanceRow {
    #[serde(default)]
    pub absences: u32,
    #[serde(default)]
    pub lateness: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolunteerYear {
    #[serde(default)]
    pub hours: f64,
    pub activity_year: i32,
}

impl Default for VolunteerYear {
    fn default() -> Self {
        VolunteerYear {
            hours: 0.0,
            activity_year: 2025,
        }
    }
}

/// Volunteer hours per grade year (index 0 = year 1).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VolunteerRecord {
    #[serde(default)]
    pub years: [VolunteerYear; 3],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BonusInputs {
    /// Semesters in which the applicant held a class or school office.
    #[serde(default)]
    pub leadership: BTreeSet<Semester>,
    #[serde(default)]
    pub career_experience: bool,
    #[serde(default)]
    pub awards: u32,
}

/// One exam subject on the equivalency path, scored 0..100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalencySubject {
    pub subject: String,
    pub score: f64,
}

/// Full input for one applicant. JSON is the interchange format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(default)]
    pub category: ApplicantCategory,
    #[serde(default)]
    pub track: Track,
    #[serde(default)]
    pub subjects: BTreeMap<Semester, Vec<SubjectRow>>,
    #[serde(default)]
    pub free_semesters: BTreeSet<Semester>,
    #[serde(default)]
    pub equivalency_subjects: Vec<EquivalencySubject>,
    #[serde(default)]
    pub attendance: BTreeMap<Semester, AttendanceRow>,
    #[serde(default)]
    pub volunteer: VolunteerRecord,
    #[serde(default)]
    pub bonus: BonusInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_is_a_valid_record() {
        let rec: ApplicantRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(rec.category, ApplicantCategory::Enrolled);
        assert_eq!(rec.track, Track::General);
        assert!(rec.subjects.is_empty());
        assert!(rec.free_semesters.is_empty());
    }

    #[test]
    fn semester_keys_round_trip() {
        let json = r#"{
            "category": "graduate",
            "subjects": { "1-1": [ { "name": "국어", "grade": "A/수" } ] },
            "free_semesters": ["2-1"]
        }"#;
        let rec: ApplicantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.category, ApplicantCategory::Graduate);
        assert_eq!(rec.subjects[&Semester::Y1S1].len(), 1);
        assert!(rec.free_semesters.contains(&Semester::Y2S1));

        let back = serde_json::to_string(&rec).unwrap();
        assert!(back.contains("\"1-1\""));
        assert!(back.contains("\"2-1\""));
    }
}
