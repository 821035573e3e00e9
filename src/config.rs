// ===== meisterscore/src/config.rs =====
//! Data-driven school configuration. The four shipped variants are preset
//! values of `SchoolConfig`; nothing in the engine branches on the school
//! identity itself. A JSON file with the same shape can override a preset
//! from the CLI.

use crate::error::{MeisterError, MsResult};
use crate::record::{ApplicantCategory, Track};
use crate::scorer::grades::TokenMatching;
use crate::semester::Semester;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum School {
    Agriculture,
    Il,
    Software,
    Semiconductor,
}

impl School {
    pub fn config(&self) -> SchoolConfig {
        match self {
            School::Agriculture => SchoolConfig::agriculture(),
            School::Il => SchoolConfig::il(),
            School::Software => SchoolConfig::software(),
            School::Semiconductor => SchoolConfig::semiconductor(),
        }
    }
}

/// How one subject line weighs into the semester average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubjectRule {
    /// Every counted subject weighs 1.
    Uniform,
    /// Rows carrying the math/science flag weigh `factor`, the rest 1.
    WeightedFlag { factor: f64 },
    /// Closed subject list; rows with unlisted names are excluded.
    FixedRoster { subjects: Vec<RosterSubject> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSubject {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceRule {
    /// max − per_absence·a − per_lateness·l, floored at 0.
    Linear {
        max: f64,
        per_absence: f64,
        per_lateness: f64,
    },
    /// Lateness converts to absences (⌊l / lateness_per_absence⌋), the
    /// combined count caps at `absence_cap`, then max − per_absence·count.
    ConvertedAbsences {
        max: f64,
        per_absence: f64,
        lateness_per_absence: u32,
        absence_cap: u32,
    },
}

impl AttendanceRule {
    pub fn max(&self) -> f64 {
        match self {
            AttendanceRule::Linear { max, .. } => *max,
            AttendanceRule::ConvertedAbsences { max, .. } => *max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolunteerTier {
    pub min_hours: f64,
    pub points: f64,
}

/// One activity-year window. Eras are checked in order; the first whose
/// `min_year` the activity year reaches wins. Within an era the first tier
/// whose `min_hours` the hours reach wins, else `floor_points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerEra {
    pub min_year: i32,
    pub tiers: Vec<VolunteerTier>,
    pub floor_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerRule {
    pub enrolled: Vec<VolunteerEra>,
    pub graduate: Vec<VolunteerEra>,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusRule {
    pub leadership_points: f64,
    pub leadership_max: f64,
    /// Flat points for a recognized career-experience activity, when the
    /// school awards any.
    pub career_points: Option<f64>,
    pub award_points: f64,
    pub award_max: f64,
}

/// Step conversion for equivalency exam scores. `bounds` are the four
/// descending cut-offs for points 5..2; below the last bound is 1 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalencyRule {
    pub bounds: [f64; 4],
    pub scale: f64,
    pub max: f64,
}

impl EquivalencyRule {
    pub fn score_to_point(&self, score: f64) -> u8 {
        let [b5, b4, b3, b2] = self.bounds;
        if score >= b5 {
            5
        } else if score >= b4 {
            4
        } else if score >= b3 {
            3
        } else if score >= b2 {
            2
        } else {
            1
        }
    }
}

/// Per-track numeric parameters. Weight tables are indexed by
/// `Semester::index()` (`1-1` = 0 .. `3-2` = 5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackParams {
    pub track: Track,
    pub enrolled_weights: [f64; 6],
    pub graduate_weights: [f64; 6],
    pub target_sum: f64,
    pub course_scale: f64,
    pub course_max: f64,
    pub equivalency: EquivalencyRule,
    #[serde(default)]
    pub attendance: Option<AttendanceRule>,
    #[serde(default)]
    pub volunteer: Option<VolunteerRule>,
    #[serde(default)]
    pub bonus: Option<BonusRule>,
}

impl TrackParams {
    /// Base semester weight for a category. Equivalency applicants have no
    /// semester record, so every weight is 0.
    pub fn base_weight(&self, category: ApplicantCategory, sem: Semester) -> f64 {
        match category {
            ApplicantCategory::Enrolled => self.enrolled_weights[sem.index()],
            ApplicantCategory::Graduate => self.graduate_weights[sem.index()],
            ApplicantCategory::Equivalency => 0.0,
        }
    }

    /// Highest attainable total for a category under this track.
    pub fn total_max(&self, category: ApplicantCategory) -> f64 {
        if category == ApplicantCategory::Equivalency {
            return self.equivalency.max;
        }
        let mut max = self.course_max;
        if let Some(att) = &self.attendance {
            max += att.max();
        }
        if let Some(vol) = &self.volunteer {
            max += vol.max;
        }
        if let Some(bonus) = &self.bonus {
            max += bonus.leadership_max + bonus.award_max;
            if let Some(c) = bonus.career_points {
                max += c;
            }
        }
        max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolConfig {
    pub school: School,
    pub display_name: String,
    pub subject_rule: SubjectRule,
    /// Subjects whose trimmed name contains one of these are skipped.
    #[serde(default)]
    pub banned_keywords: Vec<String>,
    /// Whether reallocation rules only look at positive-base semesters.
    pub restrict_to_weighted: bool,
    /// A lone `3-1` flag with a zero-base `3-2` marks the whole year free.
    pub promote_lone_terminal: bool,
    /// Cross-year transfer target per source year (index 0 = year 1).
    /// Absent means freed year weight is recovered by renormalization only.
    #[serde(default)]
    pub transfer_targets: Option<[u8; 3]>,
    /// Post-hoc multipliers on the weighted sum when a whole year is free.
    #[serde(default)]
    pub year_free_corrections: Option<[f64; 3]>,
    pub matching: TokenMatching,
    pub tracks: Vec<TrackParams>,
}

impl SchoolConfig {
    /// Parameter block for a track, falling back to the first block for
    /// schools without a special track.
    pub fn track_params(&self, track: Track) -> &TrackParams {
        self.tracks
            .iter()
            .find(|t| t.track == track)
            .unwrap_or(&self.tracks[0])
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MsResult<SchoolConfig> {
        let file = File::open(path.as_ref())?;
        let config: SchoolConfig = serde_json::from_reader(BufReader::new(file))?;
        if config.tracks.is_empty() {
            return Err(MeisterError::Config(
                "school config must define at least one track".into(),
            ));
        }
        info!(
            school = %config.school,
            tracks = config.tracks.len(),
            "loaded school config override from {}",
            path.as_ref().display()
        );
        Ok(config)
    }

    pub fn agriculture() -> SchoolConfig {
        let equivalency = |scale: f64, max: f64| EquivalencyRule {
            bounds: [95.0, 90.0, 85.0, 80.0],
            scale,
            max,
        };
        SchoolConfig {
            school: School::Agriculture,
            display_name: "한국생명과학고".into(),
            subject_rule: SubjectRule::Uniform,
            banned_keywords: vec![],
            restrict_to_weighted: true,
            promote_lone_terminal: false,
            transfer_targets: Some([2, 1, 2]),
            year_free_corrections: None,
            matching: TokenMatching::Strict,
            tracks: vec![
                TrackParams {
                    track: Track::General,
                    enrolled_weights: [2.0, 2.0, 4.0, 4.0, 8.0, 0.0],
                    graduate_weights: [2.0, 2.0, 4.0, 4.0, 4.0, 4.0],
                    target_sum: 20.0,
                    course_scale: 0.4,
                    course_max: 40.0,
                    equivalency: equivalency(8.0, 40.0),
                    attendance: None,
                    volunteer: None,
                    bonus: None,
                },
                TrackParams {
                    track: Track::Special,
                    enrolled_weights: [2.0, 2.0, 4.0, 4.0, 8.0, 0.0],
                    graduate_weights: [2.0, 2.0, 4.0, 4.0, 4.0, 4.0],
                    target_sum: 20.0,
                    course_scale: 0.3,
                    course_max: 30.0,
                    equivalency: equivalency(6.0, 30.0),
                    attendance: None,
                    volunteer: None,
                    bonus: None,
                },
            ],
        }
    }

    pub fn il() -> SchoolConfig {
        let equivalency = EquivalencyRule {
            bounds: [95.0, 90.0, 85.0, 80.0],
            scale: 20.0,
            max: 100.0,
        };
        SchoolConfig {
            school: School::Il,
            display_name: "일고등학교".into(),
            subject_rule: SubjectRule::Uniform,
            banned_keywords: vec![],
            restrict_to_weighted: true,
            promote_lone_terminal: false,
            transfer_targets: Some([2, 3, 2]),
            year_free_corrections: None,
            matching: TokenMatching::Strict,
            tracks: vec![
                TrackParams {
                    track: Track::General,
                    enrolled_weights: [1.2, 1.2, 1.8, 1.8, 6.0, 0.0],
                    graduate_weights: [1.2, 1.2, 1.8, 1.8, 3.0, 3.0],
                    target_sum: 12.0,
                    course_scale: 1.0,
                    course_max: 60.0,
                    equivalency,
                    attendance: Some(AttendanceRule::Linear {
                        max: 40.0,
                        per_absence: 6.0,
                        per_lateness: 2.0,
                    }),
                    volunteer: None,
                    bonus: None,
                },
                TrackParams {
                    track: Track::Special,
                    enrolled_weights: [1.0, 1.0, 1.5, 1.5, 5.0, 0.0],
                    graduate_weights: [1.0, 1.0, 1.5, 1.5, 2.5, 2.5],
                    target_sum: 10.0,
                    course_scale: 1.0,
                    course_max: 50.0,
                    equivalency,
                    attendance: Some(AttendanceRule::Linear {
                        max: 50.0,
                        per_absence: 9.0,
                        per_lateness: 3.0,
                    }),
                    volunteer: None,
                    bonus: None,
                },
            ],
        }
    }

    pub fn software() -> SchoolConfig {
        let roster = [
            ("국어", 1.0),
            ("수학", 2.0),
            ("영어", 1.0),
            ("사회", 1.0),
            ("도덕", 1.0),
            ("과학", 2.0),
            ("역사", 1.0),
            ("정보", 2.0),
        ];
        SchoolConfig {
            school: School::Software,
            display_name: "대덕소프트웨어마이스터고".into(),
            subject_rule: SubjectRule::FixedRoster {
                subjects: roster
                    .iter()
                    .map(|(name, weight)| RosterSubject {
                        name: (*name).into(),
                        weight: *weight,
                    })
                    .collect(),
            },
            banned_keywords: vec![],
            restrict_to_weighted: false,
            promote_lone_terminal: true,
            transfer_targets: None,
            year_free_corrections: Some([100.0 / 80.0, 100.0 / 70.0, 100.0 / 50.0]),
            matching: TokenMatching::Lenient,
            tracks: vec![TrackParams {
                track: Track::General,
                enrolled_weights: [2.0, 2.0, 3.0, 3.0, 10.0, 0.0],
                graduate_weights: [2.0, 2.0, 3.0, 3.0, 5.0, 5.0],
                target_sum: 20.0,
                course_scale: 0.8,
                course_max: 80.0,
                equivalency: EquivalencyRule {
                    bounds: [98.0, 94.0, 90.0, 86.0],
                    scale: 20.0,
                    max: 100.0,
                },
                attendance: Some(AttendanceRule::ConvertedAbsences {
                    max: 10.0,
                    per_absence: 2.0,
                    lateness_per_absence: 3,
                    absence_cap: 5,
                }),
                volunteer: Some(VolunteerRule {
                    enrolled: software_volunteer_eras(),
                    graduate: software_volunteer_eras(),
                    max: 6.0,
                }),
                bonus: Some(BonusRule {
                    leadership_points: 2.0,
                    leadership_max: 2.0,
                    career_points: None,
                    award_points: 1.0,
                    award_max: 2.0,
                }),
            }],
        }
    }

    pub fn semiconductor() -> SchoolConfig {
        SchoolConfig {
            school: School::Semiconductor,
            display_name: "한국반도체마이스터고".into(),
            subject_rule: SubjectRule::WeightedFlag { factor: 1.5 },
            banned_keywords: vec!["음악".into(), "미술".into(), "체육".into()],
            restrict_to_weighted: false,
            promote_lone_terminal: true,
            transfer_targets: Some([2, 3, 2]),
            year_free_corrections: None,
            matching: TokenMatching::Lenient,
            tracks: vec![TrackParams {
                track: Track::General,
                enrolled_weights: [2.0, 2.0, 4.0, 4.0, 8.0, 0.0],
                graduate_weights: [2.0, 2.0, 4.0, 4.0, 4.0, 4.0],
                target_sum: 20.0,
                course_scale: 1.0,
                course_max: 100.0,
                equivalency: EquivalencyRule {
                    bounds: [95.0, 90.0, 85.0, 80.0],
                    scale: 20.0,
                    max: 100.0,
                },
                attendance: Some(AttendanceRule::Linear {
                    max: 46.0,
                    per_absence: 6.0,
                    per_lateness: 2.0,
                }),
                volunteer: Some(VolunteerRule {
                    enrolled: vec![VolunteerEra {
                        min_year: i32::MIN,
                        tiers: vec![
                            VolunteerTier {
                                min_hours: 10.0,
                                points: 3.0,
                            },
                            VolunteerTier {
                                min_hours: 7.0,
                                points: 2.0,
                            },
                        ],
                        floor_points: 1.0,
                    }],
                    graduate: vec![
                        VolunteerEra {
                            min_year: 2023,
                            tiers: vec![
                                VolunteerTier {
                                    min_hours: 10.0,
                                    points: 3.0,
                                },
                                VolunteerTier {
                                    min_hours: 7.0,
                                    points: 2.0,
                                },
                            ],
                            floor_points: 1.0,
                        },
                        VolunteerEra {
                            min_year: 2021,
                            tiers: vec![
                                VolunteerTier {
                                    min_hours: 5.0,
                                    points: 3.0,
                                },
                                VolunteerTier {
                                    min_hours: 3.0,
                                    points: 2.0,
                                },
                            ],
                            floor_points: 1.0,
                        },
                        // Hours before the digital record era score flat.
                        VolunteerEra {
                            min_year: i32::MIN,
                            tiers: vec![],
                            floor_points: 3.0,
                        },
                    ],
                    max: 9.0,
                }),
                bonus: Some(BonusRule {
                    leadership_points: 2.0,
                    leadership_max: 6.0,
                    career_points: Some(3.0),
                    award_points: 2.0,
                    award_max: 6.0,
                }),
            }],
        }
    }
}

fn software_volunteer_eras() -> Vec<VolunteerEra> {
    vec![
        VolunteerEra {
            min_year: 2024,
            tiers: vec![
                VolunteerTier {
                    min_hours: 10.0,
                    points: 2.0,
                },
                VolunteerTier {
                    min_hours: 7.0,
                    points: 1.6,
                },
            ],
            floor_points: 1.2,
        },
        VolunteerEra {
            min_year: i32::MIN,
            tiers: vec![
                VolunteerTier {
                    min_hours: 10.0,
                    points: 1.0,
                },
                VolunteerTier {
                    min_hours: 7.0,
                    points: 0.8,
                },
            ],
            floor_points: 0.6,
        },
    ]
}
