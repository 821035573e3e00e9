// ===== meisterscore/src/scorer/attendance.rs =====
//! Attendance score from cumulative absence and lateness counts.
//! Only semesters that carry base weight for the applicant's category
//! count; an enrolled applicant's unrecorded final semester never
//! penalizes.

use crate::config::{AttendanceRule, TrackParams};
use crate::record::{ApplicantCategory, AttendanceRow};
use crate::semester::Semester;
use std::collections::BTreeMap;

pub fn attendance_score(
    rule: &AttendanceRule,
    params: &TrackParams,
    category: ApplicantCategory,
    attendance: &BTreeMap<Semester, AttendanceRow>,
) -> f64 {
    let mut absences: u32 = 0;
    let mut lateness: u32 = 0;
    for (sem, row) in attendance {
        if params.base_weight(category, *sem) <= 0.0 {
            continue;
        }
        absences += row.absences;
        lateness += row.lateness;
    }

    match rule {
        AttendanceRule::Linear {
            max,
            per_absence,
            per_lateness,
        } => {
            let score =
                max - per_absence * f64::from(absences) - per_lateness * f64::from(lateness);
            score.max(0.0)
        }
        AttendanceRule::ConvertedAbsences {
            max,
            per_absence,
            lateness_per_absence,
            absence_cap,
        } => {
            let converted = (absences + lateness / lateness_per_absence).min(*absence_cap);
            (max - per_absence * f64::from(converted)).max(0.0)
        }
    }
}
