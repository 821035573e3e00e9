// ===== meisterscore/src/loader.rs =====
//! CSV roster ingestion for the bulk scoring path.
//!
//! The roster is long-format: one line per fact, keyed by student name.
//! A line may carry a graded subject, a free-semester flag, attendance
//! counts, volunteer hours, bonus inputs, or an equivalency exam score;
//! unrelated columns stay empty. Grade tokens are stored verbatim and
//! resolved at scoring time (the batch path scores them leniently).

use crate::error::MsResult;
use crate::record::{
    ApplicantCategory, ApplicantRecord, EquivalencySubject, SubjectRow, Track,
};
use crate::semester::Semester;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct NamedRecord {
    pub name: String,
    pub record: ApplicantRecord,
}

#[derive(Debug, Default, Deserialize)]
struct RosterRow {
    student: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    track: Option<String>,
    #[serde(default)]
    semester: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    grade: Option<String>,
    #[serde(default)]
    weighted: Option<String>,
    #[serde(default)]
    free_semester: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    absences: Option<u32>,
    #[serde(default)]
    lateness: Option<u32>,
    #[serde(default)]
    leadership: Option<String>,
    #[serde(default)]
    career_experience: Option<String>,
    #[serde(default)]
    awards: Option<u32>,
    #[serde(default)]
    volunteer_hours: Option<f64>,
    #[serde(default)]
    volunteer_year: Option<i32>,
}

fn parse_flag(value: &Option<String>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "y" | "yes" | "true" | "o"
        ),
        None => false,
    }
}

fn parse_semester(value: &Option<String>, row_idx: usize) -> Option<Semester> {
    let text = value.as_deref()?.trim();
    if text.is_empty() {
        return None;
    }
    match Semester::from_str(text) {
        Ok(sem) => Some(sem),
        Err(_) => {
            warn!(row = row_idx, semester = text, "unknown semester, line skipped");
            None
        }
    }
}

/// Reads a roster from any reader. Students come back in first-appearance
/// order; structural CSV errors abort the load.
pub fn load_roster<R: io::Read>(reader: R) -> MsResult<Vec<NamedRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, ApplicantRecord> = HashMap::new();
    let mut rows_read = 0usize;

    for (row_idx, result) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = result?;
        rows_read += 1;

        let name = row.student.trim().to_string();
        if name.is_empty() {
            debug!(row = row_idx, "row without a student name skipped");
            continue;
        }
        if !by_name.contains_key(&name) {
            order.push(name.clone());
            by_name.insert(name.clone(), ApplicantRecord::default());
        }
        let record = by_name.get_mut(&name).unwrap();

        if let Some(cat) = row.category.as_deref().map(str::trim).filter(|s| !s.is_empty())
        {
            match ApplicantCategory::from_str(cat) {
                Ok(c) => record.category = c,
                Err(_) => warn!(row = row_idx, category = cat, "unknown category"),
            }
        }
        if let Some(track) = row.track.as_deref().map(str::trim).filter(|s| !s.is_empty())
        {
            match Track::from_str(track) {
                Ok(t) => record.track = t,
                Err(_) => warn!(row = row_idx, track, "unknown track"),
            }
        }

        let semester = parse_semester(&row.semester, row_idx);

        if let Some(sem) = semester {
            if parse_flag(&row.free_semester) {
                record.free_semesters.insert(sem);
            }
            if parse_flag(&row.leadership) {
                record.bonus.leadership.insert(sem);
            }
            if row.absences.is_some() || row.lateness.is_some() {
                let att = record.attendance.entry(sem).or_default();
                att.absences += row.absences.unwrap_or(0);
                att.lateness += row.lateness.unwrap_or(0);
            }
            if let Some(hours) = row.volunteer_hours {
                let slot = &mut record.volunteer.years[(sem.year() - 1) as usize];
                slot.hours += hours;
                if let Some(year) = row.volunteer_year {
                    slot.activity_year = year;
                }
            }
            if let (Some(subject), Some(grade)) = (&row.subject, &row.grade) {
                let subject = subject.trim();
                if !subject.is_empty() && !grade.trim().is_empty() {
                    record.subjects.entry(sem).or_default().push(SubjectRow {
                        name: subject.to_string(),
                        grade: grade.trim().to_string(),
                        weighted: parse_flag(&row.weighted),
                    });
                }
            }
        } else if let (Some(subject), Some(score)) = (&row.subject, row.score) {
            // Equivalency exam lines carry a subject and a raw score but
            // no semester.
            let subject = subject.trim();
            if !subject.is_empty() {
                record.equivalency_subjects.push(EquivalencySubject {
                    subject: subject.to_string(),
                    score,
                });
            }
        }

        if parse_flag(&row.career_experience) {
            record.bonus.career_experience = true;
        }
        if let Some(awards) = row.awards {
            record.bonus.awards = awards;
        }
    }

    info!(
        rows = rows_read,
        students = order.len(),
        "roster loaded"
    );

    Ok(order
        .into_iter()
        .map(|name| {
            let record = by_name.remove(&name).unwrap();
            NamedRecord { name, record }
        })
        .collect())
}

pub fn load_roster_from_file<P: AsRef<Path>>(path: P) -> MsResult<Vec<NamedRecord>> {
    info!("loading roster from {}", path.as_ref().display());
    let file = File::open(path.as_ref())?;
    load_roster(io::BufReader::new(file))
}
