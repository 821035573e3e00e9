// ===== meisterscore/src/scorer/average.rs =====
//! Weighted semester averages over resolved grade points.

use crate::config::{SchoolConfig, SubjectRule};
use crate::record::SubjectRow;
use crate::scorer::grades::map_grade;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SemesterStats {
    pub average: f64,
    /// Subjects that contributed to the average.
    pub counted: usize,
}

/// Weight of one subject line, `None` when the line is excluded.
fn subject_weight(rule: &SubjectRule, name: &str, weighted: bool) -> Option<f64> {
    match rule {
        SubjectRule::Uniform => Some(1.0),
        SubjectRule::WeightedFlag { factor } => {
            Some(if weighted { *factor } else { 1.0 })
        }
        SubjectRule::FixedRoster { subjects } => subjects
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.weight),
    }
}

/// Averages the resolved points of one semester's subject lines.
/// Banned-keyword subjects, unrecognized grade tokens, and (for roster
/// schools) unlisted names are excluded; zero countable lines average 0.
pub fn semester_stats(config: &SchoolConfig, rows: &[SubjectRow]) -> SemesterStats {
    let mut num = 0.0;
    let mut den = 0.0;
    let mut counted = 0;

    for row in rows {
        let name = row.name.trim();
        if config.banned_keywords.iter().any(|k| name.contains(k.as_str())) {
            continue;
        }
        let Some(point) = map_grade(&row.grade, config.matching) else {
            continue;
        };
        let Some(weight) = subject_weight(&config.subject_rule, name, row.weighted)
        else {
            continue;
        };
        num += weight * f64::from(point);
        den += weight;
        counted += 1;
    }

    SemesterStats {
        average: if den > 0.0 { num / den } else { 0.0 },
        counted,
    }
}
