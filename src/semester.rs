// ===== meisterscore/src/semester.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The six middle-school grading periods. Serialized as `"1-1"`..`"3-2"`
/// everywhere (JSON records, CSV rosters, CLI output).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Semester {
    #[strum(serialize = "1-1")]
    #[serde(rename = "1-1")]
    Y1S1,
    #[strum(serialize = "1-2")]
    #[serde(rename = "1-2")]
    Y1S2,
    #[strum(serialize = "2-1")]
    #[serde(rename = "2-1")]
    Y2S1,
    #[strum(serialize = "2-2")]
    #[serde(rename = "2-2")]
    Y2S2,
    #[strum(serialize = "3-1")]
    #[serde(rename = "3-1")]
    Y3S1,
    #[strum(serialize = "3-2")]
    #[serde(rename = "3-2")]
    Y3S2,
}

pub const YEARS: [u8; 3] = [1, 2, 3];

impl Semester {
    pub const ALL: [Semester; 6] = [
        Semester::Y1S1,
        Semester::Y1S2,
        Semester::Y2S1,
        Semester::Y2S2,
        Semester::Y3S1,
        Semester::Y3S2,
    ];

    pub fn year(&self) -> u8 {
        match self {
            Semester::Y1S1 | Semester::Y1S2 => 1,
            Semester::Y2S1 | Semester::Y2S2 => 2,
            Semester::Y3S1 | Semester::Y3S2 => 3,
        }
    }

    /// Stable position in weight tables (`1-1` = 0 .. `3-2` = 5).
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn of_year(year: u8) -> impl Iterator<Item = Semester> {
        Semester::ALL.into_iter().filter(move |s| s.year() == year)
    }
}
