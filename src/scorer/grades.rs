// ===== meisterscore/src/scorer/grades.rs =====
//! Grade token to achievement point conversion.
//!
//! Two tiers exist because the interactive entry forms only ever emit the
//! paired tokens, while bulk spreadsheet uploads arrive with whatever the
//! sending school typed. `Strict` accepts the canonical table; `Lenient`
//! additionally folds letter case and accepts the bare Korean descriptors.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TokenMatching {
    #[default]
    Strict,
    Lenient,
}

/// Maps a grade token to its 5..1 point value, `None` when the token is
/// empty or unrecognized. `P`/`F` lines carry no point value in any mode.
pub fn map_grade(token: &str, matching: TokenMatching) -> Option<u8> {
    let t = token.trim();
    if t.is_empty() {
        return None;
    }
    match matching {
        TokenMatching::Strict => paired_or_letter(t),
        TokenMatching::Lenient => {
            let upper = t.to_uppercase();
            paired_or_letter(&upper).or_else(|| bare_descriptor(&upper))
        }
    }
}

// Canonical table: paired 5-level, paired 3-level, plain letters.
fn paired_or_letter(t: &str) -> Option<u8> {
    match t {
        "A/수" | "A/우수" | "A" => Some(5),
        "B/우" | "B/보통" | "B" => Some(4),
        "C/미" | "C/미흡" | "C" => Some(3),
        "D/양" | "D" => Some(2),
        "E/가" | "E" => Some(1),
        _ => None,
    }
}

fn bare_descriptor(t: &str) -> Option<u8> {
    match t {
        "수" | "우수" => Some(5),
        "우" | "보통" => Some(4),
        "미" | "미흡" => Some(3),
        "양" => Some(2),
        "가" => Some(1),
        _ => None,
    }
}
