// ===== meisterscore/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use meisterscore::config::SchoolConfig;
use meisterscore::scorer::ScoreBreakdown;
use meisterscore::semester::Semester;

pub fn print_breakdown(config: &SchoolConfig, breakdown: &ScoreBreakdown) {
    println!("\nSchool: {} ({})", config.display_name, config.school);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Component").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
    ]);

    for (label, value, max) in breakdown.components() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:.3}", value)).set_alignment(CellAlignment::Right),
            Cell::new(
                max.map(|m| format!("{:.3}", m))
                    .unwrap_or_else(|| "-".to_string()),
            )
            .set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.3}", breakdown.total))
            .fg(Color::Cyan)
            .set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.3}", breakdown.maxima.total))
            .set_alignment(CellAlignment::Right),
    ]);

    println!("{}", table);

    print_effective_weights(breakdown);

    if breakdown.free_semester_violation {
        println!("⚠️  Free-semester flags span more than one school year.");
        println!("    Scored as entered; the record should be corrected.");
    }
}

fn print_effective_weights(breakdown: &ScoreBreakdown) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let header: Vec<Cell> = Semester::ALL
        .iter()
        .map(|s| Cell::new(s.to_string()).set_alignment(CellAlignment::Center))
        .collect();
    table.add_row(header);

    let weights: Vec<Cell> = Semester::ALL
        .iter()
        .map(|s| {
            let w = breakdown.effective_weights.get(s).copied().unwrap_or(0.0);
            Cell::new(format!("{:.3}", w)).set_alignment(CellAlignment::Right)
        })
        .collect();
    table.add_row(weights);

    println!("Effective weights:");
    println!("{}", table);
}

/// Batch results, highest total first.
pub fn print_batch(config: &SchoolConfig, results: &[(String, ScoreBreakdown)]) {
    println!(
        "\nSchool: {} ({}) — {} applicants",
        config.display_name,
        config.school,
        results.len()
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Student").add_attribute(Attribute::Bold),
        Cell::new("Course"),
        Cell::new("Attend"),
        Cell::new("Volunteer"),
        Cell::new("Bonus"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Flags"),
    ]);

    for (rank, (name, b)) in results.iter().enumerate() {
        let bonus_total =
            b.leadership.unwrap_or(0.0) + b.career.unwrap_or(0.0) + b.awards.unwrap_or(0.0);
        let has_bonus = b.leadership.is_some() || b.career.is_some() || b.awards.is_some();
        let flags = if b.free_semester_violation { "⚠" } else { "" };

        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(name),
            Cell::new(format!("{:.3}", b.course)).set_alignment(CellAlignment::Right),
            optional_cell(b.attendance),
            optional_cell(b.volunteer),
            optional_cell(has_bonus.then_some(bonus_total)),
            Cell::new(format!("{:.3}", b.total))
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
            Cell::new(flags),
        ]);
    }

    println!("{}", table);
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format!("{:.3}", v)).set_alignment(CellAlignment::Right),
        None => Cell::new("-").set_alignment(CellAlignment::Center),
    }
}
