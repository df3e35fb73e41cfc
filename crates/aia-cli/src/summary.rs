use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use aia_package::{ArchiveReport, MaterializeOutcome, ProjectLayout};

/// Hex digits of the SHA-256 shown per member.
const DIGEST_PREFIX: usize = 16;

pub fn print_outcome(layout: &ProjectLayout, outcome: &MaterializeOutcome) {
    println!("Project: {}", layout.project_dir().display());
    for path in &outcome.written {
        let shown = path.strip_prefix(layout.repo_root()).unwrap_or(path);
        println!("Wrote: {}", shown.display());
    }
    print_archive(&outcome.archive);
}

pub fn print_archive(report: &ArchiveReport) {
    println!("Archive: {}", report.path.display());
    println!("{}", archive_table(report));
}

pub fn archive_table(report: &ArchiveReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Member"),
        header_cell("Bytes"),
        header_cell("SHA-256"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for entry in &report.entries {
        let digest = entry.sha256.get(..DIGEST_PREFIX).unwrap_or(&entry.sha256);
        table.add_row(vec![
            Cell::new(&entry.name),
            Cell::new(entry.size),
            Cell::new(digest).fg(Color::DarkGrey),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!("TOTAL ({} members)", report.entries.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total_size()).add_attribute(Attribute::Bold),
        Cell::new("-").fg(Color::DarkGrey),
    ]);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
