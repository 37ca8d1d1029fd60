use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use enroll_catalog::CatalogIndex;
use enroll_core::ChangeStatus;
use enroll_model::{SelectionStore, Severity, Term, ValidationReport};
use enroll_report::selected_by_term;
use enroll_validate::ExportGate;

pub fn print_catalog(index: &CatalogIndex, selection: &SelectionStore, only: Option<Term>) {
    for bucket in index.terms() {
        if only.is_some_and(|term| term != bucket.term) {
            continue;
        }
        println!("{}", bucket.term.label());
        if bucket.is_empty() {
            println!("  {} 과목 정보가 없습니다.", bucket.term.label());
            continue;
        }
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Group"),
            header_cell(""),
            header_cell("Course"),
            header_cell("ID"),
            header_cell("Selected"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 4, CellAlignment::Right);
        for group in bucket.sorted_groups() {
            for (position, course) in group.sorted_courses().into_iter().enumerate() {
                let group_cell = if position == 0 {
                    group_cell(&group.legend(), group.is_mandatory)
                } else {
                    dim_cell("")
                };
                table.add_row(vec![
                    group_cell,
                    check_cell(selection.contains(&course.id)),
                    Cell::new(course.display_label()),
                    dim_cell(&course.id),
                    if position == 0 && !group.is_mandatory {
                        count_cell(group.selected_count(selection), group.quota)
                    } else {
                        dim_cell("")
                    },
                ]);
            }
        }
        println!("{table}");
    }
}

pub fn print_report(index: &CatalogIndex, selection: &SelectionStore, report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Status"),
        header_cell("Courses"),
        header_cell("Hours"),
        header_cell("Required"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    let selected = selected_by_term(index, selection);
    for term_report in &report.terms {
        let courses = selected
            .iter()
            .find(|ts| ts.term == term_report.term)
            .map_or(0, |ts| ts.courses.len());
        let hours_cell = if term_report.total_hours == term_report.required_hours {
            Cell::new(term_report.total_hours).fg(Color::Green)
        } else {
            Cell::new(term_report.total_hours).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(term_report.term.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            status_cell(term_report.is_valid),
            Cell::new(courses),
            hours_cell,
            Cell::new(term_report.required_hours),
            error_count_cell(term_report.error_count()),
        ]);
    }
    println!("{table}");
    print_message_table(report);
    println!(
        "Export: {}",
        if report.export_enabled {
            "enabled"
        } else {
            "blocked"
        }
    );
    if report.category_gate_gap() {
        println!("Note: a category rule fails but does not block export under the current gate policy.");
    }
}

fn print_message_table(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scope"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for term_report in &report.terms {
        for message in &term_report.messages {
            table.add_row(vec![
                Cell::new(term_report.term.key()),
                severity_cell(message.severity),
                Cell::new(&message.text),
            ]);
        }
    }
    for message in report.global_messages() {
        table.add_row(vec![
            Cell::new("ALL").add_attribute(Attribute::Bold),
            severity_cell(message.severity),
            Cell::new(message.text),
        ]);
    }
    println!();
    println!("Messages:");
    println!("{table}");
}

pub fn print_changes(changes: &[(String, ChangeStatus)]) {
    for (subject, status) in changes {
        let text = match status {
            ChangeStatus::Applied => "updated",
            ChangeStatus::Unchanged => "unchanged",
            ChangeStatus::UnknownCourse => "not in catalog",
            ChangeStatus::MandatoryLocked => "mandatory course, cannot be deselected",
        };
        println!("{subject}: {text}");
    }
}

pub fn print_blocked(gate: &ExportGate) {
    eprintln!("Export blocked. Failing rules:");
    for rule in &gate.blocking {
        eprintln!("- {rule}");
    }
    eprintln!("Use --force to export anyway.");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn group_cell(legend: &str, is_mandatory: bool) -> Cell {
    let cell = Cell::new(legend).add_attribute(Attribute::Bold);
    if is_mandatory {
        cell.fg(Color::DarkGrey)
    } else {
        cell.fg(Color::Blue)
    }
}

fn check_cell(selected: bool) -> Cell {
    if selected {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(selected: u32, quota: u32) -> Cell {
    let cell = Cell::new(format!("{selected}/{quota}"));
    if selected == quota {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn status_cell(is_valid: bool) -> Cell {
    if is_valid {
        Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn error_count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Error => Color::Red,
        Severity::Success => Color::Green,
        Severity::Info => Color::Yellow,
    };
    Cell::new(severity.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
