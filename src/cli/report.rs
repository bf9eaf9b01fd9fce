//! Report formatting and printing utilities.
//!
//! Separate from the commands so the library can be used without any
//! terminal output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, InitSummary, KeysSummary, RecordsSummary,
    RoutesSummary, TabsSummary, TranslateSummary,
};
use crate::{
    app::{
        mock_data::{Appointment, Document},
        routes::{Route, RouteTarget},
    },
    config::CONFIG_FILE_NAME,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout, with failures on stderr.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    match &result.summary {
        CommandSummary::Translate(summary) => print_translations(summary, verbose, out)?,
        CommandSummary::Keys(summary) => print_keys(summary, verbose, out)?,
        CommandSummary::Check(summary) => print_check(summary, out, err)?,
        CommandSummary::Tabs(summary) => print_tabs(summary, out)?,
        CommandSummary::Routes(summary) => print_routes(summary, out, err)?,
        CommandSummary::Documents(summary) => {
            print_records(summary, "documents", out, format_document)?
        }
        CommandSummary::Appointments(summary) => {
            print_records(summary, "appointments", out, format_appointment)?
        }
        CommandSummary::Init(summary) => print_init(summary, out, err)?,
    }
    Ok(())
}

fn print_translations<W: Write>(
    summary: &TranslateSummary,
    verbose: bool,
    out: &mut W,
) -> io::Result<()> {
    for translation in &summary.translations {
        if verbose && !translation.found {
            writeln!(
                out,
                "{} {}",
                translation.text,
                "(no translation)".dimmed()
            )?;
        } else {
            writeln!(out, "{}", translation.text)?;
        }
    }
    Ok(())
}

fn print_keys<W: Write>(summary: &KeysSummary, verbose: bool, out: &mut W) -> io::Result<()> {
    for key in &summary.keys {
        writeln!(out, "{}", key)?;
    }
    if verbose {
        writeln!(
            out,
            "{}",
            format!("{} keys ({})", summary.keys.len(), summary.locale).dimmed()
        )?;
    }
    Ok(())
}

fn print_check<W: Write, E: Write>(
    summary: &CheckSummary,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    for skipped in &summary.skipped {
        writeln!(err, "{}: {}", "warning".yellow().bold(), skipped)?;
    }

    if summary.missing.is_empty() {
        return writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "All {} configured keys have translations ({})",
                summary.checked, summary.locale
            )
            .green()
        );
    }

    for missing in &summary.missing {
        writeln!(
            out,
            "{} {} ({} '{}') has no translation",
            FAILURE_MARK.red(),
            missing.key.bold(),
            missing.source.as_str(),
            missing.id
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!(
            "{} of {} configured keys are missing translations ({})",
            summary.missing.len(),
            summary.checked,
            summary.locale
        )
        .red()
        .bold()
    )
}

fn print_tabs<W: Write>(summary: &TabsSummary, out: &mut W) -> io::Result<()> {
    let rows: Vec<[&str; 3]> = summary
        .tabs
        .iter()
        .map(|tab| [tab.tab.id, tab.label.as_str(), tab.path.unwrap_or("-")])
        .collect();
    print_table(&rows, out)
}

fn print_routes<W: Write, E: Write>(
    summary: &RoutesSummary,
    out: &mut W,
    err: &mut E,
) -> io::Result<()> {
    match summary {
        RoutesSummary::Table(routes) => {
            let rows: Vec<[String; 3]> = routes.iter().map(route_row).collect();
            let rows: Vec<[&str; 3]> = rows
                .iter()
                .map(|[a, b, c]| [a.as_str(), b.as_str(), c.as_str()])
                .collect();
            print_table(&rows, out)
        }
        RoutesSummary::Resolved { path, route, view } => {
            if *path == route.path {
                writeln!(out, "{} {}", path, view.component())
            } else {
                writeln!(out, "{} -> {} {}", path, route.path, view.component())
            }
        }
        RoutesSummary::Unmatched { path } => {
            writeln!(err, "{} No route matches '{}'", FAILURE_MARK.red(), path)
        }
    }
}

fn route_row(route: &Route) -> [String; 3] {
    let name = route.name.unwrap_or("-").to_string();
    let target = match route.target {
        RouteTarget::View(view) => view.component().to_string(),
        RouteTarget::Redirect(to) => format!("-> {}", to),
    };
    [route.path.to_string(), name, target]
}

/// Print rows with columns padded to their widest cell.
fn print_table<W: Write>(rows: &[[&str; 3]], out: &mut W) -> io::Result<()> {
    let mut widths = [0usize; 3];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (index, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if index + 1 < row.len() {
                line.push_str(&" ".repeat(widths[index] - cell.width() + 2));
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn print_records<T: Serialize + 'static, W: Write>(
    summary: &RecordsSummary<T>,
    label: &str,
    out: &mut W,
    format: fn(&T) -> String,
) -> Result<()> {
    if summary.json {
        let json = serde_json::to_string_pretty(summary.records)
            .with_context(|| format!("Failed to serialize {}", label))?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    for record in summary.records {
        writeln!(out, "{}", format(record))?;
    }
    writeln!(
        out,
        "{}",
        format!(
            "Showing {} of {} {}",
            summary.records.len(),
            summary.total,
            label
        )
        .dimmed()
    )?;
    Ok(())
}

fn format_document(document: &Document) -> String {
    format!(
        "{}  {}\n    {}, {} [{}]",
        document.date,
        document.title.bold(),
        document.doctor,
        document.hospital,
        document.tags.join(", ")
    )
}

fn format_appointment(appointment: &Appointment) -> String {
    format!(
        "{} {}  {}\n    {}, {} [{}]",
        appointment.date,
        appointment.time,
        appointment.title.bold(),
        appointment.user,
        appointment.location,
        appointment.tags.join(", ")
    )
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) -> io::Result<()> {
    if summary.created {
        writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )
    } else {
        writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME)
    }
}
