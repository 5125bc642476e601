//! Output formatting for validation reports.

use crate::validate::{Severity, ValidationReport};
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a validation report in a compiler-diagnostic style:
/// `path: severity[check]: message`, followed by a summary line.
pub fn print_report(path: &Path, report: &ValidationReport, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for diagnostic in &report.diagnostics {
        write!(stdout, "{}: ", path.display())?;

        match diagnostic.severity {
            Severity::Error => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            }
            Severity::Warning => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            }
        }
        write!(stdout, "{}[{}]", diagnostic.severity, diagnostic.check)?;
        stdout.reset()?;

        writeln!(stdout, ": {}", diagnostic.message)?;
    }

    if !report.diagnostics.is_empty() {
        writeln!(stdout)?;
    }

    if report.is_ok() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "ok")?;
        stdout.reset()?;
        writeln!(
            stdout,
            ": {} ({} warning{})",
            path.display(),
            report.warning_count(),
            if report.warning_count() == 1 { "" } else { "s" }
        )?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "failed")?;
        stdout.reset()?;
        writeln!(
            stdout,
            ": {} ({} error{}, {} warning{})",
            path.display(),
            report.error_count(),
            if report.error_count() == 1 { "" } else { "s" },
            report.warning_count(),
            if report.warning_count() == 1 { "" } else { "s" }
        )?;
    }

    Ok(())
}
