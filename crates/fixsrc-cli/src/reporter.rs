use anyhow::{Context, Result};
use colored::Colorize;
use fixsrc_common::{Diagnostic, DiagnosticCategory};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One line per diagnostic plus a summary line, newline-terminated.
    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for diagnostic in diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
        if !diagnostics.is_empty() {
            out.push('\n');
            out.push_str(&self.format_summary(diagnostics));
            out.push('\n');
        }
        out
    }

    /// `Tests.cs:12:35 - error FX1041: message`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let file = if diagnostic.file.is_empty() {
            "<unknown>"
        } else {
            diagnostic.file.as_str()
        };
        let location = format!("{file}:{}", diagnostic.range.start);
        let category = diagnostic.category.as_str();
        let code = diagnostic.code_string();

        if !self.color {
            return format!(
                "{location} - {category} {code}: {}",
                diagnostic.message_text
            );
        }

        let category = match diagnostic.category {
            DiagnosticCategory::Error => category.red().bold(),
            DiagnosticCategory::Warning => category.yellow().bold(),
            DiagnosticCategory::Suggestion | DiagnosticCategory::Message => category.blue().bold(),
        };
        format!(
            "{} - {category} {}: {}",
            location.cyan(),
            code.dimmed(),
            diagnostic.message_text
        )
    }

    fn format_summary(&self, diagnostics: &[Diagnostic]) -> String {
        let mut files: Vec<&str> = diagnostics.iter().map(|d| d.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();

        let errors = diagnostics.len();
        let noun = if errors == 1 { "error" } else { "errors" };
        let summary = if files.len() == 1 {
            format!("Found {errors} {noun} in {}.", files[0])
        } else {
            format!("Found {errors} {noun} in {} files.", files.len())
        };
        if self.color {
            summary.bold().to_string()
        } else {
            summary
        }
    }
}

/// Diagnostics as a pretty-printed JSON array.
pub fn render_json(diagnostics: &[Diagnostic]) -> Result<String> {
    serde_json::to_string_pretty(diagnostics).context("failed to serialize diagnostics")
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;
