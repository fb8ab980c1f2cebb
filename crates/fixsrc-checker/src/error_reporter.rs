//! Findings to positioned diagnostics.

use crate::finding::Finding;
use fixsrc_common::Diagnostic;
use fixsrc_common::diagnostics::{diagnostic_codes, diagnostic_messages, format_message};

pub fn finding_to_diagnostic(file: &str, finding: &Finding) -> Diagnostic {
    Diagnostic::error(
        file,
        finding.range,
        format_message(
            diagnostic_messages::FIXTURE_ARGUMENT_HAS_NO_SOURCE,
            &[&finding.parameter_name],
        ),
        diagnostic_codes::FIXTURE_ARGUMENT_HAS_NO_SOURCE,
    )
}

pub fn report_findings(file: &str, findings: &[Finding]) -> Vec<Diagnostic> {
    findings
        .iter()
        .map(|finding| finding_to_diagnostic(file, finding))
        .collect()
}
