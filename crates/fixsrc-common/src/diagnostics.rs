use crate::position::Range;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl DiagnosticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        }
    }
}

pub mod diagnostic_codes {
    pub const FIXTURE_ARGUMENT_HAS_NO_SOURCE: u32 = 1041;
}

pub mod diagnostic_messages {
    pub const FIXTURE_ARGUMENT_HAS_NO_SOURCE: &str = "Fixture argument '{0}' does not have a fixture source (if it comes from a collection definition, ensure the definition is in the same assembly as the test)";
}

/// Prefix printed in front of diagnostic codes (`FX1041`).
pub const CODE_PREFIX: &str = "FX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub range: Range,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, range: Range, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            code,
            file: file.into(),
            range,
        }
    }

    /// Code with its printed prefix, e.g. `FX1041`.
    pub fn code_string(&self) -> String {
        format!("{CODE_PREFIX}{}", self.code)
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
