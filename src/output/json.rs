//! Machine-readable JSON error report.

use crate::model::AnalysisResult;
use crate::output::{ErrorFormatter, exit_code};
use crate::paths::FuzzyPathResolver;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Serializes totals, per-file messages (keyed by display path) and generic
/// errors as a single JSON document.
pub struct JsonFormatter {
    resolver: FuzzyPathResolver,
}

impl JsonFormatter {
    pub fn new(resolver: FuzzyPathResolver) -> Self {
        Self { resolver }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    totals: JsonTotals,
    files: BTreeMap<String, JsonFileErrors<'a>>,
    errors: Vec<&'a str>,
    warnings: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonTotals {
    errors: usize,
    file_errors: usize,
}

#[derive(Serialize, Default)]
struct JsonFileErrors<'a> {
    errors: usize,
    messages: Vec<JsonMessage<'a>>,
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    message: &'a str,
    line: Option<u32>,
    ignorable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tip: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identifier: Option<&'a str>,
}

impl ErrorFormatter for JsonFormatter {
    fn format_errors<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
    ) -> std::io::Result<i32> {
        let mut files: BTreeMap<String, JsonFileErrors> = BTreeMap::new();
        for diagnostic in result.file_diagnostics() {
            let Some(file_path) = diagnostic.file_path.as_deref() else {
                continue;
            };
            let entry = files.entry(self.resolver.resolve(file_path)).or_default();
            entry.errors += 1;
            entry.messages.push(JsonMessage {
                message: &diagnostic.message,
                line: diagnostic.line,
                ignorable: diagnostic.ignorable,
                tip: diagnostic.tip.as_deref(),
                identifier: diagnostic.identifier.as_deref(),
            });
        }

        let report = JsonReport {
            totals: JsonTotals {
                errors: result.generic_diagnostics().len(),
                file_errors: result.file_diagnostics().len(),
            },
            files,
            errors: result
                .generic_diagnostics()
                .iter()
                .map(|diagnostic| diagnostic.message.as_str())
                .collect(),
            warnings: result.warnings().iter().map(String::as_str).collect(),
        };

        let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(writer, "{json}")?;
        Ok(exit_code(result))
    }
}
