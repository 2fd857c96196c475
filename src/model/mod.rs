//! The finalized outcome of an analysis run.

mod diagnostic;

pub use diagnostic::Diagnostic;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape violations caught when assembling an [`AnalysisResult`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// A diagnostic with no file anchor must not carry a line number.
    #[error("generic diagnostic must not carry a line number: {message}")]
    GenericWithLine { message: String },
}

/// Everything the analysis engine found, fully populated before any
/// formatter sees it. Formatters treat it as read-only; nothing here is
/// mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    file_diagnostics: Vec<Diagnostic>,
    generic_diagnostics: Vec<Diagnostic>,
    warnings: Vec<String>,
    has_internal_error: bool,
    peak_memory_bytes: Option<u64>,
}

impl AnalysisResult {
    /// Partitions `diagnostics` into file-anchored and generic sequences,
    /// preserving discovery order within each.
    pub fn new(
        diagnostics: Vec<Diagnostic>,
        warnings: Vec<String>,
        has_internal_error: bool,
    ) -> Result<Self, ModelError> {
        let mut file_diagnostics = Vec::new();
        let mut generic_diagnostics = Vec::new();
        for diagnostic in diagnostics {
            if diagnostic.is_generic() {
                if diagnostic.line.is_some() {
                    return Err(ModelError::GenericWithLine {
                        message: diagnostic.message,
                    });
                }
                generic_diagnostics.push(diagnostic);
            } else {
                file_diagnostics.push(diagnostic);
            }
        }
        Ok(Self {
            file_diagnostics,
            generic_diagnostics,
            warnings,
            has_internal_error,
            peak_memory_bytes: None,
        })
    }

    /// Attaches opaque peak-memory metadata. Not rendered by this crate.
    pub fn with_peak_memory(mut self, bytes: u64) -> Self {
        self.peak_memory_bytes = Some(bytes);
        self
    }

    pub fn file_diagnostics(&self) -> &[Diagnostic] {
        &self.file_diagnostics
    }

    pub fn generic_diagnostics(&self) -> &[Diagnostic] {
        &self.generic_diagnostics
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn total_error_count(&self) -> usize {
        self.file_diagnostics.len() + self.generic_diagnostics.len()
    }

    pub fn has_errors(&self) -> bool {
        self.total_error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn has_internal_error(&self) -> bool {
        self.has_internal_error
    }

    pub fn peak_memory_bytes(&self) -> Option<u64> {
        self.peak_memory_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_by_file_anchor() {
        let result = AnalysisResult::new(
            vec![
                Diagnostic::new("a", "/src/a.php", Some(1)),
                Diagnostic::generic("config broken"),
                Diagnostic::new("b", "/src/b.php", None),
            ],
            vec![],
            false,
        )
        .unwrap();

        assert_eq!(result.file_diagnostics().len(), 2);
        assert_eq!(result.generic_diagnostics().len(), 1);
        assert_eq!(result.total_error_count(), 3);
        assert!(result.has_errors());
    }

    #[test]
    fn test_rejects_generic_diagnostic_with_line() {
        let mut bad = Diagnostic::generic("boom");
        bad.line = Some(3);
        let result = AnalysisResult::new(vec![bad], vec![], false);
        assert!(matches!(result, Err(ModelError::GenericWithLine { .. })));
    }

    #[test]
    fn test_empty_result_has_no_errors() {
        let result = AnalysisResult::new(vec![], vec![], false).unwrap();
        assert!(!result.has_errors());
        assert!(!result.has_warnings());
        assert_eq!(result.total_error_count(), 0);
    }
}
