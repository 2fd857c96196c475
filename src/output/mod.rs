//! Output surfaces for a finalized analysis result.

mod ci;
mod github;
mod json;
mod table;
mod teamcity;

pub use ci::CiFormatter;
pub use github::GithubFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use teamcity::TeamcityFormatter;

use crate::model::AnalysisResult;
use std::io::Write;

/// Exit code signalling a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit code signalling that errors were found.
pub const EXIT_ERRORS: i32 = 1;

/// Exit code for a result: errors (or an internal failure carried on the
/// result) map to [`EXIT_ERRORS`], everything else to [`EXIT_OK`].
pub(crate) fn exit_code(result: &AnalysisResult) -> i32 {
    if result.has_errors() || result.has_internal_error() {
        EXIT_ERRORS
    } else {
        EXIT_OK
    }
}

/// Renders an analysis result onto a caller-owned sink.
///
/// A write failure on the sink is fatal: it aborts the remaining render and
/// propagates unchanged. Formatters otherwise never fail — their job is to
/// faithfully render whatever the result contains.
pub trait ErrorFormatter {
    /// Writes the rendered result to `writer` and returns the process exit
    /// code: [`EXIT_ERRORS`] when errors are present, [`EXIT_OK`] otherwise.
    fn format_errors<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
    ) -> std::io::Result<i32>;
}
