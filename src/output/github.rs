//! GitHub Actions workflow-command annotations.

use crate::model::AnalysisResult;
use crate::output::{ErrorFormatter, exit_code};
use crate::paths::FuzzyPathResolver;
use std::io::Write;

/// Emits one `::error` workflow command per diagnostic so GitHub renders
/// them inline on the pull request.
pub struct GithubFormatter {
    resolver: FuzzyPathResolver,
}

impl GithubFormatter {
    pub fn new(resolver: FuzzyPathResolver) -> Self {
        Self { resolver }
    }
}

impl ErrorFormatter for GithubFormatter {
    fn format_errors<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
    ) -> std::io::Result<i32> {
        for diagnostic in result.file_diagnostics() {
            let Some(file_path) = diagnostic.file_path.as_deref() else {
                continue;
            };
            let file = self.resolver.resolve(file_path);
            let line = diagnostic
                .line
                .map(|line| line.to_string())
                .unwrap_or_default();
            writeln!(
                writer,
                "::error file={},line={},col=0::{}",
                escape_property(&file),
                line,
                escape_data(&diagnostic.message)
            )?;
        }
        for diagnostic in result.generic_diagnostics() {
            writeln!(writer, "::error ::{}", escape_data(&diagnostic.message))?;
        }
        Ok(exit_code(result))
    }
}

/// Command data escaping: a message with embedded newlines must stay one
/// directive line.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Property values additionally escape the command delimiters.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Diagnostic;

    fn render(result: &AnalysisResult) -> (String, i32) {
        let formatter = GithubFormatter::new(FuzzyPathResolver::new(vec!["/data".to_string()], '/'));
        let mut sink = Vec::new();
        let code = formatter.format_errors(result, &mut sink).unwrap();
        (String::from_utf8(sink).unwrap(), code)
    }

    #[test]
    fn test_file_error_directive() {
        let result = AnalysisResult::new(
            vec![Diagnostic::new("Foo", "/data/foo.php", Some(4))],
            vec![],
            false,
        )
        .unwrap();
        let (output, code) = render(&result);
        assert_eq!(output, "::error file=foo.php,line=4,col=0::Foo\n");
        assert_eq!(code, 1);
    }

    #[test]
    fn test_generic_error_omits_file_and_line() {
        let result = AnalysisResult::new(
            vec![Diagnostic::generic("first generic error")],
            vec![],
            false,
        )
        .unwrap();
        let (output, _) = render(&result);
        assert_eq!(output, "::error ::first generic error\n");
    }

    #[test]
    fn test_multiline_message_stays_one_directive() {
        let result = AnalysisResult::new(
            vec![Diagnostic::new("Bar\nBar2", "/data/foo.php", Some(5))],
            vec![],
            false,
        )
        .unwrap();
        let (output, _) = render(&result);
        assert_eq!(output, "::error file=foo.php,line=5,col=0::Bar%0ABar2\n");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_percent_escaped_before_newline() {
        let result = AnalysisResult::new(
            vec![Diagnostic::generic("50% done\nhalf")],
            vec![],
            false,
        )
        .unwrap();
        let (output, _) = render(&result);
        assert_eq!(output, "::error ::50%25 done%0Ahalf\n");
    }

    #[test]
    fn test_empty_result_exits_zero() {
        let result = AnalysisResult::new(vec![], vec![], false).unwrap();
        let (output, code) = render(&result);
        assert!(output.is_empty());
        assert_eq!(code, 0);
    }
}
