//! TeamCity service-message annotations.

use crate::model::AnalysisResult;
use crate::output::{ErrorFormatter, exit_code};
use crate::paths::FuzzyPathResolver;
use std::io::Write;

const INSPECTION_ID: &str = "verdict";

/// Emits `##teamcity[...]` service messages: one `inspectionType`
/// declaration, then one `inspection` per diagnostic.
pub struct TeamcityFormatter {
    resolver: FuzzyPathResolver,
}

impl TeamcityFormatter {
    pub fn new(resolver: FuzzyPathResolver) -> Self {
        Self { resolver }
    }
}

impl ErrorFormatter for TeamcityFormatter {
    fn format_errors<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
    ) -> std::io::Result<i32> {
        if !result.has_errors() && !result.has_warnings() {
            return Ok(exit_code(result));
        }

        write_service_message(
            writer,
            "inspectionType",
            &[
                ("id", INSPECTION_ID),
                ("name", INSPECTION_ID),
                ("category", INSPECTION_ID),
                ("description", "Static analysis inspection"),
            ],
        )?;

        for diagnostic in result.file_diagnostics() {
            let Some(file_path) = diagnostic.file_path.as_deref() else {
                continue;
            };
            let file = self.resolver.resolve(file_path);
            let line = diagnostic
                .line
                .map(|line| line.to_string())
                .unwrap_or_default();
            let mut attributes = vec![
                ("typeId", INSPECTION_ID),
                ("message", diagnostic.message.as_str()),
                ("file", file.as_str()),
            ];
            if diagnostic.line.is_some() {
                attributes.push(("line", line.as_str()));
            }
            attributes.push(("SEVERITY", "ERROR"));
            write_service_message(writer, "inspection", &attributes)?;
        }

        for diagnostic in result.generic_diagnostics() {
            write_service_message(
                writer,
                "inspection",
                &[
                    ("typeId", INSPECTION_ID),
                    ("message", diagnostic.message.as_str()),
                    ("SEVERITY", "ERROR"),
                ],
            )?;
        }

        for warning in result.warnings() {
            write_service_message(
                writer,
                "inspection",
                &[
                    ("typeId", INSPECTION_ID),
                    ("message", warning.as_str()),
                    ("SEVERITY", "WARNING"),
                ],
            )?;
        }

        Ok(exit_code(result))
    }
}

fn write_service_message<W: Write>(
    writer: &mut W,
    name: &str,
    attributes: &[(&str, &str)],
) -> std::io::Result<()> {
    write!(writer, "##teamcity[{name}")?;
    for (key, value) in attributes {
        write!(writer, " {}='{}'", key, escape(value))?;
    }
    writeln!(writer, "]")
}

/// Single-pass TeamCity value escaping; the pipe is the escape character, so
/// a multi-pass replace would double-escape it.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '|' => escaped.push_str("||"),
            '\'' => escaped.push_str("|'"),
            '\n' => escaped.push_str("|n"),
            '\r' => escaped.push_str("|r"),
            '[' => escaped.push_str("|["),
            ']' => escaped.push_str("|]"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Diagnostic;

    fn render(result: &AnalysisResult) -> (String, i32) {
        let formatter =
            TeamcityFormatter::new(FuzzyPathResolver::new(vec!["/data".to_string()], '/'));
        let mut sink = Vec::new();
        let code = formatter.format_errors(result, &mut sink).unwrap();
        (String::from_utf8(sink).unwrap(), code)
    }

    #[test]
    fn test_file_error_inspection() {
        let result = AnalysisResult::new(
            vec![Diagnostic::new("Foo", "/data/foo.php", Some(4))],
            vec![],
            false,
        )
        .unwrap();
        let (output, code) = render(&result);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "##teamcity[inspectionType id='verdict' name='verdict' category='verdict' \
             description='Static analysis inspection']"
        );
        assert_eq!(
            lines[1],
            "##teamcity[inspection typeId='verdict' message='Foo' file='foo.php' line='4' \
             SEVERITY='ERROR']"
        );
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
        assert!(output.contains(
            "##teamcity[inspection typeId='verdict' message='first generic error' \
             SEVERITY='ERROR']"
        ));
        assert!(!output.contains("file="));
    }

    #[test]
    fn test_escaping_is_single_pass() {
        assert_eq!(escape("a|b"), "a||b");
        assert_eq!(escape("it's [ok]\r\n"), "it|'s |[ok|]|r|n");
        // A pipe produced by escaping a newline must not be escaped again.
        assert_eq!(escape("\n"), "|n");
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
        assert!(output.contains("message='Bar|nBar2'"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_empty_result_writes_nothing() {
        let result = AnalysisResult::new(vec![], vec![], false).unwrap();
        let (output, code) = render(&result);
        assert!(output.is_empty());
        assert_eq!(code, 0);
    }

    #[test]
    fn test_warning_inspection_severity() {
        let result =
            AnalysisResult::new(vec![], vec!["slow rule".to_string()], false).unwrap();
        let (output, code) = render(&result);
        assert!(output.contains("message='slow rule' SEVERITY='WARNING'"));
        assert_eq!(code, 0);
    }
}
