//! Bordered terminal tables, one per file, plus the status footer.

use crate::env::{Environment, SystemEnv};
use crate::model::{AnalysisResult, Diagnostic};
use crate::output::{ErrorFormatter, exit_code};
use crate::paths::FuzzyPathResolver;
use crate::text::{display_width, wrap};
use std::io::Write;

/// Width assumed when the `COLUMNS` variable is unset or not a number.
const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Cells not available to message text on a table line: the outer margins
/// and the padding around both columns.
const TABLE_OVERHEAD: usize = 5;

/// Human-readable output: a two-column bordered table per file, an extra
/// table for generic errors, and an `[OK]`/`[ERROR]` status block.
///
/// The exact layout (border characters, padding, header text, footer
/// phrasing) is a compatibility surface; consumers snapshot it byte for
/// byte.
pub struct TableFormatter<E = SystemEnv> {
    resolver: FuzzyPathResolver,
    editor_url: Option<String>,
    env: E,
}

impl TableFormatter<SystemEnv> {
    pub fn new(resolver: FuzzyPathResolver, editor_url: Option<String>) -> Self {
        Self::with_env(resolver, editor_url, SystemEnv)
    }
}

impl<E: Environment> TableFormatter<E> {
    /// Builds a formatter reading terminal width from `env` instead of the
    /// process environment.
    pub fn with_env(resolver: FuzzyPathResolver, editor_url: Option<String>, env: E) -> Self {
        Self {
            resolver,
            editor_url,
            env,
        }
    }

    fn terminal_width(&self) -> usize {
        self.env
            .var("COLUMNS")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_TERMINAL_WIDTH)
    }

    /// Physical table rows for one file's diagnostics: messages split on
    /// embedded newlines and soft-wrapped, the line label only on the first
    /// row of each diagnostic.
    fn diagnostic_rows(
        &self,
        diagnostics: &[&Diagnostic],
        line_header: &str,
        usable_width: usize,
    ) -> Vec<(String, String)> {
        let label_width = diagnostics
            .iter()
            .map(|diagnostic| display_width(&label_for(diagnostic)))
            .fold(display_width(line_header), usize::max);
        let wrap_width = usable_width.saturating_sub(TABLE_OVERHEAD + label_width);

        let mut rows = Vec::new();
        for diagnostic in diagnostics {
            let mut lines: Vec<String> = diagnostic
                .message
                .split('\n')
                .flat_map(|line| wrap(line, wrap_width))
                .collect();
            if let (Some(template), Some(origin)) = (&self.editor_url, diagnostic.origin_path()) {
                lines.push(format!(
                    "✏️  {}",
                    substitute_editor_url(template, origin, diagnostic.line)
                ));
            }
            let label = label_for(diagnostic);
            for (index, line) in lines.into_iter().enumerate() {
                let label = if index == 0 { label.clone() } else { String::new() };
                rows.push((label, line));
            }
        }
        rows
    }

    /// Rows for label-less tables (generic errors, warnings).
    fn plain_rows<'a, I>(&self, messages: I, usable_width: usize) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wrap_width = usable_width.saturating_sub(TABLE_OVERHEAD);
        messages
            .into_iter()
            .flat_map(|message| message.split('\n'))
            .flat_map(|line| wrap(line, wrap_width))
            .map(|line| (String::new(), line))
            .collect()
    }
}

impl<E: Environment> ErrorFormatter for TableFormatter<E> {
    fn format_errors<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
    ) -> std::io::Result<i32> {
        if !result.has_errors() && !result.has_warnings() {
            writeln!(writer)?;
            writeln!(writer, " [OK] No errors")?;
            writeln!(writer)?;
            return Ok(exit_code(result));
        }

        let usable_width = self.terminal_width().saturating_sub(2);
        let mut tables = 0;

        for (display_path, group) in group_by_file(&self.resolver, result.file_diagnostics()) {
            let rows = self.diagnostic_rows(&group, "Line", usable_width);
            render_table(writer, "Line", &display_path, &rows)?;
            writeln!(writer)?;
            tables += 1;
        }

        if !result.generic_diagnostics().is_empty() {
            let messages = result
                .generic_diagnostics()
                .iter()
                .map(|diagnostic| diagnostic.message.as_str());
            let rows = self.plain_rows(messages, usable_width);
            render_table(writer, "", "Error", &rows)?;
            writeln!(writer)?;
            tables += 1;
        }

        if !result.warnings().is_empty() {
            let messages = result.warnings().iter().map(String::as_str);
            let rows = self.plain_rows(messages, usable_width);
            render_table(writer, "", "Warning", &rows)?;
            writeln!(writer)?;
            tables += 1;
        }

        // Each table already left one trailing blank line; a lone table gets
        // a second so the status block always sits in its own paragraph.
        if tables < 2 {
            writeln!(writer)?;
        }

        if result.has_errors() {
            let count = result.total_error_count();
            let noun = if count == 1 { "error" } else { "errors" };
            writeln!(writer, " [ERROR] Found {count} {noun}")?;
            writeln!(writer)?;
        } else {
            let count = result.warnings().len();
            let noun = if count == 1 { "warning" } else { "warnings" };
            writeln!(writer, " [WARNING] Found {count} {noun}")?;
            writeln!(writer)?;
        }
        Ok(exit_code(result))
    }
}

fn label_for(diagnostic: &Diagnostic) -> String {
    diagnostic.line.map(|line| line.to_string()).unwrap_or_default()
}

/// Groups file diagnostics by resolved display path, first-seen file order,
/// original order within a file.
fn group_by_file<'a>(
    resolver: &FuzzyPathResolver,
    diagnostics: &'a [Diagnostic],
) -> Vec<(String, Vec<&'a Diagnostic>)> {
    let mut groups: Vec<(String, Vec<&Diagnostic>)> = Vec::new();
    for diagnostic in diagnostics {
        let Some(file_path) = diagnostic.file_path.as_deref() else {
            continue;
        };
        let display = resolver.resolve(file_path);
        match groups.iter_mut().find(|(path, _)| *path == display) {
            Some((_, group)) => group.push(diagnostic),
            None => groups.push((display, vec![diagnostic])),
        }
    }
    groups
}

fn substitute_editor_url(template: &str, origin: &str, line: Option<u32>) -> String {
    let line = line.map(|line| line.to_string()).unwrap_or_default();
    template.replace("%file%", origin).replace("%line%", &line)
}

/// Writes one bordered two-column table. Column widths are the maximum
/// display width of that table's own cells; other tables size independently.
fn render_table<W: Write>(
    writer: &mut W,
    line_header: &str,
    title: &str,
    rows: &[(String, String)],
) -> std::io::Result<()> {
    let label_width = rows
        .iter()
        .map(|(label, _)| display_width(label))
        .fold(display_width(line_header), usize::max);
    let text_width = rows
        .iter()
        .map(|(_, text)| display_width(text))
        .fold(display_width(title), usize::max);

    let border = format!(
        " {} {}",
        "-".repeat(label_width + 2),
        "-".repeat(text_width + 2)
    );
    writeln!(writer, "{border}")?;
    write_row(writer, line_header, title, label_width)?;
    writeln!(writer, "{border}")?;
    for (label, text) in rows {
        write_row(writer, label, text, label_width)?;
    }
    writeln!(writer, "{border}")
}

fn write_row<W: Write>(
    writer: &mut W,
    label: &str,
    text: &str,
    label_width: usize,
) -> std::io::Result<()> {
    let row = format!("  {}   {}", pad(label, label_width), text);
    writeln!(writer, "{}", row.trim_end())
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(fill))
}
