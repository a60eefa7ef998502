/*
 * renders collected diagnostics as annotated source excerpts
 */

use super::{Diagnostic, DiagnosticKind};
use crate::text::SourceText;
use termion::color::{Fg, Red, Reset, Yellow};


/// How many characters of the offending line to keep on each side of the
/// highlighted span
const CONTEXT_CHARS: usize = 8;

pub struct DiagnosticsPrinter<'a> {
    text: &'a SourceText,
    diagnostics: &'a [Diagnostic],
}

impl <'a> DiagnosticsPrinter<'a> {
    pub fn new(text: &'a SourceText, diagnostics: &'a [Diagnostic]) -> Self {
        Self {
            text,
            diagnostics,
        }
    }

    pub fn print(&self) {
        for diagnostic in self.diagnostics {
            println!("{}", self.render(diagnostic));
        }
    }

    /// One diagnostic as four lines: the clipped source line with the span
    /// coloured by kind, a caret underline, and the message tagged with
    /// its (line:column) position
    ///
    /// ```text
    /// write(x + 1)
    ///       ^
    ///       |
    ///       +-- message here (1:7)
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let line_index = self.text.line_index(diagnostic.span.start);
        let line = self.text.fetch_line(line_index);
        let column = diagnostic.span.start - self.text.line_start(line_index);

        let span_start = column.min(line.len());
        let span_end = (column + diagnostic.span.length()).min(line.len());
        let window_start = span_start.saturating_sub(CONTEXT_CHARS);
        let window_end = (span_end + CONTEXT_CHARS).min(line.len());

        let colour = match diagnostic.kind {
            DiagnosticKind::Error => format!("{}", Fg(Red)),
            DiagnosticKind::Warning => format!("{}", Fg(Yellow)),
        };

        let mut rendered = String::new();

        rendered.push_str(&line[window_start..span_start]);
        rendered.push_str(&colour);
        rendered.push_str(&line[span_start..span_end]);
        rendered.push_str(&format!("{}", Fg(Reset)));
        rendered.push_str(&line[span_end..window_end]);
        rendered.push('\n');

        let indent = " ".repeat(span_start - window_start);
        rendered.push_str(&format!("{}{}\n", indent, "^".repeat(diagnostic.span.length())));
        rendered.push_str(&format!("{}|\n", indent));
        rendered.push_str(&format!("{}+-- {} ({}:{})", indent, diagnostic.message, line_index + 1, column + 1));

        rendered
    }
}
