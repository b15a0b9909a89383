//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! When the emitter knows the source text, each label is rendered with the
//! line it points into, trimmed to a window of `context_padding` characters
//! on each side of the span:
//!
//! ```text
//! error[E6003]: cannot divide by zero
//!  --> stdin:1:9
//!   |
//! 1 | print 1 / 0;
//!   |         ^ here
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use tarn_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

const ELLIPSIS: &str = "...";

/// When to emit ANSI colors, as chosen by `--color=<mode>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Decide whether to color; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=<mode>` flag.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always or never)"
            )),
        }
    }
}

/// The closing line after a batch of diagnostics, if there is anything to say.
fn summary_message(errors: usize, warnings: usize) -> Option<(Severity, String)> {
    let warned = match warnings {
        0 => None,
        1 => Some("1 warning emitted".to_string()),
        n => Some(format!("{n} warnings emitted")),
    };
    if errors == 0 {
        return warned.map(|text| (Severity::Warning, text));
    }
    let mut text = match errors {
        1 => "aborting due to previous error".to_string(),
        n => format!("aborting due to {n} previous errors"),
    };
    if let Some(warned) = warned {
        text.push_str("; ");
        text.push_str(&warned);
    }
    Some((Severity::Error, text))
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => colors::ERROR,
        Severity::Warning => colors::WARNING,
    }
}

/// One rendered source line around a label.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Snippet {
    line: u32,
    col: u32,
    /// Window text, with ellipses where the line was cut.
    text: String,
    /// Character column (0-based) of the span within `text`.
    marker_start: usize,
    /// Number of marker characters, at least 1.
    marker_len: usize,
}

impl Snippet {
    /// Cut the line containing `span.start` down to the span plus `padding`
    /// characters either side. `None` keeps the whole line.
    fn build(source: &str, table: &LineOffsetTable, span: Span, padding: Option<usize>) -> Self {
        let start = (span.start as usize).min(source.len());
        let (line, col) = table.offset_to_line_col(source, span.start);
        let line_range = table
            .line_range(source, line)
            .unwrap_or(start..source.len());
        let end = (span.end as usize).clamp(start, line_range.end.max(start));

        let before = source.get(line_range.start..start).unwrap_or("");
        let covered = source.get(start..end).unwrap_or("");
        let after = source.get(end..line_range.end).unwrap_or("");

        let (before, cut_left) = match padding {
            Some(pad) => take_last_chars(before, pad),
            None => (before, false),
        };
        let (after, cut_right) = match padding {
            Some(pad) => take_first_chars(after, pad),
            None => (after, false),
        };

        let mut text = String::with_capacity(before.len() + covered.len() + after.len() + 6);
        if cut_left {
            text.push_str(ELLIPSIS);
        }
        text.push_str(before);
        text.push_str(covered);
        text.push_str(after);
        if cut_right {
            text.push_str(ELLIPSIS);
        }

        let marker_start = before.chars().count() + if cut_left { ELLIPSIS.len() } else { 0 };
        Snippet {
            line,
            col,
            text,
            marker_start,
            marker_len: covered.chars().count().max(1),
        }
    }
}

/// The last `n` characters of `s`, and whether anything was cut.
fn take_last_chars(s: &str, n: usize) -> (&str, bool) {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => (&s[idx..], idx > 0),
        _ if n == 0 => ("", !s.is_empty()),
        _ => (s, false),
    }
}

/// The first `n` characters of `s`, and whether anything was cut.
fn take_first_chars(s: &str, n: usize) -> (&str, bool) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
    file_path: Option<String>,
    context_padding: Option<usize>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
            context_padding: None,
        }
    }

    /// Create a terminal emitter for stdout with explicit color mode.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stdout> {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }

    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    /// Render labels against this source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Name shown in `-->` locations.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Show at most `padding` characters either side of each span.
    #[must_use]
    pub fn with_context_padding(mut self, padding: usize) -> Self {
        self.context_padding = Some(padding);
        self
    }

    /// Replace the source text, e.g. for the next REPL line.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Consume the emitter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// `text` wrapped in `color` when coloring is on.
    fn paint(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::GUTTER
        }
    }

    /// `--> 3..4: message`, used when no source text is attached.
    fn bare_label(&self, label: &Label) -> String {
        let marker = if label.is_primary { "-->" } else { "   " };
        let message = self.paint(&label.message, Self::label_color(label));
        format!("  {marker} {:?}: {message}\n", label.span)
    }

    fn snippet_label(&self, source: &str, table: &LineOffsetTable, label: &Label) -> String {
        let snippet = Snippet::build(source, table, label.span, self.context_padding);
        let line_no = snippet.line.to_string();
        let gutter = " ".repeat(line_no.len());
        let bar = self.paint(&format!("{gutter} |"), colors::GUTTER);

        let marker = if label.is_primary { "-->" } else { ":::" };
        let path = self
            .file_path
            .as_deref()
            .map(|path| format!("{path}:"))
            .unwrap_or_default();

        let underline = if label.is_primary { '^' } else { '-' };
        let mut pointer = underline.to_string().repeat(snippet.marker_len);
        if !label.message.is_empty() {
            pointer.push(' ');
            pointer.push_str(&label.message);
        }

        format!(
            "{gutter}{marker} {path}{}:{}\n{bar}\n{} {}\n{bar} {}{}\n",
            snippet.line,
            snippet.col,
            self.paint(&format!("{line_no} |"), colors::GUTTER),
            snippet.text,
            " ".repeat(snippet.marker_start),
            self.paint(&pointer, Self::label_color(label)),
        )
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!(
            "{}{}: {}\n",
            self.paint(diagnostic.severity.as_str(), severity_color(diagnostic.severity)),
            self.paint(&format!("[{}]", diagnostic.code), colors::BOLD),
            diagnostic.message,
        );

        let table = self.source.as_deref().map(LineOffsetTable::build);
        for label in &diagnostic.labels {
            match (self.source.as_deref(), &table) {
                (Some(source), Some(table)) => {
                    out.push_str(&self.snippet_label(source, table, label));
                }
                _ => out.push_str(&self.bare_label(label)),
            }
        }

        for note in &diagnostic.notes {
            out.push_str(&format!("  = {}: {note}\n", self.paint("note", colors::NOTE)));
        }
        for help in &diagnostic.help {
            out.push_str(&format!("  = {}: {help}\n", self.paint("help", colors::HELP)));
        }
        out.push('\n');
        out
    }
}

// Write failures are dropped: stderr going away leaves nowhere to report them.
impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = self.render(diagnostic);
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if let Some((severity, text)) = summary_message(error_count, warning_count) {
            let head = self.paint(severity.as_str(), severity_color(severity));
            let _ = writeln!(self.writer, "{head}: {text}");
        }
    }
}
