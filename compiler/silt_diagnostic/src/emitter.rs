//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostics, Message, Severity, SourceDocument};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const INFO: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes messages as
///
/// ```text
/// error[E0001]: invalid character '$'
///   --> calc.txt:1:3
///   |
/// 1 | a $ b
///   |   ^
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Info => colors::INFO,
        };
        self.write_colored(&severity.to_string(), color);
    }

    /// Header and location lines only.
    pub fn emit(&mut self, message: &Message) {
        self.write_severity(message.severity);
        self.write_colored(&format!("[{}]", message.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", message.text);
        self.write_colored("  --> ", colors::GUTTER);
        let _ = writeln!(self.writer, "{}:{}", message.filename, message.range.start);
    }

    /// Header, location and the offending source line with a caret underline.
    pub fn emit_with_source(&mut self, message: &Message, document: &SourceDocument) {
        self.emit(message);
        let line = message.range.start.line;
        let Some(text) = document.line_text(line) else {
            let _ = writeln!(self.writer);
            return;
        };
        let number = line.to_string();
        let pad = " ".repeat(number.len());
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{number} | "), colors::GUTTER);
        let _ = writeln!(self.writer, "{text}");
        self.write_colored(&format!("{pad} | "), colors::GUTTER);

        let start = message.range.start.column.saturating_sub(1) as usize;
        let width = if message.range.end.line == line {
            (message.range.end.column.saturating_sub(message.range.start.column) as usize).max(1)
        } else {
            text.chars().count().saturating_sub(start).max(1)
        };
        let _ = write!(self.writer, "{}", " ".repeat(start));
        let color = match message.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Info => colors::INFO,
        };
        self.write_colored(&"^".repeat(width), color);
        let _ = writeln!(self.writer);
        let _ = writeln!(self.writer);
    }

    pub fn emit_all(&mut self, messages: &Diagnostics) {
        for message in messages {
            self.emit(message);
        }
    }

    /// Emit every message of `document` in position order, with source excerpts.
    pub fn emit_document(&mut self, document: &SourceDocument) {
        for message in document.messages().sorted_by_position() {
            self.emit_with_source(message, document);
        }
    }

    pub fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = writeln!(
                self.writer,
                ": {error_count} error{} and {warning_count} warning{} reported",
                plural_s(error_count),
                plural_s(warning_count)
            );
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} reported",
                plural_s(warning_count)
            );
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
