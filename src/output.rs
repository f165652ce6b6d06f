//! Terminal output for the gltypes CLI.
//!
//! Status lines have a right-aligned coloured verb, the way cargo prints
//! them. Everything here goes to stderr so stdout only ever carries the
//! artifact or the listing.

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity, ValidationResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width of the verb column ("  Generating").
const VERB_WIDTH: usize = 12;

/// Stderr status printer; colour only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Progress or completion, e.g. "  Generating 22 types (js)".
    pub fn status(&self, verb: &str, message: &str) {
        self.emit_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit_line(RED, verb, message);
    }

    /// Highlight a path or a type name.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    /// `error[code]: message` with an indented `help:` line when present.
    pub fn diagnostic(&self, d: &Diagnostic) -> String {
        let color = match d.severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        };
        let label = if self.color {
            format!("{BOLD}{color}{}{RESET}", d.severity)
        } else {
            d.severity.to_string()
        };

        let mut out = format!("  {}[{}]: {}\n", label, d.code, d.message);
        if let Some(help) = &d.help {
            let _ = writeln!(out, "    help: {}", help);
        }
        out
    }

    /// Every diagnostic, then the distinct mismatched constants.
    pub fn report(&self, result: &ValidationResult) -> String {
        let mut out: String = result.iter().map(|d| self.diagnostic(d)).collect();

        let mismatches = result.mismatches();
        if !mismatches.is_empty() {
            out.push('\n');
            for m in &mismatches {
                let _ = writeln!(out, "  {}", m);
            }
        }
        out
    }

    /// Closing status line for a validation run.
    pub fn verdict(&self, result: &ValidationResult) {
        let errors = result.error_count();
        let warnings = result.warning_count();

        if errors > 0 {
            self.error(
                "Failed",
                &format!(
                    "{}, {}, {} mismatched",
                    plural(errors, "error", "errors"),
                    plural(warnings, "warning", "warnings"),
                    plural(result.mismatches().len(), "constant", "constants")
                ),
            );
        } else if warnings > 0 {
            self.warning("Passed", &plural(warnings, "warning", "warnings"));
        } else {
            self.status("Passed", "tables match the context");
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit_line(&self, color: &str, verb: &str, message: &str) {
        let _ = writeln!(io::stderr().lock(), "{}", self.line(color, verb, message));
    }
}

/// `plural(1, "type", "types")` is "1 type".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(r) if r.as_os_str().is_empty() => ".".to_string(),
        Some(r) => r.display().to_string(),
        None => path.display().to_string(),
    }
}
