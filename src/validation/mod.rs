//! Runtime validation of generated type tables.
//!
//! Cross-checks a registry (or a JSON artifact loaded from disk) against a
//! capability context. Every mismatch is recorded; nothing stops early, so a
//! single run shows the full extent of drift. Used by `gltypes check`.

mod checks;
mod context;
mod warning;

pub use checks::{check_stale_entries, check_type_codes, check_type_info};
pub use context::{CapabilityContext, ConstantTable, TypeTables};
pub use warning::{Diagnostic, Mismatch, MismatchRecord, Severity, ValidationResult};

use crate::output::Printer;

/// Run both table checks against a context.
pub fn validate(tables: &impl TypeTables, context: &impl CapabilityContext) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_type_info(tables, context));
    result.merge(checks::check_type_codes(tables, context));

    result
}

/// Print diagnostics and a closing status line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    eprint!("{}", printer.report(result));
    printer.verdict(result);
}
