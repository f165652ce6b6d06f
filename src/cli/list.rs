//! List command implementation.
//!
//! Prints the registry as a table on stdout.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::TypeRegistry;
use crate::types::TypeDescriptor;

/// Print the registry, one type per line
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list opaque sampler types
    #[arg(long)]
    pub samplers: bool,
}

const HEADER: [&str; 8] = [
    "CODE", "NAME", "ELEMENT", "N", "ATTRS", "BYTES", "STORAGE", "SETTER",
];

fn row(d: &TypeDescriptor) -> [String; 8] {
    [
        d.code.hex(),
        d.name.to_string(),
        d.element_type.to_string(),
        d.element_count.to_string(),
        d.attribute_slots.to_string(),
        d.byte_size.to_string(),
        d.storage.typed_array().to_string(),
        d.setter_name().unwrap_or_else(|| "-".to_string()),
    ]
}

/// Render rows as left-aligned columns.
fn tabulate(rows: &[[String; 8]]) -> String {
    let mut widths = HEADER.map(str::len);
    for r in rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = HEADER.map(str::to_string);
    for r in std::iter::once(&header).chain(rows) {
        let line: Vec<String> = r
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let registry = TypeRegistry::webgl1()?;

    let rows: Vec<[String; 8]> = if args.samplers {
        registry.samplers().map(row).collect()
    } else {
        registry.descriptors().map(row).collect()
    };

    print!("{}", tabulate(&rows));
    printer.info("Listed", &plural(rows.len(), "type", "types"));

    Ok(())
}
