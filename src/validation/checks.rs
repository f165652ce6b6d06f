//! Validation checks for generated type tables.
//!
//! Each check returns a `ValidationResult` and looks at every entry; none
//! stops at the first problem.

use crate::emit::{Artifact, ArtifactEntry};
use crate::registry::TypeRegistry;
use crate::types::TypeCode;

use super::context::{CapabilityContext, TypeTables};
use super::warning::{Diagnostic, Mismatch, ValidationResult};

/// Every TYPE_INFO entry: the context's constant for the entry's name,
/// as a string, must equal the code as a string.
pub fn check_type_info(
    tables: &impl TypeTables,
    context: &impl CapabilityContext,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (code, name) in tables.type_info() {
        let actual = context.constant_string(name);
        if actual != code.to_string() {
            result.push(
                Diagnostic::error(
                    "gltypes::validate::type-info",
                    format!(
                        "TYPE_INFO: code {} ({}) is named {}, but the context has {} for {}",
                        code,
                        code.hex(),
                        name,
                        actual,
                        name
                    ),
                )
                .with_mismatch(Mismatch {
                    name,
                    expected: code,
                    actual: context.constant(name),
                }),
            );
        }
    }

    result
}

/// Every TYPE_CODES entry: the context's constant must equal the code.
pub fn check_type_codes(
    tables: &impl TypeTables,
    context: &impl CapabilityContext,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (name, code) in tables.type_codes() {
        let actual = context.constant(name);
        if actual != Some(code.value()) {
            let shown = actual.map_or_else(|| "undefined".to_string(), |v| v.to_string());
            result.push(
                Diagnostic::error(
                    "gltypes::validate::type-codes",
                    format!(
                        "TYPE_CODES: context has {} for {}, but TYPE_CODES[{}] is {}",
                        shown, name, name, code
                    ),
                )
                .with_mismatch(Mismatch {
                    name,
                    expected: code,
                    actual,
                }),
            );
        }
    }

    result
}

/// Compare a loaded artifact against what the current registry derives.
///
/// Differences are warnings: the artifact still works, it is just out of
/// date with the generator.
pub fn check_stale_entries(artifact: &Artifact, registry: &TypeRegistry) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (&code, entry) in &artifact.type_info {
        let code = TypeCode(code);
        match registry.get(code) {
            None => result.push(
                Diagnostic::warning(
                    "gltypes::validate::unknown-code",
                    format!("Artifact has code {} ({}) for {}, which the registry does not know", code, code.hex(), entry.name),
                )
                .with_help("Regenerate the artifact with `gltypes generate`"),
            ),
            Some(d) if ArtifactEntry::from(d) != *entry => result.push(
                Diagnostic::warning(
                    "gltypes::validate::stale-entry",
                    format!("Artifact entry for {} ({}) differs from the generated one", entry.name, code.hex()),
                )
                .with_help("Regenerate the artifact with `gltypes generate`"),
            ),
            Some(_) => {}
        }
    }

    for d in registry.descriptors() {
        if !artifact.type_info.contains_key(&d.code.value()) {
            result.push(
                Diagnostic::warning(
                    "gltypes::validate::missing-entry",
                    format!("Artifact has no entry for {} ({})", d.name, d.code.hex()),
                )
                .with_help("Regenerate the artifact with `gltypes generate`"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn registry() -> TypeRegistry {
        TypeRegistry::webgl1().unwrap()
    }

    fn full_context(registry: &TypeRegistry) -> HashMap<String, u32> {
        registry
            .descriptors()
            .map(|d| (d.name.to_string(), d.code.value()))
            .collect()
    }

    #[test]
    fn test_conformant_context_passes() {
        let registry = registry();
        let ctx = full_context(&registry);
        assert!(check_type_info(&registry, &ctx).is_ok());
        assert!(check_type_codes(&registry, &ctx).is_ok());
    }

    #[test]
    fn test_wrong_value_reported_by_both_checks() {
        let registry = registry();
        let mut ctx = full_context(&registry);
        ctx.insert("INT".to_string(), 0x1405);

        let info = check_type_info(&registry, &ctx);
        let codes = check_type_codes(&registry, &ctx);
        assert_eq!(info.error_count(), 1);
        assert_eq!(codes.error_count(), 1);

        let m = codes.mismatches()[0];
        assert_eq!(m.name, "INT");
        assert_eq!(m.expected, TypeCode(0x1404));
        assert_eq!(m.actual, Some(0x1405));
    }

    #[test]
    fn test_reports_all_not_first() {
        let registry = registry();
        let ctx: HashMap<String, u32> = HashMap::new();
        assert_eq!(check_type_info(&registry, &ctx).error_count(), 22);
        assert_eq!(check_type_codes(&registry, &ctx).error_count(), 22);
    }

    #[test]
    fn test_stale_entries() {
        let registry = registry();
        let json = crate::emit::emit(
            &registry,
            &crate::emit::EmitOptions {
                format: crate::emit::Format::Json,
                validator: false,
            },
        )
        .unwrap();
        let mut artifact = Artifact::from_json(&json).unwrap();
        assert!(check_stale_entries(&artifact, &registry).is_ok());

        artifact.type_info.get_mut(&0x8B5A).unwrap().nattributes = 1;
        artifact.type_info.remove(&0x1400);
        let result = check_stale_entries(&artifact, &registry);

        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 2);
        let codes: Vec<_> = result.iter().map(|d| d.code.as_str()).collect();
        assert!(codes.contains(&"gltypes::validate::stale-entry"));
        assert!(codes.contains(&"gltypes::validate::missing-entry"));
    }
}
