//! JavaScript module output.

use crate::registry::TypeRegistry;
use crate::types::TypeDescriptor;

use super::{sorted_descriptors, sorted_type_codes, FIELD_DOCS};

const INDENT: &str = "    ";

/// Runtime cross-check shipped alongside the tables. Reports every mismatch
/// and returns how many it found.
const RUNTIME_CHECK: &str = r#"// Check TYPE_INFO and TYPE_CODES against a live WebGL context.
// Reports every mismatch with console.error and returns the number found.
export function TYPE_INFO_test(gl) {
    let mismatches = 0;
    for (const code in TYPE_INFO) {
        const name = TYPE_INFO[code].name;
        if (''+gl[name] !== code) {
            console.error(`Mistake in TYPE_INFO: code ${code} is named ${name}, but gl[${name}] is ${gl[name]}.`);
            mismatches += 1;
        }
    }
    for (const name in TYPE_CODES) {
        if (gl[name] !== TYPE_CODES[name]) {
            console.error(`Mistake in TYPE_CODES: gl[${name}] is ${gl[name]} but TYPE_CODES[${name}] is ${TYPE_CODES[name]}.`);
            mismatches += 1;
        }
    }
    return mismatches;
}
"#;

pub(super) fn emit(registry: &TypeRegistry, validator: bool) -> String {
    let mut out = String::new();

    out.push_str("'use strict'\n");
    out.push_str("// WebGL types. Generated by gltypes, do not edit.\n");
    out.push_str("//\n");
    for line in FIELD_DOCS {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            out.push_str(&format!("// {}\n", line));
        }
    }
    out.push('\n');

    if validator {
        out.push_str(RUNTIME_CHECK);
        out.push('\n');
    }

    out.push_str("export const TYPE_INFO = {\n");
    for descriptor in sorted_descriptors(registry) {
        push_entry(&mut out, descriptor);
    }
    out.push_str("};\n\n");

    out.push_str("export const TYPE_CODES = {\n");
    for (name, code) in sorted_type_codes(registry) {
        out.push_str(&format!("{INDENT}{}: {},\n", name, code.hex()));
    }
    out.push_str("};\n");

    out
}

fn push_entry(out: &mut String, d: &TypeDescriptor) {
    let setter = match d.setter_name() {
        Some(name) => format!("\"{}\"", name),
        None => "null".to_string(),
    };

    let fields: [(&str, String); 8] = [
        ("name", format!("\"{}\"", d.name)),
        ("elementType", format!("\"{}\"", d.element_type)),
        ("nelements", d.element_count.to_string()),
        ("nattributes", d.attribute_slots.to_string()),
        ("nbytes", d.byte_size.to_string()),
        ("storageRepresentation", d.storage.typed_array().to_string()),
        ("uniformv", setter),
        ("isSampler", d.is_opaque_handle.to_string()),
    ];

    out.push_str(&format!("{INDENT}{}: {{\n", d.code.hex()));
    for (key, value) in fields {
        out.push_str(&format!("{INDENT}{INDENT}{}: {},\n", key, value));
    }
    out.push_str(&format!("{INDENT}}},\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> TypeRegistry {
        TypeRegistry::webgl1().unwrap()
    }

    #[test]
    fn test_float_mat4_entry() {
        let registry = registry();
        let d = registry
            .get_by_name(crate::types::TypeName::FloatMat4)
            .unwrap();
        let mut out = String::new();
        push_entry(&mut out, d);

        assert_eq!(
            out,
            concat!(
                "    0x8B5C: {\n",
                "        name: \"FLOAT_MAT4\",\n",
                "        elementType: \"FLOAT\",\n",
                "        nelements: 16,\n",
                "        nattributes: 4,\n",
                "        nbytes: 64,\n",
                "        storageRepresentation: Float32Array,\n",
                "        uniformv: \"uniformMatrix4fv\",\n",
                "        isSampler: false,\n",
                "    },\n",
            )
        );
    }

    #[test]
    fn test_tables_are_sorted() {
        let text = emit(&registry(), false);

        let byte = text.find("0x1400: {").unwrap();
        let float = text.find("0x1406: {").unwrap();
        let cube = text.find("0x8B60: {").unwrap();
        assert!(byte < float && float < cube);

        let bool_code = text.find("    BOOL: 0x8B56,").unwrap();
        let ushort = text.find("    UNSIGNED_SHORT: 0x1403,").unwrap();
        assert!(bool_code < ushort);
    }

    #[test]
    fn test_validator_is_optional() {
        assert!(emit(&registry(), true).contains("export function TYPE_INFO_test(gl)"));
        assert!(!emit(&registry(), false).contains("TYPE_INFO_test"));
    }

    #[test]
    fn test_header_documents_contract() {
        let text = emit(&registry(), false);
        assert!(text.starts_with("'use strict'\n// WebGL types."));
        assert!(text.contains("''+gl[TYPE_INFO[code].name] === ''+code"));
        assert!(text.contains("gl[name] === TYPE_CODES[name]"));
    }

    #[test]
    fn test_sampler_entry() {
        let text = emit(&registry(), false);
        let start = text.find("0x8B5E: {").unwrap();
        let entry = &text[start..start + 300];
        assert!(entry.contains("storageRepresentation: Int32Array,"));
        assert!(entry.contains("uniformv: \"uniform1iv\","));
        assert!(entry.contains("isSampler: true,"));
    }
}
