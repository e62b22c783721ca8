use std::collections::HashSet;

use msg_loader::{resolve_name, LookupError, SchemaResolver};
use msg_types::{ArrayKind, BaseType, BuiltinType, MsgSpec};

/// Whether every instance of the schema occupies a statically known byte
/// size: no variable-length arrays, no strings, recursively through all
/// referenced nested schemas.
///
/// Nested references are resolved through the supplied resolver; an
/// unresolvable type aborts the check with its lookup error. A cyclic
/// reference chain yields `false`, since its size is not statically known.
pub fn is_fixed_length(
    spec: &MsgSpec,
    resolver: &dyn SchemaResolver,
) -> Result<bool, LookupError> {
    let mut in_progress = HashSet::new();
    fixed_length_walk(spec, resolver, &mut in_progress)
}

fn fixed_length_walk(
    spec: &MsgSpec,
    resolver: &dyn SchemaResolver,
    in_progress: &mut HashSet<String>,
) -> Result<bool, LookupError> {
    in_progress.insert(spec.full_name());

    // Distinct nested base types, deduplicated to avoid re-resolving a
    // type referenced by several fields
    let mut nested: Vec<String> = Vec::new();
    for field in &spec.fields {
        if field.array == ArrayKind::Variable {
            return Ok(false);
        }
        if field.base == BaseType::Builtin(BuiltinType::String) {
            return Ok(false);
        }
        if let BaseType::Message(msg) = &field.base {
            let full_name = resolve_name(msg, &spec.package);
            if !nested.contains(&full_name) {
                nested.push(full_name);
            }
        }
    }

    for full_name in nested {
        if in_progress.contains(&full_name) {
            return Ok(false);
        }
        let nested_spec = resolver.resolve(&full_name)?;
        if !fixed_length_walk(nested_spec, resolver, in_progress)? {
            return Ok(false);
        }
    }

    in_progress.remove(&spec.full_name());
    Ok(true)
}
