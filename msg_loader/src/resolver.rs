use std::collections::HashMap;

use msg_types::{MessageName, MsgSpec};
use thiserror::Error;

/// A qualified message type could not be found through the search path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("message type '{0}' not found in search path")]
pub struct LookupError(pub String);

/// Resolution capability supplied to the generator: look up a nested
/// schema by its package-qualified name (`pkg/Type`).
pub trait SchemaResolver {
    fn resolve(&self, full_name: &str) -> Result<&MsgSpec, LookupError>;
}

/// Qualify a nested-message reference relative to the package currently
/// being generated. Bare names resolve within that package, except the
/// header schema, which always resolves to its canonical home.
pub fn resolve_name(base: &MessageName, current_package: &str) -> String {
    if base.is_header() {
        return "std_msgs/Header".to_string();
    }
    match &base.package {
        Some(pkg) => format!("{}/{}", pkg, base.name),
        None => format!("{}/{}", current_package, base.name),
    }
}

/// In-memory schema registry keyed by qualified name.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    specs: HashMap<String, MsgSpec>,
}

impl MemoryResolver {
    pub fn new() -> MemoryResolver {
        MemoryResolver {
            specs: HashMap::new(),
        }
    }

    pub fn register(&mut self, spec: MsgSpec) {
        self.specs.insert(spec.full_name(), spec);
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl SchemaResolver for MemoryResolver {
    fn resolve(&self, full_name: &str) -> Result<&MsgSpec, LookupError> {
        self.specs
            .get(full_name)
            .ok_or_else(|| LookupError(full_name.to_string()))
    }
}
