use serde_derive::{Deserialize, Serialize};

/// Generation settings threaded through the struct and port emitters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CppGeneratorOptions {
    /// Pass the container allocator (`_alloc`) to allocator-eligible
    /// constructions.
    pub use_allocator: bool,
    /// C++ namespace prefix for same-package message types, e.g.
    /// `"std_msgs::"`.
    pub name_prefix: String,
}

impl Default for CppGeneratorOptions {
    fn default() -> Self {
        Self {
            use_allocator: false,
            name_prefix: String::new(),
        }
    }
}
