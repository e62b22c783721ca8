//! Schema Resolution and Loading
//!
//! This crate provides the resolution capability consumed during code
//! generation: looking up a nested message schema by its qualified name.
//! The production loader walks include paths on disk and lives outside
//! this workspace; here we define the interface it implements, an
//! in-memory registry for tests and embedders that pre-load their schema
//! set, and a minimal string-based schema reader.

pub mod load;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use load::parse_msg_string;
pub use resolver::{resolve_name, LookupError, MemoryResolver, SchemaResolver};
