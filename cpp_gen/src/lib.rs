//! C++ Fragment Generation for Message Schemas
//!
//! Maps message-schema fields to C++ type expressions and emits the code
//! fragments a template-based emitter stitches into a generated source
//! file: constructor initializer lists, fixed-array default assignments,
//! and the buffered-port declarations, wiring, and conversion bodies
//! driven by per-field `subsystem_buffer{...}` annotations.
//!
//! Everything here is text-in/text-out: schemas arrive already parsed
//! (plus their raw declaration text for annotation scanning), fragments
//! leave as plain strings. No file I/O happens in this crate.

pub mod annotation;
pub mod defaults;
pub mod error;
pub mod fixed;
pub mod mapper;
pub mod options;
pub mod port_gen;
pub mod port_index;
pub mod struct_gen;

// Re-export the generation surface at the crate root
pub use annotation::{parse_buffer_annotation, PortKind, PortSpec};
pub use error::GenError;
pub use fixed::is_fixed_length;
pub use mapper::{builtin_to_cpp, cpp_message_declarations, msg_type_to_cpp};
pub use options::CppGeneratorOptions;
pub use port_gen::PortCodeGenerator;
pub use port_index::PortIndex;
pub use struct_gen::{fixed_array_assigns, initializer_list};
