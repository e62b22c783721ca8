use msg_types::TypeParseError;
use thiserror::Error;

/// Fatal generation failures. Non-fatal conditions (absent or malformed
/// annotations, unparseable raw-text lines) never surface here; they are
/// absorbed where they occur.
#[derive(Debug, Error)]
pub enum GenError {
    /// A variable-length array reached the scalar type mapper. Its C++
    /// representation needs an allocator type parameter the mapper cannot
    /// derive from the element type alone, so callers must handle
    /// variable arrays before mapping.
    #[error("variable-length array '{type_decl}' cannot be mapped without its allocator parameter")]
    VariableArrayType { type_decl: String },

    /// A `container` port annotation was attached to a builtin-typed
    /// field. Containers aggregate the ports of a nested schema; a
    /// builtin has none.
    #[error("container port annotation on builtin-typed field '{field}'")]
    ContainerOnBuiltin { field: String },

    /// A type declaration string handed to the mapper failed to parse.
    #[error("invalid type declaration '{decl}'")]
    InvalidTypeDecl {
        decl: String,
        #[source]
        source: TypeParseError,
    },
}
