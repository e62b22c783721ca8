use msg_types::{BaseType, BuiltinType};

/// Default-value literal used when constructing a member: `0` for the
/// integral kinds, `0.0` for floats, `false` for bool, and empty for
/// everything constructed by default (string, time, duration, nested
/// messages).
pub fn default_value(base: &BaseType) -> &'static str {
    match base {
        BaseType::Builtin(kind) => match kind {
            BuiltinType::Byte
            | BuiltinType::Char
            | BuiltinType::Int8
            | BuiltinType::Uint8
            | BuiltinType::Int16
            | BuiltinType::Uint16
            | BuiltinType::Int32
            | BuiltinType::Uint32
            | BuiltinType::Int64
            | BuiltinType::Uint64 => "0",
            BuiltinType::Float32 | BuiltinType::Float64 => "0.0",
            BuiltinType::Bool => "false",
            BuiltinType::String | BuiltinType::Time | BuiltinType::Duration => "",
        },
        BaseType::Message(_) => "",
    }
}

/// Whether a type's constructor accepts the container allocator. True
/// for strings and nested message types only.
pub fn takes_allocator(base: &BaseType) -> bool {
    matches!(
        base,
        BaseType::Message(_) | BaseType::Builtin(BuiltinType::String)
    )
}
