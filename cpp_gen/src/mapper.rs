use msg_types::{parse_base_type, parse_type, ArrayKind, BaseType, BuiltinType};

use crate::error::GenError;

/// C++ spelling for a builtin scalar kind.
///
/// The string container is parameterized over the surrounding message's
/// `ContainerAllocator`; its spelling carries the trailing space the
/// emitters expect when concatenating further template arguments.
pub fn builtin_to_cpp(kind: BuiltinType) -> &'static str {
    match kind {
        BuiltinType::Bool => "uint8_t",
        BuiltinType::Byte => "int8_t",
        BuiltinType::Char => "uint8_t",
        BuiltinType::Int8 => "int8_t",
        BuiltinType::Uint8 => "uint8_t",
        BuiltinType::Int16 => "int16_t",
        BuiltinType::Uint16 => "uint16_t",
        BuiltinType::Int32 => "int32_t",
        BuiltinType::Uint32 => "uint32_t",
        BuiltinType::Int64 => "int64_t",
        BuiltinType::Uint64 => "uint64_t",
        BuiltinType::Float32 => "float",
        BuiltinType::Float64 => "double",
        BuiltinType::String => {
            "std::basic_string<char, std::char_traits<char>, typename ContainerAllocator::template rebind<char>::other > "
        }
        BuiltinType::Time => "ros::Time",
        BuiltinType::Duration => "ros::Duration",
    }
}

/// Map a declared schema type string (e.g. `uint32`, `std_msgs/String`,
/// `float64[9]`) to its C++ declaration.
///
/// Variable-length arrays are rejected: their `std::vector` form needs
/// the allocator type parameter, which callers supply themselves.
pub fn msg_type_to_cpp(type_decl: &str) -> Result<String, GenError> {
    let (base_str, array) = parse_type(type_decl).map_err(|source| GenError::InvalidTypeDecl {
        decl: type_decl.to_string(),
        source,
    })?;
    let base = parse_base_type(&base_str).map_err(|source| GenError::InvalidTypeDecl {
        decl: type_decl.to_string(),
        source,
    })?;

    let cpp_type = match &base {
        BaseType::Builtin(kind) => builtin_to_cpp(*kind).to_string(),
        BaseType::Message(msg) => match &msg.package {
            None => {
                if msg.is_header() {
                    " ::std_msgs::Header ".to_string()
                } else {
                    format!("{} ", msg.name)
                }
            }
            Some(pkg) => format!(" ::{}::{} ", pkg, msg.name),
        },
    };

    match array {
        ArrayKind::Scalar => Ok(cpp_type),
        ArrayKind::Fixed(len) => Ok(format!("boost::array<{}, {}> ", cpp_type, len)),
        ArrayKind::Variable => Err(GenError::VariableArrayType {
            type_decl: type_decl.to_string(),
        }),
    }
}

/// The three C++ spellings of a message type: the unqualified template
/// name, the allocator-instantiated form, and the plain typedef.
///
/// `cpp_message_declarations("std_msgs::", "String")` returns
/// `(" ::std_msgs::String_", " ::std_msgs::String_<ContainerAllocator> ", " ::std_msgs::String")`.
/// A package qualifier inside `msg` overrides the prefix.
pub fn cpp_message_declarations(name_prefix: &str, msg: &str) -> (String, String, String) {
    let cpp_name = match msg.split_once('/') {
        Some((pkg, base)) => format!(" ::{}::{}", pkg, base),
        None => format!(" ::{}{}", name_prefix, msg),
    };
    (
        format!("{}_", cpp_name),
        format!("{}_<ContainerAllocator> ", cpp_name),
        cpp_name,
    )
}
