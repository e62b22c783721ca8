use serde_derive::{Deserialize, Serialize};

use crate::parse::{parse_base_type, parse_type, TypeParseError};

/// The fixed set of builtin scalar kinds a schema field may declare.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinType {
    Bool,
    Byte,
    Char,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    String,
    Time,
    Duration,
}

impl BuiltinType {
    /// Look up a builtin kind by its schema-source spelling.
    pub fn from_name(name: &str) -> Option<BuiltinType> {
        match name {
            "bool" => Some(BuiltinType::Bool),
            "byte" => Some(BuiltinType::Byte),
            "char" => Some(BuiltinType::Char),
            "int8" => Some(BuiltinType::Int8),
            "uint8" => Some(BuiltinType::Uint8),
            "int16" => Some(BuiltinType::Int16),
            "uint16" => Some(BuiltinType::Uint16),
            "int32" => Some(BuiltinType::Int32),
            "uint32" => Some(BuiltinType::Uint32),
            "int64" => Some(BuiltinType::Int64),
            "uint64" => Some(BuiltinType::Uint64),
            "float32" => Some(BuiltinType::Float32),
            "float64" => Some(BuiltinType::Float64),
            "string" => Some(BuiltinType::String),
            "time" => Some(BuiltinType::Time),
            "duration" => Some(BuiltinType::Duration),
            _ => None,
        }
    }

    /// The schema-source spelling of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinType::Bool => "bool",
            BuiltinType::Byte => "byte",
            BuiltinType::Char => "char",
            BuiltinType::Int8 => "int8",
            BuiltinType::Uint8 => "uint8",
            BuiltinType::Int16 => "int16",
            BuiltinType::Uint16 => "uint16",
            BuiltinType::Int32 => "int32",
            BuiltinType::Uint32 => "uint32",
            BuiltinType::Int64 => "int64",
            BuiltinType::Uint64 => "uint64",
            BuiltinType::Float32 => "float32",
            BuiltinType::Float64 => "float64",
            BuiltinType::String => "string",
            BuiltinType::Time => "time",
            BuiltinType::Duration => "duration",
        }
    }
}

/// Array modifier on a field declaration.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum ArrayKind {
    /// Plain scalar field, no array modifier.
    Scalar,
    /// Fixed-length array `T[N]`.
    Fixed(usize),
    /// Variable-length array `T[]`.
    Variable,
}

/// A reference to a nested message schema, optionally package-qualified.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Hash)]
#[serde(rename_all = "kebab-case")]
pub struct MessageName {
    pub package: Option<String>,
    pub name: String,
}

impl MessageName {
    /// True for the well-known header schema, whichever of its historical
    /// spellings the declaration used.
    pub fn is_header(&self) -> bool {
        match self.package.as_deref() {
            None | Some("std_msgs") | Some("roslib") => self.name == "Header",
            _ => false,
        }
    }
}

impl std::fmt::Display for MessageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.package {
            Some(pkg) => write!(f, "{}/{}", pkg, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// The base type of a field, before any array modifier.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum BaseType {
    Builtin(BuiltinType),
    Message(MessageName),
}

impl BaseType {
    pub fn is_builtin(&self) -> bool {
        matches!(self, BaseType::Builtin(_))
    }
}

/// One typed, named field of a message schema.
///
/// `type_decl` keeps the verbatim declared type string (`uint32`,
/// `geometry_msgs/Vector3[4]`, ...); `base` and `array` are its parsed
/// decomposition. Ordering within a schema is significant and preserved.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FieldSpec {
    pub name: String,
    pub type_decl: String,
    #[serde(with = "serde_yml::with::singleton_map_recursive")]
    pub base: BaseType,
    pub array: ArrayKind,
}

impl FieldSpec {
    /// Build a field from its name and declared type string.
    pub fn new(name: &str, type_decl: &str) -> Result<FieldSpec, TypeParseError> {
        let (base_str, array) = parse_type(type_decl)?;
        let base = parse_base_type(&base_str)?;
        Ok(FieldSpec {
            name: name.to_string(),
            type_decl: type_decl.to_string(),
            base,
            array,
        })
    }

    pub fn is_builtin(&self) -> bool {
        self.base.is_builtin()
    }

    pub fn is_array(&self) -> bool {
        !matches!(self.array, ArrayKind::Scalar)
    }
}

/// A parsed message schema: package, ordered fields, and the raw
/// declaration text (line-oriented; kept for annotation scanning only).
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MsgSpec {
    pub package: String,
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub text: String,
}

impl MsgSpec {
    pub fn new(package: &str, name: &str, fields: Vec<FieldSpec>, text: &str) -> MsgSpec {
        MsgSpec {
            package: package.to_string(),
            name: name.to_string(),
            fields,
            text: text.to_string(),
        }
    }

    /// The package-qualified schema name, `package/Name`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
