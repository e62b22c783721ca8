//! Declaration parsing shared by the loader and the annotation scanner.

use crate::types::{ArrayKind, BaseType, BuiltinType, FieldSpec, MessageName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    EmptyType,
    UnterminatedArray { decl: String },
    InvalidArrayLength { decl: String },
    InvalidTypeName { name: String },
    InvalidFieldName { name: String },
    MalformedDeclaration { line: String },
}

impl std::fmt::Display for TypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeParseError::EmptyType => write!(f, "empty type declaration"),
            TypeParseError::UnterminatedArray { decl } => {
                write!(f, "unterminated array suffix in '{}'", decl)
            }
            TypeParseError::InvalidArrayLength { decl } => {
                write!(f, "invalid array length in '{}'", decl)
            }
            TypeParseError::InvalidTypeName { name } => {
                write!(f, "invalid type name '{}'", name)
            }
            TypeParseError::InvalidFieldName { name } => {
                write!(f, "invalid field name '{}'", name)
            }
            TypeParseError::MalformedDeclaration { line } => {
                write!(f, "malformed field declaration '{}'", line)
            }
        }
    }
}

impl std::error::Error for TypeParseError {}

/// Split a declared type string into its base-type spelling and array kind.
///
/// `T` is scalar, `T[]` a variable-length array, `T[N]` a fixed-length
/// array of N elements.
pub fn parse_type(decl: &str) -> Result<(String, ArrayKind), TypeParseError> {
    let decl = decl.trim();
    if decl.is_empty() {
        return Err(TypeParseError::EmptyType);
    }

    let Some(open) = decl.find('[') else {
        return Ok((decl.to_string(), ArrayKind::Scalar));
    };

    let base = &decl[..open];
    if base.is_empty() {
        return Err(TypeParseError::EmptyType);
    }
    let suffix = &decl[open + 1..];
    let Some(inner) = suffix.strip_suffix(']') else {
        return Err(TypeParseError::UnterminatedArray {
            decl: decl.to_string(),
        });
    };

    let inner = inner.trim();
    if inner.is_empty() {
        return Ok((base.to_string(), ArrayKind::Variable));
    }
    match inner.parse::<usize>() {
        Ok(len) if len > 0 => Ok((base.to_string(), ArrayKind::Fixed(len))),
        _ => Err(TypeParseError::InvalidArrayLength {
            decl: decl.to_string(),
        }),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Classify a base-type spelling as a builtin kind or a nested-message
/// reference (`Type` or `pkg/Type`, one qualifier at most).
pub fn parse_base_type(name: &str) -> Result<BaseType, TypeParseError> {
    if let Some(builtin) = BuiltinType::from_name(name) {
        return Ok(BaseType::Builtin(builtin));
    }

    let mut parts = name.split('/');
    let first = parts.next().unwrap_or("");
    let second = parts.next();
    if parts.next().is_some() {
        return Err(TypeParseError::InvalidTypeName {
            name: name.to_string(),
        });
    }

    let (package, msg) = match second {
        Some(msg) => (Some(first), msg),
        None => (None, first),
    };
    if !is_identifier(msg) || package.is_some_and(|p| !is_identifier(p)) {
        return Err(TypeParseError::InvalidTypeName {
            name: name.to_string(),
        });
    }

    Ok(BaseType::Message(MessageName {
        package: package.map(str::to_string),
        name: msg.to_string(),
    }))
}

/// Parse one schema source line as a field declaration: a type token and a
/// name token, nothing else. Constant declarations (`TYPE NAME=VALUE`) and
/// anything with extra tokens fail here; callers scanning raw text treat
/// that failure as "not a field line".
pub fn parse_field_declaration(line: &str) -> Result<FieldSpec, TypeParseError> {
    let line = line.trim();
    if line.contains('=') {
        return Err(TypeParseError::MalformedDeclaration {
            line: line.to_string(),
        });
    }

    let mut tokens = line.split_whitespace();
    let (Some(type_decl), Some(name), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(TypeParseError::MalformedDeclaration {
            line: line.to_string(),
        });
    };
    if !is_identifier(name) {
        return Err(TypeParseError::InvalidFieldName {
            name: name.to_string(),
        });
    }

    FieldSpec::new(name, type_decl)
}
