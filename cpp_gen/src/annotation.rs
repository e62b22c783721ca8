//! Parser for the `subsystem_buffer{...}` annotation mini-language
//! embedded in trailing field comments.

use std::collections::HashMap;

const MARKER: &str = "subsystem_buffer{";

/// Port flavor declared by an annotation. Single-value ports always
/// carry their payload type; containers aggregate the ports of a nested
/// schema and need none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortKind {
    Port { data_type: String },
    Container,
}

/// Structured metadata recovered from one annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub kind: PortKind,
    /// Boolean sibling field gating whether the port's data is
    /// meaningful.
    pub validity_field: Option<String>,
    pub includes: Vec<String>,
}

impl PortSpec {
    pub fn is_container(&self) -> bool {
        matches!(self.kind, PortKind::Container)
    }

    pub fn data_type(&self) -> Option<&str> {
        match &self.kind {
            PortKind::Port { data_type } => Some(data_type),
            PortKind::Container => None,
        }
    }
}

impl std::fmt::Display for PortSpec {
    /// Canonical re-serialization; `parse_buffer_annotation` is
    /// idempotent over it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subsystem_buffer{{")?;
        match &self.kind {
            PortKind::Port { data_type } => write!(f, "type:port;data_type:{}", data_type)?,
            PortKind::Container => write!(f, "type:container")?,
        }
        if let Some(validity) = &self.validity_field {
            write!(f, ";validity:{}", validity)?;
        }
        if !self.includes.is_empty() {
            write!(f, ";includes:{}", self.includes.join(", "))?;
        }
        write!(f, "}}")
    }
}

/// Extract port metadata from one comment string.
///
/// Returns `None` for every malformed case: no marker, unmatched `{`,
/// missing or unrecognized `type`, or a `port` without `data_type`.
/// Absence of an annotation is a normal result here, not a failure.
pub fn parse_buffer_annotation(comment: &str) -> Option<PortSpec> {
    let start = comment.find(MARKER)?;
    let body_start = start + MARKER.len();
    // the declaration must be complete on this line
    let body_end = comment[body_start..].find('}')? + body_start;
    let body = &comment[body_start..body_end];

    let mut decl: HashMap<&str, &str> = HashMap::new();
    for item in body.split(';') {
        let Some(pos) = item.find(':') else { continue };
        decl.insert(item[..pos].trim(), item[pos + 1..].trim());
    }

    let kind = match decl.get("type").copied()? {
        "port" => {
            let data_type = decl.get("data_type").copied().filter(|s| !s.is_empty())?;
            PortKind::Port {
                data_type: data_type.to_string(),
            }
        }
        "container" => PortKind::Container,
        _ => return None,
    };

    let validity_field = decl
        .get("validity")
        .copied()
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let includes = decl
        .get("includes")
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|inc| !inc.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(PortSpec {
        kind,
        validity_field,
        includes,
    })
}
