use indexmap::IndexMap;
use msg_types::{parse_field_declaration, MsgSpec};

use crate::annotation::{parse_buffer_annotation, PortSpec};

/// Field-name → port-metadata mapping recovered from a schema's raw
/// declaration text.
///
/// Built fresh per generation run and handed to every port emitter as
/// one snapshot, so declarations, wiring, and conversion bodies agree on
/// the annotated field set. Keys are always a subset of the schema's
/// field names; iteration follows the order annotations appear in the
/// source.
#[derive(Debug, Default)]
pub struct PortIndex {
    entries: IndexMap<String, PortSpec>,
}

impl PortIndex {
    /// Scan the schema's raw text line by line, correlating trailing
    /// annotations to fields by name. Lines that fail to parse as field
    /// declarations, comments without a well-formed annotation, and
    /// annotations on names the schema does not declare all contribute
    /// nothing.
    pub fn from_spec(spec: &MsgSpec) -> PortIndex {
        let mut entries = IndexMap::new();

        for line in spec.text.lines() {
            // a '#' in column 0 is a whole-line comment, nothing to bind to
            let Some(comment_start) = line.find('#') else {
                continue;
            };
            if comment_start == 0 {
                continue;
            }
            let declaration = &line[..comment_start];
            let comment = &line[comment_start..];

            let Ok(field) = parse_field_declaration(declaration) else {
                continue;
            };
            if spec.field(&field.name).is_none() {
                continue;
            }
            let Some(port_spec) = parse_buffer_annotation(comment) else {
                continue;
            };
            entries.entry(field.name).or_insert(port_spec);
        }

        PortIndex { entries }
    }

    pub fn get(&self, field_name: &str) -> Option<&PortSpec> {
        self.entries.get(field_name)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.entries.contains_key(field_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PortSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msg_loader::parse_msg_string;

    #[test]
    fn indexes_annotated_fields_only() {
        let text = "\
Header header
uint32 status    # subsystem_buffer{type:port;data_type:std_msgs/UInt32}
float64 plain
geometry_msgs/Wrench wrench    # subsystem_buffer{type:container;validity:wrench_valid}
bool wrench_valid
";
        let spec = parse_msg_string("my_msgs", "State", text).unwrap();
        let index = PortIndex::from_spec(&spec);

        assert_eq!(index.len(), 2);
        assert!(index.contains("status"));
        assert!(index.contains("wrench"));
        assert!(!index.contains("plain"));
        assert_eq!(
            index.get("wrench").unwrap().validity_field.as_deref(),
            Some("wrench_valid")
        );
    }

    #[test]
    fn keys_are_subset_of_schema_fields() {
        // the annotated line is not a declared field of this schema
        let spec = MsgSpec::new(
            "my_msgs",
            "Partial",
            vec![msg_types::FieldSpec::new("a", "uint8").unwrap()],
            "uint8 a\nuint8 ghost # subsystem_buffer{type:port;data_type:X}\n",
        );
        let index = PortIndex::from_spec(&spec);
        assert!(index.is_empty());
    }

    #[test]
    fn malformed_lines_are_swallowed() {
        let text = "\
uint32 status    # subsystem_buffer{type:port;data_type:X}
not a declaration at all    # subsystem_buffer{type:port;data_type:Y}
# subsystem_buffer{type:port;data_type:Z}
uint8 quiet    # an ordinary comment
";
        let spec = parse_msg_string("p", "M", "uint32 status\nuint8 quiet\n").unwrap();
        let spec = MsgSpec::new("p", "M", spec.fields, text);
        let index = PortIndex::from_spec(&spec);
        assert_eq!(index.len(), 1);
        assert!(index.contains("status"));
    }
}
