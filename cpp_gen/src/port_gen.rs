/* Buffered-port fragments: member declarations, constructor wiring,
   read/write bodies, and the bidirectional conversion blocks. */

use msg_types::MsgSpec;

use crate::annotation::PortKind;
use crate::defaults::default_value;
use crate::error::GenError;
use crate::mapper::msg_type_to_cpp;
use crate::port_index::PortIndex;

#[derive(Clone, Copy)]
enum Direction {
  Input,
  Output,
}

/* Emits the port-side fragments for one schema. Every method walks the
   field list in declaration order against the same index snapshot, so
   declarations, wiring, and conversion bodies agree on the annotated
   field set and on each field's validity-guard decision. */
pub struct PortCodeGenerator<'a> {
  spec: &'a MsgSpec,
  index: &'a PortIndex,
}

impl<'a> PortCodeGenerator<'a> {
  pub fn new(spec: &'a MsgSpec, index: &'a PortIndex) -> PortCodeGenerator<'a> {
    PortCodeGenerator { spec, index }
  }

  /* One #include per distinct include token across the container
     entries, in index order. */
  pub fn additional_includes(&self) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    for (_, port_spec) in self.index.iter() {
      if !port_spec.is_container() {
        continue;
      }
      for inc in &port_spec.includes {
        if !seen.contains(&inc.as_str()) {
          seen.push(inc);
        }
      }
    }
    seen.iter().map(|inc| format!("#include {}", inc)).collect()
  }

  pub fn input_port_members(&self) -> Result<Vec<String>, GenError> {
    self.port_members(Direction::Input)
  }

  pub fn output_port_members(&self) -> Result<Vec<String>, GenError> {
    self.port_members(Direction::Output)
  }

  fn port_members(&self, direction: Direction) -> Result<Vec<String>, GenError> {
    let (aggregate_suffix, port_template) = match direction {
      Direction::Input => ("InputPorts", "RTT::InputPort"),
      Direction::Output => ("OutputPorts", "RTT::OutputPort"),
    };

    let mut lines = Vec::new();
    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      match &port_spec.kind {
        PortKind::Container => {
          if field.is_builtin() {
            return Err(GenError::ContainerOnBuiltin {
              field: field.name.clone(),
            });
          }
          let cpp_type = msg_type_to_cpp(&field.type_decl)?;
          lines.push(format!(
            "  {}_{} {}_;",
            cpp_type.trim_end(),
            aggregate_suffix,
            field.name
          ));
        }
        PortKind::Port { .. } => {
          lines.push(format!(
            "  {}<Container_::_{}_type > {}_;",
            port_template, field.name, field.name
          ));
        }
      }
    }
    Ok(lines)
  }

  /* Constructor initializer entries; the hierarchical port name joins
     the runtime prefix and the field name with '_' only when the prefix
     is non-empty. Containers also thread the owning task context. */
  pub fn ports_initializer_list(&self) -> Vec<String> {
    let mut lines = Vec::new();
    let mut op = ':';

    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      let line = match port_spec.kind {
        PortKind::Container => format!(
          "    {} {}_(tc, prefix + std::string(prefix.empty()?\"\":\"_\") + \"{}\")",
          op, field.name, field.name
        ),
        PortKind::Port { .. } => format!(
          "    {} {}_(prefix + std::string(prefix.empty()?\"\":\"_\") + \"{}\")",
          op, field.name, field.name
        ),
      };
      lines.push(line);
      op = ',';
    }

    lines
  }

  /* Register single-value ports with the owning task context; container
     members register their own children. */
  pub fn ports_constructor_code(&self) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      if matches!(port_spec.kind, PortKind::Port { .. }) {
        lines.push(format!("tc.addPort({}_);", field.name));
      }
    }
    lines
  }

  /* A read lands directly in the validity companion when one exists;
     otherwise its success folds into the accumulating result flag. */
  pub fn read_ports(&self) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      match &port_spec.validity_field {
        Some(validity) => lines.push(format!(
          "ros.{} = {}_.read(ros.{});",
          validity, field.name, field.name
        )),
        None => lines.push(format!(
          "result &= {}_.read(ros.{});",
          field.name, field.name
        )),
      }
    }
    lines
  }

  /* Writes are guarded by the validity companion when one exists. */
  pub fn write_ports(&self) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      match &port_spec.validity_field {
        Some(validity) => {
          lines.push(format!("if (ros.{}) {{", validity));
          lines.push(format!("    {}_.write(ros.{});", field.name, field.name));
          lines.push("}".to_string());
        }
        None => {
          lines.push(format!("{}_.write(ros.{});", field.name, field.name));
        }
      }
    }
    lines
  }

  /* Inbound conversion: each annotated field converts itself, and a
     validity companion is copied into the internal per-field flag. */
  pub fn convert_from_ros(&self) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      lines.push(format!(
        "  {}_.convertFromROS(ros.{});",
        field.name, field.name
      ));
      if let Some(validity) = &port_spec.validity_field {
        lines.push(format!("  {}_valid_ = ros.{};", field.name, validity));
      }
    }
    lines
  }

  /* Outbound conversion. Fields without a validity companion first form
     a combined guard that resets the whole structure to its default when
     any of them is invalid; each field then converts or falls back to
     its default, propagating the internal flag into the companion when
     one exists. */
  pub fn convert_to_ros(&self) -> Result<Vec<String>, GenError> {
    let mut lines = Vec::new();
    let mut op = "if (";
    let mut close_block = false;

    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      if port_spec.validity_field.is_none() {
        lines.push(format!("  {} !{}_valid_", op, field.name));
        op = "||";
        close_block = true;
      }
    }

    if close_block {
      lines.push(") {".to_string());
      lines.push("  ros = Container_();".to_string());
      lines.push("}".to_string());
      lines.push("else {".to_string());
    }

    for field in &self.spec.fields {
      let Some(port_spec) = self.index.get(&field.name) else {
        continue;
      };
      lines.push(format!("  if ({}_valid_) {{", field.name));
      lines.push(format!(
        "    {}_.convertToROS(ros.{});",
        field.name, field.name
      ));
      lines.push("  }".to_string());
      lines.push("  else {".to_string());
      let cpp_type = msg_type_to_cpp(&field.type_decl)?;
      if field.is_array() {
        lines.push(format!("    ros.{} = {}();", field.name, cpp_type));
      } else {
        lines.push(format!(
          "    ros.{} = {}({});",
          field.name,
          cpp_type,
          default_value(&field.base)
        ));
      }
      lines.push("  }".to_string());
      if let Some(validity) = &port_spec.validity_field {
        lines.push(format!("  ros.{} = {}_valid_;", validity, field.name));
      }
    }

    if close_block {
      lines.push("}".to_string());
    }

    Ok(lines)
  }
}

// Include comprehensive tests
#[cfg(test)]
#[path = "port_gen_tests.rs"]
mod port_gen_tests;
