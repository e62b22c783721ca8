/* Struct-level fragments: constructor initializer lists and fixed-array
   default assignments. */

use msg_types::{ArrayKind, BaseType, BuiltinType, MsgSpec};

use crate::defaults::{default_value, takes_allocator};
use crate::mapper::{builtin_to_cpp, cpp_message_declarations};
use crate::options::CppGeneratorOptions;

/* One constructor-initializer entry per field, in declaration order.
   Assumes the allocator parameter is named _alloc. */
pub fn initializer_list(spec: &MsgSpec, options: &CppGeneratorOptions) -> Vec<String> {
  let mut lines = Vec::new();
  let mut op = ':';

  for field in &spec.fields {
    let line = if field.is_array() {
      /* boost::array has no allocator constructor; only the vector form
         of a variable array takes one */
      if field.array == ArrayKind::Variable && options.use_allocator {
        format!("  {} {}(_alloc)", op, field.name)
      } else {
        format!("  {} {}()", op, field.name)
      }
    } else if options.use_allocator && takes_allocator(&field.base) {
      format!("  {} {}(_alloc)", op, field.name)
    } else {
      format!("  {} {}({})", op, field.name, default_value(&field.base))
    };
    lines.push(line);
    op = ',';
  }

  lines
}

/* Assign every element of each fixed-length array its default value. */
pub fn fixed_array_assigns(spec: &MsgSpec, options: &CppGeneratorOptions) -> Vec<String> {
  let mut lines = Vec::new();

  for field in &spec.fields {
    let ArrayKind::Fixed(_) = field.array else {
      continue;
    };

    if options.use_allocator && takes_allocator(&field.base) {
      let constructed = match &field.base {
        BaseType::Message(msg) => {
          let (_, with_alloc, _) =
            cpp_message_declarations(&options.name_prefix, &msg.to_string());
          with_alloc
        }
        /* string is the only builtin that takes an allocator */
        BaseType::Builtin(_) => builtin_to_cpp(BuiltinType::String).to_string(),
      };
      lines.push(format!("    {}.assign({}(_alloc));", field.name, constructed));
    } else {
      let val = default_value(&field.base);
      if !val.is_empty() {
        lines.push(format!("    {}.assign({});", field.name, val));
      }
    }
  }

  lines
}
