use anyhow::Context;
use msg_types::{parse_field_declaration, FieldSpec, MsgSpec};

/// Parse schema declaration text into a spec, preserving the raw text.
///
/// Lines are handled the way the production loader does: everything after
/// a `#` is comment, blank lines are skipped, and constant declarations
/// (`TYPE NAME=VALUE`) carry no field. Anything left must be a valid
/// field declaration.
pub fn parse_msg_string(package: &str, name: &str, text: &str) -> anyhow::Result<MsgSpec> {
    let mut fields: Vec<FieldSpec> = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let declaration = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let declaration = declaration.trim();
        if declaration.is_empty() || declaration.contains('=') {
            continue;
        }

        let field = parse_field_declaration(declaration)
            .with_context(|| format!("{}/{} line {}", package, name, lineno + 1))?;
        if fields.iter().any(|f| f.name == field.name) {
            anyhow::bail!(
                "duplicate field '{}' in {}/{} line {}",
                field.name,
                package,
                name,
                lineno + 1
            );
        }
        fields.push(field);
    }

    Ok(MsgSpec::new(package, name, fields, text))
}
