//! Indented, colorized rendering of arbitrary JSON values.

use console::style;
use serde_json::Value;
use std::io::{self, Write};

const INDENT: &str = "    ";

/// Writes `value` as a key/value tree, one line per key, index or bare scalar.
///
/// Keys and indices are cyan, scalars yellow. Every line is prefixed with four
/// spaces per level of `depth`. Containers nested under a key or index are
/// written one level deeper.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tree<W: Write>(
  out: &mut W,
  value: &Value,
  depth: usize,
) -> io::Result<()> {
  let indent = INDENT.repeat(depth);
  match value {
    Value::Object(map) => {
      for (key, child) in map {
        if is_container(child) {
          writeln!(out, "{indent}{}:", style(key).cyan())?;
          write_tree(out, child, depth + 1)?;
        } else {
          writeln!(
            out,
            "{indent}{}: {}",
            style(key).cyan(),
            style(scalar_text(child)).yellow()
          )?;
        }
      }
    }
    Value::Array(items) => {
      for (i, item) in items.iter().enumerate() {
        writeln!(out, "{indent}{}:", style(format!("[{i}]")).cyan())?;
        write_tree(out, item, depth + 1)?;
      }
    }
    scalar => writeln!(out, "{indent}{}", style(scalar_text(scalar)).yellow())?,
  }
  Ok(())
}

const fn is_container(value: &Value) -> bool {
  matches!(value, Value::Object(_) | Value::Array(_))
}

/// Strings are shown without their JSON quotes; everything else as JSON.
fn scalar_text(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}
