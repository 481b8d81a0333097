//! Opaque AST rendering.

use serde_json::Value;

/// Pretty-print an AST as 2-space indented JSON, one entry per line.
///
/// Node kinds are not interpreted; any JSON tree renders at full depth.
pub fn ast_lines(ast: &Value) -> Vec<String> {
    serde_json::to_string_pretty(ast)
        .unwrap_or_else(|_| ast.to_string())
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Whether the AST panel shows a tree.
///
/// `null`, `false`, `0` and `""` read as absent; every other value is
/// rendered, including empty objects and arrays.
pub fn has_ast(ast: &Value) -> bool {
    match ast {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(true, |v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
