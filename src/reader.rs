// ABOUTME: Reader turning parse-tree nodes into Values

use crate::error::LizError;
use crate::parser::Node;
use crate::value::Value;

/// Reads one parse-tree node into a Value. Dispatch is by substring match
/// on the tag: string, double, long, boolean, symbol, then containers.
/// Children preserve source order; comment children are skipped.
pub fn read(node: &Node) -> Result<Value, LizError> {
    if node.tag.contains("string") {
        return Ok(Value::Str(read_string(&node.contents)));
    }
    if node.tag.contains("double") {
        return node
            .contents
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| LizError::InvalidNumber);
    }
    if node.tag.contains("long") {
        return node
            .contents
            .parse::<i64>()
            .map(Value::Long)
            .map_err(|_| LizError::InvalidNumber);
    }
    if node.tag.contains("boolean") {
        return Ok(Value::Bool(node.contents == "#true"));
    }
    if node.tag.contains("symbol") {
        return Ok(Value::Sym(node.contents.clone()));
    }

    let mut items = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if child.tag.contains("comment") {
            continue;
        }
        items.push(read(child)?);
    }
    if node.tag.contains("qexp") {
        Ok(Value::QExp(items))
    } else {
        Ok(Value::SExp(items))
    }
}

/// Reads the root node's children as individual top-level expressions,
/// so an error in one leaves the others intact
pub fn read_program(root: &Node) -> Vec<Result<Value, LizError>> {
    root.children
        .iter()
        .filter(|child| !child.tag.contains("comment"))
        .map(read)
        .collect()
}

/// Strip the surrounding quotes and process C-style escapes
fn read_string(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            // Unknown escapes pass through unchanged
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
