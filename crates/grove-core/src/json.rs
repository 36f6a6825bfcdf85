//! JSON bridge: load a tree from JSON and dump a tree to JSON.
//!
//! This is the reference serializer for the cursor contract: loading drives a
//! single [`WriteCursor`] from the root, dumping drives a single
//! [`ReadCursor`] — no raw node access. File I/O stays out of scope; both
//! directions work on strings and [`serde_json::Value`].
//!
//! # Mapping and lossiness
//!
//! | tree payload | JSON |
//! |--------------|------|
//! | `Unused`     | null |
//! | `Null`       | null |
//! | `Bool`       | true/false |
//! | `Int`        | number (i32) |
//! | `Float`      | number (f32 widened; non-finite → null) |
//! | `String`     | string |
//! | `Object`     | object (child order preserved) |
//! | `Array`      | array |
//!
//! The round trip is lossy by design: names longer than
//! [`NAME_CAPACITY`](crate::bounded::NAME_CAPACITY) characters and strings
//! longer than [`STRING_CAPACITY`](crate::bounded::STRING_CAPACITY)
//! characters are silently truncated on load. JSON integers outside the
//! 32-bit payload are rejected ([`TreeError::IntOutOfRange`]); other numbers
//! narrow to `f32`. A top-level JSON scalar is rejected
//! ([`TreeError::RootMustBeContainer`]) — the tree root must stay a
//! container. Duplicate object keys in the tree collapse to the last value
//! on dump, matching the first-match lookup convention that treats
//! duplicates as a caller error.

use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{Result, TreeError};
use crate::reader::ReadCursor;
use crate::tree::Tree;
use crate::value::{Scalar, ValueKind};
use crate::writer::WriteCursor;

/// Parse a JSON string into a fresh tree.
pub fn from_json(json: &str) -> Result<Tree> {
    let mut tree = Tree::new();
    load_json(&mut tree, json)?;
    Ok(tree)
}

/// Parse a JSON string into an existing tree, replacing its contents. The
/// root keeps its name; its type follows the JSON document (object or
/// array).
pub fn load_json(tree: &mut Tree, json: &str) -> Result<()> {
    let value: JsonValue = serde_json::from_str(json)?;
    load_value(tree, &value)
}

/// Load an already-parsed JSON value into an existing tree.
pub fn load_value(tree: &mut Tree, value: &JsonValue) -> Result<()> {
    tree.clear();
    let mut cursor = tree.write_cursor();
    match value {
        JsonValue::Object(map) => {
            cursor.set_object();
            load_object(&mut cursor, map)
        }
        JsonValue::Array(items) => {
            cursor.set_array();
            load_array(&mut cursor, items)
        }
        _ => Err(TreeError::RootMustBeContainer),
    }
}

fn load_object(cursor: &mut WriteCursor<'_>, map: &Map<String, JsonValue>) -> Result<()> {
    for (key, value) in map {
        // Keys past the name capacity truncate silently (documented above).
        cursor.create_and_goto_named_child(key);
        load_node(cursor, value)?;
        cursor.to_parent();
    }
    Ok(())
}

fn load_array(cursor: &mut WriteCursor<'_>, items: &[JsonValue]) -> Result<()> {
    for value in items {
        cursor.create_and_goto_child();
        load_node(cursor, value)?;
        cursor.to_parent();
    }
    Ok(())
}

fn load_node(cursor: &mut WriteCursor<'_>, value: &JsonValue) -> Result<()> {
    match value {
        JsonValue::Null => {
            cursor.set_null();
        }
        JsonValue::Bool(b) => {
            cursor.write(*b);
        }
        JsonValue::Number(number) => {
            cursor.write(narrow_number(number)?);
        }
        JsonValue::String(s) => {
            cursor.write(s.as_str());
        }
        JsonValue::Object(map) => {
            cursor.set_object();
            load_object(cursor, map)?;
        }
        JsonValue::Array(items) => {
            cursor.set_array();
            load_array(cursor, items)?;
        }
    }
    Ok(())
}

/// Fit a JSON number into the tree's scalar payloads: exact `i64` values go
/// through the `Int` payload (erroring past 32 bits), everything else
/// narrows to the `Float` payload.
fn narrow_number(number: &Number) -> Result<Scalar<'static>> {
    if let Some(int) = number.as_i64() {
        let int = i32::try_from(int).map_err(|_| TreeError::IntOutOfRange(int))?;
        return Ok(Scalar::Int(int));
    }
    Ok(Scalar::Float(number.as_f64().unwrap_or(0.0) as f32))
}

/// Dump a tree to a compact JSON string.
pub fn to_json(tree: &Tree) -> String {
    to_json_value(tree).to_string()
}

/// Dump a tree to a [`serde_json::Value`], walking it with a read cursor.
pub fn to_json_value(tree: &Tree) -> JsonValue {
    let mut cursor = tree.read_cursor();
    dump_node(&mut cursor)
}

fn dump_node(cursor: &mut ReadCursor<'_>) -> JsonValue {
    let (kind, child_count) = match cursor.node() {
        Some(node) => (node.kind(), node.child_count()),
        None => return JsonValue::Null,
    };
    match kind {
        ValueKind::Unused | ValueKind::Null => JsonValue::Null,
        ValueKind::Bool => JsonValue::Bool(cursor.query_bool().unwrap_or(false)),
        ValueKind::Int => JsonValue::from(cursor.query_int().unwrap_or(0)),
        ValueKind::Float => {
            let float = f64::from(cursor.query_float().unwrap_or(0.0));
            Number::from_f64(float).map_or(JsonValue::Null, JsonValue::Number)
        }
        ValueKind::String => JsonValue::String(cursor.query_str().unwrap_or("").to_string()),
        ValueKind::Object => {
            let mut map = Map::new();
            for index in 0..child_count {
                cursor.to_child_at(index);
                let key = cursor.read_name().to_string();
                let value = dump_node(cursor);
                cursor.to_parent();
                map.insert(key, value);
            }
            JsonValue::Object(map)
        }
        ValueKind::Array => {
            let mut items = Vec::with_capacity(child_count);
            for index in 0..child_count {
                cursor.to_child_at(index);
                items.push(dump_node(cursor));
                cursor.to_parent();
            }
            JsonValue::Array(items)
        }
    }
}
