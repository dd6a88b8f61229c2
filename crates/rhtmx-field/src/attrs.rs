// File: src/attrs.rs
// Purpose: Serialize extra field attributes (meta) into an attribute string

use crate::escape::Escape;
use crate::slug::{slugify, Replacement};
use crate::value::Value;
use indexmap::IndexMap;

/// Attribute names owned by the field itself; meta can never set them
pub const RESERVED_KEYS: [&str; 4] = ["id", "type", "name", "value"];

/// Slugify meta keys and drop the reserved ones, keeping insertion order
///
/// Keys are compared after slugification, so `"ID"` or `" name"` are
/// reserved too. Keys that slugify to nothing are dropped, and when two keys
/// collapse to the same slug the first one wins.
pub fn normalize_meta(meta: IndexMap<String, Value>) -> IndexMap<String, Value> {
    let mut normalized = IndexMap::with_capacity(meta.len());

    for (raw_key, value) in meta {
        let key = slugify(&raw_key, Replacement::Hyphen, &[]);
        if key.is_empty() {
            tracing::trace!("Ignoring meta key {:?} with no usable characters", raw_key);
            continue;
        }
        if RESERVED_KEYS.contains(&key.as_str()) {
            tracing::trace!("Ignoring reserved meta key {:?}", raw_key);
            continue;
        }
        normalized.entry(key).or_insert(value);
    }

    normalized
}

/// Render meta as `key="value"` pairs joined by spaces, in insertion order
///
/// Keys are slugified and values escaped. `true` renders as a bare attribute
/// name and `false` drops the attribute. Empty meta gives an empty string.
pub fn render_meta<E: Escape>(meta: &IndexMap<String, Value>, escape: &E) -> String {
    meta.iter()
        .filter_map(|(key, value)| {
            let key = slugify(key, Replacement::Hyphen, &[]);
            match value {
                Value::Bool(false) => None,
                Value::Bool(true) => Some(key),
                value => Some(format!("{}=\"{}\"", key, escape.attr(&value.to_string()))),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
