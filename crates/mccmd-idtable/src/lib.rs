//! A read-only, nested identifier catalogue: `category -> (id -> label?)`,
//! consumed by `mccmd-core`'s dynamic suggestion resolvers for things like
//! block ids, entity ids, and per-block-id state value lists.
//!
//! Grounded on `serde_json`-backed tree data the way `apollo-compiler`
//! represents its schema/executable document trees, generalized here to an
//! open-ended JSON value tree rather than a fixed struct, since the actual
//! shape of the catalogue is produced by an external build tool this crate
//! never sees.

use std::collections::BTreeMap;

/// One level of the catalogue tree. A leaf is either a bare label (or no
/// label at all) or, for block-state value lists, an array of literal
/// strings; anything else nests further.
#[derive(Debug, Clone, PartialEq)]
pub enum IdNode {
    Leaf(Option<String>),
    List(Vec<String>),
    Map(BTreeMap<String, IdNode>),
}

impl IdNode {
    pub fn as_map(&self) -> Option<&BTreeMap<String, IdNode>> {
        match self {
            IdNode::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            IdNode::Leaf(Some(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            IdNode::List(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    fn get_path<'a>(&'a self, path: &[String]) -> Option<&'a IdNode> {
        match path.split_first() {
            None => Some(self),
            Some((head, rest)) => self.as_map()?.get(head)?.get_path(rest),
        }
    }

    /// Deep-merges `other` into `self`: when both sides are maps, keys are
    /// merged recursively; otherwise `other` replaces `self` outright
    /// (last writer wins for leaf entries).
    fn merge(&mut self, other: &IdNode) {
        match (self, other) {
            (IdNode::Map(a), IdNode::Map(b)) => {
                for (k, v) in b {
                    match a.get_mut(k) {
                        Some(existing) => existing.merge(v),
                        None => {
                            a.insert(k.clone(), v.clone());
                        }
                    }
                }
            }
            (slot, other) => *slot = other.clone(),
        }
    }

    fn from_json(value: &serde_json::Value) -> Result<IdNode, IdTableError> {
        match value {
            serde_json::Value::Null => Ok(IdNode::Leaf(None)),
            serde_json::Value::String(s) => Ok(IdNode::Leaf(Some(s.clone()))),
            serde_json::Value::Array(items) => {
                let strings = items
                    .iter()
                    .map(|v| v.as_str().map(str::to_owned).ok_or(IdTableError::UnsupportedShape))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(IdNode::List(strings))
            }
            serde_json::Value::Object(obj) => {
                let mut map = BTreeMap::new();
                for (k, v) in obj {
                    map.insert(k.clone(), IdNode::from_json(v)?);
                }
                Ok(IdNode::Map(map))
            }
            serde_json::Value::Bool(_) | serde_json::Value::Number(_) => {
                Err(IdTableError::UnsupportedShape)
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            IdNode::Leaf(None) => serde_json::Value::Null,
            IdNode::Leaf(Some(s)) => serde_json::Value::String(s.clone()),
            IdNode::List(items) => {
                serde_json::Value::Array(items.iter().map(|s| serde_json::Value::String(s.clone())).collect())
            }
            IdNode::Map(map) => {
                serde_json::Value::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdTableError {
    #[error("invalid JSON in id table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("id table leaves must be null, a string, a string array, or a nested object")]
    UnsupportedShape,
}

/// The catalogue root. Always a `Map` keyed by category name, but stored
/// as a plain `IdNode` so `get`/`merge` share their tree-walking code with
/// every other level.
#[derive(Debug, Clone, PartialEq)]
pub struct IdTable {
    root: IdNode,
}

impl IdTable {
    pub fn empty() -> Self {
        IdTable { root: IdNode::Map(BTreeMap::new()) }
    }

    pub fn get(&self, path: &[String]) -> Option<&IdNode> {
        self.root.get_path(path)
    }

    /// Last-writer-wins on leaves, deep-merge on maps.
    pub fn merge_from(&mut self, other: &IdTable) {
        self.root.merge(&other.root);
    }

    /// Parses a catalogue from JSON text, stripping `//` and `/* */`
    /// comments outside string literals first unless `strict` is set.
    pub fn load(text: &str, strict: bool) -> Result<IdTable, IdTableError> {
        let cleaned;
        let json_text = if strict {
            text
        } else {
            cleaned = strip_json_comments(text);
            cleaned.as_str()
        };
        let value: serde_json::Value = serde_json::from_str(json_text)?;
        let root = IdNode::from_json(&value)?;
        Ok(IdTable { root })
    }

    pub fn dump(&self) -> String {
        serde_json::to_string_pretty(&self.root.to_json()).expect("IdNode always serializes")
    }
}

/// Removes `//line` and `/* block */` comments that lie outside string
/// literals, leaving everything else (including escaped quotes) intact.
fn strip_json_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut in_string = false;
    while let Some((_, c)) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some((_, escaped)) = chars.next() {
                    out.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                chars.next();
                for (_, c) in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut prev = '\0';
                for (_, c) in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn load_strips_line_and_block_comments() {
        let text = r#"
            {
                // top-level comment
                "entity": { /* inline */ "creeper": "Creeper" }
            }
        "#;
        let table = IdTable::load(text, false).unwrap();
        assert_eq!(table.get(&path(&["entity", "creeper"])).unwrap().as_label(), Some("Creeper"));
    }

    #[test]
    fn comment_like_text_inside_strings_survives() {
        let text = r#"{ "entity": { "weird": "has // inside" } }"#;
        let table = IdTable::load(text, false).unwrap();
        assert_eq!(table.get(&path(&["entity", "weird"])).unwrap().as_label(), Some("has // inside"));
    }

    #[test]
    fn strict_mode_rejects_comments() {
        let text = "{ // oops\n }";
        assert!(IdTable::load(text, true).is_err());
    }

    #[test]
    fn block_state_value_lists_round_trip() {
        let text = r#"{"block_state": {"bamboo": {"str": {"leaves": ["\"none\"", "\"small\""]}}}}"#;
        let table = IdTable::load(text, false).unwrap();
        let leaves = table.get(&path(&["block_state", "bamboo", "str", "leaves"])).unwrap();
        assert_eq!(leaves.as_list(), Some(&["\"none\"".to_string(), "\"small\"".to_string()][..]));
    }

    #[test]
    fn merge_last_writer_wins_on_leaves_deep_merges_maps() {
        let mut a = IdTable::load(r#"{"entity": {"creeper": "Creeper", "zombie": "Zombie"}}"#, false).unwrap();
        let b = IdTable::load(r#"{"entity": {"creeper": "Creeper (renamed)"}, "block": {"air": null}}"#, false).unwrap();
        a.merge_from(&b);
        assert_eq!(a.get(&path(&["entity", "creeper"])).unwrap().as_label(), Some("Creeper (renamed)"));
        assert_eq!(a.get(&path(&["entity", "zombie"])).unwrap().as_label(), Some("Zombie"));
        assert!(a.get(&path(&["block", "air"])).is_some());
    }

    #[test]
    fn round_trip_load_dump() {
        let text = r#"{"entity":{"creeper":"Creeper","pig":null},"block":{"air":["\"empty\""]}}"#;
        let table = IdTable::load(text, false).unwrap();
        let dumped = table.dump();
        let reloaded = IdTable::load(&dumped, true).unwrap();
        assert_eq!(table, reloaded);
    }

    #[test]
    fn missing_path_is_none() {
        let table = IdTable::load(r#"{"entity": {}}"#, false).unwrap();
        assert!(table.get(&path(&["entity", "nope"])).is_none());
        assert!(table.get(&path(&["missing_category"])).is_none());
    }
}
