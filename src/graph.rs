use serde_json::{Map, Value};

/// Flat normalized cache pulled from the page bootstrap: opaque node key ->
/// record. A record's field values may be scalars, lists, nested objects, or
/// `{"__ref": key}` pointers to sibling records.
///
/// The backing map preserves document order (serde_json `preserve_order`),
/// which anchor selection relies on: "first match" must mean the same node on
/// every run.
#[derive(Debug, Default)]
pub struct GraphStore {
    nodes: Map<String, Value>,
}

impl GraphStore {
    /// Builds a store from the apolloState object. Anything that is not a
    /// JSON object yields an empty store rather than an error.
    pub fn from_state(state: &Value) -> Self {
        match state.as_object() {
            Some(map) => Self { nodes: map.clone() },
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.nodes.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.nodes.get(key)
    }

    /// Single-hop resolution: follows the `__ref` held by `value` to its
    /// target node. Never walks further references, so reference cycles
    /// cannot recurse. A dangling or absent `__ref` yields `None`.
    pub fn resolve(&self, value: &Value) -> Option<&Value> {
        let key = value.get("__ref")?.as_str()?;
        self.nodes.get(key)
    }
}
