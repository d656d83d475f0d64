//! Core data model: raw items in, enriched items out.

use serde::{Deserialize, Serialize};

/// One unit of content as loaded from the upstream dataset.
///
/// Only `id` and `text` are required; upstream datasets also carry a
/// free-form `context` field plus occasional extra metadata, all of which must
/// survive a pipeline run unchanged. Unknown fields are preserved through the
/// flattened `extra` map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawItem {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RawItem {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            context: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// A placement inside the viewing volume. Components are always finite and
/// within the configured bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The sole output artifact of a pipeline run: the raw item plus its computed
/// placement and related-item ids, ordered by descending similarity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedItem {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
    pub position: Position,
    pub related: Vec<String>,
}

impl EnrichedItem {
    pub fn from_raw(item: RawItem, position: Position, related: Vec<String>) -> Self {
        Self {
            id: item.id,
            text: item.text,
            context: item.context,
            extra: item.extra,
            position,
            related,
        }
    }
}
