//! Configured catalog types.
//!
//! A [`ConfiguredCatalog`] is the ordered set of [`ConfiguredStream`]s a sync
//! job replicates. Each entry pairs the source's [`StreamDescriptor`] with the
//! sync settings chosen for it.
//!
//! Fields not modelled here are kept in each type's `extra` map so they
//! survive a deserialize/serialize round trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire::{DestinationSyncMode, SyncMode};

/// A stream as reported by the source connector.
///
/// Identity is the `(name, namespace)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Stream name (e.g., `"users"`).
    pub name: String,
    /// Source-side namespace (schema, database, dataset), if the source has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// JSON schema of the stream's records.
    #[serde(default)]
    pub json_schema: serde_json::Value,
    /// Sync modes this stream supports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_sync_modes: Vec<SyncMode>,
    /// Whether the source decides the cursor field itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_defined_cursor: Option<bool>,
    /// Cursor field suggested by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cursor_field: Option<Vec<String>>,
    /// Primary key declared by the source, as a list of field paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_defined_primary_key: Option<Vec<Vec<String>>>,
    /// Fields not modelled above (e.g. `is_resumable`), passed through.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StreamDescriptor {
    /// Create a descriptor with an empty schema and no declared capabilities.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            name: name.into(),
            namespace,
            json_schema: serde_json::Value::Null,
            supported_sync_modes: Vec::new(),
            source_defined_cursor: None,
            default_cursor_field: None,
            source_defined_primary_key: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Attach a JSON schema.
    #[must_use]
    pub fn with_json_schema(mut self, schema: serde_json::Value) -> Self {
        self.json_schema = schema;
        self
    }

    /// Attach the supported sync modes.
    #[must_use]
    pub fn with_supported_sync_modes(mut self, modes: Vec<SyncMode>) -> Self {
        self.supported_sync_modes = modes;
        self
    }

    /// The `(namespace, name)` identity of this stream.
    #[must_use]
    pub fn key(&self) -> StreamKey {
        StreamKey {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }
}

/// Identity of a stream: its namespace and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreamKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{ns}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A stream selected for replication, with its sync settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredStream {
    pub stream: StreamDescriptor,
    #[serde(default)]
    pub sync_mode: SyncMode,
    /// Cursor field path for incremental sync (empty for full refresh).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cursor_field: Vec<String>,
    #[serde(default)]
    pub destination_sync_mode: DestinationSyncMode,
    /// Primary key field paths used for deduplication.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<Vec<String>>,
    /// Fields not modelled above (e.g. `generation_id`, `sync_id`), passed through.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ConfiguredStream {
    /// Configure a stream with full-refresh/overwrite defaults.
    #[must_use]
    pub fn new(stream: StreamDescriptor) -> Self {
        Self {
            stream,
            sync_mode: SyncMode::default(),
            cursor_field: Vec::new(),
            destination_sync_mode: DestinationSyncMode::default(),
            primary_key: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Ordered collection of streams a sync job replicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredCatalog {
    pub streams: Vec<ConfiguredStream>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ConfiguredCatalog {
    #[must_use]
    pub fn new(streams: Vec<ConfiguredStream>) -> Self {
        Self {
            streams,
            extra: serde_json::Map::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}
