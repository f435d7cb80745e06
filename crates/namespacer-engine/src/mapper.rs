//! Catalog and message mapping for a sync job.
//!
//! [`StreamMapper`] applies the namespace policy and stream prefix of one
//! [`MapperConfig`] to catalog entries and record messages. Every operation
//! borrows its input and returns a fresh value; nothing is mutated in place.

use std::collections::HashMap;

use namespacer_types::catalog::{ConfiguredCatalog, ConfiguredStream, StreamDescriptor, StreamKey};
use namespacer_types::message::{Message, RecordMessage};

use crate::errors::MapperConfigError;
use crate::namespace::{NamespaceDefinition, NamespaceDefinitionKind};
use crate::naming::apply_prefix;

// ── Config ──────────────────────────────────────────────────────────

/// Namespace policy and stream-name prefix for one sync job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapperConfig {
    namespace_definition: NamespaceDefinition,
    stream_prefix: Option<String>,
}

impl MapperConfig {
    /// An empty prefix is stored as `None`.
    #[must_use]
    pub fn new(namespace_definition: NamespaceDefinition, stream_prefix: Option<String>) -> Self {
        Self {
            namespace_definition,
            stream_prefix: stream_prefix.filter(|p| !p.is_empty()),
        }
    }

    /// Build a config from the raw job-settings values.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is `CustomFormat` and `custom_format` is
    /// unset, empty, or repeats the placeholder.
    pub fn from_parts(
        kind: NamespaceDefinitionKind,
        custom_format: Option<&str>,
        stream_prefix: Option<String>,
    ) -> Result<Self, MapperConfigError> {
        let namespace_definition = NamespaceDefinition::from_kind(kind, custom_format)?;
        Ok(Self::new(namespace_definition, stream_prefix))
    }

    #[must_use]
    pub fn namespace_definition(&self) -> &NamespaceDefinition {
        &self.namespace_definition
    }

    #[must_use]
    pub fn stream_prefix(&self) -> Option<&str> {
        self.stream_prefix.as_deref()
    }

    /// Destination namespace for a stream in `source_namespace`.
    #[must_use]
    pub fn resolve_namespace(&self, source_namespace: Option<&str>) -> Option<String> {
        self.namespace_definition.resolve(source_namespace)
    }

    /// Destination name for a stream called `name`.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> String {
        apply_prefix(name, self.stream_prefix())
    }
}

// ── Collisions ──────────────────────────────────────────────────────

/// Several source streams resolving to the same destination stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCollision {
    /// The shared destination `(namespace, name)`.
    pub destination: StreamKey,
    /// Source streams mapped onto it, in catalog order.
    pub sources: Vec<StreamKey>,
}

fn collect_collisions(
    source: &ConfiguredCatalog,
    mapped: &ConfiguredCatalog,
) -> Vec<StreamCollision> {
    let mut groups: Vec<(StreamKey, Vec<StreamKey>)> = Vec::new();
    let mut index: HashMap<StreamKey, usize> = HashMap::new();

    for (src, dst) in source.streams.iter().zip(&mapped.streams) {
        let destination = dst.stream.key();
        let origin = src.stream.key();
        match index.get(&destination) {
            Some(&i) => groups[i].1.push(origin),
            None => {
                index.insert(destination.clone(), groups.len());
                groups.push((destination, vec![origin]));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(destination, sources)| StreamCollision {
            destination,
            sources,
        })
        .collect()
}

// ── Mapper ──────────────────────────────────────────────────────────

/// Rewrites stream names and namespaces for one sync job.
///
/// Holds no mutable state, so a single instance can be shared by any number
/// of concurrent workers.
#[derive(Debug, Clone)]
pub struct StreamMapper {
    config: MapperConfig,
}

impl StreamMapper {
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        tracing::debug!(
            namespace_definition = ?config.namespace_definition.kind(),
            stream_prefix = config.stream_prefix().unwrap_or(""),
            "Stream mapper configured"
        );
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map one source stream descriptor. Schema, capabilities and unmodelled
    /// fields are copied.
    #[must_use]
    pub fn map_stream(&self, stream: &StreamDescriptor) -> StreamDescriptor {
        StreamDescriptor {
            name: self.config.resolve_name(&stream.name),
            namespace: self.config.resolve_namespace(stream.namespace.as_deref()),
            json_schema: stream.json_schema.clone(),
            supported_sync_modes: stream.supported_sync_modes.clone(),
            source_defined_cursor: stream.source_defined_cursor,
            default_cursor_field: stream.default_cursor_field.clone(),
            source_defined_primary_key: stream.source_defined_primary_key.clone(),
            extra: stream.extra.clone(),
        }
    }

    /// Map every stream in `catalog`.
    ///
    /// Sync settings are carried through unchanged. Destination collisions
    /// are logged as warnings; see [`StreamMapper::find_collisions`].
    #[must_use]
    pub fn map_catalog(&self, catalog: &ConfiguredCatalog) -> ConfiguredCatalog {
        let mapped = self.map_streams(catalog);

        for collision in collect_collisions(catalog, &mapped) {
            let sources: Vec<String> = collision.sources.iter().map(ToString::to_string).collect();
            tracing::warn!(
                destination = %collision.destination,
                sources = %sources.join(", "),
                "Multiple source streams map to the same destination stream"
            );
        }

        tracing::debug!(streams = mapped.len(), "Mapped configured catalog");
        mapped
    }

    /// Destination streams that more than one source stream resolves to.
    #[must_use]
    pub fn find_collisions(&self, catalog: &ConfiguredCatalog) -> Vec<StreamCollision> {
        collect_collisions(catalog, &self.map_streams(catalog))
    }

    /// Map a record's stream reference. Data, timestamp and unmodelled fields
    /// are copied.
    #[must_use]
    pub fn map_record(&self, record: &RecordMessage) -> RecordMessage {
        RecordMessage {
            stream: self.config.resolve_name(&record.stream),
            namespace: self.config.resolve_namespace(record.namespace.as_deref()),
            data: record.data.clone(),
            emitted_at: record.emitted_at,
            extra: record.extra.clone(),
        }
    }

    /// Map a protocol message.
    ///
    /// `RECORD` messages get a new stream name and namespace; every other
    /// kind is returned as an unmodified copy.
    #[must_use]
    pub fn map_message(&self, message: &Message) -> Message {
        match message {
            Message::Record { record } => Message::Record {
                record: self.map_record(record),
            },
            other => other.clone(),
        }
    }

    fn map_streams(&self, catalog: &ConfiguredCatalog) -> ConfiguredCatalog {
        let streams = catalog
            .streams
            .iter()
            .map(|configured| ConfiguredStream {
                stream: self.map_stream(&configured.stream),
                sync_mode: configured.sync_mode,
                cursor_field: configured.cursor_field.clone(),
                destination_sync_mode: configured.destination_sync_mode,
                primary_key: configured.primary_key.clone(),
                extra: configured.extra.clone(),
            })
            .collect();
        ConfiguredCatalog {
            streams,
            extra: catalog.extra.clone(),
        }
    }
}
