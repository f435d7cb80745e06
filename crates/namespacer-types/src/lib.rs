//! Catalog and message value types exchanged between source and destination connectors.
//!
//! These types mirror the JSON wire shape of the surrounding pipeline, so
//! mapping a catalog or message never changes its serialized layout.

pub mod catalog;
pub mod message;
pub mod wire;

pub use catalog::{ConfiguredCatalog, ConfiguredStream, StreamDescriptor, StreamKey};
pub use message::{Message, MessageKind, RecordMessage};
pub use wire::{DestinationSyncMode, SyncMode};
