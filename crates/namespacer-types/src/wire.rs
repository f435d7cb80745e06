//! Sync mode enums shared by catalog entries.

use serde::{Deserialize, Serialize};

/// How data is read from a source stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// One-time full read of all records.
    #[default]
    FullRefresh,
    /// Cursor-based incremental reads since last state.
    Incremental,
}

/// How data is written to a destination stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationSyncMode {
    /// Insert all records (no deduplication).
    Append,
    /// Replace the destination table each run.
    #[default]
    Overwrite,
    /// Append, then deduplicate by primary key.
    AppendDedup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_mode_snake_case() {
        assert_eq!(
            serde_json::to_string(&SyncMode::FullRefresh).unwrap(),
            "\"full_refresh\""
        );
        let back: SyncMode = serde_json::from_str("\"incremental\"").unwrap();
        assert_eq!(back, SyncMode::Incremental);
    }

    #[test]
    fn destination_sync_mode_snake_case() {
        assert_eq!(
            serde_json::to_string(&DestinationSyncMode::AppendDedup).unwrap(),
            "\"append_dedup\""
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(SyncMode::default(), SyncMode::FullRefresh);
        assert_eq!(DestinationSyncMode::default(), DestinationSyncMode::Overwrite);
    }
}
