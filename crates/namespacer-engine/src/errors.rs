//! Error types for mapper configuration and message translation.

/// Rejected namespace/prefix settings.
///
/// Raised while building a [`MapperConfig`](crate::MapperConfig); a built
/// config can no longer fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapperConfigError {
    /// `custom_format` was selected without a template.
    #[error("namespace_format is required when namespace_definition is custom_format")]
    MissingCustomFormat,

    /// `custom_format` was selected with an empty template.
    #[error("namespace_format must not be empty when namespace_definition is custom_format")]
    EmptyCustomFormat,

    /// The template repeats the source namespace placeholder.
    #[error(
        "namespace_format '{template}' contains {count} occurrences of ${{SOURCE_NAMESPACE}}, at most one is allowed"
    )]
    MultiplePlaceholders { template: String, count: usize },
}

/// Failure while translating a newline-delimited message stream.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A line could not be decoded as a protocol message.
    #[error("malformed message on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A mapped message could not be encoded.
    #[error("failed to encode message from line {line}: {source}")]
    Encode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
