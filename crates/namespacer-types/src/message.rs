//! Connector protocol messages.
//!
//! [`Message`] is tagged by `type` on the wire, e.g.
//! `{"type":"RECORD","record":{"stream":"users","data":{..},"emitted_at":0}}`.
//! Only [`RecordMessage`] carries a stream reference; the other kinds keep
//! their payload as raw JSON so they pass through without loss. Objects with
//! a `type` this crate does not know are kept whole in [`Message::Other`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single row of data emitted by a source for one stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMessage {
    /// Name of the stream the record belongs to.
    pub stream: String,
    /// Namespace of the stream, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Record payload.
    pub data: serde_json::Value,
    /// Emission time in epoch milliseconds.
    pub emitted_at: i64,
    /// Fields not modelled above (e.g. `meta`), passed through.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A protocol message exchanged between connectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    Record { record: RecordMessage },
    State { state: serde_json::Value },
    Log { log: serde_json::Value },
    Trace { trace: serde_json::Value },
    Control { control: serde_json::Value },
    Catalog { catalog: serde_json::Value },
    Spec { spec: serde_json::Value },
    ConnectionStatus { connection_status: serde_json::Value },
    /// A message whose `type` is not one of the kinds above, kept verbatim.
    #[serde(untagged)]
    Other(serde_json::Value),
}

/// Known kinds, decoded strictly so a malformed `RECORD` is an error rather
/// than an unmapped pass-through.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum KnownMessage {
    Record { record: RecordMessage },
    State { state: serde_json::Value },
    Log { log: serde_json::Value },
    Trace { trace: serde_json::Value },
    Control { control: serde_json::Value },
    Catalog { catalog: serde_json::Value },
    Spec { spec: serde_json::Value },
    ConnectionStatus { connection_status: serde_json::Value },
}

impl From<KnownMessage> for Message {
    fn from(known: KnownMessage) -> Self {
        match known {
            KnownMessage::Record { record } => Self::Record { record },
            KnownMessage::State { state } => Self::State { state },
            KnownMessage::Log { log } => Self::Log { log },
            KnownMessage::Trace { trace } => Self::Trace { trace },
            KnownMessage::Control { control } => Self::Control { control },
            KnownMessage::Catalog { catalog } => Self::Catalog { catalog },
            KnownMessage::Spec { spec } => Self::Spec { spec },
            KnownMessage::ConnectionStatus { connection_status } => {
                Self::ConnectionStatus { connection_status }
            }
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let Some(tag) = value.get("type").and_then(serde_json::Value::as_str) else {
            return Err(de::Error::custom("message must be an object with a string `type`"));
        };
        if MessageKind::from_wire(tag).is_none() {
            return Ok(Self::Other(value));
        }
        KnownMessage::deserialize(value)
            .map(Self::from)
            .map_err(de::Error::custom)
    }
}

/// Payload-free discriminant of [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Record,
    State,
    Log,
    Trace,
    Control,
    Catalog,
    Spec,
    ConnectionStatus,
    Other,
}

impl MessageKind {
    /// Kind for a wire `type` tag, or `None` if the tag is unknown.
    #[must_use]
    pub fn from_wire(tag: &str) -> Option<Self> {
        let kind = match tag {
            "RECORD" => Self::Record,
            "STATE" => Self::State,
            "LOG" => Self::Log,
            "TRACE" => Self::Trace,
            "CONTROL" => Self::Control,
            "CATALOG" => Self::Catalog,
            "SPEC" => Self::Spec,
            "CONNECTION_STATUS" => Self::ConnectionStatus,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Record => "RECORD",
            Self::State => "STATE",
            Self::Log => "LOG",
            Self::Trace => "TRACE",
            Self::Control => "CONTROL",
            Self::Catalog => "CATALOG",
            Self::Spec => "SPEC",
            Self::ConnectionStatus => "CONNECTION_STATUS",
            Self::Other => "OTHER",
        };
        f.write_str(s)
    }
}

impl Message {
    /// Build a record message with no namespace.
    #[must_use]
    pub fn record(stream: impl Into<String>, data: serde_json::Value, emitted_at: i64) -> Self {
        Self::Record {
            record: RecordMessage {
                stream: stream.into(),
                namespace: None,
                data,
                emitted_at,
                extra: serde_json::Map::new(),
            },
        }
    }

    /// Set the namespace of a record message. Other kinds are returned as-is.
    #[must_use]
    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        if let Self::Record { record } = &mut self {
            record.namespace = namespace;
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Record { .. } => MessageKind::Record,
            Self::State { .. } => MessageKind::State,
            Self::Log { .. } => MessageKind::Log,
            Self::Trace { .. } => MessageKind::Trace,
            Self::Control { .. } => MessageKind::Control,
            Self::Catalog { .. } => MessageKind::Catalog,
            Self::Spec { .. } => MessageKind::Spec,
            Self::ConnectionStatus { .. } => MessageKind::ConnectionStatus,
            Self::Other(_) => MessageKind::Other,
        }
    }

    /// Returns the record payload if this is a `RECORD` message.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordMessage> {
        match self {
            Self::Record { record } => Some(record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reparse(raw: &str) -> (Message, serde_json::Value) {
        let msg: Message = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&msg).unwrap();
        (msg, back)
    }

    #[test]
    fn record_wire_format() {
        let msg = Message::record("users", json!({"id": 1}), 1_700_000_000_000)
            .with_namespace(Some("public".into()));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "RECORD");
        assert_eq!(value["record"]["stream"], "users");
        assert_eq!(value["record"]["namespace"], "public");
        assert_eq!(value["record"]["data"]["id"], 1);
        assert_eq!(value["record"]["emitted_at"], 1_700_000_000_000_i64);
    }

    #[test]
    fn record_without_namespace_omits_key() {
        let msg = Message::record("users", json!({}), 0);
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value["record"].get("namespace").is_none());
    }

    #[test]
    fn record_meta_preserved() {
        let raw = r#"{"type":"RECORD","record":{"stream":"users","data":{"id":1},"emitted_at":10,"meta":{"changes":[{"field":"id","change":"NULLED"}]}}}"#;
        let (msg, back) = reparse(raw);
        assert_eq!(msg.as_record().unwrap().extra["meta"]["changes"][0]["field"], "id");
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn malformed_record_is_an_error() {
        let raw = r#"{"type":"RECORD","record":{"data":{},"emitted_at":1}}"#;
        assert!(serde_json::from_str::<Message>(raw).is_err());
    }

    #[test]
    fn state_payload_preserved_verbatim() {
        let raw = r#"{"type":"STATE","state":{"data":{"cursor":"2026-01-01"},"extra":[1,2]}}"#;
        let (msg, back) = reparse(raw);
        assert_eq!(msg.kind(), MessageKind::State);
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn log_with_any_level_passes_through() {
        let raw = r#"{"type":"LOG","log":{"level":"NOTICE","message":"hi"}}"#;
        let (msg, back) = reparse(raw);
        assert_eq!(msg.kind(), MessageKind::Log);
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn unknown_type_kept_whole() {
        let raw = r#"{"type":"DESTINATION_CATALOG","destination_catalog":{"operations":[]}}"#;
        let (msg, back) = reparse(raw);
        assert_eq!(msg.kind(), MessageKind::Other);
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn untyped_value_is_an_error() {
        assert!(serde_json::from_str::<Message>("42").is_err());
        assert!(serde_json::from_str::<Message>(r#"{"record":{}}"#).is_err());
    }

    #[test]
    fn connection_status_tag() {
        let raw = r#"{"type":"CONNECTION_STATUS","connection_status":{"status":"SUCCEEDED"}}"#;
        let (msg, _) = reparse(raw);
        assert_eq!(msg.kind(), MessageKind::ConnectionStatus);
        assert_eq!(msg.kind().to_string(), "CONNECTION_STATUS");
        assert_eq!(MessageKind::from_wire("CONNECTION_STATUS"), Some(msg.kind()));
    }

    #[test]
    fn with_namespace_ignores_non_records() {
        let msg = Message::State { state: json!({"data": {}}) };
        assert_eq!(msg.clone().with_namespace(Some("x".into())), msg);
        assert!(msg.as_record().is_none());
    }
}
