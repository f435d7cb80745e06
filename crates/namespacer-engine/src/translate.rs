//! Newline-delimited message translation between connector processes.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use namespacer_types::message::Message;

use crate::errors::TranslateError;
use crate::mapper::StreamMapper;

/// Counts from one [`translate_lines`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateSummary {
    /// Messages read and written.
    pub messages: u64,
    /// `RECORD` messages whose stream reference was rewritten.
    pub records: u64,
    /// Messages of any other kind, copied unchanged.
    pub passthrough: u64,
}

/// Read JSON messages line by line from `reader`, map each one, and write
/// them to `writer` one per line.
///
/// Blank lines are skipped. The writer is flushed before returning.
///
/// # Errors
///
/// Returns [`TranslateError::Malformed`] with the 1-based line number if a
/// line is not a valid message, or [`TranslateError::Io`] on read/write
/// failure. Messages before the failing line have already been written.
pub async fn translate_lines<R, W>(
    mapper: &StreamMapper,
    reader: R,
    mut writer: W,
) -> Result<TranslateSummary, TranslateError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = TranslateSummary::default();
    let mut lines = reader.lines();
    let mut line_no = 0_usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let message: Message = serde_json::from_str(trimmed)
            .map_err(|source| TranslateError::Malformed { line: line_no, source })?;
        let mapped = mapper.map_message(&message);

        if mapped.as_record().is_some() {
            summary.records += 1;
        } else {
            summary.passthrough += 1;
            tracing::trace!(kind = %mapped.kind(), line = line_no, "Passing message through");
        }
        summary.messages += 1;

        let mut encoded = serde_json::to_vec(&mapped)
            .map_err(|source| TranslateError::Encode { line: line_no, source })?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
    }

    writer.flush().await?;
    tracing::debug!(
        messages = summary.messages,
        records = summary.records,
        passthrough = summary.passthrough,
        "Message translation finished"
    );
    Ok(summary)
}
