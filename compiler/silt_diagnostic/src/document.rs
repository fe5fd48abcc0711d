//! Source documents and their diagnostics.

use silt_ir::{MessageId, SourceRange};
use std::sync::Arc;

use crate::{ErrorCode, Message, Severity};

/// Append-only message list.
///
/// Messages keep insertion order; callers wanting position order use
/// [`Diagnostics::sorted_by_position`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Message>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return its id.
    pub fn push(&mut self, message: Message) -> MessageId {
        let id = MessageId::from_raw(u32::try_from(self.messages.len()).unwrap_or(u32::MAX));
        self.messages.push(message);
        id
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.get(id.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(Message::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == severity)
            .count()
    }

    /// Messages ordered by start offset. Ties keep insertion order.
    pub fn sorted_by_position(&self) -> Vec<&Message> {
        let mut sorted: Vec<&Message> = self.messages.iter().collect();
        sorted.sort_by_key(|m| m.range.span.start);
        sorted
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// One source buffer plus everything reported about it.
#[derive(Clone, Debug)]
pub struct SourceDocument {
    filename: Arc<str>,
    source: String,
    messages: Diagnostics,
}

impl SourceDocument {
    pub fn new(filename: impl Into<Arc<str>>, source: impl Into<String>) -> Self {
        SourceDocument {
            filename: filename.into(),
            source: source.into(),
            messages: Diagnostics::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn messages(&self) -> &Diagnostics {
        &self.messages
    }

    /// Record a message anchored in this document.
    pub fn report(
        &mut self,
        code: ErrorCode,
        severity: Severity,
        text: impl Into<String>,
        range: SourceRange,
    ) -> MessageId {
        self.messages.push(Message {
            code,
            severity,
            text: text.into(),
            range,
            filename: Arc::clone(&self.filename),
        })
    }

    pub fn error(&mut self, code: ErrorCode, text: impl Into<String>, range: SourceRange) -> MessageId {
        self.report(code, Severity::Error, text, range)
    }

    /// Text of the one-based `line`, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.source.split('\n').nth(index).map(|l| l.trim_end_matches('\r'))
    }
}

#[cfg(test)]
mod tests;
