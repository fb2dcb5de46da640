use std::fmt;

/// Identity handle for an indexed document: the arena slot assigned by the
/// engine at insertion, counting up from 0 in insertion order.
pub type DocId = u32;

/// An immutable piece of text content.
///
/// Two documents with identical text are still distinct corpus entries. The
/// engine tells them apart by the [`DocId`] it assigns when a document is
/// added, never by content equality.
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
