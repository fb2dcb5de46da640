use std::collections::{HashMap, HashSet};

use crate::document::{DocId, Document};

/// Document arena plus each document's token sequence, keyed by [`DocId`].
///
/// Entries are written once at insertion and never recomputed. The arena
/// length is the total corpus size used as the IDF numerator.
#[derive(Debug, Default)]
pub struct ForwardIndex {
    documents: Vec<Document>,
    tokens: Vec<Vec<String>>,
}

impl ForwardIndex {
    /// Store a document and its token sequence, assigning the next [`DocId`].
    pub fn insert(&mut self, document: Document, tokens: Vec<String>) -> DocId {
        let id = self.documents.len() as DocId;
        self.documents.push(document);
        self.tokens.push(tokens);
        id
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id as usize)
    }

    /// Token sequence of an indexed document, duplicates retained in order.
    pub fn tokens(&self, id: DocId) -> &[String] {
        &self.tokens[id as usize]
    }

    /// Total number of documents ever indexed.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Token to the set of documents containing it at least once.
///
/// Membership only; occurrence counts live in the frequency cache.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, HashSet<DocId>>,
}

impl InvertedIndex {
    pub fn insert(&mut self, term: &str, document: DocId) {
        if let Some(documents) = self.postings.get_mut(term) {
            documents.insert(document);
        } else {
            self.postings
                .insert(term.to_owned(), HashSet::from([document]));
        }
    }

    /// Documents containing `term`, or `None` for a never-indexed term.
    pub fn documents_with(&self, term: &str) -> Option<&HashSet<DocId>> {
        self.postings.get(term)
    }

    /// Number of documents containing `term`, the IDF denominator.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, HashSet::len)
    }

    /// Number of distinct terms seen across the corpus.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}
