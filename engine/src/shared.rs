use parking_lot::RwLock;

use crate::document::{DocId, Document};
use crate::engine::SearchEngine;

/// [`SearchEngine`] behind a read-write lock, for callers that share one
/// engine across threads.
///
/// Adds serialize behind the write lock; searches and lookups take the read
/// lock, so reads only block while a write is in flight. The plain engine
/// keeps no synchronization of its own.
pub struct SharedSearchEngine {
    inner: RwLock<SearchEngine>,
}

impl SharedSearchEngine {
    pub fn new(initial: Vec<Document>) -> Self {
        Self {
            inner: RwLock::new(SearchEngine::new(initial)),
        }
    }

    pub fn add_document(&self, document: Document) -> DocId {
        self.inner.write().add_document(document)
    }

    pub fn add_documents(&self, documents: Vec<Document>) -> Vec<DocId> {
        self.inner.write().add_documents(documents)
    }

    pub fn search(&self, terms: &[&str]) -> Vec<DocId> {
        self.inner.read().search(terms)
    }

    /// Clone of the document behind `id`; a borrow could not outlive the
    /// lock guard.
    pub fn document(&self, id: DocId) -> Option<Document> {
        self.inner.read().document(id).cloned()
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_adds_and_searches_stay_consistent() {
        let shared = Arc::new(SharedSearchEngine::new(vec![Document::new(
            "the lazy brown dog",
        )]));

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.add_document(Document::new("another brown document"));
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..25 {
                        let hits = shared.search(&["brown"]);
                        assert!(!hits.is_empty());
                        assert!(hits.contains(&0));
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
        assert_eq!(shared.document_count(), 101);
        assert_eq!(shared.search(&["lazy"]), vec![0]);
        assert_eq!(
            shared.document(0).unwrap().content(),
            "the lazy brown dog"
        );
    }
}
