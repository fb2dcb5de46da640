use std::collections::HashMap;

use crate::document::DocId;

/// Memoized term statistics, kept consistent with the indexes after every
/// add so queries never compute frequencies on the fly.
///
/// Term frequencies are raw occurrence counts per document, not normalized
/// by document length. Inverse document frequencies are `ln(N / D)` with N
/// the corpus size and D the number of documents containing the term. IDF
/// entries are refreshed only for terms touched by newly added documents;
/// an entry for an untouched term keeps the corpus size it was last computed
/// against (see [`SearchEngine::add_documents`]).
///
/// [`SearchEngine::add_documents`]: crate::engine::SearchEngine::add_documents
#[derive(Debug, Default)]
pub struct FrequencyCache {
    term_frequency: HashMap<String, HashMap<DocId, u32>>,
    inverse_document_frequency: HashMap<String, f64>,
}

impl FrequencyCache {
    pub fn cache_term_frequency(&mut self, term: &str, document: DocId, count: u32) {
        if let Some(per_document) = self.term_frequency.get_mut(term) {
            per_document.insert(document, count);
        } else {
            self.term_frequency
                .insert(term.to_owned(), HashMap::from([(document, count)]));
        }
    }

    pub fn cache_inverse_document_frequency(&mut self, term: &str, idf: f64) {
        if let Some(cached) = self.inverse_document_frequency.get_mut(term) {
            *cached = idf;
        } else {
            self.inverse_document_frequency.insert(term.to_owned(), idf);
        }
    }

    /// Cached occurrence count of `term` in `document`.
    pub fn term_frequency(&self, term: &str, document: DocId) -> u32 {
        self.term_frequency
            .get(term)
            .and_then(|per_document| per_document.get(&document))
            .copied()
            .unwrap_or(0)
    }

    pub fn inverse_document_frequency(&self, term: &str) -> Option<f64> {
        self.inverse_document_frequency.get(term).copied()
    }

    /// TF x IDF contribution of `term` to `document`'s score. A term that
    /// has never been indexed contributes nothing.
    pub fn tf_idf(&self, document: DocId, term: &str) -> f64 {
        let per_document = match self.term_frequency.get(term) {
            Some(per_document) => per_document,
            None => return 0.0,
        };
        let tf = per_document.get(&document).copied().unwrap_or(0);
        let idf = self
            .inverse_document_frequency
            .get(term)
            .copied()
            .unwrap_or(0.0);
        f64::from(tf) * idf
    }
}
