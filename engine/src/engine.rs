use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::document::{DocId, Document};
use crate::frequency::FrequencyCache;
use crate::index::{ForwardIndex, InvertedIndex};
use crate::tokenizer::tokenize;

/// In-memory TF-IDF search engine over a growing corpus of documents.
///
/// Adding a document tokenizes it, records it in the forward and inverse
/// indexes, and refreshes the frequency cache for the terms it contains.
/// Searching unions the inverse-index entries of the query terms and ranks
/// the candidates by their cached TF-IDF scores. Documents are never removed.
///
/// This is a plain mutable structure with no synchronization; wrap it in
/// [`SharedSearchEngine`] to share it across threads.
///
/// [`SharedSearchEngine`]: crate::shared::SharedSearchEngine
#[derive(Debug, Default)]
pub struct SearchEngine {
    forward: ForwardIndex,
    inverse: InvertedIndex,
    frequencies: FrequencyCache,
}

impl SearchEngine {
    /// Engine pre-loaded with an initial batch of documents.
    pub fn new(initial: Vec<Document>) -> Self {
        let mut engine = Self::default();
        engine.add_documents(initial);
        engine
    }

    /// Index a single document. Equivalent to a one-element
    /// [`add_documents`](Self::add_documents) batch.
    pub fn add_document(&mut self, document: Document) -> DocId {
        self.add_documents(vec![document])[0]
    }

    /// Index a batch of documents and return their assigned ids.
    ///
    /// All forward/inverse index updates happen before any frequency work,
    /// so a term shared between batch members is refreshed once instead of
    /// once per document. IDF is recomputed for every distinct term present
    /// in the batch; terms absent from the batch keep their cached value
    /// even though the corpus size changed.
    pub fn add_documents(&mut self, documents: Vec<Document>) -> Vec<DocId> {
        let added: Vec<DocId> = documents.into_iter().map(|d| self.index(d)).collect();
        self.refresh_frequencies(&added);
        tracing::debug!(
            added = added.len(),
            total_documents = self.forward.len(),
            distinct_terms = self.inverse.term_count(),
            "indexed document batch"
        );
        added
    }

    fn index(&mut self, document: Document) -> DocId {
        let tokens = tokenize(document.content());
        let id = self.forward.insert(document, tokens);
        for term in self.forward.tokens(id) {
            self.inverse.insert(term, id);
        }
        id
    }

    fn refresh_frequencies(&mut self, added: &[DocId]) {
        for &id in added {
            let mut counts: HashMap<&str, u32> = HashMap::new();
            for token in self.forward.tokens(id) {
                *counts.entry(token).or_insert(0) += 1;
            }
            for (term, count) in counts {
                self.frequencies.cache_term_frequency(term, id, count);
            }
        }

        let touched: HashSet<&str> = added
            .iter()
            .flat_map(|&id| self.forward.tokens(id))
            .map(String::as_str)
            .collect();
        let total = self.forward.len();
        for term in touched {
            let containing = self.inverse.document_frequency(term);
            let idf = (total as f64 / containing as f64).ln();
            self.frequencies.cache_inverse_document_frequency(term, idf);
        }
    }

    /// Rank the documents containing at least one query term, most relevant
    /// first.
    ///
    /// A document's score is the sum of TF x IDF over the query terms, one
    /// contribution per occurrence in the query, so repeating a term weights
    /// it higher. A term that was never indexed contributes nothing and
    /// excludes nothing. Equal scores are ordered by ascending [`DocId`],
    /// i.e. insertion order. An empty query yields an empty result.
    pub fn search(&self, terms: &[&str]) -> Vec<DocId> {
        let mut candidates: Vec<DocId> = terms
            .iter()
            .filter_map(|term| self.inverse.documents_with(term))
            .flatten()
            .copied()
            .collect();
        candidates.sort_unstable();
        candidates.dedup();

        let mut scored: Vec<(DocId, f64)> = candidates
            .into_iter()
            .map(|id| (id, self.relevance(id, terms)))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.into_iter().map(|(id, _)| id).collect()
    }

    fn relevance(&self, document: DocId, terms: &[&str]) -> f64 {
        terms
            .iter()
            .map(|term| self.frequencies.tf_idf(document, term))
            .sum()
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.forward.document(id)
    }

    /// Total number of documents indexed so far.
    pub fn document_count(&self) -> usize {
        self.forward.len()
    }

    /// Number of distinct terms seen across the corpus.
    pub fn term_count(&self) -> usize {
        self.inverse.term_count()
    }
}
