//! In-memory TF-IDF document search engine.
//!
//! Documents are split into whitespace-delimited tokens and indexed into a
//! forward index (document to token sequence) and an inverse index (token to
//! containing documents). Term statistics are memoized in a frequency cache
//! on every add, so queries only look up cached values: a document's score
//! for a query is the sum of term-frequency times inverse-document-frequency
//! over the query terms, and results come back sorted by descending score.
//!
//! [`SearchEngine`] is a plain mutable structure intended for one thread of
//! control; [`SharedSearchEngine`] wraps it in a lock for shared use.

pub mod document;
pub mod engine;
pub mod frequency;
pub mod index;
pub mod shared;
pub mod tokenizer;

pub use document::{DocId, Document};
pub use engine::SearchEngine;
pub use shared::SharedSearchEngine;
