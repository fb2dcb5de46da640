use criterion::{criterion_group, criterion_main, Criterion};
use engine::tokenizer::tokenize;
use engine::{Document, SearchEngine};

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumped", "over", "lazy", "dog", "red", "bit", "sat", "in",
    "corner", "cow", "relevant", "chicken", "cat", "noisy",
];

fn corpus(size: usize) -> Vec<Document> {
    (0..size)
        .map(|i| {
            let words: Vec<&str> = (0..20).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect();
            Document::new(words.join(" "))
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus(1)[0].content().to_owned();
    c.bench_function("tokenize_20_words", |b| b.iter(|| tokenize(&text)));
}

fn bench_add_documents(c: &mut Criterion) {
    c.bench_function("add_1000_documents", |b| {
        b.iter(|| SearchEngine::new(corpus(1000)))
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = SearchEngine::new(corpus(1000));
    c.bench_function("search_two_terms_1000_docs", |b| {
        b.iter(|| engine.search(&["brown", "dog"]))
    });
}

criterion_group!(benches, bench_tokenize, bench_add_documents, bench_search);
criterion_main!(benches);
