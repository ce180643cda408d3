//! TF-IDF ranking of chunks against a question

use std::collections::BTreeMap;

use unicode_segmentation::UnicodeSegmentation;

/// A chunk index with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    /// Index into the original chunk list
    pub index: usize,
    /// Raw TF-IDF dot product against the question
    pub score: f64,
}

/// Lowercased term counts for one piece of text
///
/// An ordered map so that score sums always run in the same term order,
/// keeping scores bit-for-bit reproducible across calls.
fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in text.unicode_words() {
        *counts.entry(token.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Score chunks against a question and return the best matches
///
/// The question itself is part of the corpus used for document
/// frequencies, so the IDF denominator counts chunks plus one. Weights
/// are raw term count times smooth IDF (`ln((1+n)/(1+df)) + 1`), and the
/// score is the plain dot product of the two weight vectors. There is no
/// length normalization: a long chunk can outscore a short one on sheer
/// term mass.
///
/// Results are sorted by descending score; equal scores keep the
/// original chunk order. Only strictly positive scores are returned, at
/// most `top_k` of them.
pub fn rank(chunks: &[String], question: &str, top_k: usize) -> Vec<ScoredChunk> {
    if chunks.is_empty() {
        return Vec::new();
    }

    let chunk_counts: Vec<BTreeMap<String, usize>> =
        chunks.iter().map(|c| term_counts(c)).collect();
    let question_counts = term_counts(question);

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for counts in chunk_counts.iter().chain(std::iter::once(&question_counts)) {
        for term in counts.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }
    let corpus_size = chunk_counts.len() + 1;

    let idf = |term: &str| -> f64 {
        let df = document_frequency.get(term).copied().unwrap_or(0);
        ((1 + corpus_size) as f64 / (1 + df) as f64).ln() + 1.0
    };

    let mut scored: Vec<ScoredChunk> = chunk_counts
        .iter()
        .enumerate()
        .map(|(index, counts)| {
            let score: f64 = question_counts
                .iter()
                .filter_map(|(term, q_count)| {
                    counts.get(term).map(|c_count| {
                        let weight = idf(term);
                        (*c_count as f64 * weight) * (*q_count as f64 * weight)
                    })
                })
                .sum();
            ScoredChunk { index, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.retain(|s| s.score > 0.0);
    scored.truncate(top_k);
    scored
}
