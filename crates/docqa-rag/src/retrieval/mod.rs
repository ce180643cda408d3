//! Chunking and TF-IDF retrieval over a single document

pub mod chunker;
pub mod ranker;

pub use chunker::TextChunker;
pub use ranker::{rank, ScoredChunk};

use crate::config::{ChunkingConfig, RetrievalConfig};
use crate::error::Result;

/// Chunk-and-rank facade used by the ask path
///
/// Holds no document state; every call chunks and scores from scratch.
#[derive(Debug, Clone)]
pub struct Retriever {
    chunker: TextChunker,
    top_k: usize,
}

impl Retriever {
    /// Create a retriever from the chunking and retrieval config sections
    pub fn new(chunking: &ChunkingConfig, retrieval: &RetrievalConfig) -> Result<Self> {
        Ok(Self {
            chunker: TextChunker::from_config(chunking)?,
            top_k: retrieval.top_k,
        })
    }

    /// Most relevant chunks of a document for a question, best first
    ///
    /// Returns up to `top_k` chunk texts with strictly positive scores,
    /// never padded. Empty document text yields an empty list.
    pub fn retrieve(&self, document_text: &str, question: &str) -> Vec<String> {
        let chunks = self.chunker.chunk(document_text);
        let ranked = ranker::rank(&chunks, question, self.top_k);
        ranked
            .into_iter()
            .map(|s| chunks[s.index].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_retriever(top_k: usize) -> Retriever {
        let chunking = ChunkingConfig {
            chunk_size: 50,
            chunk_overlap: 10,
        };
        let retrieval = RetrievalConfig { top_k };
        Retriever::new(&chunking, &retrieval).unwrap()
    }

    #[test]
    fn test_retrieve_finds_the_relevant_region() {
        let mut text = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(8);
        text.push_str("the launch code is kept in the red binder ");
        text.push_str(&"sed do eiusmod tempor incididunt ut labore et dolore ".repeat(8));

        let retriever = small_retriever(2);
        let results = retriever.retrieve(&text, "where is the launch code");

        assert!(!results.is_empty());
        assert!(results.len() <= 2);
        assert!(results[0].contains("launch code") || results[0].contains("binder"));
    }

    #[test]
    fn test_retrieve_empty_document_returns_empty() {
        let retriever = small_retriever(3);
        assert!(retriever.retrieve("", "anything").is_empty());
    }

    #[test]
    fn test_retrieve_unrelated_question_returns_empty() {
        let retriever = small_retriever(3);
        let results = retriever.retrieve("apple banana cherry date", "zzz999 qqq888");
        assert!(results.is_empty());
    }

    #[test]
    fn test_new_rejects_degenerate_chunking() {
        let chunking = ChunkingConfig {
            chunk_size: 100,
            chunk_overlap: 100,
        };
        let retrieval = RetrievalConfig { top_k: 3 };
        assert!(Retriever::new(&chunking, &retrieval).is_err());
    }
}
