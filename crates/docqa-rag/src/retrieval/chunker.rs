//! Fixed-size text chunking with overlap

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};

/// Text chunker with configurable window size and overlap
///
/// Offsets are measured in characters, not bytes, so multi-byte text
/// never splits inside a code point.
#[derive(Debug, Clone)]
pub struct TextChunker {
    /// Window length in characters
    chunk_size: usize,
    /// Characters shared between consecutive windows
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker
    ///
    /// Fails when `chunk_size` is zero or `overlap >= chunk_size`, since
    /// either would make the window step non-positive and the walk below
    /// would never advance.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_configuration(
                "chunk_size must be greater than 0",
            ));
        }
        if overlap >= chunk_size {
            return Err(Error::invalid_configuration(format!(
                "overlap ({}) must be less than chunk_size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from the chunking config section
    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Split text into overlapping windows
    ///
    /// The first window starts at offset 0 and each next window starts
    /// `chunk_size - overlap` characters later. The final window is
    /// truncated at end of text. Empty text yields no windows.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let step = self.chunk_size - self.overlap;

        let mut chunks = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            chunks.push(chars[start..end].iter().collect());
            start += step;
        }
        chunks
    }
}
