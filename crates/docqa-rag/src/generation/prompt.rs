//! Prompt templates for document-grounded answers

/// Separator placed between chunks in the prompt context
pub const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

/// Prompt builder for question answering
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join selected chunks into the prompt context, best match first
    pub fn build_context(chunks: &[String]) -> String {
        chunks.join(CONTEXT_SEPARATOR)
    }

    /// Prompt grounded in retrieved document content
    pub fn build_grounded_prompt(filename: &str, context: &str, question: &str) -> String {
        format!(
            r#"You are a helpful assistant answering questions using only the provided document content.
(From document: {filename})

{context}

Question: {question}

Answer:"#,
            filename = filename,
            context = context,
            question = question
        )
    }

    /// Prompt used when retrieval finds nothing relevant to the question
    pub fn build_fallback_prompt(question: &str) -> String {
        format!(
            r#"Not found in documents; general answer below.

Question: {question}

Answer:"#,
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_joins_chunks_with_separator() {
        let chunks = vec!["first passage".to_string(), "second passage".to_string()];
        let context = PromptBuilder::build_context(&chunks);
        assert_eq!(context, "first passage\n\n---\n\nsecond passage");
    }

    #[test]
    fn test_context_of_single_chunk_has_no_separator() {
        let chunks = vec!["only passage".to_string()];
        assert_eq!(PromptBuilder::build_context(&chunks), "only passage");
    }

    #[test]
    fn test_grounded_prompt_names_the_document() {
        let prompt = PromptBuilder::build_grounded_prompt(
            "report.pdf",
            "the relevant passage",
            "what does it say?",
        );
        assert!(prompt.starts_with("You are a helpful assistant"));
        assert!(prompt.contains("(From document: report.pdf)"));
        assert!(prompt.contains("the relevant passage"));
        assert!(prompt.contains("Question: what does it say?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_fallback_prompt_shape() {
        let prompt = PromptBuilder::build_fallback_prompt("what is the capital of France?");
        assert!(prompt.starts_with("Not found in documents; general answer below."));
        assert!(prompt.contains("Question: what is the capital of France?"));
        assert!(prompt.ends_with("Answer:"));
    }
}
