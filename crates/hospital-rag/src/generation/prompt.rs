//! Prompt template for hospital chat answers

use crate::retrieval::SearchResult;

/// Prompt builder for chat queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Retrieved chunk texts joined by newlines, in retrieval order
    pub fn build_context(results: &[SearchResult]) -> String {
        results
            .iter()
            .map(|r| r.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Fill the assistant template with context and question
    pub fn build_chat_prompt(context: &str, question: &str) -> String {
        format!(
            r#"You are a professional and empathetic hospital assistant. Your name is Jane. Use the following context to answer the question naturally and accurately.

Context:
{context}

Question: {question}

Instructions:
1. Answer in a professional and warm manner
2. Use only the information from the context
3. If you do not have enough information, say so politely
4. Avoid technical jargon unless necessary
5. Tailor the answer to the type of question

Answer:"#,
            context = context,
            question = question
        )
    }
}
