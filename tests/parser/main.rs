//! Integration tests for Layer 2: Parser
//!
//! Tests for tokenizing, object phrases and the verb vocabulary.

mod parse;
mod vocabulary;
