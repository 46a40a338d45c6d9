//! Summarization components
//!
//! Provides frequency-based extractive summarization: the highest-scoring
//! ~30% of sentences, re-emitted in document order.

pub mod extractive;
