//! Key-note extraction
//!
//! Selects a bounded number of key-point sentences (5-10) from a document,
//! in document order.

pub mod extractor;
