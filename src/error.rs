//! Crate-wide error type.
//!
//! Every fallible operation returns `Result<_, DigestError>`; no call panics
//! past its own boundary. Two kinds cover the whole failure surface:
//! rejected input ([`ErrorKind::Validation`]) and unexpected internal faults
//! wrapped with their original message ([`ErrorKind::Processing`]).
//!
//! All operations are deterministic pure computations, so there is no retry
//! story: the same input reproduces the same failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input missing, empty, or yielding no usable sentences.
    Validation,
    /// Unexpected failure during tokenization or scoring.
    Processing,
}

/// Error returned by every fallible operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct DigestError {
    kind: ErrorKind,
    message: String,
}

impl DigestError {
    /// A validation failure: the input cannot be processed.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    /// A processing failure: something unexpected went wrong mid-computation.
    pub fn processing(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Processing,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
