//! JSON messages exchanged over the WebSocket, one per text frame.

use serde::{Deserialize, Serialize};

use crate::structs::RankedCandidate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Request {
    KnownShift { text: String, shift: i32 },
    BruteForce { text: String },
    Example,
}

/// A brute-force attempt as shown in the full result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BruteForceEntry {
    pub shift: i32,
    pub text: String,
    /// First 50 characters followed by `...` when the text is longer.
    pub preview: String,
    /// Length in characters.
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Decoded {
        shift: i32,
        text: String,
        note: String,
    },
    BruteForce {
        results: Vec<BruteForceEntry>,
        likely: Vec<RankedCandidate>,
    },
    Example {
        shift: i32,
        encoded: String,
        decoded: String,
    },
    Error {
        message: String,
    },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error {
            message: message.into(),
        }
    }
}
