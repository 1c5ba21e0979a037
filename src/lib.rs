//! Caesar cipher decoding: a pure core (known-shift decode, brute force,
//! common-word ranking) behind a small WebSocket service and terminal client.

pub mod algos;
pub mod constants;
pub mod error;
pub mod protocol;
pub mod render;
pub mod service;
pub mod socket;
pub mod structs;
pub mod traits;
pub mod utils;

pub use algos::caesar::{brute_force, decode, encode};
pub use algos::ranking::{rank, score};
pub use error::{DecoderError, Result};
pub use structs::{Caesar, Candidate, RankedCandidate};
