//! Turns requests into responses: input checks, calls into the cipher core
//! and the shaping the terminal and socket front ends display.

use log::{debug, warn};

use crate::algos::caesar::{brute_force, decode};
use crate::algos::ranking::rank;
use crate::constants::{
    EXAMPLE_DECODED, EXAMPLE_ENCODED, EXAMPLE_SHIFT, MAX_SHIFT, MIN_SHIFT, PREVIEW_CHARS,
    TOP_CANDIDATES,
};
use crate::error::{DecoderError, Result};
use crate::protocol::{BruteForceEntry, Request, Response};

/// Answers a raw JSON frame. Malformed input yields an error response.
pub fn handle_text(raw: &str) -> Response {
    match serde_json::from_str::<Request>(raw) {
        Ok(request) => handle(request),
        Err(e) => {
            warn!("Rejected malformed request: {}", e);
            Response::error(DecoderError::Json(e).to_string())
        }
    }
}

pub fn handle(request: Request) -> Response {
    try_handle(request).unwrap_or_else(|e| {
        debug!("Request refused: {}", e);
        Response::error(e.to_string())
    })
}

fn try_handle(request: Request) -> Result<Response> {
    match request {
        Request::KnownShift { text, shift } => {
            check_text(&text)?;
            check_shift(shift)?;

            Ok(Response::Decoded {
                shift,
                text: decode(&text, shift),
                note: format!("Applied backward shift of {} positions", shift),
            })
        }
        Request::BruteForce { text } => {
            check_text(&text)?;

            let candidates = brute_force(&text);
            let mut likely = rank(&candidates);
            likely.truncate(TOP_CANDIDATES);

            let results = candidates
                .into_iter()
                .map(|c| BruteForceEntry {
                    shift: c.shift,
                    preview: preview(&c.text),
                    length: c.text.chars().count(),
                    text: c.text,
                })
                .collect();

            Ok(Response::BruteForce { results, likely })
        }
        Request::Example => Ok(Response::Example {
            shift: EXAMPLE_SHIFT,
            encoded: EXAMPLE_ENCODED.to_string(),
            decoded: EXAMPLE_DECODED.to_string(),
        }),
    }
}

pub fn check_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(DecoderError::EmptyInput);
    }
    Ok(())
}

pub fn check_shift(shift: i32) -> Result<()> {
    if !(MIN_SHIFT..=MAX_SHIFT).contains(&shift) {
        return Err(DecoderError::ShiftOutOfRange(shift));
    }
    Ok(())
}

/// Cuts `text` to its first 50 characters, marking the cut with `...`.
pub fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
