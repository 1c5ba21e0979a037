//! Plain-text layout of responses for the terminal client.

use std::fmt::Write;

use crate::protocol::Response;

const RULE: &str = "---";

pub fn render(response: &Response) -> String {
    let mut out = String::new();

    match response {
        Response::Decoded { text, note, .. } => {
            let _ = writeln!(out, "Decoded Result");
            let _ = writeln!(out, "{}", text);
            let _ = writeln!(out, "{}", note);
        }
        Response::BruteForce { results, likely } => {
            let _ = writeln!(out, "Brute Force Results");
            let _ = writeln!(out, "Trying all possible shifts (1-25):");
            for entry in results {
                let _ = writeln!(
                    out,
                    "Shift {:>2}: {} ({} characters)",
                    entry.shift, entry.preview, entry.length
                );
            }

            let _ = writeln!(out, "{}", RULE);
            let _ = writeln!(out, "Most likely candidates (common English patterns):");
            if likely.is_empty() {
                let _ = writeln!(
                    out,
                    "No obvious English patterns detected. Check all results above."
                );
            }
            for candidate in likely {
                let _ = writeln!(
                    out,
                    "Shift {} (Score: {})",
                    candidate.shift, candidate.score
                );
                let _ = writeln!(out, "{}", candidate.text);
                let _ = writeln!(out, "{}", RULE);
            }
        }
        Response::Example {
            shift,
            encoded,
            decoded,
        } => {
            let _ = writeln!(out, "Encoded text (Shift {}):", shift);
            let _ = writeln!(out, "{}", encoded);
            let _ = writeln!(out, "Decoded text:");
            let _ = writeln!(out, "{}", decoded);
        }
        Response::Error { message } => {
            let _ = writeln!(out, "Error: {}", message);
        }
    }

    out
}
