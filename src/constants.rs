pub const ALPHABET_LEN: i32 = 26;

pub const MIN_SHIFT: i32 = 1;
pub const MAX_SHIFT: i32 = 25;

/// Words counted by the likelihood ranking, in scoring order.
pub const COMMON_WORDS: [&str; 10] = [
    "the", "and", "you", "that", "was", "for", "are", "with", "his", "they",
];

/// Characters accepted immediately after a common word.
pub const WORD_TERMINATORS: [char; 3] = [' ', '.', ','];

pub const TOP_CANDIDATES: usize = 3;
pub const PREVIEW_CHARS: usize = 50;

pub const EXAMPLE_SHIFT: i32 = 3;
pub const EXAMPLE_ENCODED: &str = "WKH HDVW HUJLQ ZLOO ULVH DJDLQ";
/// Caption shown next to the example; the cipher text itself decodes to
/// "THE EAST ERGIN WILL RISE AGAIN".
pub const EXAMPLE_DECODED: &str = "THE EAST ENGINE WILL RISE AGAIN";

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_URL: &str = "ws://127.0.0.1:8080";
