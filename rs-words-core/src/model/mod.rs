//! Top-level module for word generation.
//!
//! - Random words over a fixed lowercase alphabet (`WordGenerator`)
//! - The generate → write → check loop (`write_words`, `generate_file`)

/// Random word generator over the lowercase ASCII alphabet.
///
/// Word lengths are drawn uniformly from `WORD_LENGTH`, letters uniformly
/// with replacement from `ALPHABET`.
pub mod word;

/// File writer loop.
///
/// Appends newline-terminated words to a sink until the number of bytes
/// written reaches the target size.
pub mod writer;
