//! Random word file generation library.
//!
//! This crate provides:
//! - A random lowercase word generator with optional seeding
//! - A writer loop that fills a file with words until a byte target is met
//! - The configuration and error types shared with the command line front end

/// Word generation and the file writer loop.
pub mod model;

/// Run configuration (output path, target size, seed).
pub mod config;

/// Error types for generation runs.
pub mod error;

/// I/O utilities (output creation).
pub mod io;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use model::word::WordGenerator;
pub use model::writer::{generate_file, write_words, Report};
