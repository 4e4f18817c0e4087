use std::io;
use thiserror::Error;

/// Error type for the sniffer's input adapters.
///
/// Tokenizing and dialect inference themselves never fail; these errors only
/// come from getting the content into memory as text.
#[derive(Error, Debug)]
pub enum SnifferError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}

/// Result type alias for sniffing operations.
pub type Result<T> = std::result::Result<T, SnifferError>;
