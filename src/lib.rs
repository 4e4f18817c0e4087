//! csv-sniff: dialect-sniffing tokenizer for delimited text
//!
//! Give it raw CSV-like text and it works out how to read it: the field
//! separator, whether records are indented, whether leading whitespace
//! belongs to the values, whether the first record is a header, and a type
//! for every column. It then tokenizes the text with that dialect.
//!
//! # Quick Start
//!
//! ```
//! use csv_sniff::{Separator, Tokenizer, Type};
//!
//! let mut tokenizer = Tokenizer::new("a,b,c\n1,2,3\n4,5,6\n", None);
//!
//! assert_eq!(tokenizer.dialect().separator, Separator::Comma);
//! assert!(tokenizer.has_header());
//! assert_eq!(
//!     tokenizer.types(),
//!     Some(&[Type::Integer, Type::Integer, Type::Integer][..])
//! );
//!
//! let first = tokenizer.next_token();
//! assert_eq!(first.data(), "a");
//! ```
//!
//! For files, bytes and readers use [`Sniffer`], which also reports field
//! names:
//!
//! ```no_run
//! use csv_sniff::Sniffer;
//!
//! let metadata = Sniffer::new().header(true).sniff_path("data.csv").unwrap();
//! println!("Separator: {}", metadata.dialect.separator);
//! println!("Fields: {:?}", metadata.fields);
//! println!("Types: {:?}", metadata.types());
//! ```
//!
//! # How sniffing works
//!
//! Five passes run over the start of the content, each with a fresh
//! [`Scanner`]:
//! 1. Separator: every candidate (`,` `;` `:` `|` tab) splits the first 10
//!    records; the widest consistent split wins.
//! 2. Indentation: all of the first 100 records must start with whitespace.
//! 3. Whitespace: a dominant leading-space count decides whether the spaces
//!    are data.
//! 4. Header: the first record is a header when most data values differ in
//!    shape from the value heading their column.
//! 5. Types: each value is classified and folded into its column along a
//!    widening lattice ([`Type::merge`]).
//!
//! Sniffing never fails. Ambiguous input falls back to defaults and
//! malformed quotes are read leniently.

mod encoding;
mod error;
mod field_type;
pub mod infer;
mod metadata;
mod sample;
mod scanner;
mod sniffer;
mod token;
mod tokenizer;

pub use error::{Result, SnifferError};
pub use field_type::Type;
pub use metadata::{Dialect, Metadata, ScanSettings, Separator};
pub use sample::{SampleLimits, Thresholds};
pub use sniffer::Sniffer;
pub use token::{Terminator, Token, TokenKind};
pub use tokenizer::{Records, Tokenizer};

// Re-export for advanced usage
pub use encoding::{decode_utf8, skip_bom};
pub use infer::sniff_dialect;
pub use scanner::{ScanContext, ScanMode, Scanner};
