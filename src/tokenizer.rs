//! Dialect-sniffing tokenizer.

use crate::field_type::Type;
use crate::infer::sniff_dialect;
use crate::metadata::Dialect;
use crate::sample::{SampleLimits, Thresholds};
use crate::scanner::{ScanContext, Scanner};
use crate::token::Token;

/// Tokenizer that sniffs its own dialect.
///
/// Construction runs every inference pass over `content` up front; after that
/// the dialect is fixed and [`next_token`](Tokenizer::next_token) reads fields
/// from the start of the content with it.
///
/// # Example
///
/// ```
/// use csv_sniff::{Separator, Tokenizer, Type};
///
/// let mut tokenizer = Tokenizer::new("a;b\n1;2\n3;4\n", None);
/// assert_eq!(tokenizer.dialect().separator, Separator::Semicolon);
/// assert!(tokenizer.has_header());
/// assert_eq!(tokenizer.types(), Some(&[Type::Integer, Type::Integer][..]));
///
/// let records: Vec<Vec<String>> = tokenizer
///     .records()
///     .map(|record| record.iter().map(|t| t.data().to_string()).collect())
///     .collect();
/// assert_eq!(records[1], vec!["1", "2"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
    dialect: Dialect,
}

impl<'a> Tokenizer<'a> {
    /// Sniff `content` with the default sample limits and thresholds.
    ///
    /// `header_hint`, when given, decides the header question instead of
    /// inference.
    pub fn new(content: &'a str, header_hint: Option<bool>) -> Self {
        Self::with_options(
            content,
            header_hint,
            &SampleLimits::default(),
            &Thresholds::default(),
        )
    }

    /// Sniff `content` with explicit sample limits and thresholds.
    pub fn with_options(
        content: &'a str,
        header_hint: Option<bool>,
        limits: &SampleLimits,
        thresholds: &Thresholds,
    ) -> Self {
        Self {
            scanner: Scanner::new(content),
            dialect: sniff_dialect(content, header_hint, limits, thresholds),
        }
    }

    /// Read the next field with the sniffed dialect.
    pub fn next_token(&mut self) -> Token {
        let ctx = ScanContext::normal(self.dialect.scan_settings());
        self.scanner.next_token(&ctx)
    }

    /// Whether the first record is a header (inferred or given).
    pub fn has_header(&self) -> bool {
        self.dialect.has_header
    }

    /// Column types, or `None` if records disagreed on their width.
    pub fn types(&self) -> Option<&[Type]> {
        self.dialect.types.as_deref()
    }

    /// The sniffed dialect.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// True if the character last read is a line break.
    pub fn is_eol(&self) -> bool {
        self.scanner.is_eol()
    }

    /// True once the content is exhausted.
    pub fn is_eof(&self) -> bool {
        self.scanner.is_eof()
    }

    /// Iterate over the remaining records, header included.
    pub fn records(&mut self) -> Records<'_, 'a> {
        Records {
            tokenizer: self,
            done: false,
        }
    }
}

/// Iterator over records, created by [`Tokenizer::records`].
#[derive(Debug)]
pub struct Records<'t, 'a> {
    tokenizer: &'t mut Tokenizer<'a>,
    done: bool,
}

impl Iterator for Records<'_, '_> {
    type Item = Vec<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = Vec::new();
        loop {
            let token = self.tokenizer.next_token();
            let last = token.is_last_in_record();
            self.done = token.is_eof();
            record.push(token);
            if last {
                break;
            }
        }

        // nothing but end of content
        if self.done && record.len() == 1 && record[0].value.is_empty() {
            return None;
        }
        Some(record)
    }
}
