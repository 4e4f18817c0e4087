//! Sniffer builder and input adapters.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::encoding::decode_utf8;
use crate::error::Result;
use crate::metadata::Metadata;
use crate::sample::{SampleLimits, Thresholds};
use crate::tokenizer::Tokenizer;

/// Configurable front door to dialect sniffing.
///
/// # Example
///
/// ```
/// use csv_sniff::{Separator, Sniffer};
///
/// let metadata = Sniffer::new()
///     .sniff_str("name|age\nAlice|30\nBob|25\n");
/// assert_eq!(metadata.dialect.separator, Separator::Pipe);
/// assert!(metadata.dialect.has_header);
/// assert_eq!(metadata.fields, vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sniffer {
    /// Caller-supplied header flag.
    header: Option<bool>,
    /// Rows scanned per inference pass.
    limits: SampleLimits,
    /// Heuristic cut-offs.
    thresholds: Thresholds,
}

impl Sniffer {
    /// Create a new Sniffer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare whether the input has a header row (skips header inference).
    pub fn header(&mut self, has_header: bool) -> &mut Self {
        self.header = Some(has_header);
        self
    }

    /// Set how many records each inference pass scans.
    pub fn limits(&mut self, limits: SampleLimits) -> &mut Self {
        self.limits = limits;
        self
    }

    /// Set the header and whitespace thresholds.
    pub fn thresholds(&mut self, thresholds: Thresholds) -> &mut Self {
        self.thresholds = thresholds;
        self
    }

    /// Sniff the file at the given path.
    pub fn sniff_path<P: AsRef<Path>>(&self, path: P) -> Result<Metadata> {
        let file = File::open(path.as_ref())?;
        self.sniff_reader(BufReader::new(file))
    }

    /// Sniff everything `reader` yields.
    pub fn sniff_reader<R: Read>(&self, mut reader: R) -> Result<Metadata> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.sniff_bytes(&data)
    }

    /// Sniff UTF-8 bytes. A leading byte order mark is ignored.
    pub fn sniff_bytes(&self, data: &[u8]) -> Result<Metadata> {
        let content = decode_utf8(data)?;
        Ok(self.sniff_str(content))
    }

    /// Sniff text already in memory.
    pub fn sniff_str(&self, content: &str) -> Metadata {
        let mut tokenizer = self.tokenizer(content);
        let first = tokenizer.records().next().unwrap_or_default();
        let num_fields = first.len();

        let fields = if tokenizer.has_header() {
            first.iter().map(|token| token.data().to_string()).collect()
        } else {
            (0..num_fields).map(|i| format!("field_{}", i + 1)).collect()
        };

        debug!(bytes = content.len(), num_fields, "sniffed content");
        Metadata::new(tokenizer.dialect().clone(), num_fields, fields)
    }

    /// A [`Tokenizer`] over `content` configured like this sniffer.
    pub fn tokenizer<'a>(&self, content: &'a str) -> Tokenizer<'a> {
        Tokenizer::with_options(content, self.header, &self.limits, &self.thresholds)
    }
}
