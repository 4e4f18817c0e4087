//! Header row detection.
//!
//! The first record is a header candidate. Each of its values records a coarse
//! shape; the following records are compared against it column by column, and
//! the first record is taken as a header when most data values look different
//! from the value heading their column.

use tracing::{debug, trace};

use super::type_detection::detect_value_type;
use crate::field_type::Type;
use crate::metadata::ScanSettings;
use crate::sample::{SampleLimits, Thresholds};
use crate::scanner::{ScanContext, Scanner};
use crate::token::Token;

/// Letter case pattern of a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// No letters at all.
    Uncased,
    /// Only lowercase letters.
    Lower,
    /// Only uppercase letters.
    Upper,
    /// Uppercase first letter, lowercase after it.
    Capitalized,
    /// Anything else.
    Mixed,
}

impl Casing {
    /// Casing pattern of `value`.
    pub fn of(value: &str) -> Casing {
        let mut letters = value.chars().filter(|c| c.is_alphabetic());
        let Some(first) = letters.next() else {
            return Casing::Uncased;
        };
        let (mut lower, mut upper) = (false, false);
        for c in letters {
            lower |= c.is_lowercase();
            upper |= c.is_uppercase();
        }
        match (first.is_uppercase(), lower, upper) {
            (false, _, false) => Casing::Lower,
            (true, false, _) => Casing::Upper,
            (true, true, false) => Casing::Capitalized,
            _ => Casing::Mixed,
        }
    }
}

/// Coarse structural shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Free text, with its casing pattern.
    Text(Casing),
    /// Boolean word.
    Boolean,
    /// Any number.
    Numeric,
    /// Date, time or date-time.
    Temporal,
}

impl Shape {
    /// Shape of a non-empty value.
    pub fn of(value: &str) -> Shape {
        let ty = detect_value_type(value);
        if ty.is_numeric() {
            Shape::Numeric
        } else if ty.is_temporal() {
            Shape::Temporal
        } else if ty == Type::Boolean {
            Shape::Boolean
        } else {
            Shape::Text(Casing::of(value))
        }
    }
}

/// Shape of one header candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataStats {
    shape: Shape,
}

impl DataStats {
    /// Record the shape of a header candidate token.
    pub fn new(token: &Token) -> Self {
        Self {
            shape: Shape::of(token.data()),
        }
    }

    /// True if a data token looks like it belongs under this header value.
    pub fn is_similar(&self, token: &Token) -> bool {
        Shape::of(token.data()) == self.shape
    }
}

/// Decide whether the first record is a header.
///
/// Returns false outright when the candidate has an empty value, when a data
/// record has more values than the candidate, or when the candidate has more
/// values than a (non-blank) data record.
pub fn infer_header(
    content: &str,
    settings: ScanSettings,
    limits: &SampleLimits,
    thresholds: &Thresholds,
) -> bool {
    let ctx = ScanContext::sampling(settings);
    let mut scanner = Scanner::new(content);

    let mut header = Vec::new();
    loop {
        let token = scanner.next_token(&ctx);
        if token.is_empty() {
            trace!(column = header.len(), "header candidate has an empty value");
            return false;
        }
        header.push(DataStats::new(&token));
        if token.is_last_in_record() {
            break;
        }
    }

    let mut compared = 0usize;
    let mut dissimilar = 0usize;
    let mut row = 0;
    let mut i = 0;
    while row < limits.header_rows {
        if i == header.len() {
            trace!(row, "data record is wider than the header candidate");
            return false;
        }

        let token = scanner.next_token(&ctx);
        if !token.is_empty() {
            compared += 1;
            if !header[i].is_similar(&token) {
                dissimilar += 1;
            }
        }

        if token.is_last_in_record() {
            let blank = i == 0 && token.value.is_empty();
            if !blank && i != header.len() - 1 {
                trace!(row, "data record is narrower than the header candidate");
                return false;
            }
            if token.is_eof() {
                break;
            }
            row += 1;
            i = 0;
        } else {
            i += 1;
        }
    }

    let has_header =
        compared != 0 && dissimilar * 100 / compared > thresholds.header_dissimilarity_pct;
    debug!(compared, dissimilar, has_header, "inferred header");
    has_header
}
