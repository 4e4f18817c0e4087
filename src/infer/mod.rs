//! Dialect inference.
//!
//! Each parameter is decided by its own pass over the content. A pass scans
//! with a fresh [`Scanner`](crate::scanner::Scanner) in sampling mode and
//! sees earlier decisions only through its arguments, so passes can be run
//! and tested on their own. [`sniff_dialect`] runs them in dependency order.

pub mod column_types;
pub mod header;
pub mod indentation;
pub mod regexes;
pub mod separator;
pub mod type_detection;
pub mod whitespace;

use tracing::debug;

use crate::metadata::{Dialect, ScanSettings};
use crate::sample::{SampleLimits, Thresholds};

pub use column_types::infer_column_types;
pub use header::infer_header;
pub use indentation::infer_indented;
pub use separator::infer_separator;
pub use type_detection::{detect_value_type, merge_value_type};
pub use whitespace::infer_whitespace_significant;

/// Sniff the full dialect of `content`.
///
/// A `header_hint` replaces header inference. Never fails: inconsistent input
/// degrades to defaults (comma, no header) or to `types: None`.
pub fn sniff_dialect(
    content: &str,
    header_hint: Option<bool>,
    limits: &SampleLimits,
    thresholds: &Thresholds,
) -> Dialect {
    let separator = infer_separator(content, limits);
    let indented = infer_indented(content, separator, limits);
    let whitespace_significant =
        infer_whitespace_significant(content, separator, indented, limits, thresholds);
    let settings = ScanSettings::new(separator, indented, whitespace_significant);

    let has_header = match header_hint {
        Some(hint) => {
            debug!(hint, "header given by caller");
            hint
        }
        None => infer_header(content, settings, limits, thresholds),
    };
    let types = infer_column_types(content, settings, has_header, limits);

    Dialect {
        separator,
        header_hint,
        has_header,
        indented,
        whitespace_significant,
        types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_type::Type;
    use crate::metadata::Separator;

    fn sniff(content: &str, header_hint: Option<bool>) -> Dialect {
        sniff_dialect(
            content,
            header_hint,
            &SampleLimits::default(),
            &Thresholds::default(),
        )
    }

    #[test]
    fn test_numeric_table_with_header() {
        let dialect = sniff("a,b,c\n1,2,3\n4,5,6\n", None);
        assert_eq!(dialect.separator, Separator::Comma);
        assert!(dialect.has_header);
        assert!(!dialect.indented);
        assert!(!dialect.whitespace_significant);
        assert_eq!(
            dialect.types,
            Some(vec![Type::Integer, Type::Integer, Type::Integer])
        );
    }

    #[test]
    fn test_semicolon_without_header() {
        let dialect = sniff("1;2\n3;4\n", None);
        assert_eq!(dialect.separator, Separator::Semicolon);
        assert!(!dialect.has_header);
        assert_eq!(dialect.types, Some(vec![Type::Integer, Type::Integer]));
    }

    #[test]
    fn test_header_hint_overrides() {
        let dialect = sniff("a,b,c\n1,2,3\n4,5,6\n", Some(false));
        assert_eq!(dialect.header_hint, Some(false));
        assert!(!dialect.has_header);
        assert_eq!(
            dialect.types,
            Some(vec![Type::String, Type::String, Type::String])
        );

        let dialect = sniff("1,2\n3,4\n", Some(true));
        assert!(dialect.has_header);
        assert_eq!(dialect.types, Some(vec![Type::Integer, Type::Integer]));
    }

    #[test]
    fn test_indented_table() {
        let dialect = sniff("  name|size\n  Alpha|1\n  Beta|2\n", None);
        assert_eq!(dialect.separator, Separator::Pipe);
        assert!(dialect.indented);
        assert!(!dialect.whitespace_significant);
        assert!(dialect.has_header);
        assert_eq!(dialect.types, Some(vec![Type::String, Type::Integer]));
    }

    #[test]
    fn test_empty_content() {
        let dialect = sniff("", None);
        assert_eq!(dialect.separator, Separator::Comma);
        assert!(!dialect.has_header);
        assert_eq!(dialect.types, Some(vec![]));
    }
}
