//! Column type inference.

use tracing::{debug, trace};

use super::type_detection::{detect_value_type, merge_value_type};
use crate::field_type::Type;
use crate::metadata::ScanSettings;
use crate::sample::SampleLimits;
use crate::scanner::{ScanContext, Scanner};

/// Infer one type per column.
///
/// The first data record fixes the column count and seeds the types. Later
/// records are folded in while [`SampleLimits::samples_type_row`] says so, but
/// every scanned record must have the same width: a single mismatch abandons
/// inference and yields `None`. Columns that never saw a value become
/// [`Type::String`].
pub fn infer_column_types(
    content: &str,
    settings: ScanSettings,
    has_header: bool,
    limits: &SampleLimits,
) -> Option<Vec<Type>> {
    let ctx = ScanContext::sampling(settings);
    let mut scanner = Scanner::new(content);

    if has_header {
        loop {
            let token = scanner.next_token(&ctx);
            if token.is_eof() {
                debug!("no data records after the header");
                return Some(Vec::new());
            }
            if token.is_last_in_record() {
                break;
            }
        }
    }

    let mut types: Vec<Type> = Vec::new();
    let mut row = 0;
    let mut i = 0;
    while row < limits.type_rows {
        let token = scanner.next_token(&ctx);

        if row == 0 {
            if token.is_eof() && i == 0 && token.value.is_empty() {
                debug!("no data records");
                return Some(Vec::new());
            }
            types.push(detect_value_type(token.data()));
        } else if i >= types.len() {
            trace!(
                row,
                line = token.line,
                columns = types.len(),
                "record is wider than the first, type inference abandoned"
            );
            return None;
        } else if limits.samples_type_row(row) {
            types[i] = merge_value_type(types[i], token.data());
        }

        if token.is_last_in_record() {
            let trailing = row > 0 && i == 0 && token.is_eof() && token.value.is_empty();
            if !trailing && i + 1 != types.len() {
                trace!(
                    row,
                    line = token.line,
                    columns = types.len(),
                    "record is narrower than the first, type inference abandoned"
                );
                return None;
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

    let types: Vec<Type> = types.into_iter().map(Type::resolved).collect();
    debug!(?types, "inferred column types");
    Some(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Separator;

    fn types(content: &str, has_header: bool) -> Option<Vec<Type>> {
        infer_column_types(
            content,
            ScanSettings::new(Separator::Comma, false, false),
            has_header,
            &SampleLimits::default(),
        )
    }

    #[test]
    fn test_header_is_skipped() {
        assert_eq!(
            types("a,b,c\n1,2,3\n4,5,6\n", true),
            Some(vec![Type::Integer, Type::Integer, Type::Integer])
        );
        assert_eq!(
            types("a,b,c\n1,2,3\n4,5,6\n", false),
            Some(vec![Type::String, Type::String, Type::String])
        );
    }

    #[test]
    fn test_columns_widen() {
        assert_eq!(
            types("1,x,true,\n2.5,y,no,\n3,z,yes,\n", false),
            Some(vec![Type::Double, Type::String, Type::Boolean, Type::String])
        );
    }

    #[test]
    fn test_width_mismatch_abandons() {
        assert_eq!(types("1,2\n1,2,3\n", false), None);
        assert_eq!(types("1,2,3\n1,2\n", false), None);
    }

    #[test]
    fn test_quoted_values_are_classified_without_quotes() {
        assert_eq!(
            types("\"1\",\"2023-01-15\"\n\"2\",\"2023-02-01\"\n", false),
            Some(vec![Type::Integer, Type::Date])
        );
    }

    #[test]
    fn test_strided_rows_after_full_sample() {
        let limits = SampleLimits {
            type_full_rows: 2,
            type_stride: 5,
            ..SampleLimits::default()
        };
        let mut content = String::new();
        for row in 0..10 {
            // row 3 is skipped by the stride, row 5 is sampled
            let value = match row {
                3 => "x",
                5 => "1.5",
                _ => "1",
            };
            content.push_str(value);
            content.push('\n');
        }
        let settings = ScanSettings::new(Separator::Comma, false, false);
        assert_eq!(
            infer_column_types(&content, settings, false, &limits),
            Some(vec![Type::Double])
        );
    }

    #[test]
    fn test_row_budget() {
        let limits = SampleLimits {
            type_rows: 2,
            ..SampleLimits::default()
        };
        let settings = ScanSettings::new(Separator::Comma, false, false);
        assert_eq!(
            infer_column_types("1,2\n3,4\n5,6,7\n", settings, false, &limits),
            Some(vec![Type::Integer, Type::Integer])
        );
    }

    #[test]
    fn test_no_data() {
        assert_eq!(types("", false), Some(vec![]));
        assert_eq!(types("a,b\n", true), Some(vec![]));
    }
}
