//! Separator inference.

use tracing::{debug, trace};

use crate::metadata::{ScanSettings, Separator};
use crate::sample::SampleLimits;
use crate::scanner::{ScanContext, Scanner};

/// Pick the separator that splits the leading records most consistently.
///
/// Candidates are tried in [`Separator::ALL`] order. Among the consistent ones
/// the widest record wins, ties going to the earlier candidate. Comma is the
/// fallback when no candidate is consistent.
pub fn infer_separator(content: &str, limits: &SampleLimits) -> Separator {
    let mut best: Option<(Separator, usize)> = None;
    for candidate in Separator::ALL {
        let Some(width) = sample_separator(content, candidate, limits.separator_rows) else {
            continue;
        };
        if best.is_none_or(|(_, max)| width > max) {
            best = Some((candidate, width));
        }
    }

    match best {
        Some((separator, width)) => {
            debug!(%separator, width, "inferred separator");
            separator
        }
        None => {
            debug!("no separator yields consistent records, defaulting to comma");
            Separator::Comma
        }
    }
}

/// Record width under `candidate`, or `None` if the candidate is inconsistent.
///
/// A candidate is inconsistent when a field ends on some other separator
/// candidate (possible after a closing quote while sampling) or when record
/// widths differ within the first `rows` records.
pub fn sample_separator(content: &str, candidate: Separator, rows: usize) -> Option<usize> {
    let ctx = ScanContext::sampling(ScanSettings::new(candidate, false, false));
    let mut scanner = Scanner::new(content);

    let mut width = 0;
    let mut count = 0;
    let mut row = 0;
    while row < rows {
        count += 1;
        let token = scanner.next_token(&ctx);
        if token.is_last_in_record() {
            let blank = count == 1 && token.value.is_empty();
            if !blank {
                if width == 0 {
                    width = count;
                }
                if count != width {
                    trace!(%candidate, row, expected = width, found = count, "rejected separator");
                    return None;
                }
            }
            if token.is_eof() {
                break;
            }
            count = 0;
            row += 1;
        } else if token.separator() != Some(candidate) {
            trace!(
                %candidate,
                line = token.line,
                "rejected separator, field ended on another candidate"
            );
            return None;
        }
    }
    Some(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(content: &str) -> Separator {
        infer_separator(content, &SampleLimits::default())
    }

    #[test]
    fn test_each_candidate() {
        assert_eq!(infer("a,b,c\n1,2,3\n"), Separator::Comma);
        assert_eq!(infer("a;b;c\n1;2;3\n"), Separator::Semicolon);
        assert_eq!(infer("a:b:c\n1:2:3\n"), Separator::Colon);
        assert_eq!(infer("a|b|c\n1|2|3\n"), Separator::Pipe);
        assert_eq!(infer("a\tb\tc\n1\t2\t3\n"), Separator::Tab);
    }

    #[test]
    fn test_widest_consistent_candidate_wins() {
        // two commas and one semicolon per record
        assert_eq!(infer("a,b;c,d\n1,2;3,4\n"), Separator::Comma);
        assert_eq!(infer("a;b;c,d\n1;2;3,4\n"), Separator::Semicolon);
    }

    #[test]
    fn test_inconsistent_widths_are_rejected() {
        assert_eq!(sample_separator("1,2\n1,2,3\n", Separator::Comma, 10), None);
        assert_eq!(sample_separator("1,2\n1,2,3\n", Separator::Semicolon, 10), Some(1));
        // comma is out, so the first single-field candidate takes it
        assert_eq!(infer("1,2\n1,2,3\n"), Separator::Semicolon);
    }

    #[test]
    fn test_only_sampled_rows_count() {
        let mut content = String::from("a,b\n");
        for _ in 0..10 {
            content.push_str("1,2\n");
        }
        content.push_str("1,2,3\n");
        assert_eq!(sample_separator(&content, Separator::Comma, 10), Some(2));
        assert_eq!(sample_separator(&content, Separator::Comma, 20), None);
    }

    #[test]
    fn test_quote_closed_by_other_candidate_rejects() {
        assert_eq!(
            sample_separator("\"a\";\"b\"\n\"c\";\"d\"\n", Separator::Comma, 10),
            None
        );
        assert_eq!(infer("\"a\";\"b\"\n\"c\";\"d\"\n"), Separator::Semicolon);
    }

    #[test]
    fn test_empty_and_single_column() {
        assert_eq!(infer(""), Separator::Comma);
        assert_eq!(infer("a\nb\nc\n"), Separator::Comma);
        assert_eq!(sample_separator("", Separator::Comma, 10), Some(0));
    }
}
