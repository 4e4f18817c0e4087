//! Whitespace significance inference.
//!
//! Fields are scanned with their leading whitespace kept and a histogram of
//! leading-space counts is built. A count that covers most fields is a
//! layout convention: zero means plain data, anything else means the spaces
//! belong to the values. Without a dominant count the spaces are kept.

use foldhash::{HashMap, HashMapExt};
use tracing::debug;

use super::indentation::leading_spaces;
use crate::metadata::{ScanSettings, Separator};
use crate::sample::{SampleLimits, Thresholds};
use crate::scanner::{ScanContext, Scanner};

/// Decide whether leading whitespace is part of field values.
pub fn infer_whitespace_significant(
    content: &str,
    separator: Separator,
    indented: bool,
    limits: &SampleLimits,
    thresholds: &Thresholds,
) -> bool {
    let ctx = ScanContext::sampling(ScanSettings::new(separator, indented, true));
    let mut scanner = Scanner::new(content);

    let mut histogram: HashMap<usize, usize> = HashMap::new();
    let mut total = 0usize;
    let mut row = 0;
    while row < limits.whitespace_rows {
        let token = scanner.next_token(&ctx);
        *histogram.entry(leading_spaces(&token)).or_insert(0) += 1;
        total += 1;
        if token.is_last_in_record() {
            if token.is_eof() {
                break;
            }
            row += 1;
        }
    }

    // ties go to the smaller count so the result does not depend on hash order
    let dominant = histogram
        .iter()
        .max_by(|(a_spaces, a_n), (b_spaces, b_n)| a_n.cmp(b_n).then(b_spaces.cmp(a_spaces)))
        .map(|(&spaces, &n)| (spaces, n));

    let significant = match dominant {
        Some((spaces, n)) if n * 100 / total.max(1) > thresholds.whitespace_dominance_pct => {
            spaces != 0
        }
        _ => true,
    };
    debug!(significant, ?dominant, total, "inferred whitespace significance");
    significant
}
