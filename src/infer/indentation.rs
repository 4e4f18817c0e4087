//! Indentation inference.

use tracing::debug;

use crate::metadata::{ScanSettings, Separator};
use crate::sample::SampleLimits;
use crate::scanner::{ScanContext, Scanner};
use crate::token::Token;

/// Leading spaces and tabs of a token's value.
pub(crate) fn leading_spaces(token: &Token) -> usize {
    token
        .value
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count()
}

/// True only if every sampled record starts with whitespace.
pub fn infer_indented(content: &str, separator: Separator, limits: &SampleLimits) -> bool {
    let ctx = ScanContext::sampling(ScanSettings::new(separator, false, true));
    let mut scanner = Scanner::new(content);

    let mut indented = true;
    let mut record_start = true;
    let mut row = 0;
    while row < limits.indentation_rows {
        let token = scanner.next_token(&ctx);
        if record_start {
            indented &= leading_spaces(&token) > 0;
        }
        record_start = false;
        if token.is_last_in_record() {
            if token.is_eof() {
                break;
            }
            record_start = true;
            row += 1;
        }
    }

    debug!(indented, "inferred indentation");
    indented
}
