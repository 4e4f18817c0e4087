//! Character scanner turning delimited text into [`Token`]s.
//!
//! The scanner owns only its position state. Everything that steers how
//! fields are split (separator, whitespace handling, sampling leniency) comes
//! in through a [`ScanContext`] on every call, so a sniffing pass can probe a
//! hypothesis without touching any shared settings.

use tracing::{debug, warn};

use crate::metadata::{ScanSettings, Separator};
use crate::token::{Terminator, Token, TokenKind};

/// Whether the scanner is probing a dialect hypothesis or reading for real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Dialect inference. A closing quote followed by any separator candidate
    /// ends the field, which lets the true separator show up.
    Sampling,
    /// Normal reading with a decided dialect.
    #[default]
    Normal,
}

/// Settings and mode for one scan call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanContext {
    /// How fields are split.
    pub settings: ScanSettings,
    /// Sampling or normal reading.
    pub mode: ScanMode,
}

impl ScanContext {
    /// Context for a dialect inference pass.
    pub const fn sampling(settings: ScanSettings) -> Self {
        Self {
            settings,
            mode: ScanMode::Sampling,
        }
    }

    /// Context for reading with a decided dialect.
    pub const fn normal(settings: ScanSettings) -> Self {
        Self {
            settings,
            mode: ScanMode::Normal,
        }
    }
}

/// Single-pass scanner over in-memory content.
///
/// CR, CRLF and LF all read as one `\n`. A line break followed by nothing but
/// whitespace reads as end of content.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    content: &'a [u8],
    /// Index of the next unread byte.
    next: usize,
    /// Index of the byte last read; `content.len()` once EOF has been read.
    current: Option<usize>,
    line: usize,
    /// No token yet, or the last token ended a record.
    record_start: bool,
    /// End of the meaningful content: where a trailing run of blank lines
    /// starts, once it has been read.
    content_end: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned before the first character.
    pub fn new(content: &'a str) -> Self {
        Self {
            content: content.as_bytes(),
            next: 0,
            current: None,
            line: 1,
            record_start: true,
            content_end: content.len(),
        }
    }

    /// True once the scanner has read past the last character.
    pub fn is_eof(&self) -> bool {
        self.current == Some(self.content.len())
    }

    /// True if the character last read is a line break.
    pub fn is_eol(&self) -> bool {
        match self.current {
            Some(i) if i < self.content.len() => match self.content[i] {
                b'\n' => true,
                b'\r' => self.content.get(i + 1) != Some(&b'\n'),
                _ => false,
            },
            _ => false,
        }
    }

    /// Read the next field.
    ///
    /// Returns an EOF token (possibly with data) at the end of content, and
    /// keeps returning empty EOF tokens after that.
    pub fn next_token(&mut self, ctx: &ScanContext) -> Token {
        let settings = ctx.settings;
        let active = settings.separator.as_byte();

        'token: loop {
            let mut c = self.read();
            if !settings.whitespace_significant {
                c = self.skip_spaces(c, settings.separator);
            }

            let offset = self.here();
            let line = self.line;
            let mut value: Vec<u8> = Vec::new();
            let mut quoted = false;

            loop {
                match c {
                    None => {
                        let kind = if quoted {
                            TokenKind::Quoted
                        } else {
                            TokenKind::NotQuoted
                        };
                        return self.emit(Token {
                            kind,
                            value: into_text(value),
                            line,
                            offset,
                            length: self.content_end.saturating_sub(offset),
                            end: self.content.len(),
                            terminator: Terminator::Eof,
                        });
                    }

                    Some(b'"') => {
                        value.push(b'"');
                        if value.len() == 1 {
                            quoted = true;
                        } else if quoted {
                            let close = self.here();
                            c = self.read();
                            // a second quote is an escaped literal; the next read skips it
                            if c != Some(b'"') {
                                let end = close + 1;
                                c = self.skip_spaces(c, settings.separator);

                                let terminator = match c {
                                    None => Some(Terminator::Eof),
                                    Some(b'\n') => Some(Terminator::Newline),
                                    Some(b) if b == active => {
                                        Some(Terminator::Separator(settings.separator))
                                    }
                                    Some(b) => match (ctx.mode, Separator::from_byte(b)) {
                                        (ScanMode::Sampling, Some(candidate)) => {
                                            Some(Terminator::Separator(candidate))
                                        }
                                        _ => None,
                                    },
                                };

                                match terminator {
                                    Some(terminator) => {
                                        if terminator == Terminator::Newline {
                                            self.line += 1;
                                        }
                                        let here = self.here();
                                        return self.emit(Token {
                                            kind: TokenKind::Quoted,
                                            value: into_text(value),
                                            line,
                                            offset,
                                            length: end - offset,
                                            end: here,
                                            terminator,
                                        });
                                    }
                                    None => {
                                        match ctx.mode {
                                            ScanMode::Normal => warn!(
                                                line = self.line,
                                                offset,
                                                "closing quote followed by data, reading field unquoted"
                                            ),
                                            ScanMode::Sampling => debug!(
                                                line = self.line,
                                                offset,
                                                "closing quote followed by data, reading field unquoted"
                                            ),
                                        }
                                        // back up so the character after the quote is read as data
                                        self.rewind_to(close);
                                        quoted = false;
                                    }
                                }
                            }
                        }
                    }

                    Some(b) if Separator::from_byte(b).is_some() => {
                        if quoted || b != active {
                            if !self.is_indentation(b, &value, settings) {
                                value.push(b);
                            }
                        } else {
                            let here = self.here();
                            return self.emit(Token {
                                kind: TokenKind::NotQuoted,
                                value: into_text(value),
                                line,
                                offset,
                                length: here - offset,
                                end: here,
                                terminator: Terminator::Separator(settings.separator),
                            });
                        }
                    }

                    Some(b'\n') => {
                        self.line += 1;
                        if quoted {
                            value.push(b'\n');
                        } else {
                            let here = self.here();
                            let end = if here > 0 && self.content[here - 1] == b'\r' {
                                here - 1
                            } else {
                                here
                            };
                            let length = end.saturating_sub(offset);
                            // an indented dialect strips the whole line when it is only indentation
                            let blank = length == 0 || (settings.indented && value.is_empty());
                            if blank && self.record_start {
                                // blank line, not an empty record
                                continue 'token;
                            }
                            return self.emit(Token {
                                kind: TokenKind::NotQuoted,
                                value: into_text(value),
                                line,
                                offset,
                                length,
                                end: here,
                                terminator: Terminator::Newline,
                            });
                        }
                    }

                    Some(b) => {
                        if !self.is_indentation(b, &value, settings) {
                            value.push(b);
                        }
                    }
                }

                c = self.read();
            }
        }
    }

    fn emit(&mut self, token: Token) -> Token {
        self.record_start = token.is_last_in_record();
        token
    }

    /// Leading whitespace of a record's first field in an indented dialect.
    fn is_indentation(&self, b: u8, value: &[u8], settings: ScanSettings) -> bool {
        settings.indented && self.record_start && value.is_empty() && b.is_ascii_whitespace()
    }

    fn here(&self) -> usize {
        self.current.unwrap_or_default()
    }

    fn skip_spaces(&mut self, mut c: Option<u8>, separator: Separator) -> Option<u8> {
        while c == Some(b' ') || (c == Some(b'\t') && separator != Separator::Tab) {
            c = self.read();
        }
        c
    }

    /// Read one logical character, `None` at end of content.
    fn read(&mut self) -> Option<u8> {
        let mut c = self.read_raw();
        let mut line_break = self.here();

        if c == Some(b'\r') {
            let cr = self.here();
            c = self.read_raw();
            if c != Some(b'\n') {
                // lone CR: look-ahead is undone, the CR itself stands for the break
                self.rewind_to(cr);
                c = Some(b'\n');
            }
            line_break = cr;
        }

        if c == Some(b'\n') && self.content[self.next..].iter().all(u8::is_ascii_whitespace) {
            self.content_end = line_break;
            self.next = self.content.len();
            self.current = Some(self.content.len());
            return None;
        }

        c
    }

    fn read_raw(&mut self) -> Option<u8> {
        match self.content.get(self.next) {
            Some(&b) => {
                self.current = Some(self.next);
                self.next += 1;
                Some(b)
            }
            None => {
                self.current = Some(self.content.len());
                None
            }
        }
    }

    fn rewind_to(&mut self, index: usize) {
        self.current = Some(index);
        self.next = index + 1;
    }
}

/// Field bytes back to text. Bytes are only ever dropped or split at ASCII
/// positions, so multi-byte sequences stay intact.
fn into_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal(separator: Separator) -> ScanContext {
        ScanContext::normal(ScanSettings::new(separator, false, false))
    }

    /// Scan every token up to and including the first EOF token.
    fn scan_all(content: &str, ctx: &ScanContext) -> Vec<Token> {
        let mut scanner = Scanner::new(content);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token(ctx);
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                break tokens;
            }
        }
    }

    fn values(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.value.as_str()).collect()
    }

    #[test]
    fn test_simple_records() {
        let tokens = scan_all("a,b\n1,2", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a", "b", "1", "2"]);
        assert_eq!(
            tokens.iter().map(|t| t.terminator).collect::<Vec<_>>(),
            vec![
                Terminator::Separator(Separator::Comma),
                Terminator::Newline,
                Terminator::Separator(Separator::Comma),
                Terminator::Eof,
            ]
        );
        assert_eq!(tokens.iter().map(|t| t.line).collect::<Vec<_>>(), vec![1, 1, 2, 2]);
        assert_eq!(tokens[2].offset, 4);
        assert_eq!(tokens[3].offset, 6);
        assert_eq!(tokens[3].length, 1);
    }

    #[test]
    fn test_inactive_separators_are_data() {
        let tokens = scan_all("a;b:c|d\te,f", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a;b:c|d\te", "f"]);
    }

    #[test]
    fn test_line_break_normalization() {
        let tokens = scan_all("a\r\nb\rc\nd", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a", "b", "c", "d"]);
        assert_eq!(tokens.iter().map(|t| t.line).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        // CRLF: the token ends before the CR
        assert_eq!(tokens[0].length, 1);
        assert_eq!(tokens[0].end, 2);
    }

    #[test]
    fn test_trailing_blank_lines_are_eof() {
        let tokens = scan_all("a,b\n\n  \n\t\n", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a", "b"]);
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_eof_token_length_stops_at_trailing_break() {
        let tokens = scan_all("a,b\n", &normal(Separator::Comma));
        assert_eq!(tokens[1].value, "b");
        assert_eq!(tokens[1].offset, 2);
        assert_eq!(tokens[1].length, 1);

        let tokens = scan_all("a,b\r\n  \n", &normal(Separator::Comma));
        assert_eq!(tokens[1].length, 1);
        assert_eq!(tokens[1].end, 8);

        let tokens = scan_all("a,b\r", &normal(Separator::Comma));
        assert_eq!(tokens[1].length, 1);

        let tokens = scan_all("a,\n\n", &normal(Separator::Comma));
        assert!(tokens[1].is_eof());
        assert_eq!(tokens[1].length, 0);
    }

    #[test]
    fn test_indentation_only_line_is_blank() {
        let ctx = ScanContext::normal(ScanSettings::new(Separator::Comma, true, true));
        let tokens = scan_all("  a, b\n  \n\t\n  c, d", &ctx);
        assert_eq!(values(&tokens), vec!["a", " b", "c", " d"]);
        assert_eq!(tokens[2].line, 4);

        // without indentation the spaces are a value
        let ctx = ScanContext::normal(ScanSettings::new(Separator::Comma, false, true));
        let tokens = scan_all("a\n  \nb", &ctx);
        assert_eq!(values(&tokens), vec!["a", "  ", "b"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let tokens = scan_all("\na\n\n\nb", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a", "b"]);
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 5);
        assert_eq!(tokens[1].offset, 5);
    }

    #[test]
    fn test_empty_field_at_record_end_is_kept() {
        let tokens = scan_all("a,\nb,", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a", "", "b", ""]);
        assert!(tokens[1].is_last_in_record());
        assert!(tokens[3].is_eof());
    }

    #[test]
    fn test_quoted_fields() {
        let tokens = scan_all("\"x,\"\"y\"\"\nz\",2\n", &normal(Separator::Comma));
        assert_eq!(tokens[0].kind, TokenKind::Quoted);
        assert_eq!(tokens[0].value, "\"x,\"y\"\nz\"");
        assert_eq!(tokens[0].data(), "x,\"y\"\nz");
        assert_eq!(tokens[0].length, 11);
        assert_eq!(tokens[1].value, "2");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_quote_closes_before_spaces() {
        let tokens = scan_all("\"a\"  ,b", &normal(Separator::Comma));
        assert_eq!(tokens[0].data(), "a");
        assert_eq!(tokens[0].length, 3);
        assert_eq!(tokens[1].value, "b");
    }

    #[test]
    fn test_malformed_quote_is_lenient() {
        let tokens = scan_all("\"ab\"c,d", &normal(Separator::Comma));
        assert_eq!(tokens[0].kind, TokenKind::NotQuoted);
        assert_eq!(tokens[0].value, "\"ab\"c");
        assert_eq!(tokens[1].value, "d");
    }

    #[test]
    fn test_sampling_favors_candidate_separators() {
        let content = "\"a\";\"b\"";

        let sampling = ScanContext::sampling(ScanSettings::new(Separator::Comma, false, false));
        let tokens = scan_all(content, &sampling);
        assert_eq!(tokens[0].kind, TokenKind::Quoted);
        assert_eq!(tokens[0].terminator, Terminator::Separator(Separator::Semicolon));

        let tokens = scan_all(content, &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["\"a\";\"b\""]);
    }

    #[test]
    fn test_unterminated_quote() {
        let tokens = scan_all("\"abc", &normal(Separator::Comma));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Quoted);
        assert_eq!(tokens[0].data(), "abc");
    }

    #[test]
    fn test_whitespace_handling() {
        let tokens = scan_all("  a,  b", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["a", "b"]);

        let significant = ScanContext::normal(ScanSettings::new(Separator::Comma, false, true));
        let tokens = scan_all("  a,  b", &significant);
        assert_eq!(values(&tokens), vec!["  a", "  b"]);

        // a tab separator is never skipped as whitespace
        let tokens = scan_all("a\t\tb", &normal(Separator::Tab));
        assert_eq!(values(&tokens), vec!["a", "", "b"]);
    }

    #[test]
    fn test_indentation() {
        let ctx = ScanContext::normal(ScanSettings::new(Separator::Comma, true, true));
        let tokens = scan_all("  a b, c\n\t d, e", &ctx);
        assert_eq!(values(&tokens), vec!["a b", " c", "d", " e"]);
    }

    #[test]
    fn test_empty_content() {
        let mut scanner = Scanner::new("");
        assert!(!scanner.is_eof());
        let token = scanner.next_token(&normal(Separator::Comma));
        assert!(token.is_eof());
        assert!(token.value.is_empty());
        assert!(scanner.is_eof());
        // EOF repeats
        assert!(scanner.next_token(&normal(Separator::Comma)).is_eof());
    }

    #[test]
    fn test_is_eol() {
        let mut scanner = Scanner::new("a\nb");
        assert!(!scanner.is_eol());
        let token = scanner.next_token(&normal(Separator::Comma));
        assert_eq!(token.value, "a");
        assert!(scanner.is_eol());
        scanner.next_token(&normal(Separator::Comma));
        assert!(!scanner.is_eol());
        assert!(scanner.is_eof());
    }

    #[test]
    fn test_multibyte_text() {
        let tokens = scan_all("caf\u{e9},\u{65e5}\u{672c}", &normal(Separator::Comma));
        assert_eq!(values(&tokens), vec!["caf\u{e9}", "\u{65e5}\u{672c}"]);
    }
}
