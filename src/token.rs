//! Lexemes produced by the scanner.

use crate::metadata::Separator;

/// Whether a field started with a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Field enclosed in double quotes.
    Quoted,
    /// Plain field.
    NotQuoted,
}

/// What ended a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// A field separator. While sniffing this may be a candidate that is not
    /// the active separator.
    Separator(Separator),
    /// A (normalized) line break.
    Newline,
    /// End of content.
    Eof,
}

/// One field read by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Quoted or plain.
    pub kind: TokenKind,
    /// Field text as scanned. Quoted tokens keep their enclosing quotes, with
    /// doubled quotes already collapsed to one.
    pub value: String,
    /// 1-based line the token starts on.
    pub line: usize,
    /// Byte offset of the token's first character.
    pub offset: usize,
    /// Byte length of the token in the content.
    pub length: usize,
    /// Byte offset of the terminating character (content length at EOF).
    pub end: usize,
    /// What ended the token.
    pub terminator: Terminator,
}

impl Token {
    /// True if this token ends its record.
    #[inline]
    pub fn is_last_in_record(&self) -> bool {
        matches!(self.terminator, Terminator::Newline | Terminator::Eof)
    }

    /// True if this token ended at the end of content.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.terminator == Terminator::Eof
    }

    /// True if the field has no data (an empty pair of quotes counts as empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    /// The field's data: the value without its enclosing quotes.
    pub fn data(&self) -> &str {
        match self.kind {
            TokenKind::NotQuoted => &self.value,
            TokenKind::Quoted => {
                let inner = self.value.strip_prefix('"').unwrap_or(&self.value);
                inner.strip_suffix('"').unwrap_or(inner)
            }
        }
    }

    /// The separator that ended this token, if any.
    pub fn separator(&self) -> Option<Separator> {
        match self.terminator {
            Terminator::Separator(sep) => Some(sep),
            Terminator::Newline | Terminator::Eof => None,
        }
    }
}
