use crate::field_type::Type;
use std::fmt;

/// Field separator. Only these five characters are ever considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// `,`
    #[default]
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `|`
    Pipe,
    /// `\t`
    Tab,
}

impl Separator {
    /// Candidates in the order separator inference evaluates them.
    pub const ALL: [Separator; 5] = [
        Separator::Comma,
        Separator::Semicolon,
        Separator::Colon,
        Separator::Pipe,
        Separator::Tab,
    ];

    /// The separator as an ASCII byte.
    pub const fn as_byte(self) -> u8 {
        match self {
            Separator::Comma => b',',
            Separator::Semicolon => b';',
            Separator::Colon => b':',
            Separator::Pipe => b'|',
            Separator::Tab => b'\t',
        }
    }

    /// The separator as a `char`.
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Map a byte back to a separator candidate.
    pub const fn from_byte(b: u8) -> Option<Separator> {
        match b {
            b',' => Some(Separator::Comma),
            b';' => Some(Separator::Semicolon),
            b':' => Some(Separator::Colon),
            b'|' => Some(Separator::Pipe),
            b'\t' => Some(Separator::Tab),
            _ => None,
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Tab => write!(f, "\\t"),
            other => write!(f, "{}", other.as_char()),
        }
    }
}

/// The part of a dialect the scanner needs to split fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSettings {
    /// Active field separator.
    pub separator: Separator,
    /// Skip leading whitespace of the first field of every record.
    pub indented: bool,
    /// Keep leading spaces/tabs of fields.
    pub whitespace_significant: bool,
}

impl ScanSettings {
    /// Create scan settings.
    pub const fn new(separator: Separator, indented: bool, whitespace_significant: bool) -> Self {
        Self {
            separator,
            indented,
            whitespace_significant,
        }
    }
}

/// Dialect of a delimited-text input, as sniffed (or partly supplied by the caller).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dialect {
    /// Field separator.
    pub separator: Separator,
    /// Caller-supplied header flag; when present it overrides header inference.
    pub header_hint: Option<bool>,
    /// Whether the first record is a header row.
    pub has_header: bool,
    /// Whether records are indented.
    pub indented: bool,
    /// Whether leading whitespace is part of field values.
    pub whitespace_significant: bool,
    /// Inferred type per column, or `None` if inference was abandoned.
    pub types: Option<Vec<Type>>,
}

impl Dialect {
    /// Scanner settings for this dialect.
    pub const fn scan_settings(&self) -> ScanSettings {
        ScanSettings::new(self.separator, self.indented, self.whitespace_significant)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dialect:")?;
        writeln!(f, "\tSeparator: {}", self.separator)?;
        writeln!(f, "\tHas header row?: {}", self.has_header)?;
        writeln!(f, "\tIndented: {}", self.indented)?;
        writeln!(f, "\tWhitespace significant: {}", self.whitespace_significant)?;
        match &self.types {
            Some(types) => {
                let names: Vec<String> = types.iter().map(ToString::to_string).collect();
                write!(f, "\tTypes: [{}]", names.join(", "))
            }
            None => write!(f, "\tTypes: unknown"),
        }
    }
}

/// Summary of a sniffed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// The detected dialect.
    pub dialect: Dialect,
    /// Number of fields in the first record.
    pub num_fields: usize,
    /// Field names from the header row (or generated names if no header).
    pub fields: Vec<String>,
}

impl Metadata {
    /// Create a new Metadata instance.
    pub const fn new(dialect: Dialect, num_fields: usize, fields: Vec<String>) -> Self {
        Self {
            dialect,
            num_fields,
            fields,
        }
    }

    /// Inferred column types, if inference succeeded.
    pub fn types(&self) -> Option<&[Type]> {
        self.dialect.types.as_deref()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.dialect)?;
        writeln!(f, "Number of fields: {}", self.num_fields)?;
        write!(f, "Fields: {}", self.fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_bytes() {
        for sep in Separator::ALL {
            assert_eq!(Separator::from_byte(sep.as_byte()), Some(sep));
            assert_eq!(sep.as_char() as u32, u32::from(sep.as_byte()));
        }
        assert_eq!(Separator::from_byte(b' '), None);
        assert_eq!(Separator::from_byte(b'"'), None);
        assert_eq!(Separator::default(), Separator::Comma);
    }

    #[test]
    fn test_dialect_scan_settings() {
        let dialect = Dialect {
            separator: Separator::Pipe,
            indented: true,
            ..Dialect::default()
        };
        assert_eq!(
            dialect.scan_settings(),
            ScanSettings::new(Separator::Pipe, true, false)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Separator::Tab.to_string(), "\\t");
        let dialect = Dialect {
            separator: Separator::Semicolon,
            types: Some(vec![Type::Integer, Type::String]),
            ..Dialect::default()
        };
        let text = dialect.to_string();
        assert!(text.contains("Separator: ;"));
        assert!(text.contains("Types: [Integer, String]"));
    }
}
