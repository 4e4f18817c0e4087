/// Records scanned by separator inference.
pub const SEPARATOR_SAMPLE_ROWS: usize = 10;
/// Records scanned by indentation inference.
pub const INDENTATION_SAMPLE_ROWS: usize = 100;
/// Records scanned by whitespace inference.
pub const WHITESPACE_SAMPLE_ROWS: usize = 100;
/// Data records compared against the header candidate.
pub const HEADER_SAMPLE_ROWS: usize = 100;
/// Records scanned by column type inference.
pub const TYPE_SAMPLE_ROWS: usize = 1000;
/// Leading records whose every value is classified.
pub const TYPE_FULL_ROWS: usize = 100;
/// Past the leading records, only every n-th record is classified.
pub const TYPE_STRIDE: usize = 10;

/// A header is assumed when more than this percentage of compared data values
/// differ in shape from the header values.
pub const HEADER_DISSIMILARITY_PCT: usize = 60;
/// A leading-space count is dominant once more than this percentage of all
/// fields share it.
pub const WHITESPACE_DOMINANCE_PCT: usize = 80;

/// How many records each inference pass looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLimits {
    /// Records scanned per separator candidate.
    pub separator_rows: usize,
    /// Records scanned for indentation.
    pub indentation_rows: usize,
    /// Records scanned for leading whitespace.
    pub whitespace_rows: usize,
    /// Data records compared against the header candidate.
    pub header_rows: usize,
    /// Records scanned for column types.
    pub type_rows: usize,
    /// Records at the start that are classified in full.
    pub type_full_rows: usize,
    /// Stride for classifying records after `type_full_rows`.
    pub type_stride: usize,
}

impl Default for SampleLimits {
    fn default() -> Self {
        Self {
            separator_rows: SEPARATOR_SAMPLE_ROWS,
            indentation_rows: INDENTATION_SAMPLE_ROWS,
            whitespace_rows: WHITESPACE_SAMPLE_ROWS,
            header_rows: HEADER_SAMPLE_ROWS,
            type_rows: TYPE_SAMPLE_ROWS,
            type_full_rows: TYPE_FULL_ROWS,
            type_stride: TYPE_STRIDE,
        }
    }
}

impl SampleLimits {
    /// Returns true if record `row` (0-based, after any header) gets classified.
    pub fn samples_type_row(&self, row: usize) -> bool {
        row <= self.type_full_rows || row % self.type_stride.max(1) == 0
    }
}

/// Empirical cut-offs used by the heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// See [`HEADER_DISSIMILARITY_PCT`].
    pub header_dissimilarity_pct: usize,
    /// See [`WHITESPACE_DOMINANCE_PCT`].
    pub whitespace_dominance_pct: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            header_dissimilarity_pct: HEADER_DISSIMILARITY_PCT,
            whitespace_dominance_pct: WHITESPACE_DOMINANCE_PCT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = SampleLimits::default();
        assert_eq!(limits.separator_rows, 10);
        assert_eq!(limits.type_rows, 1000);

        let thresholds = Thresholds::default();
        assert_eq!(thresholds.header_dissimilarity_pct, 60);
        assert_eq!(thresholds.whitespace_dominance_pct, 80);
    }

    #[test]
    fn test_samples_type_row() {
        let limits = SampleLimits::default();
        assert!(limits.samples_type_row(0));
        assert!(limits.samples_type_row(100));
        assert!(!limits.samples_type_row(101));
        assert!(limits.samples_type_row(110));
        assert!(!limits.samples_type_row(999));

        let every_row = SampleLimits {
            type_full_rows: 0,
            type_stride: 0,
            ..SampleLimits::default()
        };
        assert!(every_row.samples_type_row(7));
    }
}
