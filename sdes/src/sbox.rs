//! Loadable two-row substitution box
//!
//! The resource format is two lines of dash-joined binary strings, for
//! example `101-010-001-110`. Row 0 and row 1 must contain the same number
//! of entries and every entry must share one bit-width `w`; a box then
//! substitutes `w + 1` input bits (1 row-selector bit + `w` column bits)
//! for the `w`-bit table entry they address.

use std::fs;
use std::path::Path;

use crate::bits::BitString;
use crate::error::{Result, SdesError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SBox {
    rows: [Vec<BitString>; 2],
    width: usize,
}

impl SBox {
    /// Create an empty box. It rejects every substitution until a table is
    /// loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no table has been loaded.
    pub fn is_empty(&self) -> bool {
        self.rows[0].is_empty()
    }

    /// Input width accepted by [`substitute`](Self::substitute): entry width
    /// plus the row-selector bit. 0 for an empty box.
    pub fn size(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width + 1
        }
    }

    /// Parse a table from text.
    pub fn parse(text: &str) -> Result<Self> {
        let data_rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if data_rows.len() != 2 {
            return Err(SdesError::InvalidSBoxFormat(format!(
                "expected exactly 2 rows, found {}",
                data_rows.len()
            )));
        }

        let mut rows: [Vec<BitString>; 2] = [Vec::new(), Vec::new()];
        let mut width = 0;
        for (r, line) in data_rows.iter().enumerate() {
            for part in line.split('-') {
                let entry: BitString = part.parse().map_err(|_| {
                    SdesError::InvalidSBoxFormat(format!(
                        "row {}: '{}' is not a binary string",
                        r, part
                    ))
                })?;
                if width == 0 {
                    width = entry.len();
                } else if entry.len() != width {
                    return Err(SdesError::InvalidSBoxFormat(format!(
                        "row {}: entry '{}' is {} bits wide, expected {}",
                        r,
                        entry,
                        entry.len(),
                        width
                    )));
                }
                rows[r].push(entry);
            }
        }
        if rows[0].len() != rows[1].len() {
            return Err(SdesError::InvalidSBoxFormat(format!(
                "rows differ in entry count ({} vs {})",
                rows[0].len(),
                rows[1].len()
            )));
        }

        Ok(Self { rows, width })
    }

    /// Parse a table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Replace the current table with one read from `path`. On failure the
    /// previously loaded table stays in place.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let parsed = Self::from_file(path)?;
        *self = parsed;
        Ok(())
    }

    /// Substitute a `size()`-bit value: the first bit selects the row, the
    /// remaining bits address the column.
    pub fn substitute(&self, value: &BitString) -> Result<BitString> {
        if self.is_empty() {
            return Err(SdesError::SizeMismatch(
                "substitution through an empty S-box".to_string(),
            ));
        }
        if value.len() != self.size() {
            return Err(SdesError::SizeMismatch(format!(
                "input has {} bits, S-box expects {}",
                value.len(),
                self.size()
            )));
        }
        let row = usize::from(value.bit(0));
        let (_, column_bits) = value.split_at(1);
        let column = column_bits.to_decimal()? as usize;
        self.rows[row].get(column).cloned().ok_or_else(|| {
            SdesError::SizeMismatch(format!(
                "column {} is beyond the {} entries of row {}",
                column,
                self.rows[row].len(),
                row
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_1: &str = "101-010-001-110-011-100-111-000\n001-100-110-010-000-111-101-011\n";
    const TABLE_2: &str = "100-000-110-101-111-001-011-010\n101-011-000-111-110-010-001-100\n";

    fn bs(s: &str) -> BitString {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_size() {
        let sbox = SBox::parse(TABLE_1).unwrap();
        assert!(!sbox.is_empty());
        assert_eq!(sbox.size(), 4);
        assert_eq!(SBox::new().size(), 0);
    }

    #[test]
    fn test_substitute() {
        let sbox1 = SBox::parse(TABLE_1).unwrap();
        let sbox2 = SBox::parse(TABLE_2).unwrap();
        // Row 0, column 6
        assert_eq!(sbox1.substitute(&bs("0110")).unwrap(), bs("111"));
        // Row 1, column 1
        assert_eq!(sbox2.substitute(&bs("1001")).unwrap(), bs("011"));
    }

    #[test]
    fn test_substitute_output_width() {
        let sbox = SBox::parse(TABLE_1).unwrap();
        for value in 0..16u64 {
            let input = BitString::from_decimal_width(value, 4).unwrap();
            let output = sbox.substitute(&input).unwrap();
            assert_eq!(output.len(), sbox.size() - 1);
        }
    }

    #[test]
    fn test_substitute_rejects_wrong_width() {
        let sbox = SBox::parse(TABLE_1).unwrap();
        assert!(matches!(
            sbox.substitute(&bs("01101")),
            Err(SdesError::SizeMismatch(_))
        ));
        assert!(matches!(
            SBox::new().substitute(&bs("0110")),
            Err(SdesError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_substitute_reports_missing_column() {
        // Row entries exist only for columns 0 and 1
        let sbox = SBox::parse("101-010\n001-100\n").unwrap();
        assert_eq!(sbox.size(), 4);
        assert!(matches!(
            sbox.substitute(&bs("0110")),
            Err(SdesError::SizeMismatch(_))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_tables() {
        // Wrong row count
        assert!(matches!(
            SBox::parse("101-010\n"),
            Err(SdesError::InvalidSBoxFormat(_))
        ));
        assert!(matches!(
            SBox::parse("101\n010\n001\n"),
            Err(SdesError::InvalidSBoxFormat(_))
        ));
        // Unequal row lengths
        assert!(matches!(
            SBox::parse("101-010-001\n001-100\n"),
            Err(SdesError::InvalidSBoxFormat(_))
        ));
        // Mixed entry widths
        assert!(matches!(
            SBox::parse("101-01\n001-100\n"),
            Err(SdesError::InvalidSBoxFormat(_))
        ));
        // Non-binary entries
        assert!(matches!(
            SBox::parse("101-abc\n001-100\n"),
            Err(SdesError::InvalidSBoxFormat(_))
        ));
        // Empty entry produced by a double dash
        assert!(matches!(
            SBox::parse("101--010\n001-100-110\n"),
            Err(SdesError::InvalidSBoxFormat(_))
        ));
    }

    #[test]
    fn test_failed_load_keeps_previous_table() {
        let mut sbox = SBox::parse(TABLE_1).unwrap();
        assert!(sbox.load("/does/not/exist.txt").is_err());
        assert_eq!(sbox.size(), 4);
        assert_eq!(sbox.substitute(&bs("0110")).unwrap(), bs("111"));
    }

    #[test]
    fn test_load_from_resource_file() {
        let mut sbox = SBox::new();
        sbox.load(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/sbox1.txt"))
            .unwrap();
        assert_eq!(sbox.size(), 4);
        assert_eq!(sbox.substitute(&bs("0000")).unwrap(), bs("101"));
    }
}
