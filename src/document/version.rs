//! PDF version handling.

use std::fmt;

/// A PDF header version: the `M.N` in `%PDF-M.N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PdfVersion {
    /// Major version digit.
    pub major: u8,
    /// Minor version digit.
    pub minor: u8,
}

impl PdfVersion {
    /// PDF 1.4
    pub const V1_4: PdfVersion = PdfVersion { major: 1, minor: 4 };
    /// PDF 1.5
    pub const V1_5: PdfVersion = PdfVersion { major: 1, minor: 5 };
    /// PDF 1.6
    pub const V1_6: PdfVersion = PdfVersion { major: 1, minor: 6 };
    /// PDF 1.7 (ISO 32000-1:2008)
    pub const V1_7: PdfVersion = PdfVersion { major: 1, minor: 7 };
    /// PDF 2.0 (ISO 32000-2:2020)
    pub const V2_0: PdfVersion = PdfVersion { major: 2, minor: 0 };

    /// Creates a version from its digits.
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Default for PdfVersion {
    fn default() -> Self {
        Self::V1_7
    }
}

impl fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl From<(u8, u8)> for PdfVersion {
    fn from((major, minor): (u8, u8)) -> Self {
        Self { major, minor }
    }
}
