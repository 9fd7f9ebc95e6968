//! Per-cell helpers for tabular callers.
//!
//! A spreadsheet processor reads the `GUID` column, converts each cell, and
//! writes the results into the `IFC-GUID` and `MS-GUID` columns. Reading and
//! writing the spreadsheet itself is the caller's job.

use crate::convert::{convert_with, Conversion};
use crate::error::ConversionFailure;
use crate::options::ConvertOptions;

/// Column holding the raw, possibly wrapped compact identifiers.
pub const SOURCE_COLUMN: &str = "GUID";

/// Column receiving the cleaned compact identifier.
pub const COMPACT_COLUMN: &str = "IFC-GUID";

/// Column receiving the verbose identifier.
pub const VERBOSE_COLUMN: &str = "MS-GUID";

/// Outcome for one source cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuidCell {
    /// Missing or blank cell; nothing was converted.
    Empty,
    Converted(Conversion),
    Failed(ConversionFailure),
}

impl GuidCell {
    pub fn from_cell(cell: Option<&str>, options: &ConvertOptions) -> Self {
        match cell {
            Some(text) if !text.trim().is_empty() => match convert_with(text, options) {
                Ok(conversion) => GuidCell::Converted(conversion),
                Err(failure) => GuidCell::Failed(failure),
            },
            _ => GuidCell::Empty,
        }
    }

    /// Values for the compact and verbose output columns.
    ///
    /// A failed cell keeps its cleaned candidate in the compact column so the
    /// problem is visible next to an empty verbose column.
    pub fn columns(&self) -> (Option<String>, Option<String>) {
        match self {
            GuidCell::Empty => (None, None),
            GuidCell::Converted(conversion) => (
                Some(conversion.compact().to_string()),
                Some(conversion.verbose().to_string()),
            ),
            GuidCell::Failed(failure) if failure.cleaned().is_empty() => (None, None),
            GuidCell::Failed(failure) => (Some(failure.cleaned().to_string()), None),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, GuidCell::Failed(_))
    }
}

/// Joins a name that was wrapped across lines.
///
/// A hyphen directly before a line break is a wrap hyphen and is dropped
/// with the break; every other break becomes a single space.
pub fn unwrap_name(name: &str) -> String {
    let normalized = name.replace("\r\n", "\n").replace('\r', "\n");
    normalized.replace("-\n", "").replace('\n', " ")
}
