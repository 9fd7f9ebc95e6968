//! # guidbridge-guid
//!
//! Conversion between the two identifier conventions used when moving
//! parameter data between BIM ecosystems.
//!
//! ## Identifier Formats
//!
//! - **Compact**: 22 symbols of URL-safe base64 (`A-Z a-z 0-9 - _`) holding
//!   128 bits plus 4 zero padding bits, e.g. `OjUoLaQbSJaLY55KONd1nQ`
//! - **Verbose**: 8-4-4-4-12 lowercase hex, optionally braced, e.g.
//!   `3a35282d-a41b-4896-8b63-9e4a38d7759d`
//!
//! ## Wrapped Input
//!
//! Compact identifiers are often copied out of documents where the editor
//! wrapped them across two lines, sometimes inserting a hyphen at the wrap
//! point. [`convert`] removes those artifacts before decoding. Because `-` is
//! itself an alphabet symbol, a wrap hyphen is only removed when the
//! identifier would otherwise be too long.
//!
//! Malformed input is an expected case, not an exceptional one: it is
//! reported as a [`ConversionFailure`] that still carries the cleaned
//! candidate.

mod alphabet;
mod batch;
mod cell;
mod convert;
mod error;
mod options;
mod repair;
mod types;

pub use alphabet::{COMPACT_LEN, SYMBOLS};
#[cfg(feature = "parallel")]
pub use batch::convert_batch_par;
pub use batch::{convert_batch, BatchEntry, BatchReport, BatchSummary};
pub use cell::{unwrap_name, GuidCell, COMPACT_COLUMN, SOURCE_COLUMN, VERBOSE_COLUMN};
pub use convert::{convert, convert_with, Conversion};
pub use error::{ConversionFailure, GuidError, OptionsError};
pub use options::{ConvertOptions, BRACES_VAR, BYTE_ORDER_VAR, STRICT_PADDING_VAR};
pub use repair::{repair, Repair};
pub use types::{BraceStyle, ByteOrder, CompactGuid, VerboseGuid};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
