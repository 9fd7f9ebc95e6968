//! Compact and verbose identifier value types.
//!
//! Both are immutable and identified purely by their string value. Parsing is
//! strict here; repair of wrapped input lives in [`crate::repair`].

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alphabet::{self, PADDING_MASK};
use crate::error::GuidError;

/// URL-safe base64 without `=` padding. The 4 trailing bits of a 22-symbol
/// string are accepted here and checked separately.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &base64::alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone),
);

// =============================================================================
// Byte order and brace style
// =============================================================================

/// How the 16 decoded bytes map onto the 8-4-4-4-12 hex groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Bytes rendered in sequence (RFC 4122 layout).
    #[default]
    BigEndian,
    /// First three groups byte-reversed (Microsoft GUID memory layout).
    MixedEndian,
}

impl ByteOrder {
    /// Parses a configuration name (`big`, `rfc4122`, `mixed`, `microsoft`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "big" | "big_endian" | "big-endian" | "rfc4122" => Some(Self::BigEndian),
            "mixed" | "mixed_endian" | "mixed-endian" | "microsoft" | "le" => {
                Some(Self::MixedEndian)
            }
            _ => None,
        }
    }

    /// Interprets decoded bytes as a UUID.
    #[must_use]
    pub fn uuid_from_bytes(self, bytes: [u8; 16]) -> Uuid {
        match self {
            ByteOrder::BigEndian => Uuid::from_bytes(bytes),
            ByteOrder::MixedEndian => Uuid::from_bytes_le(bytes),
        }
    }

    /// Inverse of [`uuid_from_bytes`](Self::uuid_from_bytes).
    #[must_use]
    pub fn uuid_to_bytes(self, uuid: Uuid) -> [u8; 16] {
        match self {
            ByteOrder::BigEndian => *uuid.as_bytes(),
            ByteOrder::MixedEndian => uuid.to_bytes_le(),
        }
    }
}

/// Whether verbose identifiers are wrapped in `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BraceStyle {
    #[default]
    Plain,
    Braced,
}

// =============================================================================
// Compact identifier
// =============================================================================

/// A validated 22-symbol compact identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompactGuid {
    text: String,
    bytes: [u8; 16],
    padding: u8,
}

impl CompactGuid {
    /// Number of symbols.
    pub const LEN: usize = alphabet::COMPACT_LEN;

    /// Parses a compact identifier. No artifact repair is attempted.
    pub fn parse(s: &str) -> Result<Self, GuidError> {
        alphabet::validate(s)?;

        let decoded = ENGINE.decode(s).map_err(|e| match e {
            DecodeError::InvalidByte(position, byte) => GuidError::InvalidSymbol {
                symbol: char::from(byte),
                position,
            },
            _ => GuidError::UnrepairableLength {
                length: s.chars().count(),
            },
        })?;
        let bytes: [u8; 16] = decoded
            .try_into()
            .map_err(|_| GuidError::UnrepairableLength {
                length: s.chars().count(),
            })?;

        // validate() guarantees a last symbol in the alphabet
        let padding = s
            .chars()
            .last()
            .and_then(alphabet::value_of)
            .map_or(0, |value| value & PADDING_MASK);

        Ok(Self {
            text: s.to_string(),
            bytes,
            padding,
        })
    }

    /// Encodes a UUID; padding bits are always zero.
    #[must_use]
    pub fn from_uuid(uuid: Uuid, order: ByteOrder) -> Self {
        Self::from_bytes(order.uuid_to_bytes(uuid))
    }

    fn from_bytes(bytes: [u8; 16]) -> Self {
        Self {
            text: ENGINE.encode(bytes),
            bytes,
            padding: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The 16 significant bytes in decode order.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// The 4 trailing padding bits (zero for well-formed input).
    pub fn padding_bits(&self) -> u8 {
        self.padding
    }

    /// Returns true if the padding bits are nonzero.
    pub fn has_padding_anomaly(&self) -> bool {
        self.padding != 0
    }

    /// Re-encodes the significant bits, clearing any padding noise.
    #[must_use]
    pub fn canonical(&self) -> Self {
        if self.padding == 0 {
            self.clone()
        } else {
            Self::from_bytes(self.bytes)
        }
    }

    #[must_use]
    pub fn to_uuid(&self, order: ByteOrder) -> Uuid {
        order.uuid_from_bytes(self.bytes)
    }

    #[must_use]
    pub fn to_verbose(&self, order: ByteOrder, style: BraceStyle) -> VerboseGuid {
        VerboseGuid::new(self.to_uuid(order), style)
    }
}

impl fmt::Display for CompactGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for CompactGuid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CompactGuid {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for CompactGuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for CompactGuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Verbose identifier
// =============================================================================

/// A 36-character 8-4-4-4-12 lowercase hex identifier, optionally braced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerboseGuid {
    uuid: Uuid,
    style: BraceStyle,
}

impl VerboseGuid {
    #[must_use]
    pub const fn new(uuid: Uuid, style: BraceStyle) -> Self {
        Self { uuid, style }
    }

    /// Parses `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, with or without braces.
    pub fn parse(s: &str) -> Result<Self, GuidError> {
        let trimmed = s.trim();
        let (inner, style) = match trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(inner) => (inner, BraceStyle::Braced),
            None => (trimmed, BraceStyle::Plain),
        };

        // Uuid::try_parse also accepts simple and urn forms; only hyphenated is valid here.
        if inner.len() != 36 {
            return Err(GuidError::InvalidVerbose(s.to_string()));
        }

        let uuid = Uuid::try_parse(inner).map_err(|_| GuidError::InvalidVerbose(s.to_string()))?;
        Ok(Self { uuid, style })
    }

    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    #[must_use]
    pub const fn style(&self) -> BraceStyle {
        self.style
    }

    #[must_use]
    pub const fn with_style(self, style: BraceStyle) -> Self {
        Self {
            uuid: self.uuid,
            style,
        }
    }

    /// Encodes back into the compact form.
    #[must_use]
    pub fn to_compact(&self, order: ByteOrder) -> CompactGuid {
        CompactGuid::from_uuid(self.uuid, order)
    }
}

impl fmt::Display for VerboseGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            BraceStyle::Plain => write!(f, "{}", self.uuid.hyphenated()),
            BraceStyle::Braced => write!(f, "{}", self.uuid.braced()),
        }
    }
}

impl FromStr for VerboseGuid {
    type Err = GuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<VerboseGuid> for Uuid {
    fn from(guid: VerboseGuid) -> Self {
        guid.uuid
    }
}

impl Serialize for VerboseGuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VerboseGuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
