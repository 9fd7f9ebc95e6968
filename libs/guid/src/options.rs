//! Conversion options.
//!
//! Options can be built in code, deserialized with serde, or loaded from the
//! environment:
//!
//! - `GUIDBRIDGE_BYTE_ORDER`: `big` (default) or `mixed`
//! - `GUIDBRIDGE_BRACES`: wrap verbose identifiers in `{}`
//! - `GUIDBRIDGE_STRICT_PADDING`: reject nonzero padding bits

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::types::{BraceStyle, ByteOrder};

pub const BYTE_ORDER_VAR: &str = "GUIDBRIDGE_BYTE_ORDER";
pub const BRACES_VAR: &str = "GUIDBRIDGE_BRACES";
pub const STRICT_PADDING_VAR: &str = "GUIDBRIDGE_STRICT_PADDING";

/// Options for [`convert_with`](crate::convert_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Byte layout of the verbose form.
    pub byte_order: ByteOrder,

    /// Wrap verbose identifiers in braces.
    pub braces: bool,

    /// Treat nonzero padding bits as a failure instead of an advisory.
    pub strict_padding: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    #[must_use]
    pub fn with_braces(mut self, braces: bool) -> Self {
        self.braces = braces;
        self
    }

    #[must_use]
    pub fn with_strict_padding(mut self, strict_padding: bool) -> Self {
        self.strict_padding = strict_padding;
        self
    }

    pub fn brace_style(&self) -> BraceStyle {
        if self.braces {
            BraceStyle::Braced
        } else {
            BraceStyle::Plain
        }
    }

    /// Load options from environment variables. Unset variables keep defaults.
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load options through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OptionsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(value) = lookup(BYTE_ORDER_VAR) {
            options.byte_order =
                ByteOrder::from_name(&value).ok_or(OptionsError::InvalidValue {
                    var: BYTE_ORDER_VAR,
                    value,
                })?;
        }

        if let Some(value) = lookup(BRACES_VAR) {
            options.braces = parse_flag(BRACES_VAR, value)?;
        }

        if let Some(value) = lookup(STRICT_PADDING_VAR) {
            options.strict_padding = parse_flag(STRICT_PADDING_VAR, value)?;
        }

        Ok(options)
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, OptionsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OptionsError::InvalidValue { var, value }),
    }
}
