//! The identifier conversion routine: repair, validate, decode, format.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ConversionFailure, GuidError};
use crate::options::ConvertOptions;
use crate::repair::repair;
use crate::types::{CompactGuid, VerboseGuid};

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    compact: CompactGuid,
    verbose: VerboseGuid,
    repaired: bool,
    padding_anomaly: bool,
}

impl Conversion {
    /// The cleaned compact identifier: the input with wrap artifacts removed.
    ///
    /// Padding bits are left as given; see [`CompactGuid::canonical`].
    pub fn compact(&self) -> &CompactGuid {
        &self.compact
    }

    /// The derived verbose identifier.
    pub fn verbose(&self) -> &VerboseGuid {
        &self.verbose
    }

    /// Returns true if wrap artifacts were removed from the input.
    pub fn was_repaired(&self) -> bool {
        self.repaired
    }

    /// Returns true if the input carried nonzero padding bits.
    ///
    /// The conversion used only the 128 significant bits; such inputs are
    /// worth flagging for manual review.
    pub fn padding_anomaly(&self) -> bool {
        self.padding_anomaly
    }

    pub fn into_parts(self) -> (CompactGuid, VerboseGuid) {
        (self.compact, self.verbose)
    }
}

/// Converts a raw, possibly wrapped compact identifier using default options.
///
/// ```
/// let conversion = guidbridge_guid::convert("OjUoLaQbSJa-\nLY55KONd1nQ").unwrap();
/// assert_eq!(conversion.compact().as_str(), "OjUoLaQbSJaLY55KONd1nQ");
/// assert_eq!(
///     conversion.verbose().to_string(),
///     "3a35282d-a41b-4896-8b63-9e4a38d7759d"
/// );
/// ```
pub fn convert(raw: &str) -> Result<Conversion, ConversionFailure> {
    convert_with(raw, &ConvertOptions::default())
}

/// Converts a raw, possibly wrapped compact identifier.
///
/// Malformed input is reported through [`ConversionFailure`], which keeps the
/// cleaned candidate for diagnostics. This function never panics.
pub fn convert_with(raw: &str, options: &ConvertOptions) -> Result<Conversion, ConversionFailure> {
    let repaired = repair(raw);
    let was_repaired = !repaired.is_noop();
    if was_repaired {
        debug!(
            wrap_points = repaired.wrap_points(),
            removed_connectors = repaired.removed_connectors(),
            removed_whitespace = repaired.removed_whitespace(),
            "Removed wrap artifacts"
        );
    }

    let ambiguous = repaired.ambiguous_connectors();
    let candidate = repaired.into_candidate();
    if ambiguous > 0 {
        return Err(ConversionFailure::new(
            candidate,
            GuidError::AmbiguousRepair {
                connectors: ambiguous,
            },
        ));
    }

    let compact = match CompactGuid::parse(&candidate) {
        Ok(compact) => compact,
        Err(error) => return Err(ConversionFailure::new(candidate, error)),
    };

    let padding_anomaly = compact.has_padding_anomaly();
    if padding_anomaly {
        let bits = compact.padding_bits();
        if options.strict_padding {
            return Err(ConversionFailure::new(
                candidate,
                GuidError::PaddingAnomaly { bits },
            ));
        }
        warn!(compact = %candidate, bits, "Nonzero padding bits in compact identifier");
    }

    let verbose = compact.to_verbose(options.byte_order, options.brace_style());

    Ok(Conversion {
        compact,
        verbose,
        repaired: was_repaired,
        padding_anomaly,
    })
}
