//! Batch conversion.
//!
//! N inputs always produce N entries in input order. A failed entry never
//! affects its neighbours; failures are reported in aggregate.

use serde::Serialize;
use tracing::{info, warn};

use crate::convert::{convert_with, Conversion};
use crate::error::ConversionFailure;
use crate::options::ConvertOptions;

/// One converted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// Position in the input sequence.
    pub index: usize,
    /// The raw input as given.
    pub input: String,
    pub result: Result<Conversion, ConversionFailure>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    /// Converted entries that needed wrap-artifact repair.
    pub repaired: usize,
    /// Converted entries with nonzero padding bits.
    pub padding_anomalies: usize,
    pub failed: usize,
}

/// Results of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<BatchEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successful entries.
    pub fn conversions(&self) -> impl Iterator<Item = (usize, &Conversion)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().ok().map(|c| (entry.index, c)))
    }

    /// Failed entries.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ConversionFailure)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|f| (entry.index, f)))
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.entries.len(),
            ..BatchSummary::default()
        };

        for entry in &self.entries {
            match &entry.result {
                Ok(conversion) => {
                    summary.converted += 1;
                    if conversion.was_repaired() {
                        summary.repaired += 1;
                    }
                    if conversion.padding_anomaly() {
                        summary.padding_anomalies += 1;
                    }
                }
                Err(_) => summary.failed += 1,
            }
        }

        summary
    }

    fn finish(entries: Vec<BatchEntry>) -> Self {
        let report = Self { entries };
        let summary = report.summary();
        info!(
            total = summary.total,
            converted = summary.converted,
            repaired = summary.repaired,
            padding_anomalies = summary.padding_anomalies,
            failed = summary.failed,
            "Batch conversion finished"
        );
        report
    }
}

/// Converts every input independently.
pub fn convert_batch<I, S>(inputs: I, options: &ConvertOptions) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| convert_entry(index, input.as_ref(), options))
        .collect();

    BatchReport::finish(entries)
}

/// Parallel [`convert_batch`]. Entry order matches input order.
#[cfg(feature = "parallel")]
pub fn convert_batch_par<S>(inputs: &[S], options: &ConvertOptions) -> BatchReport
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let entries = inputs
        .par_iter()
        .enumerate()
        .map(|(index, input)| convert_entry(index, input.as_ref(), options))
        .collect();

    BatchReport::finish(entries)
}

fn convert_entry(index: usize, input: &str, options: &ConvertOptions) -> BatchEntry {
    let result = convert_with(input, options);
    if let Err(failure) = &result {
        warn!(
            index,
            cleaned = failure.cleaned(),
            error = %failure.error(),
            "Identifier conversion failed"
        );
    }

    BatchEntry {
        index,
        input: input.to_string(),
        result,
    }
}
