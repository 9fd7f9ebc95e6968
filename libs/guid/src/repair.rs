//! Repair of identifiers that were word-wrapped in a document and pasted back.
//!
//! Every whitespace run is treated as a wrap point. Invisible editor marks
//! (soft hyphens, zero-width marks) are dropped wherever they appear;
//! typographic dashes only when they end a line. An ASCII `-` directly before
//! a wrap point is dropped only when the candidate is longer than
//! [`COMPACT_LEN`], because `-` is also a legitimate alphabet symbol. If
//! several such hyphens could be dropped and the choice changes the result,
//! the repair is ambiguous and nothing is dropped.

use crate::alphabet::{self, COMPACT_LEN, WRAP_CONNECTOR};

/// Upper bound on wrap hyphens considered when resolving which to drop.
const MAX_CONNECTOR_CHOICES: usize = 16;

/// Result of the repair phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    candidate: String,
    wrap_points: usize,
    removed_connectors: usize,
    removed_whitespace: usize,
    ambiguous_connectors: usize,
}

impl Repair {
    /// The cleaned candidate; contains no whitespace.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn into_candidate(self) -> String {
        self.candidate
    }

    /// Whitespace runs found between non-whitespace fragments.
    pub fn wrap_points(&self) -> usize {
        self.wrap_points
    }

    /// Connector characters removed (editor artifacts and wrap hyphens).
    pub fn removed_connectors(&self) -> usize {
        self.removed_connectors
    }

    /// Whitespace characters removed, including leading and trailing ones.
    pub fn removed_whitespace(&self) -> usize {
        self.removed_whitespace
    }

    /// Wrap hyphens left in place because different removals disagree.
    ///
    /// Zero unless the repair is ambiguous.
    pub fn ambiguous_connectors(&self) -> usize {
        self.ambiguous_connectors
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous_connectors > 0
    }

    /// Returns true if the input was already clean.
    pub fn is_noop(&self) -> bool {
        self.removed_connectors == 0 && self.removed_whitespace == 0
    }
}

/// Strips wrap artifacts from `raw`.
///
/// Never fails; the candidate is validated afterwards.
pub fn repair(raw: &str) -> Repair {
    let mut fragments: Vec<String> = Vec::new();
    let mut current = String::with_capacity(raw.len());
    let mut removed_whitespace = 0;
    let mut removed_connectors = 0;

    for c in raw.chars() {
        if c.is_whitespace() {
            removed_whitespace += 1;
            if !current.is_empty() {
                fragments.push(std::mem::take(&mut current));
            }
        } else if alphabet::is_invisible_artifact(c) {
            removed_connectors += 1;
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        fragments.push(current);
    }

    let wrap_points = fragments.len().saturating_sub(1);

    for fragment in fragments.iter_mut().take(wrap_points) {
        while fragment.ends_with(alphabet::is_typographic_dash) {
            fragment.pop();
            removed_connectors += 1;
        }
    }

    let length: usize = fragments.iter().map(|f| f.chars().count()).sum();
    let connectors: Vec<usize> = fragments
        .iter()
        .take(wrap_points)
        .enumerate()
        .filter(|(_, fragment)| fragment.ends_with(WRAP_CONNECTOR))
        .map(|(index, _)| index)
        .collect();

    let excess = length.saturating_sub(COMPACT_LEN);
    let mut ambiguous_connectors = 0;
    if excess > 0 && excess <= connectors.len() {
        match unique_removal(&fragments, &connectors, excess) {
            Some(dropped) => {
                for index in dropped {
                    fragments[index].pop();
                    removed_connectors += 1;
                }
            }
            None => ambiguous_connectors = connectors.len(),
        }
    }

    Repair {
        candidate: fragments.concat(),
        wrap_points,
        removed_connectors,
        removed_whitespace,
        ambiguous_connectors,
    }
}

/// Picks `excess` wrap hyphens to drop, or `None` if different picks give
/// different candidates.
fn unique_removal(fragments: &[String], connectors: &[usize], excess: usize) -> Option<Vec<usize>> {
    if connectors.len() > MAX_CONNECTOR_CHOICES {
        return None;
    }

    let mut choices = combinations(connectors, excess).into_iter();
    let first = choices.next()?;
    let expected = join_without(fragments, &first);
    choices
        .all(|choice| join_without(fragments, &choice) == expected)
        .then_some(first)
}

fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let Some((&first, rest)) = items.split_first() else {
        return Vec::new();
    };

    let mut out: Vec<Vec<usize>> = combinations(rest, k - 1)
        .into_iter()
        .map(|mut choice| {
            choice.insert(0, first);
            choice
        })
        .collect();
    out.extend(combinations(rest, k));
    out
}

/// Concatenates fragments, dropping the trailing hyphen of each listed one.
fn join_without(fragments: &[String], dropped: &[usize]) -> String {
    fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| match fragment.strip_suffix(WRAP_CONNECTOR) {
            Some(stripped) if dropped.contains(&index) => stripped,
            _ => fragment.as_str(),
        })
        .collect()
}
