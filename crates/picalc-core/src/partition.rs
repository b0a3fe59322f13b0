//! Partitioning of the series index space into contiguous ranges.

use crate::error::PiError;

/// A half-open range `[start, end)` of series term indices.
///
/// The ranges produced by [`partition`] for a given `(terms, parts)` cover
/// `[0, terms)` exactly, with no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// First term index, inclusive.
    pub start: u64,
    /// One past the last term index.
    pub end: u64,
}

impl Range {
    /// Number of terms in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the range contains no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Validate a partitioning request without building the ranges.
///
/// Used by the `PiCalculator` decorator so invalid requests fail before any
/// evaluation is attempted.
pub fn validate(terms: u64, parts: usize) -> Result<(), PiError> {
    if terms == 0 {
        return Err(PiError::InvalidArgument("terms must be positive".into()));
    }
    if parts == 0 {
        return Err(PiError::InvalidArgument("workers must be positive".into()));
    }
    if parts as u64 > terms {
        return Err(PiError::InvalidArgument(format!(
            "workers ({parts}) cannot exceed terms ({terms})"
        )));
    }
    Ok(())
}

/// Split `[0, terms)` into `parts` contiguous ranges.
///
/// Every range holds `terms / parts` indices except the last, which is
/// extended to `end = terms` to absorb the remainder. Deterministic for a
/// given `(terms, parts)`.
pub fn partition(terms: u64, parts: usize) -> Result<Vec<Range>, PiError> {
    validate(terms, parts)?;

    let count = parts as u64;
    let chunk = terms / count;
    let mut ranges = Vec::with_capacity(parts);
    for p in 0..count {
        let start = p * chunk;
        let end = if p + 1 == count { terms } else { start + chunk };
        ranges.push(Range { start, end });
    }
    Ok(ranges)
}
