//! # Coverage windows
//!
//! A [`CoverageWindow`] is an ordered collection of **disjoint closed
//! intervals** of ephemeris time, bounded by a maximum interval count.
//!
//! ## Invariants
//!
//! - intervals are sorted by start time and never overlap nor touch:
//!   inserting an interval that overlaps or shares an endpoint with existing
//!   intervals merges them into one;
//! - every interval satisfies `start <= end` (singletons are allowed);
//! - the number of intervals never exceeds the capacity: an insertion that
//!   would need more room fails with [`SpkError::CapacityExceeded`] and leaves
//!   the window unchanged.
//!
//! Membership is inclusive at both ends.

use std::fmt;

use itertools::Itertools;

use crate::constants::{EphemerisTime, MAX_COVERAGE_INTERVALS};
use crate::spk_errors::{CapacityKind, SpkError};

/// Closed time interval `[start, end]`, TDB seconds past J2000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeInterval {
    pub start: EphemerisTime,
    pub end: EphemerisTime,
}

impl TimeInterval {
    pub fn new(start: EphemerisTime, end: EphemerisTime) -> Self {
        TimeInterval { start, end }
    }

    pub fn contains(&self, epoch: EphemerisTime) -> bool {
        epoch >= self.start && epoch <= self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageWindow {
    intervals: Vec<TimeInterval>,
    capacity: usize,
}

impl Default for CoverageWindow {
    fn default() -> Self {
        Self::with_capacity(MAX_COVERAGE_INTERVALS)
    }
}

impl CoverageWindow {
    /// Empty window holding at most `capacity` intervals.
    pub fn with_capacity(capacity: usize) -> Self {
        CoverageWindow {
            intervals: Vec::new(),
            capacity,
        }
    }

    /// Add `[start, end]` to the window, merging it with every interval it
    /// overlaps or touches.
    ///
    /// Arguments
    /// -----------------
    /// * `start`, `end`: Bounds of the interval, `start <= end`.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` once inserted.
    /// * [`SpkError::ToolkitError`] if `start > end` or a bound is NaN.
    /// * [`SpkError::CapacityExceeded`] if the merged window would hold more
    ///   intervals than its capacity; the window is then left unchanged.
    pub fn insert(&mut self, start: EphemerisTime, end: EphemerisTime) -> Result<(), SpkError> {
        if start.is_nan() || end.is_nan() || start > end {
            return Err(SpkError::ToolkitError(format!(
                "invalid interval bounds [{start}, {end}]"
            )));
        }

        // first interval ending at or after `start`, first interval starting after `end`
        let first = self.intervals.partition_point(|iv| iv.end < start);
        let last = self.intervals.partition_point(|iv| iv.start <= end);

        if first == last {
            if self.intervals.len() >= self.capacity {
                return Err(SpkError::CapacityExceeded {
                    kind: CapacityKind::CoverageIntervals,
                    required: self.intervals.len() + 1,
                    capacity: self.capacity,
                });
            }
            self.intervals.insert(first, TimeInterval::new(start, end));
            return Ok(());
        }

        let merged = TimeInterval::new(
            start.min(self.intervals[first].start),
            end.max(self.intervals[last - 1].end),
        );
        self.intervals.splice(first..last, [merged]);
        Ok(())
    }

    /// Window membership test, inclusive at both interval ends.
    pub fn contains(&self, epoch: EphemerisTime) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.end < epoch);
        self.intervals
            .get(idx)
            .is_some_and(|interval| interval.contains(epoch))
    }

    /// Number of intervals in the window.
    pub fn cardinality(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&TimeInterval> {
        self.intervals.get(index)
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// Earliest and latest covered epochs, `None` for an empty window.
    pub fn bounds(&self) -> Option<(EphemerisTime, EphemerisTime)> {
        Some((self.intervals.first()?.start, self.intervals.last()?.end))
    }

    /// Sum of the interval lengths, in seconds.
    pub fn measure(&self) -> f64 {
        self.intervals.iter().map(TimeInterval::duration).sum()
    }
}

impl fmt::Display for CoverageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return write!(f, "{{}}");
        }
        write!(
            f,
            "{{{}}}",
            self.intervals
                .iter()
                .map(|iv| format!("[{}, {}]", iv.start, iv.end))
                .join(", ")
        )
    }
}
