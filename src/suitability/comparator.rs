//! Range Comparator
//!
//! Compares a measured value against an optimal `[lo, hi]` range. Used by the
//! crop scorer (pH and moisture terms) and by the soil advisory.

/// Where a value falls relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// value < lo
    BelowRange,

    /// lo <= value <= hi
    WithinRange,

    /// value > hi
    AboveRange,
}

/// Result of a range comparison with distance metrics
#[derive(Debug, Clone, Copy)]
pub struct RangeComparison {
    pub fit: RangeFit,

    pub value: f64,

    pub lo: f64,

    pub hi: f64,

    /// Distance to the nearest boundary (0 if within range)
    pub distance_from_range: f64,

    /// |value - (lo + hi) / 2|
    pub distance_from_midpoint: f64,
}

impl RangeComparison {
    pub fn is_within_range(&self) -> bool {
        self.fit == RangeFit::WithinRange
    }

    /// Within `tolerance` of the range midpoint (inclusive)
    pub fn is_near_midpoint(&self, tolerance: f64) -> bool {
        self.distance_from_midpoint <= tolerance
    }

    /// E.g. "pH: 7.2 (optimal 6.0-7.5)"
    pub fn format_with_context(&self, label: &str, unit: &str) -> String {
        format!(
            "{}: {:.1}{} (optimal {:.1}-{:.1}{})",
            label, self.value, unit, self.lo, self.hi, unit
        )
    }
}

/// Compare `value` against the inclusive range `[lo, hi]`.
///
/// A NaN value is neither below nor within the range and compares as
/// `AboveRange` with NaN distances, so every tolerance check on it fails.
pub fn compare_to_range(value: f64, lo: f64, hi: f64) -> RangeComparison {
    let (fit, distance) = if value < lo {
        (RangeFit::BelowRange, lo - value)
    } else if value >= lo && value <= hi {
        (RangeFit::WithinRange, 0.0)
    } else {
        (RangeFit::AboveRange, value - hi)
    };

    RangeComparison {
        fit,
        value,
        lo,
        hi,
        distance_from_range: distance,
        distance_from_midpoint: (value - (lo + hi) / 2.0).abs(),
    }
}
