// Numeric comparison:
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

// Degenerate geometry thresholds:
/// Lines shorter than this resolve every position query to their start point.
pub const LINE_LENGTH_EPSILON: f64 = 1e-10;
/// Arc-length offsets smaller than this resolve to the owning segment's start point.
pub const START_OFFSET_EPSILON: f64 = 0.01;

// Method argument defaults:
/// Number of evenly spaced parameter samples in an arc-length lookup table.
/// Higher counts trade construction cost for inversion accuracy.
pub const DEFAULT_LUT_SAMPLE_COUNT: usize = 1000;
/// Parameter-interval cutoff for the binary search inverting a closed-form arc length.
pub const LENGTH_INVERSION_ACCURACY: f64 = 1e-6;
