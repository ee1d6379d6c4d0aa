use super::lookup::LookupTable;
use crate::consts::DEFAULT_LUT_SAMPLE_COUNT;

use glam::DVec2;

/// A cubic bezier segment with two control points.
///
/// Cubic arc length has no closed form, so the segment samples itself into a
/// [LookupTable] at construction. The table is the authoritative source of the
/// segment's length (rather than an independent integral approximation), which
/// keeps length reporting and distance→parameter inversion mutually consistent.
/// Position results are accurate to the sampling density; the sample count is
/// the knob trading construction cost for inversion accuracy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
	start: DVec2,
	control1: DVec2,
	control2: DVec2,
	end: DVec2,
	length: f64,
	lookup_table: LookupTable,
}

impl CubicBezier {
	/// Create a cubic bezier with the default sample count of [DEFAULT_LUT_SAMPLE_COUNT].
	pub fn new(start: DVec2, control1: DVec2, control2: DVec2, end: DVec2) -> Self {
		Self::with_sample_count(start, control1, control2, end, DEFAULT_LUT_SAMPLE_COUNT)
	}

	/// Create a cubic bezier whose lookup table holds `sample_count` evenly spaced samples.
	pub fn with_sample_count(start: DVec2, control1: DVec2, control2: DVec2, end: DVec2, sample_count: usize) -> Self {
		let lookup_table = LookupTable::from_curve(|t| evaluate_at(start, control1, control2, end, t), sample_count);
		let length = lookup_table.total_length();
		Self { start, control1, control2, end, length, lookup_table }
	}

	pub fn start(&self) -> DVec2 {
		self.start
	}

	pub fn control1(&self) -> DVec2 {
		self.control1
	}

	pub fn control2(&self) -> DVec2 {
		self.control2
	}

	pub fn end(&self) -> DVec2 {
		self.end
	}

	pub fn length(&self) -> f64 {
		self.length
	}

	pub fn lookup_table(&self) -> &LookupTable {
		&self.lookup_table
	}

	/// Evaluate the curve at parameter `t` ∈ [0, 1].
	pub fn evaluate(&self, t: f64) -> DVec2 {
		evaluate_at(self.start, self.control1, self.control2, self.end, t)
	}

	/// Invert an arc-length distance back to a curve parameter via the lookup table.
	pub fn parameter_at_distance(&self, distance: f64) -> f64 {
		self.lookup_table.parameter_at_length(distance)
	}

	/// The point `distance` arc-length units along the curve from its start.
	pub fn position_at(&self, distance: f64) -> DVec2 {
		self.evaluate(self.parameter_at_distance(distance))
	}
}

fn evaluate_at(start: DVec2, control1: DVec2, control2: DVec2, end: DVec2, t: f64) -> DVec2 {
	let t_squared = t * t;
	let one_minus_t = 1. - t;
	let one_minus_t_squared = one_minus_t * one_minus_t;

	end * (t_squared * t) + control2 * (3. * t_squared * one_minus_t) + control1 * (3. * t * one_minus_t_squared) + start * (one_minus_t_squared * one_minus_t)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
	use crate::utils::{dvec2_compare, f64_compare};

	fn arch() -> CubicBezier {
		CubicBezier::new(DVec2::ZERO, DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.))
	}

	#[test]
	fn length_is_the_lookup_table_total() {
		let cubic = arch();
		assert_eq!(cubic.length(), cubic.lookup_table().total_length());
		assert!(cubic.length() > cubic.start().distance(cubic.end()));
	}

	#[test]
	fn collinear_control_points_yield_the_chord_length() {
		let cubic = CubicBezier::new(DVec2::ZERO, DVec2::new(3., 0.), DVec2::new(7., 0.), DVec2::new(10., 0.));
		assert!(f64_compare(cubic.length(), 10., MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn position_by_distance_hits_both_endpoints() {
		let cubic = arch();
		assert!(dvec2_compare(cubic.position_at(0.), cubic.start(), MAX_ABSOLUTE_DIFFERENCE).all());
		assert!(dvec2_compare(cubic.position_at(cubic.length()), cubic.end(), MAX_ABSOLUTE_DIFFERENCE).all());
	}

	#[test]
	fn position_by_distance_is_symmetric_on_a_symmetric_curve() {
		// The arch is symmetric about x = 5, so the arc-length midpoint sits on that axis.
		let cubic = arch();
		let midpoint = cubic.position_at(cubic.length() / 2.);
		assert!(f64_compare(midpoint.x, 5., MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn lookup_table_samples_respect_the_table_invariants() {
		let cubic = arch();
		let samples = cubic.lookup_table().samples();
		assert_eq!(samples[0].length, 0.);
		assert!(samples.windows(2).all(|pair| pair[0].length <= pair[1].length));
	}

	#[test]
	fn a_finer_table_refines_the_length_estimate() {
		let coarse = CubicBezier::with_sample_count(DVec2::ZERO, DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.), 50);
		let fine = CubicBezier::with_sample_count(DVec2::ZERO, DVec2::new(0., 10.), DVec2::new(10., 10.), DVec2::new(10., 0.), 5000);
		// Inscribed polylines only lengthen as they subdivide.
		assert!(coarse.length() <= fine.length());
		assert!(f64_compare(coarse.length(), fine.length(), 0.1));
	}
}
