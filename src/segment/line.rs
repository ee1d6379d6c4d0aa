use crate::consts::LINE_LENGTH_EPSILON;

use glam::DVec2;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
	start: DVec2,
	end: DVec2,
	length: f64,
}

impl Line {
	/// Create a line between `start` and `end`, computing its length eagerly.
	pub fn new(start: DVec2, end: DVec2) -> Self {
		Self { start, end, length: start.distance(end) }
	}

	pub fn start(&self) -> DVec2 {
		self.start
	}

	pub fn end(&self) -> DVec2 {
		self.end
	}

	pub fn length(&self) -> f64 {
		self.length
	}

	/// Return the point `distance` units from the start toward the end, measured along
	/// the infinite line through both points. The result is deliberately not clamped to
	/// the segment, so a caller that over- or under-shoots the segment's length gets the
	/// linear extrapolation rather than a pinned endpoint. A line shorter than
	/// [LINE_LENGTH_EPSILON] resolves to its start point unconditionally.
	pub fn position_at(&self, distance: f64) -> DVec2 {
		if self.length < LINE_LENGTH_EPSILON {
			return self.start;
		}
		self.start + (self.end - self.start) / self.length * distance
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
	use crate::utils::dvec2_compare;

	#[test]
	fn length_is_the_euclidean_distance() {
		assert_eq!(Line::new(DVec2::ZERO, DVec2::new(10., 0.)).length(), 10.);
		assert_eq!(Line::new(DVec2::new(1., 2.), DVec2::new(4., 6.)).length(), 5.);
	}

	#[test]
	fn position_interpolates_along_the_segment() {
		let line = Line::new(DVec2::new(2., 2.), DVec2::new(2., 12.));
		assert!(dvec2_compare(line.position_at(0.), DVec2::new(2., 2.), MAX_ABSOLUTE_DIFFERENCE).all());
		assert!(dvec2_compare(line.position_at(5.), DVec2::new(2., 7.), MAX_ABSOLUTE_DIFFERENCE).all());
		assert!(dvec2_compare(line.position_at(10.), DVec2::new(2., 12.), MAX_ABSOLUTE_DIFFERENCE).all());
	}

	#[test]
	fn position_beyond_the_length_extrapolates() {
		let line = Line::new(DVec2::ZERO, DVec2::new(10., 0.));
		assert!(dvec2_compare(line.position_at(15.), DVec2::new(15., 0.), MAX_ABSOLUTE_DIFFERENCE).all());
	}

	#[test]
	fn zero_length_line_resolves_to_its_start() {
		let point = DVec2::new(3., -4.);
		let line = Line::new(point, point);
		assert_eq!(line.length(), 0.);
		assert_eq!(line.position_at(0.), point);
		assert_eq!(line.position_at(123.), point);
	}
}
