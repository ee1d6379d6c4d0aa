use crate::consts::START_OFFSET_EPSILON;
use crate::error::PathError;
use crate::parser::parse_path_data;
use crate::segment::Segment;

use glam::DVec2;

/// An immutable ordered sequence of segments with a precomputed total arc length.
///
/// Insertion order is draw order. Neither the segments nor the length change
/// after construction, and every query borrows immutably, so one `Path` can be
/// shared across threads without synchronization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
	segments: Vec<Segment>,
	length: f64,
}

impl Path {
	/// Create a path from an already-built segment sequence, computing the total length eagerly.
	pub fn new(segments: Vec<Segment>) -> Self {
		let length = segments.iter().map(Segment::length).sum();
		Self { segments, length }
	}

	/// Parse a path description into a path.
	///
	/// Fails with [PathError::EmptyInput] when the text is empty or whitespace-only.
	pub fn parse(data: &str) -> Result<Self, PathError> {
		Ok(Self::new(parse_path_data(data)?))
	}

	/// The sum of every segment's arc length. Zero-length markers contribute nothing.
	pub fn total_length(&self) -> f64 {
		self.length
	}

	/// The segments in draw order.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns an iterator over the segments in draw order.
	pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
		self.segments.iter()
	}

	/// Returns the number of segments contained within the path.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if and only if the path contains no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// The point at arc length `length` along the whole path.
	///
	/// Queries at or beyond the total length clamp to the final segment's end
	/// point. Otherwise the walk subtracts each segment's length from the query
	/// until it finds the segment the remainder falls inside, then delegates to
	/// that segment with the local offset. Zero-length markers are always fully
	/// consumed by the subtraction and can never own a positive offset. A local
	/// offset under [START_OFFSET_EPSILON] resolves to the owning segment's
	/// start point, skipping needless curve evaluation.
	///
	/// Fails with [PathError::EmptyPath] when the path has no segments.
	pub fn position_at_length(&self, length: f64) -> Result<DVec2, PathError> {
		let Some(final_segment) = self.segments.last() else {
			return Err(PathError::EmptyPath);
		};

		if length >= self.length {
			return Ok(final_segment.end());
		}

		let mut remaining = length;
		for segment in &self.segments {
			if remaining >= segment.length() {
				remaining -= segment.length();
				continue;
			}
			if remaining < START_OFFSET_EPSILON {
				return Ok(segment.start());
			}
			return Ok(segment.position_at(remaining));
		}

		// Only reachable when rounding while summing segment lengths leaves a
		// sliver between the walked total and the stored total.
		Ok(final_segment.end())
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Segment;
	type IntoIter = std::slice::Iter<'a, Segment>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
	use crate::utils::{dvec2_compare, f64_compare};
	use pretty_assertions::assert_eq;

	#[test]
	fn queries_against_an_empty_path_fail() {
		let path = Path::new(Vec::new());
		assert_eq!(path.total_length(), 0.);
		assert_eq!(path.position_at_length(0.), Err(PathError::EmptyPath));
	}

	#[test]
	fn square_path_end_to_end() {
		let path = Path::parse("M 0,0 L 10,0 L 10,10 Z").unwrap();
		assert_eq!(path.total_length(), 20.);
		assert_eq!(path.position_at_length(5.).unwrap(), DVec2::new(5., 0.));
		assert_eq!(path.position_at_length(15.).unwrap(), DVec2::new(10., 5.));
	}

	#[test]
	fn position_at_zero_is_the_first_drawn_start() {
		let path = Path::parse("M 3,4 L 13,4").unwrap();
		assert_eq!(path.position_at_length(0.).unwrap(), DVec2::new(3., 4.));
	}

	#[test]
	fn positions_at_or_beyond_the_total_clamp_to_the_final_end() {
		let path = Path::parse("M 0,0 L 10,0 L 10,10").unwrap();
		assert_eq!(path.position_at_length(path.total_length()).unwrap(), DVec2::new(10., 10.));
		assert_eq!(path.position_at_length(1e6).unwrap(), DVec2::new(10., 10.));
	}

	#[test]
	fn near_start_offsets_short_circuit_to_the_segment_start() {
		let path = Path::parse("M 0,0 L 10,0 L 10,10").unwrap();
		assert_eq!(path.position_at_length(10.005).unwrap(), DVec2::new(10., 0.));
	}

	#[test]
	fn markers_between_subpaths_never_own_an_offset() {
		let path = Path::parse("M 0,0 L 10,0 M 20,0 L 30,0").unwrap();
		assert_eq!(path.total_length(), 20.);
		// The second line owns the residual even though a zero-length move precedes it.
		assert_eq!(path.position_at_length(15.).unwrap(), DVec2::new(25., 0.));
	}

	#[test]
	fn closing_markers_contribute_nothing_to_the_length() {
		let open = Path::parse("M 0,0 L 10,0 L 10,10").unwrap();
		let closed = Path::parse("M 0,0 L 10,0 L 10,10 Z").unwrap();
		assert_eq!(open.total_length(), closed.total_length());
		assert_eq!(closed.len(), open.len() + 1);
	}

	#[test]
	fn parsing_is_idempotent() {
		let data = "m 1.5,2.5 q 4,8 8,0 t 8,0 c 1,1 2,2 3,0 a 5 5 0 0 1 -10,0 z";
		let first = Path::parse(data).unwrap();
		let second = Path::parse(data).unwrap();
		assert_eq!(first, second);
		assert_eq!(first.total_length(), second.total_length());
	}

	#[test]
	fn mixed_curve_path_walks_across_segment_boundaries() {
		let path = Path::parse("M 0,0 L 10,0 Q 15,10 20,0 C 20,10 30,10 30,0").unwrap();
		// Querying inside each segment returns a point on that segment.
		let on_line = path.position_at_length(5.).unwrap();
		assert!(dvec2_compare(on_line, DVec2::new(5., 0.), MAX_ABSOLUTE_DIFFERENCE).all());

		let quadratic_length = path.segments()[2].length();
		let on_quadratic = path.position_at_length(10. + quadratic_length / 2.).unwrap();
		assert!(f64_compare(on_quadratic.x, 15., MAX_ABSOLUTE_DIFFERENCE));

		let cubic_start = 10. + quadratic_length;
		let cubic_length = path.segments()[3].length();
		let on_cubic = path.position_at_length(cubic_start + cubic_length / 2.).unwrap();
		assert!(f64_compare(on_cubic.x, 25., MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn curved_path_from_production_data_reports_a_stable_length() {
		// A long drawn stroke mixing relative cubics, an absolute horizontal
		// line, and repeated curve groups.
		let path = Path::parse(
			"m 1633.8176,1077.4212 c 0,0 18.4277,-511.56464 -14.7423,-535.31585 -32.2488,-23.0917 -318.7995,-9.13506 -318.7995,-9.13506 H 830.3691 c 0,0 -182.43438,-54.81052 -189.80546,-129.7182 -3.97298,-40.37463 -16.58496,-164.43147 -16.58496,-164.43147 0,0 -60.81148,-89.5238 -180.59162,-95.00485 C 323.6069,138.33472 -4.4064367,134.68069 -4.4064367,134.68069",
		)
		.unwrap();

		assert!(f64_compare(path.total_length(), 2391.2, 0.5));
		assert_eq!(path.position_at_length(0.).unwrap(), DVec2::new(1633.8176, 1077.4212));

		// Walking monotonically along the path never jumps farther than the step.
		let mut previous = path.position_at_length(0.).unwrap();
		for step in 1..=100 {
			let position = path.position_at_length(step as f64 * path.total_length() / 100.).unwrap();
			assert!(previous.distance(position) <= path.total_length() / 100. + 1.);
			previous = position;
		}
	}
}
