use glam::DVec2;

/// One arc-length sample: a curve parameter and the cumulative distance traveled to reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthSample {
	pub parameter: f64,
	pub length: f64,
}

/// A monotonic table mapping curve parameter t ∈ [0, 1] to cumulative arc length.
///
/// Curves without a closed-form arc-length inverse (cubic beziers, elliptical
/// arcs) build one of these at construction time and keep it for the lifetime
/// of the segment. The final cumulative sample doubles as the curve's total
/// length, so length reporting and distance→parameter inversion can never
/// disagree with each other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookupTable {
	samples: Vec<LengthSample>,
}

impl LookupTable {
	/// Build a table by evaluating `evaluate` at `sample_count + 1` evenly spaced parameters
	/// in [0, 1] and accumulating the point-to-point distance between consecutive samples.
	pub fn from_curve(evaluate: impl Fn(f64) -> DVec2, sample_count: usize) -> Self {
		let sample_count = sample_count.max(1);
		let mut samples = Vec::with_capacity(sample_count + 1);
		samples.push(LengthSample { parameter: 0., length: 0. });

		let mut accumulated = 0.;
		let mut previous_point = evaluate(0.);
		for sample_index in 1..=sample_count {
			let parameter = sample_index as f64 / sample_count as f64;
			let point = evaluate(parameter);
			accumulated += previous_point.distance(point);
			previous_point = point;
			samples.push(LengthSample { parameter, length: accumulated });
		}

		Self { samples }
	}

	/// The total arc length of the sampled curve (the final cumulative sample).
	pub fn total_length(&self) -> f64 {
		self.samples.last().map_or(0., |sample| sample.length)
	}

	/// The ordered samples, with parameters strictly increasing from 0 to 1
	/// and cumulative lengths non-decreasing from 0 to [Self::total_length].
	pub fn samples(&self) -> &[LengthSample] {
		&self.samples
	}

	/// Invert a cumulative arc length back to a curve parameter.
	///
	/// Locates the first sample whose cumulative length exceeds `distance` by binary
	/// search, then linearly interpolates the parameter between the bracketing samples.
	/// Distances at or below 0 resolve to `t = 0`, distances at or beyond the total
	/// length to `t = 1`.
	pub fn parameter_at_length(&self, distance: f64) -> f64 {
		let index = self.samples.partition_point(|sample| sample.length <= distance);
		if index == 0 {
			return 0.;
		}
		if index == self.samples.len() {
			return 1.;
		}

		let below = self.samples[index - 1];
		let above = self.samples[index];
		below.parameter + (above.parameter - below.parameter) * (distance - below.length) / (above.length - below.length)
	}
}
