use crate::consts::LENGTH_INVERSION_ACCURACY;

use glam::DVec2;

/// A quadratic bezier segment with a single control point.
///
/// Quadratic arc length has a closed form, so no lookup table is needed: the
/// length is evaluated analytically at construction and the distance→parameter
/// inversion runs a binary search over the same monotone length function.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticBezier {
	start: DVec2,
	control: DVec2,
	end: DVec2,
	length: f64,
}

impl QuadraticBezier {
	/// Create a quadratic bezier, computing its length eagerly from the closed form.
	pub fn new(start: DVec2, control: DVec2, end: DVec2) -> Self {
		let mut quadratic = Self { start, control, end, length: 0. };
		quadratic.length = quadratic.distance_at(1.);
		quadratic
	}

	pub fn start(&self) -> DVec2 {
		self.start
	}

	pub fn control(&self) -> DVec2 {
		self.control
	}

	pub fn end(&self) -> DVec2 {
		self.end
	}

	pub fn length(&self) -> f64 {
		self.length
	}

	/// Evaluate the curve at parameter `t` ∈ [0, 1].
	pub fn evaluate(&self, t: f64) -> DVec2 {
		let one_minus_t = 1. - t;
		self.end * (t * t) + self.control * (2. * t * one_minus_t) + self.start * (one_minus_t * one_minus_t)
	}

	/// The arc length from the curve's start to parameter `t`, from the closed-form
	/// integral of the derivative's magnitude. Parameter values are not linearly
	/// proportional to distance traveled along the curve, which is why this exists.
	///
	/// When the quadratic coefficient of the squared-derivative polynomial vanishes
	/// (the control point sits on the chord) the curve is a straight line and the
	/// integral degenerates to a fraction of the chord length.
	pub fn distance_at(&self, t: f64) -> f64 {
		let a = self.start - 2. * self.control + self.end;
		let b = 2. * (self.control - self.start);

		let quadratic_coefficient = 4. * a.dot(a);
		let linear_coefficient = 4. * a.dot(b);
		let constant_coefficient = b.dot(b);

		if quadratic_coefficient < f64::EPSILON {
			return t * self.start.distance(self.end);
		}

		let b_half = linear_coefficient / (2. * quadratic_coefficient);
		let u = t + b_half;
		let k = (constant_coefficient / quadratic_coefficient - b_half * b_half).max(0.);

		let u_magnitude = (u * u + k).sqrt();
		let b_magnitude = (b_half * b_half + k).sqrt();

		let log_term = if b_half + b_magnitude == 0. || u + u_magnitude == 0. {
			0.
		} else {
			k * ((u + u_magnitude) / (b_half + b_magnitude)).abs().ln()
		};

		(quadratic_coefficient.sqrt() / 2.) * (u * u_magnitude - b_half * b_magnitude + log_term)
	}

	/// Invert an arc-length distance back to a curve parameter with a binary search
	/// over the monotone [Self::distance_at]. Distances are clamped to [0, length].
	pub fn parameter_at_distance(&self, distance: f64) -> f64 {
		if self.length <= f64::EPSILON {
			return 0.;
		}
		let distance = distance.clamp(0., self.length);

		let mut low_t = 0.;
		let mut mid_t = 0.5;
		let mut high_t = 1.;
		while high_t - low_t > LENGTH_INVERSION_ACCURACY {
			if self.distance_at(mid_t) > distance {
				high_t = mid_t;
			} else {
				low_t = mid_t;
			}
			mid_t = (high_t + low_t) / 2.;
		}
		mid_t
	}

	/// The point `distance` arc-length units along the curve from its start.
	pub fn position_at(&self, distance: f64) -> DVec2 {
		self.evaluate(self.parameter_at_distance(distance))
	}
}
