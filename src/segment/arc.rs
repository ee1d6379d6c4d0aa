use super::lookup::LookupTable;
use crate::consts::DEFAULT_LUT_SAMPLE_COUNT;
use crate::utils::rotate_about_origin;

use glam::DVec2;

/// An elliptical arc segment in center parameterization: a center, the two
/// ellipse radii, a start angle, an angular sweep, and the rotation of the
/// ellipse's x-axis.
///
/// Elliptical arc length has no closed form at all, so the length here is the
/// same sampled-polyline approximation cubic beziers use, built over the
/// angular sweep. The `start` and `end` points are recorded from the path
/// description rather than re-derived from the center parameters, keeping them
/// bit-identical with the neighboring segments' endpoints.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipticalArc {
	start: DVec2,
	end: DVec2,
	center: DVec2,
	radii: DVec2,
	start_angle: f64,
	sweep_angle: f64,
	x_axis_rotation: f64,
	length: f64,
	lookup_table: LookupTable,
}

impl EllipticalArc {
	/// Create an elliptical arc, sampling its approximate length eagerly.
	pub fn new(start: DVec2, end: DVec2, center: DVec2, radii: DVec2, start_angle: f64, sweep_angle: f64, x_axis_rotation: f64) -> Self {
		let evaluate = |t: f64| point_on_ellipse(center, radii, start_angle + sweep_angle * t, x_axis_rotation);
		let lookup_table = LookupTable::from_curve(evaluate, DEFAULT_LUT_SAMPLE_COUNT);
		let length = lookup_table.total_length();
		Self {
			start,
			end,
			center,
			radii,
			start_angle,
			sweep_angle,
			x_axis_rotation,
			length,
			lookup_table,
		}
	}

	pub fn start(&self) -> DVec2 {
		self.start
	}

	pub fn end(&self) -> DVec2 {
		self.end
	}

	pub fn center(&self) -> DVec2 {
		self.center
	}

	pub fn radii(&self) -> DVec2 {
		self.radii
	}

	pub fn start_angle(&self) -> f64 {
		self.start_angle
	}

	pub fn sweep_angle(&self) -> f64 {
		self.sweep_angle
	}

	pub fn x_axis_rotation(&self) -> f64 {
		self.x_axis_rotation
	}

	/// The approximate arc length, accurate to the sampling density.
	pub fn length(&self) -> f64 {
		self.length
	}

	/// Evaluate the point at ellipse angle `theta`: the ellipse-local point
	/// (rx·cos θ, ry·sin θ) rotated by the x-axis rotation and translated to the center.
	pub fn evaluate_angle(&self, theta: f64) -> DVec2 {
		point_on_ellipse(self.center, self.radii, theta, self.x_axis_rotation)
	}

	/// The point `distance` arc-length units along the arc from its start, found by
	/// inverting the sampled length back to a fraction of the angular sweep.
	pub fn position_at(&self, distance: f64) -> DVec2 {
		let sweep_fraction = self.lookup_table.parameter_at_length(distance);
		self.evaluate_angle(self.start_angle + self.sweep_angle * sweep_fraction)
	}
}

fn point_on_ellipse(center: DVec2, radii: DVec2, theta: f64, x_axis_rotation: f64) -> DVec2 {
	let local = DVec2::new(radii.x * theta.cos(), radii.y * theta.sin());
	center + rotate_about_origin(local, x_axis_rotation)
}
