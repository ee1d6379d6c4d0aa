use glam::{BVec2, DVec2};

/// Rotate `point` about the origin by `angle` radians.
/// Rotation is always about the origin; callers needing a different pivot translate into that frame first.
pub fn rotate_about_origin(point: DVec2, angle: f64) -> DVec2 {
	DVec2::from_angle(angle).rotate(point)
}

/// Return the point `distance` units away from `origin` in the direction of `angle` radians.
pub fn position_offset(origin: DVec2, angle: f64, distance: f64) -> DVec2 {
	origin + distance * DVec2::from_angle(angle)
}

/// Return the angle in radians of the ray pointing from `from` to `to`.
pub fn angle_between_points(from: DVec2, to: DVec2) -> f64 {
	(to - from).to_angle()
}

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(f1: f64, f2: f64, max_abs_diff: f64) -> bool {
	(f1 - f2).abs() < max_abs_diff
}

/// Compare the two values in a `DVec2` independently with a provided max absolute value difference.
pub fn dvec2_compare(dv1: DVec2, dv2: DVec2, max_abs_diff: f64) -> BVec2 {
	BVec2::new((dv1.x - dv2.x).abs() < max_abs_diff, (dv1.y - dv2.y).abs() < max_abs_diff)
}
