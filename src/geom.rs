use core::f32;
use glam::*;

/// Wraps an angular difference into (-π, π] with at most one 2π correction.
///
/// Bearings produced by `atan2` lie in [-π, π], so a difference of two of
/// them lies in [-2π, 2π] and a single correction is always enough.
pub fn wrap_angle(delta: f32) -> f32 {
	if delta <= -f32::consts::PI {
		delta + f32::consts::TAU
	} else if delta > f32::consts::PI {
		delta - f32::consts::TAU
	} else {
		delta
	}
}

/// Bearing of `point` as seen from `center`, in radians.
pub fn bearing(center: Vec2, point: Vec2) -> f32 {
	(point - center).to_angle()
}

/// Signed angular step from `from` to `to` around `center`, wrapped into
/// (-π, π].
pub fn angle_step(center: Vec2, from: Vec2, to: Vec2) -> f32 {
	wrap_angle(bearing(center, to) - bearing(center, from))
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	const EPSILON: f32 = 1e-5;

	#[test]
	fn test_wrap_angle_identity_inside_range() {
		assert_abs_diff_eq!(wrap_angle(0.0), 0.0);
		assert_abs_diff_eq!(wrap_angle(1.0), 1.0);
		assert_abs_diff_eq!(wrap_angle(-3.0), -3.0);
		assert_abs_diff_eq!(wrap_angle(f32::consts::PI), f32::consts::PI);
	}

	#[test]
	fn test_wrap_angle_corrects_once() {
		assert_abs_diff_eq!(
			wrap_angle(1.5 * f32::consts::PI),
			-0.5 * f32::consts::PI,
			epsilon = EPSILON
		);
		assert_abs_diff_eq!(
			wrap_angle(-1.5 * f32::consts::PI),
			0.5 * f32::consts::PI,
			epsilon = EPSILON
		);
		assert_abs_diff_eq!(wrap_angle(f32::consts::TAU), 0.0, epsilon = EPSILON);
		assert_abs_diff_eq!(wrap_angle(-f32::consts::TAU), 0.0, epsilon = EPSILON);
	}

	#[test]
	fn test_wrap_angle_stays_in_half_open_range() {
		let mut theta = -f32::consts::TAU;
		while theta <= f32::consts::TAU {
			let wrapped = wrap_angle(theta);
			assert!(wrapped > -f32::consts::PI - EPSILON, "{theta} -> {wrapped}");
			assert!(wrapped <= f32::consts::PI, "{theta} -> {wrapped}");
			theta += 0.05;
		}
	}

	#[test]
	fn test_bearing_cardinal_directions() {
		let center = vec2(10.0, 10.0);
		assert_abs_diff_eq!(bearing(center, vec2(20.0, 10.0)), 0.0);
		assert_abs_diff_eq!(
			bearing(center, vec2(10.0, 20.0)),
			f32::consts::FRAC_PI_2,
			epsilon = EPSILON
		);
		assert_abs_diff_eq!(
			bearing(center, vec2(0.0, 10.0)),
			f32::consts::PI,
			epsilon = EPSILON
		);
	}

	#[test]
	fn test_angle_step_across_branch_cut() {
		let center = Vec2::ZERO;
		// Just below and just above the -x axis; the raw bearing difference is
		// close to 2π but the true step is a tiny clockwise rotation.
		let below = vec2(-1.0, -1e-3);
		let above = vec2(-1.0, 1e-3);
		let step = angle_step(center, below, above);
		assert_abs_diff_eq!(step, -2e-3, epsilon = EPSILON);
		assert_abs_diff_eq!(angle_step(center, above, below), -step, epsilon = EPSILON);
	}

	#[test]
	fn test_angle_step_quarter_turn() {
		let center = vec2(500.0, 400.0);
		let step = angle_step(center, vec2(900.0, 400.0), vec2(500.0, 800.0));
		assert_abs_diff_eq!(step, f32::consts::FRAC_PI_2, epsilon = EPSILON);
	}
}
