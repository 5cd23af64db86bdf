use glam::*;

/// Percentage of points whose distance from `center` stays within
/// `error_radius` of the first point's distance.
///
/// Pure function of the point sequence: it can be recomputed after every new
/// sample without drift, and an empty stroke scores 0 rather than dividing by
/// zero. Near-target points count as misses here; the two-radii band exists
/// only for visual feedback.
pub fn accuracy(points: &[Vec2], center: Vec2, error_radius: f32) -> f32 {
	let Some(first) = points.first() else {
		return 0.0;
	};
	let reference = first.distance(center);
	let on_target = points
		.iter()
		.filter(|point| (point.distance(center) - reference).abs() <= error_radius)
		.count();
	100.0 * on_target as f32 / points.len() as f32
}

/// Process-lifetime high-water mark for completed-stroke accuracy.
///
/// Only completed strokes may commit, so a short arc with a flattering
/// partial percentage can never inflate the best score.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreBoard {
	best: f32,
}

impl ScoreBoard {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn best(&self) -> f32 {
		self.best
	}

	/// Raises the best score iff `percentage` strictly beats it. Returns
	/// whether a new best was recorded.
	pub fn commit_if_best(&mut self, percentage: f32) -> bool {
		if percentage > self.best {
			tracing::info!(percentage, previous = self.best, "new best score");
			self.best = percentage;
			true
		} else {
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	const CENTER: Vec2 = vec2(500.0, 400.0);

	fn ring_points(radii: &[f32]) -> Vec<Vec2> {
		radii
			.iter()
			.enumerate()
			.map(|(i, &radius)| CENTER + radius * Vec2::from_angle(0.3 * i as f32))
			.collect()
	}

	#[test]
	fn test_empty_stroke_scores_zero() {
		assert_eq!(accuracy(&[], CENTER, 10.0), 0.0);
	}

	#[test]
	fn test_uniform_radius_scores_full() {
		let points = ring_points(&[400.0; 5]);
		assert_abs_diff_eq!(accuracy(&points, CENTER, 10.0), 100.0);
	}

	#[test]
	fn test_one_outlier_of_five() {
		// Δ = 30 > 2 × error radius, so the third point misses.
		let points = ring_points(&[400.0, 400.0, 430.0, 400.0, 400.0]);
		assert_abs_diff_eq!(accuracy(&points, CENTER, 10.0), 80.0);
	}

	#[test]
	fn test_near_target_counts_as_miss() {
		// Offset 15 is inside the near-target feedback band but outside the
		// scoring band.
		let points = ring_points(&[400.0, 415.0]);
		assert_abs_diff_eq!(accuracy(&points, CENTER, 10.0), 50.0);
	}

	#[test]
	fn test_recompute_is_idempotent() {
		let points = ring_points(&[400.0, 403.0, 427.0, 396.0]);
		let first = accuracy(&points, CENTER, 10.0);
		let second = accuracy(&points, CENTER, 10.0);
		assert_eq!(first, second);
	}

	#[test]
	fn test_best_is_monotone_maximum() {
		let mut board = ScoreBoard::new();
		assert_eq!(board.best(), 0.0);

		assert!(board.commit_if_best(60.0));
		assert!(!board.commit_if_best(40.0));
		assert!(board.commit_if_best(85.0));
		assert!(!board.commit_if_best(85.0));
		assert_eq!(board.best(), 85.0);
	}
}
