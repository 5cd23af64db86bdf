use glam::*;

use crate::config::{GameConfig, COMPLETION_ANGLE};
use crate::geom::angle_step;

/// How close a sample's distance-from-center is to the stroke's reference
/// radius. The reference is the first accepted point's distance, so the game
/// scores self-consistency rather than closeness to any canonical radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Proximity {
	/// Within one error radius of the reference.
	OnTarget,
	/// Within two error radii. Feedback-only; never counts toward accuracy.
	NearTarget,
	OffTarget,
}

impl Proximity {
	fn of(offset: f32, error_radius: f32) -> Self {
		if offset <= error_radius {
			Proximity::OnTarget
		} else if offset <= 2.0 * error_radius {
			Proximity::NearTarget
		} else {
			Proximity::OffTarget
		}
	}
}

/// What became of one pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleFate {
	/// Appended to the stroke and classified.
	Accepted(Proximity),
	/// Inside the exclusion zone; the too-close flag is now set.
	TooClose,
	/// In the dead zone between exclusion and accept radius; dropped.
	DeadZone,
	/// Non-finite coordinates; dropped.
	Rejected,
	/// No stroke is active (or it already timed out).
	Ignored,
}

/// Converts a stream of pointer samples into a validated, classified stroke.
///
/// Holds the state of at most one in-progress gesture. A new stroke resets
/// everything; a timeout force-clears it. Angle accumulates as the absolute
/// value of each wrapped per-step bearing difference, so reversals cannot
/// cancel earlier progress.
#[derive(Clone, Debug)]
pub struct GestureTracker {
	config: GameConfig,
	points: Vec<Vec2>,
	segments: Vec<Proximity>,
	total_angle: f32,
	last_point: Option<Vec2>,
	too_close: bool,
	timed_out: bool,
	started_at: Option<u64>,
	drawing: bool,
}

impl GestureTracker {
	pub fn new(config: GameConfig) -> Self {
		Self {
			config,
			points: Vec::new(),
			segments: Vec::new(),
			total_angle: 0.0,
			last_point: None,
			too_close: false,
			timed_out: false,
			started_at: None,
			drawing: false,
		}
	}

	pub fn config(&self) -> &GameConfig {
		&self.config
	}

	/// Accepted samples of the current stroke, in temporal order.
	pub fn points(&self) -> &[Vec2] {
		&self.points
	}

	/// One classification per consecutive point pair, aligned by index.
	pub fn segments(&self) -> &[Proximity] {
		&self.segments
	}

	pub fn total_angle(&self) -> f32 {
		self.total_angle
	}

	/// Distance from center to the stroke's first accepted point.
	pub fn reference_radius(&self) -> Option<f32> {
		self
			.points
			.first()
			.map(|point| point.distance(self.config.center))
	}

	pub fn is_drawing(&self) -> bool {
		self.drawing
	}

	pub fn too_close(&self) -> bool {
		self.too_close
	}

	pub fn timed_out(&self) -> bool {
		self.timed_out
	}

	pub fn angle_complete(&self) -> bool {
		self.total_angle >= COMPLETION_ANGLE
	}

	// Stroke geometry resets together; used by stroke start and timeout.
	// The too-close and timed-out flags outlive a stroke so the renderer can
	// keep showing feedback, and reset only at the next stroke start.
	fn clear(&mut self) {
		self.points.clear();
		self.segments.clear();
		self.total_angle = 0.0;
		self.last_point = None;
		self.started_at = None;
		self.drawing = false;
	}

	pub fn begin_stroke(&mut self, now_ms: u64) {
		self.clear();
		self.too_close = false;
		self.timed_out = false;
		self.started_at = Some(now_ms);
		self.drawing = true;
		tracing::debug!(now_ms, "stroke started");
	}

	/// Feeds one pointer sample. Only accepted samples grow the stroke or the
	/// traversed angle; everything else is filtered by policy, never an error.
	pub fn pointer_move(&mut self, position: Vec2) -> SampleFate {
		if !self.drawing || self.timed_out {
			return SampleFate::Ignored;
		}
		if !position.is_finite() {
			tracing::trace!(?position, "dropped non-finite sample");
			return SampleFate::Rejected;
		}

		let distance = position.distance(self.config.center);
		if distance <= self.config.exclusion_radius() {
			self.too_close = true;
			return SampleFate::TooClose;
		}
		if distance <= self.config.accept_radius() {
			return SampleFate::DeadZone;
		}

		let proximity = self.classify(distance);
		self.points.push(position);
		if let Some(last_point) = self.last_point {
			self.segments.push(proximity);
			self.total_angle += angle_step(self.config.center, last_point, position).abs();
		}
		self.last_point = Some(position);
		debug_assert_eq!(self.segments.len(), self.points.len() - 1);

		SampleFate::Accepted(proximity)
	}

	/// Marks the stroke inactive and reports whether enough angle was
	/// traversed to count as a full loop.
	pub fn end_stroke(&mut self) -> bool {
		self.drawing = false;
		let complete = self.angle_complete();
		tracing::debug!(
			complete,
			total_angle = self.total_angle,
			points = self.points.len(),
			"stroke ended"
		);
		complete
	}

	/// Aborts the stroke if it has been active longer than the time limit.
	/// Elapsed time saturates at zero, so a stale timestamp never reports a
	/// negative duration.
	pub fn check_timeout(&mut self, now_ms: u64) -> bool {
		let Some(started_at) = self.started_at else {
			return false;
		};
		if !self.drawing {
			return false;
		}
		if now_ms.saturating_sub(started_at) > self.config.time_limit_ms {
			self.clear();
			self.timed_out = true;
			tracing::debug!(now_ms, started_at, "stroke timed out");
			return true;
		}
		false
	}

	fn classify(&self, distance: f32) -> Proximity {
		// The first accepted point defines the reference, so it is on target
		// by construction.
		let reference = self.reference_radius().unwrap_or(distance);
		Proximity::of((distance - reference).abs(), self.config.error_radius)
	}
}
