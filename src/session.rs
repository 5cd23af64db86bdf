use glam::*;

use crate::config::{ConfigError, GameConfig};
use crate::engine::{accuracy, GestureTracker, Proximity, SampleFate, ScoreBoard};

/// One entry in the input queue. Timestamps are non-decreasing milliseconds
/// since an arbitrary epoch; `Tick` exists so timeout detection is driven by
/// an injected clock rather than polling the wall clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down { at_ms: u64 },
	Move { position: Vec2, at_ms: u64 },
	Up,
	Tick { at_ms: u64 },
}

/// Read-only view handed to the renderer after each event. The renderer maps
/// proximities to colors and draws; it has no scoring authority.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
	pub points: &'a [Vec2],
	pub segments: &'a [Proximity],
	pub current_pct: f32,
	pub best_pct: f32,
	pub is_drawing: bool,
	pub too_close: bool,
	pub timed_out: bool,
	pub angle_complete: bool,
}

/// Single-threaded dispatcher tying the tracker and score board together.
///
/// Consumes one ordered event stream; at most one stroke is active at a time
/// and a pointer-down during an active stroke simply restarts it.
#[derive(Clone, Debug)]
pub struct Session {
	tracker: GestureTracker,
	scores: ScoreBoard,
	current_pct: f32,
}

impl Session {
	pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			tracker: GestureTracker::new(config),
			scores: ScoreBoard::new(),
			current_pct: 0.0,
		})
	}

	pub fn config(&self) -> &GameConfig {
		self.tracker.config()
	}

	pub fn handle(&mut self, event: PointerEvent) {
		match event {
			PointerEvent::Down { at_ms } => {
				self.tracker.begin_stroke(at_ms);
				self.recompute();
			}
			PointerEvent::Move { position, at_ms } => {
				if self.tracker.check_timeout(at_ms) {
					self.recompute();
					return;
				}
				if let SampleFate::Accepted(_) = self.tracker.pointer_move(position) {
					self.recompute();
				}
			}
			PointerEvent::Up => {
				let complete = self.tracker.end_stroke();
				if complete {
					tracing::info!(percentage = self.current_pct, "full loop drawn");
					self.scores.commit_if_best(self.current_pct);
				}
			}
			PointerEvent::Tick { at_ms } => {
				if self.tracker.check_timeout(at_ms) {
					self.recompute();
				}
			}
		}
	}

	pub fn snapshot(&self) -> Snapshot<'_> {
		Snapshot {
			points: self.tracker.points(),
			segments: self.tracker.segments(),
			current_pct: self.current_pct,
			best_pct: self.scores.best(),
			is_drawing: self.tracker.is_drawing(),
			too_close: self.tracker.too_close(),
			timed_out: self.tracker.timed_out(),
			angle_complete: self.tracker.angle_complete(),
		}
	}

	fn recompute(&mut self) {
		let config = self.tracker.config();
		self.current_pct = accuracy(self.tracker.points(), config.center, config.error_radius);
	}
}
