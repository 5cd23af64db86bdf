use core::f32;
use glam::*;

/// Multiplier taking the exclusion radius to the accept radius. Samples whose
/// distance from center falls between the two are dropped outright so tiny
/// loops hugging the center never count as progress.
pub const ACCEPT_RADIUS_FACTOR: f32 = 10.0;

/// A stroke counts as a full loop once it has traversed three quarters of a
/// revolution. This tolerates an open gap between the stroke's ends without
/// accepting short arcs.
pub const COMPLETION_ANGLE: f32 = 1.5 * f32::consts::PI;

pub const DEFAULT_CENTER: Vec2 = vec2(500.0, 400.0);
pub const DEFAULT_ERROR_RADIUS: f32 = 10.0;
pub const DEFAULT_TIME_LIMIT_MS: u64 = 5000;

#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("error radius must be finite and positive, got {0}")]
	InvalidErrorRadius(f32),
	#[error("center must have finite coordinates, got {0}")]
	InvalidCenter(Vec2),
	#[error("stroke time limit must be nonzero")]
	ZeroTimeLimit,
}
static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Fixed tunables for one play session.
///
/// The exclusion radius equals the error radius and the accept radius is a
/// fixed multiple of it, so the error radius is the only length tunable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
	/// Geometric center of the play area, in screen pixels.
	pub center: Vec2,
	/// Half-width of the "on target" band around the reference radius.
	pub error_radius: f32,
	/// Hard wall-clock limit for one stroke.
	pub time_limit_ms: u64,
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			center: DEFAULT_CENTER,
			error_radius: DEFAULT_ERROR_RADIUS,
			time_limit_ms: DEFAULT_TIME_LIMIT_MS,
		}
	}
}

impl GameConfig {
	/// Samples at most this far from center are "too close" and never
	/// accepted.
	pub fn exclusion_radius(&self) -> f32 {
		self.error_radius
	}

	/// Samples must be strictly farther than this from center to be accepted.
	pub fn accept_radius(&self) -> f32 {
		ACCEPT_RADIUS_FACTOR * self.error_radius
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if !(self.error_radius.is_finite() && self.error_radius > 0.0) {
			return Err(ConfigError::InvalidErrorRadius(self.error_radius));
		}
		if !self.center.is_finite() {
			return Err(ConfigError::InvalidCenter(self.center));
		}
		if self.time_limit_ms == 0 {
			return Err(ConfigError::ZeroTimeLimit);
		}
		Ok(())
	}
}
