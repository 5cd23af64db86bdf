use glam::*;
use itertools::Itertools;

use rondo::config::GameConfig;
use rondo::{PointerEvent, Session};

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)?;
	Ok(())
}

/// Replays a hand-drawn-looking loop through the session: samples around the
/// center at a jittered radius, one sample every 16 ms.
fn replay_jittered_circle(session: &mut Session, start_ms: u64, radius: f32, jitter: f32) {
	let center = session.config().center;
	let samples = 64;
	let points = (0..=samples)
		.map(|i| {
			let theta = std::f32::consts::TAU * i as f32 / samples as f32;
			let r = radius + jitter * (2.0 * fastrand::f32() - 1.0);
			center + r * Vec2::from_angle(theta)
		})
		.collect::<Vec<_>>();
	let path_length: f32 = points
		.iter()
		.tuple_windows()
		.map(|(a, b)| a.distance(*b))
		.sum();
	tracing::debug!(samples, path_length, "replaying synthetic stroke");

	session.handle(PointerEvent::Down { at_ms: start_ms });
	for (i, point) in points.iter().enumerate() {
		let at_ms = start_ms + 16 * (i as u64 + 1);
		session.handle(PointerEvent::Tick { at_ms });
		session.handle(PointerEvent::Move {
			position: *point,
			at_ms,
		});
	}
	session.handle(PointerEvent::Up);
}

fn main() -> anyhow::Result<()> {
	configure_tracing()?;
	fastrand::seed(0x2c1e);

	let mut session = Session::new(GameConfig::default())?;
	for (attempt, jitter) in [25.0, 12.0, 4.0].into_iter().enumerate() {
		replay_jittered_circle(&mut session, 10_000 * attempt as u64, 300.0, jitter);
		let snapshot = session.snapshot();
		tracing::info!(
			attempt,
			jitter,
			accuracy = snapshot.current_pct,
			best = snapshot.best_pct,
			complete = snapshot.angle_complete,
		);
	}
	Ok(())
}
