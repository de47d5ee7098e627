//! Headless driver: a scripted tracking producer feeding the session through
//! the latest-value slot, with a fixed-rate tick loop standing in for the
//! display refresh. Useful for profiling the integrator and for watching the
//! dispatch log without a renderer attached.

use glam::Vec3;
use nebula_core::constants::DEFAULT_PARTICLE_COUNT;
use nebula_core::{Cue, HandFrame, LatestSlot, Session, TrackingUpdate, LANDMARKS_PER_HAND};
use std::thread;
use std::time::{Duration, Instant};

/// Build a synthetic hand at `center` with the four non-thumb fingers curled
/// or extended. Extended tips sit well above their base joints; curled tips
/// sit below them.
fn pose(center: (f32, f32), extended: [bool; 4]) -> HandFrame {
    let (cx, cy) = center;
    let mut points = [Vec3::new(cx, cy + 0.25, 0.0); LANDMARKS_PER_HAND];
    // wrist
    points[0] = Vec3::new(cx, cy + 0.3, 0.0);
    // thumb base and tip, off to the side, never "extended" vertically
    points[2] = Vec3::new(cx - 0.08, cy + 0.15, 0.0);
    points[4] = Vec3::new(cx - 0.1, cy + 0.1, 0.0);
    let bases = [5usize, 9, 13, 17];
    let tips = [8usize, 12, 16, 20];
    for (f, (&base, &tip)) in bases.iter().zip(tips.iter()).enumerate() {
        let x = cx - 0.03 + f as f32 * 0.02;
        points[base] = Vec3::new(x, cy, 0.0);
        let tip_y = if extended[f] { cy - 0.1 } else { cy + 0.05 };
        points[tip] = Vec3::new(x, tip_y, 0.0);
    }
    HandFrame::new(points)
}

fn fist(center: (f32, f32)) -> HandFrame {
    pose(center, [false; 4])
}

fn open_palm(center: (f32, f32)) -> HandFrame {
    pose(center, [true; 4])
}

fn peace(center: (f32, f32)) -> HandFrame {
    pose(center, [true, true, false, false])
}

fn rock(center: (f32, f32)) -> HandFrame {
    pose(center, [true, false, false, true])
}

/// Scripted tracking stream, one scene per second.
fn scripted_update(elapsed_sec: f32) -> TrackingUpdate {
    match elapsed_sec as u32 {
        0 => TrackingUpdate::one(fist((0.5, 0.5))),
        1 => TrackingUpdate::one(open_palm((0.5, 0.5))),
        2 => TrackingUpdate::one(peace((0.5, 0.5))),
        3 => TrackingUpdate::two(open_palm((0.2, 0.5)), open_palm((0.8, 0.5))),
        4 => TrackingUpdate::one(rock((0.5, 0.5))),
        _ => TrackingUpdate::none(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut session = Session::new(DEFAULT_PARTICLE_COUNT, 42);
    let slot: LatestSlot<TrackingUpdate> = LatestSlot::new();

    // Producer at ~30 Hz, a different cadence than the tick loop below.
    let producer_slot = slot.clone();
    let start = Instant::now();
    let producer = thread::spawn(move || {
        while start.elapsed() < Duration::from_secs(6) {
            producer_slot.publish(scripted_update(start.elapsed().as_secs_f32()));
            thread::sleep(Duration::from_millis(33));
        }
    });

    let mut last = Instant::now();
    let mut ticks = 0u32;
    while start.elapsed() < Duration::from_secs(6) {
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if let Some(update) = slot.take() {
            for cue in session.handle_tracking(&update) {
                match cue {
                    Cue::Tone(tone) => log::info!(
                        "tone {:.0} Hz for {:.2}s ({:?})",
                        tone.frequency_hz,
                        tone.duration_sec,
                        tone.waveform
                    ),
                    Cue::ShapeChanged { shape } => log::info!("shape cue: {}", shape.name()),
                }
            }
        }
        session.tick(dt);
        ticks += 1;

        if ticks % 60 == 0 {
            let snap = session.snapshot();
            log::info!(
                "t={:.1}s shape={} gesture={:?} expansion={:.2} speed={:.2} scale={:.2} cam={:.0}",
                start.elapsed().as_secs_f32(),
                session.current_shape().name(),
                session.state.current_gesture,
                session.state.expansion,
                session.state.speed,
                snap.scale,
                snap.camera_z
            );
        }
        thread::sleep(Duration::from_millis(16));
    }

    producer
        .join()
        .map_err(|_| anyhow::anyhow!("producer thread panicked"))?;
    log::info!("done after {} ticks", ticks);
    Ok(())
}
