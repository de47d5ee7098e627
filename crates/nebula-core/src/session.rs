//! Session facade tying the control flow together.
//!
//! Tracking updates arrive through `handle_tracking` at the tracker's own
//! cadence; the host's display loop calls `tick` once per refresh and reads
//! `snapshot` afterwards. Both run to completion; neither blocks. Manual
//! input and direct navigation bypass the classifier entirely.

use crate::constants::*;
use crate::dispatch::{self, Cue, Cues};
use crate::engine::{FrameSnapshot, ParticleEngine};
use crate::gesture::{classify_hand, classify_two_hands};
use crate::landmark::{Finger, HandFrame, TrackingUpdate};
use crate::shapes::Shape;
use crate::state::ControlState;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::smallvec;
use std::time::Duration;

pub struct Session {
    pub state: ControlState,
    pub engine: ParticleEngine,
    rng: StdRng,
}

impl Session {
    /// Build a session with `particle_count` particles, already morphing
    /// toward the first shape. All randomized subsystems draw from the seed.
    pub fn new(particle_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = ParticleEngine::new(particle_count, &mut rng);
        let state = ControlState::new();
        engine.morph_to(Shape::Sphere, &mut rng, false);
        log::info!(
            "session up: {} particles, seed {}",
            engine.len(),
            seed
        );
        Self { state, engine, rng }
    }

    /// Project a normalized index-tip position into hand-signal space.
    fn project(tip: glam::Vec3) -> Vec2 {
        Vec2::new(
            (tip.x - 0.5) * HAND_PROJECT_X,
            (tip.y - 0.5) * HAND_PROJECT_Y,
        )
    }

    /// Tracking callback: refresh the hand-derived signals, classify, and
    /// dispatch. Zero hands clears the gesture display and mutates nothing
    /// else. Returns the cues fired this update.
    pub fn handle_tracking(&mut self, update: &TrackingUpdate) -> Cues {
        let mut cues = Cues::new();
        self.state.hand_count = update.hands.len();
        if update.hands.is_empty() {
            self.state.current_gesture = None;
            return cues;
        }

        let hand = &update.hands[0];
        let projected = Self::project(hand.tip(Finger::Index));
        self.state.velocity = projected.x - self.state.last_hand_x;
        self.state.last_hand_x = projected.x;
        self.state.hand = projected;
        self.state.pinch_dist = hand.pinch_distance();

        // Two-hand block first; it wins expansion-factor contention.
        let mut expansion_taken = false;
        if update.hands.len() >= 2 {
            let second = &update.hands[1];
            self.state.hand2 = Self::project(second.tip(Finger::Index));
            let (two, index_distance) =
                classify_two_hands(hand, second, self.state.last_index_dist);
            self.state.last_index_dist = index_distance;
            if let Some(label) = two.label() {
                self.state.current_gesture = Some(label);
            }
            expansion_taken =
                dispatch::dispatch_two_hand(&mut self.state, two, index_distance, &mut cues);
        }

        let gesture = classify_hand(hand);
        if let Some(label) = gesture.label() {
            self.state.current_gesture = Some(label);
        }
        dispatch::dispatch_one_hand(
            &mut self.state,
            &mut self.engine,
            &mut self.rng,
            gesture,
            expansion_taken,
            &mut cues,
        );
        dispatch::dispatch_swipe(&mut self.state, &mut self.engine, &mut self.rng, &mut cues);
        cues
    }

    /// One display tick: advance the particle integrator.
    pub fn tick(&mut self, dt: Duration) {
        self.engine.step(&mut self.state, dt);
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        self.engine.snapshot(&self.state)
    }

    pub fn current_shape(&self) -> Shape {
        Shape::ALL[self.state.shape_index % Shape::ALL.len()]
    }

    // ---- direct navigation (host keyboard/UI bindings) ----

    pub fn cycle_shape(&mut self, delta: i32) -> Cues {
        let mut cues = Cues::new();
        dispatch::switch_shape(
            &mut self.state,
            &mut self.engine,
            &mut self.rng,
            delta,
            &mut cues,
        );
        cues
    }

    pub fn trigger_explosion(&mut self) -> Cues {
        self.engine.explode(&mut self.state, &mut self.rng);
        if self.state.sound {
            return smallvec![Cue::Tone(crate::audio::Tone::new(
                80.0,
                0.5,
                crate::audio::Waveform::Saw
            ))];
        }
        Cues::new()
    }

    pub fn toggle_trails(&mut self) {
        self.state.trails = !self.state.trails;
    }

    pub fn toggle_sound(&mut self) {
        self.state.sound = !self.state.sound;
    }

    pub fn toggle_rainbow(&mut self) {
        self.state.rainbow = !self.state.rainbow;
    }

    pub fn toggle_pulsate(&mut self) {
        self.state.pulsate = !self.state.pulsate;
    }

    pub fn toggle_warp(&mut self) {
        self.state.warp = !self.state.warp;
    }

    pub fn reset_view(&mut self) {
        self.state.reset_view();
    }

    pub fn reset_all(&mut self) {
        self.state.reset_all();
    }

    /// Pointer/touch drag fallback; writes rotation directly, no classifier.
    pub fn pointer_drag(&mut self, dx_px: f32, dy_px: f32) {
        self.state.rotation.y += dx_px * POINTER_DRAG_COEFF;
        self.state.rotation.x += dy_px * POINTER_DRAG_COEFF;
    }

    /// Wheel/pinch-zoom fallback for camera distance.
    pub fn pointer_zoom(&mut self, delta: f32) {
        self.state.camera_z += delta * WHEEL_ZOOM_COEFF;
        self.state.clamp_camera();
    }

    /// Convenience for hosts that receive raw landmark slices.
    pub fn update_from_hands(
        hands: &[&[glam::Vec3]],
    ) -> Result<TrackingUpdate, crate::landmark::LandmarkError> {
        let mut update = TrackingUpdate::none();
        for points in hands.iter().take(2) {
            update.hands.push(HandFrame::from_slice(points)?);
        }
        Ok(update)
    }
}
