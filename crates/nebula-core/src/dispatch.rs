//! Edge-triggered command dispatch.
//!
//! Consumes classifier output plus the continuous signals and mutates the
//! control state and particle engine. Each discrete action category gates on
//! its own cooldown counter: a gesture held across frames fires exactly once
//! per window. The two-hand camera servo is the one continuous path with no
//! gate at all.

use crate::audio::{note_for, Tone, Waveform};
use crate::constants::*;
use crate::engine::ParticleEngine;
use crate::gesture::{HandGesture, TwoHandGesture};
use crate::palette::PALETTES;
use crate::shapes::Shape;
use crate::state::ControlState;
use rand::Rng;
use smallvec::SmallVec;

/// Fire-and-forget notifications toward the host's collaborators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cue {
    Tone(Tone),
    ShapeChanged { shape: Shape },
}

pub type Cues = SmallVec<[Cue; 4]>;

fn tone(state: &ControlState, cues: &mut Cues, frequency_hz: f32, duration_sec: f32, wf: Waveform) {
    if state.sound {
        cues.push(Cue::Tone(Tone::new(frequency_hz, duration_sec, wf)));
    }
}

/// Cycle the active shape by `delta` and regenerate the target array.
pub fn switch_shape<R: Rng>(
    state: &mut ControlState,
    engine: &mut ParticleEngine,
    rng: &mut R,
    delta: i32,
    cues: &mut Cues,
) {
    let shape = Shape::ALL[state.shape_index % Shape::ALL.len()].cycled(delta);
    state.shape_index = shape.index();
    engine.morph_to(shape, rng, state.rainbow);
    if state.sound {
        cues.push(Cue::Tone(note_for(state.shape_index)));
    }
    cues.push(Cue::ShapeChanged { shape });
    log::info!("shape -> {}", shape.name());
}

/// Two-hand dispatch block. Evaluated before the one-hand block; returns
/// whether it adjusted the expansion factor so the one-hand block can yield
/// that field for the frame.
pub fn dispatch_two_hand(
    state: &mut ControlState,
    gesture: TwoHandGesture,
    index_distance: f32,
    cues: &mut Cues,
) -> bool {
    // The window drains on every frame it is not freshly set, including
    // frames spent in the ungated servo below.
    let gated = state.two_hand_cooldown > 0;
    if gated {
        state.two_hand_cooldown -= 1;
    }
    // Continuous camera servo, never cooldown-gated.
    if gesture == TwoHandGesture::BothPinch {
        let closeness = 1.0 - index_distance.min(1.0);
        let target = CAMERA_Z_MIN + closeness * (CAMERA_Z_MAX - CAMERA_Z_MIN);
        state.camera_z += (target - state.camera_z) * CAMERA_SERVO_ALPHA;
        state.clamp_camera();
        return false;
    }
    if gated {
        return false;
    }
    match gesture {
        TwoHandGesture::BothOpen => {
            state.gravity = !state.gravity;
            tone(state, cues, 600.0, 0.2, Waveform::Sine);
            state.two_hand_cooldown = COOLDOWN_TOGGLE;
        }
        TwoHandGesture::BothPeace => {
            state.mirror = !state.mirror;
            tone(state, cues, 700.0, 0.2, Waveform::Triangle);
            state.two_hand_cooldown = COOLDOWN_TOGGLE;
        }
        TwoHandGesture::Clap => {
            // Cosmetic feedback only, no state change.
            tone(state, cues, 150.0, 0.3, Waveform::Sine);
            state.two_hand_cooldown = COOLDOWN_TOGGLE;
        }
        TwoHandGesture::PushApart => {
            state.adjust_expansion(EXPANSION_STEP_TWO_HAND);
            state.two_hand_cooldown = COOLDOWN_NUDGE;
            return true;
        }
        TwoHandGesture::PullTogether => {
            state.adjust_expansion(-EXPANSION_STEP_TWO_HAND);
            state.two_hand_cooldown = COOLDOWN_NUDGE;
            return true;
        }
        TwoHandGesture::BothPinch | TwoHandGesture::None => {}
    }
    false
}

/// One-hand dispatch block. `expansion_taken` marks that the two-hand block
/// already adjusted the expansion factor this frame.
pub fn dispatch_one_hand<R: Rng>(
    state: &mut ControlState,
    engine: &mut ParticleEngine,
    rng: &mut R,
    gesture: HandGesture,
    expansion_taken: bool,
    cues: &mut Cues,
) {
    if state.gesture_cooldown > 0 {
        state.gesture_cooldown -= 1;
        return;
    }
    match gesture {
        HandGesture::Peace => {
            state.auto_rotate = !state.auto_rotate;
            tone(state, cues, 500.0, 0.15, Waveform::Sine);
            state.gesture_cooldown = COOLDOWN_TOGGLE;
        }
        HandGesture::ThumbsUp => {
            state.palette_index = (state.palette_index + 1) % PALETTES.len();
            engine.randomize_colors(state.palette_index, rng);
            tone(state, cues, 800.0, 0.15, Waveform::Square);
            state.gesture_cooldown = COOLDOWN_TOGGLE;
        }
        HandGesture::ThumbsDown => {
            state.reset_view();
            tone(state, cues, 300.0, 0.2, Waveform::Triangle);
            state.gesture_cooldown = COOLDOWN_TOGGLE;
        }
        HandGesture::PointUp => {
            state.adjust_speed(SPEED_STEP);
            tone(state, cues, 900.0, 0.1, Waveform::Square);
            state.gesture_cooldown = COOLDOWN_SPEED;
        }
        HandGesture::PointDown => {
            state.adjust_speed(-SPEED_STEP);
            tone(state, cues, 300.0, 0.1, Waveform::Square);
            state.gesture_cooldown = COOLDOWN_SPEED;
        }
        HandGesture::Rock => {
            engine.explode(state, rng);
            tone(state, cues, 80.0, 0.5, Waveform::Saw);
            state.gesture_cooldown = COOLDOWN_EXPLOSION;
        }
        HandGesture::Vulcan => {
            state.freeze = !state.freeze;
            tone(state, cues, 400.0, 0.2, Waveform::Triangle);
            state.gesture_cooldown = COOLDOWN_TOGGLE;
        }
        HandGesture::HangLoose => {
            state.wave = !state.wave;
            tone(state, cues, 600.0, 0.2, Waveform::Sine);
            state.gesture_cooldown = COOLDOWN_TOGGLE;
        }
        HandGesture::OkSign => {
            state.vortex = !state.vortex;
            tone(state, cues, 700.0, 0.2, Waveform::Triangle);
            state.gesture_cooldown = COOLDOWN_TOGGLE;
        }
        HandGesture::Fist => {
            if !expansion_taken {
                state.adjust_expansion(-EXPANSION_STEP);
            }
            state.gesture_cooldown = COOLDOWN_NUDGE;
        }
        HandGesture::OpenPalm => {
            if !expansion_taken {
                state.adjust_expansion(EXPANSION_STEP);
            }
            state.gesture_cooldown = COOLDOWN_NUDGE;
        }
        HandGesture::None => {}
    }
}

/// Swipe-driven shape cycling, keyed off the horizontal velocity signal on
/// its own cooldown; may fire on the same frame as a discrete action.
pub fn dispatch_swipe<R: Rng>(
    state: &mut ControlState,
    engine: &mut ParticleEngine,
    rng: &mut R,
    cues: &mut Cues,
) {
    if state.swipe_cooldown > 0 {
        state.swipe_cooldown -= 1;
        return;
    }
    if state.velocity > SWIPE_THRESH {
        switch_shape(state, engine, rng, 1, cues);
        state.swipe_cooldown = COOLDOWN_SWIPE;
    } else if state.velocity < -SWIPE_THRESH {
        switch_shape(state, engine, rng, -1, cues);
        state.swipe_cooldown = COOLDOWN_SWIPE;
    }
}
