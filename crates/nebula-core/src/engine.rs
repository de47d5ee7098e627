//! Particle morph/physics engine.
//!
//! Owns the four parallel per-particle arrays and the per-tick integrator.
//! The per-particle body depends only on global scalar state and the
//! particle's own entries, so the loop is a data-parallel map over indices;
//! the sequential loop here can be swapped for a parallel one without
//! changing the contract.

use crate::constants::*;
use crate::palette::{hsl_to_rgb, PALETTES};
use crate::shapes::Shape;
use crate::state::ControlState;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::time::Duration;

pub struct ParticleEngine {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    targets: Vec<Vec3>,
    colors: Vec<Vec3>,
}

/// Per-tick view handed to the renderer: flat float arrays plus the scalar
/// transform values. The renderer never mutates these.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub positions: &'a [f32],
    pub colors: &'a [f32],
    pub rotation: Vec2,
    pub scale: f32,
    pub camera_z: f32,
}

impl ParticleEngine {
    /// Build an ensemble of `count` particles scattered along the diagonal,
    /// targets coincident with positions, at rest, colored white.
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            let v = (rng.gen::<f32>() - 0.5) * INITIAL_SCATTER;
            positions.push(Vec3::splat(v));
        }
        let targets = positions.clone();
        Self {
            positions,
            velocities: vec![Vec3::ZERO; count],
            targets,
            colors: vec![Vec3::ONE; count],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn snapshot<'a>(&'a self, state: &ControlState) -> FrameSnapshot<'a> {
        FrameSnapshot {
            positions: bytemuck::cast_slice(&self.positions),
            colors: bytemuck::cast_slice(&self.colors),
            rotation: state.rotation,
            scale: state.scale,
            camera_z: state.camera_z,
        }
    }

    /// Synchronously regenerate the full target array for `shape`. Colors are
    /// rewritten from the shape's base colors unless the rainbow modifier
    /// currently owns them; positions are left to ease over later ticks.
    pub fn morph_to<R: Rng>(&mut self, shape: Shape, rng: &mut R, rainbow: bool) {
        let count = self.targets.len();
        for i in 0..count {
            let (target, color) = shape.target(rng, i, count);
            self.targets[i] = target;
            if !rainbow {
                self.colors[i] = color;
            }
        }
        log::debug!("morphed {} particles to {}", count, shape.name());
    }

    /// Kick every particle with a random velocity and start the explosion
    /// countdown on the state.
    pub fn explode<R: Rng>(&mut self, state: &mut ControlState, rng: &mut R) {
        for v in &mut self.velocities {
            *v = Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * EXPLOSION_KICK,
                (rng.gen::<f32>() - 0.5) * 2.0 * EXPLOSION_KICK,
                (rng.gen::<f32>() - 0.5) * 2.0 * EXPLOSION_KICK,
            );
        }
        state.explosion = true;
        state.explosion_remaining_sec = EXPLOSION_DURATION_SEC;
    }

    /// Recolor the ensemble from palette slot `palette_index`: a random triple
    /// from the palette with brightness jitter, or a free random hue for the
    /// unset slot.
    pub fn randomize_colors<R: Rng>(&mut self, palette_index: usize, rng: &mut R) {
        let palette = PALETTES[palette_index % PALETTES.len()];
        for c in &mut self.colors {
            match palette {
                Some(triples) => {
                    let pick = triples[rng.gen_range(0..triples.len())];
                    let v = 0.8 + rng.gen::<f32>() * 0.2;
                    *c = Vec3::from(pick) * v;
                }
                None => {
                    *c = hsl_to_rgb(rng.gen::<f32>(), 1.0, 0.55);
                }
            }
        }
    }

    /// One integrator tick. Regime priority: explosion > gravity with a
    /// tracked hand > vortex > default morph (± wave), then the per-frame
    /// post-modifiers, then rotation/scale bookkeeping. Freeze suppresses
    /// everything except the explosion countdown.
    pub fn step(&mut self, state: &mut ControlState, dt: Duration) {
        state.frame = state.frame.wrapping_add(1);

        if state.explosion {
            state.explosion_remaining_sec -= dt.as_secs_f32();
            if state.explosion_remaining_sec <= 0.0 {
                state.explosion = false;
                state.explosion_remaining_sec = 0.0;
            }
        }
        if state.freeze {
            return;
        }

        let speed = if state.warp {
            state.speed * WARP_SPEED_FACTOR
        } else {
            state.speed
        };
        let ease = 1.0 - (1.0 - speed).powi(2);
        for i in 0..self.positions.len() {
            self.step_particle(i, state, ease);
        }

        // Rotation: constant increments under auto-rotate, otherwise follow a
        // still hand through exponential smoothing.
        if state.auto_rotate {
            state.rotation.y += AUTO_ROTATE_Y;
            state.rotation.x += AUTO_ROTATE_X;
        } else if state.hand_count > 0 && state.velocity.abs() < STILLNESS_THRESH {
            state.target_rot.y = state.hand.x * ROT_TARGET_COEFF;
            state.target_rot.x = -state.hand.y * ROT_TARGET_COEFF;
            state.smooth_rot += (state.target_rot - state.smooth_rot) * ROT_SMOOTH_ALPHA;
            state.rotation += state.smooth_rot;
        }

        // Scale: pulsate sinusoid wins, else ease toward the pinch-derived
        // target while a hand is tracked.
        if state.pulsate {
            state.scale = 1.0 + (state.frame as f32 * PULSATE_FREQ).sin() * PULSATE_AMPLITUDE;
        } else if state.hand_count > 0 {
            let target = (state.pinch_dist * PINCH_SCALE_COEFF).clamp(SCALE_MIN, SCALE_MAX);
            state.scale += (target - state.scale) * SCALE_SMOOTH_ALPHA;
        }
    }

    fn step_particle(&mut self, i: usize, state: &ControlState, ease: f32) {
        let count = self.positions.len() as f32;
        if state.explosion {
            self.positions[i] += self.velocities[i];
            self.velocities[i] *= VELOCITY_DECAY;
        } else if state.gravity && state.hand_count > 0 {
            let d = state.hand - Vec2::new(self.positions[i].x, self.positions[i].y);
            let dist = d.length() + GRAVITY_SOFTENING;
            let force = GRAVITY_FORCE / (dist * dist);
            self.velocities[i].x += d.x * force;
            self.velocities[i].y += d.y * force;
            self.positions[i].x += self.velocities[i].x;
            self.positions[i].y += self.velocities[i].y;
            self.velocities[i].x *= VELOCITY_DECAY;
            self.velocities[i].y *= VELOCITY_DECAY;
        } else if state.vortex {
            let angle = self.positions[i].y.atan2(self.positions[i].x);
            self.velocities[i].x = -angle.sin() * VORTEX_SPEED;
            self.velocities[i].y = angle.cos() * VORTEX_SPEED;
            self.positions[i].x += self.velocities[i].x;
            self.positions[i].y += self.velocities[i].y;
        } else {
            let scaled = self.targets[i] * state.expansion;
            let step = (scaled - self.positions[i]) * ease;
            self.positions[i] += step;
            if state.wave {
                self.positions[i].y += (state.frame as f32 * WAVE_FRAME_FREQ
                    + i as f32 * WAVE_PARTICLE_PHASE)
                    .sin()
                    * WAVE_AMPLITUDE;
            }
        }
        // Mirror flips x every frame, so toggling it off leaves particles on
        // the mirrored trajectory. Intentionally kept.
        if state.mirror {
            self.positions[i].x = -self.positions[i].x;
        }
        if state.rainbow {
            let hue =
                (state.frame as f32 * RAINBOW_HUE_PER_FRAME + i as f32 / count).rem_euclid(1.0);
            self.colors[i] = hsl_to_rgb(hue, RAINBOW_SATURATION, RAINBOW_LIGHTNESS);
        }
    }
}
