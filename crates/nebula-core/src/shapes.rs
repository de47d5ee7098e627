//! Procedural shape target library.
//!
//! Each shape maps a particle index to a target position plus a base color.
//! Most shapes sample their geometric envelope through the supplied RNG, so a
//! re-morph to the same shape re-randomizes the distribution; the helix and
//! tornado are index-deterministic by design. Seeding is the caller's choice,
//! which lets tests pin the sampling.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Sphere,
    Heart,
    Cube,
    Galaxy,
    Helix,
    TorusKnot,
    Star,
    Tornado,
}

impl Shape {
    pub const ALL: [Shape; 8] = [
        Shape::Sphere,
        Shape::Heart,
        Shape::Cube,
        Shape::Galaxy,
        Shape::Helix,
        Shape::TorusKnot,
        Shape::Star,
        Shape::Tornado,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Sphere => "sphere",
            Shape::Heart => "heart",
            Shape::Cube => "cube",
            Shape::Galaxy => "galaxy",
            Shape::Helix => "helix",
            Shape::TorusKnot => "torus knot",
            Shape::Star => "star",
            Shape::Tornado => "tornado",
        }
    }

    pub fn index(self) -> usize {
        Shape::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The shape `delta` steps away in the cycle order, wrapping both ways.
    pub fn cycled(self, delta: i32) -> Shape {
        let len = Shape::ALL.len() as i32;
        let next = (self.index() as i32 + delta).rem_euclid(len);
        Shape::ALL[next as usize]
    }

    /// Target position and base color for particle `index` of `count`.
    pub fn target<R: Rng>(self, rng: &mut R, index: usize, count: usize) -> (Vec3, Vec3) {
        let frac = index as f32 / count as f32;
        match self {
            Shape::Sphere => {
                let r = 12.0;
                let theta = rng.gen::<f32>() * PI * 2.0;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
                let pos = Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                );
                (pos, Vec3::new(0.05, 0.85, 0.95))
            }
            Shape::Heart => {
                let t = rng.gen::<f32>() * PI * 2.0;
                let s = 0.8;
                let x = 16.0 * t.sin().powi(3) * s;
                let y = (13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos())
                    * s;
                let z = (rng.gen::<f32>() - 0.5) * 6.0;
                (Vec3::new(x, y, z), Vec3::new(1.0, 0.15, 0.35))
            }
            Shape::Cube => {
                let face = rng.gen_range(0..6);
                let u = (rng.gen::<f32>() - 0.5) * 20.0;
                let v = (rng.gen::<f32>() - 0.5) * 20.0;
                let pos = match face {
                    0 => Vec3::new(10.0, u, v),
                    1 => Vec3::new(-10.0, u, v),
                    2 => Vec3::new(u, 10.0, v),
                    3 => Vec3::new(u, -10.0, v),
                    4 => Vec3::new(u, v, 10.0),
                    _ => Vec3::new(u, v, -10.0),
                };
                (pos, Vec3::new(0.2, 0.95, 0.85))
            }
            Shape::Galaxy => {
                let arm = rng.gen_range(0..4) as f32;
                let t = rng.gen::<f32>() * PI * 5.0;
                let r = t * 2.0;
                let a = (arm / 4.0) * PI * 2.0;
                let pos = Vec3::new(
                    r * (t + a).cos(),
                    (rng.gen::<f32>() - 0.5) * 2.5,
                    r * (t + a).sin(),
                );
                (pos, Vec3::new(0.85, 0.6, 1.0))
            }
            Shape::Helix => {
                let t = frac * PI * 8.0;
                let r = 6.0;
                let strand = index % 2;
                let phase = strand as f32 * PI;
                let pos = Vec3::new(r * (t + phase).cos(), (frac - 0.5) * 35.0, r * (t + phase).sin());
                let color = if strand == 1 {
                    Vec3::new(1.0, 0.3, 0.15)
                } else {
                    Vec3::new(0.1, 0.3, 1.0)
                };
                (pos, color)
            }
            Shape::TorusKnot => {
                let t = rng.gen::<f32>() * PI * 4.0;
                let (p, q) = (2.0, 3.0);
                let (r, tube) = (8.0, 3.0);
                let cx = (r + tube * (q * t).cos()) * (p * t).cos();
                let cy = (r + tube * (q * t).cos()) * (p * t).sin();
                let cz = tube * (q * t).sin();
                (Vec3::new(cx, cy, cz) * 0.8, Vec3::new(0.95, 0.45, 0.9))
            }
            Shape::Star => {
                let theta = rng.gen::<f32>() * PI * 2.0;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
                let spike = (theta * 2.5).sin().abs() * 8.0 + 4.0;
                let r = spike * (0.8 + rng.gen::<f32>() * 0.2);
                let pos = Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                );
                (pos, Vec3::new(1.0, 0.85, 0.15))
            }
            Shape::Tornado => {
                let t = frac * PI * 6.0;
                let h = (frac - 0.5) * 30.0;
                let r = h.abs() * 0.5 + 1.0;
                let pos = Vec3::new(r * (t * 3.0).cos(), h, r * (t * 3.0).sin());
                (pos, Vec3::new(0.4, 0.9, 0.95))
            }
        }
    }
}
