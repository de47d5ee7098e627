//! Gesture/command state shared by the dispatcher and the particle engine.
//!
//! One explicit value, passed by reference into every classifier, dispatcher
//! and engine call; no ambient globals. The tracking callback writes the
//! hand-derived signals, the render tick writes rotation/scale, and readers
//! always see the most recently written value.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct ControlState {
    // Effect flags
    pub auto_rotate: bool,
    pub gravity: bool,
    pub mirror: bool,
    pub freeze: bool,
    pub trails: bool,
    pub sound: bool,
    pub rainbow: bool,
    pub pulsate: bool,
    pub warp: bool,
    pub wave: bool,
    pub vortex: bool,
    pub explosion: bool,

    // Scalar parameters
    pub speed: f32,
    pub expansion: f32,
    pub camera_z: f32,
    pub shape_index: usize,
    pub palette_index: usize,

    // Hand-derived signals, written by the tracking callback
    pub hand: Vec2,
    pub hand2: Vec2,
    pub hand_count: usize,
    pub velocity: f32,
    pub pinch_dist: f32,
    pub last_hand_x: f32,
    pub last_index_dist: f32,
    pub current_gesture: Option<&'static str>,

    // Rotation/scale bookkeeping, written by the render tick
    pub rotation: Vec2,
    pub smooth_rot: Vec2,
    pub target_rot: Vec2,
    pub scale: f32,

    // Frame counter and explosion countdown
    pub frame: u64,
    pub explosion_remaining_sec: f32,

    // Cooldown counters (tracking frames), one per action category
    pub gesture_cooldown: u32,
    pub two_hand_cooldown: u32,
    pub swipe_cooldown: u32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            auto_rotate: false,
            gravity: false,
            mirror: false,
            freeze: false,
            trails: false,
            sound: true,
            rainbow: false,
            pulsate: false,
            warp: false,
            wave: false,
            vortex: false,
            explosion: false,
            speed: SPEED_DEFAULT,
            expansion: EXPANSION_DEFAULT,
            camera_z: CAMERA_Z_DEFAULT,
            shape_index: 0,
            palette_index: 0,
            hand: Vec2::ZERO,
            hand2: Vec2::ZERO,
            hand_count: 0,
            velocity: 0.0,
            pinch_dist: 0.1,
            last_hand_x: 0.0,
            last_index_dist: 0.0,
            current_gesture: None,
            rotation: Vec2::ZERO,
            smooth_rot: Vec2::ZERO,
            target_rot: Vec2::ZERO,
            scale: 1.0,
            frame: 0,
            explosion_remaining_sec: 0.0,
            gesture_cooldown: 0,
            two_hand_cooldown: 0,
            swipe_cooldown: 0,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore camera, rotation, scale, speed and expansion to defaults.
    pub fn reset_view(&mut self) {
        self.rotation = Vec2::ZERO;
        self.smooth_rot = Vec2::ZERO;
        self.target_rot = Vec2::ZERO;
        self.scale = 1.0;
        self.camera_z = CAMERA_Z_DEFAULT;
        self.speed = SPEED_DEFAULT;
        self.expansion = EXPANSION_DEFAULT;
    }

    /// `reset_view` plus clearing every effect flag.
    pub fn reset_all(&mut self) {
        self.reset_view();
        self.auto_rotate = false;
        self.gravity = false;
        self.mirror = false;
        self.freeze = false;
        self.trails = false;
        self.rainbow = false;
        self.pulsate = false;
        self.warp = false;
        self.wave = false;
        self.vortex = false;
        self.sound = true;
    }

    pub fn adjust_speed(&mut self, delta: f32) {
        self.speed = (self.speed + delta).clamp(SPEED_MIN, SPEED_MAX);
    }

    pub fn adjust_expansion(&mut self, delta: f32) {
        self.expansion = (self.expansion + delta).clamp(EXPANSION_MIN, EXPANSION_MAX);
    }

    pub fn clamp_camera(&mut self) {
        self.camera_z = self.camera_z.clamp(CAMERA_Z_MIN, CAMERA_Z_MAX);
    }
}
