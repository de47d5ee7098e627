//! Classifier, dispatch and integrator tuning constants.

// Ensemble sizing
pub const DEFAULT_PARTICLE_COUNT: usize = 18_000;
pub const INITIAL_SCATTER: f32 = 100.0; // diagonal spread at construction

// Camera distance (world units)
pub const CAMERA_Z_DEFAULT: f32 = 50.0;
pub const CAMERA_Z_MIN: f32 = 10.0;
pub const CAMERA_Z_MAX: f32 = 200.0;
pub const CAMERA_SERVO_ALPHA: f32 = 0.1; // both-pinch zoom easing

// Classifier geometry (normalized image units)
pub const FINGER_EXTENDED_MARGIN: f32 = 0.02;
pub const VULCAN_GAP_RATIO: f32 = 1.8; // middle-ring gap vs index-middle gap
pub const THUMB_WRIST_MARGIN: f32 = 0.1;
pub const POINT_UP_MARGIN: f32 = 0.15;
pub const POINT_DOWN_MARGIN: f32 = 0.05;
pub const OK_PINCH_DIST: f32 = 0.04;

// Two-hand thresholds
pub const CLAP_THRESH: f32 = 0.2;
pub const PINCH_THRESH: f32 = 0.07;
pub const PUSH_PULL_THRESH: f32 = 0.04;

// Hand projection from normalized image space to hand-signal space
pub const HAND_PROJECT_X: f32 = -40.0;
pub const HAND_PROJECT_Y: f32 = -30.0;

// Swipe shape cycling
pub const SWIPE_THRESH: f32 = 0.6; // horizontal velocity per tracking frame

// Manual input fallback
pub const POINTER_DRAG_COEFF: f32 = 0.005; // pixels to radians-ish rotation
pub const WHEEL_ZOOM_COEFF: f32 = 0.05;

// Cooldown windows (tracking frames)
pub const COOLDOWN_NUDGE: u32 = 15; // expansion adjustments
pub const COOLDOWN_SPEED: u32 = 20;
pub const COOLDOWN_TOGGLE: u32 = 30;
pub const COOLDOWN_EXPLOSION: u32 = 60;
pub const COOLDOWN_SWIPE: u32 = 20;

// Morph speed (ease input)
pub const SPEED_DEFAULT: f32 = 0.12;
pub const SPEED_MIN: f32 = 0.02;
pub const SPEED_MAX: f32 = 0.3;
pub const SPEED_STEP: f32 = 0.02;
pub const WARP_SPEED_FACTOR: f32 = 3.0;

// Expansion factor (target multiplier)
pub const EXPANSION_DEFAULT: f32 = 1.0;
pub const EXPANSION_MIN: f32 = 0.3;
pub const EXPANSION_MAX: f32 = 3.0;
pub const EXPANSION_STEP: f32 = 0.1; // fist / open palm
pub const EXPANSION_STEP_TWO_HAND: f32 = 0.05; // push apart / pull together

// Motion regimes
pub const VELOCITY_DECAY: f32 = 0.95; // explosion and gravity, per frame
pub const EXPLOSION_KICK: f32 = 3.0; // per-axis velocity range at trigger
pub const EXPLOSION_DURATION_SEC: f32 = 2.5;
pub const GRAVITY_FORCE: f32 = 0.5;
pub const GRAVITY_SOFTENING: f32 = 0.1;
pub const VORTEX_SPEED: f32 = 0.5; // tangential velocity magnitude

// Wave perturbation
pub const WAVE_FRAME_FREQ: f32 = 0.05;
pub const WAVE_PARTICLE_PHASE: f32 = 0.01;
pub const WAVE_AMPLITUDE: f32 = 2.0;

// Rainbow hue cycling
pub const RAINBOW_HUE_PER_FRAME: f32 = 0.0015;
pub const RAINBOW_SATURATION: f32 = 0.9;
pub const RAINBOW_LIGHTNESS: f32 = 0.55;

// Rotation bookkeeping
pub const AUTO_ROTATE_Y: f32 = 0.006;
pub const AUTO_ROTATE_X: f32 = 0.002;
pub const STILLNESS_THRESH: f32 = 0.3; // |velocity| below this tracks the hand
pub const ROT_TARGET_COEFF: f32 = 0.002;
pub const ROT_SMOOTH_ALPHA: f32 = 0.1;

// Scale bookkeeping
pub const PULSATE_FREQ: f32 = 0.05;
pub const PULSATE_AMPLITUDE: f32 = 0.2;
pub const PINCH_SCALE_COEFF: f32 = 10.0;
pub const SCALE_MIN: f32 = 0.5;
pub const SCALE_MAX: f32 = 3.0;
pub const SCALE_SMOOTH_ALPHA: f32 = 0.15;
