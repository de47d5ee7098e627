//! Hand-landmark model at the tracking boundary.
//!
//! A tracking collaborator delivers up to two hands per update, each as 21
//! normalized image-space points (x/y in [0, 1], y increasing downward, with
//! implied depth in z). The core never retains landmarks beyond the update
//! that carried them.

use glam::Vec3;
use smallvec::SmallVec;
use thiserror::Error;

/// Number of landmarks per tracked hand.
pub const LANDMARKS_PER_HAND: usize = 21;

/// Landmark index of the wrist.
pub const WRIST: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Fingertip landmark index.
    pub const fn tip_index(self) -> usize {
        match self {
            Finger::Thumb => 4,
            Finger::Index => 8,
            Finger::Middle => 12,
            Finger::Ring => 16,
            Finger::Pinky => 20,
        }
    }

    /// Base-joint (MCP) landmark index. The thumb has no MCP in the sense the
    /// classifier uses; extension checks only apply to the other four.
    pub const fn base_index(self) -> usize {
        match self {
            Finger::Thumb => 2,
            Finger::Index => 5,
            Finger::Middle => 9,
            Finger::Ring => 13,
            Finger::Pinky => 17,
        }
    }
}

#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error("expected {LANDMARKS_PER_HAND} landmarks per hand, got {0}")]
    WrongPointCount(usize),
}

/// One frame's landmark set for a single hand.
#[derive(Clone, Debug)]
pub struct HandFrame {
    points: [Vec3; LANDMARKS_PER_HAND],
}

impl HandFrame {
    pub fn new(points: [Vec3; LANDMARKS_PER_HAND]) -> Self {
        Self { points }
    }

    pub fn from_slice(points: &[Vec3]) -> Result<Self, LandmarkError> {
        let arr: [Vec3; LANDMARKS_PER_HAND] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongPointCount(points.len()))?;
        Ok(Self::new(arr))
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    #[inline]
    pub fn wrist(&self) -> Vec3 {
        self.points[WRIST]
    }

    #[inline]
    pub fn tip(&self, finger: Finger) -> Vec3 {
        self.points[finger.tip_index()]
    }

    #[inline]
    pub fn base(&self, finger: Finger) -> Vec3 {
        self.points[finger.base_index()]
    }

    /// Thumb-tip to index-tip distance in the image plane (the pinch signal).
    #[inline]
    pub fn pinch_distance(&self) -> f32 {
        planar_distance(self.tip(Finger::Thumb), self.tip(Finger::Index))
    }
}

/// Distance ignoring the implied-depth z component; classifier thresholds are
/// defined in the 2D image plane.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// One tracking update: zero, one, or two hands. Zero hands is a valid
/// "no signal" state, not an error.
#[derive(Clone, Debug, Default)]
pub struct TrackingUpdate {
    pub hands: SmallVec<[HandFrame; 2]>,
}

impl TrackingUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn one(hand: HandFrame) -> Self {
        let mut hands = SmallVec::new();
        hands.push(hand);
        Self { hands }
    }

    pub fn two(first: HandFrame, second: HandFrame) -> Self {
        let mut hands = SmallVec::new();
        hands.push(first);
        hands.push(second);
        Self { hands }
    }
}
