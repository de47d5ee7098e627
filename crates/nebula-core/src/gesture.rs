//! Pose classification from raw landmark geometry.
//!
//! Both classifiers are pure functions of a single frame's landmarks. The only
//! piece of history the two-hand path needs (the previous inter-index
//! distance, for the push/pull delta) is passed in and handed back; the
//! control state owns it.

use crate::constants::*;
use crate::landmark::{planar_distance, Finger, HandFrame};

/// Closed one-hand gesture vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandGesture {
    Fist,
    OpenPalm,
    Vulcan,
    Peace,
    ThumbsUp,
    ThumbsDown,
    PointUp,
    PointDown,
    Rock,
    HangLoose,
    OkSign,
    None,
}

impl HandGesture {
    pub fn label(self) -> Option<&'static str> {
        match self {
            HandGesture::Fist => Some("Fist"),
            HandGesture::OpenPalm => Some("Open Palm"),
            HandGesture::Vulcan => Some("Vulcan"),
            HandGesture::Peace => Some("Peace"),
            HandGesture::ThumbsUp => Some("Thumbs Up"),
            HandGesture::ThumbsDown => Some("Thumbs Down"),
            HandGesture::PointUp => Some("Point Up"),
            HandGesture::PointDown => Some("Point Down"),
            HandGesture::Rock => Some("Rock"),
            HandGesture::HangLoose => Some("Hang Loose"),
            HandGesture::OkSign => Some("OK"),
            HandGesture::None => None,
        }
    }
}

/// Closed two-hand gesture vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwoHandGesture {
    Clap,
    BothPeace,
    BothOpen,
    BothPinch,
    PushApart,
    PullTogether,
    None,
}

impl TwoHandGesture {
    pub fn label(self) -> Option<&'static str> {
        match self {
            TwoHandGesture::Clap => Some("Clap"),
            TwoHandGesture::BothPeace => Some("Both Peace"),
            TwoHandGesture::BothOpen => Some("Both Open"),
            TwoHandGesture::BothPinch => Some("Zoom"),
            TwoHandGesture::PushApart => Some("Push Apart"),
            TwoHandGesture::PullTogether => Some("Pull Together"),
            TwoHandGesture::None => None,
        }
    }
}

/// A finger counts as extended when its tip sits above its base joint by the
/// margin. Image y grows downward, so "above" is numerically smaller.
#[inline]
fn extended(hand: &HandFrame, finger: Finger) -> bool {
    hand.tip(finger).y < hand.base(finger).y - FINGER_EXTENDED_MARGIN
}

/// Priority-ordered one-hand decision tree; first match wins.
///
/// Note the fist branch fires before the thumbs branches ever get a look,
/// so a thumbs-up pose (all fingers curled, thumb raised) classifies as
/// `Fist`. That is the observed behavior of the tree and is kept as-is.
pub fn classify_hand(hand: &HandFrame) -> HandGesture {
    let index = extended(hand, Finger::Index);
    let middle = extended(hand, Finger::Middle);
    let ring = extended(hand, Finger::Ring);
    let pinky = extended(hand, Finger::Pinky);
    let thumb_tip = hand.tip(Finger::Thumb);
    let index_tip = hand.tip(Finger::Index);
    let wrist = hand.wrist();

    if !index && !middle && !ring && !pinky {
        return HandGesture::Fist;
    }
    if index && middle && ring && pinky {
        let middle_ring = (hand.tip(Finger::Middle).x - hand.tip(Finger::Ring).x).abs();
        let index_middle = (index_tip.x - hand.tip(Finger::Middle).x).abs();
        if middle_ring > index_middle * VULCAN_GAP_RATIO {
            return HandGesture::Vulcan;
        }
        return HandGesture::OpenPalm;
    }
    if index && middle && !ring && !pinky {
        return HandGesture::Peace;
    }
    if !index && !middle && !ring && !pinky && thumb_tip.y < wrist.y - THUMB_WRIST_MARGIN {
        return HandGesture::ThumbsUp;
    }
    if !index && !middle && !ring && !pinky && thumb_tip.y > wrist.y + THUMB_WRIST_MARGIN {
        return HandGesture::ThumbsDown;
    }
    if index && !middle && !ring && !pinky && index_tip.y < wrist.y - POINT_UP_MARGIN {
        return HandGesture::PointUp;
    }
    if index && !middle && !ring && !pinky && index_tip.y > wrist.y + POINT_DOWN_MARGIN {
        return HandGesture::PointDown;
    }
    if index && !middle && !ring && pinky {
        return HandGesture::Rock;
    }
    if !index && !middle && !ring && pinky {
        return HandGesture::HangLoose;
    }
    if planar_distance(thumb_tip, index_tip) < OK_PINCH_DIST && middle && ring && pinky {
        return HandGesture::OkSign;
    }
    HandGesture::None
}

/// Priority-ordered two-hand classification.
///
/// Returns the gesture and the inter-index-tip distance measured this frame;
/// the caller must store the distance as `prev_index_distance` for the next
/// frame no matter which branch fired.
pub fn classify_two_hands(
    first: &HandFrame,
    second: &HandFrame,
    prev_index_distance: f32,
) -> (TwoHandGesture, f32) {
    let index_distance = planar_distance(first.tip(Finger::Index), second.tip(Finger::Index));
    let delta = index_distance - prev_index_distance;

    if index_distance < CLAP_THRESH {
        return (TwoHandGesture::Clap, index_distance);
    }
    let g1 = classify_hand(first);
    let g2 = classify_hand(second);
    if g1 == HandGesture::Peace && g2 == HandGesture::Peace {
        return (TwoHandGesture::BothPeace, index_distance);
    }
    if g1 == HandGesture::OpenPalm && g2 == HandGesture::OpenPalm {
        return (TwoHandGesture::BothOpen, index_distance);
    }
    if first.pinch_distance() < PINCH_THRESH && second.pinch_distance() < PINCH_THRESH {
        return (TwoHandGesture::BothPinch, index_distance);
    }
    if delta.abs() > PUSH_PULL_THRESH {
        let gesture = if delta > 0.0 {
            TwoHandGesture::PushApart
        } else {
            TwoHandGesture::PullTogether
        };
        return (gesture, index_distance);
    }
    (TwoHandGesture::None, index_distance)
}
