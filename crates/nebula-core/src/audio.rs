//! Audio cue values emitted toward the host's tone generator.
//!
//! Cues are fire-and-forget: the core never learns whether a tone played, and
//! a host that drops them changes nothing in the core's state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

/// A short feedback tone request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_sec: f32,
    pub waveform: Waveform,
}

impl Tone {
    pub const fn new(frequency_hz: f32, duration_sec: f32, waveform: Waveform) -> Self {
        Self {
            frequency_hz,
            duration_sec,
            waveform,
        }
    }
}

/// C-major scale, one note per shape slot.
pub const NOTES: [f32; 8] = [261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25];

/// The note announcing a switch to shape slot `shape_index`.
pub fn note_for(shape_index: usize) -> Tone {
    Tone::new(NOTES[shape_index % NOTES.len()], 0.15, Waveform::Sine)
}
