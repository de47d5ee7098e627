pub mod audio;
pub mod constants;
pub mod dispatch;
pub mod engine;
pub mod gesture;
pub mod landmark;
pub mod latest;
pub mod palette;
pub mod session;
pub mod shapes;
pub mod state;

pub use audio::*;
pub use dispatch::{Cue, Cues};
pub use engine::{FrameSnapshot, ParticleEngine};
pub use gesture::*;
pub use landmark::*;
pub use latest::LatestSlot;
pub use session::Session;
pub use shapes::Shape;
pub use state::ControlState;
