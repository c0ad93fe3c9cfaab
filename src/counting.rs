mod crossing;
mod density;
mod detection;
mod layout;
mod rect;
mod session;
mod track_state;
mod trajectory;
mod zone;

pub use crossing::{CrossingOutcome, ZoneCrossingTracker};
pub use density::DensityGrid;
pub use detection::Detection;
pub use layout::{ENTER, EXIT, Transition, ZoneLayout};
pub use rect::Rect;
pub use session::{CountingSession, DrawInstruction, FrameResult};
pub use track_state::TrackState;
pub use trajectory::TrajectoryBuffer;
pub use zone::{Containment, Zone};

/// Point type shared by geometry, trails and draw instructions.
pub type Point = nalgebra::Point2<f32>;
