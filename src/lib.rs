//! Footfall analytics over tracked detections.
//!
//! Feeds per-frame detections (with tracker-supplied identities) through a
//! zone-crossing state machine, a bounded trajectory buffer and a density
//! accumulator, producing directional counts and draw instructions.

pub mod config;
pub mod counting;
pub mod error;
pub mod integration;

pub use config::SessionConfig;
pub use counting::{
    Containment, CountingSession, CrossingOutcome, DensityGrid, Detection, DrawInstruction,
    FrameResult, Point, Rect, TrackState, TrajectoryBuffer, Transition, Zone, ZoneCrossingTracker,
    ZoneLayout,
};
pub use error::{Error, Result};
pub use integration::{CountingPipeline, DetectionBuilder, DetectionSource, IntoDetections};
