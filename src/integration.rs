//! Integration module for connecting an external detector/tracker with a
//! counting session.
//!
//! This module provides the traits a tracking backend implements, a builder
//! for detections, and a pipeline that carries the playback controls.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::CountingPipeline;
