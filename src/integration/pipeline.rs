//! CountingPipeline for combining a tracking backend with a counting session.

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::counting::{CountingSession, FrameResult};
use crate::error::Result;

use super::DetectionSource;

/// Bundles a `DetectionSource` with a `CountingSession` and the playback
/// controls of the serving layer.
///
/// Controls are plain flags read between frames; the session itself never
/// sees them except through `restart`.
pub struct CountingPipeline<D: DetectionSource> {
    detector: D,
    session: CountingSession,
    paused: bool,
    show_density: bool,
    raw_frames: u64,
}

impl<D: DetectionSource> CountingPipeline<D> {
    /// Create a new pipeline with the given detector and session config.
    pub fn new(detector: D, config: SessionConfig) -> Result<Self> {
        let show_density = config.show_density;
        Ok(Self {
            detector,
            session: CountingSession::new(config)?,
            paused: false,
            show_density,
            raw_frames: 0,
        })
    }

    /// Create a new pipeline with the default doorway configuration.
    pub fn with_default_config(detector: D) -> Result<Self> {
        Self::new(detector, SessionConfig::default())
    }

    /// Offer one raw frame to the pipeline.
    ///
    /// Returns `Ok(None)` while paused and for frames dropped by the frame
    /// stride; neither reaches the detector.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> std::result::Result<Option<FrameResult>, D::Error> {
        if self.paused {
            return Ok(None);
        }

        self.raw_frames += 1;
        if self.raw_frames % self.session.config().frame_stride != 0 {
            return Ok(None);
        }

        let detections = self.detector.detect(input, width, height)?;
        Ok(Some(self.session.process(&detections, self.show_density)))
    }

    pub fn pause(&mut self) {
        debug!(frame = self.raw_frames, "pipeline paused");
        self.paused = true;
    }

    pub fn resume(&mut self) {
        debug!(frame = self.raw_frames, "pipeline resumed");
        self.paused = false;
    }

    /// Rewind to the first frame with a fresh session. Pause and view flags are kept.
    pub fn restart(&mut self) {
        info!(raw_frames = self.raw_frames, "pipeline restarted");
        self.raw_frames = 0;
        self.session.restart();
    }

    /// Flip the density view; returns the new state. Accumulation is unaffected.
    pub fn toggle_density_view(&mut self) -> bool {
        self.show_density = !self.show_density;
        debug!(show_density = self.show_density, "density view toggled");
        self.show_density
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn shows_density(&self) -> bool {
        self.show_density
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the counting session.
    pub fn session(&self) -> &CountingSession {
        &self.session
    }

    /// Get a mutable reference to the counting session.
    pub fn session_mut(&mut self) -> &mut CountingSession {
        &mut self.session
    }
}
