//! Per-frame processing over one counting session.

use ndarray::Array2;
use tracing::{debug, info, trace};

use super::Point;
use super::crossing::ZoneCrossingTracker;
use super::density::DensityGrid;
use super::detection::Detection;
use super::layout::{ENTER, EXIT, ZoneLayout};
use super::rect::Rect;
use super::trajectory::TrajectoryBuffer;
use crate::config::SessionConfig;
use crate::error::Result;

/// Where the first counter label is placed and how far apart the rest are.
const COUNTER_ORIGIN: (f32, f32) = (50.0, 60.0);
const COUNTER_SPACING: f32 = 40.0;

/// Geometric overlay produced for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawInstruction {
    /// Box of an identity that satisfies a transition condition this frame.
    Highlight {
        track_id: u64,
        bbox: Rect,
        label: String,
        label_origin: Point,
        anchor: Point,
        newly_counted: bool,
    },
    /// One piece of an identity's trail.
    Segment { track_id: u64, from: Point, to: Point },
    /// Closed outline of a zone.
    ZoneOutline { name: String, vertices: Vec<Point> },
    /// Running total of one transition, e.g. `Enter: 3`.
    Counter { text: String, origin: Point },
}

/// Everything the rendering layer needs for one processed frame.
#[derive(Debug, Clone, Default)]
pub struct FrameResult {
    pub frame_index: u64,
    /// Identities counted as entering on this frame
    pub enter_events: Vec<u64>,
    /// Identities counted as exiting on this frame
    pub exit_events: Vec<u64>,
    pub total_entered: usize,
    pub total_exited: usize,
    /// Totals for every transition of the layout, in declaration order
    pub totals: Vec<(String, usize)>,
    pub draw: Vec<DrawInstruction>,
    /// Normalized heatmap, present only when requested
    pub density: Option<Array2<u8>>,
}

/// All mutable counting state for one video feed.
///
/// Frames must be fed sequentially through [`CountingSession::process`];
/// independent feeds use independent sessions.
#[derive(Debug, Clone)]
pub struct CountingSession {
    config: SessionConfig,
    tracker: ZoneCrossingTracker,
    trajectories: TrajectoryBuffer,
    density: DensityGrid,
    enter: Option<usize>,
    exit: Option<usize>,
    frame_index: u64,
}

impl CountingSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let layout = config.layout()?;
        Ok(Self::with_layout(config, layout))
    }

    /// Session over an already validated layout; zones in `config` are ignored.
    pub fn with_layout(config: SessionConfig, layout: ZoneLayout) -> Self {
        let enter = layout.transition_index(ENTER);
        let exit = layout.transition_index(EXIT);
        info!(
            zones = layout.zones().len(),
            transitions = layout.transitions().len(),
            width = config.frame_width,
            height = config.frame_height,
            "counting session created"
        );
        Self {
            trajectories: TrajectoryBuffer::with_capacity(config.trail_length),
            density: DensityGrid::new(config.frame_width, config.frame_height),
            tracker: ZoneCrossingTracker::new(layout),
            enter,
            exit,
            frame_index: 0,
            config,
        }
    }

    /// Process one frame's detections.
    pub fn process(&mut self, detections: &[Detection], want_density: bool) -> FrameResult {
        self.frame_index += 1;
        let frame = self.frame_index;

        let mut result = FrameResult {
            frame_index: frame,
            ..Default::default()
        };

        for det in detections {
            let Some(track_id) = det.track_id else {
                trace!(label = %det.class_label, "skipping detection without identity");
                continue;
            };
            if !det.is_class(&self.config.tracked_class) {
                continue;
            }

            let anchor = det.bbox.anchor();
            let centroid = det.bbox.center();

            let outcome = self.tracker.observe(track_id, anchor, frame);
            self.trajectories.append(track_id, centroid);
            self.density.record(centroid);

            if self.enter.is_some_and(|t| outcome.counted(t)) {
                result.enter_events.push(track_id);
            }
            if self.exit.is_some_and(|t| outcome.counted(t)) {
                result.exit_events.push(track_id);
            }

            if outcome.is_active() {
                result.draw.push(DrawInstruction::Highlight {
                    track_id,
                    bbox: det.bbox,
                    label: format!("ID: {track_id}"),
                    label_origin: det.bbox.label_origin(),
                    anchor,
                    newly_counted: !outcome.newly_counted.is_empty(),
                });
            }

            result.draw.extend(
                self.trajectories
                    .segments(track_id)
                    .into_iter()
                    .map(|(from, to)| DrawInstruction::Segment { track_id, from, to }),
            );
        }

        if let Some(max_idle) = self.config.idle_eviction_frames {
            self.evict_idle_after(max_idle);
        }

        let layout = self.tracker.layout();
        for (idx, transition) in layout.transitions().iter().enumerate() {
            let total = self.tracker.total(idx);
            result.totals.push((transition.name.clone(), total));
            result.draw.push(DrawInstruction::Counter {
                text: format!("{}: {total}", capitalize(&transition.name)),
                origin: Point::new(
                    COUNTER_ORIGIN.0,
                    COUNTER_ORIGIN.1 + COUNTER_SPACING * idx as f32,
                ),
            });
        }
        result
            .draw
            .extend(layout.zones().iter().map(|z| DrawInstruction::ZoneOutline {
                name: z.name().to_string(),
                vertices: z.vertices().to_vec(),
            }));

        let (total_entered, total_exited) = self.totals();
        result.total_entered = total_entered;
        result.total_exited = total_exited;

        if want_density {
            result.density = Some(self.density.snapshot());
        }

        if !result.enter_events.is_empty() || !result.exit_events.is_empty() {
            debug!(
                frame,
                entered = total_entered,
                exited = total_exited,
                "totals updated"
            );
        }

        result
    }

    /// `(total_entered, total_exited)`; zero for a layout lacking either transition.
    pub fn totals(&self) -> (usize, usize) {
        let total = |t: Option<usize>| t.map_or(0, |idx| self.tracker.total(idx));
        (total(self.enter), total(self.exit))
    }

    /// Evict identities idle for longer than the configured limit.
    ///
    /// Does nothing when `idle_eviction_frames` is unset.
    pub fn evict_idle(&mut self) -> Vec<u64> {
        match self.config.idle_eviction_frames {
            Some(max_idle) => self.evict_idle_after(max_idle),
            None => Vec::new(),
        }
    }

    fn evict_idle_after(&mut self, max_idle: u64) -> Vec<u64> {
        let evicted = self.tracker.evict_idle(self.frame_index, max_idle);
        for &id in &evicted {
            self.trajectories.remove(id);
        }
        evicted
    }

    /// Drop all per-identity state for `identity`. Totals are unaffected.
    pub fn forget(&mut self, identity: u64) -> bool {
        let had_state = self.tracker.forget(identity);
        let had_trail = self.trajectories.remove(identity);
        had_state || had_trail
    }

    /// Start over: counts, identities, trails and heatmap are all cleared.
    pub fn restart(&mut self) {
        info!(
            frame = self.frame_index,
            identities = self.tracker.len(),
            "restarting counting session"
        );
        self.tracker.reset();
        self.trajectories.clear();
        self.density.reset();
        self.frame_index = 0;
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn layout(&self) -> &ZoneLayout {
        self.tracker.layout()
    }

    pub fn tracker(&self) -> &ZoneCrossingTracker {
        &self.tracker
    }

    pub fn trajectories(&self) -> &TrajectoryBuffer {
        &self.trajectories
    }

    pub fn density(&self) -> &DensityGrid {
        &self.density
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
