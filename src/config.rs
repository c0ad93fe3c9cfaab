//! Session configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counting::{Point, Zone, ZoneLayout};
use crate::error::{Error, Result};

/// Polygon given as `[x, y]` vertex pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub name: String,
    pub vertices: Vec<[f32; 2]>,
}

/// Transition between two zones, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub name: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Working frame width in pixels
    #[serde(default = "default_frame_width")]
    pub frame_width: usize,

    /// Working frame height in pixels
    #[serde(default = "default_frame_height")]
    pub frame_height: usize,

    /// Detections whose label contains this string are counted
    #[serde(default = "default_tracked_class")]
    pub tracked_class: String,

    /// Maximum number of centroids kept per trail
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,

    /// Drop identity state after this many frames without a detection
    #[serde(default)]
    pub idle_eviction_frames: Option<u64>,

    /// Only every n-th raw frame is admitted to the pipeline
    #[serde(default = "default_frame_stride")]
    pub frame_stride: u64,

    /// Request a density snapshot with every frame from the start
    #[serde(default)]
    pub show_density: bool,

    /// Custom zones; the doorway layout is used when absent
    #[serde(default)]
    pub zones: Option<Vec<ZoneConfig>>,

    /// Transitions between `zones`; two zones default to enter/exit
    #[serde(default)]
    pub transitions: Option<Vec<TransitionConfig>>,
}

fn default_frame_width() -> usize {
    1020
}

fn default_frame_height() -> usize {
    600
}

fn default_tracked_class() -> String {
    "person".to_string()
}

fn default_trail_length() -> usize {
    50
}

fn default_frame_stride() -> u64 {
    2
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frame_width: default_frame_width(),
            frame_height: default_frame_height(),
            tracked_class: default_tracked_class(),
            trail_length: default_trail_length(),
            idle_eviction_frames: None,
            frame_stride: default_frame_stride(),
            show_density: false,
            zones: None,
            transitions: None,
        }
    }
}

impl SessionConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: SessionConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "frame size must be non-zero, got {}x{}",
                self.frame_width, self.frame_height
            )));
        }
        if self.trail_length == 0 {
            return Err(Error::InvalidConfig("trail_length must be at least 1".into()));
        }
        if self.frame_stride == 0 {
            return Err(Error::InvalidConfig("frame_stride must be at least 1".into()));
        }
        if self.tracked_class.is_empty() {
            return Err(Error::InvalidConfig("tracked_class must not be empty".into()));
        }
        if self.transitions.is_some() && self.zones.is_none() {
            return Err(Error::InvalidConfig(
                "transitions require explicit zones".into(),
            ));
        }
        Ok(())
    }

    /// Build the zone layout this configuration describes.
    pub fn layout(&self) -> Result<ZoneLayout> {
        let Some(zone_configs) = &self.zones else {
            return ZoneLayout::reference();
        };

        let zones = zone_configs
            .iter()
            .map(|z| {
                let vertices = z.vertices.iter().map(|&[x, y]| Point::new(x, y)).collect();
                Zone::new(z.name.clone(), vertices)
            })
            .collect::<Result<Vec<_>>>()?;

        match &self.transitions {
            Some(transitions) => {
                let named: Vec<(&str, &str, &str)> = transitions
                    .iter()
                    .map(|t| (t.name.as_str(), t.from.as_str(), t.to.as_str()))
                    .collect();
                ZoneLayout::from_names(zones, &named)
            }
            None => match <[Zone; 2]>::try_from(zones) {
                Ok([area1, area2]) => ZoneLayout::two_zone(area1, area2),
                Err(zones) => Err(Error::InvalidLayout(format!(
                    "{} zones given without transitions; only two zones have a default",
                    zones.len()
                ))),
            },
        }
    }
}
