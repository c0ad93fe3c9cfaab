//! Zones plus the transitions that count between them.

use std::collections::HashSet;

use super::zone::Zone;
use crate::error::{Error, Result};

/// Name of the transition counted as an entry in the two-zone layout.
pub const ENTER: &str = "enter";
/// Name of the transition counted as an exit in the two-zone layout.
pub const EXIT: &str = "exit";

/// Reference zones of the 1020x600 working frame.
const AREA1: [(i32, i32); 4] = [(251, 445), (516, 575), (466, 589), (210, 447)];
const AREA2: [(i32, i32); 4] = [(466, 589), (210, 447), (167, 460), (386, 595)];

/// An identity first seen in zone `from`, later seen in zone `to`, is counted
/// once under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub name: String,
    pub from: usize,
    pub to: usize,
}

/// Ordered zones and the declared transitions between them.
#[derive(Debug, Clone)]
pub struct ZoneLayout {
    zones: Vec<Zone>,
    transitions: Vec<Transition>,
}

impl ZoneLayout {
    pub fn new(zones: Vec<Zone>, transitions: Vec<Transition>) -> Result<Self> {
        if zones.is_empty() {
            return Err(Error::InvalidLayout("at least one zone is required".into()));
        }
        if transitions.is_empty() {
            return Err(Error::InvalidLayout(
                "at least one transition is required".into(),
            ));
        }

        let mut names = HashSet::new();
        for zone in &zones {
            if !names.insert(zone.name()) {
                return Err(Error::InvalidLayout(format!(
                    "duplicate zone name `{}`",
                    zone.name()
                )));
            }
        }

        let mut transition_names = HashSet::new();
        for t in &transitions {
            if !transition_names.insert(t.name.as_str()) {
                return Err(Error::InvalidLayout(format!(
                    "duplicate transition name `{}`",
                    t.name
                )));
            }
            if t.from >= zones.len() || t.to >= zones.len() {
                return Err(Error::InvalidLayout(format!(
                    "transition `{}` refers to a missing zone",
                    t.name
                )));
            }
            if t.from == t.to {
                return Err(Error::InvalidLayout(format!(
                    "transition `{}` starts and ends in the same zone",
                    t.name
                )));
            }
        }

        Ok(Self { zones, transitions })
    }

    /// Build a layout where transitions name their zones instead of indexing them.
    pub fn from_names(zones: Vec<Zone>, transitions: &[(&str, &str, &str)]) -> Result<Self> {
        let index_of = |name: &str| {
            zones
                .iter()
                .position(|z| z.name() == name)
                .ok_or_else(|| Error::InvalidLayout(format!("unknown zone `{name}`")))
        };
        let transitions = transitions
            .iter()
            .map(|&(name, from, to)| {
                Ok(Transition {
                    name: name.to_string(),
                    from: index_of(from)?,
                    to: index_of(to)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(zones, transitions)
    }

    /// Two adjacent zones: `area2 -> area1` counts as enter, `area1 -> area2` as exit.
    pub fn two_zone(area1: Zone, area2: Zone) -> Result<Self> {
        Self::new(
            vec![area1, area2],
            vec![
                Transition {
                    name: ENTER.to_string(),
                    from: 1,
                    to: 0,
                },
                Transition {
                    name: EXIT.to_string(),
                    from: 0,
                    to: 1,
                },
            ],
        )
    }

    /// The doorway layout for the default 1020x600 frame.
    pub fn reference() -> Result<Self> {
        Self::two_zone(
            Zone::from_pixels("area1", &AREA1)?,
            Zone::from_pixels("area2", &AREA2)?,
        )
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transition_index(&self, name: &str) -> Option<usize> {
        self.transitions.iter().position(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(name: &str, dx: i32) -> Zone {
        Zone::from_pixels(name, &[(dx, 0), (dx + 10, 0), (dx, 10)]).unwrap()
    }

    #[test]
    fn test_reference_layout() {
        let layout = ZoneLayout::reference().unwrap();
        assert_eq!(layout.zones().len(), 2);
        assert_eq!(layout.transition_index(ENTER), Some(0));
        assert_eq!(layout.transition_index(EXIT), Some(1));
        let enter = &layout.transitions()[0];
        assert_eq!(layout.zones()[enter.from].name(), "area2");
        assert_eq!(layout.zones()[enter.to].name(), "area1");
    }

    #[test]
    fn test_rejects_self_transition() {
        let err = ZoneLayout::from_names(vec![tri("a", 0), tri("b", 20)], &[("loop", "a", "a")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLayout(_)));
    }

    #[test]
    fn test_rejects_unknown_zone() {
        let err = ZoneLayout::from_names(vec![tri("a", 0)], &[("t", "a", "missing")]).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout(_)));
    }

    #[test]
    fn test_rejects_duplicate_zone_names() {
        let err =
            ZoneLayout::from_names(vec![tri("a", 0), tri("a", 20)], &[("t", "a", "a")]).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout(msg) if msg.contains("duplicate zone")));
    }

    #[test]
    fn test_rejects_empty_transitions() {
        assert!(ZoneLayout::new(vec![tri("a", 0)], vec![]).is_err());
    }
}
