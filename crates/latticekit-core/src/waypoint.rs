//! Waypoint stream
//!
//! The canonical intermediate representation passed between pipeline stages:
//! an ordered list of points interleaved with explicit extrusion markers.
//! Order is the literal order the print head moves through.
//!
//! A move *into* a point deposits material when the extrusion state at that
//! moment is [`ExtrusionState::Depositing`]. The state starts out depositing
//! and only changes at a [`Waypoint::SetExtrusion`] marker.

use crate::geometry::{Point, Vector};
use serde::{Deserialize, Serialize};

/// Whether the head is depositing material or merely traveling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtrusionState {
    /// Extruder on
    #[default]
    Depositing,
    /// Extruder off
    Traveling,
}

impl ExtrusionState {
    pub fn is_depositing(self) -> bool {
        self == ExtrusionState::Depositing
    }
}

/// One entry of a [`WaypointSequence`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waypoint {
    /// Move the head to this point
    Point(Point),
    /// Switch the extruder for every following move
    SetExtrusion { state: ExtrusionState },
}

impl Waypoint {
    /// The point carried by this entry, if any.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Waypoint::Point(p) => Some(p),
            Waypoint::SetExtrusion { .. } => None,
        }
    }
}

/// A point together with the extrusion state the head arrived in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit {
    pub point: Point,
    pub state: ExtrusionState,
}

/// Ordered list of points and extrusion markers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointSequence {
    steps: Vec<Waypoint>,
}

impl WaypointSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point.
    pub fn push_point(&mut self, point: Point) {
        self.steps.push(Waypoint::Point(point));
    }

    /// Appends an extrusion marker.
    pub fn push_state(&mut self, state: ExtrusionState) {
        self.steps.push(Waypoint::SetExtrusion { state });
    }

    /// Appends a single entry.
    pub fn push(&mut self, step: Waypoint) {
        self.steps.push(step);
    }

    /// Appends every entry of `other`, unchanged.
    pub fn append(&mut self, other: &WaypointSequence) {
        self.steps.extend_from_slice(&other.steps);
    }

    /// Total number of entries, markers included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of point entries.
    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.steps
    }

    pub fn into_inner(self) -> Vec<Waypoint> {
        self.steps
    }

    /// Iterates over the points, skipping markers.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.steps.iter().filter_map(Waypoint::as_point)
    }

    /// Iterates over the points with the state each one is reached in.
    pub fn visits(&self) -> impl Iterator<Item = Visit> + '_ {
        let mut state = ExtrusionState::default();
        self.steps.iter().filter_map(move |step| match step {
            Waypoint::Point(point) => Some(Visit {
                point: *point,
                state,
            }),
            Waypoint::SetExtrusion { state: next } => {
                state = *next;
                None
            }
        })
    }

    pub fn first_point(&self) -> Option<&Point> {
        self.points().next()
    }

    pub fn last_point(&self) -> Option<&Point> {
        self.steps.iter().rev().find_map(Waypoint::as_point)
    }

    /// The extrusion state in force after the last entry.
    pub fn final_state(&self) -> ExtrusionState {
        self.steps
            .iter()
            .rev()
            .find_map(|step| match step {
                Waypoint::SetExtrusion { state } => Some(*state),
                Waypoint::Point(_) => None,
            })
            .unwrap_or_default()
    }

    /// Returns a copy with every point mapped through `f`; markers are kept.
    pub fn map_points(&self, mut f: impl FnMut(&Point) -> Point) -> Self {
        self.steps
            .iter()
            .map(|step| match step {
                Waypoint::Point(p) => Waypoint::Point(f(p)),
                marker => *marker,
            })
            .collect()
    }

    /// Returns a copy translated by `offset`.
    pub fn translated(&self, offset: Vector) -> Self {
        self.map_points(|p| *p + offset)
    }

    /// Concatenates `count` copies, copy `i` translated by `i * step`.
    pub fn copies(&self, step: Vector, count: usize) -> Self {
        let mut out = Self::with_capacity(self.len() * count);
        for i in 0..count {
            out.append(&self.translated(step * i as f64));
        }
        out
    }

    /// Traverses the same moves backwards.
    ///
    /// The move between two neighbouring points keeps the extrusion state it
    /// had in the forward direction, and the sequence ends in the same state
    /// the forward one ended in.
    pub fn reversed(&self) -> Self {
        let visits: Vec<Visit> = self.visits().collect();
        let mut out = Self::with_capacity(self.len());
        let mut current = ExtrusionState::default();

        let mut emit = |out: &mut Self, point: Point, state: ExtrusionState| {
            if state != current {
                out.push_state(state);
                current = state;
            }
            out.push_point(point);
        };

        if let Some(last) = visits.last() {
            emit(&mut out, last.point, last.state);
        }
        for pair in visits.windows(2).rev() {
            emit(&mut out, pair[0].point, pair[1].state);
        }

        let end_state = self.final_state();
        if end_state != current {
            out.push_state(end_state);
        }
        out
    }
}

impl FromIterator<Waypoint> for WaypointSequence {
    fn from_iter<I: IntoIterator<Item = Waypoint>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WaypointSequence {
    type Item = Waypoint;
    type IntoIter = std::vec::IntoIter<Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a WaypointSequence {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
