//! Documentation annotations drawn over the preview

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A text label pinned to a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub point: Point,
    pub label: String,
}

impl Annotation {
    pub fn new(point: Point, label: impl Into<String>) -> Self {
        Self {
            point,
            label: label.into(),
        }
    }

    /// The standard labels for a lattice starting at `(start_x, start_y)`.
    ///
    /// Labels sit on a diagonal five struts either side of the start point.
    pub fn lattice_defaults(start_x: f64, start_y: f64, seg_length: f64) -> Vec<Annotation> {
        let reach = seg_length * 5.0;
        vec![
            Annotation::new(
                Point::xy(start_x - reach, start_y + reach),
                "Lattices used in a research article",
            ),
            Annotation::new(
                Point::xy(start_x, start_y),
                "Use TPU or similar ductile polymers",
            ),
            Annotation::new(
                Point::xy(start_x + reach, start_y - reach),
                "More details: www.tinyurl.com/lattice-research",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_annotations_positions() {
        let notes = Annotation::lattice_defaults(30.0, 30.0, 2.0);
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].point, Point::xy(20.0, 40.0));
        assert_eq!(notes[1].point, Point::xy(30.0, 30.0));
        assert_eq!(notes[2].point, Point::xy(40.0, 20.0));
        assert!(notes[1].label.contains("TPU"));
    }
}
