//! Automatic probe outlines.
//!
//! The outline ("planar contour") is a polygon drawn around all contacts.
//! It is visual metadata only; nothing in this crate uses it for geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::probe::error::{ProbeError, ProbeResult};
use crate::probe::Point;

/// Default clearance between contacts and the generated outline.
pub const DEFAULT_MARGIN: f64 = 25.0;

/// Ratio between the tip length and the margin for [`ProbeType::Tip`].
const TIP_LENGTH_FACTOR: f64 = 4.0;

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeType {
    /// Rectangle with a pointed tip below the lowest contact.
    #[default]
    Tip,
    /// Plain rectangle.
    Rect,
}

impl FromStr for ProbeType {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tip" => Ok(Self::Tip),
            "rect" => Ok(Self::Rect),
            _ => Err(ProbeError::unsupported_probe_type(s)),
        }
    }
}

impl fmt::Display for ProbeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tip => write!(f, "tip"),
            Self::Rect => write!(f, "rect"),
        }
    }
}

/// Outline request: style plus margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    /// Outline style.
    pub probe_type: ProbeType,
    /// Clearance around the contact centres.
    pub margin: f64,
}

impl Default for Outline {
    fn default() -> Self {
        Self {
            probe_type: ProbeType::Tip,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Axis-aligned bounds of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum X.
    pub min_x: f64,
    /// Minimum Y.
    pub min_y: f64,
    /// Maximum X.
    pub max_x: f64,
    /// Maximum Y.
    pub max_y: f64,
}

impl Bounds {
    /// Computes the bounds of `points`, or `None` when empty.
    #[must_use]
    pub fn of(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self {
                    min_x: p.x,
                    min_y: p.y,
                    max_x: p.x,
                    max_y: p.y,
                },
                Some(b) => Self {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    /// Returns these bounds grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

/// Builds the outline polygon for contacts at `positions`.
///
/// The polygon starts at the top-left corner and runs counter-clockwise:
///
/// ```text
/// (x0,y1)        (x1,y1)
///    |              |
/// (x0,y0)        (x1,y0)
///        \      /
///          tip           (Tip only)
/// ```
///
/// # Errors
///
/// Returns [`ProbeError::EmptyProbe`] when `positions` is empty.
pub fn auto_contour(
    positions: impl IntoIterator<Item = Point>,
    outline: Outline,
) -> ProbeResult<Vec<Point>> {
    let bounds = Bounds::of(positions)
        .ok_or(ProbeError::EmptyProbe)?
        .expanded(outline.margin);

    let top_left = Point::new(bounds.min_x, bounds.max_y);
    let bottom_left = Point::new(bounds.min_x, bounds.min_y);
    let bottom_right = Point::new(bounds.max_x, bounds.min_y);
    let top_right = Point::new(bounds.max_x, bounds.max_y);

    let polygon = match outline.probe_type {
        ProbeType::Rect => vec![top_left, bottom_left, bottom_right, top_right],
        ProbeType::Tip => {
            let tip = Point::new(
                (bounds.min_x + bounds.max_x) * 0.5,
                TIP_LENGTH_FACTOR.mul_add(-outline.margin, bounds.min_y),
            );
            vec![top_left, bottom_left, tip, bottom_right, top_right]
        }
    };

    Ok(polygon)
}
