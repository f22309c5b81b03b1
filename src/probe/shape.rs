//! Contact shape descriptors.
//!
//! A contact shape is a tag plus the parameters that tag requires. The two
//! travel together in [`ContactShape`], so a circle can never be paired with
//! a width or a rectangle with a radius.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::probe::error::{ProbeError, ProbeResult};

/// Shape tag without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Round contact.
    #[default]
    Circle,
    /// Square contact.
    Square,
    /// Rectangular contact.
    Rect,
}

impl ShapeKind {
    /// Returns the lowercase tag used in serialised probes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rect => "rect",
        }
    }

    /// Returns the preset parameters used by the dummy probes.
    ///
    /// Circle: radius 6. Square: width 7. Rect: 6 × 4.5.
    #[must_use]
    pub const fn preset(&self) -> ContactShape {
        match self {
            Self::Circle => ContactShape::Circle { radius: 6.0 },
            Self::Square => ContactShape::Square { width: 7.0 },
            Self::Rect => ContactShape::Rect {
                width: 6.0,
                height: 4.5,
            },
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "rect" => Ok(Self::Rect),
            _ => Err(ProbeError::unsupported_shape(s)),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a single contact, with its parameters.
///
/// Deserialising rejects parameters that fail [`ContactShape::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase", try_from = "ShapeRecord")]
pub enum ContactShape {
    /// Round contact of the given radius.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// Square contact of the given side length.
    Square {
        /// Side length.
        width: f64,
    },
    /// Rectangular contact.
    Rect {
        /// Extent along x.
        width: f64,
        /// Extent along y.
        height: f64,
    },
}

/// Unchecked serialised form of [`ContactShape`].
#[derive(Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
enum ShapeRecord {
    Circle { radius: f64 },
    Square { width: f64 },
    Rect { width: f64, height: f64 },
}

impl TryFrom<ShapeRecord> for ContactShape {
    type Error = ProbeError;

    fn try_from(record: ShapeRecord) -> ProbeResult<Self> {
        let shape = match record {
            ShapeRecord::Circle { radius } => Self::Circle { radius },
            ShapeRecord::Square { width } => Self::Square { width },
            ShapeRecord::Rect { width, height } => Self::Rect { width, height },
        };
        shape.validate()?;
        Ok(shape)
    }
}

impl Default for ContactShape {
    fn default() -> Self {
        Self::Circle { radius: 6.0 }
    }
}

impl ContactShape {
    /// Builds a shape from a tag and loose parameters.
    ///
    /// `circle` needs `radius`, `square` needs `width`, `rect` needs both
    /// `width` and `height`. Parameters the tag does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::UnsupportedShape`] for an unknown tag,
    /// [`ProbeError::MissingShapeParameter`] when a required parameter is
    /// absent and [`ProbeError::InvalidShapeParameter`] when one is not
    /// strictly positive.
    pub fn from_tag(
        tag: &str,
        radius: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> ProbeResult<Self> {
        let kind = tag.parse::<ShapeKind>()?;
        let require = |name: &'static str, value: Option<f64>| {
            value.ok_or(ProbeError::MissingShapeParameter {
                tag: kind.as_str(),
                name,
            })
        };

        let shape = match kind {
            ShapeKind::Circle => Self::Circle {
                radius: require("radius", radius)?,
            },
            ShapeKind::Square => Self::Square {
                width: require("width", width)?,
            },
            ShapeKind::Rect => Self::Rect {
                width: require("width", width)?,
                height: require("height", height)?,
            },
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Returns the tag of this shape.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Square { .. } => ShapeKind::Square,
            Self::Rect { .. } => ShapeKind::Rect,
        }
    }

    /// Checks that every parameter is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidShapeParameter`] naming the first bad
    /// parameter.
    pub fn validate(&self) -> ProbeResult<()> {
        let check = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ProbeError::InvalidShapeParameter { name, value })
            }
        };

        match *self {
            Self::Circle { radius } => check("radius", radius),
            Self::Square { width } => check("width", width),
            Self::Rect { width, height } => {
                check("width", width)?;
                check("height", height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_string() {
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!("SQUARE".parse::<ShapeKind>(), Ok(ShapeKind::Square));
        assert_eq!("Rect".parse::<ShapeKind>(), Ok(ShapeKind::Rect));
        assert_eq!(
            "triangle".parse::<ShapeKind>(),
            Err(ProbeError::unsupported_shape("triangle"))
        );
    }

    #[test]
    fn presets_match_kind() {
        for kind in [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Rect] {
            let shape = kind.preset();
            assert_eq!(shape.kind(), kind);
            assert!(shape.validate().is_ok());
        }
        assert_eq!(
            ShapeKind::Rect.preset(),
            ContactShape::Rect {
                width: 6.0,
                height: 4.5
            }
        );
    }

    #[test]
    fn from_tag_requires_matching_parameters() {
        assert_eq!(
            ContactShape::from_tag("circle", Some(5.0), None, None),
            Ok(ContactShape::Circle { radius: 5.0 })
        );
        assert_eq!(
            ContactShape::from_tag("square", None, Some(8.0), Some(1.0)),
            Ok(ContactShape::Square { width: 8.0 })
        );
        assert_eq!(
            ContactShape::from_tag("rect", None, Some(6.0), None),
            Err(ProbeError::MissingShapeParameter {
                tag: "rect",
                name: "height"
            })
        );
        assert!(matches!(
            ContactShape::from_tag("circle", Some(-2.0), None, None),
            Err(ProbeError::InvalidShapeParameter { name: "radius", .. })
        ));
        assert!(matches!(
            ContactShape::from_tag("hexagon", Some(1.0), None, None),
            Err(ProbeError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_positive() {
        assert!(ContactShape::Circle { radius: 0.0 }.validate().is_err());
        assert!(ContactShape::Square { width: -1.0 }.validate().is_err());
        assert!(ContactShape::Rect {
            width: 1.0,
            height: f64::INFINITY
        }
        .validate()
        .is_err());
    }

    #[test]
    fn serialises_with_shape_tag() {
        let json = serde_json::to_value(ContactShape::Circle { radius: 6.0 }).unwrap();
        assert_eq!(json, serde_json::json!({ "shape": "circle", "radius": 6.0 }));

        let back: ContactShape =
            serde_json::from_str(r#"{"shape":"rect","width":6.0,"height":4.5}"#).unwrap();
        assert_eq!(back, ShapeKind::Rect.preset());
    }

    #[test]
    fn deserialise_rejects_non_positive() {
        let err = serde_json::from_str::<ContactShape>(r#"{"shape":"circle","radius":-3.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid shape parameter 'radius'"));

        let err = serde_json::from_str::<ContactShape>(r#"{"shape":"rect","width":6.0,"height":0.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("'height'"));
    }
}
