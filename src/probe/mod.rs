//! Probe records.
//!
//! A [`Probe`] is one electrode array: an ordered list of contacts, each
//! with a 2-D position and a [`ContactShape`], an optional outline polygon
//! and free-form annotations.
//!
//! # Structure
//!
//! ```text
//! Probe
//! ├── unit                  # um / mm
//! ├── contacts[]            # position + shape, in generation order
//! ├── shank_ids[]           # only on combined probes
//! ├── planar_contour[]      # optional outline polygon
//! ├── annotations           # key -> value  (e.g. manufacturer)
//! └── contact_annotations   # key -> [value; contacts.len()]
//! ```
//!
//! [`ProbeGroup`] holds several probes and [`combine_probes`] merges several
//! probes into one multi-shank probe.

mod combine;
pub mod contour;
mod error;
mod group;
pub mod shape;

use std::fmt;
use std::ops::{Add, Mul};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use combine::combine_probes;
pub use contour::{Bounds, Outline, ProbeType};
pub use error::{ProbeError, ProbeResult};
pub use group::ProbeGroup;
pub use shape::{ContactShape, ShapeKind};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Physical unit of probe coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Micrometres.
    #[default]
    #[serde(rename = "um")]
    Micrometre,
    /// Millimetres.
    #[serde(rename = "mm")]
    Millimetre,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Micrometre => write!(f, "um"),
            Self::Millimetre => write!(f, "mm"),
        }
    }
}

/// One electrode site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Centre position.
    pub position: Point,
    /// Shape and its parameters.
    #[serde(flatten)]
    pub shape: ContactShape,
}

/// A planar electrode array.
///
/// Deserialising checks the same invariants [`Probe::validate`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProbeRecord")]
pub struct Probe {
    /// Number of spatial dimensions. Always 2.
    pub ndim: usize,

    /// Unit of every coordinate in this probe.
    pub si_units: Unit,

    /// Contacts in generation order.
    pub contacts: Vec<Contact>,

    /// Source probe index of every contact. Set by [`combine_probes`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shank_ids: Option<Vec<usize>>,

    /// Outline polygon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planar_contour: Option<Vec<Point>>,

    /// Probe-level annotations.
    pub annotations: IndexMap<String, Value>,

    /// Per-contact annotations; each array has one entry per contact.
    pub contact_annotations: IndexMap<String, Vec<Value>>,
}

/// Unchecked serialised form of [`Probe`].
#[derive(Deserialize)]
struct ProbeRecord {
    ndim: usize,
    si_units: Unit,
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    shank_ids: Option<Vec<usize>>,
    #[serde(default)]
    planar_contour: Option<Vec<Point>>,
    #[serde(default)]
    annotations: IndexMap<String, Value>,
    #[serde(default)]
    contact_annotations: IndexMap<String, Vec<Value>>,
}

impl TryFrom<ProbeRecord> for Probe {
    type Error = ProbeError;

    fn try_from(record: ProbeRecord) -> ProbeResult<Self> {
        let probe = Self {
            ndim: record.ndim,
            si_units: record.si_units,
            contacts: record.contacts,
            shank_ids: record.shank_ids,
            planar_contour: record.planar_contour,
            annotations: record.annotations,
            contact_annotations: record.contact_annotations,
        };
        probe.validate()?;
        Ok(probe)
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new(Unit::Micrometre)
    }
}

impl Probe {
    /// Creates an empty 2-D probe.
    #[must_use]
    pub fn new(si_units: Unit) -> Self {
        Self {
            ndim: 2,
            si_units,
            contacts: Vec::new(),
            shank_ids: None,
            planar_contour: None,
            annotations: IndexMap::new(),
            contact_annotations: IndexMap::new(),
        }
    }

    /// Replaces the contacts with `positions`, all sharing `shape`.
    ///
    /// Clears shank ids, per-contact annotations and the outline, which no
    /// longer line up with the new contacts.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidShapeParameter`] if `shape` is invalid.
    pub fn set_contacts(
        &mut self,
        positions: impl IntoIterator<Item = Point>,
        shape: ContactShape,
    ) -> ProbeResult<()> {
        shape.validate()?;
        self.contacts = positions
            .into_iter()
            .map(|position| Contact { position, shape })
            .collect();
        self.shank_ids = None;
        self.planar_contour = None;
        self.contact_annotations.clear();
        Ok(())
    }

    /// Returns the number of contacts.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Iterates over contact positions.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.contacts.iter().map(|c| c.position)
    }

    /// Iterates over contact shapes.
    pub fn shapes(&self) -> impl Iterator<Item = ContactShape> + '_ {
        self.contacts.iter().map(|c| c.shape)
    }

    /// Bounds of the contact centres, or `None` for an empty probe.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(self.positions())
    }

    /// Sets the outline polygon.
    pub fn set_planar_contour(&mut self, polygon: Vec<Point>) {
        self.planar_contour = Some(polygon);
    }

    /// Derives an outline around all contacts.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::EmptyProbe`] if the probe has no contacts.
    pub fn create_auto_shape(&mut self, outline: Outline) -> ProbeResult<()> {
        let polygon = contour::auto_contour(self.positions(), outline)?;
        self.set_planar_contour(polygon);
        Ok(())
    }

    /// Translates every contact and the outline by `offset`.
    pub fn translate(&mut self, offset: Point) {
        for contact in &mut self.contacts {
            contact.position = contact.position + offset;
        }
        if let Some(contour) = self.planar_contour.as_mut() {
            for vertex in contour.iter_mut() {
                *vertex = *vertex + offset;
            }
        }
    }

    /// Sets a probe-level annotation.
    pub fn annotate(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.annotations.insert(key.into(), value.into());
    }

    /// Sets a per-contact annotation.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::LengthMismatch`] unless `values` has exactly one
    /// entry per contact.
    pub fn annotate_contacts<V: Into<Value>>(
        &mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> ProbeResult<()> {
        let key = key.into();
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.check_per_contact(format!("contact annotation '{key}'"), values.len())?;
        self.contact_annotations.insert(key, values);
        Ok(())
    }

    /// Checks the record invariants: valid contact shapes, and one shank id
    /// and one value per contact annotation for every contact.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidShapeParameter`] or
    /// [`ProbeError::LengthMismatch`] for the first violation found.
    pub fn validate(&self) -> ProbeResult<()> {
        for shape in self.shapes() {
            shape.validate()?;
        }
        if let Some(ids) = &self.shank_ids {
            self.check_per_contact("shank_ids", ids.len())?;
        }
        for (key, values) in &self.contact_annotations {
            self.check_per_contact(format!("contact annotation '{key}'"), values.len())?;
        }
        Ok(())
    }

    fn check_per_contact(&self, what: impl Into<String>, actual: usize) -> ProbeResult<()> {
        if actual == self.contacts.len() {
            Ok(())
        } else {
            Err(ProbeError::length_mismatch(what, self.contacts.len(), actual))
        }
    }
}
