//! Multi-column and linear probes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::layout::{generate_columns, ContactsPerColumn};
use crate::probe::{ContactShape, Outline, Probe, ProbeResult, Unit};

/// Parameters for a column-based probe.
///
/// `Default` gives 3 columns of 10 circular (radius 6) contacts on a
/// 20 × 20 pitch with a tip-shaped outline 25 away from the contacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    /// Number of columns.
    pub num_columns: usize,
    /// Contacts in each column.
    pub num_contact_per_column: ContactsPerColumn,
    /// Distance between columns.
    pub xpitch: f64,
    /// Distance between contacts within a column.
    pub ypitch: f64,
    /// Vertical offset of each column. `None` means no offset.
    pub y_shift_per_column: Option<Vec<f64>>,
    /// Shape shared by every contact.
    pub contact_shape: ContactShape,
    /// Outline drawn around the contacts.
    pub outline: Outline,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            num_columns: 3,
            num_contact_per_column: ContactsPerColumn::default(),
            xpitch: 20.0,
            ypitch: 20.0,
            y_shift_per_column: None,
            contact_shape: ContactShape::default(),
            outline: Outline::default(),
        }
    }
}

impl ColumnLayout {
    /// Single column of `num_elec` contacts, `ypitch` apart.
    #[must_use]
    pub fn linear(num_elec: usize, ypitch: f64, contact_shape: ContactShape) -> Self {
        Self {
            num_columns: 1,
            num_contact_per_column: ContactsPerColumn::Uniform(num_elec),
            xpitch: 0.0,
            ypitch,
            contact_shape,
            ..Self::default()
        }
    }
}

/// Generates a probe with several columns of contacts.
///
/// # Errors
///
/// Returns an error if the per-column lists do not match `num_columns`, the
/// contact shape is invalid, or the layout has no contacts to outline.
pub fn generate_multi_columns_probe(layout: &ColumnLayout) -> ProbeResult<Probe> {
    let positions = generate_columns(
        layout.num_columns,
        &layout.num_contact_per_column,
        layout.xpitch,
        layout.ypitch,
        layout.y_shift_per_column.as_deref(),
    )?;

    let mut probe = Probe::new(Unit::Micrometre);
    probe.set_contacts(positions, layout.contact_shape)?;
    probe.create_auto_shape(layout.outline)?;

    debug!(
        columns = layout.num_columns,
        contacts = probe.contact_count(),
        shape = %layout.contact_shape.kind(),
        "Generated multi-column probe"
    );

    Ok(probe)
}

/// Generates a one-column probe.
///
/// # Errors
///
/// Returns an error if the shape is invalid or `num_elec` is zero.
pub fn generate_linear_probe(
    num_elec: usize,
    ypitch: f64,
    contact_shape: ContactShape,
) -> ProbeResult<Probe> {
    generate_multi_columns_probe(&ColumnLayout::linear(num_elec, ypitch, contact_shape))
}
