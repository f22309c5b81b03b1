//! Dummy probes for tests and demos.
//!
//! The dummy probe is a fixed 32-contact, 3-column layout with a couple of
//! annotations, so downstream code has something realistic to chew on.

use tracing::debug;

use crate::generator::columns::{generate_multi_columns_probe, ColumnLayout};
use crate::generator::layout::ContactsPerColumn;
use crate::probe::{Point, Probe, ProbeGroup, ProbeResult, ShapeKind};

/// Quality value written to every dummy contact.
pub const DUMMY_QUALITY: f64 = 1000.0;

/// Offset applied to the second probe of the dummy group.
pub const DUMMY_GROUP_OFFSET: Point = Point::new(150.0, -50.0);

fn dummy_layout(shape: ShapeKind) -> ColumnLayout {
    ColumnLayout {
        num_columns: 3,
        num_contact_per_column: ContactsPerColumn::PerColumn(vec![10, 12, 10]),
        xpitch: 25.0,
        ypitch: 25.0,
        y_shift_per_column: Some(vec![0.0, -12.5, 0.0]),
        contact_shape: shape.preset(),
        ..ColumnLayout::default()
    }
}

/// Generates the 32-contact dummy probe with `shape` contacts.
///
/// Annotated with `manufacturer = "me"` and a per-contact `quality` of
/// [`DUMMY_QUALITY`].
///
/// # Errors
///
/// Does not fail for the built-in presets.
pub fn generate_dummy_probe(shape: ShapeKind) -> ProbeResult<Probe> {
    let mut probe = generate_multi_columns_probe(&dummy_layout(shape))?;

    probe.annotate("manufacturer", "me");
    let quality = vec![DUMMY_QUALITY; probe.contact_count()];
    probe.annotate_contacts("quality", quality)?;

    Ok(probe)
}

/// Generates a group of two dummy probes.
///
/// The first has circular contacts; the second has rectangular contacts and
/// is translated by [`DUMMY_GROUP_OFFSET`].
///
/// # Errors
///
/// Does not fail for the built-in presets.
pub fn generate_dummy_probe_group() -> ProbeResult<ProbeGroup> {
    let first = generate_dummy_probe(ShapeKind::Circle)?;
    let mut second = generate_dummy_probe(ShapeKind::Rect)?;
    second.translate(DUMMY_GROUP_OFFSET);

    let mut group = ProbeGroup::new();
    group.add_probe(first)?;
    group.add_probe(second)?;

    debug!(probes = group.len(), "Generated dummy probe group");
    Ok(group)
}
