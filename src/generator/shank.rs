//! Multi-shank probes.

use tracing::debug;

use crate::generator::columns::{generate_multi_columns_probe, ColumnLayout};
use crate::probe::{combine_probes, Point, Probe, ProbeResult};

/// Default number of shanks.
pub const DEFAULT_NUM_SHANK: usize = 2;

/// Default offset between neighbouring shanks.
pub const DEFAULT_SHANK_PITCH: Point = Point::new(150.0, 0.0);

/// Generates a probe with `num_shank` identical shanks.
///
/// Every shank is built from `layout`; shank `i` is translated by
/// `i * shank_pitch` before all shanks are merged with
/// [`combine_probes`]. The joined outline is kept.
///
/// # Errors
///
/// Returns [`crate::probe::ProbeError::EmptyProbeList`] when `num_shank` is
/// zero, or any error from [`generate_multi_columns_probe`].
#[allow(clippy::cast_precision_loss)] // shank counts are tiny
pub fn generate_multi_shank(
    num_shank: usize,
    shank_pitch: Point,
    layout: &ColumnLayout,
) -> ProbeResult<Probe> {
    let shanks = (0..num_shank)
        .map(|index| {
            let mut shank = generate_multi_columns_probe(layout)?;
            shank.translate(shank_pitch * index as f64);
            Ok(shank)
        })
        .collect::<ProbeResult<Vec<_>>>()?;

    let probe = combine_probes(&shanks, true)?;
    debug!(
        shanks = num_shank,
        contacts = probe.contact_count(),
        "Generated multi-shank probe"
    );
    Ok(probe)
}
