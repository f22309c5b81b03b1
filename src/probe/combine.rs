//! Merging several probes into one multi-shank probe.

use tracing::debug;

use crate::probe::error::{ProbeError, ProbeResult};
use crate::probe::{Point, Probe};

/// Height of the vertices added above the ends of a joined contour.
const CONTOUR_LEAD_HEIGHT: f64 = 40.0;

/// Merges `probes` into a single probe.
///
/// Contacts are concatenated in input order and every contact records the
/// index of the probe it came from in `shank_ids`. When `connect_shape` is
/// set and every input has an outline, the outlines are joined into one
/// polygon, with an extra vertex above each end so the shanks hang from a
/// common base. Annotations are not carried over.
///
/// # Errors
///
/// - [`ProbeError::EmptyProbeList`] if `probes` is empty.
/// - [`ProbeError::IncompatibleProbes`] if units or dimensions differ.
pub fn combine_probes(probes: &[Probe], connect_shape: bool) -> ProbeResult<Probe> {
    let first = probes.first().ok_or(ProbeError::EmptyProbeList)?;

    for (index, probe) in probes.iter().enumerate().skip(1) {
        if probe.si_units != first.si_units || probe.ndim != first.ndim {
            return Err(ProbeError::incompatible(format!(
                "probe {index} is {}-D in {}, probe 0 is {}-D in {}",
                probe.ndim, probe.si_units, first.ndim, first.si_units
            )));
        }
    }

    let mut combined = Probe::new(first.si_units);
    combined.ndim = first.ndim;

    let mut shank_ids = Vec::new();
    for (index, probe) in probes.iter().enumerate() {
        combined.contacts.extend_from_slice(&probe.contacts);
        shank_ids.extend(std::iter::repeat(index).take(probe.contact_count()));
    }
    combined.shank_ids = Some(shank_ids);

    if connect_shape {
        let contours: Option<Vec<&Vec<Point>>> =
            probes.iter().map(|p| p.planar_contour.as_ref()).collect();
        if let Some(contours) = contours {
            let vertices: Vec<Point> = contours.into_iter().flatten().copied().collect();
            if let (Some(&head), Some(&tail)) = (vertices.first(), vertices.last()) {
                let lift = Point::new(0.0, CONTOUR_LEAD_HEIGHT);
                let mut joined = Vec::with_capacity(vertices.len() + 2);
                joined.push(head + lift);
                joined.extend(vertices);
                joined.push(tail + lift);
                combined.set_planar_contour(joined);
            }
        }
    }

    debug!(
        shanks = probes.len(),
        contacts = combined.contact_count(),
        "Combined probes"
    );

    Ok(combined)
}
