//! Tetrodes: four contacts on a circle.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::probe::{ContactShape, Point, Probe, ProbeResult, Unit};

/// Default tetrode radius.
pub const DEFAULT_TETRODE_RADIUS: f64 = 10.0;

/// Radius of each tetrode contact.
const TETRODE_CONTACT_RADIUS: f64 = 6.0;

/// Generates a tetrode of radius `r`.
///
/// Four circular contacts (radius 6) sit at 0°, 90°, 180° and 270° on a
/// circle of radius `r` centred on the origin. No outline is created.
///
/// # Errors
///
/// Never fails for the fixed contact shape; the `Result` matches the other
/// generators.
pub fn generate_tetrode(r: f64) -> ProbeResult<Probe> {
    let positions = (0..4u8).map(|quarter| {
        let phi = f64::from(quarter) * FRAC_PI_2;
        Point::new(phi.cos(), phi.sin()) * r
    });

    let mut probe = Probe::new(Unit::Micrometre);
    probe.set_contacts(
        positions,
        ContactShape::Circle {
            radius: TETRODE_CONTACT_RADIUS,
        },
    )?;

    debug!(radius = r, "Generated tetrode");
    Ok(probe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetrode_has_four_contacts_on_circle() {
        let probe = generate_tetrode(DEFAULT_TETRODE_RADIUS).unwrap();
        assert_eq!(probe.contact_count(), 4);
        for p in probe.positions() {
            assert!((p.norm() - 10.0).abs() < 1e-9);
        }
        assert!(probe.shapes().all(|s| s == ContactShape::Circle { radius: 6.0 }));
        assert!(probe.planar_contour.is_none());
    }

    #[test]
    fn tetrode_angles() {
        let probe = generate_tetrode(5.0).unwrap();
        let expected = [(5.0, 0.0), (0.0, 5.0), (-5.0, 0.0), (0.0, -5.0)];
        for (p, (x, y)) in probe.positions().zip(expected) {
            assert!((p.x - x).abs() < 1e-9);
            assert!((p.y - y).abs() < 1e-9);
        }
    }
}
