//! Integration tests for the probe generators.
//!
//! These tests check the geometric properties every generated probe must
//! have, through the public API only.

use probe_layout::generator::{
    generate_dummy_probe, generate_dummy_probe_group, generate_linear_probe,
    generate_multi_columns_probe, generate_multi_shank, generate_tetrode, ColumnLayout,
    ContactsPerColumn,
};
use probe_layout::probe::{
    combine_probes, Bounds, ContactShape, Outline, Point, ProbeError, ProbeType, ShapeKind,
};

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

// =============================================================================
// Multi-column / linear
// =============================================================================

#[test]
fn test_multi_columns_contact_count_and_x() {
    for (columns, per_column, xpitch) in [(1, 5, 0.0), (3, 10, 20.0), (4, 7, 16.0)] {
        let layout = ColumnLayout {
            num_columns: columns,
            num_contact_per_column: ContactsPerColumn::Uniform(per_column),
            xpitch,
            ..ColumnLayout::default()
        };
        let probe = generate_multi_columns_probe(&layout).expect("Failed to generate");
        assert_eq!(probe.contact_count(), columns * per_column);

        for (column, chunk) in probe.contacts.chunks(per_column).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = column as f64 * xpitch;
            assert!(chunk.iter().all(|c| close(c.position.x, expected)));
        }
    }
}

#[test]
fn test_linear_probe_sixteen_by_twenty() {
    let probe = generate_linear_probe(16, 20.0, ContactShape::default()).expect("Failed to generate");
    let ys: Vec<f64> = probe.positions().map(|p| p.y).collect();
    let expected: Vec<f64> = (0..16).map(|j| f64::from(j) * 20.0).collect();

    assert_eq!(probe.contact_count(), 16);
    assert!(probe.positions().all(|p| close(p.x, 0.0)));
    assert!(ys.iter().zip(&expected).all(|(a, b)| close(*a, *b)));
    assert!(close(ys[15], 300.0));
}

#[test]
fn test_outline_contains_every_contact() {
    for probe_type in [ProbeType::Tip, ProbeType::Rect] {
        let layout = ColumnLayout {
            outline: Outline {
                probe_type,
                margin: 15.0,
            },
            ..ColumnLayout::default()
        };
        let probe = generate_multi_columns_probe(&layout).expect("Failed to generate");
        let outline = Bounds::of(probe.planar_contour.clone().expect("No outline"))
            .expect("Empty outline");

        for p in probe.positions() {
            assert!(p.x - outline.min_x >= 15.0 - TOLERANCE);
            assert!(outline.max_x - p.x >= 15.0 - TOLERANCE);
            assert!(p.y - outline.min_y >= 15.0 - TOLERANCE);
            assert!(outline.max_y - p.y >= 15.0 - TOLERANCE);
        }
    }
}

#[test]
fn test_unsupported_shape_tag() {
    let err = ContactShape::from_tag("triangle", Some(5.0), None, None).unwrap_err();
    assert_eq!(err, ProbeError::unsupported_shape("triangle"));
    assert!(err.to_string().contains("triangle"));
}

// =============================================================================
// Tetrode
// =============================================================================

#[test]
fn test_tetrode_geometry() {
    let probe = generate_tetrode(10.0).expect("Failed to generate");
    assert_eq!(probe.contact_count(), 4);
    assert!(probe.positions().all(|p| close(p.norm(), 10.0)));
    assert!(probe
        .shapes()
        .all(|s| s == ContactShape::Circle { radius: 6.0 }));
}

// =============================================================================
// Dummy probes
// =============================================================================

#[test]
fn test_dummy_probe_annotations() {
    let probe = generate_dummy_probe(ShapeKind::Circle).expect("Failed to generate");
    assert_eq!(probe.contact_count(), 32);
    assert_eq!(probe.annotations["manufacturer"], "me");
    assert!(probe.contact_annotations["quality"]
        .iter()
        .all(|q| q.as_f64() == Some(1000.0)));
}

#[test]
fn test_dummy_probe_group_offset() {
    let group = generate_dummy_probe_group().expect("Failed to generate");
    assert_eq!(group.len(), 2);
    assert_eq!(group.contact_count(), 64);

    let untranslated = generate_dummy_probe(ShapeKind::Rect).expect("Failed to generate");
    for (moved, original) in group.probes[1].positions().zip(untranslated.positions()) {
        assert!(close(moved.x, original.x + 150.0));
        assert!(close(moved.y, original.y - 50.0));
    }
}

// =============================================================================
// Multi-shank
// =============================================================================

#[test]
fn test_multi_shank_sixty_contacts() {
    let layout = ColumnLayout {
        num_columns: 3,
        num_contact_per_column: ContactsPerColumn::Uniform(10),
        ..ColumnLayout::default()
    };
    let probe =
        generate_multi_shank(2, Point::new(150.0, 0.0), &layout).expect("Failed to generate");
    assert_eq!(probe.contact_count(), 2 * 3 * 10);

    let (shank0, shank1) = probe.contacts.split_at(30);
    for (a, b) in shank0.iter().zip(shank1) {
        assert!(close(b.position.x, a.position.x + 150.0));
        assert!(close(b.position.y, a.position.y));
    }
}

#[test]
fn test_multi_shank_matches_manual_combination() {
    let layout = ColumnLayout::default();
    let pitch = Point::new(100.0, 25.0);

    let generated = generate_multi_shank(3, pitch, &layout).expect("Failed to generate");

    let shanks: Vec<_> = (0..3)
        .map(|i| {
            let mut shank = generate_multi_columns_probe(&layout).expect("Failed to generate");
            shank.translate(pitch * f64::from(i));
            shank
        })
        .collect();
    let manual = combine_probes(&shanks, true).expect("Failed to combine");

    assert_eq!(generated, manual);
}

#[test]
fn test_generators_are_deterministic() {
    let a = generate_dummy_probe_group().expect("Failed to generate");
    let b = generate_dummy_probe_group().expect("Failed to generate");
    assert_eq!(a, b);
}
