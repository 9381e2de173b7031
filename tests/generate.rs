#![cfg(not(target_arch = "wasm32"))]

use pointfield_wasm::core::{
    random_points_in_disk, random_points_in_rect, Point2D, RECORD_STRIDE,
};

/// Deterministic uniform source in [0, 1) so the property tests are stable.
fn seeded_uniform(seed: u64) -> impl FnMut() -> f32 {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 40) as f32) / (1u64 << 24) as f32
    }
}

#[test]
fn buffer_length_matches_count() {
    let center = Point2D::new(0.0, 0.0);
    for count in [0, 1, 7, 1000] {
        let rect = random_points_in_rect(
            center,
            Point2D::new(10.0, 10.0),
            1.0,
            2.0,
            count,
            seeded_uniform(1),
        );
        assert_eq!(rect.len(), count * RECORD_STRIDE);

        let disk = random_points_in_disk(center, 5.0, 1.0, 2.0, count, seeded_uniform(2));
        assert_eq!(disk.len(), count * RECORD_STRIDE);
    }
}

#[test]
fn rect_points_stay_inside_extent() {
    let center = Point2D::new(600.0, 400.0);
    let extent = Point2D::new(1200.0, 800.0);
    let data = random_points_in_rect(center, extent, 4.0, 10.0, 5000, seeded_uniform(3));

    for record in data.chunks_exact(RECORD_STRIDE) {
        assert!((record[0] - center.x).abs() <= extent.x / 2.0);
        assert!((record[1] - center.y).abs() <= extent.y / 2.0);
    }
}

#[test]
fn disk_points_stay_inside_radius() {
    let center = Point2D::new(-3.0, 7.5);
    let radius = 40.0_f32;
    let data = random_points_in_disk(center, radius, 1.0, 2.0, 5000, seeded_uniform(4));

    for record in data.chunks_exact(RECORD_STRIDE) {
        let dx = record[0] - center.x;
        let dy = record[1] - center.y;
        assert!(dx * dx + dy * dy <= radius * radius * (1.0 + 1e-5));
    }
}

#[test]
fn sizes_and_color_values_stay_in_range() {
    let data = random_points_in_rect(
        Point2D::new(0.0, 0.0),
        Point2D::new(1.0, 1.0),
        4.0,
        10.0,
        5000,
        seeded_uniform(5),
    );

    for record in data.chunks_exact(RECORD_STRIDE) {
        let size = record[2];
        let color = record[3];
        assert!((4.0..=10.0).contains(&size), "size {size} out of range");
        assert!((0.0..=1.0).contains(&color), "color value {color} out of range");
    }
}
