//! Synthetic point-cloud generation.
//!
//! Each record is four floats: position x, position y, sprite size and a
//! colormap value in [0, 1]. The uniform source is passed in by the caller
//! (`js_sys::Math::random` in the browser, a seeded generator in tests) so
//! this module stays host-testable.

use tracing::debug;

use crate::core::point::Point2D;

/// Floats per point record: x, y, size, colormap value.
pub const RECORD_STRIDE: usize = 4;

/// Uniformly sample `count` points over the rectangle centred on `center`
/// with the given per-axis extent.
pub fn random_points_in_rect(
    center: Point2D,
    extent: Point2D,
    size_min: f32,
    size_max: f32,
    count: usize,
    mut uniform: impl FnMut() -> f32,
) -> Vec<f32> {
    let mut data = Vec::with_capacity(count * RECORD_STRIDE);
    for _ in 0..count {
        data.push(center.x + (uniform() - 0.5) * extent.x);
        data.push(center.y + (uniform() - 0.5) * extent.y);
        data.push(uniform() * (size_max - size_min) + size_min);
        data.push(uniform());
    }
    debug!(count, "generated rectangular point buffer");
    data
}

/// Uniformly sample `count` points over the disk of the given radius
/// centred on `center`, by rejection from the enclosing square.
pub fn random_points_in_disk(
    center: Point2D,
    radius: f32,
    size_min: f32,
    size_max: f32,
    count: usize,
    mut uniform: impl FnMut() -> f32,
) -> Vec<f32> {
    let mut data = Vec::with_capacity(count * RECORD_STRIDE);
    for _ in 0..count {
        // Acceptance probability is pi/4 per draw, so this terminates with
        // probability 1 at ~1.27 expected iterations; no retry cap.
        let (x, y) = loop {
            let x = uniform() * 2.0 - 1.0;
            let y = uniform() * 2.0 - 1.0;
            if x * x + y * y < 1.0 {
                break (x, y);
            }
        };
        data.push(center.x + x * radius);
        data.push(center.y + y * radius);
        data.push(uniform() * (size_max - size_min) + size_min);
        data.push(uniform());
    }
    debug!(count, "generated disk point buffer");
    data
}
