use crate::core::point::Point2D;
use crate::core::view::ShapeType;

/// Everything the renderer is parameterised on. The defaults match the
/// benchmarking setup: ten million points over a 1200x800 world.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of synthetic points to generate and draw.
    pub num_points: usize,
    /// Point size range in pixels, sampled uniformly per point.
    pub point_size_min: f32,
    pub point_size_max: f32,
    /// World-space extent of the generated cloud; also the canvas size.
    pub image_size: Point2D,
    pub initial_zoom: f32,
    /// Autoplay wraps back to `initial_zoom` past this level.
    pub max_zoom: f32,
    /// Zoom change per unit of wheel deltaY.
    pub wheel_zoom_rate: f32,
    /// Zoom change per millisecond while autoplay is on.
    pub autoplay_zoom_rate: f32,
    /// Outline thickness for the lined shapes, in pixels.
    pub line_thickness: f32,
    pub shape: ShapeType,
    /// Scale point sprites with the zoom level instead of keeping a fixed
    /// pixel size.
    pub scale_points_with_zoom: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            num_points: 10_000_000,
            point_size_min: 4.0,
            point_size_max: 10.0,
            image_size: Point2D::new(1200.0, 800.0),
            initial_zoom: 1.0,
            max_zoom: 5.0,
            wheel_zoom_rate: 0.005,
            autoplay_zoom_rate: 0.001,
            line_thickness: 1.0,
            shape: ShapeType::Cycled,
            scale_points_with_zoom: false,
        }
    }
}
