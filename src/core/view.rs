//! View state machine: centre + zoom, the per-frame advance step, and the
//! input transitions. The step is a plain function of (state, timestamp)
//! so every transition is checkable on the host.

use crate::core::config::RenderConfig;
use crate::core::point::Point2D;

/// World-space rectangle currently visible on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub min: Point2D,
    pub max: Point2D,
}

/// How each point sprite is shaded. The numeric values are the shader's
/// shape selector; `Cycled` is resolved CPU-side before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    BoxFilled,
    BoxLined,
    CircleFilled,
    CircleLined,
    /// Step through the four concrete shapes, advancing every 2 seconds.
    Cycled,
}

impl ShapeType {
    const CYCLE_PERIOD_MS: f64 = 2000.0;

    /// Shader selector index for this shape at timestamp `t_ms`.
    pub fn resolve(self, t_ms: f64) -> i32 {
        match self {
            ShapeType::BoxFilled => 0,
            ShapeType::BoxLined => 1,
            ShapeType::CircleFilled => 2,
            ShapeType::CircleLined => 3,
            ShapeType::Cycled => ((t_ms / Self::CYCLE_PERIOD_MS) as i64).rem_euclid(4) as i32,
        }
    }
}

/// Visible rectangle for a given centre and zoom: size = imageSize / zoom,
/// centred on `center`.
pub fn frame_view(center: Point2D, zoom: f32, image_size: Point2D) -> FrameView {
    let cropped = image_size * (1.0 / zoom);
    FrameView {
        min: center - cropped * 0.5,
        max: center + cropped * 0.5,
    }
}

/// Everything the render step needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub dt_ms: f64,
    pub view: FrameView,
    pub zoom: f32,
    pub shape_index: i32,
}

/// Mutable view state: centre, zoom, autoplay flag and the previous frame
/// timestamp (absent before the first frame).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub center: Point2D,
    pub zoom: f32,
    pub autoplay: bool,
    last_timestamp: Option<f64>,
}

impl ViewState {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            center: config.image_size * 0.5,
            zoom: config.initial_zoom,
            autoplay: false,
            last_timestamp: None,
        }
    }

    /// Wheel input: scrolling down (positive deltaY) zooms out. Manual zoom
    /// has no upper clamp, only a floor at zero.
    pub fn apply_wheel(&mut self, delta_y: f64, config: &RenderConfig) {
        self.zoom = (self.zoom - config.wheel_zoom_rate * delta_y as f32).max(0.0);
    }

    /// Click input: toggle autoplay. Returns the new flag.
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        self.autoplay
    }

    /// Advance one frame to timestamp `t_ms`. dt is zero on the very first
    /// frame. Autoplay advances zoom at a fixed rate and wraps back to the
    /// initial zoom once it passes the configured maximum.
    pub fn advance(&mut self, t_ms: f64, config: &RenderConfig) -> FrameUpdate {
        let dt_ms = self.last_timestamp.map_or(0.0, |prev| t_ms - prev);
        self.last_timestamp = Some(t_ms);

        if self.autoplay {
            self.zoom += config.autoplay_zoom_rate * dt_ms as f32;
            if self.zoom > config.max_zoom {
                self.zoom = config.initial_zoom;
            }
        }

        FrameUpdate {
            dt_ms,
            view: frame_view(self.center, self.zoom, config.image_size),
            zoom: self.zoom,
            shape_index: config.shape.resolve(t_ms),
        }
    }
}

/// Human-readable per-frame status line for the on-page readout.
pub fn frame_status(num_points: usize, dt_ms: f64) -> String {
    let fps = if dt_ms > 0.0 { 1000.0 / dt_ms } else { 0.0 };
    format!(
        "{:.1} million data points. Frame time: {:.2}; FPS: {:.2}",
        num_points as f64 / 1e6,
        dt_ms,
        fps
    )
}
