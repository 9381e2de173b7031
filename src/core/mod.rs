//! Platform-agnostic core: point generation, texture layout and the
//! view/zoom state machine. Compiled on every target so it can be unit
//! tested on the host without a browser.

pub mod config;
pub mod generate;
pub mod point;
pub mod texture;
pub mod view;

pub use config::RenderConfig;
pub use generate::{random_points_in_disk, random_points_in_rect, RECORD_STRIDE};
pub use point::Point2D;
pub use texture::{pad_records, plan_layout, TextureLayout, TextureLayoutError};
pub use view::{frame_status, frame_view, FrameUpdate, FrameView, ShapeType, ViewState};
