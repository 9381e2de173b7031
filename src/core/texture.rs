//! Texture grid planning: lay a flat record buffer out as a square-ish 2D
//! grid and zero-pad the tail so it fills the rectangle. The GL upload
//! itself lives in the wasm layer; this half is pure and tested natively.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

/// Dimensions chosen for a record buffer packed into a 2D texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureLayout {
    pub width: usize,
    pub height: usize,
    /// Scalar channels per record, 1..=4 (maps to R/RG/RGB/RGBA).
    pub components: usize,
}

impl TextureLayout {
    /// Number of records the grid can hold, padding cells included.
    pub fn record_capacity(&self) -> usize {
        self.width * self.height
    }

    pub fn float_capacity(&self) -> usize {
        self.record_capacity() * self.components
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureLayoutError {
    /// Buffer length is not a multiple of the component count.
    LengthMismatch { len: usize, components: usize },
    /// Component count outside 1..=4.
    InvalidComponents(usize),
}

impl fmt::Display for TextureLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureLayoutError::LengthMismatch { len, components } => {
                write!(f, "buffer length {len} is not a multiple of {components} components")
            }
            TextureLayoutError::InvalidComponents(components) => {
                write!(f, "invalid component count {components}, expected 1..=4")
            }
        }
    }
}

impl std::error::Error for TextureLayoutError {}

/// Pick the smallest square-ish grid that holds every record of a flat
/// buffer of `len` floats with `components` floats per record.
pub fn plan_layout(len: usize, components: usize) -> Result<TextureLayout, TextureLayoutError> {
    if !(1..=4).contains(&components) {
        return Err(TextureLayoutError::InvalidComponents(components));
    }
    if len % components != 0 {
        return Err(TextureLayoutError::LengthMismatch { len, components });
    }
    let count = len / components;
    let width = (count as f64).sqrt().ceil() as usize;
    let height = if width == 0 { 0 } else { count.div_ceil(width) };
    Ok(TextureLayout { width, height, components })
}

/// Zero-pad `data` out to the layout's full grid area. Returns the input
/// unchanged when the grid fits exactly. Padding cells are never drawn;
/// the draw call only covers the true record count.
pub fn pad_records<'a>(data: &'a [f32], layout: &TextureLayout) -> Cow<'a, [f32]> {
    let capacity = layout.float_capacity();
    if capacity == data.len() {
        return Cow::Borrowed(data);
    }
    debug!(
        records = data.len() / layout.components,
        padded = layout.record_capacity(),
        "padding data texture"
    );
    let mut padded = vec![0.0; capacity];
    padded[..data.len()].copy_from_slice(data);
    Cow::Owned(padded)
}
