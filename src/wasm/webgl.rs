//! Thin WebGL2 resource helpers: shader program construction and packing
//! of flat float buffers into 2D textures.

use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlTexture};

use crate::core::{pad_records, plan_layout, TextureLayout};

pub fn compile_shader(gl: &GL, shader_type: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl
        .create_shader(shader_type)
        .ok_or("failed to create shader object")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown shader compile error".into());
        error!(%log, "shader compilation failed");
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&log))
    }
}

pub fn link_program(gl: &GL, vert_src: &str, frag_src: &str) -> Result<WebGlProgram, JsValue> {
    let vert = compile_shader(gl, GL::VERTEX_SHADER, vert_src)?;
    let frag = compile_shader(gl, GL::FRAGMENT_SHADER, frag_src)?;

    let program = gl.create_program().ok_or("failed to create program object")?;
    gl.attach_shader(&program, &vert);
    gl.attach_shader(&program, &frag);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown program link error".into());
        error!(%log, "program link failed");
        gl.delete_program(Some(&program));
        Err(JsValue::from_str(&log))
    }
}

/// Pack `data` into a square-ish float texture on the given texture unit,
/// with nearest filtering and edge-clamped wrapping so any off-grid read
/// degrades to edge values. Leaves the unit active and the texture bound;
/// the caller re-binds with the same unit at draw time.
pub fn create_texture_from_array(
    gl: &GL,
    data: &[f32],
    unit: u32,
    components: usize,
) -> Result<(WebGlTexture, TextureLayout), JsValue> {
    let layout =
        plan_layout(data.len(), components).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let padded = pad_records(data, &layout);

    let (internal_format, format) = match components {
        1 => (GL::R32F, GL::RED),
        2 => (GL::RG32F, GL::RG),
        3 => (GL::RGB32F, GL::RGB),
        _ => (GL::RGBA32F, GL::RGBA),
    };

    let texture = gl.create_texture().ok_or("failed to create texture")?;
    gl.active_texture(GL::TEXTURE0 + unit);
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));

    let pixels = js_sys::Float32Array::from(padded.as_ref());
    gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_array_buffer_view(
        GL::TEXTURE_2D,
        0,
        internal_format as i32,
        layout.width as i32,
        layout.height as i32,
        0,
        format,
        GL::FLOAT,
        Some(&pixels),
    )?;

    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::NEAREST as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::NEAREST as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);

    Ok((texture, layout))
}
