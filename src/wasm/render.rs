//! GL setup and the per-frame render loop.
//!
//! The point buffer is generated and uploaded once; each animation frame
//! only advances the view state, pushes uniforms and issues one draw call.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlUniformLocation,
};

use super::webgl;
use crate::core::{frame_status, random_points_in_rect, RenderConfig, ViewState, RECORD_STRIDE};

const POSITION_TEXTURE_UNIT: u32 = 0;

/// Uniform locations resolved once after link. Locations the linker
/// optimised away stay `None`; setting them is then a no-op.
struct ShaderSlots {
    num_vertices: Option<WebGlUniformLocation>,
    zoom_level: Option<WebGlUniformLocation>,
    line_thickness: Option<WebGlUniformLocation>,
    shape_type: Option<WebGlUniformLocation>,
    scale_points_with_zoom: Option<WebGlUniformLocation>,
    frame_view_min: Option<WebGlUniformLocation>,
    frame_view_max: Option<WebGlUniformLocation>,
    position_texture: Option<WebGlUniformLocation>,
}

impl ShaderSlots {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        Self {
            num_vertices: gl.get_uniform_location(program, "numVertices"),
            zoom_level: gl.get_uniform_location(program, "zoomLevel"),
            line_thickness: gl.get_uniform_location(program, "lineThickness"),
            shape_type: gl.get_uniform_location(program, "shapeType"),
            scale_points_with_zoom: gl.get_uniform_location(program, "scalePointsWithZoom"),
            frame_view_min: gl.get_uniform_location(program, "frameViewMin"),
            frame_view_max: gl.get_uniform_location(program, "frameViewMax"),
            position_texture: gl.get_uniform_location(program, "positionTexture"),
        }
    }
}

fn js_uniform() -> f32 {
    js_sys::Math::random() as f32
}

/// One-time setup, then hand control to requestAnimationFrame.
pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let config = RenderConfig::default();
    let width = config.image_size.x as u32;
    let height = config.image_size.y as u32;

    canvas.set_width(width);
    canvas.set_height(height);
    canvas.style().set_property("width", &format!("{width}px"))?;
    canvas.style().set_property("height", &format!("{height}px"))?;

    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or("WebGL2 not supported")?
        .dyn_into()?;
    gl.viewport(0, 0, width as i32, height as i32);

    if let Ok(range) = gl.get_parameter(GL::ALIASED_POINT_SIZE_RANGE) {
        if let Ok(range) = range.dyn_into::<js_sys::Float32Array>() {
            info!(
                min = range.get_index(0),
                max = range.get_index(1),
                "point sprite pixel size range"
            );
        }
    }

    let program = webgl::link_program(
        &gl,
        include_str!("shaders/vert.glsl"),
        include_str!("shaders/frag.glsl"),
    )?;
    gl.use_program(Some(&program));
    let slots = ShaderSlots::locate(&gl, &program);

    let center = config.image_size * 0.5;
    let points = random_points_in_rect(
        center,
        config.image_size,
        config.point_size_min,
        config.point_size_max,
        config.num_points,
        js_uniform,
    );
    let num_points = points.len() / RECORD_STRIDE;
    let (texture, layout) =
        webgl::create_texture_from_array(&gl, &points, POSITION_TEXTURE_UNIT, RECORD_STRIDE)?;
    info!(
        num_points,
        texture_width = layout.width,
        texture_height = layout.height,
        "uploaded point texture"
    );
    drop(points);

    // The texture never changes after upload, so these are set once.
    gl.uniform1i(slots.num_vertices.as_ref(), num_points as i32);
    gl.uniform1i(slots.position_texture.as_ref(), POSITION_TEXTURE_UNIT as i32);

    let state = Rc::new(RefCell::new(ViewState::new(&config)));

    let wheel_closure = {
        let state = state.clone();
        let config = config.clone();
        Closure::wrap(Box::new(move |ev: web_sys::WheelEvent| {
            state.borrow_mut().apply_wheel(ev.delta_y(), &config);
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("wheel", wheel_closure.as_ref().unchecked_ref())?;
    wheel_closure.forget();

    let click_closure = {
        let state = state.clone();
        Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let on = state.borrow_mut().toggle_autoplay();
            debug!(autoplay = on, "autoplay toggled");
        }) as Box<dyn FnMut(_)>)
    };
    canvas.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())?;
    click_closure.forget();

    let readout = window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?
        .get_element_by_id("frame-time");

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |t: f64| {
        let update = state.borrow_mut().advance(t, &config);

        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.uniform2f(slots.frame_view_min.as_ref(), update.view.min.x, update.view.min.y);
        gl.uniform2f(slots.frame_view_max.as_ref(), update.view.max.x, update.view.max.y);
        gl.uniform1f(slots.zoom_level.as_ref(), update.zoom);
        gl.uniform1f(slots.line_thickness.as_ref(), config.line_thickness);
        gl.uniform1i(
            slots.scale_points_with_zoom.as_ref(),
            config.scale_points_with_zoom as i32,
        );
        gl.uniform1i(slots.shape_type.as_ref(), update.shape_index);

        gl.active_texture(GL::TEXTURE0 + POSITION_TEXTURE_UNIT);
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        // Draw the true point count; texture padding cells are never drawn.
        gl.draw_arrays(GL::POINTS, 0, num_points as i32);
        gl.finish();

        if let Some(readout) = &readout {
            readout.set_text_content(Some(&frame_status(num_points, update.dt_ms)));
        }

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut(f64)>));

    window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}
