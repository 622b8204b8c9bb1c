//! WebAssembly bindings for sortviz.
//!
//! Exposes state generation and the rendering rules to a browser front end.
//! States cross the boundary as JSON strings in the same camelCase shape the
//! front end stores them in.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { generate_states, color_class, bar_dimensions } from 'sortviz';
//!
//! await init();
//!
//! const states = JSON.parse(generate_states('quick', new Uint32Array([5, 3, 8, 1])));
//! const cls = color_class('quick', JSON.stringify(states[3]), 0, true);
//! const dims = JSON.parse(bar_dimensions(states[0].array.length, 800));
//! ```

use wasm_bindgen::prelude::*;

use crate::algorithms::{self, AlgorithmId, AlgorithmState, Value};
use crate::mode3d;
use crate::output::frame_to_svg;
use crate::render::{self, FrameView};
use crate::theme::Theme;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_algorithm(algorithm: &str) -> Result<AlgorithmId, JsValue> {
    algorithm.parse().map_err(js_err)
}

fn parse_state(state_json: &str) -> Result<AlgorithmState, JsValue> {
    serde_json::from_str(state_json).map_err(js_err)
}

// ============================================================================
// State Generation
// ============================================================================

/// Generate the full state sequence as a JSON array.
///
/// # Errors
///
/// Returns an error for an unknown algorithm id.
#[wasm_bindgen]
pub fn generate_states(algorithm: &str, array: &[Value]) -> Result<String, JsValue> {
    let id = parse_algorithm(algorithm)?;
    serde_json::to_string(&algorithms::generate(id, array)).map_err(js_err)
}

/// The algorithm registry as a JSON array of `{id, name, category}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[wasm_bindgen]
pub fn registry_json() -> Result<String, JsValue> {
    serde_json::to_string(algorithms::registry()).map_err(js_err)
}

// ============================================================================
// Rendering Rules
// ============================================================================

/// CSS class of bar `index` in a JSON-encoded state.
///
/// # Errors
///
/// Returns an error for an unknown algorithm or malformed state.
#[wasm_bindgen]
pub fn color_class(
    algorithm: &str,
    state_json: &str,
    index: usize,
    dark_mode: bool,
) -> Result<String, JsValue> {
    let id = parse_algorithm(algorithm)?;
    let state = parse_state(state_json)?;
    let token = render::color_for(&state, index, id, Theme::from_dark_mode(dark_mode));
    Ok(token.css_class().to_string())
}

/// Bar width and gap for `array_length` bars as JSON `{width, gap}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[wasm_bindgen]
pub fn bar_dimensions(array_length: usize, container_width: u32) -> Result<String, JsValue> {
    serde_json::to_string(&render::bar_dimensions(array_length, container_width)).map_err(js_err)
}

/// Full frame view-model of a JSON-encoded state, as JSON.
///
/// # Errors
///
/// Returns an error for an unknown algorithm or malformed state.
#[wasm_bindgen]
pub fn frame_json(
    algorithm: &str,
    state_json: &str,
    dark_mode: bool,
    container_width: u32,
) -> Result<String, JsValue> {
    let frame = build_frame(algorithm, state_json, dark_mode, container_width)?;
    serde_json::to_string(&frame).map_err(js_err)
}

/// SVG markup of a JSON-encoded state.
///
/// # Errors
///
/// Returns an error for an unknown algorithm or malformed state.
#[wasm_bindgen]
pub fn frame_svg(
    algorithm: &str,
    state_json: &str,
    dark_mode: bool,
    container_width: u32,
    chart_height: u32,
) -> Result<String, JsValue> {
    let frame = build_frame(algorithm, state_json, dark_mode, container_width)?;
    Ok(frame_to_svg(&frame, chart_height).render())
}

fn build_frame(
    algorithm: &str,
    state_json: &str,
    dark_mode: bool,
    container_width: u32,
) -> Result<FrameView, JsValue> {
    let id = parse_algorithm(algorithm)?;
    let state = parse_state(state_json)?;
    Ok(FrameView::build(
        &state,
        id,
        Theme::from_dark_mode(dark_mode),
        container_width,
    ))
}

// ============================================================================
// 3D Mode
// ============================================================================

/// Whether `array` may be shown in 3D.
#[wasm_bindgen]
#[must_use]
pub fn is_eligible_3d(array: &[Value]) -> bool {
    mode3d::is_eligible(array)
}

/// Warning text shown when 3D is refused.
#[wasm_bindgen]
#[must_use]
pub fn requirements_warning() -> String {
    mode3d::REQUIREMENTS_WARNING.to_string()
}
