//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

use fridgewheel::browser::app::{has_api_key, render_recipe, save_api_key};
use fridgewheel::browser::{Canvas2DRenderer, Storage, WheelApp};
use fridgewheel::{FrameOutcome, ManualScheduler, Size, SpinPlan, Surface, Wheel};

fn canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(320);
    canvas.set_height(320);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

// ============================================================================
// Storage
// ============================================================================

#[wasm_bindgen_test]
fn test_local_storage_roundtrip() {
    let storage = Storage::local();
    storage.set("fw_test", "value").unwrap();
    assert_eq!(storage.get("fw_test").as_deref(), Some("value"));
    storage.remove("fw_test").unwrap();
    assert!(storage.get("fw_test").is_none());
}

#[wasm_bindgen_test]
fn test_api_key_rejected_then_saved() {
    assert!(save_api_key("not-a-key").is_err());
    save_api_key(" sk-test-key ").unwrap();
    assert!(has_api_key());
}

// ============================================================================
// Canvas2D
// ============================================================================

#[wasm_bindgen_test]
fn test_renderer_reports_canvas_size() {
    let renderer = Canvas2DRenderer::new(canvas("size-canvas")).unwrap();
    assert_eq!(renderer.size(), Size::square(320.0));
}

#[wasm_bindgen_test]
fn test_wheel_paints_through_canvas2d() {
    let renderer = Canvas2DRenderer::new(canvas("paint-canvas")).unwrap();
    let mut wheel = Wheel::new(renderer, ManualScheduler::new(), ["Soup", "Salad"]);
    assert!(wheel.spin_with_plan(SpinPlan::new(std::f64::consts::PI, 100.0), |_| {}));

    let mut last = FrameOutcome::Idle;
    while wheel.scheduler_mut().take_pending().is_some() {
        let now = wheel.scheduler_mut().advance(16.0);
        last = wheel.on_frame(now);
    }
    assert_eq!(last, FrameOutcome::Finished { index: 1 });
}

// ============================================================================
// WheelApp
// ============================================================================

#[wasm_bindgen_test]
fn test_wheel_app_spin_lifecycle() {
    canvas("app-canvas");
    let app = WheelApp::new("app-canvas").unwrap();
    let noop = js_sys::Function::new_no_args("");

    assert!(!app.spin(noop.clone()));
    app.set_segments(vec!["Tacos".to_string(), "Curry".to_string()]);
    assert_eq!(app.segments(), ["Tacos", "Curry"]);

    assert!(app.spin(noop.clone()));
    assert!(app.spinning());
    assert!(!app.spin(noop));
    assert!(app.cancel());
    assert!(!app.spinning());
}

#[wasm_bindgen_test]
fn test_wheel_app_missing_canvas() {
    assert!(WheelApp::new("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn test_render_recipe_html() {
    assert_eq!(render_recipe("## Pho"), "<h3>Pho</h3>\n");
}
