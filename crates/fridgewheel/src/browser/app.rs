//! WASM entry points: the wheel widget and the meal flow.

use super::canvas2d::Canvas2DRenderer;
use super::console::init_tracing;
use super::fetch::complete;
use super::scheduler::{FrameCallback, RafScheduler};
use crate::chat::ChatConfig;
use crate::config::FridgeConfig;
use crate::credentials::{ApiKey, CredentialStore};
use crate::markdown::render_markdown;
use crate::meals::parse_meal_list;
use crate::prompts::{ingredients_prompt, meals_prompt, recipe_prompt, ImageSet};
use fridgewheel_core::{FrameOutcome, Wheel, WheelConfig};
use js_sys::{Array, Promise};
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{window, HtmlCanvasElement};

type BrowserWheel = Wheel<Canvas2DRenderer, RafScheduler>;

/// Completion callback and winning label, held until the wheel is released.
type Settled = Rc<RefCell<Option<(js_sys::Function, String)>>>;

fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Spinning wheel bound to a canvas element.
#[wasm_bindgen]
pub struct WheelApp {
    wheel: Rc<RefCell<BrowserWheel>>,
    settled: Settled,
    frame: FrameCallback,
}

#[wasm_bindgen]
impl WheelApp {
    /// Attach a wheel to the canvas with the given ID and paint it empty.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WheelApp, JsValue> {
        Self::attach(canvas_id, WheelConfig::default())
    }

    /// Like `new`, with settings from the `[wheel]` section of a TOML document.
    pub fn with_config(canvas_id: &str, toml: &str) -> Result<WheelApp, JsValue> {
        let config = FridgeConfig::from_toml_str(toml).map_err(to_js)?;
        Self::attach(canvas_id, config.wheel)
    }

    /// Replace the labels and repaint.
    pub fn set_segments(&self, labels: Vec<String>) {
        self.wheel.borrow_mut().set_segments(labels);
    }

    /// Current labels.
    pub fn segments(&self) -> Vec<String> {
        self.wheel.borrow().segments().to_vec()
    }

    /// Start a spin. `callback` receives the winning label once the wheel
    /// stops. Returns `false` when already spinning or empty.
    pub fn spin(&self, callback: js_sys::Function) -> bool {
        let settled = Rc::clone(&self.settled);
        self.wheel.borrow_mut().spin(move |label| {
            *settled.borrow_mut() = Some((callback, label.to_string()));
        })
    }

    /// Stop a running spin where it is, without a winner.
    pub fn cancel(&self) -> bool {
        self.wheel.borrow_mut().cancel_spin()
    }

    /// Whether a spin is in flight.
    pub fn spinning(&self) -> bool {
        self.wheel.borrow().is_spinning()
    }

    /// Cumulative rotation in radians.
    pub fn angle(&self) -> f64 {
        self.wheel.borrow().angle()
    }

    /// Label under the pointer right now.
    pub fn winner(&self) -> Option<String> {
        self.wheel.borrow().winner().map(str::to_string)
    }

    /// Repaint, e.g. after the canvas was resized.
    pub fn render(&self) {
        self.wheel.borrow_mut().render();
    }
}

impl WheelApp {
    fn attach(canvas_id: &str, config: WheelConfig) -> Result<Self, JsValue> {
        let window = window().ok_or("No window")?;
        let canvas = window
            .document()
            .ok_or("No document")?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| format!("Canvas '{canvas_id}' not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;

        let renderer = Canvas2DRenderer::new(canvas).map_err(|e| JsValue::from_str(&e))?;
        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let scheduler = RafScheduler::new(window, Rc::clone(&frame));
        let wheel = Rc::new(RefCell::new(Wheel::with_config(
            renderer,
            scheduler,
            Vec::<String>::new(),
            config,
        )));
        let settled: Settled = Rc::new(RefCell::new(None));

        let weak = Rc::downgrade(&wheel);
        let pending = Rc::clone(&settled);
        *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            let Some(wheel) = weak.upgrade() else {
                return;
            };
            let outcome = wheel.borrow_mut().on_frame(now);
            if !matches!(outcome, FrameOutcome::Finished { .. }) {
                return;
            }
            // The wheel is released here, so the callback may spin again.
            let taken = pending.borrow_mut().take();
            if let Some((callback, label)) = taken {
                if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&label)) {
                    warn!(?err, "spin callback threw");
                }
            }
        }));

        Ok(Self {
            wheel,
            settled,
            frame,
        })
    }
}

impl Drop for WheelApp {
    fn drop(&mut self) {
        // A queued frame must not fire into a freed closure.
        if let Ok(mut wheel) = self.wheel.try_borrow_mut() {
            wheel.cancel_spin();
        }
        self.frame.borrow_mut().take();
    }
}

/// The photo, meal and recipe requests. Each method returns a `Promise`.
#[wasm_bindgen]
pub struct MealFlow {
    chat: ChatConfig,
}

#[wasm_bindgen]
impl MealFlow {
    /// Flow using the default endpoint and model.
    #[wasm_bindgen(constructor)]
    pub fn new() -> MealFlow {
        Self {
            chat: ChatConfig::default(),
        }
    }

    /// Flow using the `[chat]` section of a TOML document.
    pub fn with_config(toml: &str) -> Result<MealFlow, JsValue> {
        let config = FridgeConfig::from_toml_str(toml).map_err(to_js)?;
        info!(model = %config.chat.model, "chat configured");
        Ok(Self { chat: config.chat })
    }

    /// Resolves to a comma-separated ingredient list for the given
    /// `data:image/...` URLs.
    pub fn find_ingredients(&self, photos: Vec<String>) -> Promise {
        let chat = self.chat.clone();
        future_to_promise(async move {
            find_ingredients(&chat, photos)
                .await
                .map(|text| JsValue::from_str(&text))
        })
    }

    /// Resolves to an array of meal names, ready for the wheel.
    pub fn suggest_meals(&self, ingredients: String) -> Promise {
        let chat = self.chat.clone();
        future_to_promise(async move {
            let meals = suggest_meals(&chat, &ingredients).await?;
            Ok(meals.into_iter().map(JsValue::from).collect::<Array>().into())
        })
    }

    /// Resolves to the recipe for `meal`, rendered to HTML.
    pub fn fetch_recipe_html(&self, meal: String) -> Promise {
        let chat = self.chat.clone();
        future_to_promise(async move {
            fetch_recipe_html(&chat, &meal)
                .await
                .map(|html| JsValue::from_str(&html))
        })
    }
}

impl Default for MealFlow {
    fn default() -> Self {
        Self::new()
    }
}

async fn find_ingredients(chat: &ChatConfig, photos: Vec<String>) -> Result<String, JsValue> {
    let mut images = ImageSet::new();
    for (i, url) in photos.into_iter().enumerate() {
        if !images.add_data_url(format!("photo-{}", i + 1), url) {
            warn!(index = i, "skipping attachment that is not an image");
        }
    }
    if images.is_empty() {
        return Err(JsValue::from_str("Add at least one photo"));
    }
    info!(photos = images.len(), "analysing photos");
    complete(chat, &CredentialStore::local(), ingredients_prompt(&images))
        .await
        .map_err(to_js)
}

async fn suggest_meals(chat: &ChatConfig, ingredients: &str) -> Result<Vec<String>, JsValue> {
    let ingredients = ingredients.trim();
    if ingredients.is_empty() {
        return Err(JsValue::from_str("Enter some ingredients first"));
    }
    let reply = complete(chat, &CredentialStore::local(), meals_prompt(ingredients))
        .await
        .map_err(to_js)?;
    let meals = parse_meal_list(&reply);
    if meals.is_empty() {
        return Err(JsValue::from_str("Could not read any meal ideas from the reply"));
    }
    info!(count = meals.len(), "meal ideas ready");
    Ok(meals)
}

async fn fetch_recipe_html(chat: &ChatConfig, meal: &str) -> Result<String, JsValue> {
    let reply = complete(chat, &CredentialStore::local(), recipe_prompt(meal))
        .await
        .map_err(to_js)?;
    Ok(render_markdown(&reply))
}

/// Render recipe markdown to HTML.
#[wasm_bindgen]
pub fn render_recipe(markdown: &str) -> String {
    render_markdown(markdown)
}

/// Validate and save the API key.
#[wasm_bindgen]
pub fn save_api_key(raw: &str) -> Result<(), JsValue> {
    let key = ApiKey::parse(raw).map_err(to_js)?;
    CredentialStore::local().store_key(&key).map_err(to_js)
}

/// Whether a usable API key is saved.
#[wasm_bindgen]
pub fn has_api_key() -> bool {
    CredentialStore::local().stored_key().is_some()
}

/// Forget the saved API key.
#[wasm_bindgen]
pub fn clear_api_key() -> Result<(), JsValue> {
    CredentialStore::local().clear().map_err(to_js)
}

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_tracing("info");
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
