//! Fridge Wheel: photos of your fridge in, a spun-for meal and its recipe out.
//!
//! The wheel itself lives in `fridgewheel-core` and is re-exported here.
//! This crate adds the chat prompts and response parsing behind the meal
//! flow, plus the browser bindings.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { WheelApp, MealFlow } from './fridgewheel.js';
//!
//! async function main() {
//!     await init();
//!     const flow = new MealFlow();
//!     const wheel = new WheelApp('wheel');
//!     wheel.set_segments(await flow.suggest_meals('eggs, rice, spring onion'));
//!     wheel.spin(async (meal) => {
//!         document.getElementById('recipe').innerHTML = await flow.fetch_recipe_html(meal);
//!     });
//! }
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::needless_pass_by_value,
    clippy::future_not_send,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    unreachable_pub
)]

pub use fridgewheel_core::*;

pub mod browser;
pub mod chat;
pub mod config;
pub mod credentials;
pub mod markdown;
pub mod meals;
pub mod prompts;

#[cfg(target_arch = "wasm32")]
pub use browser::{Canvas2DRenderer, MealFlow, RafScheduler, WheelApp};

pub use chat::{ApiError, ChatConfig, ChatRequest, Prompt};
pub use config::FridgeConfig;
pub use credentials::{ApiKey, CredentialError, CredentialStore};
pub use markdown::render_markdown;
pub use meals::parse_meal_list;
pub use prompts::{ImageAttachment, ImageSet};
