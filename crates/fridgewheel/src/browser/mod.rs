//! Browser runtime for the Fridge Wheel page.
//!
//! Binds the wheel to an HTML canvas and `requestAnimationFrame`, and runs
//! the photo to meal to recipe flow over `fetch`.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod scheduler;

// Cross-platform modules
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::{MealFlow, WheelApp};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
#[cfg(target_arch = "wasm32")]
pub use scheduler::RafScheduler;
pub use storage::{Storage, StorageError};
