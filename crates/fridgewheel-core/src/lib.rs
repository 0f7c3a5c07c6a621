//! Core of Fridge Wheel: the spinning selection wheel.
//!
//! This crate is host-independent. It provides:
//! - Geometric and color primitives: [`Point`], [`Size`], [`Color`]
//! - Drawing abstractions: [`Canvas`], [`Surface`], [`RecordingCanvas`]
//! - Frame scheduling: [`FrameScheduler`], [`ManualScheduler`]
//! - Easing: [`ease_out_quart`], [`Tween`]
//! - The wheel itself: [`Wheel`], with [`winner_index`] mapping a rotation
//!   angle to the segment under the pointer
//! - Configuration: [`WheelConfig`]

pub mod animation;
pub mod canvas;
mod color;
pub mod config;
pub mod draw;
mod geometry;
pub mod scheduler;
pub mod wheel;

pub use animation::{ease_out_quart, Tween};
pub use canvas::{Canvas, RecordingCanvas, Surface};
pub use color::{Color, ColorParseError};
pub use config::{ConfigError, SpinConfig, WheelConfig, WheelStyle};
pub use draw::{BoxStyle, DrawCommand, FontWeight, StrokeStyle, TextAlign, TextStyle, Transform2D};
pub use geometry::{Point, Size};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use wheel::{winner_index, FrameOutcome, SpinCallback, SpinPlan, Wheel, POINTER_ANGLE};
