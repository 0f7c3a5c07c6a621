//! Canvas2D renderer - paints the wheel onto an HTML5 canvas.

use fridgewheel_core::draw::{BoxStyle, FontWeight, TextAlign, TextStyle, Transform2D};
use fridgewheel_core::{Canvas, Color, Point, Size, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "'Segoe UI', sans-serif";

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {e:?}"))?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn circle_path(&self, center: Point, radius: f32) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                TAU,
            )
            .ok();
    }
}

impl Canvas for Canvas2DRenderer {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.circle_path(center, radius);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(f64::from(width));
        self.ctx.stroke();
    }

    fn draw_slice(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: &BoxStyle,
    ) {
        let (cx, cy) = (f64::from(center.x), f64::from(center.y));
        self.ctx.begin_path();
        self.ctx.move_to(cx, cy);
        self.ctx
            .arc(
                cx,
                cy,
                f64::from(radius),
                f64::from(start_angle),
                f64::from(end_angle),
            )
            .ok();
        self.ctx.close_path();

        if let Some(fill) = style.fill {
            self.ctx.set_fill_style_str(&fill.to_css());
            self.ctx.fill();
        }
        if let Some(stroke) = &style.stroke {
            self.ctx.set_stroke_style_str(&stroke.color.to_css());
            self.ctx.set_line_width(f64::from(stroke.width));
            self.ctx.stroke();
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.ctx.save();
        self.ctx.set_font(&font_css(style));
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_fill_style_str(&style.color.to_css());
        if let Some(shadow) = &style.shadow {
            self.ctx.set_shadow_color(&shadow.color.to_css());
            self.ctx.set_shadow_blur(f64::from(shadow.blur));
        }
        self.ctx
            .fill_text(text, f64::from(position.x), f64::from(position.y))
            .ok();
        self.ctx.restore();
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let [a, b, c, d, e, f] = transform.matrix;
        self.ctx.save();
        self.ctx
            .transform(
                f64::from(a),
                f64::from(b),
                f64::from(c),
                f64::from(d),
                f64::from(e),
                f64::from(f),
            )
            .ok();
    }

    fn pop_transform(&mut self) {
        self.ctx.restore();
    }
}

impl Surface for Canvas2DRenderer {
    fn size(&self) -> Size {
        Size::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

fn font_css(style: &TextStyle) -> String {
    let weight = match style.weight {
        FontWeight::Normal => "normal",
        FontWeight::Bold => "bold",
    };
    format!("{weight} {}px {FONT_FAMILY}", style.size)
}
