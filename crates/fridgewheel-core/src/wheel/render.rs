//! Painting the wheel onto a [`Canvas`].

use super::geometry::{arc_width, screen_start_angle};
use super::label::{label_font_size, truncate_label};
use crate::canvas::Canvas;
use crate::config::{default_palette, WheelStyle};
use crate::draw::{BoxStyle, FontWeight, Shadow, StrokeStyle, TextAlign, TextStyle, Transform2D};
use crate::{Color, Point, Size};

/// Wheel radius for a surface of `size`: half the shorter side minus the
/// rim inset, never negative.
#[must_use]
pub fn wheel_radius(size: Size, style: &WheelStyle) -> f32 {
    (size.min_side() / 2.0 - style.rim_inset).max(0.0)
}

/// Paint one frame: glow ring, slices with labels, hub.
///
/// With no segments only the rings and hub are drawn.
pub fn paint<C: Canvas + ?Sized>(
    canvas: &mut C,
    size: Size,
    segments: &[String],
    angle: f64,
    style: &WheelStyle,
) {
    let center = size.center();
    let radius = wheel_radius(size, style);

    canvas.clear();
    canvas.stroke_circle(
        center,
        radius + style.glow_width / 2.0,
        style.glow_color,
        style.glow_width,
    );

    match arc_width(segments.len()) {
        None => {
            canvas.stroke_circle(center, radius, style.hub_stroke, style.border_width);
        }
        Some(arc) => paint_slices(canvas, center, radius, segments, angle, arc, style),
    }

    canvas.fill_circle(center, style.hub_radius, style.hub_color);
    canvas.stroke_circle(
        center,
        style.hub_radius,
        style.hub_stroke,
        style.hub_stroke_width,
    );
}

#[allow(clippy::cast_possible_truncation)]
fn paint_slices<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    radius: f32,
    segments: &[String],
    angle: f64,
    arc: f64,
    style: &WheelStyle,
) {
    let n = segments.len();
    let font_size = label_font_size(radius, n, style);
    let text_style = TextStyle {
        size: font_size,
        color: style.label_color,
        weight: FontWeight::Bold,
        align: TextAlign::Right,
        shadow: Some(Shadow {
            color: Color::rgba8(0, 0, 0, 0.6),
            blur: 4.0,
        }),
    };
    let border = StrokeStyle::new(style.border_color, style.border_width);
    let fallback;
    let palette: &[Color] = if style.palette.is_empty() {
        fallback = default_palette();
        &fallback
    } else {
        &style.palette
    };

    for (i, label) in segments.iter().enumerate() {
        let start = screen_start_angle(angle, i, n);
        let fill = palette[i % palette.len()];
        canvas.draw_slice(
            center,
            radius,
            start as f32,
            (start + arc) as f32,
            &BoxStyle::fill(fill).with_stroke(border),
        );

        let mid = (start + arc / 2.0) as f32;
        canvas.push_transform(
            Transform2D::rotate(mid).then(&Transform2D::translate(center.x, center.y)),
        );
        canvas.draw_text(
            &truncate_label(label, style.label_max_chars),
            Point::new(radius - style.label_inset, font_size / 3.0),
            &text_style,
        );
        canvas.pop_transform();
    }
}
