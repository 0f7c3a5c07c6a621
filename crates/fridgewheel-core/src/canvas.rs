//! Drawing surfaces.
//!
//! [`Canvas`] is the set of 2D primitives the wheel paints with, [`Surface`]
//! adds the intrinsic size the wheel lays itself out in. [`RecordingCanvas`]
//! records frames as [`DrawCommand`]s for tests and replay.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle, TextStyle, Transform2D};
use crate::{Color, Point, Size};

/// 2D drawing primitives.
pub trait Canvas {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    /// Draw a pie slice between two angles (radians, clockwise from +x).
    fn draw_slice(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: &BoxStyle,
    );

    /// Draw text anchored on its baseline.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a transform applied to everything drawn until the matching pop.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

/// A canvas with an intrinsic pixel size.
pub trait Surface: Canvas {
    /// Size of the drawable area in pixels.
    fn size(&self) -> Size;
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Transforms are recorded as [`DrawCommand::Group`]s wrapping everything
/// drawn between a push and its pop.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    size: Size,
    commands: Vec<DrawCommand>,
    open_groups: Vec<(Transform2D, Vec<DrawCommand>)>,
    frames: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas with zero size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording canvas with the given size.
    #[must_use]
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Get the recorded draw commands since the last clear.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of top-level recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of times the canvas has been cleared, i.e. frames started.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.open_groups.len()
    }

    /// All text drawn in the current frame, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for cmd in &self.commands {
            cmd.visit(&Transform2D::identity(), &mut |c, _| {
                if let DrawCommand::Text { content, .. } = c {
                    out.push(content.as_str());
                }
            });
        }
        out
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.open_groups.clear();
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: BoxStyle::stroke(StrokeStyle::new(color, width)),
        });
    }

    fn draw_slice(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        style: &BoxStyle,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            style: *style,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let outer = std::mem::take(&mut self.commands);
        self.open_groups.push((transform, outer));
    }

    fn pop_transform(&mut self) {
        if let Some((transform, outer)) = self.open_groups.pop() {
            let children = std::mem::replace(&mut self.commands, outer);
            self.commands.push(DrawCommand::Group {
                children,
                transform,
            });
        }
    }
}

impl Surface for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FontWeight;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.size(), Size::ZERO);
    }

    #[test]
    fn test_with_size() {
        let canvas = RecordingCanvas::with_size(Size::square(320.0));
        assert_eq!(canvas.size(), Size::new(320.0, 320.0));
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(50.0, 50.0), 25.0, Color::WHITE);

        match &canvas.commands()[0] {
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => {
                assert_eq!(*center, Point::new(50.0, 50.0));
                assert_eq!(*radius, 25.0);
                assert_eq!(style.fill, Some(Color::WHITE));
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_stroke_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::new(50.0, 50.0), 20.0, Color::BLACK, 3.0);

        match &canvas.commands()[0] {
            DrawCommand::Circle { radius, style, .. } => {
                assert_eq!(*radius, 20.0);
                assert!(style.fill.is_none());
                let stroke = style.stroke.unwrap();
                assert_eq!(stroke.color, Color::BLACK);
                assert_eq!(stroke.width, 3.0);
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_draw_slice() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_slice(
            Point::new(100.0, 100.0),
            50.0,
            0.0,
            std::f32::consts::PI,
            &BoxStyle::fill(Color::WHITE),
        );

        match &canvas.commands()[0] {
            DrawCommand::Arc {
                start_angle,
                end_angle,
                style,
                ..
            } => {
                assert_eq!(*start_angle, 0.0);
                assert!((end_angle - std::f32::consts::PI).abs() < 0.001);
                assert_eq!(style.fill, Some(Color::WHITE));
            }
            _ => panic!("Expected Arc command"),
        }
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 14.0,
            weight: FontWeight::Bold,
            ..Default::default()
        };
        canvas.draw_text("Pasta", Point::new(10.0, 20.0), &style);

        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                style: text_style,
                ..
            } => {
                assert_eq!(content, "Pasta");
                assert_eq!(text_style.weight, FontWeight::Bold);
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_transform_groups_nest() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::WHITE);
        canvas.push_transform(Transform2D::translate(5.0, 5.0));
        canvas.draw_text("inner", Point::ORIGIN, &TextStyle::default());
        assert_eq!(canvas.transform_depth(), 1);
        canvas.pop_transform();

        assert_eq!(canvas.transform_depth(), 0);
        assert_eq!(canvas.command_count(), 2);
        match &canvas.commands()[1] {
            DrawCommand::Group {
                children,
                transform,
            } => {
                assert_eq!(children.len(), 1);
                assert_eq!(transform.matrix[4], 5.0);
            }
            _ => panic!("Expected Group command"),
        }
        assert_eq!(canvas.texts(), vec!["inner"]);
    }

    #[test]
    fn test_pop_empty_transform_stack() {
        let mut canvas = RecordingCanvas::new();
        canvas.pop_transform();
        assert_eq!(canvas.transform_depth(), 0);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear_starts_new_frame() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::WHITE);
        canvas.push_transform(Transform2D::identity());
        canvas.clear();

        assert!(canvas.is_empty());
        assert_eq!(canvas.transform_depth(), 0);
        assert_eq!(canvas.frame_count(), 1);
    }
}
