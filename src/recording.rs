//! A headless [`DrawSurface`] that keeps every call it receives.

use crate::surface::{DrawSurface, LineCap, Rgba, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetDrawableSize(Size),
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetGlobalAlpha(f64),
    SetStrokeColor(Rgba),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
}

/// A stroked point, with the pen state it was stroked with.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub cap: LineCap,
    pub alpha: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    layout_size: Size,
    drawable_size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            layout_size: Size::new(width, height),
            drawable_size: Size::default(),
            commands: Vec::new(),
        }
    }

    /// Changes the layout box, as a host would before notifying a resize.
    pub fn set_layout_size(&mut self, width: f64, height: f64) {
        self.layout_size = Size::new(width, height);
    }

    pub fn drawable_size(&self) -> Size {
        self.drawable_size
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Replays the recorded commands and returns the single-point strokes made
    /// since the last clear.
    pub fn dots(&self) -> Vec<Dot> {
        let mut dots = Vec::new();
        let mut width = 1.0;
        let mut cap = LineCap::default();
        let mut alpha = 1.0;
        let mut color = Rgba::BLACK;
        let mut path: Vec<(f64, f64)> = Vec::new();

        for command in &self.commands {
            match *command {
                DrawCommand::ClearRect { .. } => dots.clear(),
                DrawCommand::SetLineWidth(w) => width = w,
                DrawCommand::SetLineCap(c) => cap = c,
                DrawCommand::SetGlobalAlpha(a) => alpha = a,
                DrawCommand::SetStrokeColor(c) => color = c,
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo(x, y) | DrawCommand::LineTo(x, y) => path.push((x, y)),
                DrawCommand::Stroke => {
                    if let [(x, y), rest @ ..] = path.as_slice() {
                        if rest.iter().all(|&(px, py)| px == *x && py == *y) {
                            dots.push(Dot {
                                x: *x,
                                y: *y,
                                width,
                                cap,
                                alpha,
                                color,
                            });
                        }
                    }
                }
                DrawCommand::SetDrawableSize(_) => {}
            }
        }
        dots
    }
}

impl DrawSurface for RecordingSurface {
    fn layout_size(&self) -> Size {
        self.layout_size
    }

    fn set_drawable_size(&mut self, size: Size) {
        self.drawable_size = size;
        self.commands.push(DrawCommand::SetDrawableSize(size));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.commands.push(DrawCommand::SetLineCap(cap));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_follow_pen_state() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.set_line_width(2.0);
        surface.set_line_cap(LineCap::Round);
        surface.set_global_alpha(0.75);
        surface.set_stroke_color(Rgba::WHITE);
        surface.begin_path();
        surface.move_to(3.0, 4.0);
        surface.line_to(3.0, 4.0);
        surface.stroke();

        assert_eq!(
            surface.dots(),
            vec![Dot {
                x: 3.0,
                y: 4.0,
                width: 2.0,
                cap: LineCap::Round,
                alpha: 0.75,
                color: Rgba::WHITE,
            }]
        );
    }

    #[test]
    fn clear_drops_earlier_dots_and_lines_are_not_dots() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        surface.line_to(1.0, 1.0);
        surface.stroke();
        surface.clear_rect(0.0, 0.0, 10.0, 10.0);
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        surface.line_to(5.0, 1.0);
        surface.stroke();

        assert!(surface.dots().is_empty());
        assert_eq!(surface.take_commands().len(), 9);
        assert!(surface.commands().is_empty());
    }
}
