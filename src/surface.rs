#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// A 2D canvas-like surface supplied by the host.
///
/// Coordinates are in surface pixels with the origin in the top left corner.
/// Pen state (width, cap, alpha, colour) persists between strokes the way a
/// canvas context does.
pub trait DrawSurface {
    /// Current size of the surface's layout box, which may differ from the
    /// drawable size until [`DrawSurface::set_drawable_size`] is called.
    fn layout_size(&self) -> Size;

    fn set_drawable_size(&mut self, _size: Size) {}

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_stroke_color(&mut self, color: Rgba);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn layout_size(&self) -> Size {
        (**self).layout_size()
    }

    fn set_drawable_size(&mut self, size: Size) {
        (**self).set_drawable_size(size)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height)
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        (**self).set_line_cap(cap)
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        (**self).set_global_alpha(alpha)
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        (**self).set_stroke_color(color)
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn stroke(&mut self) {
        (**self).stroke()
    }
}
