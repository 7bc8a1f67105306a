use bui::{
    rect,
    renderer::Renderer,
    resolution_buffer::ResolutionBuffer,
    ellipse::*,
};
use log::{debug, warn};
use winit::dpi::PhysicalSize;

use crate::surface::{DrawSurface, LineCap, Rgba, Size};

/// Draws round-capped points as `bui` ellipses on a winit window.
///
/// Only degenerate round-capped segments are drawn, one ellipse each; any
/// other path is dropped. Drawing is queued until [`WindowSurface::present`].
pub struct WindowSurface {
    ellipse_renderer: EllipseRenderer,
    resolution_buffer: ResolutionBuffer,
    capacity: usize,
    layout_size: PhysicalSize<u32>,
    drawable_size: Size,
    resolution_dirty: bool,
    ellipses: Vec<EllipseBuffer>,
    line_width: f64,
    line_cap: LineCap,
    alpha: f64,
    color: Rgba,
    path: Vec<(f64, f64)>,
}

impl WindowSurface {
    pub fn new(renderer: &Renderer, size: PhysicalSize<u32>, capacity: usize) -> Self {
        let resolution_buffer = ResolutionBuffer::new(renderer.device());
        let ellipse_renderer = EllipseRenderer::new(
            renderer.device(),
            renderer.config().format,
            &resolution_buffer,
            capacity as wgpu::BufferAddress,
        );
        Self {
            ellipse_renderer,
            resolution_buffer,
            capacity,
            layout_size: size,
            drawable_size: Size::default(),
            resolution_dirty: true,
            ellipses: Vec::with_capacity(capacity),
            line_width: 1.0,
            line_cap: LineCap::default(),
            alpha: 1.0,
            color: Rgba::BLACK,
            path: Vec::new(),
        }
    }

    /// Records the window's new inner size. The star field picks it up on
    /// its next resize.
    pub fn set_layout_size(&mut self, size: PhysicalSize<u32>) {
        self.layout_size = size;
    }

    /// Drops every queued ellipse, so the next present shows only black.
    pub fn clear(&mut self) {
        self.ellipses.clear();
    }

    /// Uploads the queued ellipses and records a pass that clears to black
    /// and draws them.
    pub fn present(&mut self, renderer: &Renderer, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        if self.resolution_dirty {
            self.resolution_buffer.set(
                &[self.drawable_size.width as f32, self.drawable_size.height as f32],
                renderer.queue(),
            );
            self.resolution_dirty = false;
        }
        self.ellipse_renderer.set_ellipse_buffer(renderer.queue(), self.ellipses.as_slice());
        self.ellipse_renderer.render_all(encoder, view, wgpu::LoadOp::Clear(wgpu::Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }));
    }

    fn push_dot(&mut self, x: f64, y: f64) {
        if self.ellipses.len() >= self.capacity {
            warn!("Ellipse buffer full, dropping star at ({}, {})", x, y);
            return;
        }
        let Size { width, height } = self.drawable_size;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let alpha = self.alpha.clamp(0.0, 1.0) as f32 * self.color.a;
        self.ellipses.push(EllipseDescriptor {
            sizing: rect::FillAspect {
                placement_area: rect::SizeAndCenter {
                    sx: (self.line_width / width * 2.0) as f32,
                    sy: (self.line_width / height * 2.0) as f32,
                    cx: (x / width * 2.0 - 1.0) as f32,
                    cy: (1.0 - y / height * 2.0) as f32,
                },
                centerx: 0.0,
                centery: 0.0,
                resx: width as f32,
                resy: height as f32,
                aspect: 1.0,
            }.into(),
            // Premultiplied alpha.
            r: self.color.r * alpha,
            g: self.color.g * alpha,
            b: self.color.b * alpha,
            a: alpha,
        }.into());
    }
}

impl DrawSurface for WindowSurface {
    fn layout_size(&self) -> Size {
        Size::new(self.layout_size.width as f64, self.layout_size.height as f64)
    }

    fn set_drawable_size(&mut self, size: Size) {
        debug!("Window surface drawable size {}x{}", size.width, size.height);
        self.drawable_size = size;
        self.resolution_dirty = true;
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let covers = x <= 0.0
            && y <= 0.0
            && x + width >= self.drawable_size.width
            && y + height >= self.drawable_size.height;
        if covers {
            self.clear();
        } else {
            debug!("Ignoring partial clear at ({}, {}) {}x{}", x, y, width, height);
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn stroke(&mut self) {
        if self.line_cap != LineCap::Round {
            return;
        }
        let point = match self.path.as_slice() {
            [first, rest @ ..] if rest.iter().all(|p| p == first) => *first,
            _ => return,
        };
        self.push_dot(point.0, point.1);
    }
}
