//! Star field animation bound to drawing surfaces.
//!
//! A [`StarField`] owns one binding: a surface, the particles drifting across
//! it and whether its frame loop is running. The host drives the loop by
//! calling [`StarField::frame`] from its per-frame callback and scheduling the
//! next frame for as long as it returns `true`.
//!
//! ```
//! use star_field::{RecordingSurface, StarField};
//!
//! let mut field = StarField::new();
//! field.start(Some(RecordingSurface::new(400.0, 200.0)));
//! assert_eq!(field.particles().len(), 75);
//! while field.frame() {
//!     if field.frames_drawn() == 3 {
//!         field.stop();
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{particle_count, StarFieldConfig, MAX_ALPHA, MIN_ALPHA, STAR_SIZE, STROKE_COLOR};
use crate::particle::Particle;
use crate::surface::{DrawSurface, LineCap, Size};

pub struct StarField<S, R = StdRng> {
    rng: R,
    surface: Option<S>,
    size: Size,
    particles: Vec<Particle>,
    running: bool,
    frames_drawn: u64,
}

impl<S: DrawSurface> StarField<S, StdRng> {
    pub fn new() -> Self {
        Self::with_config(StarFieldConfig::default())
    }

    pub fn with_config(config: StarFieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<S: DrawSurface> Default for StarField<S, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DrawSurface, R: Rng> StarField<S, R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            surface: None,
            size: Size::default(),
            particles: Vec::new(),
            running: false,
            frames_drawn: 0,
        }
    }

    /// Binds `surface`, regenerates the particles for its size and starts
    /// the frame loop. A missing surface leaves the animator untouched.
    pub fn start(&mut self, surface: Option<S>) {
        let surface = match surface {
            Some(surface) => surface,
            None => {
                debug!("No surface to start the star field on");
                return;
            }
        };
        self.surface = Some(surface);
        self.apply_layout();

        let count = particle_count(self.size.width, self.size.height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::new(&mut self.rng, self.size);
            self.particles.push(particle);
        }
        self.running = true;
        self.frames_drawn = 0;
        debug!(
            "Started star field: {} stars on {}x{}",
            count, self.size.width, self.size.height
        );
    }

    /// Picks up the surface's new layout size and scatters the existing
    /// particles over it.
    pub fn resize(&mut self) {
        if self.surface.is_none() {
            debug!("No surface to resize the star field on");
            return;
        }
        self.apply_layout();
        for particle in &mut self.particles {
            particle.reposition(&mut self.rng, self.size);
        }
        debug!("Resized star field to {}x{}", self.size.width, self.size.height);
    }

    /// Stops the frame loop and releases the binding, handing the surface
    /// back. Returns `None` if already stopped.
    pub fn stop(&mut self) -> Option<S> {
        if self.running {
            debug!("Stopped star field after {} frames", self.frames_drawn);
        }
        self.running = false;
        self.particles.clear();
        self.surface.take()
    }

    /// Runs one update and render. Returns whether another frame should be
    /// scheduled.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => {
                self.running = false;
                return false;
            }
        };

        for particle in &mut self.particles {
            particle.step(self.size);
        }

        surface.clear_rect(0.0, 0.0, self.size.width, self.size.height);
        for particle in &self.particles {
            surface.set_line_width(STAR_SIZE * particle.z);
            surface.set_line_cap(LineCap::Round);
            surface.set_global_alpha(self.rng.gen_range(MIN_ALPHA..=MAX_ALPHA));
            surface.set_stroke_color(STROKE_COLOR);
            surface.begin_path();
            surface.move_to(particle.x, particle.y);
            surface.line_to(particle.x, particle.y);
            surface.stroke();
        }

        self.frames_drawn += 1;
        trace!("Drew star field frame {}", self.frames_drawn);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Drawable size the particles are currently laid out on.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    fn apply_layout(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            self.size = surface.layout_size();
            surface.set_drawable_size(self.size);
        }
    }
}

/// Independent star fields keyed by surface, e.g. one per window.
pub struct StarFieldGroup<K, S> {
    config: StarFieldConfig,
    fields: HashMap<K, StarField<S>>,
    bound: u64,
}

impl<K: Eq + Hash, S: DrawSurface> StarFieldGroup<K, S> {
    pub fn new(config: StarFieldConfig) -> Self {
        Self {
            config,
            fields: HashMap::new(),
            bound: 0,
        }
    }

    /// Starts a star field on `surface` under `key`, replacing whatever was
    /// bound there.
    pub fn bind(&mut self, key: K, surface: Option<S>) {
        if surface.is_none() {
            debug!("No surface to bind a star field to");
            return;
        }
        let config = StarFieldConfig {
            seed: self.config.seed.map(|seed| seed.wrapping_add(self.bound)),
        };
        self.bound += 1;

        let mut field = StarField::with_config(config);
        field.start(surface);
        self.fields.insert(key, field);
    }

    pub fn resize(&mut self, key: &K) {
        if let Some(field) = self.fields.get_mut(key) {
            field.resize();
        }
    }

    /// Stops the field under `key`. It stays in the group, stopped.
    pub fn stop(&mut self, key: &K) -> Option<S> {
        self.fields.get_mut(key).and_then(StarField::stop)
    }

    pub fn frame(&mut self, key: &K) -> bool {
        self.fields.get_mut(key).map_or(false, StarField::frame)
    }

    /// Runs a frame on every running field and returns how many drew.
    pub fn frame_all(&mut self) -> usize {
        self.fields.values_mut().map(StarField::frame).filter(|drew| *drew).count()
    }

    pub fn unbind(&mut self, key: &K) -> Option<S> {
        self.fields.remove(key).and_then(|mut field| field.stop())
    }

    pub fn get(&self, key: &K) -> Option<&StarField<S>> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut StarField<S>> {
        self.fields.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
