pub mod animator;
pub mod config;
pub mod error;
pub mod particle;
pub mod recording;
pub mod surface;
pub mod window;

pub use animator::{StarField, StarFieldGroup};
pub use config::StarFieldConfig;
pub use error::Error;
pub use particle::Particle;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, LineCap, Rgba, Size};
pub use window::WindowSurface;
