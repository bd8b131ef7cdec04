pub mod geometry;
pub mod preset;
pub mod settings;
pub mod viewport;

pub use geometry::ShapeDescriptor;
pub use preset::PresetBook;
pub use settings::{GridSettings, GridType};
pub use viewport::{FixedViewport, ScaledViewport, Viewport, ViewportProvider};
