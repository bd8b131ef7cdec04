// src/models/viewport.rs
//
// The container viewport and the providers that report it.
// Layout code only ever sees a Viewport value, so tests can drive
// regeneration without a real window.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Source of the current container size.
pub trait ViewportProvider {
    fn viewport(&self) -> Viewport;
}

// The live window provider. The overlay container occupies a configured
// fraction of the window, so the host app feeds resize events in here.
pub struct ScaledViewport {
    window_width: f32,
    window_height: f32,
    width_fraction: f32,
    height_fraction: f32,
}

impl ScaledViewport {
    pub fn new(
        window_width: f32,
        window_height: f32,
        width_fraction: f32,
        height_fraction: f32,
    ) -> Self {
        Self {
            window_width,
            window_height,
            width_fraction,
            height_fraction,
        }
    }

    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_width = width;
        self.window_height = height;
    }
}

impl ViewportProvider for ScaledViewport {
    fn viewport(&self) -> Viewport {
        Viewport::new(
            self.window_width * self.width_fraction,
            self.window_height * self.height_fraction,
        )
    }
}

// Fixed-size provider for tests and headless use.
pub struct FixedViewport(pub Viewport);

impl ViewportProvider for FixedViewport {
    fn viewport(&self) -> Viewport {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_viewport() {
        let mut provider = ScaledViewport::new(1000.0, 800.0, 0.7, 0.8);
        assert_eq!(provider.viewport(), Viewport::new(700.0, 640.0));

        provider.set_window_size(500.0, 400.0);
        assert_eq!(provider.viewport(), Viewport::new(350.0, 320.0));
    }

    #[test]
    fn test_fixed_viewport() {
        let provider = FixedViewport(Viewport::new(640.0, 480.0));
        assert_eq!(provider.viewport(), Viewport::new(640.0, 480.0));
        // Restartable: reading the provider twice reports the same size
        assert_eq!(provider.viewport(), provider.viewport());
    }

    #[test]
    fn test_empty_viewport() {
        assert!(Viewport::new(0.0, 480.0).is_empty());
        assert!(Viewport::new(640.0, 0.0).is_empty());
        assert!(!Viewport::new(640.0, 480.0).is_empty());
    }
}
