// src/views/overlay/overlay_instance.rs
//
// The OverlayInstance is the updating entity for the grid overlay.
// It owns the only mutable state in the system: the current settings,
// the viewport the cache was built for, and the cached draw commands.
// Recomputation happens on mount and whenever the provider reports a
// new viewport; style-only changes never touch the layout.

use nannou::prelude::*;

use crate::models::{GridSettings, GridType, Viewport, ViewportProvider};
use crate::services::{parse_color, with_opacity};
use crate::views::overlay::cached_overlay::{CachedOverlay, DrawStyle};

pub struct OverlayInstance {
    settings: GridSettings,
    viewport: Viewport,
    cache: CachedOverlay,
    style: DrawStyle,
    base_color: Rgb<f32>,
    pub visible: bool,
}

impl OverlayInstance {
    pub fn new(provider: &impl ViewportProvider, settings: GridSettings) -> Self {
        let viewport = provider.viewport();
        let cache = CachedOverlay::build(&viewport, &settings);

        let mut instance = Self {
            settings,
            viewport,
            cache,
            style: DrawStyle::default(),
            base_color: rgb(0.88, 0.9, 0.94),
            visible: true,
        };
        instance.rebuild_style();
        instance
    }

    /// Regenerate the layout if the provider reports a new container size.
    pub fn sync(&mut self, provider: &impl ViewportProvider) {
        let viewport = provider.viewport();
        if viewport != self.viewport {
            self.viewport = viewport;
            self.rebuild_cache();
        }
    }

    pub fn set_grid_type(&mut self, grid_type: GridType) {
        if self.settings.grid_type == grid_type {
            return;
        }
        self.settings.grid_type = grid_type;
        self.rebuild_cache();
        // Square cells render thinner, so the weight depends on the mode.
        self.rebuild_style();
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        self.settings.thickness = thickness;
        self.rebuild_style();
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.settings.opacity = opacity;
        self.rebuild_style();
    }

    pub fn set_color(&mut self, spec: &str) {
        self.settings.color = spec.to_string();
        self.rebuild_style();
    }

    /// Replace the whole style at once (preset application).
    pub fn apply_settings(&mut self, settings: GridSettings) {
        let grid_changed = settings.grid_type != self.settings.grid_type;
        self.settings = settings;
        if grid_changed {
            self.rebuild_cache();
        }
        self.rebuild_style();
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn shape_count(&self) -> usize {
        self.cache.len()
    }

    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn draw(&self, draw: &Draw) {
        if !self.visible {
            return;
        }
        self.cache.draw(draw, &self.style);
    }

    fn rebuild_cache(&mut self) {
        self.cache = CachedOverlay::build(&self.viewport, &self.settings);
    }

    fn rebuild_style(&mut self) {
        match parse_color(&self.settings.color) {
            Some(color) => self.base_color = color,
            None => println!(
                "Unrecognized color '{}', keeping current color",
                self.settings.color
            ),
        }

        let stroke_weight = match self.settings.grid_type {
            GridType::Hexagon => self.settings.thickness,
            // Square cells pack a denser mesh of edges
            GridType::Square => self.settings.thickness / 3.0,
        };

        self.style = DrawStyle {
            color: with_opacity(self.base_color, self.settings.opacity),
            stroke_weight,
        };
    }
}
