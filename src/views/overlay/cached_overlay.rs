// src/views/overlay/cached_overlay.rs

// Shape descriptors from the layout generator are converted to draw
// commands in screen coordinates and cached here. The cache is rebuilt
// from scratch whenever the viewport or grid type changes.
//
// Types in this module:
// DrawCommand, DrawStyle, and CachedOverlay

use nannou::prelude::*;

use crate::models::{GridSettings, ShapeDescriptor, Viewport};
use crate::services::GridLayout;

// A single pre-processed drawing operation: a closed outline in nannou
// screen coordinates, stroke-only.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Outline { points: Vec<Point2> },
}

impl DrawCommand {
    fn from_shape(shape: &ShapeDescriptor, viewport: &Viewport) -> Self {
        let points = match shape {
            ShapeDescriptor::Polygon { points } => points
                .iter()
                .map(|(x, y)| to_screen(*x, *y, viewport))
                .collect(),
            ShapeDescriptor::Rect { .. } => shape
                .rect_corners(viewport.width, viewport.height)
                .into_iter()
                .flatten()
                .map(|(x, y)| to_screen(x, y, viewport))
                .collect(),
        };
        DrawCommand::Outline { points }
    }

    fn draw(&self, draw: &Draw, style: &DrawStyle) {
        match self {
            DrawCommand::Outline { points } => {
                if points.is_empty() {
                    return;
                }
                // Close the outline by returning to the first vertex.
                let closed = points.iter().cloned().chain(points.first().cloned());
                draw.polyline()
                    .weight(style.stroke_weight)
                    .points(closed)
                    .color(style.color);
            }
        }
    }
}

// Container space has its origin at the top-left corner; nannou's origin
// is the window center with y up.
fn to_screen(x: f32, y: f32, viewport: &Viewport) -> Point2 {
    pt2(x - viewport.width / 2.0, viewport.height / 2.0 - y)
}

#[derive(Debug, Clone)]
pub struct DrawStyle {
    pub color: Rgba<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: rgba(0.88, 0.9, 0.94, 0.6),
            stroke_weight: 3.0,
        }
    }
}

pub struct CachedOverlay {
    commands: Vec<DrawCommand>,
}

impl CachedOverlay {
    pub fn build(viewport: &Viewport, settings: &GridSettings) -> Self {
        let layout = GridLayout::new(*viewport, settings.grid_type);
        let commands = layout
            .shapes()
            .map(|shape| DrawCommand::from_shape(&shape, viewport))
            .collect();
        Self { commands }
    }

    pub fn draw(&self, draw: &Draw, style: &DrawStyle) {
        for command in &self.commands {
            command.draw(draw, style);
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
