// src/services/layout.rs
//
// The grid layout generator. Pure geometry: a Viewport and a grid type in,
// a finite sequence of ShapeDescriptors out. The layout is regenerated
// wholesale on every viewport change, never updated incrementally.

use std::f32::consts::PI;

use crate::models::{GridSettings, GridType, ShapeDescriptor, Viewport};

pub const SQUARE_COLUMNS: u32 = 8;
pub const SQUARE_ROWS: u32 = 7;

/// Derived hexagon radius for a container. Balances the horizontal and
/// vertical hex counts: 8 columns of width 2r across, 7 rows of height
/// r*sqrt(3) down.
pub fn hex_size(viewport: &Viewport) -> f32 {
    (viewport.width / 16.0).min(viewport.height / (7.0 * 3.0_f32.sqrt()))
}

pub struct GridLayout {
    viewport: Viewport,
    grid_type: GridType,
}

impl GridLayout {
    pub fn new(viewport: Viewport, grid_type: GridType) -> Self {
        Self {
            viewport,
            grid_type,
        }
    }

    /// Lazy pass over the layout. Each call starts a fresh iteration of
    /// the same shape set.
    pub fn shapes(&self) -> ShapeIter {
        match self.grid_type {
            GridType::Hexagon => ShapeIter::Hexagons(HexIter::new(&self.viewport)),
            GridType::Square => ShapeIter::Cells(CellIter::new()),
        }
    }

    /// Full recomputation for a viewport/settings pair.
    pub fn regenerate(viewport: Viewport, settings: &GridSettings) -> Vec<ShapeDescriptor> {
        GridLayout::new(viewport, settings.grid_type).shapes().collect()
    }
}

pub enum ShapeIter {
    Hexagons(HexIter),
    Cells(CellIter),
}

impl Iterator for ShapeIter {
    type Item = ShapeDescriptor;

    fn next(&mut self) -> Option<ShapeDescriptor> {
        match self {
            ShapeIter::Hexagons(iter) => iter.next(),
            ShapeIter::Cells(iter) => iter.next(),
        }
    }
}

// Brick-offset hexagon tiling: rows step by the hex height, columns step
// by twice the hex width, and every other emitted column is pushed down
// half a hex height. Iteration runs one step past the container bounds on
// both axes so resizing never exposes a bare edge.
pub struct HexIter {
    hex_size: f32,
    hex_width: f32,
    hex_height: f32,
    bound_x: f32,
    bound_y: f32,
    x: f32,
    y: f32,
    column: u32,
}

impl HexIter {
    fn new(viewport: &Viewport) -> Self {
        let size = hex_size(viewport);
        let hex_width = 2.0 * size;
        let hex_height = 3.0_f32.sqrt() * size;

        // A degenerate container yields no shapes rather than a stuck cursor.
        let bound_y = if size > 0.0 {
            viewport.height + hex_height
        } else {
            0.0
        };

        Self {
            hex_size: size,
            hex_width,
            hex_height,
            bound_x: viewport.width + hex_width,
            bound_y,
            x: 0.0,
            y: 0.0,
            column: 0,
        }
    }
}

impl Iterator for HexIter {
    type Item = ShapeDescriptor;

    fn next(&mut self) -> Option<ShapeDescriptor> {
        if self.y >= self.bound_y {
            return None;
        }

        let cy = if self.column % 2 == 1 {
            self.y + self.hex_height / 2.0
        } else {
            self.y
        };
        let shape = ShapeDescriptor::Polygon {
            points: hexagon_points(self.x, cy, self.hex_size),
        };

        self.x += 2.0 * self.hex_width;
        self.column += 1;
        if self.x >= self.bound_x {
            self.x = 0.0;
            self.column = 0;
            self.y += self.hex_height;
        }

        Some(shape)
    }
}

// Fixed 8x7 partition in percentages of the container.
pub struct CellIter {
    index: u32,
}

impl CellIter {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for CellIter {
    type Item = ShapeDescriptor;

    fn next(&mut self) -> Option<ShapeDescriptor> {
        if self.index >= SQUARE_COLUMNS * SQUARE_ROWS {
            return None;
        }

        let row = self.index / SQUARE_COLUMNS;
        let column = self.index % SQUARE_COLUMNS;
        self.index += 1;

        let cell_width = 100.0 / SQUARE_COLUMNS as f32;
        let cell_height = 100.0 / SQUARE_ROWS as f32;
        Some(ShapeDescriptor::Rect {
            x: cell_width * column as f32,
            y: cell_height * row as f32,
            width: cell_width,
            height: cell_height,
        })
    }
}

/// Six vertices at i*60 degrees around a center, radius `size`.
fn hexagon_points(cx: f32, cy: f32, size: f32) -> [(f32, f32); 6] {
    let mut points = [(0.0, 0.0); 6];
    for (i, point) in points.iter_mut().enumerate() {
        let angle = i as f32 * PI / 3.0;
        *point = (cx + size * angle.cos(), cy + size * angle.sin());
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(grid_type: GridType) -> GridSettings {
        GridSettings {
            grid_type,
            thickness: 3.0,
            color: "#ffffff".to_string(),
            opacity: 50.0,
        }
    }

    fn polygon_center(shape: &ShapeDescriptor) -> (f32, f32) {
        match shape {
            ShapeDescriptor::Polygon { points } => {
                // Vertices 0 and 3 sit at angles 0 and 180, so they
                // straddle the center exactly.
                (
                    (points[0].0 + points[3].0) / 2.0,
                    (points[0].1 + points[3].1) / 2.0,
                )
            }
            _ => panic!("expected a polygon"),
        }
    }

    #[test]
    fn test_hex_size_balances_axes() {
        // Container 700x640: the width bound wins.
        let viewport = Viewport::new(700.0, 640.0);
        assert!((hex_size(&viewport) - 43.75).abs() < 1e-3);

        // A short, wide container flips to the height bound.
        let viewport = Viewport::new(2000.0, 121.2);
        assert!((hex_size(&viewport) - 121.2 / (7.0 * 3.0_f32.sqrt())).abs() < 1e-3);
    }

    #[test]
    fn test_square_grid_is_8_by_7() {
        let shapes = GridLayout::regenerate(
            Viewport::new(1000.0, 800.0),
            &settings(GridType::Square),
        );
        assert_eq!(shapes.len(), 56);

        match &shapes[0] {
            ShapeDescriptor::Rect {
                x,
                y,
                width,
                height,
            } => {
                assert_eq!(*x, 0.0);
                assert_eq!(*y, 0.0);
                assert!((width - 12.5).abs() < 1e-3);
                assert!((height - 14.2857).abs() < 1e-3);
            }
            _ => panic!("expected a rect"),
        }

        // Percent cells don't depend on the container size.
        let other = GridLayout::regenerate(
            Viewport::new(333.0, 99.0),
            &settings(GridType::Square),
        );
        assert_eq!(shapes, other);
    }

    #[test]
    fn test_square_cells_cover_the_container() {
        let shapes = GridLayout::regenerate(
            Viewport::new(1000.0, 800.0),
            &settings(GridType::Square),
        );

        let last = shapes.last().unwrap();
        match last {
            ShapeDescriptor::Rect {
                x,
                y,
                width,
                height,
            } => {
                assert!((x + width - 100.0).abs() < 1e-3);
                assert!((y + height - 100.0).abs() < 1e-3);
            }
            _ => panic!("expected a rect"),
        }
    }

    #[test]
    fn test_hexagon_columns_are_brick_offset() {
        let viewport = Viewport::new(700.0, 640.0);
        let shapes: Vec<_> = GridLayout::new(viewport, GridType::Hexagon)
            .shapes()
            .collect();

        let size = hex_size(&viewport);
        let hex_height = 3.0_f32.sqrt() * size;

        let first = polygon_center(&shapes[0]);
        let second = polygon_center(&shapes[1]);

        assert!((first.0 - 0.0).abs() < 1e-3);
        assert!((first.1 - 0.0).abs() < 1e-3);
        // Second column: one horizontal stride over, half a hex down.
        assert!((second.0 - 4.0 * size).abs() < 1e-3);
        assert!((second.1 - hex_height / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_hexagon_centers_cover_the_container() {
        let viewport = Viewport::new(700.0, 640.0);
        let centers: Vec<(f32, f32)> = GridLayout::new(viewport, GridType::Hexagon)
            .shapes()
            .map(|shape| polygon_center(&shape))
            .collect();
        assert!(!centers.is_empty());

        let size = hex_size(&viewport);
        let hex_width = 2.0 * size;
        let hex_height = 3.0_f32.sqrt() * size;

        // Tiling must reach past the visible bounds on both axes.
        let max_x = centers.iter().map(|c| c.0).fold(f32::MIN, f32::max);
        let max_y = centers.iter().map(|c| c.1).fold(f32::MIN, f32::max);
        assert!(max_x >= viewport.width);
        assert!(max_y >= viewport.height);

        // Worst case for a visible point: midway between two column
        // strides horizontally, half a row from the nearest center
        // vertically.
        let max_gap = (hex_width.powi(2) + (hex_height / 2.0).powi(2)).sqrt() + 1e-3;
        let steps = 20;
        for i in 0..=steps {
            for j in 0..=steps {
                let px = viewport.width * i as f32 / steps as f32;
                let py = viewport.height * j as f32 / steps as f32;
                let nearest = centers
                    .iter()
                    .map(|(cx, cy)| ((px - cx).powi(2) + (py - cy).powi(2)).sqrt())
                    .fold(f32::MAX, f32::min);
                assert!(
                    nearest <= max_gap,
                    "gap {} at ({}, {}) exceeds {}",
                    nearest,
                    px,
                    py,
                    max_gap
                );
            }
        }
    }

    #[test]
    fn test_hexagon_vertices_sit_on_the_radius() {
        let viewport = Viewport::new(700.0, 640.0);
        let size = hex_size(&viewport);
        let shapes: Vec<_> = GridLayout::new(viewport, GridType::Hexagon)
            .shapes()
            .take(4)
            .collect();

        for shape in &shapes {
            let (cx, cy) = polygon_center(shape);
            match shape {
                ShapeDescriptor::Polygon { points } => {
                    for (x, y) in points {
                        let r = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
                        assert!((r - size).abs() < 1e-2);
                    }
                }
                _ => panic!("expected a polygon"),
            }
        }
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let viewport = Viewport::new(700.0, 640.0);

        let square_a = GridLayout::regenerate(viewport, &settings(GridType::Square));
        let hexagon = GridLayout::regenerate(viewport, &settings(GridType::Hexagon));
        let square_b = GridLayout::regenerate(viewport, &settings(GridType::Square));

        assert_ne!(square_a, hexagon);
        assert_eq!(square_a, square_b);

        // A fresh pass over the same layout repeats the sequence.
        let layout = GridLayout::new(viewport, GridType::Hexagon);
        let first: Vec<_> = layout.shapes().collect();
        let second: Vec<_> = layout.shapes().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degenerate_container_yields_nothing() {
        let shapes = GridLayout::regenerate(
            Viewport::new(0.0, 480.0),
            &settings(GridType::Hexagon),
        );
        assert!(shapes.is_empty());

        let shapes = GridLayout::regenerate(
            Viewport::new(640.0, 0.0),
            &settings(GridType::Hexagon),
        );
        assert!(shapes.is_empty());
    }
}
