// src/models/geometry.rs
// Shape descriptors emitted by the layout generator

// A single drawable outline. Coordinates are in container space with the
// origin at the top-left corner. Polygons carry absolute pixel vertices;
// cells are percentages of the container so they survive a resize as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDescriptor {
    Polygon {
        points: [(f32, f32); 6],
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl ShapeDescriptor {
    /// Corner points of a percentage rect, resolved against a container
    /// size, clockwise from the top-left. None for polygons.
    pub fn rect_corners(
        &self,
        container_width: f32,
        container_height: f32,
    ) -> Option<[(f32, f32); 4]> {
        match self {
            ShapeDescriptor::Rect {
                x,
                y,
                width,
                height,
            } => {
                let px = x / 100.0 * container_width;
                let py = y / 100.0 * container_height;
                let pw = width / 100.0 * container_width;
                let ph = height / 100.0 * container_height;
                Some([(px, py), (px + pw, py), (px + pw, py + ph), (px, py + ph)])
            }
            ShapeDescriptor::Polygon { .. } => None,
        }
    }
}
