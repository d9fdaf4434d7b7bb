use crate::state::CursorPosition;

pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }
}

pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }
    let t = ((px - x1) * dx + (py - y1) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);
    let proj_x = x1 + t * dx;
    let proj_y = y1 + t * dy;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Area a stroke of `width` between two points can touch, clipped to a
/// `size` x `size` raster.
pub fn segment_bounds(from: CursorPosition, to: CursorPosition, width: f64, size: u32) -> Bounds {
    let pad = width / 2.0 + 1.0;
    let limit = f64::from(size) - 1.0;
    Bounds {
        min_x: (from.x.min(to.x) - pad).floor().max(0.0),
        min_y: (from.y.min(to.y) - pad).floor().max(0.0),
        max_x: (from.x.max(to.x) + pad).ceil().min(limit),
        max_y: (from.y.max(to.y) + pad).ceil().min(limit),
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
