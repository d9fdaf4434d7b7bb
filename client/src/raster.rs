use crate::geometry::{distance_to_segment, segment_bounds};
use crate::state::{CursorPosition, SurfaceSpec};
use crate::surface::{Surface, SurfaceError};

const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// In-memory RGBA surface with round-capped, anti-aliased strokes.
pub struct RasterSurface {
    spec: SurfaceSpec,
    rgba: Vec<u8>,
}

impl RasterSurface {
    pub fn new(spec: SurfaceSpec) -> Self {
        let len = (spec.size * spec.size) as usize;
        Self {
            spec,
            rgba: BACKGROUND.repeat(len),
        }
    }

    pub fn intensity(&self, x: u32, y: u32) -> u8 {
        if x >= self.spec.size || y >= self.spec.size {
            return 0;
        }
        self.rgba[((y * self.spec.size + x) * 4) as usize]
    }

    fn plot(&mut self, x: u32, y: u32, value: u8) {
        let index = ((y * self.spec.size + x) * 4) as usize;
        if self.rgba[index] >= value {
            return;
        }
        self.rgba[index..index + 3].fill(value);
    }
}

impl Surface for RasterSurface {
    fn spec(&self) -> &SurfaceSpec {
        &self.spec
    }

    fn stroke_segment(&mut self, from: CursorPosition, to: CursorPosition) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let half = self.spec.line_width / 2.0;
        let bounds = segment_bounds(from, to, self.spec.line_width, self.spec.size);
        if bounds.is_empty() {
            return;
        }
        for y in bounds.min_y as u32..=bounds.max_y as u32 {
            for x in bounds.min_x as u32..=bounds.max_x as u32 {
                let distance = distance_to_segment(
                    f64::from(x) + 0.5,
                    f64::from(y) + 0.5,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                );
                let coverage = (half + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.plot(x, y, (coverage * 255.0).round() as u8);
                }
            }
        }
    }

    fn clear(&mut self) {
        for pixel in self.rgba.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND);
        }
    }

    fn rgba(&self) -> Result<Vec<u8>, SurfaceError> {
        Ok(self.rgba.clone())
    }
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod tests;
