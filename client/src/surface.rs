use digitpad_shared::pixels::PixelError;

use crate::state::{CursorPosition, SurfaceSpec};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    #[error("could not read pixels of {id}: {reason}")]
    Read { id: &'static str, reason: String },
    #[error(transparent)]
    Pixels(#[from] PixelError),
}

/// A raster the widget can stroke into. Coordinates are already scaled to
/// the surface.
pub trait Surface {
    fn spec(&self) -> &SurfaceSpec;

    /// Strokes a straight white segment using the surface's line width.
    fn stroke_segment(&mut self, from: CursorPosition, to: CursorPosition);

    /// Fills the whole surface with the black background.
    fn clear(&mut self);

    /// Raw RGBA bytes, row-major.
    fn rgba(&self) -> Result<Vec<u8>, SurfaceError>;
}
