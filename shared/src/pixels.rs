use crate::{PIXEL_COUNT, PREVIEW_SIZE};

/// Byte offset of the channel sampled from each RGBA pixel. Surfaces are
/// opaque, so alpha is constant and red carries the stroke intensity.
pub const SAMPLE_CHANNEL: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelError {
    #[error("expected {expected} RGBA bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Reduces a 28x28 RGBA buffer to one grayscale byte per pixel, row-major.
pub fn grayscale_from_rgba(rgba: &[u8]) -> Result<Vec<u8>, PixelError> {
    let expected = PIXEL_COUNT * 4;
    if rgba.len() != expected {
        return Err(PixelError::BufferSize {
            expected,
            actual: rgba.len(),
        });
    }
    Ok(rgba
        .iter()
        .skip(SAMPLE_CHANNEL)
        .step_by(4)
        .copied()
        .collect())
}

pub fn has_content(pixels: &[u8]) -> bool {
    pixels.iter().copied().max().unwrap_or(0) > 0
}

/// Expands grayscale pixels back into an opaque RGBA buffer.
pub fn rgba_from_grayscale(pixels: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixels.len() * 4);
    for &value in pixels {
        rgba.extend_from_slice(&[value, value, value, 255]);
    }
    rgba
}

const SHADES: [char; 5] = [' ', '.', ':', '*', '#'];

/// Renders a 28x28 sample as text, one line per row.
pub fn text_preview(pixels: &[u8]) -> String {
    let width = PREVIEW_SIZE as usize;
    let mut out = String::with_capacity(pixels.len() + pixels.len() / width);
    for row in pixels.chunks(width) {
        for &value in row {
            let shade = usize::from(value) * (SHADES.len() - 1) / 255;
            out.push(SHADES[shade]);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "pixels_test.rs"]
mod tests;
