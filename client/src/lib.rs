mod feedback;
mod geometry;
mod keymap;
mod raster;
mod state;
mod surface;
mod widget;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod net;
#[cfg(target_arch = "wasm32")]
mod util;

#[cfg(target_arch = "wasm32")]
pub use app::run;
pub use feedback::{interpret_response, success_message, SubmitError};
pub use keymap::{key_action, KeyAction};
pub use raster::RasterSurface;
pub use state::{
    CursorPosition, DrawMode, Feedback, SurfaceSpec, Tone, INPUT_SURFACE, PREVIEW_SURFACE,
};
pub use surface::{Surface, SurfaceError};
pub use widget::DrawingWidget;
