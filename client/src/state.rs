use digitpad_shared::{INPUT_SIZE, PREVIEW_SIZE};

/// Fixed parameters of one drawable surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub id: &'static str,
    pub size: u32,
    pub line_width: f64,
    /// Scale relative to the input surface.
    pub scale: f64,
}

pub const INPUT_SURFACE: SurfaceSpec = SurfaceSpec {
    id: "inputCanvas",
    size: INPUT_SIZE,
    line_width: 5.0,
    scale: 1.0,
};

pub const PREVIEW_SURFACE: SurfaceSpec = SurfaceSpec {
    id: "previewCanvas",
    size: PREVIEW_SIZE,
    line_width: 2.0,
    scale: PREVIEW_SIZE as f64 / INPUT_SIZE as f64,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawMode {
    Idle,
    /// `last` is the previous pointer offset on the input surface.
    Drawing { last: CursorPosition },
}

impl DrawMode {
    pub fn cursor(&self) -> &'static str {
        match self {
            DrawMode::Idle => "auto",
            DrawMode::Drawing { .. } => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Info,
    Error,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Error => "error",
        }
    }
}

/// What the feedback area currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feedback {
    pub save_hint: bool,
    pub message: String,
    pub tone: Tone,
    /// Grayscale pixels of the last accepted submission.
    pub snapshot: Option<Vec<u8>>,
}

impl Feedback {
    pub fn hint(save_hint: bool) -> Self {
        Self {
            save_hint,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
