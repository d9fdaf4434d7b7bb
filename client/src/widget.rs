use digitpad_shared::pixels::{grayscale_from_rgba, has_content};
use digitpad_shared::{Label, SavePayload, SaveResponse};

use crate::feedback::{failure_message, success_message, SubmitError};
use crate::keymap::KeyAction;
use crate::state::{CursorPosition, DrawMode, Feedback, Tone};
use crate::surface::{Surface, SurfaceError};

/// Owns both surfaces, the requested label and the drawing state. The input
/// surface is always first; every stroke goes to all surfaces.
pub struct DrawingWidget<S: Surface> {
    surfaces: [S; 2],
    mode: DrawMode,
    label: Label,
    has_drawn: bool,
    submitting: bool,
    feedback: Feedback,
    pick_label: Box<dyn FnMut() -> Label>,
}

impl<S: Surface> DrawingWidget<S> {
    pub fn new(input: S, preview: S, mut pick_label: impl FnMut() -> Label + 'static) -> Self {
        let label = pick_label();
        let mut widget = Self {
            surfaces: [input, preview],
            mode: DrawMode::Idle,
            label,
            has_drawn: false,
            submitting: false,
            feedback: Feedback::default(),
            pick_label: Box::new(pick_label),
        };
        widget.clear();
        widget
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn input(&self) -> &S {
        &self.surfaces[0]
    }

    pub fn preview(&self) -> &S {
        &self.surfaces[1]
    }

    pub fn pointer_down(&mut self, offset: CursorPosition) {
        if !offset.is_finite() {
            return;
        }
        self.mode = DrawMode::Drawing { last: offset };
        log::debug!("drawing started at ({}, {})", offset.x, offset.y);
    }

    /// Returns whether a segment was rendered.
    pub fn pointer_move(&mut self, offset: CursorPosition) -> bool {
        self.draw_to(offset)
    }

    pub fn pointer_up(&mut self, offset: CursorPosition) {
        self.draw_to(offset);
        self.stop_drawing();
    }

    pub fn pointer_leave(&mut self) {
        self.stop_drawing();
    }

    fn draw_to(&mut self, offset: CursorPosition) -> bool {
        let DrawMode::Drawing { last } = self.mode else {
            return false;
        };
        if !offset.is_finite() {
            return false;
        }
        for surface in &mut self.surfaces {
            let scale = surface.spec().scale;
            surface.stroke_segment(last.scaled(scale), offset.scaled(scale));
        }
        self.mode = DrawMode::Drawing { last: offset };
        self.has_drawn = true;
        true
    }

    fn stop_drawing(&mut self) {
        if self.mode == DrawMode::Idle {
            return;
        }
        self.mode = DrawMode::Idle;
        self.feedback = Feedback::hint(self.has_drawn);
        log::debug!("drawing stopped, has_drawn={}", self.has_drawn);
    }

    /// Empties both surfaces and the feedback without picking a new label.
    pub fn clear(&mut self) {
        for surface in &mut self.surfaces {
            surface.clear();
        }
        self.feedback = Feedback::default();
        self.has_drawn = false;
    }

    pub fn reset(&mut self) {
        self.clear();
        self.label = (self.pick_label)();
        log::debug!("new label {}", self.label.name());
    }

    /// Grayscale pixels of the preview surface, 784 values row-major.
    pub fn canvas_data(&self) -> Result<Vec<u8>, SurfaceError> {
        let rgba = self.preview().rgba()?;
        Ok(grayscale_from_rgba(&rgba)?)
    }

    /// Builds the payload to send, or `None` when there is nothing to submit
    /// or a submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<SavePayload> {
        if !self.has_drawn || self.submitting {
            return None;
        }
        let pixels = match self.canvas_data() {
            Ok(pixels) => pixels,
            Err(error) => {
                log::warn!("cannot read drawing: {error}");
                return None;
            }
        };
        if !has_content(&pixels) {
            return None;
        }
        self.submitting = true;
        Some(SavePayload::new(self.label, pixels))
    }

    pub fn finish_submission(
        &mut self,
        payload: SavePayload,
        outcome: Result<SaveResponse, SubmitError>,
    ) {
        self.submitting = false;
        match outcome {
            Ok(response) => {
                let target = Label::new(payload.number).unwrap_or(self.label);
                let message = success_message(&response, target);
                self.reset();
                self.feedback = Feedback {
                    save_hint: false,
                    message,
                    tone: Tone::Info,
                    snapshot: Some(payload.img),
                };
            }
            Err(error) => {
                log::warn!("submission failed: {error}");
                self.feedback = Feedback {
                    save_hint: self.has_drawn,
                    message: failure_message(&error),
                    tone: Tone::Error,
                    snapshot: None,
                };
            }
        }
    }

    /// Applies a shortcut; a returned payload must be sent and its outcome
    /// passed to [`Self::finish_submission`].
    pub fn apply_key(&mut self, action: KeyAction) -> Option<SavePayload> {
        match action {
            KeyAction::Clear => {
                self.clear();
                None
            }
            KeyAction::Save => self.begin_submission(),
        }
    }
}

#[cfg(test)]
#[path = "widget_test.rs"]
mod tests;
