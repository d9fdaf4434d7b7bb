use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
    HtmlElement, HtmlImageElement, ImageData, PointerEvent,
};

use digitpad_shared::pixels::rgba_from_grayscale;
use digitpad_shared::{Label, PREVIEW_SIZE};

use crate::state::{CursorPosition, DrawMode, Feedback, SurfaceSpec};
use crate::surface::{Surface, SurfaceError};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

fn opaque_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::FALSE)?;
    canvas
        .get_context_with_context_options("2d", &options)?
        .ok_or_else(|| JsValue::from_str("Missing 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Invalid 2d context"))
}

pub struct CanvasSurface {
    spec: SurfaceSpec,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(document: &Document, spec: SurfaceSpec) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = get_element(document, spec.id)?;
        canvas.set_width(spec.size);
        canvas.set_height(spec.size);
        let ctx = opaque_context(&canvas)?;
        Ok(Self { spec, canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn spec(&self) -> &SurfaceSpec {
        &self.spec
    }

    fn stroke_segment(&mut self, from: CursorPosition, to: CursorPosition) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str("white");
        ctx.set_line_width(self.spec.line_width);
        ctx.set_line_cap("round");
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }

    fn clear(&mut self) {
        let size = f64::from(self.spec.size);
        self.ctx.set_fill_style_str("black");
        self.ctx.fill_rect(0.0, 0.0, size, size);
    }

    fn rgba(&self) -> Result<Vec<u8>, SurfaceError> {
        let size = f64::from(self.spec.size);
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, size, size)
            .map_err(|error| SurfaceError::Read {
                id: self.spec.id,
                reason: format!("{error:?}"),
            })?;
        Ok(image.data().0)
    }
}

/// Page elements the widget renders into, looked up once at start-up.
pub struct Elements {
    pub document: Document,
    pub current_number: Element,
    pub save_hint: HtmlElement,
    pub message: Element,
    pub preview_img: HtmlImageElement,
    pub clear_button: Option<HtmlButtonElement>,
    pub save_button: Option<HtmlButtonElement>,
}

impl Elements {
    pub fn lookup(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            current_number: get_element(document, "currentNumber")?,
            save_hint: get_element(document, "saveOrCancelMessage")?,
            message: get_element(document, "userFeedbackMessage")?,
            preview_img: get_element(document, "previewImg")?,
            clear_button: get_element(document, "clearButton").ok(),
            save_button: get_element(document, "saveButton").ok(),
        })
    }
}

pub fn set_canvas_cursor(canvas: &HtmlCanvasElement, mode: &DrawMode) {
    let _ = canvas.style().set_property("cursor", mode.cursor());
}

pub fn render_label(elements: &Elements, label: Label) {
    elements.current_number.set_text_content(Some(label.name()));
}

pub fn render_feedback(elements: &Elements, feedback: &Feedback) {
    let display = if feedback.save_hint { "inline" } else { "none" };
    let _ = elements.save_hint.style().set_property("display", display);

    let src = match &feedback.snapshot {
        Some(pixels) => snapshot_data_url(&elements.document, pixels).unwrap_or_else(|error| {
            log::warn!("cannot render snapshot: {error:?}");
            String::new()
        }),
        None => String::new(),
    };
    elements.preview_img.set_src(&src);

    let _ = elements
        .message
        .set_attribute("data-tone", feedback.tone.as_str());
    elements.message.set_text_content(Some(&feedback.message));
}

/// PNG data URL of a grayscale 28x28 sample.
pub fn snapshot_data_url(document: &Document, pixels: &[u8]) -> Result<String, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(PREVIEW_SIZE);
    canvas.set_height(PREVIEW_SIZE);
    let ctx = opaque_context(&canvas)?;
    let rgba = rgba_from_grayscale(pixels);
    let image = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(rgba.as_slice()),
        PREVIEW_SIZE,
        PREVIEW_SIZE,
    )?;
    ctx.put_image_data(&image, 0.0, 0.0)?;
    canvas.to_data_url()
}

/// Pointer offset relative to the input canvas, in canvas pixels.
pub fn event_to_offset(canvas: &HtmlCanvasElement, event: &PointerEvent) -> Option<CursorPosition> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let scale_x = f64::from(canvas.width()) / rect.width();
    let scale_y = f64::from(canvas.height()) / rect.height();
    let position = CursorPosition::new(
        (f64::from(event.client_x()) - rect.left()) * scale_x,
        (f64::from(event.client_y()) - rect.top()) * scale_y,
    );
    position.is_finite().then_some(position)
}
