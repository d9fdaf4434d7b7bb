use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent, PointerEvent};

use crate::dom::{
    event_to_offset, render_feedback, render_label, set_canvas_cursor, CanvasSurface, Elements,
};
use crate::keymap::{button_handles_key, key_action, KeyAction};
use crate::net::submit;
use crate::state::{DrawMode, INPUT_SURFACE, PREVIEW_SURFACE};
use crate::util::random_label;
use crate::widget::DrawingWidget;

type Widget = Rc<RefCell<DrawingWidget<CanvasSurface>>>;

struct Ui {
    elements: Elements,
    canvas: HtmlCanvasElement,
}

fn sync_ui(ui: &Ui, widget: &DrawingWidget<CanvasSurface>) {
    render_label(&ui.elements, widget.label());
    render_feedback(&ui.elements, widget.feedback());
    set_canvas_cursor(&ui.canvas, &widget.mode());
}

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    js_sys::Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

fn apply_action(widget: &Widget, ui: &Rc<Ui>, action: KeyAction) {
    let payload = {
        let mut widget_ref = widget.borrow_mut();
        let payload = widget_ref.apply_key(action);
        sync_ui(ui, &widget_ref);
        payload
    };
    let Some(payload) = payload else {
        return;
    };
    log::info!("submitting drawing of {}", payload.number);
    let widget = widget.clone();
    let ui = ui.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = submit(&payload).await;
        let mut widget = widget.borrow_mut();
        widget.finish_submission(payload, outcome);
        sync_ui(&ui, &widget);
    });
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    let started = Rc::new(Cell::new(false));

    if document_ready_state(&document).as_deref() == Some("complete") {
        started.set(true);
        return start_app();
    }

    let onload_started = started.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            log::error!("failed to start: {err:?}");
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let input = CanvasSurface::new(&document, INPUT_SURFACE)?;
    let preview = CanvasSurface::new(&document, PREVIEW_SURFACE)?;
    let canvas = input.canvas().clone();
    let ui = Rc::new(Ui {
        elements: Elements::lookup(&document)?,
        canvas: canvas.clone(),
    });
    let widget: Widget = Rc::new(RefCell::new(DrawingWidget::new(
        input,
        preview,
        random_label,
    )));
    sync_ui(&ui, &widget.borrow());

    {
        let down_widget = widget.clone();
        let down_ui = ui.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            if event.button() != 0 {
                return;
            }
            event.prevent_default();
            let Some(offset) = event_to_offset(&down_ui.canvas, &event) else {
                return;
            };
            let mut widget = down_widget.borrow_mut();
            widget.pointer_down(offset);
            set_canvas_cursor(&down_ui.canvas, &widget.mode());
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_widget = widget.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let Some(offset) = event_to_offset(&move_canvas, &event) else {
                return;
            };
            move_widget.borrow_mut().pointer_move(offset);
        });
        canvas.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let up_widget = widget.clone();
        let up_ui = ui.clone();
        let onup = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let mut widget = up_widget.borrow_mut();
            match event_to_offset(&up_ui.canvas, &event) {
                Some(offset) => widget.pointer_up(offset),
                None => widget.pointer_leave(),
            }
            sync_ui(&up_ui, &widget);
        });
        canvas.add_event_listener_with_callback("pointerup", onup.as_ref().unchecked_ref())?;
        onup.forget();
    }

    {
        let leave_widget = widget.clone();
        let leave_ui = ui.clone();
        let onleave = Closure::<dyn FnMut(PointerEvent)>::new(move |_event: PointerEvent| {
            let mut widget = leave_widget.borrow_mut();
            if widget.mode() == DrawMode::Idle {
                return;
            }
            widget.pointer_leave();
            sync_ui(&leave_ui, &widget);
        });
        canvas.add_event_listener_with_callback("pointerleave", onleave.as_ref().unchecked_ref())?;
        onleave.forget();
    }

    {
        let key_widget = widget.clone();
        let key_ui = ui.clone();
        let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            let on_button = event
                .target()
                .is_some_and(|target| target.dyn_ref::<HtmlButtonElement>().is_some());
            if on_button && button_handles_key(&key) {
                return;
            }
            let modifier = event.meta_key() || event.ctrl_key() || event.alt_key();
            let Some(action) = key_action(&key, modifier) else {
                return;
            };
            if action.prevents_default() {
                event.prevent_default();
            }
            apply_action(&key_widget, &key_ui, action);
        });
        window.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
        onkeydown.forget();
    }

    let buttons = [
        (ui.elements.clear_button.clone(), KeyAction::Clear),
        (ui.elements.save_button.clone(), KeyAction::Save),
    ];
    for (button, action) in buttons {
        let Some(button) = button else {
            continue;
        };
        let click_widget = widget.clone();
        let click_ui = ui.clone();
        let click_button = button.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            let _ = click_button.blur();
            apply_action(&click_widget, &click_ui, action);
        });
        button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    log::info!("digit pad ready, draw a {}", widget.borrow().label().name());
    Ok(())
}
