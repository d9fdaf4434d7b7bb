use digitpad_shared::PIXEL_COUNT;

use super::*;
use crate::raster::RasterSurface;
use crate::state::{INPUT_SURFACE, PREVIEW_SURFACE};

fn labels(digits: &'static [u8]) -> impl FnMut() -> Label {
    let mut index = 0;
    move || {
        let label = Label::new(digits[index % digits.len()]).unwrap();
        index += 1;
        label
    }
}

fn widget(digits: &'static [u8]) -> DrawingWidget<RasterSurface> {
    DrawingWidget::new(
        RasterSurface::new(INPUT_SURFACE),
        RasterSurface::new(PREVIEW_SURFACE),
        labels(digits),
    )
}

fn at(x: f64, y: f64) -> CursorPosition {
    CursorPosition::new(x, y)
}

/// Inclusive bounding box of lit pixels.
fn lit_bounds(surface: &RasterSurface) -> Option<(u32, u32, u32, u32)> {
    let size = surface.spec().size;
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..size {
        for x in 0..size {
            if surface.intensity(x, y) == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}

fn is_blank(surface: &RasterSurface) -> bool {
    lit_bounds(surface).is_none()
}

fn submit_ok(widget: &mut DrawingWidget<RasterSurface>) -> SavePayload {
    let payload = widget.begin_submission().expect("payload");
    let response = SaveResponse {
        message: Some("saved as numbers/3-x.json".to_string()),
        ..SaveResponse::default()
    };
    widget.finish_submission(payload.clone(), Ok(response));
    payload
}

#[test]
fn starts_idle_and_blank() {
    let widget = widget(&[4]);
    assert_eq!(widget.label().digit(), 4);
    assert_eq!(widget.mode(), DrawMode::Idle);
    assert!(!widget.has_drawn());
    assert!(widget.feedback().is_empty());
    assert!(is_blank(widget.input()));
    assert!(is_blank(widget.preview()));
}

#[test]
fn moves_while_idle_draw_nothing() {
    let mut widget = widget(&[1]);
    assert!(!widget.pointer_move(at(10.0, 10.0)));
    widget.pointer_up(at(30.0, 30.0));
    assert!(!widget.has_drawn());
    assert!(is_blank(widget.input()));
    assert!(widget.feedback().is_empty());
}

#[test]
fn pointer_down_enters_drawing() {
    let mut widget = widget(&[1]);
    widget.pointer_down(at(5.0, 6.0));
    assert_eq!(widget.mode(), DrawMode::Drawing { last: at(5.0, 6.0) });
    assert_eq!(widget.mode().cursor(), "pointer");
    assert!(!widget.has_drawn());
}

#[test]
fn stroke_scenario_scales_onto_preview() {
    let mut widget = widget(&[3]);
    widget.pointer_down(at(10.0, 10.0));
    assert!(widget.pointer_move(at(50.0, 50.0)));
    widget.pointer_up(at(50.0, 50.0));

    assert!(widget.has_drawn());
    assert_eq!(widget.mode(), DrawMode::Idle);
    assert_eq!(widget.mode().cursor(), "auto");
    assert!(widget.feedback().save_hint);

    let (x0, y0, x1, y1) = lit_bounds(widget.preview()).unwrap();
    assert!((1..=3).contains(&x0), "x0={x0}");
    assert!((1..=3).contains(&y0), "y0={y0}");
    assert!((12..=14).contains(&x1), "x1={x1}");
    assert!((12..=14).contains(&y1), "y1={y1}");

    let pixels = widget.canvas_data().unwrap();
    assert_eq!(pixels.len(), PIXEL_COUNT);
    assert!(pixels.iter().any(|&value| value > 0));

    let payload = widget.begin_submission().unwrap();
    assert_eq!(payload.number, 3);
    assert_eq!(payload.img, pixels);
}

#[test]
fn preview_is_quarter_scale_of_input() {
    let mut widget = widget(&[2]);
    widget.pointer_down(at(20.0, 80.0));
    widget.pointer_move(at(40.0, 30.0));
    widget.pointer_move(at(90.0, 40.0));
    widget.pointer_move(at(70.0, 100.0));
    widget.pointer_leave();

    let input = lit_bounds(widget.input()).unwrap();
    let preview = lit_bounds(widget.preview()).unwrap();
    let expected = [input.0, input.1, input.2, input.3].map(|v| f64::from(v) / 4.0);
    let actual = [preview.0, preview.1, preview.2, preview.3].map(f64::from);
    for (expected, actual) in expected.iter().zip(actual) {
        assert!(
            (expected - actual).abs() <= 1.5,
            "input {input:?} preview {preview:?}"
        );
    }
}

#[test]
fn leaving_stops_drawing() {
    let mut widget = widget(&[2]);
    widget.pointer_down(at(20.0, 20.0));
    widget.pointer_leave();
    assert_eq!(widget.mode(), DrawMode::Idle);
    assert!(!widget.pointer_move(at(60.0, 60.0)));
    assert!(!widget.has_drawn());
    assert!(!widget.feedback().save_hint);
}

#[test]
fn canvas_data_is_always_full_frame() {
    let mut widget = widget(&[8]);
    assert_eq!(widget.canvas_data().unwrap(), vec![0; PIXEL_COUNT]);
    widget.pointer_down(at(0.0, 0.0));
    widget.pointer_move(at(111.0, 111.0));
    widget.pointer_move(at(-40.0, 200.0));
    assert_eq!(widget.canvas_data().unwrap().len(), PIXEL_COUNT);
}

#[test]
fn submitting_blank_widget_is_noop() {
    let mut widget = widget(&[5]);
    assert!(widget.begin_submission().is_none());
    assert!(!widget.is_submitting());
    assert!(widget.apply_key(KeyAction::Save).is_none());
}

#[test]
fn stroke_entirely_off_preview_is_not_submitted() {
    let mut widget = widget(&[5]);
    widget.pointer_down(at(500.0, 500.0));
    widget.pointer_move(at(600.0, 600.0));
    assert!(widget.has_drawn());
    assert!(widget.begin_submission().is_none());
}

#[test]
fn second_submit_while_in_flight_is_noop() {
    let mut widget = widget(&[6]);
    widget.pointer_down(at(30.0, 30.0));
    widget.pointer_up(at(70.0, 60.0));
    assert!(widget.begin_submission().is_some());
    assert!(widget.is_submitting());
    assert!(widget.begin_submission().is_none());
}

#[test]
fn successful_submission_resets_and_relabels() {
    let mut widget = widget(&[3, 7]);
    widget.pointer_down(at(10.0, 10.0));
    widget.pointer_up(at(50.0, 50.0));
    let payload = submit_ok(&mut widget);

    assert_eq!(widget.label().digit(), 7);
    assert!(!widget.is_submitting());
    assert!(!widget.has_drawn());
    assert!(is_blank(widget.input()));
    assert!(is_blank(widget.preview()));
    assert_eq!(widget.feedback().message, "saved as numbers/3-x.json");
    assert_eq!(widget.feedback().tone, Tone::Info);
    assert_eq!(widget.feedback().snapshot.as_ref(), Some(&payload.img));
}

#[test]
fn failed_submission_keeps_drawing() {
    let mut widget = widget(&[3, 7]);
    widget.pointer_down(at(10.0, 10.0));
    widget.pointer_up(at(50.0, 50.0));
    let payload = widget.begin_submission().unwrap();
    widget.finish_submission(
        payload,
        Err(SubmitError::Status {
            status: 500,
            message: "disk full".to_string(),
        }),
    );

    assert_eq!(widget.label().digit(), 3);
    assert!(widget.has_drawn());
    assert!(!widget.is_submitting());
    assert!(!is_blank(widget.preview()));
    assert_eq!(widget.feedback().tone, Tone::Error);
    assert!(widget.feedback().message.contains("disk full"));
    assert!(widget.feedback().snapshot.is_none());
    assert!(widget.begin_submission().is_some());
}

#[test]
fn keyboard_clear_matches_clear_action() {
    let mut by_key = widget(&[9]);
    let mut by_call = widget(&[9]);
    for widget in [&mut by_key, &mut by_call] {
        widget.pointer_down(at(20.0, 20.0));
        widget.pointer_up(at(80.0, 90.0));
    }
    assert!(by_key.apply_key(KeyAction::Clear).is_none());
    by_call.clear();

    for widget in [&by_key, &by_call] {
        assert!(!widget.has_drawn());
        assert!(widget.feedback().is_empty());
        assert!(is_blank(widget.input()));
        assert!(is_blank(widget.preview()));
        assert_eq!(widget.label().digit(), 9);
    }
}

#[test]
fn reset_picks_new_label_and_clears() {
    let mut widget = widget(&[0, 4]);
    widget.pointer_down(at(20.0, 20.0));
    widget.pointer_up(at(80.0, 90.0));
    widget.reset();
    assert_eq!(widget.label().digit(), 4);
    assert!(!widget.has_drawn());
    assert!(is_blank(widget.preview()));
}
