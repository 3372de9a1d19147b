use qr_layout::*;
use std::sync::{Arc, Mutex};

fn session(width: f64, height: f64) -> PrintLayout {
    let options = LayoutOptions {
        edit_mode: true,
        ..Default::default()
    };
    PrintLayout::new(options, Viewport::new(width, height)).unwrap()
}

fn payload() -> ImagePayload {
    ImagePayload::png_base64("AAAA")
}

fn extract(html: &str, property: &str) -> f64 {
    let start = html
        .find(&format!("{}: ", property))
        .map(|i| i + property.len() + 2)
        .unwrap();
    let rest = &html[start..];
    let end = rest.find('%').unwrap();
    rest[..end].parse().unwrap()
}

#[test]
fn test_rejects_unbounded_precision() {
    let options = LayoutOptions {
        precision: 400,
        edit_mode: true,
        ..Default::default()
    };
    let result = PrintLayout::new(options, Viewport::new(432.0, 800.0));
    assert!(matches!(result, Err(LayoutError::Config(_))));
}

#[test]
fn test_rejects_infinite_viewport() {
    let result = PrintLayout::new(LayoutOptions::default(), Viewport::new(f64::INFINITY, 800.0));
    assert!(matches!(result, Err(LayoutError::Viewport { .. })));
}

#[test]
fn test_drag_continues_after_pinch_finger_lifts() {
    let mut layout = session(432.0, 800.0);

    layout.handle_touch(&TouchEvent::down(0.0, 0.0));
    layout.handle_pinch(&PinchEvent::began());
    layout.handle_pinch(&PinchEvent::active(2.0, 1.0));
    layout.handle_pinch(&PinchEvent::end());
    layout.handle_touch(&TouchEvent::up(0.0, 0.0).with_pointers(1));
    assert!(layout.is_dragging());

    layout.handle_touch(&TouchEvent::moved(100.0, 100.0));
    layout.handle_touch(&TouchEvent::moved(110.0, 100.0));
    layout.handle_touch(&TouchEvent::moved(130.0, 100.0));
    let snapshot = layout.snapshot();
    assert_eq!(snapshot.x, 10.0);
    assert_eq!(snapshot.width, 100.0);
}

#[test]
fn test_rejects_viewport_narrower_than_margins() {
    let result = PrintLayout::new(LayoutOptions::default(), Viewport::new(20.0, 800.0));
    assert!(matches!(result, Err(LayoutError::Viewport { .. })));
}

#[test]
fn test_page_recomputed_from_viewport() {
    let layout = session(464.0, 800.0);
    let page = layout.page();
    assert_eq!(page.width, 432.0);
    assert_eq!(page.height, 432.0 * 1.2941);
    assert_eq!(layout.page(), page);
}

#[test]
fn test_print_document_percentages() {
    // 432 - 2 * 16 = 400 wide page
    let layout = session(432.0, 800.0);
    let html = layout.print_document(&payload());

    assert_eq!(extract(&html, "left"), 0.0);
    assert_eq!(extract(&html, "top"), 0.0);
    assert_eq!(extract(&html, "width"), 12.5);
    assert!((extract(&html, "height") - 9.66).abs() < 0.01);
}

#[test]
fn test_print_document_percentages_wide_margin() {
    let options = LayoutOptions {
        margin_px: 32.0,
        ..Default::default()
    };
    let layout = PrintLayout::new(options, Viewport::new(464.0, 800.0)).unwrap();
    let html = layout.print_document(&payload());

    assert_eq!(extract(&html, "width"), 12.5);
    assert!((extract(&html, "height") - 9.66).abs() < 0.01);
}

#[test]
fn test_drag_through_session() {
    let mut layout = session(432.0, 800.0);

    layout.handle_touch(&TouchEvent::down(0.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(10.0, 0.0));
    assert_eq!(layout.snapshot().x, 0.0);
    layout.handle_touch(&TouchEvent::moved(20.0, 0.0));
    assert_eq!(layout.snapshot().x, 10.0);
    layout.handle_touch(&TouchEvent::up(20.0, 0.0));
    assert!(!layout.is_dragging());
}

#[test]
fn test_multi_pointer_events_leave_layout_unchanged() {
    let mut layout = session(432.0, 800.0);
    let before = layout.layout().clone();

    layout.handle_touch(&TouchEvent::down(0.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(10.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(50.0, 50.0).with_pointers(2));
    layout.handle_touch(&TouchEvent::moved(90.0, 90.0).with_pointers(2));
    layout.handle_pinch(&PinchEvent::began().with_pointers(3));
    layout.handle_pinch(&PinchEvent::active(3.0, 1.0).with_pointers(3));

    assert_eq!(layout.layout(), &before);
}

#[test]
fn test_text_input_unclamped_then_pinch_clamps() {
    let mut layout = session(400.0, 800.0);

    layout.set_field_text(Field::Width, "9999");
    assert_eq!(layout.layout().text(Field::Width), "9999");
    assert_eq!(layout.snapshot().width, 9999.0);

    layout.handle_pinch(&PinchEvent::began());
    layout.handle_pinch(&PinchEvent::active(1.0, 0.1));
    assert_eq!(layout.snapshot().width, 400.0);

    layout.handle_pinch(&PinchEvent::active(5.0, 0.1));
    assert!(layout.snapshot().width <= 400.0);
}

#[test]
fn test_pinch_bound_is_shortest_viewport_side() {
    let mut layout = session(800.0, 300.0);
    layout.handle_pinch(&PinchEvent::began());
    layout.handle_pinch(&PinchEvent::active(100.0, 1.0));
    assert_eq!(layout.snapshot().width, 300.0);
    assert_eq!(layout.snapshot().height, 300.0);

    layout.handle_pinch(&PinchEvent::active(0.0001, -1.0));
    assert_eq!(layout.snapshot().width, 10.0);
}

#[test]
fn test_edit_mode_off_ignores_gestures() {
    let mut layout = PrintLayout::new(LayoutOptions::default(), Viewport::new(432.0, 800.0))
        .unwrap();
    assert!(!layout.edit_mode());

    layout.handle_touch(&TouchEvent::down(0.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(10.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(20.0, 0.0));
    layout.handle_pinch(&PinchEvent::began());
    layout.handle_pinch(&PinchEvent::active(2.0, 1.0));

    assert_eq!(layout.snapshot(), LayoutSnapshot::default());

    // Text input still works with gestures off
    layout.set_field_text(Field::Y, "33");
    assert_eq!(layout.snapshot().y, 33.0);
}

#[test]
fn test_disabling_edit_mode_mid_gesture_freezes_layout() {
    let mut layout = session(432.0, 800.0);

    layout.handle_touch(&TouchEvent::down(0.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(10.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(20.0, 0.0));
    layout.handle_pinch(&PinchEvent::began());
    assert!(layout.is_dragging());
    assert!(layout.is_pinching());

    layout.set_edit_mode(false);
    let frozen = layout.layout().clone();
    assert!(!layout.is_dragging());
    assert!(!layout.is_pinching());

    for x in [30.0, 40.0, 50.0] {
        assert_eq!(layout.handle_touch(&TouchEvent::moved(x, 0.0)), None);
    }
    assert_eq!(layout.handle_pinch(&PinchEvent::active(2.0, 1.0)), None);
    assert_eq!(layout.layout(), &frozen);

    // Re-enabling needs a fresh touch-down before anything moves
    layout.set_edit_mode(true);
    layout.handle_touch(&TouchEvent::moved(60.0, 0.0));
    assert_eq!(layout.layout(), &frozen);

    layout.handle_touch(&TouchEvent::down(60.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(70.0, 0.0));
    layout.handle_touch(&TouchEvent::moved(80.0, 0.0));
    assert_eq!(layout.snapshot().x, 20.0);
}

#[test]
fn test_documents_follow_current_state() {
    let mut layout = session(432.0, 800.0);
    let before = layout.preview_document(&payload());

    layout.set_field_text(Field::X, "100");
    let after = layout.preview_document(&payload());
    assert_ne!(before, after);
    assert!(after.contains("left: 100px;"));

    let print = layout.print_document(&payload());
    assert_eq!(extract(&print, "left"), 25.0);
}

#[test]
fn test_malformed_text_renders_as_zero() {
    let mut layout = session(432.0, 800.0);
    layout.set_field_text(Field::X, "");
    layout.set_field_text(Field::Width, "abc");

    let html = layout.print_document(&payload());
    assert_eq!(extract(&html, "left"), 0.0);
    assert_eq!(extract(&html, "width"), 0.0);
    assert_eq!(layout.layout().text(Field::Width), "abc");
}

#[derive(Clone, Default)]
struct RecordingDispatcher {
    printed: Arc<Mutex<Vec<String>>>,
}

impl PrintDispatcher for RecordingDispatcher {
    async fn dispatch(&self, html: String) -> Result<()> {
        self.printed.lock().unwrap().push(html);
        Ok(())
    }
}

#[tokio::test]
async fn test_print_layout_dispatches_print_document() {
    let layout = session(432.0, 800.0);
    let dispatcher = RecordingDispatcher::default();

    print_layout(&layout, &payload(), &dispatcher).await.unwrap();

    let printed = dispatcher.printed.lock().unwrap();
    assert_eq!(printed.len(), 1);
    assert_eq!(printed[0], layout.print_document(&payload()));
}
