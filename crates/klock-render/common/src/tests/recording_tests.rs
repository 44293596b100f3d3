use super::*;
use crate::PaintStyle;

#[test]
fn records_operations_in_submission_order() {
    let mut canvas = RecordingCanvas::new();
    let stroke = Paint::stroke(Color::BLACK, 1.0);
    canvas.clear(Color::WHITE);
    canvas.draw_oval(Rect::from_xywh(0.0, 0.0, 10.0, 10.0), &Paint::fill(Color::WHITE));
    canvas.draw_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), &stroke);
    canvas.draw_text("12:00:00", Point::new(3.0, 4.0), 40.0, &Paint::default());
    let frame = canvas.finish();

    assert_eq!(frame.operations().len(), 4);
    assert_eq!(frame.operations()[0], DrawOp::Clear(Color::WHITE));
    assert_eq!(frame.ovals().count(), 1);
    let (from, to, paint) = frame.lines().next().expect("line");
    assert_eq!((from, to), (Point::new(0.0, 0.0), Point::new(5.0, 5.0)));
    assert_eq!(paint.style, PaintStyle::Stroke);
    assert_eq!(
        frame.texts().collect::<Vec<_>>(),
        vec![("12:00:00", Point::new(3.0, 4.0))]
    );
}
