use klock_app_shell::{AppControl, AppShell};
use klock_foundation::{InputEvent, KeyCode};
use klock_graphics::{Color, Point, Rect};
use klock_paint::{Cell, PaintApp, EMPTY_COLOR, GRID_SIZE, MENU_RECT, PALETTE};
use klock_render_common::{DrawOp, PaintStyle, RecordedFrame, RecordingCanvas};

fn shell() -> AppShell<PaintApp> {
    let mut shell = AppShell::new(PaintApp::new());
    shell.set_viewport(400.0, 400.0);
    shell
}

fn render(shell: &mut AppShell<PaintApp>) -> RecordedFrame {
    let mut canvas = RecordingCanvas::new();
    shell.render(&mut canvas);
    canvas.finish()
}

fn press_at(shell: &mut AppShell<PaintApp>, x: f32, y: f32) {
    shell.handle_input(InputEvent::PointerPressed);
    shell.handle_input(InputEvent::PointerDragged(Point::new(x, y)));
}

fn click_at(shell: &mut AppShell<PaintApp>, x: f32, y: f32) {
    shell.handle_input(InputEvent::PointerMoved(Point::new(x, y)));
    shell.handle_input(InputEvent::PointerReleased);
    shell.handle_input(InputEvent::Clicked(Point::new(x, y)));
}

#[test]
fn press_paints_only_the_cell_under_it() {
    let mut shell = shell();
    press_at(&mut shell, 17.0, 9.0);
    render(&mut shell);
    let painted: Vec<_> = shell.app().grid().painted().collect();
    assert_eq!(painted, vec![(Cell::new(2, 4), PALETTE[0])]);
}

#[test]
fn released_pointer_paints_nothing() {
    let mut shell = shell();
    press_at(&mut shell, 17.0, 9.0);
    shell.handle_input(InputEvent::PointerReleased);
    render(&mut shell);
    assert_eq!(shell.app().grid().painted().count(), 0);
}

#[test]
fn drag_between_frames_paints_only_the_latest_sample() {
    let mut shell = shell();
    press_at(&mut shell, 100.0, 100.0);
    shell.handle_input(InputEvent::PointerDragged(Point::new(104.0, 100.0)));
    shell.handle_input(InputEvent::PointerDragged(Point::new(108.0, 100.0)));
    render(&mut shell);
    let painted: Vec<_> = shell.app().grid().painted().map(|(cell, _)| cell).collect();
    assert_eq!(painted, vec![Cell::new(25, 27)]);
}

#[test]
fn distinct_presses_leave_exactly_those_cells_painted() {
    let mut shell = shell();
    let samples = [(60.0, 60.0), (61.0, 100.0), (300.0, 7.0), (399.0, 399.0)];
    for (x, y) in samples {
        press_at(&mut shell, x, y);
        render(&mut shell);
        shell.handle_input(InputEvent::PointerReleased);
    }
    let grid = shell.app().grid();
    assert_eq!(grid.painted().count(), samples.len());
    for (x, y) in samples {
        let cell = grid.cell_at(Point::new(x, y)).expect("inside grid");
        assert_eq!(grid.get(cell), PALETTE[0]);
    }
    assert_eq!(grid.get(Cell::new(0, 0)), EMPTY_COLOR);
}

#[test]
fn frame_draws_every_cell_then_the_menu() {
    let mut shell = shell();
    let frame = render(&mut shell);
    assert!(matches!(frame.operations()[0], DrawOp::Clear(_)));
    let rects: Vec<_> = frame.rects().collect();
    let cells = GRID_SIZE * GRID_SIZE;
    // Two filled and stroked tiles plus the bar outline.
    assert_eq!(rects.len(), cells + 5);
    assert_eq!(rects[0].0, Rect::from_xywh(0.0, 0.0, 4.0, 4.0));
    assert_eq!(rects[cells + 4].0, MENU_RECT);
    assert_eq!(rects[cells + 4].1.style, PaintStyle::Stroke);
    assert_eq!(rects[cells].1.color, PALETTE[0]);
    assert_eq!(rects[cells + 2].1.color, PALETTE[1]);
}

#[test]
fn menu_click_selects_color_and_is_consumed() {
    let mut shell = shell();
    click_at(&mut shell, 170.0, 10.0);
    render(&mut shell);
    assert_eq!(shell.app().active_color(), PALETTE[1]);
    assert!(!shell.input().has_pending_click());

    press_at(&mut shell, 17.0, 209.0);
    render(&mut shell);
    assert_eq!(shell.app().grid().get(Cell::new(52, 4)), PALETTE[1]);

    click_at(&mut shell, 120.0, 10.0);
    render(&mut shell);
    assert_eq!(shell.app().active_color(), PALETTE[0]);
}

#[test]
fn click_outside_menu_stays_pending() {
    let mut shell = shell();
    click_at(&mut shell, 305.0, 10.0);
    render(&mut shell);
    render(&mut shell);
    assert!(shell.input().has_pending_click());
    assert_eq!(shell.app().active_color(), PALETTE[0]);
}

#[test]
fn stale_click_outside_menu_ignores_later_drags_into_menu() {
    let mut shell = shell();
    click_at(&mut shell, 305.0, 10.0);
    render(&mut shell);
    assert_eq!(shell.input().pending_click(), Some(Point::new(305.0, 10.0)));

    press_at(&mut shell, 200.0, 200.0);
    shell.handle_input(InputEvent::PointerDragged(Point::new(170.0, 20.0)));
    render(&mut shell);
    assert_eq!(shell.app().active_color(), PALETTE[0]);
    assert_eq!(shell.input().pending_click(), Some(Point::new(305.0, 10.0)));
    // The drag still painted the cell under it with the unchanged color.
    assert_eq!(shell.app().grid().get(Cell::new(5, 42)), PALETTE[0]);

    shell.handle_input(InputEvent::PointerReleased);
    press_at(&mut shell, 170.0, 10.0);
    render(&mut shell);
    assert_eq!(shell.app().active_color(), PALETTE[0]);
}

#[test]
fn escape_exits_other_keys_do_not() {
    let mut shell = shell();
    assert_eq!(
        shell.handle_input(InputEvent::KeyPressed(KeyCode::Other)),
        AppControl::Continue
    );
    assert_eq!(
        shell.handle_input(InputEvent::KeyPressed(KeyCode::Escape)),
        AppControl::Exit
    );
    assert!(shell.should_exit());
}

#[test]
fn unchanged_state_draws_the_same_scene() {
    let mut shell = shell();
    press_at(&mut shell, 40.0, 80.0);
    shell.handle_input(InputEvent::PointerReleased);
    let first = render(&mut shell);
    let second = render(&mut shell);
    assert_eq!(first, second);
    let empty = Color::BLACK;
    assert!(first
        .rects()
        .any(|(rect, paint)| rect == Cell::new(20, 10).rect() && paint.color == empty));
}
