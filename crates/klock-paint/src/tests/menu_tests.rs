use super::*;

fn menu() -> Menu {
    Menu::new(Rect::from_xywh(0.0, 0.0, 300.0, 50.0), 2)
}

#[test]
fn tiles_split_the_width_evenly() {
    let menu = menu();
    assert_eq!(menu.tile_width(), 150.0);
    assert_eq!(menu.tile_rect(0), Rect::from_xywh(0.0, 0.0, 150.0, 50.0));
    assert_eq!(menu.tile_rect(1), Rect::from_xywh(150.0, 0.0, 150.0, 50.0));
}

#[test]
fn clicks_map_to_tile_indices() {
    let menu = menu();
    assert_eq!(menu.tile_at(Point::new(120.0, 10.0)), Some(0));
    assert_eq!(menu.tile_at(Point::new(170.0, 10.0)), Some(1));
    assert_eq!(menu.tile_at(Point::new(150.0, 10.0)), Some(1));
    assert_eq!(menu.tile_at(Point::new(0.0, 0.0)), Some(0));
}

#[test]
fn clicks_outside_are_not_dispatched() {
    let menu = menu();
    assert_eq!(menu.hit_test(Point::new(-5.0, 10.0)), None);
    assert_eq!(menu.hit_test(Point::new(305.0, 10.0)), None);
    assert_eq!(menu.hit_test(Point::new(300.0, 10.0)), None);
    assert_eq!(menu.hit_test(Point::new(120.0, 50.0)), None);
}

#[test]
fn hit_test_yields_select_color() {
    let menu = menu();
    assert_eq!(
        menu.hit_test(Point::new(170.0, 25.0)),
        Some(MenuAction::SelectColor(1))
    );
}

#[test]
fn offset_menu_measures_from_its_left_edge() {
    let menu = Menu::new(Rect::from_xywh(100.0, 20.0, 90.0, 10.0), 3);
    assert_eq!(menu.tile_at(Point::new(100.0, 25.0)), Some(0));
    assert_eq!(menu.tile_at(Point::new(131.0, 25.0)), Some(1));
    assert_eq!(menu.tile_at(Point::new(189.9, 25.0)), Some(2));
    assert_eq!(menu.tile_at(Point::new(99.0, 25.0)), None);
}
