use klock_graphics::{Point, Rect};

/// Result of a menu hit-test, dispatched by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    SelectColor(usize),
}

/// A rectangle split into equal-width tiles, left to right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Menu {
    rect: Rect,
    tiles: usize,
}

impl Menu {
    pub fn new(rect: Rect, tiles: usize) -> Self {
        assert!(tiles > 0, "a menu needs at least one tile");
        Self { rect, tiles }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn tiles(&self) -> usize {
        self.tiles
    }

    pub fn tile_width(&self) -> f32 {
        self.rect.width / self.tiles as f32
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point.x, point.y)
    }

    pub fn tile_at(&self, point: Point) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        let index = ((point.x - self.rect.x) / self.tile_width()).floor() as usize;
        Some(index.min(self.tiles - 1))
    }

    pub fn tile_rect(&self, index: usize) -> Rect {
        let width = self.tile_width();
        Rect::from_xywh(
            self.rect.x + width * index as f32,
            self.rect.y,
            width,
            self.rect.height,
        )
    }

    pub fn hit_test(&self, point: Point) -> Option<MenuAction> {
        self.tile_at(point).map(MenuAction::SelectColor)
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
