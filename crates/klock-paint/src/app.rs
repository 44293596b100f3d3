use klock_app_shell::{App, AppControl};
use klock_foundation::{InputState, KeyCode};
use klock_graphics::{Color, Rect, Size};
use klock_render_common::{Canvas, Paint};

use crate::{Grid, Menu, MenuAction};

pub const MENU_RECT: Rect = Rect::from_xywh(0.0, 0.0, 300.0, 50.0);
pub const PALETTE: [Color; 2] = [Color::from_argb(0xFFFFFFFF), Color::from_argb(0xFFFF0000)];

const BACKGROUND: Color = Color::BLACK;
const MENU_BORDER: Paint = Paint::stroke(Color::from_argb(0xFF808080), 1.0);

/// Paint demo state: the grid is the scene model, the active color is the
/// brush.
pub struct PaintApp {
    grid: Grid,
    menu: Menu,
    active_color: Color,
}

impl PaintApp {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            menu: Menu::new(MENU_RECT, PALETTE.len()),
            active_color: PALETTE[0],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::SelectColor(index) => {
                if let Some(color) = PALETTE.get(index) {
                    log::debug!("selected color {index}: {color:?}");
                    self.active_color = *color;
                }
            }
        }
    }

    /// Paints the single cell under the latest press sample. Cells crossed
    /// between two frames are not filled in.
    fn paint_pressed_cell(&mut self, input: &InputState) {
        if !input.is_pressed() {
            return;
        }
        if let Some(cell) = self.grid.cell_at(input.press_position()) {
            self.grid.set(cell, self.active_color);
        }
    }

    fn draw_grid(&self, canvas: &mut dyn Canvas) {
        for (cell, color) in self.grid.iter() {
            canvas.draw_rect(cell.rect(), &Paint::fill(color));
        }
    }

    fn draw_menu(&self, canvas: &mut dyn Canvas) {
        for (index, color) in PALETTE.iter().enumerate().take(self.menu.tiles()) {
            let tile = self.menu.tile_rect(index);
            canvas.draw_rect(tile, &Paint::fill(*color));
            canvas.draw_rect(tile, &MENU_BORDER);
        }
        canvas.draw_rect(self.menu.rect(), &MENU_BORDER);
    }

    /// Clicks outside the menu are left pending; nothing else consumes them.
    fn consume_menu_click(&mut self, input: &mut InputState) {
        let menu = self.menu;
        if let Some(action) = input
            .take_click_if(|point| menu.contains(point))
            .and_then(|point| menu.hit_test(point))
        {
            self.apply(action);
        }
    }
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for PaintApp {
    fn render(&mut self, canvas: &mut dyn Canvas, input: &mut InputState, _size: Size) {
        self.paint_pressed_cell(input);
        canvas.clear(BACKGROUND);
        self.draw_grid(canvas);
        self.draw_menu(canvas);
        self.consume_menu_click(input);
    }

    fn key_pressed(&mut self, key: KeyCode) -> AppControl {
        match key {
            KeyCode::Escape => AppControl::Exit,
            KeyCode::Other => AppControl::Continue,
        }
    }
}
