//! Screen layout and hit testing
//!
//! Coordinates are y-up with the origin at the bottom-left corner, matching
//! the simulation. The renderer draws these same rectangles.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::skins::{self, SkinDescriptor};

pub const BUTTON_WIDTH: f32 = 220.0;
pub const BUTTON_HEIGHT: f32 = 60.0;
/// Vertical distance between menu buttons
pub const BUTTON_SPACING: f32 = 70.0;

pub const SKIN_ROW_WIDTH: f32 = 380.0;
pub const SKIN_ROW_HEIGHT: f32 = 55.0;
pub const SKIN_ROW_PITCH: f32 = 70.0;
/// Center y of the first shop row
pub const SKIN_LIST_TOP: f32 = SCREEN_HEIGHT - 190.0;

/// A center-based rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Point-in-rect, edges included
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.left() <= x && x <= self.right() && self.bottom() <= y && y <= self.top()
    }
}

/// Main menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Skins,
    Quit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Start, MenuButton::Skins, MenuButton::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Start => "Start",
            MenuButton::Skins => "Skins",
            MenuButton::Quit => "Quit",
        }
    }

    /// Button rectangle, stacked around screen center
    pub fn rect(&self) -> Rect {
        let cx = (SCREEN_WIDTH / 2.0).floor();
        let cy = (SCREEN_HEIGHT / 2.0).floor();
        let offset = match self {
            MenuButton::Start => BUTTON_SPACING,
            MenuButton::Skins => 0.0,
            MenuButton::Quit => -BUTTON_SPACING,
        };
        Rect::new(cx, cy + offset, BUTTON_WIDTH, BUTTON_HEIGHT)
    }
}

/// Button under a click, if any
pub fn menu_hit(x: f32, y: f32) -> Option<MenuButton> {
    MenuButton::ALL.into_iter().find(|b| b.rect().contains(x, y))
}

/// Shop rows as (catalog index, rect), in display order
pub fn skin_rows(skins: &[SkinDescriptor]) -> Vec<(usize, Rect)> {
    skins::display_order(skins)
        .into_iter()
        .enumerate()
        .map(|(row, index)| {
            let y = SKIN_LIST_TOP - row as f32 * SKIN_ROW_PITCH;
            (
                index,
                Rect::new(SCREEN_WIDTH / 2.0, y, SKIN_ROW_WIDTH, SKIN_ROW_HEIGHT),
            )
        })
        .collect()
}

/// Catalog index of the shop row under a click, if any
pub fn skin_hit(skins: &[SkinDescriptor], x: f32, y: f32) -> Option<usize> {
    skin_rows(skins)
        .into_iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_layout() {
        assert_eq!(MenuButton::Start.rect().center, Vec2::new(400.0, 370.0));
        assert_eq!(MenuButton::Skins.rect().center, Vec2::new(400.0, 300.0));
        assert_eq!(MenuButton::Quit.rect().center, Vec2::new(400.0, 230.0));
    }

    #[test]
    fn test_menu_hit() {
        assert_eq!(menu_hit(400.0, 370.0), Some(MenuButton::Start));
        assert_eq!(menu_hit(290.0, 300.0), Some(MenuButton::Skins)); // left edge
        assert_eq!(menu_hit(400.0, 200.0), Some(MenuButton::Quit)); // bottom edge
        assert_eq!(menu_hit(400.0, 335.0), None); // gap between buttons
        assert_eq!(menu_hit(10.0, 10.0), None);
    }

    #[test]
    fn test_skin_hit() {
        let catalog = crate::skins::SkinCatalog::new();
        let catalog = catalog.skins();
        assert_eq!(skin_hit(catalog, 400.0, 410.0), Some(0));
        assert_eq!(skin_hit(catalog, 400.0, 340.0), Some(1));
        assert_eq!(skin_hit(catalog, 400.0, 270.0), Some(2));
        assert_eq!(skin_hit(catalog, 400.0, 200.0), Some(3));
        assert_eq!(skin_hit(catalog, 400.0, 375.0), None);
        assert_eq!(skin_hit(catalog, 100.0, 410.0), None);
    }
}
