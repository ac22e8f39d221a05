//! Draw-list generation
//!
//! Turns a frame snapshot into colored rectangles and text labels. Any
//! backend only has to rasterize these.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Frame, GameMode};
use crate::ui::{self, MenuButton, Rect};

pub type Color = [u8; 4];

pub const RAIL_COLOR: Color = [128, 128, 128, 255];
pub const BOTTOM_OBSTACLE_COLOR: Color = [227, 0, 34, 255];
pub const TOP_OBSTACLE_COLOR: Color = [237, 135, 45, 255];
pub const BUTTON_COLOR: Color = [47, 79, 79, 255];
pub const SELECTED_ROW_COLOR: Color = [1, 50, 32, 255];
pub const OVERLAY_COLOR: Color = [0, 0, 0, 160];

/// Layer hint so backends can pick glyphs/styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadKind {
    Rail,
    Obstacle,
    Player,
    Button,
    Overlay,
}

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: Color,
    pub kind: QuadKind,
}

/// A text label anchored at its center
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub quads: Vec<Quad>,
    pub labels: Vec<Label>,
}

impl DrawList {
    fn quad(&mut self, rect: Rect, color: Color, kind: QuadKind) {
        self.quads.push(Quad { rect, color, kind });
    }

    fn label(&mut self, x: f32, y: f32, text: impl Into<String>) {
        self.labels.push(Label {
            pos: Vec2::new(x, y),
            text: text.into(),
        });
    }
}

fn rgba([r, g, b]: [u8; 3]) -> Color {
    [r, g, b, 255]
}

/// Build the draw list for a frame
pub fn draw_list(frame: &Frame) -> DrawList {
    let mut list = DrawList::default();
    match frame.mode {
        GameMode::Menu => menu(&mut list, frame),
        GameMode::Skins => shop(&mut list, frame),
        GameMode::Playing => playfield(&mut list, frame),
        GameMode::Paused => {
            playfield(&mut list, frame);
            overlay(&mut list);
            list.label(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 40.0, "Paused");
            list.label(
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 - 10.0,
                "ESC - resume | M - menu",
            );
            list.label(
                SCREEN_WIDTH / 2.0,
                SCREEN_HEIGHT / 2.0 - 50.0,
                "Leaving to the menu forfeits this run's coins",
            );
        }
        GameMode::GameOver => {
            playfield(&mut list, frame);
            overlay(&mut list);
            let cx = SCREEN_WIDTH / 2.0;
            let cy = SCREEN_HEIGHT / 2.0;
            list.label(cx, cy + 60.0, "You crashed!");
            list.label(cx, cy + 20.0, format!("Final score: {}", frame.score));
            list.label(cx, cy - 10.0, format!("Coins: {}", frame.coins));
            list.label(cx, cy - 40.0, format!("Best: {}", frame.best_score));
            list.label(cx, cy - 70.0, "Click - play again | ESC - menu");
        }
    }
    list
}

fn menu(list: &mut DrawList, frame: &Frame) {
    list.label(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 120.0, "Sticky Cubes");
    for button in MenuButton::ALL {
        let rect = button.rect();
        list.quad(rect, BUTTON_COLOR, QuadKind::Button);
        list.label(rect.center.x, rect.center.y, button.label());
    }
    list.label(SCREEN_WIDTH / 2.0, 80.0, format!("Coins: {}", frame.coins));
    list.label(SCREEN_WIDTH / 2.0, 40.0, "Click - flip gravity, ESC - pause");
}

fn shop(list: &mut DrawList, frame: &Frame) {
    list.label(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 80.0, "Cube skins");
    list.label(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 130.0, format!("Coins: {}", frame.coins));

    for (index, rect) in ui::skin_rows(&frame.skins) {
        let skin = &frame.skins[index];
        let y = rect.center.y;
        let bg = if index == frame.selected_skin {
            SELECTED_ROW_COLOR
        } else {
            BUTTON_COLOR
        };
        list.quad(rect, bg, QuadKind::Button);
        list.quad(
            Rect::new(rect.left() + 40.0, y, 40.0, 40.0),
            rgba(skin.color),
            QuadKind::Player,
        );
        let status = if skin.owned {
            "owned".to_string()
        } else {
            format!("{} coins", skin.price)
        };
        list.label(
            rect.center.x + 30.0,
            y,
            format!("{} ({}) - {}", skin.name, skin.rarity.as_str(), status),
        );
    }
    list.label(SCREEN_WIDTH / 2.0, 40.0, "ESC - back");
}

fn playfield(list: &mut DrawList, frame: &Frame) {
    let floor = GRAVITY_BOTTOM_Y - PLAYER_SIZE / 2.0;
    let ceiling = GRAVITY_TOP_Y + PLAYER_SIZE / 2.0;
    for y in [floor, ceiling] {
        list.quad(
            Rect::new(SCREEN_WIDTH / 2.0, y, SCREEN_WIDTH, 2.0),
            RAIL_COLOR,
            QuadKind::Rail,
        );
    }

    for obstacle in &frame.obstacles {
        let color = if obstacle.attached_top {
            TOP_OBSTACLE_COLOR
        } else {
            BOTTOM_OBSTACLE_COLOR
        };
        list.quad(
            Rect::new(obstacle.x, obstacle.y, obstacle.width, obstacle.height),
            color,
            QuadKind::Obstacle,
        );
    }

    let skin_color = frame
        .skins
        .get(frame.selected_skin)
        .map(|s| rgba(s.color))
        .unwrap_or([255, 255, 255, 255]);
    list.quad(
        Rect::new(frame.player.x, frame.player.y, PLAYER_SIZE, PLAYER_SIZE),
        skin_color,
        QuadKind::Player,
    );

    list.label(80.0, SCREEN_HEIGHT - 30.0, format!("Score: {}", frame.score));
    list.label(80.0, SCREEN_HEIGHT - 55.0, format!("Best: {}", frame.best_score));
}

fn overlay(list: &mut DrawList) {
    list.quad(
        Rect::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        OVERLAY_COLOR,
        QuadKind::Overlay,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::SaveStore;
    use crate::persistence::tests::temp_save_path;
    use crate::sim::{GameState, Obstacle, RandomSpawns};
    use crate::tuning::Tuning;

    fn frame(mode: GameMode) -> Frame {
        let mut state = GameState::new(
            &Tuning::default(),
            SaveStore::new(temp_save_path("shapes")),
            RandomSpawns::new(1),
        );
        state.mode = mode;
        state.field.push(Obstacle::spawn(80.0, true));
        state.frame()
    }

    #[test]
    fn test_playfield_quads() {
        let list = draw_list(&frame(GameMode::Playing));
        let count = |kind: QuadKind| list.quads.iter().filter(|q| q.kind == kind).count();
        assert_eq!(count(QuadKind::Rail), 2);
        assert_eq!(count(QuadKind::Obstacle), 1);
        assert_eq!(count(QuadKind::Player), 1);
        assert_eq!(count(QuadKind::Overlay), 0);

        let obstacle = list.quads.iter().find(|q| q.kind == QuadKind::Obstacle).unwrap();
        assert_eq!(obstacle.color, TOP_OBSTACLE_COLOR);
    }

    #[test]
    fn test_game_over_overlays_frozen_field() {
        let list = draw_list(&frame(GameMode::GameOver));
        assert!(list.quads.iter().any(|q| q.kind == QuadKind::Obstacle));
        assert_eq!(list.quads.last().unwrap().kind, QuadKind::Overlay);
        assert!(list.labels.iter().any(|l| l.text == "You crashed!"));
    }

    #[test]
    fn test_menu_has_buttons() {
        let list = draw_list(&frame(GameMode::Menu));
        assert_eq!(list.quads.len(), 3);
        assert!(list.labels.iter().any(|l| l.text == "Start"));
    }

    #[test]
    fn test_shop_highlights_selection() {
        let list = draw_list(&frame(GameMode::Skins));
        let rows: Vec<_> = list.quads.iter().filter(|q| q.kind == QuadKind::Button).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].color, SELECTED_ROW_COLOR);
        assert_eq!(rows[1].color, BUTTON_COLOR);
    }
}
