//! Character-grid backend
//!
//! Rasterizes a draw list into a fixed grid of characters. Used by the
//! headless demo and handy for eyeballing state in logs.

use super::Renderer;
use super::shapes::{DrawList, QuadKind};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Frame;

pub const COLS: usize = 80;
pub const ROWS: usize = 24;

/// Renders frames as text
#[derive(Debug, Default)]
pub struct TextRenderer {
    last: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame
    pub fn output(&self) -> &str {
        &self.last
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Frame) {
        self.last = rasterize(&super::shapes::draw_list(frame));
    }
}

fn col(x: f32) -> isize {
    (x / SCREEN_WIDTH * COLS as f32).floor() as isize
}

fn row(y: f32) -> isize {
    // y-up world, row 0 at the top
    ROWS as isize - 1 - (y / SCREEN_HEIGHT * ROWS as f32).floor() as isize
}

fn glyph(kind: QuadKind) -> Option<char> {
    match kind {
        QuadKind::Rail => Some('-'),
        QuadKind::Obstacle => Some('#'),
        QuadKind::Player => Some('@'),
        QuadKind::Button => Some('.'),
        QuadKind::Overlay => None,
    }
}

/// Draw a list onto a `COLS`×`ROWS` grid
pub fn rasterize(list: &DrawList) -> String {
    let mut grid = vec![vec![' '; COLS]; ROWS];

    let mut put = |c: isize, r: isize, ch: char| {
        if (0..COLS as isize).contains(&c) && (0..ROWS as isize).contains(&r) {
            grid[r as usize][c as usize] = ch;
        }
    };

    for quad in &list.quads {
        let Some(ch) = glyph(quad.kind) else {
            continue;
        };
        let (c0, c1) = (col(quad.rect.left()), col(quad.rect.right() - 0.01));
        let (r0, r1) = (row(quad.rect.top() - 0.01), row(quad.rect.bottom()));
        for r in r0..=r1 {
            for c in c0..=c1 {
                put(c, r, ch);
            }
        }
    }

    for label in &list.labels {
        let len = label.text.chars().count() as isize;
        let start = col(label.pos.x) - len / 2;
        let r = row(label.pos.y);
        for (i, ch) in label.text.chars().enumerate() {
            put(start + i as isize, r, ch);
        }
    }

    let mut out = String::with_capacity((COLS + 1) * ROWS);
    for line in grid {
        let line: String = line.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
