use crate::gol::{Grid, Mask, Point};

// Indexed by a 4-bit mask: 1 top left, 2 top right, 4 bottom left, 8 bottom right.
const QUADRANTS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];
const CORNERS: [(i64, i64); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// A view of part of a grid, folded into one glyph per 2x2 block of cells.
pub struct Frame<'a> {
    grid: &'a Grid,
    view: Mask,
}

impl<'a> Frame<'a> {
    pub fn new(grid: &'a Grid, view: Mask) -> Self {
        Self { grid, view }
    }

    /// Terminal-sized columns and rows needed to show the view.
    #[allow(dead_code)]
    pub fn size(&self) -> (u32, u32) {
        ((self.view.w + 1) / 2, (self.view.h + 1) / 2)
    }

    fn glyph(&self, x: i64, y: i64) -> char {
        let bits = CORNERS
            .iter()
            .enumerate()
            .filter(|(_, (ox, oy))| {
                let pt = Point {
                    x: x + ox,
                    y: y + oy,
                };
                self.view.contains(&pt) && self.grid[pt]
            })
            .fold(0, |acc, (bit, _)| acc | 1 << bit);
        QUADRANTS[bits]
    }

    /// Non-blank glyphs with their position relative to the view's origin.
    pub fn render(&self) -> Vec<(Point, char)> {
        (self.view.y..self.view.bottom())
            .step_by(2)
            .flat_map(|y| {
                (self.view.x..self.view.right()).step_by(2).map(move |x| {
                    let pos = Point {
                        x: ((x - self.view.x) / 2) as i64,
                        y: ((y - self.view.y) / 2) as i64,
                    };
                    (pos, self.glyph(x as i64, y as i64))
                })
            })
            .filter(|(_, ch)| *ch != ' ')
            .collect()
    }

    pub fn lines(&self) -> Vec<String> {
        (self.view.y..self.view.bottom())
            .step_by(2)
            .map(|y| {
                (self.view.x..self.view.right())
                    .step_by(2)
                    .map(|x| self.glyph(x as i64, y as i64))
                    .collect()
            })
            .collect()
    }
}
