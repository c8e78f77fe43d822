use rayon::prelude::*;
use std::{
    fmt::Display,
    ops::{Add, Index},
};
use thiserror::Error;

pub mod patterns;

static DEAD: bool = false;

const NEIGHBORHOOD: [Point; 8] = [
    Point { x: -1, y: -1 },
    Point { x: 0, y: -1 },
    Point { x: 1, y: -1 },
    Point { x: -1, y: 0 },
    Point { x: 1, y: 0 },
    Point { x: -1, y: 1 },
    Point { x: 0, y: 1 },
    Point { x: 1, y: 1 },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds { point: Point, width: u32, height: u32 },
}

/// Fixed-size universe of cells, stored row-major in a flat buffer.
///
/// Everything outside `[0, width) x [0, height)` reads as dead; there is no
/// wraparound.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    next: Vec<bool>,
    width: u32,
    height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}
impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Add for Point {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.x = self.x.saturating_add(rhs.x);
        self.y = self.y.saturating_add(rhs.y);
        self
    }
}
impl<I1, I2> From<(I1, I2)> for Point
where
    I1: Into<i64>,
    I2: Into<i64>,
{
    fn from((l, r): (I1, I2)) -> Self {
        Self {
            x: l.into(),
            y: r.into(),
        }
    }
}

/// Rectangular window onto a grid, in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mask {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}
impl Mask {
    pub fn covering(grid: &Grid) -> Self {
        Mask {
            x: 0,
            y: 0,
            w: grid.width(),
            h: grid.height(),
        }
    }
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn contains(&self, pt: &Point) -> bool {
        pt.x >= self.x as i64
            && pt.x < self.right() as i64
            && pt.y >= self.y as i64
            && pt.y < self.bottom() as i64
    }

    /// Moves the window by `(dx, dy)` while keeping its origin inside a
    /// `width` x `height` grid.
    pub fn pan(&mut self, dx: i64, dy: i64, width: u32, height: u32) {
        let max_x = width.saturating_sub(1) as i64;
        let max_y = height.saturating_sub(1) as i64;
        self.x = (self.x as i64 + dx).clamp(0, max_x) as u32;
        self.y = (self.y as i64 + dy).clamp(0, max_y) as u32;
    }
}
impl Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} -> {}, {} -> {})",
            self.x,
            self.right(),
            self.y,
            self.bottom()
        )
    }
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|len| *len > 0)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Grid {
            cells: vec![false; len],
            next: vec![false; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, pt: &Point) -> bool {
        self.index_of(pt).is_some()
    }

    fn index_of(&self, pt: &Point) -> Option<usize> {
        if pt.x < 0 || pt.y < 0 || pt.x >= self.width as i64 || pt.y >= self.height as i64 {
            return None;
        }
        Some(pt.y as usize * self.width as usize + pt.x as usize)
    }

    fn out_of_bounds(&self, point: Point) -> GridError {
        GridError::OutOfBounds {
            point,
            width: self.width,
            height: self.height,
        }
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self[Point { x, y }]
    }

    pub fn set_alive(&mut self, x: i64, y: i64, alive: bool) -> Result<(), GridError> {
        let pt = Point { x, y };
        let idx = self.index_of(&pt).ok_or_else(|| self.out_of_bounds(pt))?;
        self.cells[idx] = alive;
        Ok(())
    }

    pub fn spawn(&mut self, x: i64, y: i64) -> Result<(), GridError> {
        log::trace!("spawning at ({}, {})", x, y);
        self.set_alive(x, y, true)
    }

    #[allow(dead_code)]
    pub fn kill(&mut self, x: i64, y: i64) -> Result<(), GridError> {
        log::trace!("killing at ({}, {})", x, y);
        self.set_alive(x, y, false)
    }

    /// Spawns every point, or none of them if any falls outside the grid.
    pub fn seed<I>(&mut self, pts: I) -> Result<usize, GridError>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let pts: Vec<Point> = pts.into_iter().map(Into::into).collect();
        if let Some(bad) = pts.iter().find(|pt| !self.contains(pt)) {
            return Err(self.out_of_bounds(*bad));
        }
        for pt in &pts {
            self.spawn(pt.x, pt.y)?;
        }
        Ok(pts.len())
    }

    pub fn neighbor_count(&self, x: i64, y: i64) -> u8 {
        let pt = Point { x, y };
        NEIGHBORHOOD
            .iter()
            .filter(|offset| self[pt + **offset])
            .count() as u8
    }

    fn next_state(&self, x: i64, y: i64) -> bool {
        match self.neighbor_count(x, y) {
            2 => self.is_alive(x, y),
            3 => true,
            _ => false,
        }
    }

    /// Replaces the current generation with the next one. Rows are computed
    /// in parallel into the spare buffer, which then becomes current.
    pub fn advance(&mut self) {
        let mut next = std::mem::take(&mut self.next);
        {
            let current = &*self;
            next.par_chunks_mut(current.width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = current.next_state(x as i64, y as i64);
                    }
                });
        }
        self.next = std::mem::replace(&mut self.cells, next);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|v| **v).count()
    }

    #[allow(dead_code)]
    pub fn live_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| Point {
                x: (i % w) as i64,
                y: (i / w) as i64,
            })
    }
}

impl Index<Point> for Grid {
    type Output = bool;
    fn index(&self, index: Point) -> &Self::Output {
        match self.index_of(&index) {
            Some(idx) => &self.cells[idx],
            None => &DEAD,
        }
    }
}
