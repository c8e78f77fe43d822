use anyhow::Result;

use crate::gol::Grid;

pub mod curses;
pub mod plain;

pub trait Renderer {
    fn running(&self) -> bool;
    /// Handles pending input without blocking.
    fn poll(&mut self, grid_width: u32, grid_height: u32);
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()>;
}
